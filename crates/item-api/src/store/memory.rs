use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::item::ItemRecord;
use crate::store::ItemStore;

/// In-memory store for tests and local runs. Items are keyed by the
/// stringified primary-key attribute; nothing is persisted.
///
/// Unlike DynamoDB, `delete` reports unacknowledged when the key was
/// absent, which makes the handlers' not-found mapping reachable in tests.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    primary_key: String,
    items: Arc<RwLock<HashMap<String, ItemRecord>>>,
}

impl MemoryStore {
    pub fn new(primary_key: &str) -> Self {
        Self {
            primary_key: primary_key.to_string(),
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn key_of(&self, item: &ItemRecord) -> Result<String, StoreError> {
        match item.get(&self.primary_key) {
            Some(Value::String(id)) => Ok(id.clone()),
            Some(value) => Ok(value.to_string()),
            None => Err(StoreError::new(format!(
                "item is missing the {} key attribute",
                self.primary_key
            ))),
        }
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn put(&self, item: &ItemRecord) -> Result<(), StoreError> {
        let id = self.key_of(item)?;
        let mut items = self.items.write().await;
        items.insert(id, item.clone());
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<ItemRecord>, StoreError> {
        let items = self.items.read().await;
        Ok(items.get(id).cloned())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut items = self.items.write().await;
        Ok(items.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget() -> ItemRecord {
        json!({"id": "42", "name": "widget", "count": 5})
            .as_object()
            .cloned()
            .unwrap()
    }

    #[tokio::test]
    async fn put_then_get_returns_the_same_item() {
        let store = MemoryStore::new("id");
        store.put(&widget()).await.unwrap();

        let item = store.get("42").await.unwrap().unwrap();
        assert_eq!(item, widget());
        assert_eq!(item.get("count"), Some(&json!(5)));
    }

    #[tokio::test]
    async fn put_overwrites_an_existing_item() {
        let store = MemoryStore::new("id");
        store.put(&widget()).await.unwrap();

        let replacement = json!({"id": "42", "name": "gadget"})
            .as_object()
            .cloned()
            .unwrap();
        store.put(&replacement).await.unwrap();

        assert_eq!(store.get("42").await.unwrap().unwrap(), replacement);
    }

    #[tokio::test]
    async fn get_of_unknown_id_is_none() {
        let store = MemoryStore::new("id");
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_acknowledges_only_existing_items() {
        let store = MemoryStore::new("id");
        store.put(&widget()).await.unwrap();

        assert!(store.delete("42").await.unwrap());
        assert!(!store.delete("42").await.unwrap());
        assert!(store.get("42").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn put_without_the_key_attribute_fails() {
        let store = MemoryStore::new("id");
        let item = json!({"name": "widget"}).as_object().cloned().unwrap();

        let err = store.put(&item).await.unwrap_err();
        assert_eq!(err.to_string(), "item is missing the id key attribute");
    }
}
