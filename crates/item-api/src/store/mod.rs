//! The single-item store seam. Handlers depend on [`ItemStore`] only;
//! production wires in [`DynamoDbStore`], tests use [`MemoryStore`].

mod dynamodb;
mod memory;

pub use dynamodb::DynamoDbStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::item::ItemRecord;

#[async_trait]
pub trait ItemStore {
    /// Unconditional upsert of the whole item; an existing item with the
    /// same key is silently overwritten.
    async fn put(&self, item: &ItemRecord) -> Result<(), StoreError>;

    /// Fetches the item whose primary-key attribute equals `id`.
    async fn get(&self, id: &str) -> Result<Option<ItemRecord>, StoreError>;

    /// Deletes by key. The boolean reports whether the store acknowledged
    /// the delete; DynamoDB acknowledges even when the key was absent.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}
