use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_dynamo::aws_sdk_dynamodb_1::{from_item, to_item};

use crate::config::HandlerConfig;
use crate::error::StoreError;
use crate::item::ItemRecord;
use crate::store::ItemStore;

/// Single-item operations against one DynamoDB table. Holds the shared SDK
/// client; cheap to clone and safe for concurrent invocations.
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
    primary_key: String,
}

impl DynamoDbStore {
    pub fn new(client: Client, config: &HandlerConfig) -> Self {
        Self {
            client,
            table_name: config.table_name.clone(),
            primary_key: config.primary_key.clone(),
        }
    }

    fn key(&self, id: &str) -> (String, AttributeValue) {
        (self.primary_key.clone(), AttributeValue::S(id.to_string()))
    }
}

#[async_trait]
impl ItemStore for DynamoDbStore {
    async fn put(&self, item: &ItemRecord) -> Result<(), StoreError> {
        let attributes = to_item(item)?;
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(attributes))
            .send()
            .await?;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<ItemRecord>, StoreError> {
        let (name, value) = self.key(id);
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(name, value)
            .send()
            .await?;

        match output.item {
            // serde_dynamo keeps N attributes as JSON numbers.
            Some(attributes) => Ok(Some(from_item(attributes)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let (name, value) = self.key(id);
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(name, value)
            .send()
            .await?;
        // The SDK folds non-success HTTP statuses into Err, so reaching
        // here means the store reported the delete as applied.
        Ok(true)
    }
}
