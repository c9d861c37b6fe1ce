//! Shared core for the item CRUD Lambda functions: configuration, the
//! store abstraction over DynamoDB, and the request handlers themselves.

pub mod config;
pub mod error;
pub mod handlers;
pub mod item;
pub mod response;
pub mod store;

pub use config::HandlerConfig;
pub use error::{ConfigError, StoreError};
pub use item::ItemRecord;
pub use store::{DynamoDbStore, ItemStore, MemoryStore};
