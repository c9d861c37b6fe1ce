//! One module per Lambda function. Each handler is a single linear
//! validate, call, map sequence over an [`ItemStore`](crate::ItemStore).

pub mod create;
pub mod delete;
pub mod get;
