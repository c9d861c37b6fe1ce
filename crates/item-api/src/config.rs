use crate::error::ConfigError;

/// Per-function configuration, loaded from the Lambda environment once at
/// startup and shared by reference across invocations.
#[derive(Debug, Clone)]
pub struct HandlerConfig {
    /// Name of the backing DynamoDB table.
    pub table_name: String,
    /// Attribute name used as the table's partition key.
    pub primary_key: String,
}

impl HandlerConfig {
    /// Reads `TABLE_NAME` and `PRIMARY_KEY`. Both are required; a missing
    /// or blank value is a wiring defect and fails initialization.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            table_name: required_var("TABLE_NAME")?,
            primary_key: required_var("PRIMARY_KEY")?,
        })
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError(name)),
    }
}
