use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use thiserror::Error;

/// A required environment variable is unset or blank.
///
/// This signals a deployment defect, not a per-request condition: it must
/// abort initialization rather than be mapped to an HTTP response.
#[derive(Debug, Error)]
#[error("{0} environment variable must be set")]
pub struct ConfigError(pub(crate) &'static str);

/// A failure reported by the backing store or by item conversion.
///
/// Carries the store's message verbatim; handlers surface it in the 500
/// response body of this internal API.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StoreError(String);

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl<E, R> From<SdkError<E, R>> for StoreError
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    fn from(err: SdkError<E, R>) -> Self {
        // DisplayErrorContext includes the service error message, which a
        // bare Display of SdkError omits.
        Self(DisplayErrorContext(&err).to_string())
    }
}

impl From<serde_dynamo::Error> for StoreError {
    fn from(err: serde_dynamo::Error) -> Self {
        Self(err.to_string())
    }
}
