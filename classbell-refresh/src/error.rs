use classbell_core::ClassbellError;
use thiserror::Error;

/// Errors raised while building or tearing down the refresh driver.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("refresh interval must be greater than zero")]
    ZeroInterval,
    #[error("refresh task failed: {0}")]
    TaskFailed(String),
}

impl From<RefreshError> for ClassbellError {
    fn from(value: RefreshError) -> Self {
        ClassbellError::Refresh(value.to_string())
    }
}
