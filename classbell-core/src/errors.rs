use std::io;

use classbell_schedule::ScheduleError;
use thiserror::Error;

/// Result type used across the Classbell core crate.
pub type Result<T> = std::result::Result<T, ClassbellError>;

/// Canonical error representation shared by every Classbell crate.
#[derive(Debug, Error)]
pub enum ClassbellError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid schedule input: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("refresh driver error: {0}")]
    Refresh(String),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Dedicated configuration error used by the configuration module.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("invalid value for {key}: {source}")]
    InvalidLocale {
        key: String,
        #[source]
        source: ScheduleError,
    },
}

impl ConfigError {
    pub fn invalid(key: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

impl From<ConfigError> for ClassbellError {
    fn from(value: ConfigError) -> Self {
        ClassbellError::Config(value.to_string())
    }
}
