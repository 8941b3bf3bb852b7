//! Crate-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("malformed value for '{key}': {value:?} ({reason})")]
    MalformedValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("store error: {0}")]
    Store(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PrefsError {
    pub(crate) fn malformed(key: &str, value: &str, reason: impl ToString) -> Self {
        Self::MalformedValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
