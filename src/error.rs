//! Storage error types
//!
//! None of these reach the user: loads fall back to empty data and saves
//! are logged.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Local storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage access failed for '{key}': {message}")]
    Access { key: String, message: String },

    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Decode error for '{key}'")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    pub fn access(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Access {
            key: key.into(),
            message: message.into(),
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;
