//! Error types for the FAQ assistant

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for assistant operations
pub type Result<T> = std::result::Result<T, Error>;

/// FAQ assistant errors
#[derive(Debug, Error)]
pub enum Error {
    /// Persisted knowledge file exists but could not be read or parsed
    #[error("Knowledge store '{}' is corrupt: {message}", .path.display())]
    StoreCorrupt { path: PathBuf, message: String },

    /// Persisting the knowledge base failed
    #[error("Could not write knowledge store '{}': {source}", .path.display())]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Knowledge base could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a store corruption error
    pub fn store_corrupt(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::StoreCorrupt {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a store write error
    pub fn store_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StoreWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error is a persistence failure the learner may downgrade
    pub fn is_store_write(&self) -> bool {
        matches!(self, Self::StoreWrite { .. })
    }
}
