//! Error type for [`MessageStore`](crate::store::MessageStore) operations.

use std::path::PathBuf;

use thiserror::Error;

/// Everything a store operation can fail with.
///
/// Failed operations never touch the in-memory state, so callers can report
/// the error and keep using the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("system message with role '{role}' already exists")]
    AlreadyExists { role: String },

    #[error("no system message with role '{role}'")]
    NotFound { role: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize system messages: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{} has no 'default' system message", .path.display())]
    MissingDefault { path: PathBuf },

    #[error("filename must have a .json extension: {}", .path.display())]
    InvalidExtension { path: PathBuf },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
