use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a [`KeyValueStore`](super::KeyValueStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access store file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store file '{path}' is not a string map: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Store unavailable: {reason}")]
    Unavailable { reason: String },
}
