//! Session storage error types.
//!
//! Storage errors are never fatal to the client: the session manager logs them and keeps its
//! in-memory state authoritative. They are surfaced so storage implementations can be tested.

use thiserror::Error;

/// Durable session storage error.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read or write the backing storage file.
    #[error("Failed to access session storage at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The storage file exists but does not contain a valid JSON object.
    #[error("Failed to serialize/deserialize session storage: {0}")]
    Serialization(#[from] serde_json::Error),
}
