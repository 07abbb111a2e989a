//! Storage error types
//!
//! Raised while loading the seed dataset. A seed that breaks the store
//! invariants is never partially loaded.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors produced while building a store from a seed dataset
#[derive(Debug, Error)]
pub enum StorageError {
    /// Seed file could not be read
    #[error("Failed to read seed data {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Seed data is not a JSON array of customer records
    #[error("Invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two seed records share an id
    #[error("Duplicate customer id {0} in seed data")]
    DuplicateId(i64),

    /// A seed record has a zero id or an empty field
    #[error("Invalid customer record {id}: {reason}")]
    InvalidRecord { id: i64, reason: String },

    /// A thread panicked while holding the store lock
    #[error("Store lock poisoned")]
    LockPoisoned,
}
