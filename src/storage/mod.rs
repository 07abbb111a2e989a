//! Customer storage subsystem
//!
//! Holds the ordered collection of customer records for the lifetime of the
//! process. Records are loaded once from a seed dataset and afterwards only
//! appended.
//!
//! # Invariants
//!
//! - Ids are unique across the store
//! - No accepted record has a zero id or an empty field
//! - Iteration order is insertion order

mod errors;
mod loader;
mod memory;
mod record;

pub use errors::{StorageError, StorageResult};
pub use loader::{check_seed, load_seed, load_seed_file, load_seed_str, parse_seed, EMBEDDED_SEED};
pub use memory::{CustomerStore, StoreReadGuard, StoreWriteGuard};
pub use record::Customer;
