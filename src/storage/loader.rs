//! Seed dataset loading
//!
//! The initial store contents come from a JSON array of five-field customer
//! objects, either a file on disk or the dataset bundled with the crate.
//! Seeds must already satisfy the store invariants: unique non-zero ids and
//! no empty text fields.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::errors::{StorageError, StorageResult};
use super::memory::CustomerStore;
use super::record::Customer;

/// Dataset shipped with the crate, used when no seed path is configured
pub const EMBEDDED_SEED: &str = include_str!("../../data/customers.json");

/// Parse a seed document into records, in document order
pub fn parse_seed(json: &str) -> StorageResult<Vec<Customer>> {
    Ok(serde_json::from_str(json)?)
}

/// Verify that seed records satisfy the store invariants
pub fn check_seed(records: &[Customer]) -> StorageResult<()> {
    let mut seen = HashSet::with_capacity(records.len());

    for record in records {
        if record.id == 0 {
            return Err(StorageError::InvalidRecord {
                id: record.id,
                reason: "id must be non-zero".to_string(),
            });
        }
        if let Some(field) = record.first_empty_field() {
            return Err(StorageError::InvalidRecord {
                id: record.id,
                reason: format!("empty {}", field),
            });
        }
        if !seen.insert(record.id) {
            return Err(StorageError::DuplicateId(record.id));
        }
    }

    Ok(())
}

/// Build a store from a seed document
pub fn load_seed_str(json: &str) -> StorageResult<CustomerStore> {
    let records = parse_seed(json)?;
    check_seed(&records)?;
    Ok(CustomerStore::new(records))
}

/// Build a store from a seed file on disk
pub fn load_seed_file(path: &Path) -> StorageResult<CustomerStore> {
    let content = fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_seed_str(&content)
}

/// Build a store from `path`, or from the embedded dataset when `None`
pub fn load_seed(path: Option<&Path>) -> StorageResult<CustomerStore> {
    match path {
        Some(path) => load_seed_file(path),
        None => load_seed_str(EMBEDDED_SEED),
    }
}
