//! In-memory customer store
//!
//! Records live in insertion order for the lifetime of the store. The only
//! mutation is `append`; nothing is updated or removed in place.
//!
//! Reads share the lock. A caller that must validate against the current
//! contents and then append (record creation) takes the write guard once
//! and does both under it, so no other writer can interleave.

use std::ops::Deref;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{StorageError, StorageResult};
use super::record::Customer;

/// Ordered, append-only collection of customer records
#[derive(Debug, Default)]
pub struct CustomerStore {
    records: RwLock<Vec<Customer>>,
}

impl CustomerStore {
    /// Create a store holding `records` in the given order.
    ///
    /// No invariant checks are made here; seed data should go through
    /// [`check_seed`](crate::storage::check_seed) first.
    pub fn new(records: Vec<Customer>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Shared read access to the current contents
    pub fn read(&self) -> StorageResult<StoreReadGuard<'_>> {
        let guard = self.records.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(StoreReadGuard { guard })
    }

    /// Exclusive access for a validate-then-append sequence
    pub fn write(&self) -> StorageResult<StoreWriteGuard<'_>> {
        let guard = self.records.write().map_err(|_| StorageError::LockPoisoned)?;
        Ok(StoreWriteGuard { guard })
    }

    /// Full contents in insertion order
    pub fn scan(&self) -> StorageResult<Vec<Customer>> {
        Ok(self.read()?.to_vec())
    }

    /// Append a record at the end of the store
    pub fn append(&self, customer: Customer) -> StorageResult<()> {
        self.write()?.append(customer);
        Ok(())
    }

    /// First record with the given id
    pub fn find(&self, id: i64) -> StorageResult<Option<Customer>> {
        Ok(self.read()?.iter().find(|c| c.id == id).cloned())
    }

    pub fn len(&self) -> StorageResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.read()?.is_empty())
    }
}

/// Read guard exposing the records as a slice
pub struct StoreReadGuard<'a> {
    guard: RwLockReadGuard<'a, Vec<Customer>>,
}

impl Deref for StoreReadGuard<'_> {
    type Target = [Customer];

    fn deref(&self) -> &[Customer] {
        &self.guard
    }
}

/// Write guard that only permits appending
pub struct StoreWriteGuard<'a> {
    guard: RwLockWriteGuard<'a, Vec<Customer>>,
}

impl StoreWriteGuard<'_> {
    /// Records as of this guard, including anything appended through it
    pub fn records(&self) -> &[Customer] {
        &self.guard
    }

    pub fn append(&mut self, customer: Customer) {
        self.guard.push(customer);
    }
}
