//! # REST API Handler
//!
//! The four customer operations, independent of HTTP. The router calls
//! these with already-parsed parameters and serializes whatever comes back.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::storage::{Customer, CustomerStore};

use super::errors::{RestError, RestResult};
use super::parser::QueryParams;
use super::validator::{validate_new_customer, NewCustomer};

/// Customer operations exposed by the API
pub trait CustomerHandler: Send + Sync {
    /// Filtered, paginated records in store order
    fn search(&self, params: &QueryParams) -> RestResult<Vec<Customer>>;

    /// Single record by id
    fn get(&self, id: i64) -> RestResult<Customer>;

    /// Number of records per distinct city
    fn city_counts(&self) -> RestResult<BTreeMap<String, usize>>;

    /// Validate and append a new record
    fn create(&self, candidate: NewCustomer) -> RestResult<Customer>;
}

/// Handler backed by an in-memory [`CustomerStore`]
#[derive(Debug, Clone)]
pub struct StoreHandler {
    store: Arc<CustomerStore>,
}

impl StoreHandler {
    pub fn new(store: Arc<CustomerStore>) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<CustomerStore> {
        &self.store
    }
}

impl CustomerHandler for StoreHandler {
    fn search(&self, params: &QueryParams) -> RestResult<Vec<Customer>> {
        let records = self.store.read()?;
        let (start, end) = params.window();

        // Filtering is lazy; only the requested window is cloned.
        let page = records
            .iter()
            .filter(|c| params.filters.matches(c))
            .skip(start)
            .take(end - start)
            .cloned()
            .collect();

        Ok(page)
    }

    fn get(&self, id: i64) -> RestResult<Customer> {
        self.store.find(id)?.ok_or_else(|| {
            tracing::debug!(id, "customer lookup missed");
            RestError::NotFound
        })
    }

    fn city_counts(&self) -> RestResult<BTreeMap<String, usize>> {
        let records = self.store.read()?;

        let mut counts = BTreeMap::new();
        for customer in records.iter() {
            *counts.entry(customer.city.clone()).or_insert(0) += 1;
        }

        Ok(counts)
    }

    fn create(&self, candidate: NewCustomer) -> RestResult<Customer> {
        // Held across validation and append so concurrent creates serialize.
        let mut records = self.store.write()?;

        let customer = validate_new_customer(candidate, records.records()).map_err(|err| {
            tracing::warn!(reason = %err, "rejected new customer");
            err
        })?;

        records.append(customer.clone());
        tracing::info!(
            id = customer.id,
            city = %customer.city,
            company = %customer.company,
            "customer created"
        );

        Ok(customer)
    }
}
