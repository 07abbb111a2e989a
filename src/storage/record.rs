//! Customer record type
//!
//! A record is the unit held by the store. Field values are kept exactly
//! as supplied; nothing is normalised or generated.

use serde::{Deserialize, Serialize};

/// A single customer entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Caller-supplied identifier, unique within a store
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub company: String,
}

impl Customer {
    /// Create a new customer record
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        city: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            city: city.into(),
            company: company.into(),
        }
    }

    /// Returns the name of the first empty text field, if any.
    pub fn first_empty_field(&self) -> Option<&'static str> {
        [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("city", &self.city),
            ("company", &self.company),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
    }
}
