//! # Search Filters
//!
//! Substring predicates over customer fields. Matching is case-sensitive
//! containment, never equality.

use crate::storage::Customer;

/// Customer fields that can be searched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    FirstName,
    LastName,
    City,
}

impl FilterField {
    /// Query parameter name for this field
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::FirstName => "first_name",
            FilterField::LastName => "last_name",
            FilterField::City => "city",
        }
    }

    /// Fields in the order their filters are applied
    pub fn all() -> [FilterField; 3] {
        [FilterField::FirstName, FilterField::LastName, FilterField::City]
    }

    fn value<'a>(&self, customer: &'a Customer) -> &'a str {
        match self {
            FilterField::FirstName => &customer.first_name,
            FilterField::LastName => &customer.last_name,
            FilterField::City => &customer.city,
        }
    }
}

/// A single "field contains substring" predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: FilterField,
    pub needle: String,
}

impl FieldFilter {
    pub fn contains(field: FilterField, needle: impl Into<String>) -> Self {
        Self {
            field,
            needle: needle.into(),
        }
    }

    /// Check if a customer matches this filter
    pub fn matches(&self, customer: &Customer) -> bool {
        self.field.value(customer).contains(self.needle.as_str())
    }
}

/// A set of filters combined with AND logic
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub filters: Vec<FieldFilter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, filter: FieldFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Build a filter set from optional criteria.
    ///
    /// Absent and empty criteria impose no restriction. Filters are kept in
    /// first_name, last_name, city order.
    pub fn from_criteria(
        first_name: Option<&str>,
        last_name: Option<&str>,
        city: Option<&str>,
    ) -> Self {
        FilterField::all()
            .into_iter()
            .zip([first_name, last_name, city])
            .filter_map(|(field, needle)| match needle {
                Some(needle) if !needle.is_empty() => Some(FieldFilter::contains(field, needle)),
                _ => None,
            })
            .fold(FilterSet::new(), FilterSet::and)
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Check if a customer matches all filters
    pub fn matches(&self, customer: &Customer) -> bool {
        self.filters.iter().all(|f| f.matches(customer))
    }
}
