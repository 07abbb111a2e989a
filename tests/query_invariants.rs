//! Query Engine Invariant Tests
//!
//! Checks search and city aggregation over the bundled dataset:
//! - Unfiltered listing reproduces the store in insertion order
//! - Every result satisfies every filter; nothing matching is dropped
//! - Filters compose conjunctively
//! - Consecutive pages tile the filtered results with no gaps or repeats
//! - City counts sum to the store size

use std::collections::BTreeMap;
use std::sync::Arc;

use customer_directory::rest_api::{
    CustomerHandler, FieldFilter, FilterField, FilterSet, QueryParams, StoreHandler,
};
use customer_directory::storage::{load_seed, Customer};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_handler() -> (StoreHandler, Vec<Customer>) {
    let store = Arc::new(load_seed(None).unwrap());
    let all = store.scan().unwrap();
    (StoreHandler::new(store), all)
}

fn query(filters: FilterSet, page: usize, limit: usize) -> QueryParams {
    QueryParams {
        filters,
        page,
        limit,
    }
}

/// Substrings drawn from the dataset plus a few that match nothing
fn probes(all: &[Customer]) -> Vec<String> {
    let mut probes: Vec<String> = all
        .iter()
        .flat_map(|c| {
            [
                c.first_name.chars().take(2).collect::<String>(),
                c.last_name.chars().skip(1).take(2).collect::<String>(),
                c.city.chars().take(3).collect::<String>(),
            ]
        })
        .collect();
    probes.extend(["a".to_string(), "zzz".to_string(), "E".to_string()]);
    probes.sort();
    probes.dedup();
    probes
}

// =============================================================================
// Listing
// =============================================================================

#[test]
fn test_unfiltered_listing_is_store_order() {
    let (handler, all) = setup_handler();

    let results = handler.search(&query(FilterSet::new(), 1, all.len())).unwrap();
    assert_eq!(results, all);

    let results = handler.search(&query(FilterSet::new(), 1, all.len() + 50)).unwrap();
    assert_eq!(results, all);
}

#[test]
fn test_default_page_is_first_ten() {
    let (handler, all) = setup_handler();

    let results = handler.search(&QueryParams::default()).unwrap();
    assert_eq!(results, all.iter().take(10).cloned().collect::<Vec<_>>());
}

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn test_filter_soundness_and_completeness() {
    let (handler, all) = setup_handler();

    for field in FilterField::all() {
        for probe in probes(&all) {
            let filter = FieldFilter::contains(field, probe.clone());
            let results = handler
                .search(&query(FilterSet::new().and(filter.clone()), 1, usize::MAX))
                .unwrap();

            let expected: Vec<Customer> =
                all.iter().filter(|c| filter.matches(c)).cloned().collect();
            assert_eq!(results, expected, "field {:?} probe {:?}", field, probe);
        }
    }
}

#[test]
fn test_filters_compose_conjunctively() {
    let (handler, all) = setup_handler();

    for first in probes(&all) {
        for city in ["Pu", "Mum", "e", "zzz"] {
            let by_first = FilterSet::new()
                .and(FieldFilter::contains(FilterField::FirstName, first.clone()));
            let by_city = FilterSet::new().and(FieldFilter::contains(FilterField::City, city));
            let both = FilterSet::from_criteria(Some(first.as_str()), None, Some(city));

            let a = handler.search(&query(by_first, 1, usize::MAX)).unwrap();
            let b = handler.search(&query(by_city, 1, usize::MAX)).unwrap();
            let combined = handler.search(&query(both, 1, usize::MAX)).unwrap();

            for record in &combined {
                assert!(a.contains(record));
                assert!(b.contains(record));
            }
            let intersection = a.iter().filter(|r| b.contains(r)).count();
            assert_eq!(combined.len(), intersection);
        }
    }
}

// =============================================================================
// Pagination
// =============================================================================

#[test]
fn test_pages_tile_results() {
    let (handler, all) = setup_handler();
    let filters = FilterSet::from_criteria(None, None, Some("u"));
    let full = handler.search(&query(filters.clone(), 1, usize::MAX)).unwrap();

    for limit in 1..=7 {
        let mut concatenated = Vec::new();
        let mut page = 1;
        loop {
            let chunk = handler.search(&query(filters.clone(), page, limit)).unwrap();
            if chunk.is_empty() {
                break;
            }
            assert!(chunk.len() <= limit);
            concatenated.extend(chunk);
            page += 1;
        }
        assert_eq!(concatenated, full, "limit {}", limit);

        let k = page - 1;
        let single = handler.search(&query(filters.clone(), 1, k * limit)).unwrap();
        assert_eq!(single, full);
    }

    assert!(full.len() <= all.len());
}

#[test]
fn test_page_beyond_results_is_empty() {
    let (handler, all) = setup_handler();

    let results = handler.search(&query(FilterSet::new(), all.len() + 1, 1)).unwrap();
    assert!(results.is_empty());

    let results = handler.search(&query(FilterSet::new(), 2, all.len())).unwrap();
    assert!(results.is_empty());
}

// =============================================================================
// City Aggregation
// =============================================================================

#[test]
fn test_city_counts_sum_to_store_size() {
    let (handler, all) = setup_handler();

    let counts = handler.city_counts().unwrap();
    assert_eq!(counts.values().sum::<usize>(), all.len());

    let mut expected: BTreeMap<String, usize> = BTreeMap::new();
    for customer in &all {
        *expected.entry(customer.city.clone()).or_default() += 1;
    }
    assert_eq!(counts, expected);
}
