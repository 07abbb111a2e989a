//! # Query Parameter Parser
//!
//! Turns raw query and path strings into typed search parameters.
//!
//! Numeric parameters are lenient: a leading integer is taken from the text
//! and anything after it is ignored. Values that cannot be read, or that are
//! not positive, fall back to defaults instead of failing the request.

use std::collections::HashMap;

use super::filter::{FilterField, FilterSet};

/// Page used when `page` is absent or invalid
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when `limit` is absent or invalid
pub const DEFAULT_LIMIT: usize = 10;

/// Parsed search parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    /// Substring filters, applied in field order
    pub filters: FilterSet,

    /// 1-based page number
    pub page: usize,

    /// Records per page
    pub limit: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            filters: FilterSet::new(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl QueryParams {
    /// Parse query parameters from a HashMap.
    ///
    /// Unknown keys are ignored. This never fails.
    pub fn parse(params: &HashMap<String, String>) -> Self {
        let criterion = |field: FilterField| params.get(field.as_str()).map(String::as_str);

        Self {
            filters: FilterSet::from_criteria(
                criterion(FilterField::FirstName),
                criterion(FilterField::LastName),
                criterion(FilterField::City),
            ),
            page: parse_positive(params.get("page"), DEFAULT_PAGE),
            limit: parse_positive(params.get("limit"), DEFAULT_LIMIT),
        }
    }

    /// Parse query parameters from raw key/value pairs in request order.
    ///
    /// When a key repeats, its first value is used.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = HashMap::new();
        for (key, value) in pairs {
            params.entry(key).or_insert(value);
        }
        Self::parse(&params)
    }

    /// Half-open index range `[start, end)` of this page within the
    /// filtered results
    pub fn window(&self) -> (usize, usize) {
        let start = (self.page - 1).saturating_mul(self.limit);
        let end = start.saturating_add(self.limit);
        (start, end)
    }
}

/// Parse a customer id from a path segment.
///
/// Returns `None` when no leading integer can be read.
pub fn parse_id(value: &str) -> Option<i64> {
    parse_leading_int(value)
}

/// Parse a positive count, falling back to `default`
fn parse_positive(value: Option<&String>, default: usize) -> usize {
    value
        .and_then(|v| parse_leading_int(v))
        .filter(|n| *n > 0)
        .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
        .unwrap_or(default)
}

/// Read the leading integer of `value`.
///
/// Accepts optional leading whitespace and a single sign, then the longest
/// run of ASCII digits. Out-of-range values saturate.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let rest = value.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut seen = false;
    let mut acc: i64 = 0;

    for d in digits {
        seen = true;
        let d = i64::from(d - b'0');
        acc = if negative {
            acc.saturating_mul(10).saturating_sub(d)
        } else {
            acc.saturating_mul(10).saturating_add(d)
        };
    }

    seen.then_some(acc)
}
