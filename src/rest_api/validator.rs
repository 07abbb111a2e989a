//! # Customer Creation Validator
//!
//! Checks a candidate record against the current store contents. Checks run
//! in a fixed order and the first failure is reported:
//!
//! 1. Completeness: every field present, id non-zero, text non-empty
//! 2. Uniqueness: no existing record has the candidate's id
//! 3. Referential existence: the city AND the company each already appear
//!    on some existing record
//!
//! Step 3 means a customer can never be the first one in a new city or at a
//! new company.
//!
//! Validation does not mutate the candidate or the store.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

use crate::storage::Customer;

use super::errors::{RestError, RestResult};

/// Candidate record as received from a client.
///
/// Every field is optional here so that absence is reported as a
/// validation failure rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewCustomer {
    #[serde(deserialize_with = "integral_id")]
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub city: Option<String>,
    pub company: Option<String>,
}

/// Accept any JSON number with no fractional part as an id (`2` or `2.0`)
fn integral_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Some(id) = number.as_i64() {
        return Ok(Some(id));
    }

    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(Some(f as i64))
        }
        _ => Err(serde::de::Error::custom(format!(
            "id must be an integer, got {}",
            number
        ))),
    }
}

impl NewCustomer {
    /// Convert into a record if every field is present and non-empty
    pub fn into_complete(self) -> Option<Customer> {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Some(Customer {
            id: self.id.filter(|id| *id != 0)?,
            first_name: present(self.first_name)?,
            last_name: present(self.last_name)?,
            city: present(self.city)?,
            company: present(self.company)?,
        })
    }
}

impl From<Customer> for NewCustomer {
    fn from(customer: Customer) -> Self {
        Self {
            id: Some(customer.id),
            first_name: Some(customer.first_name),
            last_name: Some(customer.last_name),
            city: Some(customer.city),
            company: Some(customer.company),
        }
    }
}

/// Validate `candidate` against `existing`, returning the record to append
pub fn validate_new_customer(
    candidate: NewCustomer,
    existing: &[Customer],
) -> RestResult<Customer> {
    let customer = candidate.into_complete().ok_or(RestError::MissingFields)?;

    if existing.iter().any(|c| c.id == customer.id) {
        return Err(RestError::DuplicateId);
    }

    let city_exists = existing.iter().any(|c| c.city == customer.city);
    let company_exists = existing.iter().any(|c| c.company == customer.company);

    if !city_exists || !company_exists {
        return Err(RestError::UnknownReference);
    }

    Ok(customer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> Vec<Customer> {
        vec![Customer::new(1, "Amy", "Lee", "Reno", "Acme")]
    }

    fn candidate(id: i64, city: &str, company: &str) -> NewCustomer {
        Customer::new(id, "Bo", "Ng", city, company).into()
    }

    #[test]
    fn test_valid_candidate() {
        let customer = validate_new_customer(candidate(2, "Reno", "Acme"), &existing()).unwrap();
        assert_eq!(customer, Customer::new(2, "Bo", "Ng", "Reno", "Acme"));
    }

    #[test]
    fn test_missing_fields() {
        let mut no_company = candidate(2, "Reno", "Acme");
        no_company.company = None;
        assert_eq!(
            validate_new_customer(no_company, &existing()),
            Err(RestError::MissingFields)
        );

        let empty_name = NewCustomer {
            first_name: Some(String::new()),
            ..candidate(2, "Reno", "Acme")
        };
        assert_eq!(
            validate_new_customer(empty_name, &existing()),
            Err(RestError::MissingFields)
        );

        assert_eq!(
            validate_new_customer(candidate(0, "Reno", "Acme"), &existing()),
            Err(RestError::MissingFields)
        );
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let spaced = NewCustomer {
            last_name: Some(" ".to_string()),
            ..candidate(2, "Reno", "Acme")
        };
        assert!(validate_new_customer(spaced, &existing()).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        assert_eq!(
            validate_new_customer(candidate(1, "Reno", "Acme"), &existing()),
            Err(RestError::DuplicateId)
        );
    }

    #[test]
    fn test_unknown_city_or_company() {
        assert_eq!(
            validate_new_customer(candidate(3, "Austin", "Acme"), &existing()),
            Err(RestError::UnknownReference)
        );
        assert_eq!(
            validate_new_customer(candidate(3, "Reno", "Initech"), &existing()),
            Err(RestError::UnknownReference)
        );
    }

    #[test]
    fn test_reference_match_is_exact() {
        assert_eq!(
            validate_new_customer(candidate(3, "reno", "Acme"), &existing()),
            Err(RestError::UnknownReference)
        );
    }

    #[test]
    fn test_check_order() {
        // Missing fields win over a duplicate id
        let mut incomplete = candidate(1, "Austin", "Acme");
        incomplete.city = None;
        assert_eq!(
            validate_new_customer(incomplete, &existing()),
            Err(RestError::MissingFields)
        );

        // Duplicate id wins over an unknown city
        assert_eq!(
            validate_new_customer(candidate(1, "Austin", "Acme"), &existing()),
            Err(RestError::DuplicateId)
        );
    }

    #[test]
    fn test_deserialize_integral_float_id() {
        let candidate: NewCustomer = serde_json::from_str(r#"{"id": 2.0}"#).unwrap();
        assert_eq!(candidate.id, Some(2));

        assert!(serde_json::from_str::<NewCustomer>(r#"{"id": 2.5}"#).is_err());
        assert!(serde_json::from_str::<NewCustomer>(r#"{"id": "2"}"#).is_err());
        assert!(serde_json::from_str::<NewCustomer>(r#"{"id": 18446744073709551615}"#).is_err());
    }

    #[test]
    fn test_deserialize_partial_body() {
        let candidate: NewCustomer =
            serde_json::from_str(r#"{"id": 5, "first_name": "Bo", "city": null}"#).unwrap();
        assert_eq!(candidate.id, Some(5));
        assert_eq!(candidate.city, None);
        assert_eq!(candidate.company, None);
    }
}
