//! # Customer REST API Module
//!
//! Search, lookup, city aggregation and creation over the customer store,
//! plus the HTTP routes that expose them.

pub mod errors;
pub mod filter;
pub mod handler;
pub mod parser;
pub mod server;
pub mod validator;

pub use errors::{RestError, RestResult};
pub use filter::{FieldFilter, FilterField, FilterSet};
pub use handler::{CustomerHandler, StoreHandler};
pub use parser::QueryParams;
pub use server::RestServer;
pub use validator::{validate_new_customer, NewCustomer};
