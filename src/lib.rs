//! customer-directory - search, list and add customer records over HTTP
//!
//! # Modules
//!
//! - **`storage`**: the ordered, append-only customer store and seed loading
//! - **`rest_api`**: search, lookup, city counts and validated creation,
//!   and the routes exposing them
//! - **`http_server`**: configuration and the Axum server
//! - **`observability`**: logging setup
//! - **`cli`**: command-line entry point

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod rest_api;
pub mod storage;
