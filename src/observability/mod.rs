//! Observability subsystem
//!
//! Structured logging via `tracing`. Request spans come from the
//! `tower-http` trace layer installed by the HTTP server.

mod logger;

pub use logger::{env_filter, init_logging, DEFAULT_FILTER};
