//! # HTTP Server Module
//!
//! Binds the customer API to a socket.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/customers` - Search (GET) and create (POST)
//! - `/api/customers/:id` - Lookup by id
//! - `/api/cities` - Customer count per city

pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
