//! # rentalcat HTTP Server Module
//!
//! Binds the REST routes to a socket.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/metrics` - Counter snapshot
//! - `/rentals`, `/rentals/:id` - Catalog queries

pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
