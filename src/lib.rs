//! rentalcat - an in-memory rental catalog query service
//!
//! Answers fetch-by-id and filtered, paginated listing queries over a fixed
//! set of rental listings loaded once at startup.

pub mod catalog;
pub mod cli;
pub mod executor;
pub mod geo;
pub mod http_server;
pub mod observability;
pub mod rest_api;
