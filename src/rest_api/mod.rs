//! # rentalcat REST API Module
//!
//! HTTP endpoints for reading the rental catalog. Handlers are thin: they
//! coerce query strings into a `ListingQuery` and hand it to the executor.

pub mod errors;
pub mod parser;
pub mod server;

pub use errors::{RestError, RestResult};
pub use parser::QueryParams;
pub use server::RestServer;
