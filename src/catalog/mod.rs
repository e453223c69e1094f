//! Record catalog for rentalcat
//!
//! Holds the rental listings the service answers queries against.
//!
//! # Invariants
//!
//! - Identifiers are positive and unique across the store
//! - Coordinates are inside their valid ranges
//! - The store is never mutated after construction

pub mod dataset;
mod errors;
mod record;
mod store;

pub use errors::{CatalogError, CatalogErrorCode, CatalogResult};
pub use record::{Location, Price, Record, RecordId, UserSummary, VehicleSpec};
pub use store::RecordStore;
