//! Query executor for rentalcat
//!
//! Answers fetch-by-identifier and filtered, paginated listing queries over
//! an immutable record store.
//!
//! # Execution Flow (strict order)
//!
//! 1. Filter records by every supplied predicate (AND semantics)
//! 2. Apply sort (if specified)
//! 3. Apply the offset/limit window
//! 4. Return owned copies in result order
//!
//! # Invariants
//!
//! - Deterministic execution: same query + same store = same results
//! - The store is never mutated by a query
//! - Filter output keeps store order

mod engine;
mod errors;
mod filters;
mod paginator;
mod query;
mod result;
mod sorter;

pub use engine::QueryEngine;
pub use errors::{QueryError, QueryErrorCode, QueryResult};
pub use filters::{Predicate, PredicateFilter};
pub use paginator::Paginator;
pub use query::{ListingQuery, SortDirection, SortField, SortSpec};
pub use result::QueryOutcome;
pub use sorter::ResultSorter;
