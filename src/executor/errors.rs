//! Query error types
//!
//! Error codes:
//! - QUERY_NOT_FOUND
//!
//! Malformed parameters never reach the executor; they are coerced to
//! "unset" by the parsing layer.

use std::fmt;

use crate::catalog::RecordId;

/// Query-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorCode {
    /// Lookup of an identifier absent from the store
    NotFound,
}

impl QueryErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            QueryErrorCode::NotFound => "QUERY_NOT_FOUND",
        }
    }
}

impl fmt::Display for QueryErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Query error with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    code: QueryErrorCode,
    message: String,
}

impl QueryError {
    /// Create a not found error
    pub fn not_found(id: RecordId) -> Self {
        Self {
            code: QueryErrorCode::NotFound,
            message: format!("Rental {} not found", id),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> QueryErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true for a missing resource
    pub fn is_not_found(&self) -> bool {
        self.code == QueryErrorCode::NotFound
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for QueryError {}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;
