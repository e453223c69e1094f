//! Catalog error types
//!
//! Error codes:
//! - CATALOG_INVALID_RECORD
//! - CATALOG_DUPLICATE_ID
//! - CATALOG_LOAD_FAILED

use std::fmt;

use super::record::RecordId;

/// Catalog-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogErrorCode {
    /// A record failed field-level validation
    InvalidRecord,
    /// Two records share an identifier
    DuplicateId,
    /// The dataset could not be read or decoded
    LoadFailed,
}

impl CatalogErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            CatalogErrorCode::InvalidRecord => "CATALOG_INVALID_RECORD",
            CatalogErrorCode::DuplicateId => "CATALOG_DUPLICATE_ID",
            CatalogErrorCode::LoadFailed => "CATALOG_LOAD_FAILED",
        }
    }
}

impl fmt::Display for CatalogErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error raised while building the record store
#[derive(Debug)]
pub struct CatalogError {
    code: CatalogErrorCode,
    message: String,
    record_id: Option<RecordId>,
}

impl CatalogError {
    /// Create an invalid record error
    pub fn invalid_record(id: RecordId, reason: impl Into<String>) -> Self {
        Self {
            code: CatalogErrorCode::InvalidRecord,
            message: format!("Record {}: {}", id, reason.into()),
            record_id: Some(id),
        }
    }

    /// Create a duplicate identifier error
    pub fn duplicate_id(id: RecordId) -> Self {
        Self {
            code: CatalogErrorCode::DuplicateId,
            message: format!("Record {} appears more than once", id),
            record_id: Some(id),
        }
    }

    /// Create a load failure error
    pub fn load_failed(reason: impl Into<String>) -> Self {
        Self {
            code: CatalogErrorCode::LoadFailed,
            message: reason.into(),
            record_id: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> CatalogErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending record id, if any
    pub fn record_id(&self) -> Option<RecordId> {
        self.record_id
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CatalogError {}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
