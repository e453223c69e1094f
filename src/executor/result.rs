//! Result types for query execution

use crate::catalog::Record;

/// Result of a listing query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOutcome {
    /// Page of records, owned copies in result order
    pub records: Vec<Record>,
    /// Number of records that passed the filter stage
    pub matched_count: usize,
    /// Number of records returned after pagination
    pub returned_count: usize,
}

impl QueryOutcome {
    /// Returns true if no records were returned
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of returned records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if pagination dropped any matching record
    pub fn is_truncated(&self) -> bool {
        self.returned_count < self.matched_count
    }

    /// Returns an iterator over the records
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Consumes the outcome, returning the records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}
