//! Immutable record store
//!
//! Populated once at startup and never mutated afterwards. Iteration follows
//! insertion order; lookups go through a map-by-id index.

use std::collections::HashMap;

use super::errors::{CatalogError, CatalogResult};
use super::record::{Record, RecordId};

/// Read-only collection of rental listings
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    by_id: HashMap<RecordId, usize>,
}

impl RecordStore {
    /// Builds a store, validating every record and rejecting duplicate ids
    pub fn new(records: Vec<Record>) -> CatalogResult<Self> {
        let mut by_id = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            record.validate()?;
            if by_id.insert(record.id, position).is_some() {
                return Err(CatalogError::duplicate_id(record.id));
            }
        }

        Ok(Self { records, by_id })
    }

    /// Exact-match lookup. Absence is a normal outcome.
    pub fn get_by_id(&self, id: RecordId) -> Option<&Record> {
        self.by_id.get(&id).map(|&position| &self.records[position])
    }

    /// Returns true if a record with this id exists
    pub fn contains(&self, id: RecordId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Records in store order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Records in store order, as a slice
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
