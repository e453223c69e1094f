//! Dataset sources for the record store
//!
//! Either the built-in demonstration listings or a JSON array read from disk.

use std::fs;
use std::path::Path;

use super::errors::{CatalogError, CatalogResult};
use super::record::{Record, UserSummary};
use super::store::RecordStore;

/// The demonstration listings the service ships with
pub fn seed() -> Vec<Record> {
    let mut first = Record::new(1, "Rental 1").with_user(UserSummary {
        id: 1,
        first_name: "georgi".to_string(),
        last_name: "dimov".to_string(),
    });
    first.description = "Description of Rental 1".to_string();
    first.kind = "test1".to_string();

    let mut records = vec![first];
    for id in 2..=6 {
        let mut record = Record::new(id, "Rental 2");
        record.description = "Description of Rental 2".to_string();
        records.push(record);
    }

    // Only the last listing is priced
    if let Some(last) = records.last_mut() {
        last.price.day = 6;
        last.user.id = 6;
    }

    records
}

/// Store holding the demonstration listings
pub fn seed_store() -> CatalogResult<RecordStore> {
    RecordStore::new(seed())
}

/// Decodes a JSON array of records
pub fn parse_json(content: &str) -> CatalogResult<Vec<Record>> {
    serde_json::from_str(content)
        .map_err(|e| CatalogError::load_failed(format!("Invalid dataset JSON: {}", e)))
}

/// Reads a JSON array of records from disk
pub fn load_json(path: &Path) -> CatalogResult<Vec<Record>> {
    let content = fs::read_to_string(path).map_err(|e| {
        CatalogError::load_failed(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_json(&content)
}

/// Builds a store from an optional dataset path, falling back to the seed
pub fn open_store(path: Option<&Path>) -> CatalogResult<RecordStore> {
    match path {
        Some(path) => RecordStore::new(load_json(path)?),
        None => seed_store(),
    }
}
