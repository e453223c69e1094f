//! Rental listing record and its named sub-entities
//!
//! The JSON shape matches what existing clients of the service consume:
//! vehicle attributes are flattened into the record body, while price,
//! location and owner are nested objects.

use serde::{Deserialize, Serialize};

use super::errors::{CatalogError, CatalogResult};

/// Identifier of a rental listing
pub type RecordId = i64;

/// Valid latitude range in decimal degrees
pub const LAT_RANGE: (f64, f64) = (-90.0, 90.0);

/// Valid longitude range in decimal degrees
pub const LNG_RANGE: (f64, f64) = (-180.0, 180.0);

/// Vehicle attributes of a listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub length: f64,
    #[serde(default)]
    pub sleeps: u32,
}

/// Pricing of a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Daily price, never negative
    #[serde(default)]
    pub day: u64,
}

impl Price {
    pub fn per_day(day: u64) -> Self {
        Self { day }
    }
}

/// Where a listing is parked
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
}

impl Location {
    /// Location with only coordinates set
    pub fn at(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            ..Default::default()
        }
    }

    /// Checks that the coordinates are finite and inside their ranges
    pub fn validate(&self) -> Result<(), String> {
        if !self.lat.is_finite() || self.lat < LAT_RANGE.0 || self.lat > LAT_RANGE.1 {
            return Err(format!("latitude {} outside [-90, 90]", self.lat));
        }
        if !self.lng.is_finite() || self.lng < LNG_RANGE.0 || self.lng > LNG_RANGE.1 {
            return Err(format!("longitude {} outside [-180, 180]", self.lng));
        }
        Ok(())
    }
}

/// Owner of a listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// A single rental listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub vehicle: VehicleSpec,
    #[serde(default, rename = "primary_image_url")]
    pub image_url: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub user: UserSummary,
}

impl Record {
    /// Creates a record with the given id and name, everything else defaulted
    pub fn new(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the daily price
    pub fn with_price(mut self, day: u64) -> Self {
        self.price = Price::per_day(day);
        self
    }

    /// Sets the coordinates
    pub fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.location.lat = lat;
        self.location.lng = lng;
        self
    }

    /// Sets the owner
    pub fn with_user(mut self, user: UserSummary) -> Self {
        self.user = user;
        self
    }

    /// Validates identifier and location
    pub fn validate(&self) -> CatalogResult<()> {
        if self.id <= 0 {
            return Err(CatalogError::invalid_record(
                self.id,
                "identifier must be positive",
            ));
        }
        self.location
            .validate()
            .map_err(|reason| CatalogError::invalid_record(self.id, reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_location_bounds() {
        assert!(Location::at(0.0, 0.0).validate().is_ok());
        assert!(Location::at(90.0, -180.0).validate().is_ok());
        assert!(Location::at(90.5, 0.0).validate().is_err());
        assert!(Location::at(0.0, 180.1).validate().is_err());
        assert!(Location::at(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn test_record_rejects_non_positive_id() {
        let err = Record::new(0, "zero").validate().unwrap_err();
        assert_eq!(err.record_id(), Some(0));
        assert!(Record::new(-4, "negative").validate().is_err());
        assert!(Record::new(1, "one").validate().is_ok());
    }

    #[test]
    fn test_record_rejects_bad_coordinates() {
        let record = Record::new(3, "far away").with_coordinates(120.0, 0.0);
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_wire_shape() {
        let record = Record::new(7, "Camper").with_price(120).with_coordinates(45.5, -122.6);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["price"]["day"], 120);
        assert_eq!(value["location"]["lat"], 45.5);
        // Vehicle attributes sit at the top level
        assert_eq!(value["sleeps"], 0);
        assert!(value.get("vehicle").is_none());
        assert!(value.get("type").is_some());
        assert!(value.get("primary_image_url").is_some());
    }

    #[test]
    fn test_deserialize_partial_document() {
        let record: Record = serde_json::from_value(json!({
            "id": 9,
            "name": "Trailer",
            "type": "trailer",
            "make": "Airstream",
            "year": 2019,
            "price": {"day": 80},
            "user": {"id": 2, "first_name": "Ana", "last_name": "Ruiz"}
        }))
        .unwrap();

        assert_eq!(record.kind, "trailer");
        assert_eq!(record.vehicle.make, "Airstream");
        assert_eq!(record.vehicle.year, 2019);
        assert_eq!(record.price.day, 80);
        assert_eq!(record.user.first_name, "Ana");
        assert_eq!(record.location, Location::default());
    }

    #[test]
    fn test_negative_price_is_rejected_on_decode() {
        let result: Result<Record, _> =
            serde_json::from_value(json!({"id": 1, "price": {"day": -5}}));
        assert!(result.is_err());
    }
}
