//! Predicate filtering for listing queries
//!
//! All supplied predicates must hold (AND semantics). Output keeps the input
//! order; records are borrowed, never modified.

use std::collections::HashSet;

use crate::catalog::{Record, RecordId};
use crate::geo::GeoPoint;

use super::query::ListingQuery;

/// A single filter criterion
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// price.day >= bound
    PriceAtLeast(u64),
    /// price.day <= bound
    PriceAtMost(u64),
    /// id is a member of the set
    IdIn(HashSet<RecordId>),
    /// location is within the near threshold of the point
    Near(GeoPoint),
}

impl Predicate {
    /// Returns the predicate name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Predicate::PriceAtLeast(_) => "price_min",
            Predicate::PriceAtMost(_) => "price_max",
            Predicate::IdIn(_) => "ids",
            Predicate::Near(_) => "near",
        }
    }

    /// Builds the predicates for the criteria a query supplies
    pub fn from_query(query: &ListingQuery) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if let Some(min) = query.price_min {
            predicates.push(Predicate::PriceAtLeast(min));
        }
        if let Some(max) = query.price_max {
            predicates.push(Predicate::PriceAtMost(max));
        }
        if !query.ids.is_empty() {
            predicates.push(Predicate::IdIn(query.ids.iter().copied().collect()));
        }
        if let Some(point) = query.near {
            predicates.push(Predicate::Near(point));
        }

        predicates
    }
}

/// Evaluates predicates against records
pub struct PredicateFilter;

impl PredicateFilter {
    /// Checks if a record matches all predicates
    pub fn matches(record: &Record, predicates: &[Predicate]) -> bool {
        predicates
            .iter()
            .all(|pred| Self::matches_predicate(record, pred))
    }

    fn matches_predicate(record: &Record, predicate: &Predicate) -> bool {
        match predicate {
            Predicate::PriceAtLeast(min) => record.price.day >= *min,
            Predicate::PriceAtMost(max) => record.price.day <= *max,
            Predicate::IdIn(ids) => ids.contains(&record.id),
            Predicate::Near(point) => {
                GeoPoint::new(record.location.lat, record.location.lng).is_near(point)
            }
        }
    }

    /// Keeps the records matching every predicate, in input order
    pub fn apply<'a, I>(records: I, predicates: &[Predicate]) -> Vec<&'a Record>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        records
            .into_iter()
            .filter(|record| Self::matches(record, predicates))
            .collect()
    }

    /// Filters records by the criteria of a query
    pub fn filter<'a>(records: &'a [Record], query: &ListingQuery) -> Vec<&'a Record> {
        Self::apply(records, &Predicate::from_query(query))
    }
}
