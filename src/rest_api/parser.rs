//! # Query Parameter Parser
//!
//! Turns the `/rentals` query string into a `ListingQuery`.
//!
//! Parsing never fails. Unparseable scalars become "unset", unparseable list
//! tokens are dropped, and unknown keys are ignored.

use crate::catalog::RecordId;
use crate::executor::{ListingQuery, SortSpec};

/// Primitive parameters after coercion, before sentinel mapping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pub price_min: i64,
    pub price_max: i64,
    pub ids: Vec<RecordId>,
    pub near: Vec<f64>,
    pub sort: Option<SortSpec>,
    pub limit: i64,
    pub offset: i64,
}

impl QueryParams {
    /// Parse query parameters from decoded pairs. A repeated key keeps its first value.
    pub fn parse(params: &[(String, String)]) -> Self {
        let get = |key: &str| {
            params
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .unwrap_or("")
        };

        Self {
            price_min: parse_int(get("price_min")),
            price_max: parse_int(get("price_max")),
            ids: parse_int_list(get("ids")),
            near: parse_float_list(get("near")),
            sort: SortSpec::parse(get("sort")),
            limit: parse_int(get("limit")),
            offset: parse_int(get("offset")),
        }
    }

    /// Maps the primitives onto explicit optionals
    pub fn into_query(self) -> ListingQuery {
        let mut query = ListingQuery::from_sentinels(
            self.price_min,
            self.price_max,
            self.ids,
            &self.near,
            self.limit,
            self.offset,
        );
        query.sort = self.sort;
        query
    }
}

/// Parses an integer, falling back to zero
pub fn parse_int(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

/// Parses a comma-separated integer list, dropping bad tokens
pub fn parse_int_list(value: &str) -> Vec<i64> {
    value
        .split(',')
        .filter_map(|token| token.trim().parse().ok())
        .collect()
}

/// Parses a comma-separated float list, dropping bad tokens.
///
/// `NaN` and `inf` parse and count as components.
pub fn parse_float_list(value: &str) -> Vec<f64> {
    value
        .split(',')
        .filter_map(|token| token.trim().parse::<f64>().ok())
        .collect()
}
