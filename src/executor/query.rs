//! Listing query model
//!
//! Every criterion is an explicit optional. The primitive interface, where
//! zero stands for "not supplied", is mapped onto it by `from_sentinels`.

use crate::catalog::RecordId;
use crate::geo::GeoPoint;

/// Fields a listing query can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Price,
    Name,
    Year,
    Sleeps,
    Length,
}

impl SortField {
    /// Parses a field name, returning `None` for unknown fields
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "id" => Some(SortField::Id),
            "price" => Some(SortField::Price),
            "name" => Some(SortField::Name),
            "year" => Some(SortField::Year),
            "sleeps" => Some(SortField::Sleeps),
            "length" => Some(SortField::Length),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Price => "price",
            SortField::Name => "name",
            SortField::Year => "year",
            SortField::Sleeps => "sleeps",
            SortField::Length => "length",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Parses `field`, `field.asc` or `field.desc`.
    ///
    /// Returns `None` when the field or direction is not recognised.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        match value.rsplit_once('.') {
            Some((field, direction)) => {
                let field = SortField::parse(field)?;
                match direction.to_lowercase().as_str() {
                    "asc" => Some(Self::asc(field)),
                    "desc" => Some(Self::desc(field)),
                    _ => None,
                }
            }
            None => SortField::parse(value).map(Self::asc),
        }
    }
}

/// A parsed listing query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery {
    /// Keep records priced at or above this per day
    pub price_min: Option<u64>,
    /// Keep records priced at or below this per day
    pub price_max: Option<u64>,
    /// Keep only these identifiers (empty = no restriction)
    pub ids: Vec<RecordId>,
    /// Keep only records near this point
    pub near: Option<GeoPoint>,
    /// Optional ordering; store order otherwise
    pub sort: Option<SortSpec>,
    /// Page size (None = everything)
    pub limit: Option<usize>,
    /// Records to skip; negative values are treated as zero
    pub offset: i64,
}

impl ListingQuery {
    /// Query with no criteria
    pub fn all() -> Self {
        Self::default()
    }

    /// Maps primitive parameters onto a query.
    ///
    /// Zero or negative prices and limits mean "not supplied", and `near` only
    /// applies with exactly two components.
    pub fn from_sentinels(
        price_min: i64,
        price_max: i64,
        ids: Vec<RecordId>,
        near: &[f64],
        limit: i64,
        offset: i64,
    ) -> Self {
        Self {
            price_min: positive(price_min),
            price_max: positive(price_max),
            ids,
            near: GeoPoint::from_components(near),
            sort: None,
            limit: positive(limit).map(|l| usize::try_from(l).unwrap_or(usize::MAX)),
            offset,
        }
    }

    pub fn with_price_range(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    pub fn with_ids(mut self, ids: Vec<RecordId>) -> Self {
        self.ids = ids;
        self
    }

    pub fn near(mut self, point: GeoPoint) -> Self {
        self.near = Some(point);
        self
    }

    pub fn sorted_by(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn page(mut self, limit: usize, offset: i64) -> Self {
        self.limit = Some(limit);
        self.offset = offset;
        self
    }
}

fn positive(value: i64) -> Option<u64> {
    (value > 0).then_some(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_huge_limit_saturates() {
        let query = ListingQuery::from_sentinels(0, 0, vec![], &[], i64::MAX, 0);
        assert_eq!(query.limit, Some(usize::try_from(i64::MAX).unwrap_or(usize::MAX)));
    }

    #[test]
    fn test_zero_means_unset() {
        let query = ListingQuery::from_sentinels(0, 0, vec![], &[], 0, 0);
        assert_eq!(query, ListingQuery::all());
    }

    #[test]
    fn test_negative_means_unset() {
        let query = ListingQuery::from_sentinels(-5, -1, vec![], &[], -3, -2);
        assert!(query.price_min.is_none());
        assert!(query.price_max.is_none());
        assert!(query.limit.is_none());
        assert_eq!(query.offset, -2);
    }

    #[test]
    fn test_sentinels_set() {
        let query = ListingQuery::from_sentinels(10, 50, vec![1, 2], &[45.0, 7.0], 5, 2);
        assert_eq!(query.price_min, Some(10));
        assert_eq!(query.price_max, Some(50));
        assert_eq!(query.ids, vec![1, 2]);
        assert_eq!(query.near, Some(GeoPoint::new(45.0, 7.0)));
        assert_eq!(query.limit, Some(5));
    }

    #[test]
    fn test_near_requires_two_components() {
        let query = ListingQuery::from_sentinels(0, 0, vec![], &[45.0], 0, 0);
        assert!(query.near.is_none());
        let query = ListingQuery::from_sentinels(0, 0, vec![], &[45.0, 7.0, 1.0], 0, 0);
        assert!(query.near.is_none());
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!(SortSpec::parse("price"), Some(SortSpec::asc(SortField::Price)));
        assert_eq!(SortSpec::parse("price.desc"), Some(SortSpec::desc(SortField::Price)));
        assert_eq!(SortSpec::parse("Name.ASC"), Some(SortSpec::asc(SortField::Name)));
        assert_eq!(SortSpec::parse("color"), None);
        assert_eq!(SortSpec::parse("price.sideways"), None);
        assert_eq!(SortSpec::parse(""), None);
    }
}
