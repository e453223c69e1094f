//! Result sorting for listing queries
//!
//! Sort is stable: records comparing equal keep their store order.

use std::cmp::Ordering;

use crate::catalog::Record;

use super::query::{SortDirection, SortField, SortSpec};

/// Sorts filtered records
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts records according to the sort specification
    pub fn sort(records: &mut [&Record], sort_spec: &SortSpec) {
        records.sort_by(|a, b| {
            let ordering = Self::compare(a, b, sort_spec.field);
            match sort_spec.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    fn compare(a: &Record, b: &Record, field: SortField) -> Ordering {
        match field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Price => a.price.day.cmp(&b.price.day),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Year => a.vehicle.year.cmp(&b.vehicle.year),
            SortField::Sleeps => a.vehicle.sleeps.cmp(&b.vehicle.sleeps),
            SortField::Length => a.vehicle.length.total_cmp(&b.vehicle.length),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(records: &[&Record]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_sort_price_ascending() {
        let data = vec![
            Record::new(1, "a").with_price(30),
            Record::new(2, "b").with_price(10),
            Record::new(3, "c").with_price(20),
        ];
        let mut refs: Vec<&Record> = data.iter().collect();

        ResultSorter::sort(&mut refs, &SortSpec::asc(SortField::Price));
        assert_eq!(ids(&refs), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_price_descending() {
        let data = vec![
            Record::new(1, "a").with_price(30),
            Record::new(2, "b").with_price(10),
            Record::new(3, "c").with_price(20),
        ];
        let mut refs: Vec<&Record> = data.iter().collect();

        ResultSorter::sort(&mut refs, &SortSpec::desc(SortField::Price));
        assert_eq!(ids(&refs), vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_stable() {
        // Same price, store order preserved
        let data = vec![
            Record::new(5, "a").with_price(10),
            Record::new(2, "b").with_price(10),
            Record::new(9, "c").with_price(10),
        ];
        let mut refs: Vec<&Record> = data.iter().collect();

        ResultSorter::sort(&mut refs, &SortSpec::asc(SortField::Price));
        assert_eq!(ids(&refs), vec![5, 2, 9]);
    }

    #[test]
    fn test_sort_by_name() {
        let data = vec![
            Record::new(1, "charlie"),
            Record::new(2, "alice"),
            Record::new(3, "bob"),
        ];
        let mut refs: Vec<&Record> = data.iter().collect();

        ResultSorter::sort(&mut refs, &SortSpec::asc(SortField::Name));
        assert_eq!(ids(&refs), vec![2, 3, 1]);
    }
}
