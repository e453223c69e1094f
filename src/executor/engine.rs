//! Query engine for rentalcat
//!
//! Execution flow (strict order):
//! 1. Filter the store snapshot by the supplied predicates
//! 2. Apply sort (if specified)
//! 3. Apply the offset/limit window
//! 4. Copy the surviving records out of the store

use crate::catalog::{Record, RecordId, RecordStore};
use crate::observability::{Event, Logger, MetricsRegistry};

use super::errors::{QueryError, QueryResult};
use super::filters::{Predicate, PredicateFilter};
use super::paginator::Paginator;
use super::query::ListingQuery;
use super::result::QueryOutcome;
use super::sorter::ResultSorter;

/// Answers lookups and listing queries against a store snapshot
pub struct QueryEngine<'a> {
    store: &'a RecordStore,
    metrics: Option<&'a MetricsRegistry>,
}

impl<'a> QueryEngine<'a> {
    /// Creates an engine over a store
    pub fn new(store: &'a RecordStore) -> Self {
        Self {
            store,
            metrics: None,
        }
    }

    /// Records lookups and queries in the given registry
    pub fn with_metrics(mut self, metrics: &'a MetricsRegistry) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Fetches a copy of the record with the given id
    pub fn lookup(&self, id: RecordId) -> QueryResult<Record> {
        if let Some(metrics) = self.metrics {
            metrics.increment_lookups();
        }

        match self.store.get_by_id(id) {
            Some(record) => Ok(record.clone()),
            None => {
                if let Some(metrics) = self.metrics {
                    metrics.increment_lookup_misses();
                }
                Logger::trace(Event::LookupMiss.as_str(), &[("id", id.to_string().as_str())]);
                Err(QueryError::not_found(id))
            }
        }
    }

    /// Executes a listing query.
    ///
    /// Same query + same store = same results.
    pub fn query(&self, query: &ListingQuery) -> QueryOutcome {
        // Step 1: Filter
        let predicates = Predicate::from_query(query);
        let mut matched = PredicateFilter::apply(self.store.iter(), &predicates);
        let matched_count = matched.len();

        // Step 2: Sort
        if let Some(sort_spec) = &query.sort {
            ResultSorter::sort(&mut matched, sort_spec);
        }

        // Step 3: Paginate
        let page = Paginator::window(&matched, query.limit, query.offset);

        // Step 4: Copy out
        let records: Vec<Record> = page.iter().map(|record| (*record).clone()).collect();

        if let Some(metrics) = self.metrics {
            metrics.increment_queries_executed();
            metrics.add_records_returned(records.len() as u64);
        }

        let predicate_count = predicates.len().to_string();
        let matched_str = matched_count.to_string();
        let returned_str = records.len().to_string();
        Logger::trace(
            Event::QueryExecuted.as_str(),
            &[
                ("matched", &matched_str),
                ("predicates", &predicate_count),
                ("returned", &returned_str),
            ],
        );

        QueryOutcome {
            returned_count: records.len(),
            matched_count,
            records,
        }
    }

    /// Executes a query given primitive parameters, where zero means "not supplied"
    pub fn query_primitive(
        &self,
        price_min: i64,
        price_max: i64,
        ids: Vec<RecordId>,
        near: &[f64],
        limit: i64,
        offset: i64,
    ) -> Vec<Record> {
        let query = ListingQuery::from_sentinels(price_min, price_max, ids, near, limit, offset);
        self.query(&query).into_records()
    }
}
