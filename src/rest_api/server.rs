//! # Rentals REST Server
//!
//! Axum routes for the rental catalog:
//!
//! - `GET /rentals` - filtered, paginated listing
//! - `GET /rentals/:id` - single listing

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::catalog::{Record, RecordId, RecordStore};
use crate::executor::QueryEngine;
use crate::observability::MetricsRegistry;

use super::errors::{RestError, RestResult};
use super::parser::QueryParams;

/// Shared state of the rentals routes
pub struct RestServer {
    store: Arc<RecordStore>,
    metrics: Arc<MetricsRegistry>,
}

impl RestServer {
    pub fn new(store: Arc<RecordStore>, metrics: Arc<MetricsRegistry>) -> Self {
        Self { store, metrics }
    }

    fn engine(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.store).with_metrics(&self.metrics)
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        let state = Arc::new(self);

        Router::new()
            .route("/rentals", get(list_handler))
            .route("/rentals/:id", get(get_handler))
            .with_state(state)
    }
}

/// Shared state type
type ServerState = Arc<RestServer>;

/// List rentals handler
async fn list_handler(
    State(server): State<ServerState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Json<Vec<Record>> {
    let query = QueryParams::parse(&query).into_query();
    Json(server.engine().query(&query).into_records())
}

/// Get single rental handler
async fn get_handler(
    State(server): State<ServerState>,
    Path(id): Path<String>,
) -> RestResult<Json<Record>> {
    let id: RecordId = id
        .trim()
        .parse()
        .map_err(|_| RestError::InvalidRentalId(id.clone()))?;

    let record = server.engine().lookup(id)?;
    Ok(Json(record))
}
