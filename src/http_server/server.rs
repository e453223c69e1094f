//! # HTTP Server
//!
//! Main HTTP server combining the rentals routes with health and metrics.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::catalog::RecordStore;
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::rest_api::RestServer;

use super::config::HttpServerConfig;
use super::observability_routes::observability_routes;

/// HTTP server for the rental catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over a store with its own metrics registry
    pub fn new(config: HttpServerConfig, store: Arc<RecordStore>) -> Self {
        Self::with_metrics(config, store, Arc::new(MetricsRegistry::new()))
    }

    /// Create a server sharing an existing metrics registry
    pub fn with_metrics(
        config: HttpServerConfig,
        store: Arc<RecordStore>,
        metrics: Arc<MetricsRegistry>,
    ) -> Self {
        let router = Self::build_router(&config, store, metrics);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(
        config: &HttpServerConfig,
        store: Arc<RecordStore>,
        metrics: Arc<MetricsRegistry>,
    ) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let record_count = store.len();

        Router::new()
            .merge(observability_routes(metrics.clone(), record_count))
            .merge(RestServer::new(store, metrics).router())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        log_event_with_fields(Event::ServerListening, &[("addr", addr.to_string().as_str())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::dataset;

    fn store() -> Arc<RecordStore> {
        Arc::new(dataset::seed_store().unwrap())
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(HttpServerConfig::default(), store());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = HttpServer::new(HttpServerConfig::with_port(9000), store());
        assert_eq!(server.socket_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_router_builds_with_cors_list() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::new(config, store()).router();
    }
}
