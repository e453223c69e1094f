//! CLI command implementations
//!
//! Every command follows the same boot sequence: load configuration, set the
//! log level, populate the record store. The store is never touched again
//! except through read-only queries.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{dataset, RecordId, RecordStore};
use crate::executor::{QueryEngine, SortSpec};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event, Logger, Severity};
use crate::rest_api::parser::{parse_float_list, parse_int_list, QueryParams};

use super::args::{Command, ListArgs};
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Listener settings (host, port, cors_origins)
    #[serde(flatten)]
    pub server: HttpServerConfig,

    /// JSON array of records; the built-in seed when absent
    #[serde(default)]
    pub dataset_path: Option<String>,

    /// Lowest severity written to the log (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            dataset_path: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::parse(&content)
    }

    /// Parse and validate configuration JSON
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Loads the file if one is given, defaults otherwise
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        if let Some(path) = &self.dataset_path {
            if path.trim().is_empty() {
                return Err(CliError::config_error("dataset_path cannot be empty"));
            }
        }

        self.severity()?;

        Ok(())
    }

    /// Parsed log level
    pub fn severity(&self) -> CliResult<Severity> {
        Severity::parse(&self.log_level).ok_or_else(|| {
            CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be trace, info, warn, error or fatal.",
                self.log_level
            ))
        })
    }

    /// Dataset path as Path
    pub fn dataset_path(&self) -> Option<PathBuf> {
        self.dataset_path.as_ref().map(PathBuf::from)
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Get { config, id } => get(config.as_deref(), id),
        Command::List { config, filters } => list(config.as_deref(), &filters),
    }
}

/// Loads configuration and the record store
pub fn boot(config_path: Option<&Path>) -> CliResult<(Config, RecordStore)> {
    let config = Config::resolve(config_path)?;
    Logger::set_min_severity(config.severity()?);

    log_event(Event::BootStart);
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("addr", config.server.socket_addr().as_str())],
    );

    let dataset_path = config.dataset_path();
    let store = dataset::open_store(dataset_path.as_deref()).map_err(|e| {
        log_event_with_fields(Event::BootFailed, &[("reason", e.to_string().as_str())]);
        CliError::from(e)
    })?;

    let source = config.dataset_path.as_deref().unwrap_or("seed");
    log_event_with_fields(
        Event::DatasetLoaded,
        &[
            ("records", store.len().to_string().as_str()),
            ("source", source),
        ],
    );

    Ok((config, store))
}

/// Start the HTTP server
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let (mut config, store) = boot(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
    }

    let server = HttpServer::new(config.server, Arc::new(store));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Fetch one rental and print it
pub fn get(config_path: Option<&Path>, id: RecordId) -> CliResult<()> {
    Logger::set_stderr_only(true);
    let (_config, store) = boot(config_path)?;

    match execute_get(&store, id) {
        Ok(data) => write_response(data),
        Err(err) => {
            write_error(err.code_str(), err.message())?;
            Err(err)
        }
    }
}

/// Run a listing query and print the page
pub fn list(config_path: Option<&Path>, args: &ListArgs) -> CliResult<()> {
    Logger::set_stderr_only(true);
    let (_config, store) = boot(config_path)?;
    write_response(execute_list(&store, args)?)
}

/// Lookup as JSON
pub fn execute_get(store: &RecordStore, id: RecordId) -> CliResult<Value> {
    let record = QueryEngine::new(store)
        .lookup(id)
        .map_err(|e| CliError::not_found(e.message()))?;
    Ok(serde_json::to_value(record)?)
}

/// Listing query as JSON, with the same coercion rules as the HTTP query string
pub fn execute_list(store: &RecordStore, args: &ListArgs) -> CliResult<Value> {
    let params = QueryParams {
        price_min: args.price_min,
        price_max: args.price_max,
        ids: args.ids.as_deref().map(parse_int_list).unwrap_or_default(),
        near: args.near.as_deref().map(parse_float_list).unwrap_or_default(),
        sort: args.sort.as_deref().and_then(SortSpec::parse),
        limit: args.limit,
        offset: args.offset,
    };

    let outcome = QueryEngine::new(store).query(&params.into_query());
    Ok(serde_json::to_value(outcome.records)?)
}
