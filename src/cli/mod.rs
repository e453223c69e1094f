//! CLI module for rentalcat
//!
//! Provides command-line interface for:
//! - serve: Load the catalog and serve HTTP queries
//! - get: One-shot lookup by id
//! - list: One-shot listing query

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, ListArgs};
pub use commands::{boot, execute_get, execute_list, get, list, run, run_command, serve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{error_envelope, ok_envelope, write_error, write_response};
