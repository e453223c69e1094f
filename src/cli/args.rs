//! CLI argument definitions using clap
//!
//! Commands:
//! - rentalcat serve [--config <path>] [--port <port>]
//! - rentalcat get --id <id> [--config <path>]
//! - rentalcat list [--config <path>] [filters...]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// rentalcat - in-memory rental catalog query service
#[derive(Parser, Debug)]
#[command(name = "rentalcat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port override
        #[arg(long)]
        port: Option<u16>,
    },

    /// Fetch one rental by id and exit
    Get {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Rental id
        #[arg(long, allow_hyphen_values = true)]
        id: i64,
    },

    /// Run a listing query and exit
    List {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        filters: ListArgs,
    },
}

/// Listing query options, same meaning as the `/rentals` query string
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Minimum daily price (0 = unset)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub price_min: i64,

    /// Maximum daily price (0 = unset)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub price_max: i64,

    /// Comma-separated rental ids
    #[arg(long)]
    pub ids: Option<String>,

    /// Comma-separated "lat,lng" pair
    #[arg(long, allow_hyphen_values = true)]
    pub near: Option<String>,

    /// Sort as field or field.asc / field.desc
    #[arg(long)]
    pub sort: Option<String>,

    /// Page size (0 = everything)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub limit: i64,

    /// Records to skip
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub offset: i64,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
