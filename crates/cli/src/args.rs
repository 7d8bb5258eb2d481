//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not resolve cascades (see `cascade-config`).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cascade-cli")]
#[command(about = "Resolve cascading configuration files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  cascade-cli resolve conf/arin.dev.internal.ini\n  cascade-cli resolve conf/app.json --output flat\n  cascade-cli plan conf/arin.dev.internal.ini\n  cascade-cli get conf/dev.internal.ini host --section db\n  cascade-cli --no-cache resolve conf/app.ini\n"
)]
pub struct Cli {
    /// Disable the read-through cache for this invocation
    #[arg(long, global = true, env = "CASCADE_NO_CACHE")]
    pub no_cache: bool,

    /// Read-through cache TTL in seconds
    #[arg(long, global = true, env = "CASCADE_CACHE_TTL", value_name = "SECS")]
    pub cache_ttl: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a cascade and print the merged configuration
    Resolve {
        /// The most specific configuration file (e.g. arin.dev.internal.ini)
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        output: OutputFormat,
    },

    /// Print the planned cascade paths in resolution order
    Plan {
        /// The most specific configuration file
        file: PathBuf,
    },

    /// Resolve a cascade and print a single value
    Get {
        /// The most specific configuration file
        file: PathBuf,

        /// The key to look up
        key: String,

        /// Look up the key inside this section
        #[arg(short, long)]
        section: Option<String>,
    },
}

/// Output format for the `resolve` subcommand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON tree
    Json,
    /// One `section.key = value` line per leaf
    Flat,
}
