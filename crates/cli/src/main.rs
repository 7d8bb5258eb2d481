//! Cascade CLI - resolve cascading configuration files from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Drive cascade resolution via the shared `cascade-config` library.
//! - Map library errors to structured exit codes for scripting.
//!
//! Does NOT handle:
//! - Cascade planning, parsing, or merge semantics (see `crates/config`).
//!
//! Invariants:
//! - Logging is initialized before any command runs; `RUST_LOG` controls
//!   verbosity.
//! - Error messages go to stderr; command output goes to stdout.

mod args;
mod commands;
mod error;

use args::{Cli, Commands};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut resolver = commands::build_resolver(cli.no_cache, cli.cache_ttl);

    let result = match cli.command {
        Commands::Resolve { ref file, output } => {
            commands::resolve::run(&mut resolver, file, output)
        }
        Commands::Plan { ref file } => commands::plan::run(file),
        Commands::Get {
            ref file,
            ref key,
            ref section,
        } => commands::get::run(&mut resolver, file, key, section.as_deref()),
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(err.exit_code().as_i32());
    }

    std::process::exit(ExitCode::Success.as_i32());
}
