//! Error types for cascade configuration resolution.
//!
//! Responsibilities:
//! - Define error variants for all resolution failures.
//! - Carry enough context (paths, extensions, names) for debugging.
//!
//! Does NOT handle:
//! - "Key not found" in the accessor — that is an `Option`, not an error.
//! - Missing cascade-level files — parsers report those as `Ok(None)`.
//!
//! Invariants:
//! - A file that exists but fails to parse is a `ParseFailed` error, never
//!   silently treated as absent.
//! - Resolution fails atomically; no variant represents a partial result.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving a configuration cascade.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The requested file name yields no usable identifier parts.
    #[error("invalid configuration identifier '{name}': empty name part")]
    InvalidIdentifier { name: String },

    /// No parser is registered for the requested file extension.
    #[error("unsupported configuration file extension '{extension}'")]
    UnsupportedExtension { extension: String },

    /// A cascade-level file exists but could not be parsed.
    #[error("failed to parse config file at {}: {message}", .path.display())]
    ParseFailed { path: PathBuf, message: String },

    /// A cascade-level file exists but could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
