//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish
//!   failure modes.
//! - Map `ConfigError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-5 are reserved for specific error categories.

use cascade_config::ConfigError;
use thiserror::Error;

/// Raised by `get` when the requested key or section is absent.
///
/// Key absence is an `Option` inside the library; at the CLI boundary it
/// becomes an error so scripts get a dedicated exit code.
#[derive(Error, Debug)]
#[error("key '{key}' not found{}", .section.as_ref().map(|s| format!(" in section '{s}'")).unwrap_or_default())]
pub struct KeyNotFound {
    pub key: String,
    pub section: Option<String>,
}

/// Structured exit codes for cascade-cli.
///
/// These codes let scripts distinguish failure modes and react accordingly
/// (fix the file, register a format, treat a missing key as a default).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A cascade level exists but is malformed or unreadable.
    ///
    /// Scripts should fix the file; retrying will not help.
    ParseError = 2,

    /// No parser is registered for the requested file extension.
    UnsupportedFormat = 3,

    /// The requested key or section is not present in the merged config.
    KeyNotFound = 4,

    /// The requested file name is not a valid cascade identifier.
    InvalidIdentifier = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::InvalidIdentifier { .. } => ExitCode::InvalidIdentifier,
            ConfigError::UnsupportedExtension { .. } => ExitCode::UnsupportedFormat,
            ConfigError::ParseFailed { .. } => ExitCode::ParseError,
            ConfigError::Io(_) => ExitCode::ParseError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns `ExitCode::GeneralError` when no known error type is found
    /// in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if cause.downcast_ref::<KeyNotFound>().is_some() {
                return ExitCode::KeyNotFound;
            }
        }

        ExitCode::GeneralError
    }
}
