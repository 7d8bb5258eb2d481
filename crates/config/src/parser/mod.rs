//! Pluggable file-format parsers and the extension registry.
//!
//! Responsibilities:
//! - Define the `FormatParser` contract (absent file vs. parse failure).
//! - Map file extensions to parser implementations explicitly
//!   (`ParserRegistry`), failing clearly for unregistered extensions.
//!
//! Does NOT handle:
//! - Cascade planning or merging (see `plan.rs` and `merge.rs`).
//! - Caching of parsed or merged results (see `cache.rs`).
//!
//! Invariants:
//! - `parse` returns `Ok(None)` for a missing file and `Err` for an
//!   existing-but-malformed one; the two are never conflated.
//! - Registry keys are lowercase extensions without the leading dot.

use std::collections::HashMap;
use std::path::Path;

use crate::error::ConfigError;
use crate::value::ParsedTree;

mod ini;
mod json;

pub use ini::IniParser;
pub use json::JsonParser;

/// A parser for one configuration file format.
pub trait FormatParser: Send + Sync + std::fmt::Debug {
    /// The lowercase file extension this parser handles (e.g. `ini`).
    fn extension(&self) -> &str;

    /// Parse the file at `path` into a tree.
    ///
    /// Returns `Ok(None)` when the file does not exist — an absent cascade
    /// level, not an error. A file that exists but cannot be read or parsed
    /// is an error.
    fn parse(&self, path: &Path) -> Result<Option<ParsedTree>, ConfigError>;
}

/// Explicit mapping from file extension to parser implementation.
pub struct ParserRegistry {
    parsers: HashMap<String, Box<dyn FormatParser>>,
}

impl ParserRegistry {
    /// Create an empty registry.
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Create a registry with the built-in parsers (`ini`, `json`).
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(IniParser));
        registry.register(Box::new(JsonParser));
        registry
    }

    /// Register a parser under its extension, replacing any previous one.
    pub fn register(&mut self, parser: Box<dyn FormatParser>) {
        self.parsers
            .insert(parser.extension().to_ascii_lowercase(), parser);
    }

    /// Look up the parser for an extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedExtension` when no parser is
    /// registered for `extension`.
    pub fn get(&self, extension: &str) -> Result<&dyn FormatParser, ConfigError> {
        self.parsers
            .get(&extension.to_ascii_lowercase())
            .map(Box::as_ref)
            .ok_or_else(|| ConfigError::UnsupportedExtension {
                extension: extension.to_string(),
            })
    }

    /// The registered extensions, sorted.
    pub fn extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.parsers.keys().map(String::as_str).collect();
        exts.sort_unstable();
        exts
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
