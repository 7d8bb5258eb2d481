//! Cascade planning: deriving ancestor file paths from an identifier.
//!
//! Responsibilities:
//! - Split a requested file path into directory, dot-separated name parts,
//!   and extension (`ConfigIdentifier`).
//! - Derive the ordered list of cascade levels, least specific first
//!   (`ConfigIdentifier::plan`).
//!
//! Does NOT handle:
//! - File I/O or existence checks (see `resolver.rs`).
//! - Parsing or merging (see `parser/` and `merge.rs`).
//!
//! Invariants:
//! - Planning is pure path computation with no failure modes; the only
//!   fallible step is identifier validation at construction.
//! - For N name parts the plan has exactly N levels; the last level is the
//!   originally requested file.

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::constants::DEFAULT_EXTENSION;
use crate::error::ConfigError;

/// A configuration identifier: the dot-separated name parts of the requested
/// file, plus the directory and extension its cascade levels share.
///
/// For a request of `/etc/app/arin.dev.internal.ini` the parts are
/// `["arin", "dev", "internal"]`, the directory `/etc/app`, and the
/// extension `ini`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIdentifier {
    parts: Vec<String>,
    directory: PathBuf,
    extension: String,
}

/// One derived file path in the cascade, least specific rank 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeLevel {
    /// Full path of the file providing this level.
    pub path: PathBuf,
    /// How many trailing name parts this level matches (1 = least specific).
    pub specificity: usize,
}

impl ConfigIdentifier {
    /// Derive an identifier from a requested file path.
    ///
    /// The file stem is split on `.`; the extension defaults to `ini` when
    /// the path has none.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidIdentifier` if the stem is empty or any
    /// dot-separated part is empty (e.g. `a..b.ini`).
    pub fn from_path(requested: &Path) -> Result<Self, ConfigError> {
        let directory = requested.parent().unwrap_or(Path::new("")).to_path_buf();
        let extension = requested
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
        let stem = requested
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::new(&stem, directory, extension)
    }

    /// Build an identifier from an already-split base name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidIdentifier` if `base_name` is empty or
    /// contains an empty dot-separated part.
    pub fn new(
        base_name: &str,
        directory: PathBuf,
        extension: String,
    ) -> Result<Self, ConfigError> {
        if base_name.is_empty() {
            return Err(ConfigError::InvalidIdentifier {
                name: base_name.to_string(),
            });
        }

        let parts: Vec<String> = base_name.split('.').map(str::to_string).collect();
        if parts.iter().any(String::is_empty) {
            return Err(ConfigError::InvalidIdentifier {
                name: base_name.to_string(),
            });
        }

        Ok(Self {
            parts,
            directory,
            extension,
        })
    }

    /// The ordered name parts, most general first.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// The directory all cascade levels live in.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The shared file extension (lowercase, without the leading dot).
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The full path of the originally requested (most specific) file.
    pub fn requested_path(&self) -> PathBuf {
        self.level_path(self.parts.len())
    }

    /// Derive the ordered cascade levels, least specific first.
    ///
    /// Level `i` (1-based) takes the last `i` name parts joined by `.`, so
    /// `["a", "b", "c"]` plans `c`, `b.c`, `a.b.c`. Pure computation; no
    /// file is touched.
    pub fn plan(&self) -> Vec<CascadeLevel> {
        let levels: Vec<CascadeLevel> = (1..=self.parts.len())
            .map(|specificity| CascadeLevel {
                path: self.level_path(specificity),
                specificity,
            })
            .collect();

        trace!(
            requested = %self.requested_path().display(),
            levels = levels.len(),
            "planned cascade"
        );
        levels
    }

    /// Path for the level matching the last `suffix_len` parts.
    fn level_path(&self, suffix_len: usize) -> PathBuf {
        let start = self.parts.len() - suffix_len;
        let file_name = format!("{}.{}", self.parts[start..].join("."), self.extension);
        self.directory.join(file_name)
    }
}
