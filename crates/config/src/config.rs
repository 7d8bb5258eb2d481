//! Read-only accessor over a merged configuration.
//!
//! Responsibilities:
//! - Own the final merged tree for one resolved cascade.
//! - Answer key/section lookups with an explicit presence distinction.
//!
//! Does NOT handle:
//! - Resolution, parsing, or merging (see `resolver.rs`).
//!
//! Invariants:
//! - Immutable after construction; accessors never mutate or clone the tree.
//! - `None` means "key absent". A key present with an empty value returns
//!   `Some` — the two are never conflated.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::value::{ConfigValue, ParsedTree};

/// The merged result of one cascade resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedConfig {
    source: PathBuf,
    tree: ParsedTree,
}

impl MergedConfig {
    /// Wrap a merged tree resolved for `source`.
    pub fn new(source: PathBuf, tree: ParsedTree) -> Self {
        Self { source, tree }
    }

    /// The originally requested (most specific) file path.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The merged tree.
    pub fn tree(&self) -> &ParsedTree {
        &self.tree
    }

    /// Look up a top-level key.
    ///
    /// Returns `None` only when the key is absent; a present-but-empty
    /// scalar is `Some(&ConfigValue::Scalar(""))`.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.tree.get(key)
    }

    /// Look up `key` inside `section`.
    ///
    /// Returns `None` when the section is absent, is not a table, or lacks
    /// the key.
    pub fn get_in(&self, section: &str, key: &str) -> Option<&ConfigValue> {
        self.tree.get(section)?.as_table()?.get(key)
    }

    /// Look up a scalar by key, optionally inside a section.
    ///
    /// Convenience for callers that only want string leaves; a present table
    /// yields `None`.
    pub fn get_scalar(&self, key: &str, section: Option<&str>) -> Option<&str> {
        let value = match section {
            Some(section) => self.get_in(section, key)?,
            None => self.get(key)?,
        };
        value.as_scalar()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MergedConfig {
        let mut db = ParsedTree::new();
        db.insert("host".to_string(), ConfigValue::from("dev-db"));
        db.insert("password".to_string(), ConfigValue::from(""));

        let mut tree = ParsedTree::new();
        tree.insert("environment".to_string(), ConfigValue::from("qa"));
        tree.insert("db".to_string(), ConfigValue::from(db));

        MergedConfig::new(PathBuf::from("/etc/app/a.b.ini"), tree)
    }

    #[test]
    fn get_distinguishes_absent_from_empty() {
        let config = sample();

        assert!(config.get("missing_key").is_none());
        assert_eq!(
            config.get_in("db", "password"),
            Some(&ConfigValue::from(""))
        );
    }

    #[test]
    fn get_in_handles_missing_section_and_key() {
        let config = sample();

        assert!(config.get_in("nope", "host").is_none());
        assert!(config.get_in("db", "nope").is_none());
        assert_eq!(config.get_in("db", "host"), Some(&ConfigValue::from("dev-db")));
    }

    #[test]
    fn get_in_on_scalar_key_is_none() {
        let config = sample();
        // "environment" exists but is not a section
        assert!(config.get_in("environment", "anything").is_none());
    }

    #[test]
    fn get_scalar_skips_tables() {
        let config = sample();

        assert_eq!(config.get_scalar("environment", None), Some("qa"));
        assert_eq!(config.get_scalar("host", Some("db")), Some("dev-db"));
        assert!(config.get_scalar("db", None).is_none());
    }

    #[test]
    fn source_is_the_requested_path() {
        assert_eq!(sample().source(), Path::new("/etc/app/a.b.ini"));
    }
}
