//! Value model for parsed configuration trees.
//!
//! Responsibilities:
//! - Define `ConfigValue` (scalar leaf or nested table) and `ParsedTree`.
//! - Provide typed accessors used by the merger and the accessor layer.
//!
//! Does NOT handle:
//! - Parsing file contents into trees (see `parser/`).
//! - Merging trees across cascade levels (see `merge.rs`).
//!
//! Invariants:
//! - Leaves are always strings; parsers normalize other primitive types
//!   to their canonical string form before constructing a tree.
//! - `ParsedTree` is a `BTreeMap`, so iteration and serialization order
//!   are deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A parsed configuration tree: string keys mapping to scalars or sections.
pub type ParsedTree = BTreeMap<String, ConfigValue>;

/// One value inside a configuration tree.
///
/// An INI file maps naturally onto this: top-level `key=value` pairs are
/// scalars, `[section]` blocks are tables one level deep. Other formats may
/// nest tables arbitrarily.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A leaf value, always carried as a string.
    Scalar(String),
    /// A nested section of keys.
    Table(ParsedTree),
}

impl ConfigValue {
    /// Returns the scalar contents, or `None` for a table.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ConfigValue::Scalar(s) => Some(s),
            ConfigValue::Table(_) => None,
        }
    }

    /// Returns the nested table, or `None` for a scalar.
    pub fn as_table(&self) -> Option<&ParsedTree> {
        match self {
            ConfigValue::Scalar(_) => None,
            ConfigValue::Table(t) => Some(t),
        }
    }

    /// True if this value is a nested table.
    pub fn is_table(&self) -> bool {
        matches!(self, ConfigValue::Table(_))
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Scalar(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Scalar(s)
    }
}

impl From<ParsedTree> for ConfigValue {
    fn from(t: ParsedTree) -> Self {
        ConfigValue::Table(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_accessors() {
        let v = ConfigValue::from("qa");
        assert_eq!(v.as_scalar(), Some("qa"));
        assert!(v.as_table().is_none());
        assert!(!v.is_table());
    }

    #[test]
    fn table_accessors() {
        let mut inner = ParsedTree::new();
        inner.insert("host".to_string(), ConfigValue::from("dev-db"));
        let v = ConfigValue::from(inner);

        assert!(v.as_scalar().is_none());
        assert!(v.is_table());
        assert_eq!(
            v.as_table().unwrap().get("host").and_then(|h| h.as_scalar()),
            Some("dev-db")
        );
    }

    #[test]
    fn serializes_untagged() {
        let mut tree = ParsedTree::new();
        tree.insert("environment".to_string(), ConfigValue::from("qa"));
        let mut db = ParsedTree::new();
        db.insert("port".to_string(), ConfigValue::from("3306"));
        tree.insert("db".to_string(), ConfigValue::from(db));

        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, r#"{"db":{"port":"3306"},"environment":"qa"}"#);
    }
}
