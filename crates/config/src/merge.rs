//! Deep-merge logic for cascade levels.
//!
//! Implements the specificity fold with:
//! - Tables: deep-merge by key (recursive)
//! - Scalars: override (more specific level wins)
//! - Mixed scalar/table conflicts: override (more specific level wins)
//!
//! A naive shallow merge of `{db: {username: "root", password: "secret"}}`
//! with `{db: {username: "app_user"}}` replaces the whole `db` section and
//! silently drops `password`. Deep-merging recurses into the section instead
//! and preserves sibling keys from less specific levels.

use crate::value::{ConfigValue, ParsedTree};

/// Deep merge two configuration trees.
///
/// Merge semantics:
/// - Keys present in only one tree are kept.
/// - Keys present in both: tables merge recursively; for any other pairing
///   the overlay (more specific) value wins wholesale.
///
/// Terminates because every recursive call descends into strictly smaller
/// subtrees.
pub fn deep_merge(mut base: ParsedTree, overlay: ParsedTree) -> ParsedTree {
    for (key, overlay_value) in overlay {
        let merged = match (base.remove(&key), overlay_value) {
            (Some(ConfigValue::Table(base_table)), ConfigValue::Table(overlay_table)) => {
                ConfigValue::Table(deep_merge(base_table, overlay_table))
            }
            (_, overlay_value) => overlay_value,
        };
        base.insert(key, merged);
    }
    base
}

/// Fold parsed cascade levels into one merged tree.
///
/// Levels are ordered least specific first; `None` entries are absent files
/// and contribute nothing.
pub fn merge_levels<I>(levels: I) -> ParsedTree
where
    I: IntoIterator<Item = Option<ParsedTree>>,
{
    levels
        .into_iter()
        .flatten()
        .fold(ParsedTree::new(), deep_merge)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(pairs: &[(&str, ConfigValue)]) -> ParsedTree {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn scalar_override() {
        let base = tree(&[("env", "dev".into())]);
        let overlay = tree(&[("env", "prod".into())]);

        let merged = deep_merge(base, overlay);
        assert_eq!(merged["env"], ConfigValue::from("prod"));
    }

    #[test]
    fn nested_section_preserves_siblings() {
        let base = tree(&[(
            "db",
            tree(&[("username", "root".into()), ("password", "secret".into())]).into(),
        )]);
        let overlay = tree(&[("db", tree(&[("username", "app_user".into())]).into())]);

        let merged = deep_merge(base, overlay);
        let db = merged["db"].as_table().unwrap();
        assert_eq!(db["username"], ConfigValue::from("app_user"));
        // password must NOT be lost to a shallow section replacement
        assert_eq!(db["password"], ConfigValue::from("secret"));
    }

    #[test]
    fn new_keys_are_added() {
        let base = tree(&[("a", "1".into())]);
        let overlay = tree(&[("b", "2".into())]);

        let merged = deep_merge(base, overlay);
        assert_eq!(merged["a"], ConfigValue::from("1"));
        assert_eq!(merged["b"], ConfigValue::from("2"));
    }

    #[test]
    fn table_overrides_scalar() {
        let base = tree(&[("db", "disabled".into())]);
        let overlay = tree(&[("db", tree(&[("host", "localhost".into())]).into())]);

        let merged = deep_merge(base, overlay);
        assert!(merged["db"].is_table());
    }

    #[test]
    fn scalar_overrides_table() {
        let base = tree(&[("db", tree(&[("host", "localhost".into())]).into())]);
        let overlay = tree(&[("db", "disabled".into())]);

        let merged = deep_merge(base, overlay);
        assert_eq!(merged["db"], ConfigValue::from("disabled"));
    }

    #[test]
    fn deeply_nested_merge() {
        let base = tree(&[(
            "l1",
            tree(&[("l2", tree(&[("a", "1".into()), ("b", "2".into())]).into())]).into(),
        )]);
        let overlay = tree(&[(
            "l1",
            tree(&[("l2", tree(&[("b", "3".into()), ("c", "4".into())]).into())]).into(),
        )]);

        let merged = deep_merge(base, overlay);
        let l2 = merged["l1"].as_table().unwrap()["l2"].as_table().unwrap();
        assert_eq!(l2["a"], ConfigValue::from("1"));
        assert_eq!(l2["b"], ConfigValue::from("3"));
        assert_eq!(l2["c"], ConfigValue::from("4"));
    }

    #[test]
    fn absent_levels_are_skipped() {
        let level1 = tree(&[("env", "dev".into())]);
        let level2 = tree(&[("env", "prod".into())]);

        let with_absent = merge_levels(vec![
            None,
            Some(level1.clone()),
            None,
            Some(level2.clone()),
        ]);
        let without = merge_levels(vec![Some(level1), Some(level2)]);
        assert_eq!(with_absent, without);
    }

    #[test]
    fn single_level_is_identity() {
        let level = tree(&[(
            "db",
            tree(&[("host", "internal-db".into())]).into(),
        )]);

        let merged = merge_levels(vec![Some(level.clone())]);
        assert_eq!(merged, level);
    }

    #[test]
    fn no_levels_yields_empty_tree() {
        let merged = merge_levels(Vec::<Option<ParsedTree>>::new());
        assert!(merged.is_empty());
    }

    #[test]
    fn three_level_fold() {
        let least = tree(&[("db", tree(&[("host", "internal-db".into())]).into())]);
        let middle = tree(&[(
            "db",
            tree(&[("host", "dev-db".into()), ("port", "3306".into())]).into(),
        )]);
        let most = tree(&[("environment", "qa".into())]);

        let merged = merge_levels(vec![Some(least), Some(middle), Some(most)]);
        assert_eq!(merged["environment"], ConfigValue::from("qa"));
        let db = merged["db"].as_table().unwrap();
        assert_eq!(db["host"], ConfigValue::from("dev-db"));
        assert_eq!(db["port"], ConfigValue::from("3306"));
    }
}
