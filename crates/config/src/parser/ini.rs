//! INI file parsing.
//!
//! Responsibilities:
//! - Parse `[section]` / `key=value` files into a `ParsedTree`.
//! - Report missing files as absent (`Ok(None)`), malformed files as errors.
//!
//! Does NOT handle:
//! - Value interpolation or type coercion; every value is a string.
//! - Nested sections; INI sections are exactly one table deep.
//!
//! Invariants:
//! - Keys appearing before any `[section]` header land at the top level.
//! - `;` and `#` start comments; single- or double-quoted values keep
//!   embedded `;`/`#` and surrounding whitespace.

use std::path::Path;

use tracing::trace;

use crate::error::ConfigError;
use crate::parser::FormatParser;
use crate::value::{ConfigValue, ParsedTree};

/// Parser for `.ini` cascade levels.
#[derive(Debug)]
pub struct IniParser;

impl FormatParser for IniParser {
    fn extension(&self) -> &str {
        "ini"
    }

    fn parse(&self, path: &Path) -> Result<Option<ParsedTree>, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                trace!(path = %path.display(), "cascade level absent");
                return Ok(None);
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        parse_str(&contents)
            .map(Some)
            .map_err(|message| ConfigError::ParseFailed {
                path: path.to_path_buf(),
                message,
            })
    }
}

/// Parse INI text into a tree.
fn parse_str(contents: &str) -> Result<ParsedTree, String> {
    let mut tree = ParsedTree::new();
    // Keys before the first [section] header go to the top level.
    let mut section: Option<String> = None;

    for (index, raw_line) in contents.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            let name = rest
                .split_once(']')
                .map(|(name, _)| name.trim())
                .ok_or_else(|| format!("line {line_no}: unterminated section header"))?;
            if name.is_empty() {
                return Err(format!("line {line_no}: empty section name"));
            }
            section = Some(name.to_string());
            tree.entry(name.to_string())
                .or_insert_with(|| ConfigValue::Table(ParsedTree::new()));
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| format!("line {line_no}: expected 'key=value'"))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(format!("line {line_no}: empty key"));
        }
        let value = parse_value(value);

        let target = match &section {
            Some(name) => match tree.get_mut(name) {
                Some(ConfigValue::Table(table)) => table,
                // A scalar key and a later [section] of the same name
                // within one file is malformed input.
                _ => return Err(format!("line {line_no}: section '{name}' shadows a key")),
            },
            None => &mut tree,
        };
        target.insert(key.to_string(), ConfigValue::Scalar(value));
    }

    Ok(tree)
}

/// Strip trailing comments and surrounding quotes from a raw value.
fn parse_value(raw: &str) -> String {
    let trimmed = raw.trim();

    // Quoted values keep comment characters and inner whitespace.
    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return trimmed[1..trimmed.len() - 1].to_string();
        }
    }

    let unquoted = trimmed
        .find([';', '#'])
        .map_or(trimmed, |comment| &trimmed[..comment]);
    unquoted.trim_end().to_string()
}
