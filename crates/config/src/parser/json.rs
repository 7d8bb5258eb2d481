//! JSON file parsing.
//!
//! Responsibilities:
//! - Parse JSON object files into a `ParsedTree`.
//! - Report missing files as absent (`Ok(None)`), malformed files as errors.
//!
//! Does NOT handle:
//! - Arrays or nulls; the cascade data model has no list leaf, and
//!   stringifying them would hide structure. Both are parse errors.
//!
//! Invariants:
//! - Strings map to scalars verbatim; numbers and booleans map to their
//!   canonical string forms, keeping one leaf type across formats.

use std::path::Path;

use serde_json::Value;
use tracing::trace;

use crate::error::ConfigError;
use crate::parser::FormatParser;
use crate::value::{ConfigValue, ParsedTree};

/// Parser for `.json` cascade levels.
#[derive(Debug)]
pub struct JsonParser;

impl FormatParser for JsonParser {
    fn extension(&self) -> &str {
        "json"
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

        let parse_failed = |message: String| ConfigError::ParseFailed {
            path: path.to_path_buf(),
            message,
        };

        let root: Value =
            serde_json::from_str(&contents).map_err(|e| parse_failed(e.to_string()))?;
        match root {
            Value::Object(map) => convert_object(map).map(Some).map_err(parse_failed),
            other => Err(parse_failed(format!(
                "top-level value must be an object, got {}",
                type_name(&other)
            ))),
        }
    }
}

fn convert_object(map: serde_json::Map<String, Value>) -> Result<ParsedTree, String> {
    map.into_iter()
        .map(|(key, value)| Ok((key, convert_value(value)?)))
        .collect()
}

fn convert_value(value: Value) -> Result<ConfigValue, String> {
    match value {
        Value::String(s) => Ok(ConfigValue::Scalar(s)),
        Value::Number(n) => Ok(ConfigValue::Scalar(n.to_string())),
        Value::Bool(b) => Ok(ConfigValue::Scalar(b.to_string())),
        Value::Object(map) => Ok(ConfigValue::Table(convert_object(map)?)),
        other @ (Value::Array(_) | Value::Null) => {
            Err(format!("unsupported value type: {}", type_name(&other)))
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
