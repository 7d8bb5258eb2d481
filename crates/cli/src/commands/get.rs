//! Get command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use cascade_config::{ConfigValue, Resolver};

use crate::error::KeyNotFound;

pub fn run(resolver: &mut Resolver, file: &Path, key: &str, section: Option<&str>) -> Result<()> {
    let config = resolver
        .resolve(file)
        .with_context(|| format!("failed to resolve {}", file.display()))?;

    let value = match section {
        Some(section) => config.get_in(section, key),
        None => config.get(key),
    };

    // Absence is an error at the CLI boundary so scripts get exit code 4;
    // a present-but-empty value prints an empty line and exits 0.
    let value = value.ok_or_else(|| KeyNotFound {
        key: key.to_string(),
        section: section.map(str::to_string),
    })?;

    match value {
        ConfigValue::Scalar(scalar) => println!("{}", scalar),
        ConfigValue::Table(table) => {
            let json = serde_json::to_string_pretty(table)
                .context("failed to serialize section")?;
            println!("{}", json);
        }
    }

    Ok(())
}
