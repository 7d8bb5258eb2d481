//! Resolve command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use cascade_config::{ConfigValue, ParsedTree, Resolver};
use tracing::info;

use crate::args::OutputFormat;

pub fn run(resolver: &mut Resolver, file: &Path, output: OutputFormat) -> Result<()> {
    info!("Resolving cascade for {}", file.display());

    let config = resolver
        .resolve(file)
        .with_context(|| format!("failed to resolve {}", file.display()))?;

    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(config.tree())
                .context("failed to serialize merged config")?;
            println!("{}", json);
        }
        OutputFormat::Flat => {
            print_flat(config.tree(), &mut Vec::new());
        }
    }

    Ok(())
}

/// Print `section.key = value` lines, one per leaf, depth first.
fn print_flat(tree: &ParsedTree, prefix: &mut Vec<String>) {
    for (key, value) in tree {
        match value {
            ConfigValue::Scalar(scalar) => {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix.join("."), key)
                };
                println!("{} = {}", path, scalar);
            }
            ConfigValue::Table(nested) => {
                prefix.push(key.clone());
                print_flat(nested, prefix);
                prefix.pop();
            }
        }
    }
}
