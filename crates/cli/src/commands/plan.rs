//! Plan command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use cascade_config::ConfigIdentifier;

pub fn run(file: &Path) -> Result<()> {
    let identifier = ConfigIdentifier::from_path(file)
        .with_context(|| format!("invalid cascade identifier {}", file.display()))?;

    // Pure path derivation; nothing here touches the filesystem.
    for level in identifier.plan() {
        println!("{:>2}  {}", level.specificity, level.path.display());
    }

    Ok(())
}
