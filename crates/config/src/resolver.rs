//! Cascade resolution entry point.
//!
//! Responsibilities:
//! - Own the parser registry, the per-resolver instance cache, and the
//!   optional read-through cache.
//! - Drive one resolution: plan the cascade, parse each level, merge, cache.
//!
//! Does NOT handle:
//! - Path derivation details (see `plan.rs`).
//! - Merge semantics (see `merge.rs`).
//! - File-format specifics (see `parser/`).
//!
//! Invariants:
//! - Both caches are pure memoization: resolving with them empty or disabled
//!   produces identical output.
//! - The instance cache lives exactly as long as the resolver that owns it;
//!   there is no process-global state.
//! - A malformed level aborts the whole resolution; nothing is cached.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::ReadThroughCache;
use crate::config::MergedConfig;
use crate::error::ConfigError;
use crate::merge::merge_levels;
use crate::parser::ParserRegistry;
use crate::plan::ConfigIdentifier;

/// Resolves cascading configuration files into merged configs.
///
/// A resolver is cheap to construct and owns all resolution state: use one
/// per process (or per service) and share the `Arc<MergedConfig>` results.
pub struct Resolver {
    registry: ParserRegistry,
    instances: HashMap<PathBuf, Arc<MergedConfig>>,
    read_through: ReadThroughCache,
}

impl Resolver {
    /// Create a resolver with the built-in parsers and the read-through
    /// cache enabled at its default TTL.
    pub fn new() -> Self {
        Self::with_registry(ParserRegistry::new())
    }

    /// Create a resolver around a custom parser registry.
    pub fn with_registry(registry: ParserRegistry) -> Self {
        Self {
            registry,
            instances: HashMap::new(),
            read_through: ReadThroughCache::new(),
        }
    }

    /// Disable the read-through cache. The instance cache still applies.
    pub fn without_read_through_cache(mut self) -> Self {
        self.read_through = ReadThroughCache::disabled();
        self
    }

    /// Override the read-through cache TTL.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        if self.read_through.is_enabled() {
            self.read_through = ReadThroughCache::with_ttl(ttl);
        }
        self
    }

    /// Register an additional format parser.
    pub fn register_parser(&mut self, parser: Box<dyn crate::parser::FormatParser>) {
        self.registry.register(parser);
    }

    /// Resolve the cascade for `requested` and return the merged config.
    ///
    /// The first resolution for a path plans the cascade, parses every
    /// present level with the extension's registered parser, and deep-merges
    /// them least specific first. Later calls for the same path are served
    /// from the instance cache for the life of this resolver.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidIdentifier` for an empty or malformed name.
    /// - `ConfigError::UnsupportedExtension` when no parser is registered.
    /// - `ConfigError::ParseFailed` / `ConfigError::Io` when a level exists
    ///   but cannot be parsed or read. Missing levels are not errors.
    pub fn resolve(&mut self, requested: &Path) -> Result<Arc<MergedConfig>, ConfigError> {
        let identifier = ConfigIdentifier::from_path(requested)?;
        let requested_path = identifier.requested_path();

        if let Some(config) = self.instances.get(&requested_path) {
            debug!(path = %requested_path.display(), "instance cache hit");
            return Ok(Arc::clone(config));
        }

        // Fail fast for unregistered extensions, before any I/O.
        let parser = self.registry.get(identifier.extension())?;

        let config = match self.read_through.get(&requested_path) {
            Some(cached) => cached,
            None => {
                let levels = identifier
                    .plan()
                    .into_iter()
                    .map(|level| parser.parse(&level.path))
                    .collect::<Result<Vec<_>, _>>()?;
                let present = levels.iter().filter(|l| l.is_some()).count();
                let tree = merge_levels(levels);

                debug!(
                    path = %requested_path.display(),
                    levels = present,
                    "resolved cascade"
                );

                let config = Arc::new(MergedConfig::new(requested_path.clone(), tree));
                self.read_through.insert(&requested_path, Arc::clone(&config));
                config
            }
        };

        self.instances.insert(requested_path, Arc::clone(&config));
        Ok(config)
    }

    /// Number of configs held by the instance cache.
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// The read-through cache, for inspection.
    pub fn read_through_cache(&self) -> &ReadThroughCache {
        &self.read_through
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}
