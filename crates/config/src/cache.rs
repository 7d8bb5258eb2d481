//! Read-through caching for resolved configurations.
//!
//! Purpose: short-circuit planning, parsing, and merging when the same
//! cascade was resolved recently.
//! Responsibilities: store merged configs keyed by requested path, apply a
//! time-to-live, and expose cache statistics.
//! Non-scope: persistent storage, cross-process sharing, or the per-resolver
//! instance cache (that lives in `resolver.rs`).
//! Invariants/Assumptions: the cache is an optimization only — resolution
//! with the cache disabled produces identical output, modulo staleness
//! within the TTL window.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use moka::sync::Cache as MokaCache;
use tracing::trace;

use crate::config::MergedConfig;
use crate::constants::{CACHE_KEY_PREFIX, DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL_SECS};

/// A cached merged configuration.
#[derive(Clone, Debug)]
struct CacheEntry {
    config: Arc<MergedConfig>,
    cached_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.cached_at) > self.ttl
    }
}

/// TTL cache consulted before a full cascade resolution.
#[derive(Clone)]
pub struct ReadThroughCache {
    inner: MokaCache<String, CacheEntry>,
    ttl: Duration,
    enabled: bool,
}

impl ReadThroughCache {
    /// Create a cache with the default TTL (300 seconds) and capacity.
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(DEFAULT_CACHE_TTL_SECS))
    }

    /// Create a cache with a specific TTL for new entries.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: MokaCache::builder()
                .max_capacity(DEFAULT_CACHE_CAPACITY)
                .build(),
            ttl,
            enabled: true,
        }
    }

    /// Create a disabled cache (every lookup misses, inserts are dropped).
    pub fn disabled() -> Self {
        Self {
            inner: MokaCache::builder().max_capacity(1).build(),
            ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            enabled: false,
        }
    }

    /// Whether this cache stores and serves entries.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Look up the merged config cached for `path`.
    pub fn get(&self, path: &Path) -> Option<Arc<MergedConfig>> {
        self.get_at(path, Instant::now())
    }

    /// Look up `path`, checking expiry against a caller-supplied clock.
    pub fn get_at(&self, path: &Path, now: Instant) -> Option<Arc<MergedConfig>> {
        if !self.enabled {
            return None;
        }

        let key = cache_key(path);
        match self.inner.get(&key) {
            Some(entry) if entry.is_expired_at(now) => {
                trace!(key = %key, "cache entry expired");
                self.inner.invalidate(&key);
                None
            }
            Some(entry) => {
                trace!(key = %key, "cache hit");
                Some(entry.config)
            }
            None => {
                trace!(key = %key, "cache miss");
                None
            }
        }
    }

    /// Store the merged config for `path` with this cache's TTL.
    pub fn insert(&self, path: &Path, config: Arc<MergedConfig>) {
        if !self.enabled {
            return;
        }

        self.inner.insert(
            cache_key(path),
            CacheEntry {
                config,
                cached_at: Instant::now(),
                ttl: self.ttl,
            },
        );
    }

    /// Drop every cached entry.
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    /// Cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.inner.run_pending_tasks();
        CacheStats {
            entry_count: self.inner.entry_count(),
            enabled: self.enabled,
        }
    }
}

impl Default for ReadThroughCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics.
#[derive(Clone, Copy, Debug, Default)]
pub struct CacheStats {
    /// Number of entries in the cache.
    pub entry_count: u64,
    /// Whether caching is enabled.
    pub enabled: bool,
}

fn cache_key(path: &Path) -> String {
    format!("{CACHE_KEY_PREFIX}{}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ParsedTree;
    use std::path::PathBuf;

    fn config(path: &str) -> Arc<MergedConfig> {
        Arc::new(MergedConfig::new(PathBuf::from(path), ParsedTree::new()))
    }

    #[test]
    fn get_insert_roundtrip() {
        let cache = ReadThroughCache::new();
        let path = Path::new("/etc/app/a.b.ini");

        assert!(cache.get(path).is_none());
        cache.insert(path, config("/etc/app/a.b.ini"));

        let hit = cache.get(path).unwrap();
        assert_eq!(hit.source(), path);
    }

    #[test]
    fn expired_entry_misses_and_is_invalidated() {
        let cache = ReadThroughCache::with_ttl(Duration::from_secs(300));
        let path = Path::new("/etc/app/a.b.ini");
        cache.insert(path, config("/etc/app/a.b.ini"));

        let later = Instant::now() + Duration::from_secs(301);
        assert!(cache.get_at(path, later).is_none());
        // invalidated, not merely hidden
        assert!(cache.get(path).is_none());
    }

    #[test]
    fn entry_within_ttl_hits() {
        let cache = ReadThroughCache::with_ttl(Duration::from_secs(300));
        let path = Path::new("/etc/app/a.b.ini");
        cache.insert(path, config("/etc/app/a.b.ini"));

        let later = Instant::now() + Duration::from_secs(299);
        assert!(cache.get_at(path, later).is_some());
    }

    #[test]
    fn disabled_cache_never_stores() {
        let cache = ReadThroughCache::disabled();
        let path = Path::new("/etc/app/a.b.ini");

        cache.insert(path, config("/etc/app/a.b.ini"));
        assert!(cache.get(path).is_none());
        assert!(!cache.is_enabled());
        assert!(!cache.stats().enabled);
    }

    #[test]
    fn keys_are_prefixed_per_path() {
        let cache = ReadThroughCache::new();
        cache.insert(Path::new("/a/x.ini"), config("/a/x.ini"));

        assert!(cache.get(Path::new("/b/x.ini")).is_none());
        assert!(cache.get(Path::new("/a/x.ini")).is_some());
    }
}
