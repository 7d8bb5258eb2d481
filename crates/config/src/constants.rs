//! Centralized constants for the Cascade workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Cascade Defaults
// =============================================================================

/// Default file extension for cascade levels when none is given.
pub const DEFAULT_EXTENSION: &str = "ini";

// =============================================================================
// Read-Through Cache Defaults
// =============================================================================

/// Prefix for keys used when storing merged configs in the read-through cache.
pub const CACHE_KEY_PREFIX: &str = "cascade.config.";

/// Default time-to-live for cached merged configs, in seconds (5 minutes).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Default read-through cache capacity (number of entries).
pub const DEFAULT_CACHE_CAPACITY: u64 = 100;
