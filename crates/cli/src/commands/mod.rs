//! CLI command implementations.

pub mod get;
pub mod plan;
pub mod resolve;

use std::time::Duration;

use cascade_config::Resolver;

/// Build a resolver honoring the global cache flags.
pub fn build_resolver(no_cache: bool, cache_ttl: Option<u64>) -> Resolver {
    let resolver = Resolver::new();
    if no_cache {
        return resolver.without_read_through_cache();
    }
    match cache_ttl {
        Some(secs) => resolver.with_cache_ttl(Duration::from_secs(secs)),
        None => resolver,
    }
}
