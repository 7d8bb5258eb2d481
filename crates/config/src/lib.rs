//! Cascading configuration resolution.
//!
//! This crate loads hierarchical configuration from cascading files named by
//! dot-separated specificity levels: resolving `a.b.c.ini` reads `c.ini`,
//! `b.c.ini`, and `a.b.c.ini` in that order and deep-merges them, so more
//! specific files override individual keys without dropping sibling keys
//! from less specific ones.

mod cache;
mod config;
pub mod constants;
mod error;
mod merge;
mod parser;
mod plan;
mod resolver;
mod value;

pub use cache::{CacheStats, ReadThroughCache};
pub use config::MergedConfig;
pub use error::ConfigError;
pub use merge::{deep_merge, merge_levels};
pub use parser::{FormatParser, IniParser, JsonParser, ParserRegistry};
pub use plan::{CascadeLevel, ConfigIdentifier};
pub use resolver::Resolver;
pub use value::{ConfigValue, ParsedTree};
