//! Cache Module
//!
//! Per-query result caching for list pages, with TTL expiry and
//! owner-scoped invalidation.

mod entry;
pub mod key;
mod stats;
mod store;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::CacheStats;
pub use store::ResultCache;

// == Public Constants ==
/// Default TTL in seconds for cached list pages
pub const DEFAULT_CACHE_TTL: u64 = 300;
