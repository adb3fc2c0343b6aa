//! Cache Key Scheme
//!
//! Builds the two kinds of result-cache keys:
//!
//! - a list key per full filter/pagination tuple, so each distinct
//!   (page, limit, priority, status) combination caches independently;
//! - a single canonical owner key, which is the only key mutations remove.
//!
//! Because mutations delete only the canonical key, combination-specific
//! pages can stay cached until their TTL expires. That staleness window is
//! reference behavior, exercised by tests, and intentionally not patched
//! here. A stricter scheme (owner-prefix scan or a per-owner key index)
//! remains an open redesign option.

use crate::models::{Priority, Status};

// == Owner Key ==
/// Canonical cache key for an owner, targeted by mutation invalidation.
pub fn owner_key(owner: &str) -> String {
    format!("tasks_{}", owner)
}

// == List Key ==
/// Cache key for one filtered, paginated list query.
pub fn list_key(
    owner: &str,
    page: u32,
    limit: u32,
    priority: Option<Priority>,
    status: Option<Status>,
) -> String {
    format!(
        "tasks_{}_{}_{}_{}_{}",
        owner,
        page,
        limit,
        priority.map(|p| p.as_str()).unwrap_or("none"),
        status.map(|s| s.as_str()).unwrap_or("none"),
    )
}
