//! Taskboard - A lightweight task-tracking server
//!
//! Authenticated users create, list, update, and delete personal tasks.
//! List results are priority-ordered through a binary max-heap and cached
//! per query with a fixed TTL.

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod jobs;
pub mod models;
pub mod ordering;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use jobs::spawn_cache_sweep_task;
