//! Jobs Module
//!
//! Background maintenance tasks.

mod cleanup;

pub use cleanup::spawn_cache_sweep_task;
