//! Ordering Module
//!
//! The priority ordering engine: a composite score function, an
//! array-backed binary max-heap, and the heap-driven ordering service.
//! Pure and request-local; no shared state, no locking.

mod heap;
mod score;
mod service;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use heap::PriorityHeap;
pub use score::score;
pub use service::order;
