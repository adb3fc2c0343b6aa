//! API Module
//!
//! HTTP layer: routes and request handlers.

pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::AppState;
pub use routes::create_router;
