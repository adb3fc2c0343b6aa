//! API Routes
//!
//! Configures the Axum router with all task server endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_task_handler, delete_task_handler, health_handler, list_tasks_handler, login_handler,
    register_handler, stats_handler, update_task_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /api/auth/register` - Create an account, returns a token
/// - `POST /api/auth/login` - Exchange credentials for a token
/// - `POST /api/tasks` - Create a task
/// - `GET /api/tasks` - List tasks (paginated, filtered, priority-ordered)
/// - `PUT /api/tasks/:id` - Replace a task's mutable fields
/// - `DELETE /api/tasks/:id` - Delete a task
/// - `GET /stats` - Result-cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/api/auth/register", post(register_handler))
        .route("/api/auth/login", post(login_handler))
        .route("/api/tasks", post(create_task_handler))
        .route("/api/tasks", get(list_tasks_handler))
        .route("/api/tasks/:id", put(update_task_handler))
        .route("/api/tasks/:id", delete(delete_task_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
