//! API Handlers
//!
//! HTTP request handlers for the auth and task endpoints.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::auth::{hash_password, verify_password, AuthUser, JwtKeys};
use crate::cache::{key, ResultCache};
use crate::error::{ApiError, Result};
use crate::models::{
    AuthResponse, CredentialsRequest, HealthResponse, ListTasksQuery, StatsResponse, Task,
    TaskPage, TaskPayload, User,
};
use crate::ordering::order;
use crate::store::{TaskStore, UserStore};

/// Application state shared across all handlers.
///
/// The task store, user store, and result cache are each wrapped in
/// Arc<RwLock<>> for thread-safe access; the JWT keys are immutable.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe task store
    pub tasks: Arc<RwLock<TaskStore>>,
    /// Thread-safe user store
    pub users: Arc<RwLock<UserStore>>,
    /// Thread-safe result cache
    pub cache: Arc<RwLock<ResultCache>>,
    /// JWT signing/verification keys
    pub jwt: Arc<JwtKeys>,
}

impl AppState {
    /// Creates a new AppState from its components.
    pub fn new(cache: ResultCache, jwt: JwtKeys) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(TaskStore::new())),
            users: Arc::new(RwLock::new(UserStore::new())),
            cache: Arc::new(RwLock::new(cache)),
            jwt: Arc::new(jwt),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let cache = ResultCache::new(config.cache_ttl);
        let jwt = JwtKeys::new(&config.jwt_secret, config.token_ttl_hours);
        Self::new(cache, jwt)
    }
}

/// Handler for POST /api/auth/register
///
/// Creates an account and returns a signed token.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let password_hash = hash_password(&req.password)?;

    {
        let mut users = state.users.write().await;
        if !users.insert(User::new(req.username.clone(), password_hash)) {
            return Err(ApiError::InvalidRequest(
                "Username already exists".to_string(),
            ));
        }
    }

    let token = state.jwt.issue(&req.username)?;
    Ok((StatusCode::CREATED, Json(AuthResponse::new(token))))
}

/// Handler for POST /api/auth/login
///
/// Verifies credentials and returns a signed token.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    {
        let users = state.users.read().await;
        let user = users
            .get(&req.username)
            .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

        if !verify_password(&req.password, &user.password_hash)? {
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }
    }

    let token = state.jwt.issue(&req.username)?;
    Ok(Json(AuthResponse::new(token)))
}

/// Handler for POST /api/tasks
///
/// Creates a task owned by the caller and invalidates the caller's
/// canonical cache key.
pub async fn create_task_handler(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<TaskPayload>,
) -> Result<(StatusCode, Json<Task>)> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let task = {
        let mut tasks = state.tasks.write().await;
        tasks.insert(
            &user.username,
            req.title,
            req.description,
            req.status,
            req.priority,
        )
    };

    state.cache.write().await.invalidate(&user.username);

    Ok((StatusCode::CREATED, Json(task)))
}

/// Handler for GET /api/tasks
///
/// Returns one filtered, ordered, paginated page of the caller's tasks.
/// On a cache miss the page is recomputed from the task store through the
/// ordering service and cached under the full query tuple.
pub async fn list_tasks_handler(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<TaskPage>> {
    if let Some(error_msg) = query.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let page = query.page();
    let limit = query.limit();
    let cache_key = key::list_key(&user.username, page, limit, query.priority, query.status);

    // Any cache fault surfaces as a miss; the request always proceeds.
    if let Some(cached) = state.cache.write().await.get(&cache_key) {
        return Ok(Json(cached));
    }

    let mut user_tasks = state.tasks.read().await.tasks_for_owner(&user.username);
    if let Some(priority) = query.priority {
        user_tasks.retain(|task| task.priority == priority);
    }
    if let Some(status) = query.status {
        user_tasks.retain(|task| task.status == status);
    }

    let ordered = order(user_tasks);
    let result = TaskPage::paginate(ordered, page, limit);

    state.cache.write().await.set(cache_key, result.clone());

    Ok(Json(result))
}

/// Handler for PUT /api/tasks/:id
///
/// Replaces a task's mutable fields, preserving id, owner, and creation
/// time, then invalidates the caller's canonical cache key.
pub async fn update_task_handler(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<u64>,
    Json(req): Json<TaskPayload>,
) -> Result<Json<Task>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let updated = {
        let mut tasks = state.tasks.write().await;
        let existing = tasks
            .get(id)
            .ok_or_else(|| ApiError::NotFound(format!("Task {} not found", id)))?;
        if existing.owner != user.username {
            return Err(ApiError::Forbidden(
                "Task belongs to another user".to_string(),
            ));
        }

        tasks
            .update(id, req.title, req.description, req.status, req.priority)
            .ok_or_else(|| ApiError::NotFound(format!("Task {} not found", id)))?
    };

    state.cache.write().await.invalidate(&user.username);

    Ok(Json(updated))
}

/// Handler for DELETE /api/tasks/:id
///
/// Removes a task owned by the caller and invalidates the caller's
/// canonical cache key.
pub async fn delete_task_handler(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<u64>,
) -> Result<StatusCode> {
    {
        let mut tasks = state.tasks.write().await;
        let existing = tasks
            .get(id)
            .ok_or_else(|| ApiError::NotFound(format!("Task {} not found", id)))?;
        if existing.owner != user.username {
            return Err(ApiError::Forbidden(
                "Task belongs to another user".to_string(),
            ));
        }

        tasks.remove(id);
    }

    state.cache.write().await.invalidate(&user.username);

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /stats
///
/// Returns current result-cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.invalidations,
        stats.total_entries,
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
