//! Response DTOs for the task server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::{Deserialize, Serialize};

use crate::models::Task;

/// Response body for register and login (POST /api/auth/*)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed JWT granting access to the task endpoints
    pub token: String,
}

impl AuthResponse {
    /// Creates a new AuthResponse
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

/// One page of ordered task results (GET /api/tasks)
///
/// This is also the value type stored in the result cache, so it derives
/// both Serialize and Deserialize and is cheap to clone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPage {
    /// Tasks on this page, in descending score order
    pub tasks: Vec<Task>,
    /// 1-based page number
    pub page: u32,
    /// Page size used for the slice
    pub limit: u32,
    /// Total matching tasks across all pages
    pub total: usize,
    /// Total number of pages (ceil(total / limit))
    pub total_pages: usize,
}

impl TaskPage {
    /// Slices an already-ordered task sequence into one page.
    ///
    /// `page` is 1-based; a page past the end yields an empty task list
    /// with the correct totals. `limit` must be validated (>= 1) upstream.
    pub fn paginate(ordered: Vec<Task>, page: u32, limit: u32) -> Self {
        let total = ordered.len();
        let limit_usize = limit as usize;
        let total_pages = (total + limit_usize - 1) / limit_usize;
        let start = (page as usize - 1) * limit_usize;

        let tasks = ordered
            .into_iter()
            .skip(start)
            .take(limit_usize)
            .collect();

        Self {
            tasks,
            page,
            limit,
            total,
            total_pages,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of list requests served from cache
    pub hits: u64,
    /// Number of list requests that recomputed their page
    pub misses: u64,
    /// Number of owner-key invalidations performed by mutations
    pub invalidations: u64,
    /// Current number of cached pages
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(hits: u64, misses: u64, invalidations: u64, total_entries: usize) -> Self {
        let total_requests = hits + misses;
        let hit_rate = if total_requests > 0 {
            hits as f64 / total_requests as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            invalidations,
            total_entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, Status};
    use chrono::{TimeZone, Utc};

    fn make_task(id: u64) -> Task {
        Task {
            id,
            owner: "alice".to_string(),
            title: format!("Task {}", id),
            description: "desc".to_string(),
            status: Status::Pending,
            priority: Priority::Medium,
            created_at: Utc.timestamp_millis_opt(id as i64 * 1000).unwrap(),
        }
    }

    #[test]
    fn test_paginate_first_page() {
        let tasks: Vec<Task> = (1..=25).map(make_task).collect();
        let page = TaskPage::paginate(tasks, 1, 10);

        assert_eq!(page.tasks.len(), 10);
        assert_eq!(page.tasks[0].id, 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let tasks: Vec<Task> = (1..=25).map(make_task).collect();
        let page = TaskPage::paginate(tasks, 3, 10);

        assert_eq!(page.tasks.len(), 5);
        assert_eq!(page.tasks[0].id, 21);
    }

    #[test]
    fn test_paginate_past_end() {
        let tasks: Vec<Task> = (1..=5).map(make_task).collect();
        let page = TaskPage::paginate(tasks, 4, 10);

        assert!(page.tasks.is_empty());
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_paginate_empty() {
        let page = TaskPage::paginate(Vec::new(), 1, 10);

        assert!(page.tasks.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_task_page_serializes_camel_case() {
        let page = TaskPage::paginate(vec![make_task(1)], 1, 10);
        let json = serde_json::to_value(&page).unwrap();

        assert!(json.get("totalPages").is_some());
        assert!(json.get("tasks").is_some());
        assert_eq!(json["total"].as_u64().unwrap(), 1);
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let resp = StatsResponse::new(80, 20, 5, 100);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_stats_response_zero_requests() {
        let resp = StatsResponse::new(0, 0, 0, 0);
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
