//! Request DTOs for the task server API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::models::{Priority, Status};

// == Pagination Bounds ==
/// Maximum page size accepted by the list endpoint
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Default page size when `limit` is omitted
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Request body for register and login (POST /api/auth/register, /api/auth/login)
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    /// Username, unique across accounts
    pub username: String,
    /// Plaintext password, hashed before storage
    pub password: String,
}

impl CredentialsRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.username.trim().is_empty() {
            return Some("Username is required".to_string());
        }
        if self.password.is_empty() {
            return Some("Password is required".to_string());
        }
        None
    }
}

/// Request body shared by create and update (POST /api/tasks, PUT /api/tasks/:id)
///
/// Priority and status are deserialized into their enums, so unknown values
/// are rejected before the handler runs.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskPayload {
    /// Task title (required, non-blank)
    pub title: String,
    /// Task description (required, non-blank)
    pub description: String,
    /// Priority tier
    pub priority: Priority,
    /// Completion status
    pub status: Status,
}

impl TaskPayload {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.title.trim().is_empty() {
            return Some("Title is required".to_string());
        }
        if self.description.trim().is_empty() {
            return Some("Description is required".to_string());
        }
        None
    }
}

/// Query string for the list endpoint (GET /api/tasks)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTasksQuery {
    /// 1-based page number (default 1)
    pub page: Option<u32>,
    /// Page size, 1..=100 (default 10)
    pub limit: Option<u32>,
    /// Optional priority filter
    pub priority: Option<Priority>,
    /// Optional status filter
    pub status: Option<Status>,
}

impl ListTasksQuery {
    /// Validates pagination bounds: page >= 1, limit in [1, 100].
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if let Some(page) = self.page {
            if page < 1 {
                return Some("Page must be at least 1".to_string());
            }
        }
        if let Some(limit) = self.limit {
            if limit < 1 || limit > MAX_PAGE_LIMIT {
                return Some(format!("Limit must be between 1 and {}", MAX_PAGE_LIMIT));
            }
        }
        None
    }

    /// Effective page number after defaulting.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    /// Effective page size after defaulting.
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_PAGE_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_payload_deserialize() {
        let json = r#"{"title":"T","description":"D","priority":"high","status":"pending"}"#;
        let req: TaskPayload = serde_json::from_str(json).unwrap();
        assert_eq!(req.title, "T");
        assert_eq!(req.priority, Priority::High);
        assert_eq!(req.status, Status::Pending);
    }

    #[test]
    fn test_task_payload_rejects_unknown_priority() {
        let json = r#"{"title":"T","description":"D","priority":"urgent","status":"pending"}"#;
        let result: Result<TaskPayload, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_task_payload_blank_title() {
        let req = TaskPayload {
            title: "   ".to_string(),
            description: "D".to_string(),
            priority: Priority::Low,
            status: Status::Pending,
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_task_payload_valid() {
        let req = TaskPayload {
            title: "T".to_string(),
            description: "D".to_string(),
            priority: Priority::Low,
            status: Status::Completed,
        };
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_credentials_validate() {
        let req = CredentialsRequest {
            username: "".to_string(),
            password: "pw".to_string(),
        };
        assert!(req.validate().is_some());

        let req = CredentialsRequest {
            username: "alice".to_string(),
            password: "pw".to_string(),
        };
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_list_query_defaults() {
        let query = ListTasksQuery::default();
        assert!(query.validate().is_none());
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn test_list_query_bounds() {
        let query = ListTasksQuery {
            page: Some(0),
            ..Default::default()
        };
        assert!(query.validate().is_some());

        let query = ListTasksQuery {
            limit: Some(101),
            ..Default::default()
        };
        assert!(query.validate().is_some());

        let query = ListTasksQuery {
            page: Some(3),
            limit: Some(100),
            ..Default::default()
        };
        assert!(query.validate().is_none());
    }
}
