//! Task Model
//!
//! Defines the task record and its priority/status enums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Priority ==
/// Priority tier of a task.
///
/// Serialized as lowercase strings ("low", "medium", "high") in both
/// request bodies and query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Returns the lowercase wire representation of the priority.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

// == Status ==
/// Completion status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Completed,
}

impl Status {
    /// Returns the lowercase wire representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Completed => "completed",
        }
    }
}

// == Task ==
/// A single task record.
///
/// Invariants: `id` is unique and never reused; `owner` and `created_at`
/// are immutable after creation (updates preserve both).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique, monotonically assigned identifier
    pub id: u64,
    /// Username of the owning user
    #[serde(rename = "userId")]
    pub owner: String,
    /// Short task title
    pub title: String,
    /// Longer task description
    pub description: String,
    /// Completion status
    pub status: Status,
    /// Priority tier
    pub priority: Priority,
    /// Creation timestamp, set once at insert time
    pub created_at: DateTime<Utc>,
}
