//! Models Module
//!
//! Domain records plus request/response DTOs for the HTTP API.

mod requests;
mod responses;
mod task;
mod user;

pub use requests::{
    CredentialsRequest, ListTasksQuery, TaskPayload, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
};
pub use responses::{AuthResponse, ErrorResponse, HealthResponse, StatsResponse, TaskPage};
pub use task::{Priority, Status, Task};
pub use user::User;
