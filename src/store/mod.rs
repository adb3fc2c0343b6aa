//! Store Module
//!
//! Explicit in-memory stores for tasks and users, shared through app state.

mod tasks;
mod users;

pub use tasks::TaskStore;
pub use users::UserStore;
