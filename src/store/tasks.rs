//! Task Store
//!
//! In-memory task storage keyed by id, with a monotonically increasing id
//! counter. Passed explicitly through app state so the ordering and cache
//! layers stay testable in isolation.

use std::collections::HashMap;

use chrono::Utc;

use crate::models::{Priority, Status, Task};

// == Task Store ==
/// Mapping from task id to task record.
///
/// Ids start at 1 and are never reused, including after deletes. Reads and
/// writes are last-write-wins; callers serialize access through the shared
/// lock in app state.
#[derive(Debug)]
pub struct TaskStore {
    /// Task records by id
    tasks: HashMap<u64, Task>,
    /// Next id to assign
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    // == Constructor ==
    /// Creates a new empty TaskStore.
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
            next_id: 1,
        }
    }

    // == Insert ==
    /// Creates a task for `owner`, assigning its id and creation timestamp.
    ///
    /// Returns a clone of the stored record.
    pub fn insert(
        &mut self,
        owner: &str,
        title: String,
        description: String,
        status: Status,
        priority: Priority,
    ) -> Task {
        let id = self.next_id;
        self.next_id += 1;

        let task = Task {
            id,
            owner: owner.to_string(),
            title,
            description,
            status,
            priority,
            created_at: Utc::now(),
        };
        self.tasks.insert(id, task.clone());
        task
    }

    // == Get ==
    /// Looks up a task by id.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.get(&id)
    }

    // == Update ==
    /// Replaces the mutable fields of an existing task.
    ///
    /// Id, owner, and creation timestamp are preserved. Returns the updated
    /// record, or None if the id is unknown.
    pub fn update(
        &mut self,
        id: u64,
        title: String,
        description: String,
        status: Status,
        priority: Priority,
    ) -> Option<Task> {
        let task = self.tasks.get_mut(&id)?;
        task.title = title;
        task.description = description;
        task.status = status;
        task.priority = priority;
        Some(task.clone())
    }

    // == Remove ==
    /// Deletes a task by id, returning the removed record if it existed.
    pub fn remove(&mut self, id: u64) -> Option<Task> {
        self.tasks.remove(&id)
    }

    // == Tasks For Owner ==
    /// Returns all tasks belonging to `owner`, in no particular order.
    pub fn tasks_for_owner(&self, owner: &str) -> Vec<Task> {
        self.tasks
            .values()
            .filter(|task| task.owner == owner)
            .cloned()
            .collect()
    }

    // == Length ==
    /// Returns the total number of stored tasks across all owners.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    // == Is Empty ==
    /// Returns true if no tasks are stored.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
