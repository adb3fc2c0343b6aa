//! Ordering Service
//!
//! Produces a fully sorted task sequence (descending score) using the
//! priority heap.

use crate::models::Task;
use crate::ordering::PriorityHeap;

// == Order ==
/// Sorts tasks by score descending.
///
/// Every task is loaded into a fresh heap via repeated enqueue, then the
/// heap is drained via repeated dequeue. A new heap is built per call; no
/// heap state survives between requests. O(n log n).
pub fn order(tasks: Vec<Task>) -> Vec<Task> {
    let mut heap = PriorityHeap::with_capacity(tasks.len());
    for task in tasks {
        heap.enqueue(task);
    }

    let mut ordered = Vec::with_capacity(heap.len());
    while let Some(task) = heap.dequeue() {
        ordered.push(task);
    }
    ordered
}
