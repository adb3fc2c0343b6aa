//! Priority Heap
//!
//! Array-backed binary max-heap over scored tasks. The layout is the
//! standard 0-indexed array form: children of `i` live at `2i+1` and `2i+2`,
//! parent at `(i-1)/2`.

use crate::models::Task;
use crate::ordering::score::score;

// == Scored Entry ==
/// A task paired with its computed score.
///
/// Exists only inside the heap while ordering; never persisted.
#[derive(Debug, Clone)]
struct ScoredEntry {
    task: Task,
    score: f64,
}

// == Priority Heap ==
/// Binary max-heap ordering tasks by descending score.
#[derive(Debug, Default)]
pub struct PriorityHeap {
    values: Vec<ScoredEntry>,
}

impl PriorityHeap {
    // == Constructor ==
    /// Creates a new empty heap.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Creates an empty heap with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    // == Enqueue ==
    /// Scores the task, appends it, and sifts it toward the root.
    ///
    /// Amortized O(log n).
    pub fn enqueue(&mut self, task: Task) {
        let entry_score = score(task.priority, task.created_at);
        self.values.push(ScoredEntry {
            task,
            score: entry_score,
        });
        self.sift_up(self.values.len() - 1);
    }

    // == Dequeue ==
    /// Removes and returns the task with the maximum score.
    ///
    /// Returns None when the heap is empty. The last element replaces the
    /// root and is sifted down; a single-element heap shrinks to empty
    /// without any index arithmetic on the gap. O(log n).
    pub fn dequeue(&mut self) -> Option<Task> {
        if self.values.is_empty() {
            return None;
        }
        // swap_remove moves the last element into slot 0 and hands back
        // the old root, matching the save-root/relocate-last extraction.
        let max = self.values.swap_remove(0);
        if !self.values.is_empty() {
            self.sift_down(0);
        }
        Some(max.task)
    }

    // == Length ==
    /// Returns the number of tasks currently in the heap.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    // == Is Empty ==
    /// Returns true if the heap holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // == Sift Up ==
    /// Moves the element at `idx` toward the root until its parent's score
    /// is greater than or equal to its own.
    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.values[idx].score <= self.values[parent].score {
                break;
            }
            self.values.swap(idx, parent);
            idx = parent;
        }
    }

    // == Sift Down ==
    /// Moves the element at `idx` toward the leaves, swapping with the
    /// strictly larger child at each step, until neither child exceeds it.
    fn sift_down(&mut self, mut idx: usize) {
        let len = self.values.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut swap = None;

            if left < len && self.values[left].score > self.values[idx].score {
                swap = Some(left);
            }
            if right < len {
                let candidate = swap.unwrap_or(idx);
                if self.values[right].score > self.values[candidate].score {
                    swap = Some(right);
                }
            }

            match swap {
                Some(child) => {
                    self.values.swap(idx, child);
                    idx = child;
                }
                None => break,
            }
        }
    }
}
