//! Property-Based Tests for the Ordering Core
//!
//! Uses proptest to verify the heap and ordering service against a
//! reference sort over randomly generated priority/timestamp pairs.

use proptest::prelude::*;

use crate::models::{Priority, Status, Task};
use crate::ordering::{order, score, PriorityHeap};
use chrono::{TimeZone, Utc};

// == Strategies ==
fn priority_strategy() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
    ]
}

/// Epoch-millisecond timestamps from 1970 up to roughly 2033.
fn timestamp_strategy() -> impl Strategy<Value = i64> {
    0i64..2_000_000_000_000
}

fn task_strategy() -> impl Strategy<Value = (Priority, i64)> {
    (priority_strategy(), timestamp_strategy())
}

fn build_tasks(pairs: Vec<(Priority, i64)>) -> Vec<Task> {
    pairs
        .into_iter()
        .enumerate()
        .map(|(idx, (priority, created_ms))| Task {
            id: idx as u64 + 1,
            owner: "prop".to_string(),
            title: format!("task-{}", idx),
            description: "generated".to_string(),
            status: Status::Pending,
            priority,
            created_at: Utc.timestamp_millis_opt(created_ms).unwrap(),
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any task set, the ordered output is sorted by score, strictly
    // non-increasing, and is a permutation of the input.
    #[test]
    fn prop_order_is_non_increasing_permutation(
        pairs in prop::collection::vec(task_strategy(), 0..200)
    ) {
        let tasks = build_tasks(pairs);
        let input_count = tasks.len();
        let mut input_ids: Vec<u64> = tasks.iter().map(|t| t.id).collect();

        let ordered = order(tasks);

        prop_assert_eq!(ordered.len(), input_count, "Ordering must not drop or duplicate tasks");

        let scores: Vec<f64> = ordered
            .iter()
            .map(|t| score(t.priority, t.created_at))
            .collect();
        prop_assert!(
            scores.windows(2).all(|w| w[0] >= w[1]),
            "Scores out of order: {:?}",
            scores
        );

        let mut output_ids: Vec<u64> = ordered.iter().map(|t| t.id).collect();
        input_ids.sort_unstable();
        output_ids.sort_unstable();
        prop_assert_eq!(input_ids, output_ids, "Output must be a permutation of the input");
    }

    // Enqueuing n tasks then dequeuing n times matches a reference
    // descending sort by score.
    #[test]
    fn prop_heap_drain_matches_reference_sort(
        pairs in prop::collection::vec(task_strategy(), 0..1000)
    ) {
        let tasks = build_tasks(pairs);

        let mut reference: Vec<f64> = tasks
            .iter()
            .map(|t| score(t.priority, t.created_at))
            .collect();
        reference.sort_by(|a, b| b.partial_cmp(a).unwrap());

        let mut heap = PriorityHeap::new();
        for task in tasks {
            heap.enqueue(task);
        }

        let mut drained = Vec::with_capacity(reference.len());
        while let Some(task) = heap.dequeue() {
            drained.push(score(task.priority, task.created_at));
        }

        prop_assert_eq!(drained, reference);
        prop_assert!(heap.is_empty());
    }

    // Heap length tracks enqueue/dequeue counts and dequeue-on-empty
    // stays None no matter how many extra calls are made.
    #[test]
    fn prop_heap_len_and_exhaustion(
        pairs in prop::collection::vec(task_strategy(), 0..100)
    ) {
        let tasks = build_tasks(pairs);
        let n = tasks.len();

        let mut heap = PriorityHeap::new();
        for (i, task) in tasks.into_iter().enumerate() {
            heap.enqueue(task);
            prop_assert_eq!(heap.len(), i + 1);
        }

        for i in (0..n).rev() {
            prop_assert!(heap.dequeue().is_some());
            prop_assert_eq!(heap.len(), i);
        }

        prop_assert!(heap.dequeue().is_none());
        prop_assert!(heap.dequeue().is_none());
    }

    // Duplicate scores (same tier, same timestamp) never panic and every
    // task still comes back out.
    #[test]
    fn prop_duplicate_scores_are_safe(
        priority in priority_strategy(),
        created_ms in timestamp_strategy(),
        count in 0usize..64
    ) {
        let tasks = build_tasks(vec![(priority, created_ms); count]);
        let ordered = order(tasks);
        prop_assert_eq!(ordered.len(), count);
    }
}
