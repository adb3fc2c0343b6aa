//! Score Function
//!
//! Computes the composite ranking key that drives task ordering.

use chrono::{DateTime, Utc};

use crate::models::Priority;

// == Score ==
/// Computes a task's ranking score from its priority tier and creation time.
///
/// The score is the tier's base value (high=3, medium=2, low=1) plus the
/// creation timestamp in epoch milliseconds divided by 1,000,000,000. The
/// tier dominates the ordering; the recency term only breaks ties within a
/// tier, toward newer tasks. The divisor is part of the ordering contract
/// and must not change.
///
/// Pure and total: no side effects, defined for every priority/timestamp pair.
pub fn score(priority: Priority, created_at: DateTime<Utc>) -> f64 {
    let base = match priority {
        Priority::High => 3.0,
        Priority::Medium => 2.0,
        Priority::Low => 1.0,
    };
    base + created_at.timestamp_millis() as f64 / 1_000_000_000.0
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at_millis(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn test_tier_base_values() {
        let t = at_millis(0);
        assert_eq!(score(Priority::High, t), 3.0);
        assert_eq!(score(Priority::Medium, t), 2.0);
        assert_eq!(score(Priority::Low, t), 1.0);
    }

    #[test]
    fn test_tier_dominates_recency() {
        // A high task created earlier outranks a medium task created later,
        // even across a large timestamp gap.
        let early_high = score(Priority::High, at_millis(1));
        let late_medium = score(Priority::Medium, at_millis(2_000_000_000_000));
        assert!(early_high > late_medium);
    }

    #[test]
    fn test_recency_breaks_ties_toward_newer() {
        let early_high = score(Priority::High, at_millis(1_000));
        let late_high = score(Priority::High, at_millis(2_000));
        assert!(late_high > early_high);
    }

    #[test]
    fn test_recency_divisor() {
        // 1,000,000,000 ms of age difference adds exactly 1.0 to the score.
        let base = score(Priority::Low, at_millis(0));
        let later = score(Priority::Low, at_millis(1_000_000_000));
        assert!((later - base - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deterministic() {
        let t = at_millis(1_234_567_890);
        assert_eq!(score(Priority::Medium, t), score(Priority::Medium, t));
    }
}
