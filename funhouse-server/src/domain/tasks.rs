//! Task completion stamping
//!
//! `completed_at` is a one-way latch: it is set exactly once, on the first
//! transition into `completed`, and never cleared or overwritten. Reopening a
//! completed task leaves the stale stamp in place — that is the documented
//! current behavior.

use shared::models::TaskStatus;

/// Compute the `completed_at` value after a status change.
pub fn completion_stamp(
    new_status: TaskStatus,
    existing_completed_at: Option<i64>,
    now: i64,
) -> Option<i64> {
    match (new_status, existing_completed_at) {
        (TaskStatus::Completed, None) => Some(now),
        (_, existing) => existing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamped_on_completion() {
        assert_eq!(
            completion_stamp(TaskStatus::Completed, None, 1000),
            Some(1000)
        );
    }

    #[test]
    fn test_not_stamped_for_other_statuses() {
        assert_eq!(completion_stamp(TaskStatus::Pending, None, 1000), None);
        assert_eq!(completion_stamp(TaskStatus::InProgress, None, 1000), None);
        assert_eq!(completion_stamp(TaskStatus::Cancelled, None, 1000), None);
    }

    #[test]
    fn test_recompletion_keeps_original_stamp() {
        assert_eq!(
            completion_stamp(TaskStatus::Completed, Some(500), 1000),
            Some(500)
        );
    }

    #[test]
    fn test_reopening_does_not_clear_stamp() {
        assert_eq!(
            completion_stamp(TaskStatus::InProgress, Some(500), 1000),
            Some(500)
        );
    }

    #[test]
    fn test_reopen_then_complete_again_keeps_first_stamp() {
        let stamp = completion_stamp(TaskStatus::InProgress, Some(500), 1000);
        assert_eq!(completion_stamp(TaskStatus::Completed, stamp, 2000), Some(500));
    }
}
