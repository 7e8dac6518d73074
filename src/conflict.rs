//! Time-window conflict detection.
//!
//! Two tasks on the same employee conflict when both carry a time window
//! and the windows overlap (half-open; touching endpoints do not count).
//! Flexible tasks never conflict — they can be interleaved freely.

use crate::models::Task;

/// Whether `task` would conflict with any of an employee's existing tasks.
///
/// Only windowed tasks participate; the task itself is skipped if it
/// appears in `existing` (relevant when re-validating a move).
pub fn has_conflict(task: &Task, existing: &[&Task]) -> bool {
    first_conflict(task, existing).is_some()
}

/// The first existing task whose window overlaps `task`'s, if any.
///
/// Used by the validator to name the offending visit in its message.
pub fn first_conflict<'a>(task: &Task, existing: &[&'a Task]) -> Option<&'a Task> {
    let window = task.time_window?;
    existing.iter().copied().find(|other| {
        other.id != task.id
            && other
                .time_window
                .is_some_and(|w| w.overlaps(&window))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, TimeWindow};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn windowed(id: &str, start_h: u16, end_h: u16) -> Task {
        Task::new(id, Coordinates::new(55.0, 12.0), date())
            .with_time_window(TimeWindow::from_hm(start_h, 0, end_h, 0))
    }

    fn flexible(id: &str) -> Task {
        Task::new(id, Coordinates::new(55.0, 12.0), date())
    }

    #[test]
    fn test_overlapping_windows_conflict() {
        let t = windowed("T1", 9, 11);
        let other = windowed("T2", 10, 12);
        assert!(has_conflict(&t, &[&other]));
        let named = first_conflict(&t, &[&other]).unwrap();
        assert_eq!(named.id, "T2");
    }

    #[test]
    fn test_touching_windows_do_not_conflict() {
        let t = windowed("T1", 10, 11);
        let other = windowed("T2", 11, 12);
        assert!(!has_conflict(&t, &[&other]));
    }

    #[test]
    fn test_flexible_task_never_conflicts() {
        let t = flexible("T1");
        let other = windowed("T2", 9, 17);
        assert!(!has_conflict(&t, &[&other]));
    }

    #[test]
    fn test_windowed_vs_flexible_no_conflict() {
        let t = windowed("T1", 9, 11);
        let other = flexible("T2");
        assert!(!has_conflict(&t, &[&other]));
    }

    #[test]
    fn test_self_is_skipped() {
        // Re-validating a move: the task may still appear in the target list
        let t = windowed("T1", 9, 11);
        assert!(!has_conflict(&t, &[&t]));
    }

    #[test]
    fn test_conflict_found_among_many() {
        let t = windowed("T1", 9, 11);
        let a = windowed("T2", 6, 7);
        let b = flexible("T3");
        let c = windowed("T4", 10, 12);
        assert!(has_conflict(&t, &[&a, &b, &c]));
        assert_eq!(first_conflict(&t, &[&a, &b, &c]).unwrap().id, "T4");
    }

    #[test]
    fn test_no_existing_tasks() {
        let t = windowed("T1", 9, 11);
        assert!(!has_conflict(&t, &[]));
    }
}
