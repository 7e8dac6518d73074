//! Assignment validation.
//!
//! Composes the skill, conflict, capacity, and availability checks into a
//! single accept/reject decision with structured reasons. The same check
//! runs for automatic assignment and for manual drag-and-drop moves.
//!
//! # Blocking vs. advisory
//!
//! `EmployeeUnavailable` and `OverCapacity` block the assignment outright.
//! `TimeConflict` and `SkillMismatch` are advisory: the board surfaces
//! them and commits only when the caller passes `force = true`, replacing
//! the confirm dialogs of an interactive scheduler. Violations are listed
//! in that priority order, all of them — not just the first.

use serde::{Deserialize, Serialize};

use crate::conflict;
use crate::models::{Employee, Task};
use crate::skills;

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Finding category.
    pub kind: ViolationKind,
    /// Human-readable description for the board UI.
    pub message: String,
}

/// Categories of assignment findings, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Employee is not taking assignments (e.g. on leave). Blocking.
    EmployeeUnavailable,
    /// Employee already carries `max_tasks_per_day` tasks. Blocking.
    OverCapacity,
    /// Time window overlaps an existing windowed task. Advisory.
    TimeConflict,
    /// Employee lacks at least one required skill. Advisory.
    SkillMismatch,
}

impl ViolationKind {
    /// Whether this kind refuses the assignment outright.
    #[inline]
    pub fn is_blocking(self) -> bool {
        matches!(self, Self::EmployeeUnavailable | Self::OverCapacity)
    }
}

impl Violation {
    fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Outcome of validating one task against one employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentCheck {
    /// False when a blocking violation is present.
    pub allowed: bool,
    /// All findings, blocking first, in kind priority order.
    pub violations: Vec<Violation>,
}

impl AssignmentCheck {
    /// Whether the assignment can commit without any override.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether advisory findings require an explicit `force` to commit.
    pub fn needs_confirmation(&self) -> bool {
        self.allowed && !self.violations.is_empty()
    }

    /// Blocking findings only.
    pub fn blocking(&self) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.kind.is_blocking())
            .collect()
    }

    /// Advisory findings only.
    pub fn advisories(&self) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| !v.kind.is_blocking())
            .collect()
    }
}

/// Validates assigning `task` to `employee` given the employee's existing
/// tasks for the date.
///
/// `existing` must not include the task being validated when re-checking
/// a move; the conflict scan skips it by ID either way, but the capacity
/// count cannot tell a moved task from a new one.
///
/// Total function: always returns a check, never fails.
pub fn validate(task: &Task, employee: &Employee, existing: &[&Task]) -> AssignmentCheck {
    let mut violations = Vec::new();

    if !employee.is_available {
        violations.push(Violation::new(
            ViolationKind::EmployeeUnavailable,
            format!("{} is not available for assignments", employee.id),
        ));
    }

    if existing.len() as u32 >= employee.max_tasks_per_day {
        violations.push(Violation::new(
            ViolationKind::OverCapacity,
            format!(
                "{} already has {} of {} tasks for {}",
                employee.id,
                existing.len(),
                employee.max_tasks_per_day,
                task.start_date
            ),
        ));
    }

    if let Some(other) = conflict::first_conflict(task, existing) {
        violations.push(Violation::new(
            ViolationKind::TimeConflict,
            format!("time window overlaps task {} on {}", other.id, employee.id),
        ));
    }

    if !task.required_skills.is_empty()
        && !skills::satisfies_all(&task.required_skills, &employee.skills)
    {
        let missing: Vec<&str> = task
            .required_skills
            .difference(&employee.skills)
            .map(String::as_str)
            .collect();
        violations.push(Violation::new(
            ViolationKind::SkillMismatch,
            format!("{} lacks required skills: {}", employee.id, missing.join(", ")),
        ));
    }

    let allowed = !violations.iter().any(|v| v.kind.is_blocking());
    AssignmentCheck { allowed, violations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, TimeWindow};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn task(id: &str) -> Task {
        Task::new(id, Coordinates::new(55.0, 12.0), date())
    }

    #[test]
    fn test_clean_assignment() {
        let t = task("T1");
        let e = Employee::new("E1");
        let check = validate(&t, &e, &[]);
        assert!(check.allowed);
        assert!(check.is_clean());
        assert!(!check.needs_confirmation());
    }

    #[test]
    fn test_unavailable_blocks() {
        let t = task("T1");
        let e = Employee::new("E1").with_availability(false);
        let check = validate(&t, &e, &[]);
        assert!(!check.allowed);
        assert_eq!(check.violations[0].kind, ViolationKind::EmployeeUnavailable);
    }

    #[test]
    fn test_over_capacity_blocks() {
        let t = task("T3");
        let e = Employee::new("E1").with_max_tasks_per_day(2);
        let t1 = task("T1");
        let t2 = task("T2");
        let check = validate(&t, &e, &[&t1, &t2]);
        assert!(!check.allowed);
        assert_eq!(check.violations[0].kind, ViolationKind::OverCapacity);
    }

    #[test]
    fn test_under_capacity_allowed() {
        let t = task("T2");
        let e = Employee::new("E1").with_max_tasks_per_day(2);
        let t1 = task("T1");
        let check = validate(&t, &e, &[&t1]);
        assert!(check.allowed);
    }

    #[test]
    fn test_time_conflict_is_advisory() {
        let t = task("T1").with_time_window(TimeWindow::from_hm(9, 0, 11, 0));
        let other = task("T2").with_time_window(TimeWindow::from_hm(10, 0, 12, 0));
        let e = Employee::new("E1");

        let check = validate(&t, &e, &[&other]);
        assert!(check.allowed, "advisory must not refuse");
        assert!(check.needs_confirmation());
        assert_eq!(check.violations[0].kind, ViolationKind::TimeConflict);
    }

    #[test]
    fn test_skill_mismatch_is_advisory() {
        let t = task("T1").with_required_skill("algae_removal");
        let e = Employee::new("E1").with_skill("window_cleaning");

        let check = validate(&t, &e, &[]);
        assert!(check.allowed);
        assert!(check.needs_confirmation());
        assert_eq!(check.violations[0].kind, ViolationKind::SkillMismatch);
        assert!(check.violations[0].message.contains("algae_removal"));
    }

    #[test]
    fn test_empty_required_skills_never_flagged() {
        let t = task("T1");
        let e = Employee::new("E1"); // no skills at all
        let check = validate(&t, &e, &[]);
        assert!(check.is_clean());
    }

    #[test]
    fn test_all_violations_surfaced_in_order() {
        let t = task("T1")
            .with_time_window(TimeWindow::from_hm(9, 0, 11, 0))
            .with_required_skill("algae_removal");
        let other = task("T2").with_time_window(TimeWindow::from_hm(10, 0, 12, 0));
        let e = Employee::new("E1")
            .with_availability(false)
            .with_max_tasks_per_day(1);

        let check = validate(&t, &e, &[&other]);
        assert!(!check.allowed);
        let kinds: Vec<ViolationKind> = check.violations.iter().map(|v| v.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ViolationKind::EmployeeUnavailable,
                ViolationKind::OverCapacity,
                ViolationKind::TimeConflict,
                ViolationKind::SkillMismatch,
            ]
        );
        assert_eq!(check.blocking().len(), 2);
        assert_eq!(check.advisories().len(), 2);
    }
}
