//! Automatic candidate selection.
//!
//! Picks the best employee for a task from a candidate pool. Selection is
//! fully deterministic: skill-match count decides, ties go to the least
//! loaded employee, and remaining ties keep input order. Repeated runs
//! over the same pool always pick the same candidate.

use std::collections::HashMap;

use crate::models::{Employee, Task};
use crate::skills;

/// Picks the best employee for `task` from `pool`.
///
/// `load` maps employee ID to the number of tasks already assigned for
/// the date; missing entries count as zero.
///
/// # Selection
/// 1. Drop unavailable employees.
/// 2. Keep the highest skill-match count (all tie at 0 when the task
///    requires nothing).
/// 3. Tie-break on fewest assigned tasks, then first in input order.
///
/// Returns `None` when the filtered pool is empty — the board surfaces
/// that as a no-qualified-employee outcome, not an error.
pub fn pick_best_employee<'a>(
    task: &Task,
    pool: &'a [Employee],
    load: &HashMap<String, usize>,
) -> Option<&'a Employee> {
    let mut best: Option<(&Employee, usize, usize)> = None;

    for employee in pool.iter().filter(|e| e.is_available) {
        let score = skills::match_count(&task.required_skills, &employee.skills);
        let assigned = load.get(&employee.id).copied().unwrap_or(0);

        let better = match best {
            None => true,
            // Strictly-better comparisons keep input order on full ties
            Some((_, best_score, best_load)) => {
                score > best_score || (score == best_score && assigned < best_load)
            }
        };
        if better {
            best = Some((employee, score, assigned));
        }
    }

    best.map(|(e, _, _)| e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn task_requiring(skills: &[&str]) -> Task {
        let mut t = Task::new("T1", Coordinates::new(55.0, 12.0), date());
        for s in skills {
            t = t.with_required_skill(*s);
        }
        t
    }

    #[test]
    fn test_prefers_best_skill_match() {
        let pool = vec![
            Employee::new("A").with_skill("x"),
            Employee::new("B").with_skill("x").with_skill("y"),
        ];
        let t = task_requiring(&["x", "y"]);
        let load = HashMap::new();

        // Deterministic across repeated runs
        for _ in 0..10 {
            let picked = pick_best_employee(&t, &pool, &load).unwrap();
            assert_eq!(picked.id, "B");
        }
    }

    #[test]
    fn test_skill_tie_goes_to_least_loaded() {
        let pool = vec![
            Employee::new("A").with_skill("x"),
            Employee::new("B").with_skill("x"),
        ];
        let t = task_requiring(&["x"]);
        let load = HashMap::from([("A".to_string(), 3), ("B".to_string(), 1)]);

        let picked = pick_best_employee(&t, &pool, &load).unwrap();
        assert_eq!(picked.id, "B");
    }

    #[test]
    fn test_full_tie_keeps_input_order() {
        let pool = vec![Employee::new("A"), Employee::new("B")];
        let t = task_requiring(&[]);
        let load = HashMap::new();

        let picked = pick_best_employee(&t, &pool, &load).unwrap();
        assert_eq!(picked.id, "A");
    }

    #[test]
    fn test_unavailable_filtered_out() {
        let pool = vec![
            Employee::new("A").with_availability(false).with_skill("x"),
            Employee::new("B"),
        ];
        let t = task_requiring(&["x"]);
        let load = HashMap::new();

        // A matches the skill but is on leave; B wins despite no match
        let picked = pick_best_employee(&t, &pool, &load).unwrap();
        assert_eq!(picked.id, "B");
    }

    #[test]
    fn test_empty_pool_yields_none() {
        let t = task_requiring(&["x"]);
        let load = HashMap::new();
        assert!(pick_best_employee(&t, &[], &load).is_none());

        let all_out = vec![Employee::new("A").with_availability(false)];
        assert!(pick_best_employee(&t, &all_out, &load).is_none());
    }

    #[test]
    fn test_missing_load_entry_counts_as_zero() {
        let pool = vec![
            Employee::new("A").with_skill("x"),
            Employee::new("B").with_skill("x"),
        ];
        let t = task_requiring(&["x"]);
        let load = HashMap::from([("A".to_string(), 1)]);

        let picked = pick_best_employee(&t, &pool, &load).unwrap();
        assert_eq!(picked.id, "B");
    }
}
