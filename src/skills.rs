//! Skill matching.
//!
//! Determines whether an employee's skill set satisfies a task's required
//! skills, and how much of a partial match there is. An empty requirement
//! set never blocks: general tasks can go to anyone. Partial matches are
//! surfaced as advisory findings by the validator, not hard failures.

use std::collections::BTreeSet;

/// Number of required skills the employee actually has.
pub fn match_count(required: &BTreeSet<String>, have: &BTreeSet<String>) -> usize {
    required.intersection(have).count()
}

/// Whether every required skill is present.
///
/// Vacuously true for an empty requirement set.
pub fn satisfies_all(required: &BTreeSet<String>, have: &BTreeSet<String>) -> bool {
    required.is_subset(have)
}
