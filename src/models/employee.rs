//! Employee model.
//!
//! Employees are the field workers that tasks are assigned to. Each has a
//! skill set, a daily capacity, an availability flag (e.g. on leave), a
//! shift, and an optional last-known location used as the routing origin.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Coordinates, WorkingHours};

/// A field-service employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Skills this employee is qualified for.
    pub skills: BTreeSet<String>,
    /// Maximum number of tasks per working day (> 0).
    pub max_tasks_per_day: u32,
    /// Whether the employee can take assignments today (false = on leave).
    pub is_available: bool,
    /// Daily shift.
    pub working_hours: WorkingHours,
    /// Last known location. `None` = routing starts from the depot.
    pub current_location: Option<Coordinates>,
}

impl Employee {
    /// Creates an available employee with default shift and capacity 8.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            skills: BTreeSet::new(),
            max_tasks_per_day: 8,
            is_available: true,
            working_hours: WorkingHours::default(),
            current_location: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a skill.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.insert(skill.into());
        self
    }

    /// Sets the daily task capacity.
    pub fn with_max_tasks_per_day(mut self, max: u32) -> Self {
        self.max_tasks_per_day = max.max(1);
        self
    }

    /// Sets availability (false = on leave or otherwise out).
    pub fn with_availability(mut self, available: bool) -> Self {
        self.is_available = available;
        self
    }

    /// Sets the working hours.
    pub fn with_working_hours(mut self, hours: WorkingHours) -> Self {
        self.working_hours = hours;
        self
    }

    /// Sets the current location.
    pub fn with_location(mut self, location: Coordinates) -> Self {
        self.current_location = Some(location);
        self
    }

    /// Whether this employee has a given skill.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }

    /// Routing origin: current location, or the given depot when unknown.
    pub fn routing_origin(&self, depot: Coordinates) -> Coordinates {
        self.current_location.unwrap_or(depot)
    }
}
