//! Task (service visit) model.
//!
//! A task is one customer visit on a given date: an address, an estimated
//! duration, an optional time window, required skills, and an assignment
//! state. Tasks without a time window are "flexible" and may be sequenced
//! anywhere in a route.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Coordinates, TimeWindow};

/// A field-service task to be assigned and sequenced.
///
/// # Assignee Semantics
/// `assigned_employee_ids` is kept as a list for wire compatibility, but
/// the engine uses single-primary-assignee semantics: `assign` writes a
/// one-element list and all capacity/conflict logic reads the primary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Short description shown on the board.
    pub title: String,
    /// Customer the visit is for.
    pub customer_name: String,
    /// Visit address (display only; `coordinates` drives distance).
    pub address: String,
    /// Visit location.
    pub coordinates: Coordinates,
    /// Estimated duration in minutes (> 0).
    pub estimated_duration_min: u32,
    /// Urgency 1–5 (5 = most urgent).
    pub priority: u8,
    /// Date the task is scheduled on.
    pub start_date: NaiveDate,
    /// Optional fixed time window. `None` = flexible.
    pub time_window: Option<TimeWindow>,
    /// Skills required to perform the visit (may be empty).
    pub required_skills: BTreeSet<String>,
    /// Assigned employees (single primary in practice; see type docs).
    pub assigned_employee_ids: Vec<String>,
    /// 1-based position in the assignee's route. Set only by sequencing,
    /// cleared whenever the assignment changes.
    pub route_order: Option<u32>,
    /// Lifecycle state.
    pub status: TaskStatus,
}

/// Task lifecycle state.
///
/// Legal transitions: `Pending → Assigned → InProgress → Completed`,
/// plus `Pending → Cancelled` and `Assigned → Pending` (unassign).
/// `Completed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not yet assigned to anyone.
    Pending,
    /// Assigned to an employee, not started.
    Assigned,
    /// Work underway.
    InProgress,
    /// Work finished. Terminal.
    Completed,
    /// Visit called off. Terminal.
    Cancelled,
}

/// Priority as the surrounding product labels it.
///
/// The engine works on the normalized 1–5 integer scale; this enum exists
/// only to convert label-based records at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Low,
    Medium,
    High,
    Urgent,
}

impl PriorityLevel {
    /// Normalized 1–5 weight (urgent=5, high=4, medium=3, low=1).
    pub fn weight(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 3,
            Self::High => 4,
            Self::Urgent => 5,
        }
    }
}

impl TaskStatus {
    /// Whether this status permits no further transitions.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Whether a transition to `next` is legal.
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Assigned)
                | (Self::Pending, Self::Cancelled)
                | (Self::Assigned, Self::Pending)
                | (Self::Assigned, Self::InProgress)
                | (Self::Assigned, Self::Cancelled)
                | (Self::InProgress, Self::Completed)
                | (Self::InProgress, Self::Cancelled)
        )
    }
}

impl Task {
    /// Creates a pending task at the given location and date.
    pub fn new(id: impl Into<String>, coordinates: Coordinates, start_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            customer_name: String::new(),
            address: String::new(),
            coordinates,
            estimated_duration_min: 60,
            priority: 3,
            start_date,
            time_window: None,
            required_skills: BTreeSet::new(),
            assigned_employee_ids: Vec::new(),
            route_order: None,
            status: TaskStatus::Pending,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the customer name.
    pub fn with_customer(mut self, name: impl Into<String>) -> Self {
        self.customer_name = name.into();
        self
    }

    /// Sets the address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the estimated duration in minutes.
    pub fn with_duration_min(mut self, minutes: u32) -> Self {
        self.estimated_duration_min = minutes;
        self
    }

    /// Sets the priority, clamped to 1..=5.
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority.clamp(1, 5);
        self
    }

    /// Sets the priority from a product label.
    pub fn with_priority_level(self, level: PriorityLevel) -> Self {
        self.with_priority(level.weight())
    }

    /// Sets a fixed time window.
    pub fn with_time_window(mut self, window: TimeWindow) -> Self {
        self.time_window = Some(window);
        self
    }

    /// Adds a required skill.
    pub fn with_required_skill(mut self, skill: impl Into<String>) -> Self {
        self.required_skills.insert(skill.into());
        self
    }

    /// Whether the task has no fixed time window.
    #[inline]
    pub fn is_flexible(&self) -> bool {
        self.time_window.is_none()
    }

    /// The primary assignee, if any.
    pub fn primary_assignee(&self) -> Option<&str> {
        self.assigned_employee_ids.first().map(String::as_str)
    }
}
