//! Schedule board orchestrator.
//!
//! Holds one working day's tasks and employees in memory and mediates
//! every assignment mutation through the validator. Nothing commits past
//! a blocking violation, and advisory violations commit only with an
//! explicit `force` — the headless replacement for an interactive
//! scheduler's confirm dialogs.
//!
//! One board instance covers one (company, date) scope. Operations are
//! synchronous and pure in-memory; callers that share a board across
//! threads must serialize writers to keep the capacity and conflict
//! invariants.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, warn};

use crate::assign;
use crate::conflict;
use crate::models::{Coordinates, Employee, Route, RouteStop, Task, TaskStatus};
use crate::sequencing::{RouteOptimizer, WeightedSequencer};
use crate::skills;
use crate::validation::{self, Violation};

/// Errors from board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Task ID not on this board.
    #[error("unknown task '{0}'")]
    UnknownTask(String),
    /// Employee ID not on this board.
    #[error("unknown employee '{0}'")]
    UnknownEmployee(String),
    /// The task is not currently assigned to the named employee.
    #[error("task '{task_id}' is not assigned to employee '{employee_id}'")]
    TaskNotAssignedTo {
        task_id: String,
        employee_id: String,
    },
    /// A blocking violation refused the assignment.
    #[error("assignment of task '{task_id}' rejected ({} violation(s))", violations.len())]
    AssignmentRejected {
        task_id: String,
        violations: Vec<Violation>,
    },
    /// Advisory violations present; re-invoke with `force = true` to commit.
    #[error("assignment of task '{task_id}' needs confirmation ({} advisory violation(s))", violations.len())]
    ConfirmationRequired {
        task_id: String,
        violations: Vec<Violation>,
    },
    /// The requested status change is not legal.
    #[error("invalid status transition for task '{task_id}': {from:?} -> {to:?}")]
    InvalidStateTransition {
        task_id: String,
        from: TaskStatus,
        to: TaskStatus,
    },
}

/// Result of an auto-assign request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoAssignOutcome {
    /// Task committed to the named employee.
    Assigned { employee_id: String },
    /// No available candidate; the caller falls back to manual assignment.
    NoQualifiedEmployee,
}

/// Aggregate board counts, recomputed from scratch on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardStats {
    /// All tasks on the board.
    pub total_tasks: usize,
    /// Tasks without an assignee.
    pub unassigned: usize,
    /// Tasks with an assignee.
    pub assigned: usize,
    /// Tasks whose time window overlaps another task on the same employee.
    pub time_conflicts: usize,
    /// Tasks whose assignee lacks at least one required skill.
    pub skill_mismatches: usize,
}

/// One working day's tasks and employees, with validated mutations.
#[derive(Debug, Clone)]
pub struct ScheduleBoard {
    date: NaiveDate,
    depot: Coordinates,
    tasks: HashMap<String, Task>,
    employees: HashMap<String, Employee>,
    /// Insertion order of employees; the auto-assign candidate pool and
    /// its final tie-break follow this order.
    employee_order: Vec<String>,
    optimizer: Arc<dyn RouteOptimizer>,
}

impl ScheduleBoard {
    /// Creates an empty board for a date, with the given depot as the
    /// routing origin for employees without a known location.
    pub fn new(date: NaiveDate, depot: Coordinates) -> Self {
        Self {
            date,
            depot,
            tasks: HashMap::new(),
            employees: HashMap::new(),
            employee_order: Vec::new(),
            optimizer: Arc::new(WeightedSequencer::new()),
        }
    }

    /// Replaces the route optimizer.
    pub fn with_optimizer(mut self, optimizer: Arc<dyn RouteOptimizer>) -> Self {
        self.optimizer = optimizer;
        self
    }

    /// The board's working date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Adds or replaces a task.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.insert(task.id.clone(), task);
    }

    /// Adds or replaces an employee.
    pub fn add_employee(&mut self, employee: Employee) {
        if !self.employees.contains_key(&employee.id) {
            self.employee_order.push(employee.id.clone());
        }
        self.employees.insert(employee.id.clone(), employee);
    }

    /// Builder-style [`add_task`](Self::add_task).
    pub fn with_task(mut self, task: Task) -> Self {
        self.add_task(task);
        self
    }

    /// Builder-style [`add_employee`](Self::add_employee).
    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.add_employee(employee);
        self
    }

    /// Looks up a task.
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    /// Looks up an employee.
    pub fn employee(&self, employee_id: &str) -> Option<&Employee> {
        self.employees.get(employee_id)
    }

    /// The employee's current workload: tasks assigned to them that are
    /// not cancelled. Completed visits still count toward the day's cap.
    pub fn assignments_for(&self, employee_id: &str) -> Vec<&Task> {
        self.tasks
            .values()
            .filter(|t| {
                t.primary_assignee() == Some(employee_id) && t.status != TaskStatus::Cancelled
            })
            .collect()
    }

    /// Validates and commits assigning a task to an employee.
    ///
    /// Blocking violations always reject, even with `force = true`.
    /// Advisory violations reject with [`BoardError::ConfirmationRequired`]
    /// unless `force` is set.
    pub fn assign(&mut self, task_id: &str, employee_id: &str, force: bool) -> Result<(), BoardError> {
        let task = self
            .tasks
            .get(task_id)
            .ok_or_else(|| BoardError::UnknownTask(task_id.to_string()))?;
        let employee = self
            .employees
            .get(employee_id)
            .ok_or_else(|| BoardError::UnknownEmployee(employee_id.to_string()))?;

        if task.status.is_terminal() {
            return Err(BoardError::InvalidStateTransition {
                task_id: task_id.to_string(),
                from: task.status,
                to: TaskStatus::Assigned,
            });
        }

        // Capacity and conflicts are judged against the target's workload
        // without the task itself, so re-assigning is not double-counted.
        let existing: Vec<&Task> = self
            .assignments_for(employee_id)
            .into_iter()
            .filter(|t| t.id != task_id)
            .collect();

        let check = validation::validate(task, employee, &existing);
        if !check.allowed {
            warn!(task_id, employee_id, violations = check.violations.len(), "assignment rejected");
            return Err(BoardError::AssignmentRejected {
                task_id: task_id.to_string(),
                violations: check.violations,
            });
        }
        if check.needs_confirmation() && !force {
            return Err(BoardError::ConfirmationRequired {
                task_id: task_id.to_string(),
                violations: check.violations,
            });
        }
        if !check.violations.is_empty() {
            warn!(task_id, employee_id, "advisory violations overridden by force");
        }

        let task = self
            .tasks
            .get_mut(task_id)
            .ok_or_else(|| BoardError::UnknownTask(task_id.to_string()))?;
        task.assigned_employee_ids = vec![employee_id.to_string()];
        task.route_order = None;
        if task.status == TaskStatus::Pending {
            task.status = TaskStatus::Assigned;
        }
        debug!(task_id, employee_id, "task assigned");
        Ok(())
    }

    /// Clears a task's assignment and returns it to `Pending`.
    ///
    /// Succeeds for any non-terminal task; terminal tasks cannot be
    /// reopened and are rejected.
    pub fn unassign(&mut self, task_id: &str) -> Result<(), BoardError> {
        let task = self
            .tasks
            .get_mut(task_id)
            .ok_or_else(|| BoardError::UnknownTask(task_id.to_string()))?;

        if task.status.is_terminal() {
            return Err(BoardError::InvalidStateTransition {
                task_id: task_id.to_string(),
                from: task.status,
                to: TaskStatus::Pending,
            });
        }

        task.assigned_employee_ids.clear();
        task.route_order = None;
        task.status = TaskStatus::Pending;
        debug!(task_id, "task unassigned");
        Ok(())
    }

    /// Moves a task from one employee to another (drag-and-drop).
    ///
    /// Equivalent to unassign-then-assign, except validation runs against
    /// the target's workload excluding the task being moved, and the task
    /// is left untouched when the target rejects it.
    pub fn move_task(
        &mut self,
        task_id: &str,
        from_employee_id: &str,
        to_employee_id: &str,
        force: bool,
    ) -> Result<(), BoardError> {
        let task = self
            .tasks
            .get(task_id)
            .ok_or_else(|| BoardError::UnknownTask(task_id.to_string()))?;
        if task.primary_assignee() != Some(from_employee_id) {
            return Err(BoardError::TaskNotAssignedTo {
                task_id: task_id.to_string(),
                employee_id: from_employee_id.to_string(),
            });
        }

        // assign() already excludes the moved task from the target's
        // workload and leaves state untouched on rejection.
        self.assign(task_id, to_employee_id, force)?;
        debug!(task_id, from_employee_id, to_employee_id, "task moved");
        Ok(())
    }

    /// Picks the best candidate for a task and assigns it.
    ///
    /// Candidate order is employee insertion order, making the final
    /// tie-break deterministic. An empty candidate pool is an outcome,
    /// not an error; advisory violations on the chosen candidate still
    /// need `force` like any other assignment.
    pub fn auto_assign(
        &mut self,
        task_id: &str,
        force: bool,
    ) -> Result<AutoAssignOutcome, BoardError> {
        let task = self
            .tasks
            .get(task_id)
            .ok_or_else(|| BoardError::UnknownTask(task_id.to_string()))?;

        let pool: Vec<Employee> = self
            .employee_order
            .iter()
            .filter_map(|id| self.employees.get(id).cloned())
            .collect();
        let load: HashMap<String, usize> = pool
            .iter()
            .map(|e| (e.id.clone(), self.assignments_for(&e.id).len()))
            .collect();

        let Some(best) = assign::pick_best_employee(task, &pool, &load) else {
            debug!(task_id, "no qualified employee for auto-assign");
            return Ok(AutoAssignOutcome::NoQualifiedEmployee);
        };
        let employee_id = best.id.clone();

        self.assign(task_id, &employee_id, force)?;
        Ok(AutoAssignOutcome::Assigned { employee_id })
    }

    /// Recomputes one employee's visiting order and writes it back.
    ///
    /// Sequences the employee's open assignments (assigned or in
    /// progress) and replaces their `route_order` values in full. Other
    /// employees' tasks are never touched. Returns the derived route.
    pub fn optimize_route(&mut self, employee_id: &str) -> Result<Route, BoardError> {
        let employee = self
            .employees
            .get(employee_id)
            .ok_or_else(|| BoardError::UnknownEmployee(employee_id.to_string()))?
            .clone();

        let open: Vec<Task> = self
            .tasks
            .values()
            .filter(|t| {
                t.primary_assignee() == Some(employee_id)
                    && matches!(t.status, TaskStatus::Assigned | TaskStatus::InProgress)
            })
            .cloned()
            .collect();

        let sequenced = self.optimizer.sequence(&open, &employee, self.depot);

        let mut route = Route::new(employee_id, self.date);
        for task in &sequenced {
            if let Some(stored) = self.tasks.get_mut(&task.id) {
                stored.route_order = task.route_order;
            }
            route.stops.push(RouteStop {
                task_id: task.id.clone(),
                route_order: task.route_order.unwrap_or(0),
                coordinates: task.coordinates,
            });
        }
        debug!(
            employee_id,
            stops = route.stop_count(),
            optimizer = self.optimizer.name(),
            "route optimized"
        );
        Ok(route)
    }

    /// The current route snapshot for an employee, derived from stored
    /// `route_order` values (tasks without one are excluded).
    pub fn route_for(&self, employee_id: &str) -> Result<Route, BoardError> {
        if !self.employees.contains_key(employee_id) {
            return Err(BoardError::UnknownEmployee(employee_id.to_string()));
        }

        let mut stops: Vec<RouteStop> = self
            .tasks
            .values()
            .filter(|t| t.primary_assignee() == Some(employee_id))
            .filter_map(|t| {
                t.route_order.map(|order| RouteStop {
                    task_id: t.id.clone(),
                    route_order: order,
                    coordinates: t.coordinates,
                })
            })
            .collect();
        stops.sort_by_key(|s| s.route_order);

        let mut route = Route::new(employee_id, self.date);
        route.stops = stops;
        Ok(route)
    }

    /// Applies a status transition, rejecting illegal ones.
    ///
    /// A transition to `Pending` also clears the assignment, matching
    /// [`unassign`](Self::unassign).
    pub fn set_status(&mut self, task_id: &str, to: TaskStatus) -> Result<(), BoardError> {
        let task = self
            .tasks
            .get_mut(task_id)
            .ok_or_else(|| BoardError::UnknownTask(task_id.to_string()))?;

        if !task.status.can_transition_to(to) {
            return Err(BoardError::InvalidStateTransition {
                task_id: task_id.to_string(),
                from: task.status,
                to,
            });
        }

        task.status = to;
        if to == TaskStatus::Pending {
            task.assigned_employee_ids.clear();
            task.route_order = None;
        }
        debug!(task_id, status = ?to, "status changed");
        Ok(())
    }

    /// Aggregate counts for the board header, recomputed from scratch.
    pub fn stats(&self) -> BoardStats {
        let total_tasks = self.tasks.len();
        let assigned = self
            .tasks
            .values()
            .filter(|t| t.primary_assignee().is_some())
            .count();

        let mut time_conflicts = 0;
        let mut skill_mismatches = 0;
        for task in self.tasks.values() {
            if task.status == TaskStatus::Cancelled {
                continue;
            }
            let Some(employee_id) = task.primary_assignee() else {
                continue;
            };

            let peers: Vec<&Task> = self
                .assignments_for(employee_id)
                .into_iter()
                .filter(|t| t.id != task.id)
                .collect();
            if conflict::has_conflict(task, &peers) {
                time_conflicts += 1;
            }

            if let Some(employee) = self.employees.get(employee_id) {
                if !task.required_skills.is_empty()
                    && !skills::satisfies_all(&task.required_skills, &employee.skills)
                {
                    skill_mismatches += 1;
                }
            }
        }

        BoardStats {
            total_tasks,
            unassigned: total_tasks - assigned,
            assigned,
            time_conflicts,
            skill_mismatches,
        }
    }
}
