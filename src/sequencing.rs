//! Route sequencing.
//!
//! Produces the visiting order for one employee's tasks. The default
//! sequencer is a deterministic heuristic, not a route optimizer: fixed
//! time-window tasks go first in window-start order, then flexible tasks
//! by a weighted priority/distance score. The [`RouteOptimizer`] trait is
//! the seam where a real distance-matrix optimizer can be plugged in
//! without touching the board.

use std::fmt::Debug;

use crate::models::{distance_km, Coordinates, Employee, Task};

/// Weight of task priority in the flexible-task score.
const PRIORITY_WEIGHT: f64 = 0.6;
/// Weight of distance from the employee's origin in the flexible-task score.
const DISTANCE_WEIGHT: f64 = 0.4;

/// Strategy for ordering one employee's tasks into a route.
///
/// Implementations must be pure: the input slice is never mutated and the
/// returned tasks are new values carrying `route_order` 1..N. An empty
/// input yields an empty sequence.
pub trait RouteOptimizer: Send + Sync + Debug {
    /// Optimizer name for diagnostics.
    fn name(&self) -> &'static str;

    /// Returns `tasks` in visiting order, each annotated with a 1-based
    /// `route_order`. `depot` is the routing origin for employees without
    /// a known current location.
    fn sequence(&self, tasks: &[Task], employee: &Employee, depot: Coordinates) -> Vec<Task>;
}

/// Default sequencing heuristic.
///
/// # Algorithm
/// 1. Partition into fixed (has time window) and flexible tasks.
/// 2. Fixed: stable sort ascending by window start — equal starts keep
///    their input order.
/// 3. Flexible: sort descending by
///    `priority * 0.6 + distance_km(task, origin) * 0.4`, so urgent and
///    far-from-base stops surface first. This is the documented business
///    rule, not travel-distance minimization.
/// 4. Concatenate fixed then flexible and number the stops 1..N.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedSequencer;

impl WeightedSequencer {
    /// Creates the default sequencer.
    pub fn new() -> Self {
        Self
    }

    /// Flexible-task score for a given routing origin.
    fn score(task: &Task, origin: Coordinates) -> f64 {
        f64::from(task.priority) * PRIORITY_WEIGHT
            + distance_km(task.coordinates, origin) * DISTANCE_WEIGHT
    }
}

impl RouteOptimizer for WeightedSequencer {
    fn name(&self) -> &'static str {
        "weighted"
    }

    fn sequence(&self, tasks: &[Task], employee: &Employee, depot: Coordinates) -> Vec<Task> {
        let origin = employee.routing_origin(depot);

        let mut fixed: Vec<Task> = Vec::new();
        let mut flexible: Vec<Task> = Vec::new();
        for task in tasks {
            if task.is_flexible() {
                flexible.push(task.clone());
            } else {
                fixed.push(task.clone());
            }
        }

        // Stable sorts: ties keep input order
        fixed.sort_by_key(|t| t.time_window.map(|w| w.start_min));
        flexible.sort_by(|a, b| {
            Self::score(b, origin)
                .partial_cmp(&Self::score(a, origin))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut sequenced = fixed;
        sequenced.append(&mut flexible);
        for (i, task) in sequenced.iter_mut().enumerate() {
            task.route_order = Some(i as u32 + 1);
        }
        sequenced
    }
}
