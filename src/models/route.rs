//! Route (visiting sequence) model.
//!
//! A route is the derived, non-authoritative ordering of one employee's
//! tasks for one date. It is recomputed in full on every optimize call —
//! a new sequence always replaces the old one, never a partial edit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{distance_km, Coordinates};

/// One employee's ordered visiting sequence for a date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    /// Employee this route belongs to.
    pub employee_id: String,
    /// Working date.
    pub date: NaiveDate,
    /// Stops in visiting order.
    pub stops: Vec<RouteStop>,
}

/// A single stop within a route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteStop {
    /// Task visited at this stop.
    pub task_id: String,
    /// 1-based position in the route.
    pub route_order: u32,
    /// Stop location (denormalized for distance queries).
    pub coordinates: Coordinates,
}

impl Route {
    /// Creates an empty route.
    pub fn new(employee_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
            stops: Vec::new(),
        }
    }

    /// Number of stops.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Whether the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Ordered task IDs.
    pub fn task_ids(&self) -> Vec<&str> {
        self.stops.iter().map(|s| s.task_id.as_str()).collect()
    }

    /// Great-circle distance estimate for the whole route in kilometers,
    /// starting from `origin` and visiting stops in order.
    ///
    /// A proxy figure for the route header, not a driving distance.
    pub fn total_distance_km(&self, origin: Coordinates) -> f64 {
        let mut total = 0.0;
        let mut at = origin;
        for stop in &self.stops {
            total += distance_km(at, stop.coordinates);
            at = stop.coordinates;
        }
        total
    }
}
