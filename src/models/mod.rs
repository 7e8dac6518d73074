//! Dispatch domain models.
//!
//! Core data types for the assignment and sequencing engine: tasks,
//! employees, time windows, coordinates, and derived routes. All models
//! are plain serde-serializable records; the persistence layer that loads
//! and stores them lives outside this crate.

mod employee;
mod geo;
mod route;
mod task;
mod time_window;

pub use employee::Employee;
pub use geo::{distance_km, Coordinates};
pub use route::{Route, RouteStop};
pub use task::{PriorityLevel, Task, TaskStatus};
pub use time_window::{TimeWindow, WorkingHours};
