//! Task assignment and route sequencing for field-service dispatch.
//!
//! This crate is the decision core of a field-service scheduling product:
//! it validates task-to-employee assignments, mediates manual moves, and
//! produces each employee's visiting order. The surrounding CRUD
//! application (persistence, auth, UI) lives elsewhere and talks to this
//! crate through plain in-memory calls.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Employee`, `TimeWindow`,
//!   `Coordinates`, `Route`
//! - **`skills`**: Required-skill matching and partial-match scoring
//! - **`conflict`**: Time-window overlap detection per employee
//! - **`validation`**: Combined accept/reject decision with structured
//!   blocking and advisory violations
//! - **`assign`**: Deterministic best-candidate selection
//! - **`sequencing`**: `RouteOptimizer` seam and the default weighted
//!   priority/distance heuristic
//! - **`board`**: `ScheduleBoard` — one working day's state and its
//!   validated mutations
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use field_dispatch::board::ScheduleBoard;
//! use field_dispatch::models::{Coordinates, Employee, Task};
//!
//! let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//! let depot = Coordinates::new(55.6761, 12.5683);
//!
//! let mut board = ScheduleBoard::new(date, depot)
//!     .with_employee(Employee::new("E1").with_skill("window_cleaning"))
//!     .with_task(
//!         Task::new("T1", Coordinates::new(55.70, 12.55), date)
//!             .with_required_skill("window_cleaning"),
//!     );
//!
//! board.assign("T1", "E1", false).unwrap();
//! let route = board.optimize_route("E1").unwrap();
//! assert_eq!(route.task_ids(), vec!["T1"]);
//! ```

pub mod assign;
pub mod board;
pub mod conflict;
pub mod models;
pub mod sequencing;
pub mod skills;
pub mod validation;
