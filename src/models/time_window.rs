//! Time windows and working hours.
//!
//! All times are minutes since midnight on the task's scheduled date.
//! Windows are half-open `[start, end)`: a window ending at 11:00 and one
//! starting at 11:00 touch but do not overlap.

use serde::{Deserialize, Serialize};

/// A half-open time interval `[start, end)` within one day.
///
/// Both bounds are minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Window start (minutes since midnight, inclusive).
    pub start_min: u16,
    /// Window end (minutes since midnight, exclusive).
    pub end_min: u16,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start_min: u16, end_min: u16) -> Self {
        Self { start_min, end_min }
    }

    /// Creates a window from hour/minute pairs, e.g. `from_hm(9, 0, 10, 30)`.
    pub fn from_hm(start_h: u16, start_m: u16, end_h: u16, end_m: u16) -> Self {
        Self::new(start_h * 60 + start_m, end_h * 60 + end_m)
    }

    /// Window length in minutes.
    #[inline]
    pub fn duration_min(&self) -> u16 {
        self.end_min.saturating_sub(self.start_min)
    }

    /// Whether a minute-of-day falls within this window.
    #[inline]
    pub fn contains(&self, minute: u16) -> bool {
        minute >= self.start_min && minute < self.end_min
    }

    /// Whether two windows overlap.
    ///
    /// Half-open semantics: touching endpoints do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }
}

/// An employee's daily working hours.
///
/// Same minute-of-day representation as [`TimeWindow`]; kept as a separate
/// type because working hours describe a shift, not a task constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    /// Shift start (minutes since midnight).
    pub start_min: u16,
    /// Shift end (minutes since midnight).
    pub end_min: u16,
}

impl WorkingHours {
    /// Creates working hours from minute bounds.
    pub fn new(start_min: u16, end_min: u16) -> Self {
        Self { start_min, end_min }
    }

    /// Creates working hours from whole hours, e.g. `from_hours(8, 16)`.
    pub fn from_hours(start_h: u16, end_h: u16) -> Self {
        Self::new(start_h * 60, end_h * 60)
    }
}

impl Default for WorkingHours {
    /// Standard 08:00–16:00 shift.
    fn default() -> Self {
        Self::from_hours(8, 16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_contains() {
        let w = TimeWindow::from_hm(9, 0, 10, 0);
        assert!(w.contains(540));
        assert!(w.contains(599));
        assert!(!w.contains(600)); // exclusive end
        assert!(!w.contains(480));
    }

    #[test]
    fn test_overlap_symmetry() {
        let a = TimeWindow::from_hm(9, 0, 11, 0);
        let b = TimeWindow::from_hm(10, 0, 12, 0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_self_overlap() {
        let w = TimeWindow::from_hm(9, 0, 10, 0);
        assert!(w.overlaps(&w));
    }

    #[test]
    fn test_touching_windows_do_not_overlap() {
        let a = TimeWindow::from_hm(10, 0, 11, 0);
        let b = TimeWindow::from_hm(11, 0, 12, 0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_contained_window_overlaps() {
        let outer = TimeWindow::from_hm(8, 0, 16, 0);
        let inner = TimeWindow::from_hm(10, 0, 11, 0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_duration() {
        let w = TimeWindow::from_hm(9, 15, 10, 45);
        assert_eq!(w.duration_min(), 90);
    }

    #[test]
    fn test_working_hours_default() {
        let wh = WorkingHours::default();
        assert_eq!(wh.start_min, 480);
        assert_eq!(wh.end_min, 960);
    }
}
