//! Geographic coordinates and great-circle distance.
//!
//! Distances are a routing proxy only: the Haversine formula gives the
//! great-circle distance between two points, not real-world driving
//! distance. That is all the sequencing heuristic needs.
//!
//! # Reference
//! Sinnott (1984), "Virtues of the Haversine", Sky & Telescope 68(2)

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees (positive = north).
    pub lat: f64,
    /// Longitude in degrees (positive = east).
    pub lng: f64,
}

impl Coordinates {
    /// Creates a new coordinate pair.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to another point in kilometers.
    pub fn distance_km(&self, other: &Self) -> f64 {
        distance_km(*self, *other)
    }
}

/// Haversine great-circle distance between two points, in kilometers.
///
/// Pure and total: any pair of finite coordinates yields a finite,
/// non-negative distance.
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance() {
        let p = Coordinates::new(55.6761, 12.5683);
        assert!(distance_km(p, p).abs() < 1e-10);
    }

    #[test]
    fn test_symmetry() {
        let a = Coordinates::new(55.6761, 12.5683); // Copenhagen
        let b = Coordinates::new(56.1629, 10.2039); // Aarhus
        assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-10);
    }

    #[test]
    fn test_copenhagen_aarhus() {
        let a = Coordinates::new(55.6761, 12.5683);
        let b = Coordinates::new(56.1629, 10.2039);
        // Great-circle distance is roughly 157 km
        let d = distance_km(a, b);
        assert!(d > 150.0 && d < 165.0, "got {d}");
    }

    #[test]
    fn test_one_degree_latitude() {
        // One degree of latitude is ~111.2 km everywhere
        let a = Coordinates::new(55.0, 12.0);
        let b = Coordinates::new(56.0, 12.0);
        let d = distance_km(a, b);
        assert!((d - 111.2).abs() < 1.0, "got {d}");
    }

    #[test]
    fn test_method_matches_free_fn() {
        let a = Coordinates::new(55.0, 12.0);
        let b = Coordinates::new(55.1, 12.1);
        assert!((a.distance_km(&b) - distance_km(a, b)).abs() < 1e-12);
    }
}
