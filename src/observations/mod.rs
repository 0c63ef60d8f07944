//! # Range observations
//!
//! A [`Range`](crate::observations::Range) pairs a **station** (a point with known, exact
//! coordinates) with the **distance** measured from that station to the unknown target.
//! A problem instance is an ordered slice of ranges; the order is irrelevant to the
//! least-squares problem but row `i` of every residual vector and Jacobian built by
//! [`residuals`](crate::observations::residuals) always refers to the `i`-th range.
//!
//! ## Example
//!
//! ```rust
//! use trilateration::geometry::Point;
//! use trilateration::observations::Range;
//!
//! let range = Range::new(Point::new(3.0, 4.0, 0.0), 6.0);
//! assert_eq!(range.predicted_distance(&Point::ORIGIN), 5.0);
//! assert_eq!(range.residual(&Point::ORIGIN), 1.0);
//! ```
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{distance, Point};

pub mod residuals;

/// A distance measured from a known station to the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// Position of the station, assumed fixed and exact.
    pub station: Point,
    /// Measured distance from the station to the target (non-negative).
    pub distance: f64,
}

impl Range {
    pub fn new(station: Point, distance: f64) -> Self {
        Range { station, distance }
    }

    /// Distance the target would be at if it were located at `guess`.
    pub fn predicted_distance(&self, guess: &Point) -> f64 {
        distance(&self.station, guess)
    }

    /// Measured minus predicted distance at `guess`.
    pub fn residual(&self, guess: &Point) -> f64 {
        self.distance - self.predicted_distance(guess)
    }
}

impl From<(Point, f64)> for Range {
    fn from((station, distance): (Point, f64)) -> Self {
        Range::new(station, distance)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "station {} at {}", self.station, self.distance)
    }
}
