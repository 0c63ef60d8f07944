//! # Geometry primitives
//!
//! This module provides the [`Point`](crate::geometry::Point) value type used for stations,
//! guesses and solutions, together with the Euclidean [`distance`](crate::geometry::distance)
//! between two points.
//!
//! Points are plain `Copy` values: every operation returns a new point instead of mutating
//! an existing one. Conversions to and from [`nalgebra::Vector3`] let the solver express its
//! linear algebra on fixed-size vectors while the public API stays coordinate-based.
//!
//! ## Submodules
//!
//! - [`random_point`](crate::geometry::random_point) – sample initial guesses in a cube or on a
//!   sphere around a center, from an explicitly passed random source.
//!
//! ## Example
//!
//! ```rust
//! use trilateration::geometry::{distance, Point};
//!
//! let a = Point::new(1.0, 2.0, 2.0);
//! assert_eq!(distance(&a, &Point::ORIGIN), 3.0);
//! assert_eq!(a.distance(&a), 0.0);
//! ```
use std::fmt;
use std::ops::{Add, Sub};

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

pub mod random_point;

/// Cartesian coordinates of a point in 3D space.
///
/// All coordinates share the length unit of the measured ranges.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// The origin `(0, 0, 0)`.
    pub const ORIGIN: Point = Point {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z }
    }

    /// Coordinates as a column vector `[x, y, z]ᵀ`.
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Euclidean distance to `other`, see [`distance`].
    pub fn distance(&self, other: &Point) -> f64 {
        distance(self, other)
    }

    /// `true` when every coordinate is finite (neither NaN nor infinite).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

// squares of differences in this range are normal floats, sums of three stay finite
const SAFE_MIN: f64 = 1e-150;
const SAFE_MAX: f64 = 1e150;

/// Compute the Euclidean distance between two points.
///
/// Arguments
/// -----------------
/// * `p1`, `p2`: the two points.
///
/// Return
/// ----------
/// * `sqrt((x1-x2)² + (y1-y2)² + (z1-z2)²)`, always `≥ 0` and exactly `0` iff the points are equal.
///
/// Remarks
/// ----------
/// * Only absolute differences are used, so swapping the arguments gives a bit-identical result.
/// * When the largest difference lies outside `[1e-150, 1e150]` its square would underflow
///   or overflow; the differences are then scaled by that largest one before squaring.
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    let dx = (p1.x - p2.x).abs();
    let dy = (p1.y - p2.y).abs();
    let dz = (p1.z - p2.z).abs();
    let largest = dx.max(dy).max(dz);

    if (SAFE_MIN..=SAFE_MAX).contains(&largest) {
        return (dx * dx + dy * dy + dz * dz).sqrt();
    }
    if largest == 0.0 || largest.is_infinite() {
        return largest;
    }
    let (sx, sy, sz) = (dx / largest, dy / largest, dz / largest);
    largest * (sx * sx + sy * sy + sz * sz).sqrt()
}

impl From<Vector3<f64>> for Point {
    fn from(v: Vector3<f64>) -> Self {
        Point::new(v.x, v.y, v.z)
    }
}

impl From<Point> for Vector3<f64> {
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}

impl From<[f64; 3]> for Point {
    fn from(c: [f64; 3]) -> Self {
        Point::new(c[0], c[1], c[2])
    }
}

/// Translate a point by a displacement vector.
impl Add<Vector3<f64>> for Point {
    type Output = Point;

    fn add(self, delta: Vector3<f64>) -> Point {
        Point::new(self.x + delta.x, self.y + delta.y, self.z + delta.z)
    }
}

/// Displacement vector from `rhs` to `self`.
impl Sub for Point {
    type Output = Vector3<f64>;

    fn sub(self, rhs: Point) -> Vector3<f64> {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.p$}, {:.p$}, {:.p$})", self.x, self.y, self.z),
            None => write!(f, "({}, {}, {})", self.x, self.y, self.z),
        }
    }
}
