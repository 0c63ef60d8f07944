//! # Random initial guesses
//!
//! Helpers to draw a candidate starting point for the solver around a known center:
//!
//! * [`random_point_in_cube`] – uniform sample in an axis-aligned cube of half-width `h`,
//! * [`random_point_on_sphere`] – uniform sample on the sphere of radius `r`.
//!
//! The random source is always passed explicitly, so a seeded generator
//! (e.g. `StdRng::seed_from_u64`) reproduces the same sequence of guesses.
//!
//! ## Example
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use trilateration::geometry::{distance, Point};
//! use trilateration::geometry::random_point::random_point_on_sphere;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let center = Point::new(123.0, -456.0, 7890.0);
//! let guess = random_point_on_sphere(&center, 1000.0, &mut rng)?;
//! assert!((distance(&center, &guess) - 1000.0).abs() < 1e-6);
//! # Ok::<(), trilateration::trilateration_errors::TrilaterationError>(())
//! ```
use rand::Rng;
use rand_distr::UnitSphere;

use crate::geometry::Point;
use crate::trilateration_errors::TrilaterationError;

fn check_extent(name: &str, value: f64) -> Result<(), TrilaterationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TrilaterationError::InvalidRandomRange(format!(
            "{name} must be finite and > 0, got {value}"
        )))
    }
}

/// Draw a random point inside an axis-aligned cube.
///
/// The cube is centered on `center` and its edges are `2 * half_width` long;
/// each coordinate is drawn independently and uniformly in
/// `[center − half_width, center + half_width]`.
///
/// Arguments
/// -----------------
/// * `center`: center of the cube.
/// * `half_width`: half of the edge length, must be finite and strictly positive.
/// * `rng`: random source.
///
/// Return
/// ----------
/// * The sampled point, or [`TrilaterationError::InvalidRandomRange`] for an invalid `half_width`.
pub fn random_point_in_cube(
    center: &Point,
    half_width: f64,
    rng: &mut impl Rng,
) -> Result<Point, TrilaterationError> {
    check_extent("half_width", half_width)?;

    Ok(Point::new(
        center.x + rng.random_range(-half_width..=half_width),
        center.y + rng.random_range(-half_width..=half_width),
        center.z + rng.random_range(-half_width..=half_width),
    ))
}

/// Draw a random point on a sphere.
///
/// The direction is uniformly distributed over the unit sphere and then scaled by `radius`.
///
/// Arguments
/// -----------------
/// * `center`: center of the sphere.
/// * `radius`: sphere radius, must be finite and strictly positive.
/// * `rng`: random source.
///
/// Return
/// ----------
/// * The sampled point, or [`TrilaterationError::InvalidRandomRange`] for an invalid `radius`.
pub fn random_point_on_sphere(
    center: &Point,
    radius: f64,
    rng: &mut impl Rng,
) -> Result<Point, TrilaterationError> {
    check_extent("radius", radius)?;

    let [ux, uy, uz]: [f64; 3] = rng.sample(UnitSphere);
    Ok(Point::new(
        center.x + radius * ux,
        center.y + radius * uy,
        center.z + radius * uz,
    ))
}
