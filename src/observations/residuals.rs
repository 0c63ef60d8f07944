//! # Residual model
//!
//! Residuals and Jacobian of the multilateration least-squares problem.
//!
//! For a candidate point `g` and ranges `(sᵢ, ρᵢ)`:
//!
//! ```text
//! dᵢ = ‖g − sᵢ‖
//! rᵢ = ρᵢ − dᵢ                      (measured − predicted)
//! Jᵢ = (g − sᵢ)ᵀ / dᵢ               (gradient of the predicted distance dᵢ)
//! ```
//!
//! `J` is the Jacobian of the *predicted* distances, i.e. the negated Jacobian of `r`.
//! Together with `r = measured − predicted` this makes the Gauss-Newton correction
//! `Δ = (JᵀJ)⁻¹ Jᵀ r` an **additive** update of the guess.
//!
//! ## Degenerate geometry
//!
//! When the candidate point coincides exactly with a station, `dᵢ = 0` and row `i` of `J`
//! is undefined. [`residuals_jacobian`] and [`linearize`] report this as
//! [`TrilaterationError::DegenerateGeometry`] instead of propagating NaN/Inf values.
//! Residuals and their sum of squares stay well defined at a station.
use nalgebra::{DVector, MatrixXx3};

use crate::geometry::Point;
use crate::observations::Range;
use crate::trilateration_errors::TrilaterationError;

/// Row `i` of the Jacobian, given the already computed distance `d` from the station.
#[inline]
fn jacobian_row(
    station_index: usize,
    range: &Range,
    guess: &Point,
    d: f64,
) -> Result<[f64; 3], TrilaterationError> {
    if d == 0.0 {
        return Err(TrilaterationError::DegenerateGeometry { station_index });
    }
    Ok([
        (guess.x - range.station.x) / d,
        (guess.y - range.station.y) / d,
        (guess.z - range.station.z) / d,
    ])
}

/// Column vector of residuals `rᵢ = ρᵢ − ‖g − sᵢ‖`, of size `n × 1`.
///
/// Arguments
/// -----------------
/// * `observations`: the ranges, in the order defining the rows.
/// * `guess`: candidate target position.
///
/// Return
/// ----------
/// * A `DVector` of length `observations.len()`. Never fails.
pub fn residuals(observations: &[Range], guess: &Point) -> DVector<f64> {
    DVector::from_iterator(
        observations.len(),
        observations.iter().map(|range| range.residual(guess)),
    )
}

/// Jacobian matrix of the residual model, of size `n × 3`.
///
/// Row `i` is `((g.x − sᵢ.x)/dᵢ, (g.y − sᵢ.y)/dᵢ, (g.z − sᵢ.z)/dᵢ)`.
///
/// Errors
/// ----------
/// * [`TrilaterationError::DegenerateGeometry`] with the index of the first station
///   located exactly at `guess`.
pub fn residuals_jacobian(
    observations: &[Range],
    guess: &Point,
) -> Result<MatrixXx3<f64>, TrilaterationError> {
    let mut entries = Vec::with_capacity(3 * observations.len());
    for (i, range) in observations.iter().enumerate() {
        let d = range.predicted_distance(guess);
        entries.extend_from_slice(&jacobian_row(i, range, guess, d)?);
    }
    Ok(MatrixXx3::from_row_slice(&entries))
}

/// Sum of the squared residuals `Σ (ρᵢ − ‖g − sᵢ‖)²`.
///
/// Pure and `O(n)`; usable on any candidate point, including the output of the solver,
/// to judge the quality of a fit.
pub fn sum_of_residual_squares(observations: &[Range], guess: &Point) -> f64 {
    observations
        .iter()
        .map(|range| {
            let r = range.residual(guess);
            r * r
        })
        .sum()
}

/// Jacobian and residual vector at `guess`, computed in a single pass.
///
/// Each station-to-guess distance is computed once and shared by the residual entry and the
/// Jacobian row. The values are identical to those of [`residuals_jacobian`] and [`residuals`].
///
/// Return
/// ----------
/// * `(J, r)` with `J` of size `n × 3` and `r` of size `n`.
///
/// Errors
/// ----------
/// * [`TrilaterationError::DegenerateGeometry`] if `guess` coincides with a station.
pub fn linearize(
    observations: &[Range],
    guess: &Point,
) -> Result<(MatrixXx3<f64>, DVector<f64>), TrilaterationError> {
    let n = observations.len();
    let mut entries = Vec::with_capacity(3 * n);
    let mut res = Vec::with_capacity(n);

    for (i, range) in observations.iter().enumerate() {
        let d = range.predicted_distance(guess);
        entries.extend_from_slice(&jacobian_row(i, range, guess, d)?);
        res.push(range.distance - d);
    }

    Ok((
        MatrixXx3::from_row_slice(&entries),
        DVector::from_vec(res),
    ))
}

#[cfg(test)]
mod residuals_test {
    use super::*;
    use approx::assert_relative_eq;

    fn pythagorean_ranges() -> Vec<Range> {
        vec![
            Range::new(Point::new(3.0, 4.0, 0.0), 5.0),
            Range::new(Point::new(0.0, 3.0, 4.0), 6.0),
            Range::new(Point::new(4.0, 0.0, 3.0), 4.0),
            Range::new(Point::new(0.0, 0.0, -7.0), 7.0),
        ]
    }

    #[test]
    fn test_residuals_values() {
        let r = residuals(&pythagorean_ranges(), &Point::ORIGIN);
        assert_eq!(r.as_slice(), [0.0, 1.0, -1.0, 0.0]);
    }

    #[test]
    fn test_jacobian_values() {
        let j = residuals_jacobian(&pythagorean_ranges(), &Point::ORIGIN).unwrap();
        assert_eq!(j.nrows(), 4);
        assert_eq!(j.ncols(), 3);
        assert_relative_eq!(j[(0, 0)], -0.6, epsilon = 1e-15);
        assert_relative_eq!(j[(0, 1)], -0.8, epsilon = 1e-15);
        assert_eq!(j[(0, 2)], 0.0);
        assert_eq!(j.row(3).iter().copied().collect::<Vec<_>>(), [0.0, 0.0, 1.0]);

        // every row is a unit vector
        for row in j.row_iter() {
            assert_relative_eq!(row.norm(), 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_jacobian_rows_follow_observation_order() {
        let mut obs = pythagorean_ranges();
        obs.push(Range::new(Point::new(-2.0, 5.0, 1.0), 3.0));
        let g = Point::new(0.5, -0.25, 1.0);

        let (j, r) = linearize(&obs, &g).unwrap();
        assert_eq!(j.shape(), (5, 3));
        assert_eq!(r.len(), 5);

        for (i, range) in obs.iter().enumerate() {
            let d = range.predicted_distance(&g);
            let expected = (g - range.station) / d;
            assert_eq!(j[(i, 0)], expected.x);
            assert_eq!(j[(i, 1)], expected.y);
            assert_eq!(j[(i, 2)], expected.z);
            assert_eq!(r[i], range.residual(&g));
        }
    }

    #[test]
    fn test_sum_of_squares_matches_residuals() {
        let obs = pythagorean_ranges();
        let guesses = [
            Point::ORIGIN,
            Point::new(20000.0, -30000.0, 90000.0),
            Point::new(-1.25, 0.5, 3.0),
        ];
        for g in guesses {
            let expected: f64 = residuals(&obs, &g).iter().map(|r| r * r).sum();
            assert_relative_eq!(
                sum_of_residual_squares(&obs, &g),
                expected,
                max_relative = 1e-15
            );
        }
        assert_eq!(sum_of_residual_squares(&obs, &Point::ORIGIN), 2.0);
    }

    #[test]
    fn test_linearize_matches_separate_calls() {
        let obs = pythagorean_ranges();
        let g = Point::new(0.3, -1.7, 2.2);
        let (j, r) = linearize(&obs, &g).unwrap();
        assert_eq!(j, residuals_jacobian(&obs, &g).unwrap());
        assert_eq!(r, residuals(&obs, &g));
    }

    #[test]
    fn test_guess_on_station_is_degenerate() {
        let obs = pythagorean_ranges();
        let on_station = obs[2].station;

        assert_eq!(
            residuals_jacobian(&obs, &on_station),
            Err(TrilaterationError::DegenerateGeometry { station_index: 2 })
        );
        assert_eq!(
            linearize(&obs, &on_station).map(|_| ()),
            Err(TrilaterationError::DegenerateGeometry { station_index: 2 })
        );

        // residuals remain finite
        let r = residuals(&obs, &on_station);
        assert!(r.iter().all(|v| v.is_finite()));
        assert_eq!(r[2], obs[2].distance);
        assert!(sum_of_residual_squares(&obs, &on_station).is_finite());
    }

    #[test]
    fn test_guess_next_to_station_is_not_degenerate() {
        let obs = vec![
            Range::new(Point::ORIGIN, 1.0),
            Range::new(Point::new(10.0, 0.0, 0.0), 10.0),
            Range::new(Point::new(0.0, 10.0, 0.0), 10.0),
        ];
        let guess = Point::new(1e-200, 0.0, 0.0);

        let j = residuals_jacobian(&obs, &guess).unwrap();
        assert_eq!(j[(0, 0)], 1.0);
        assert_eq!(j[(0, 1)], 0.0);
        assert_eq!(j[(0, 2)], 0.0);
        assert!(j.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_empty_observations() {
        let g = Point::new(1.0, 2.0, 3.0);
        assert_eq!(residuals(&[], &g).len(), 0);
        assert_eq!(residuals_jacobian(&[], &g).unwrap().nrows(), 0);
        assert_eq!(sum_of_residual_squares(&[], &g), 0.0);
    }
}
