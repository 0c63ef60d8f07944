//! # Gauss-Newton iteration for true-range multilateration
//!
//! This module implements the **Gauss-Newton algorithm** applied to the multilateration
//! least-squares problem: find the point `g` minimizing `Σ (ρᵢ − ‖g − sᵢ‖)²` given stations
//! `sᵢ` and measured ranges `ρᵢ`.
//!
//! ## Algorithm outline
//!
//! One update ([`gauss_newton_step`]):
//!
//! 1. Linearize at the current guess: Jacobian `J` (`n × 3`) and residuals `r` (`n`), see
//!    [`linearize`](crate::observations::residuals::linearize).
//! 2. Form the normal equations `(JᵀJ) Δ = Jᵀ r`.
//! 3. Reject an ill-conditioned normal matrix (ratio of extreme eigenvalues below the
//!    configured floor).
//! 4. Solve for `Δ` with a Cholesky factorization (no explicit inverse).
//! 5. Return `g + Δ`.
//!
//! `J` holds the gradients of the predicted distances and `r = measured − predicted`, so the
//! correction is **added** to the guess.
//!
//! The loop ([`solve`], [`trilaterate`]) repeats the update until a stopping rule of
//! [`SolverParams`] fires. Every quantity is recomputed from scratch at each iteration, so a
//! run is a pure function of its inputs: identical inputs give bit-identical outputs.
//!
//! ## Convergence
//!
//! Gauss-Newton has no global convergence guarantee. The result depends on the station
//! geometry and on the initial guess; see [`restarts`](crate::solver::restarts) for a driver
//! that retries from random starting points.
//!
//! ## Example
//!
//! ```rust
//! use trilateration::geometry::Point;
//! use trilateration::observations::Range;
//! use trilateration::solver::gauss_newton::trilaterate;
//!
//! let target = Point::new(1.0, 2.0, 3.0);
//! let stations = [
//!     Point::new(10.0, 0.0, 0.0),
//!     Point::new(0.0, 10.0, 0.0),
//!     Point::new(0.0, 0.0, 10.0),
//!     Point::new(-10.0, -10.0, -10.0),
//! ];
//! let observations: Vec<Range> = stations
//!     .iter()
//!     .map(|s| Range::new(*s, s.distance(&target)))
//!     .collect();
//!
//! let solution = trilaterate(&observations, &Point::new(5.0, 5.0, 5.0), 50, 1e-12)?;
//! assert!(solution.distance(&target) < 1e-6);
//! # Ok::<(), trilateration::trilateration_errors::TrilaterationError>(())
//! ```
use nalgebra::{Matrix3, Vector3};
use tracing::{debug, trace};

use crate::constants::{DEFAULT_MIN_RECIPROCAL_CONDITION, MIN_RANGES};
use crate::geometry::Point;
use crate::observations::residuals::{linearize, sum_of_residual_squares};
use crate::observations::Range;
use crate::solver::solver_result::{Solution, TrilaterationResult};
use crate::solver::SolverParams;
use crate::trilateration_errors::TrilaterationError;

/// Ratio `λ_min / λ_max` of the eigenvalues of a symmetric positive semi-definite matrix.
///
/// NaN when the matrix is zero.
fn reciprocal_condition(normal: &Matrix3<f64>) -> f64 {
    let eigenvalues = normal.symmetric_eigenvalues();
    eigenvalues.min() / eigenvalues.max()
}

/// Solve the normal equations `N Δ = b` for the correction `Δ`.
///
/// Errors
/// ----------
/// * [`TrilaterationError::SingularSystem`] if `N` is ill-conditioned, not positive definite,
///   or if the solution is not finite.
fn solve_normal_equations(
    normal: &Matrix3<f64>,
    rhs: &Vector3<f64>,
    min_reciprocal_condition: f64,
) -> Result<Vector3<f64>, TrilaterationError> {
    let rcond = reciprocal_condition(normal);
    trace!(rcond, "normal matrix conditioning");

    // NaN fails the comparison as well
    if !(rcond >= min_reciprocal_condition) {
        return Err(TrilaterationError::SingularSystem);
    }

    let correction = normal
        .cholesky()
        .ok_or(TrilaterationError::SingularSystem)?
        .solve(rhs);

    if correction.iter().all(|c| c.is_finite()) {
        Ok(correction)
    } else {
        Err(TrilaterationError::SingularSystem)
    }
}

/// Perform one Gauss-Newton update with the default conditioning floor.
///
/// See [`gauss_newton_step_with_tolerance`].
pub fn gauss_newton_step(
    observations: &[Range],
    guess: &Point,
) -> Result<Point, TrilaterationError> {
    gauss_newton_step_with_tolerance(observations, guess, DEFAULT_MIN_RECIPROCAL_CONDITION)
}

/// Perform one Gauss-Newton update of `guess`.
///
/// Arguments
/// -----------------
/// * `observations`: the ranges (at least three, with independent directions from the guess).
/// * `guess`: current estimate of the target position.
/// * `min_reciprocal_condition`: smallest accepted `λ_min / λ_max` of `JᵀJ`.
///
/// Return
/// ----------
/// * The new guess `g + Δ`, where `Δ` solves `(JᵀJ) Δ = Jᵀ r`.
///   When `guess` satisfies every range exactly, `r = 0` and `guess` is returned unchanged.
///
/// Errors
/// ----------
/// * [`TrilaterationError::DegenerateGeometry`] if `guess` coincides with a station.
/// * [`TrilaterationError::SingularSystem`] with fewer than three ranges, or when the
///   normal matrix is singular or too ill-conditioned (e.g. collinear or duplicated stations).
pub fn gauss_newton_step_with_tolerance(
    observations: &[Range],
    guess: &Point,
    min_reciprocal_condition: f64,
) -> Result<Point, TrilaterationError> {
    if observations.len() < MIN_RANGES {
        return Err(TrilaterationError::SingularSystem);
    }

    let (jacobian, res) = linearize(observations, guess)?;

    let normal: Matrix3<f64> = jacobian.tr_mul(&jacobian);
    let rhs: Vector3<f64> = jacobian.tr_mul(&res);

    let correction = solve_normal_equations(&normal, &rhs, min_reciprocal_condition)?;
    trace!(
        dx = correction.x,
        dy = correction.y,
        dz = correction.z,
        "Gauss-Newton correction"
    );

    Ok(*guess + correction)
}

/// Run the Gauss-Newton loop from `initial_guess` until a stopping rule fires.
///
/// The stopping rules of [`SolverParams`] are checked **after** each step, the iteration cap
/// first. At least one step is always performed.
///
/// Arguments
/// -----------------
/// * `observations`: the ranges.
/// * `initial_guess`: starting point; any point is accepted, but the outcome depends on it.
/// * `params`: stopping rules and conditioning floor. If both stopping rules are disabled the
///   loop only ends on an error.
///
/// Return
/// ----------
/// * [`TrilaterationResult::Converged`] if the residual threshold is enabled and met at the
///   final guess, [`TrilaterationResult::IterationLimitReached`] otherwise.
///
/// Errors
/// ----------
/// * Any error of [`gauss_newton_step_with_tolerance`], raised at the iteration where it
///   occurs. No fallback point is returned.
pub fn solve(
    observations: &[Range],
    initial_guess: &Point,
    params: &SolverParams,
) -> Result<TrilaterationResult, TrilaterationError> {
    debug!(
        guess = %initial_guess,
        sum_of_residual_squares = sum_of_residual_squares(observations, initial_guess),
        "Gauss-Newton initial guess"
    );

    let mut guess = *initial_guess;
    let mut iteration = 0_usize;

    loop {
        guess =
            gauss_newton_step_with_tolerance(observations, &guess, params.min_reciprocal_condition)?;
        iteration += 1;

        let ssr = sum_of_residual_squares(observations, &guess);
        debug!(
            iteration,
            guess = %guess,
            sum_of_residual_squares = ssr,
            "Gauss-Newton iteration"
        );

        let below_threshold = params.checks_residuals() && ssr < params.min_sum_of_residual_squares;
        let solution = Solution {
            position: guess,
            iterations: iteration,
            sum_of_residual_squares: ssr,
        };

        if params.limits_iterations() && iteration == params.max_iterations {
            debug!(iteration, "maximum number of iterations reached");
            return Ok(if below_threshold {
                TrilaterationResult::Converged(solution)
            } else {
                TrilaterationResult::IterationLimitReached(solution)
            });
        }
        if below_threshold {
            debug!(iteration, "residual threshold reached");
            return Ok(TrilaterationResult::Converged(solution));
        }
    }
}

/// Estimate the target position from `observations`, starting at `initial_guess`.
///
/// The loop runs until either `max_iterations` steps were performed or the sum of squared
/// residuals fell under `min_sum_of_residual_squares`. Pass `max_iterations = 0` or a negative
/// `min_sum_of_residual_squares` to disable either check; disabling both never terminates
/// on a well-posed problem.
///
/// The default conditioning floor is used, see [`solve`] to tune it or to get convergence
/// diagnostics.
///
/// Return
/// ----------
/// * The final guess. Reaching the iteration cap is not reported as an error: evaluate
///   [`sum_of_residual_squares`] on the result to judge it.
pub fn trilaterate(
    observations: &[Range],
    initial_guess: &Point,
    max_iterations: usize,
    min_sum_of_residual_squares: f64,
) -> Result<Point, TrilaterationError> {
    let params = SolverParams {
        max_iterations,
        min_sum_of_residual_squares,
        min_reciprocal_condition: DEFAULT_MIN_RECIPROCAL_CONDITION,
    };
    solve(observations, initial_guess, &params).map(|result| result.position())
}
