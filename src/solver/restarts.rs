//! # Random-restart driver
//!
//! The Gauss-Newton loop does not retry on its own: a poor initial guess may lead to a singular
//! normal matrix, to a station being hit exactly, or to a loop that stops on the iteration cap
//! with large residuals. This module packages the caller-side remedy: draw a fresh random
//! initial guess and solve again.
//!
//! ## Pipeline
//!
//! 1. **Initial guess** – drawn from an [`InitialGuess`] strategy (uniform in a cube or on a
//!    sphere), using a caller-provided random source.
//! 2. **Solve** – run [`solve`] with the given [`SolverParams`].
//! 3. **Selection** – the first converged result is returned immediately. Attempts failing with
//!    [`TrilaterationError::SingularSystem`] or [`TrilaterationError::DegenerateGeometry`] are
//!    skipped; among the attempts that stopped on the iteration cap, the one with the smallest
//!    sum of squared residuals is kept.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rand::{rngs::StdRng, SeedableRng};
//! use trilateration::observations::Range;
//! use trilateration::solver::SolverParams;
//! use trilateration::solver::restarts::{trilaterate_with_restarts, InitialGuess};
//!
//! # let observations: Vec<Range> = unimplemented!();
//! let mut rng = StdRng::seed_from_u64(42);
//! let strategy = InitialGuess::sphere_around_first_range(&observations)?;
//! let result = trilaterate_with_restarts(
//!     &observations,
//!     &SolverParams::default(),
//!     &strategy,
//!     10,
//!     &mut rng,
//! )?;
//! println!("{result}");
//! # Ok::<(), trilateration::trilateration_errors::TrilaterationError>(())
//! ```
use rand::Rng;
use tracing::{debug, info, warn};

use crate::geometry::random_point::{random_point_in_cube, random_point_on_sphere};
use crate::geometry::Point;
use crate::observations::Range;
use crate::solver::gauss_newton::solve;
use crate::solver::solver_result::TrilaterationResult;
use crate::solver::SolverParams;
use crate::trilateration_errors::TrilaterationError;

/// Strategy used to draw random initial guesses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitialGuess {
    /// Uniform in the axis-aligned cube of the given half-width around `center`.
    Cube { center: Point, half_width: f64 },
    /// Uniform on the sphere of the given radius around `center`.
    Sphere { center: Point, radius: f64 },
}

/// First range of the set, used to center random initial guesses.
fn first_range(observations: &[Range]) -> Result<&Range, TrilaterationError> {
    observations.first().ok_or_else(|| {
        TrilaterationError::InvalidRandomRange(
            "no range to center the initial guesses on: observations are empty".into(),
        )
    })
}

impl InitialGuess {
    /// Cube centered on the first station, with the first measured range as half-width.
    ///
    /// The target lies on the sphere inscribed in this cube.
    ///
    /// Errors
    /// ----------
    /// * [`TrilaterationError::InvalidRandomRange`] if `observations` is empty.
    pub fn cube_around_first_range(observations: &[Range]) -> Result<Self, TrilaterationError> {
        let first = first_range(observations)?;
        Ok(InitialGuess::Cube {
            center: first.station,
            half_width: first.distance,
        })
    }

    /// Sphere centered on the first station, with the first measured range as radius.
    ///
    /// Every drawn point satisfies the first range exactly.
    ///
    /// Errors
    /// ----------
    /// * [`TrilaterationError::InvalidRandomRange`] if `observations` is empty.
    pub fn sphere_around_first_range(observations: &[Range]) -> Result<Self, TrilaterationError> {
        let first = first_range(observations)?;
        Ok(InitialGuess::Sphere {
            center: first.station,
            radius: first.distance,
        })
    }

    /// Draw one initial guess.
    ///
    /// Errors
    /// ----------
    /// * [`TrilaterationError::InvalidRandomRange`] for a non-positive or non-finite size.
    pub fn draw(&self, rng: &mut impl Rng) -> Result<Point, TrilaterationError> {
        match self {
            InitialGuess::Cube { center, half_width } => {
                random_point_in_cube(center, *half_width, rng)
            }
            InitialGuess::Sphere { center, radius } => random_point_on_sphere(center, *radius, rng),
        }
    }
}

/// Solve from up to `max_attempts` random initial guesses.
///
/// Arguments
/// -----------------
/// * `observations`: the ranges.
/// * `params`: stopping rules of each individual run.
/// * `initial_guess`: strategy drawing the starting points.
/// * `max_attempts`: maximum number of runs, at least 1.
/// * `rng`: random source; a seeded generator makes the whole search reproducible.
///
/// Return
/// ----------
/// * The first [`TrilaterationResult::Converged`] result, or else the
///   [`TrilaterationResult::IterationLimitReached`] result with the smallest sum of squared
///   residuals.
///
/// Errors
/// ----------
/// * [`TrilaterationError::InvalidSolverParameter`] if `max_attempts == 0`.
/// * [`TrilaterationError::InvalidRandomRange`] if the strategy cannot draw a point.
/// * [`TrilaterationError::NoSolutionFound`] if every attempt failed.
pub fn trilaterate_with_restarts(
    observations: &[Range],
    params: &SolverParams,
    initial_guess: &InitialGuess,
    max_attempts: usize,
    rng: &mut impl Rng,
) -> Result<TrilaterationResult, TrilaterationError> {
    if max_attempts == 0 {
        return Err(TrilaterationError::InvalidSolverParameter(
            "max_attempts must be >= 1".into(),
        ));
    }

    let mut best: Option<TrilaterationResult> = None;

    for attempt in 1..=max_attempts {
        let guess = initial_guess.draw(rng)?;

        match solve(observations, &guess, params) {
            Ok(result) if result.is_converged() => {
                info!(
                    attempt,
                    position = %result.position(),
                    sum_of_residual_squares = result.sum_of_residual_squares(),
                    "trilateration converged"
                );
                return Ok(result);
            }
            Ok(result) => {
                debug!(
                    attempt,
                    initial_guess = %guess,
                    sum_of_residual_squares = result.sum_of_residual_squares(),
                    "iteration limit reached"
                );
                match &best {
                    Some(b) if b.sum_of_residual_squares() <= result.sum_of_residual_squares() => {}
                    _ => best = Some(result),
                }
            }
            Err(
                e @ (TrilaterationError::SingularSystem
                | TrilaterationError::DegenerateGeometry { .. }),
            ) => {
                warn!(attempt, initial_guess = %guess, "attempt failed: {e}");
            }
            Err(e) => return Err(e),
        }
    }

    match best {
        Some(result) => {
            info!(
                position = %result.position(),
                sum_of_residual_squares = result.sum_of_residual_squares(),
                "best non-converged result selected"
            );
            Ok(result)
        }
        None => Err(TrilaterationError::NoSolutionFound {
            attempts: max_attempts,
        }),
    }
}
