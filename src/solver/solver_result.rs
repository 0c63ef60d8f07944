//! # Trilateration result
//!
//! This module defines [`TrilaterationResult`], the outcome of the Gauss-Newton loop, and the
//! [`Solution`] it wraps.
//!
//! ## Variants
//!
//! - **`Converged`**
//!   The residual threshold was enabled and the sum of squared residuals at the returned
//!   position is strictly below it.
//!
//! - **`IterationLimitReached`**
//!   The loop stopped on the iteration cap without meeting the residual threshold (or with the
//!   threshold disabled). This is not an error: the caller inspects
//!   [`Solution::sum_of_residual_squares`] to decide whether the position is usable, or retries
//!   from another initial guess.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trilateration::solver::solver_result::TrilaterationResult;
//!
//! fn report(result: &TrilaterationResult) {
//!     if result.is_converged() {
//!         println!("Converged:\n{result}");
//!     } else {
//!         println!("Stopped on iteration cap:\n{result}");
//!     }
//! }
//! ```
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Final guess of the solver together with the diagnostics of the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Estimated target position.
    pub position: Point,
    /// Number of completed Gauss-Newton steps.
    pub iterations: usize,
    /// Sum of squared residuals at `position`.
    pub sum_of_residual_squares: f64,
}

/// Outcome of [`solve`](crate::solver::gauss_newton::solve).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TrilaterationResult {
    Converged(Solution),
    IterationLimitReached(Solution),
}

impl TrilaterationResult {
    /// `true` if the residual threshold was met.
    pub fn is_converged(&self) -> bool {
        matches!(self, TrilaterationResult::Converged(_))
    }

    /// Borrow the inner [`Solution`].
    pub fn get_solution(&self) -> &Solution {
        match self {
            TrilaterationResult::Converged(s) | TrilaterationResult::IterationLimitReached(s) => s,
        }
    }

    /// Consume the result and return the inner [`Solution`].
    pub fn into_inner(self) -> Solution {
        match self {
            TrilaterationResult::Converged(s) | TrilaterationResult::IterationLimitReached(s) => s,
        }
    }

    /// Shortcut for the estimated position.
    pub fn position(&self) -> Point {
        self.get_solution().position
    }

    /// Shortcut for the sum of squared residuals at the estimated position.
    pub fn sum_of_residual_squares(&self) -> f64 {
        self.get_solution().sum_of_residual_squares
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  position                 = {:.6}", self.position)?;
        writeln!(f, "  iterations               = {}", self.iterations)?;
        write!(
            f,
            "  sum of squared residuals = {:.6e}",
            self.sum_of_residual_squares
        )
    }
}

impl fmt::Display for TrilaterationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrilaterationResult::Converged(s) => {
                writeln!(f, "[Converged]")?;
                write!(f, "{s}")
            }
            TrilaterationResult::IterationLimitReached(s) => {
                writeln!(f, "[Iteration limit reached]")?;
                write!(f, "{s}")
            }
        }
    }
}
