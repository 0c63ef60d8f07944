//! # Gauss-Newton solver parameters
//!
//! This module defines the [`SolverParams`](crate::solver::SolverParams) configuration struct
//! and its builder, which control when the Gauss-Newton loop of
//! [`solve`](crate::solver::gauss_newton::solve) stops and how strictly the normal equations
//! are checked for conditioning.
//!
//! ## Stopping rules
//!
//! Both rules are evaluated **after** each update, so at least one step always runs:
//!
//! 1. `max_iterations > 0` and the number of completed iterations equals it → stop.
//! 2. Otherwise, `min_sum_of_residual_squares ≥ 0` and the sum of squared residuals at the
//!    current guess is below it → stop.
//!
//! `max_iterations = 0` disables rule 1 and a negative threshold disables rule 2.
//! With both disabled the loop would never end: [`SolverParamsBuilder::build`] refuses such a
//! configuration, the raw entry points trust their caller.
//!
//! ## Example
//!
//! ```rust
//! use trilateration::solver::SolverParams;
//!
//! let params = SolverParams::builder()
//!     .max_iterations(50)
//!     .min_sum_of_residual_squares(1e-3)
//!     .build()
//!     .unwrap();
//! assert_eq!(params.max_iterations, 50);
//! ```
//!
//! ## Submodules
//!
//! * [`gauss_newton`](crate::solver::gauss_newton) – update step and iteration loop,
//! * [`solver_result`](crate::solver::solver_result) – converged / iteration-limited outcome,
//! * [`restarts`](crate::solver::restarts) – random-restart driver around the loop.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_MIN_RECIPROCAL_CONDITION, DEFAULT_MIN_SUM_OF_RESIDUAL_SQUARES,
};
use crate::trilateration_errors::TrilaterationError;

pub mod gauss_newton;
pub mod restarts;
pub mod solver_result;

/// Configuration of the Gauss-Newton loop.
///
/// Fields
/// -----------------
/// * `max_iterations` – iteration cap; `0` disables it.
/// * `min_sum_of_residual_squares` – the loop stops once the sum of squared residuals falls
///   strictly below this value; a negative value disables the check.
/// * `min_reciprocal_condition` – smallest accepted ratio `λ_min / λ_max` of `JᵀJ`. Steps on
///   a worse conditioned system fail with [`TrilaterationError::SingularSystem`].
///
/// Defaults
/// -----------------
/// * `max_iterations`: 100
/// * `min_sum_of_residual_squares`: 1.0
/// * `min_reciprocal_condition`: 1e-12
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverParams {
    pub max_iterations: usize,
    pub min_sum_of_residual_squares: f64,
    pub min_reciprocal_condition: f64,
}

impl SolverParams {
    /// Construct a new [`SolverParams`] with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`SolverParamsBuilder`] to override the defaults step by step.
    pub fn builder() -> SolverParamsBuilder {
        SolverParamsBuilder::new()
    }

    /// `true` if the iteration cap is active.
    pub fn limits_iterations(&self) -> bool {
        self.max_iterations > 0
    }

    /// `true` if the residual threshold is active.
    pub fn checks_residuals(&self) -> bool {
        self.min_sum_of_residual_squares >= 0.0
    }
}

impl Default for SolverParams {
    fn default() -> Self {
        SolverParams {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_sum_of_residual_squares: DEFAULT_MIN_SUM_OF_RESIDUAL_SQUARES,
            min_reciprocal_condition: DEFAULT_MIN_RECIPROCAL_CONDITION,
        }
    }
}

/// Builder for [`SolverParams`], with validation.
#[derive(Debug, Clone)]
pub struct SolverParamsBuilder {
    params: SolverParams,
}

impl Default for SolverParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: SolverParams::default(),
        }
    }

    pub fn max_iterations(mut self, v: usize) -> Self {
        self.params.max_iterations = v;
        self
    }
    pub fn min_sum_of_residual_squares(mut self, v: f64) -> Self {
        self.params.min_sum_of_residual_squares = v;
        self
    }
    pub fn min_reciprocal_condition(mut self, v: f64) -> Self {
        self.params.min_reciprocal_condition = v;
        self
    }

    /// Disable the iteration cap.
    pub fn unlimited_iterations(self) -> Self {
        self.max_iterations(0)
    }

    /// Disable the residual threshold.
    pub fn without_residual_threshold(self) -> Self {
        self.min_sum_of_residual_squares(-1.0)
    }

    /// Finalize the builder and produce a [`SolverParams`] instance.
    ///
    /// Validation rules
    /// -----------------
    /// * `min_sum_of_residual_squares` must not be NaN.
    /// * At least one stopping rule must be enabled (`max_iterations > 0` or
    ///   `min_sum_of_residual_squares >= 0`).
    /// * `0 <= min_reciprocal_condition < 1`.
    ///
    /// Returns
    /// -----------------
    /// * `Ok(SolverParams)` if the configuration is valid.
    /// * `Err(TrilaterationError::InvalidSolverParameter)` otherwise.
    pub fn build(self) -> Result<SolverParams, TrilaterationError> {
        let p = &self.params;

        if p.min_sum_of_residual_squares.is_nan() {
            return Err(TrilaterationError::InvalidSolverParameter(
                "min_sum_of_residual_squares must not be NaN".into(),
            ));
        }
        if !p.limits_iterations() && !p.checks_residuals() {
            return Err(TrilaterationError::InvalidSolverParameter(
                "at least one stopping rule must be enabled (max_iterations > 0 or min_sum_of_residual_squares >= 0)".into(),
            ));
        }
        if !(0.0..1.0).contains(&p.min_reciprocal_condition) {
            return Err(TrilaterationError::InvalidSolverParameter(
                "min_reciprocal_condition must be in [0, 1)".into(),
            ));
        }

        Ok(self.params)
    }
}

impl fmt::Display for SolverParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max_it = if self.limits_iterations() {
            self.max_iterations.to_string()
        } else {
            "disabled".to_string()
        };
        let min_ssr = if self.checks_residuals() {
            format!("{:.3e}", self.min_sum_of_residual_squares)
        } else {
            "disabled".to_string()
        };

        if f.alternate() {
            writeln!(f, "Gauss-Newton Solver Parameters")?;
            writeln!(f, "------------------------------")?;
            writeln!(
                f,
                "  max_iterations              = {max_it:<12}# Iteration cap"
            )?;
            writeln!(
                f,
                "  min_sum_of_residual_squares = {min_ssr:<12}# Residual threshold"
            )?;
            writeln!(
                f,
                "  min_reciprocal_condition    = {:<12.1e}# Conditioning floor of JᵀJ",
                self.min_reciprocal_condition
            )
        } else {
            write!(
                f,
                "SolverParams(max_iterations={max_it}, min_sum_of_residual_squares={min_ssr}, min_reciprocal_condition={:.1e})",
                self.min_reciprocal_condition
            )
        }
    }
}

#[cfg(test)]
mod solver_params_test {
    use super::*;

    #[test]
    fn test_default_values() {
        let p = SolverParams::default();
        assert_eq!(p.max_iterations, 100);
        assert_eq!(p.min_sum_of_residual_squares, 1.0);
        assert_eq!(p.min_reciprocal_condition, 1e-12);
        assert_eq!(SolverParams::builder().build().unwrap(), p);
    }

    #[test]
    fn test_builder_overrides() {
        let p = SolverParams::builder()
            .max_iterations(7)
            .without_residual_threshold()
            .min_reciprocal_condition(0.0)
            .build()
            .unwrap();
        assert_eq!(p.max_iterations, 7);
        assert!(!p.checks_residuals());
        assert!(p.limits_iterations());

        let p = SolverParams::builder()
            .unlimited_iterations()
            .min_sum_of_residual_squares(0.0)
            .build()
            .unwrap();
        assert!(!p.limits_iterations());
        assert!(p.checks_residuals());
    }

    #[test]
    fn test_both_rules_disabled_is_rejected() {
        let err = SolverParams::builder()
            .unlimited_iterations()
            .without_residual_threshold()
            .build()
            .unwrap_err();
        assert!(matches!(err, TrilaterationError::InvalidSolverParameter(_)));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(SolverParams::builder()
            .min_sum_of_residual_squares(f64::NAN)
            .build()
            .is_err());
        assert!(SolverParams::builder()
            .min_reciprocal_condition(-1e-3)
            .build()
            .is_err());
        assert!(SolverParams::builder()
            .min_reciprocal_condition(1.0)
            .build()
            .is_err());
        assert!(SolverParams::builder()
            .min_reciprocal_condition(f64::NAN)
            .build()
            .is_err());
    }

    #[test]
    fn test_params_from_json() {
        let p: SolverParams = serde_json::from_str(
            r#"{"max_iterations": 25, "min_sum_of_residual_squares": 1e-3, "min_reciprocal_condition": 1e-10}"#,
        )
        .unwrap();
        assert_eq!(p.max_iterations, 25);
        assert_eq!(p.min_sum_of_residual_squares, 1e-3);
        assert_eq!(p.min_reciprocal_condition, 1e-10);

        let json = serde_json::to_string(&SolverParams::default()).unwrap();
        assert_eq!(
            serde_json::from_str::<SolverParams>(&json).unwrap(),
            SolverParams::default()
        );

        assert!(serde_json::from_str::<SolverParams>(r#"{"max_iterations": 25}"#).is_err());
    }

    #[test]
    fn test_display() {
        let p = SolverParams::builder()
            .max_iterations(0)
            .min_sum_of_residual_squares(1.0)
            .build()
            .unwrap();
        let s = format!("{p}");
        assert!(s.starts_with("SolverParams(max_iterations=disabled"));
        assert!(s.contains("min_sum_of_residual_squares=1.000e0"));

        let table = format!("{p:#}");
        assert!(table.contains("Gauss-Newton Solver Parameters"));
        assert!(table.contains("Conditioning floor"));
    }
}
