//! # Constants and type definitions
//!
//! Default solver parameters and the common type aliases used throughout the crate.
//!
//! ## Overview
//!
//! - Default stopping rules of the Gauss-Newton loop
//! - Conditioning threshold applied to the normal equations
//! - Container alias for a set of range observations

use crate::observations::Range;

// -------------------------------------------------------------------------------------------------
// Solver defaults
// -------------------------------------------------------------------------------------------------

/// Default cap on Gauss-Newton iterations (`0` disables the cap)
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Default threshold on the sum of squared residuals (negative disables the check)
pub const DEFAULT_MIN_SUM_OF_RESIDUAL_SQUARES: f64 = 1.0;

/// Smallest accepted ratio `λ_min / λ_max` of the normal matrix `JᵀJ`
pub const DEFAULT_MIN_RECIPROCAL_CONDITION: f64 = 1e-12;

/// Minimum number of ranges needed to pin down the three unknown coordinates
pub const MIN_RANGES: usize = 3;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Ordered set of range observations describing one problem instance.
///
/// Entry `i` matches row `i` of the residual vector and of the Jacobian.
pub type Observations = Vec<Range>;
