//! # trilateration
//!
//! Three-dimensional **true-range multilateration**: estimate the position of a target from
//! the distances measured between it and a set of stations with known coordinates.
//!
//! The estimate is the point minimizing the sum of squared range residuals, found by an
//! iterative **Gauss-Newton** least-squares solver started from a caller-provided guess.
//!
//! ## Modules
//!
//! - [`geometry`] – [`Point`](geometry::Point), Euclidean [`distance`](geometry::distance),
//!   random initial guesses in a cube or on a sphere.
//! - [`observations`] – [`Range`](observations::Range) (station + measured distance) and the
//!   residual model (residual vector, Jacobian, sum of squared residuals).
//! - [`solver`] – [`SolverParams`](solver::SolverParams), the Gauss-Newton update and loop,
//!   and a random-restart driver.
//! - [`trilateration_errors`] – [`TrilaterationError`](trilateration_errors::TrilaterationError).
//! - [`constants`] – solver defaults and type aliases.
//!
//! ## Quick start
//!
//! ```rust
//! use trilateration::geometry::Point;
//! use trilateration::observations::Range;
//! use trilateration::observations::residuals::sum_of_residual_squares;
//! use trilateration::solver::gauss_newton::trilaterate;
//!
//! let observations = vec![
//!     Range::new(Point::new(-9529.96875, -41.71875, -10613.03125), 14263.89),
//!     Range::new(Point::new(-9570.0625, -60.28125, -10585.375), 14270.25),
//!     Range::new(Point::new(-9617.125, -76.59375, -10570.6875), 14291.06),
//!     Range::new(Point::new(-9662.1875, -80.34375, -10544.375), 14302.03),
//!     Range::new(Point::new(-9674.40625, -81.4375, -10528.3437), 14298.49),
//!     Range::new(Point::new(-9780.125, 9.75, -10414.21875), 14286.60),
//!     Range::new(Point::new(-9898.96875, 49.09375, -10440.8125), 14387.58),
//! ];
//!
//! let initial_guess = Point::new(20000.0, -30000.0, 90000.0);
//! let solution = trilaterate(&observations, &initial_guess, 100, 1.0)?;
//!
//! assert!(sum_of_residual_squares(&observations, &solution) < 1.0);
//! assert!(solution.distance(&Point::ORIGIN) < 1.0);
//! # Ok::<(), trilateration::trilateration_errors::TrilaterationError>(())
//! ```
pub mod constants;
pub mod geometry;
pub mod observations;
pub mod solver;
pub mod trilateration_errors;
