use tracing_subscriber::EnvFilter;

use trilateration::constants::Observations;
use trilateration::geometry::Point;
use trilateration::observations::residuals::sum_of_residual_squares;
use trilateration::observations::Range;
use trilateration::solver::gauss_newton::{gauss_newton_step, solve};
use trilateration::solver::SolverParams;
use trilateration::trilateration_errors::TrilaterationError;

/// Six stations and their measured ranges to a target close to the origin.
fn observations() -> Observations {
    vec![
        Range::new(Point::new(-9529.96875, -41.71875, -10613.03125), 14263.89),
        Range::new(Point::new(-9570.0625, -60.28125, -10585.375), 14270.25),
        Range::new(Point::new(-9617.125, -76.59375, -10570.6875), 14291.06),
        Range::new(Point::new(-9662.1875, -80.34375, -10544.375), 14302.03),
        Range::new(Point::new(-9674.40625, -81.4375, -10528.3437), 14298.49),
        Range::new(Point::new(-9780.125, 9.75, -10414.21875), 14286.60),
    ]
}

/// Minimal driver: iterate the Gauss-Newton update by hand, printing every guess, then run
/// the solver loop once.
/// Usage:
///   cargo run --example trilaterate_once [--verbose]
/// With `--verbose` (or `RUST_LOG=debug`) the solver's own iteration log is shown too.
fn main() -> Result<(), TrilaterationError> {
    let verbose = std::env::args().skip(1).any(|a| a == "--verbose");
    let filter = if verbose {
        EnvFilter::new("trilateration=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let obs = observations();
    let mut guess = Point::new(2.0, -3.0, 9.0);

    println!("Initial guess: {guess}");
    println!("Sum of squares: {}", sum_of_residual_squares(&obs, &guess));
    for i in 0..100 {
        println!("\nIteration: {i}");
        guess = gauss_newton_step(&obs, &guess)?;
        println!("   New guess: {guess}");
        println!("   Sum of squares: {}", sum_of_residual_squares(&obs, &guess));
    }

    let params = SolverParams::builder()
        .min_sum_of_residual_squares(1e-3)
        .build()?;
    println!("\n{params:#}");

    let result = solve(&obs, &Point::new(20000.0, -30000.0, 90000.0), &params)?;
    println!("{result}");

    Ok(())
}
