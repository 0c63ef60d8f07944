//! Benchmarks for the Gauss-Newton update and the full solver loop (single-threaded)
//!
//! Usage:
//!   cargo bench --bench gauss_newton
//!   cargo bench --bench gauss_newton -- gauss_newton/single_step

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use trilateration::geometry::Point;
use trilateration::observations::residuals::linearize;
use trilateration::observations::Range;
use trilateration::solver::gauss_newton::{gauss_newton_step, solve};
use trilateration::solver::restarts::{trilaterate_with_restarts, InitialGuess};
use trilateration::solver::SolverParams;

/// Deterministic fixture: seven stations, target close to the origin.
fn make_fixture_ranges() -> Vec<Range> {
    [
        ((-9529.96875, -41.71875, -10613.03125), 14263.89),
        ((-9570.0625, -60.28125, -10585.375), 14270.25),
        ((-9617.125, -76.59375, -10570.6875), 14291.06),
        ((-9662.1875, -80.34375, -10544.375), 14302.03),
        ((-9674.40625, -81.4375, -10528.3437), 14298.49),
        ((-9780.125, 9.75, -10414.21875), 14286.60),
        ((-9898.96875, 49.09375, -10440.8125), 14387.58),
    ]
    .iter()
    .map(|&((x, y, z), d)| Range::new(Point::new(x, y, z), d))
    .collect()
}

fn bench_gauss_newton(c: &mut Criterion) {
    let mut group = c.benchmark_group("gauss_newton");

    let obs = make_fixture_ranges();
    let guess = Point::new(20000.0, -30000.0, 90000.0);
    let params = SolverParams::builder()
        .min_sum_of_residual_squares(1e-3)
        .build()
        .expect("valid solver parameters");

    // 1) Linearization only
    group.bench_function("linearize", |b| {
        b.iter(|| black_box(linearize(black_box(&obs), black_box(&guess))))
    });

    // 2) One update
    group.bench_function("single_step", |b| {
        b.iter(|| black_box(gauss_newton_step(black_box(&obs), black_box(&guess))))
    });

    // 3) Full loop from a far guess
    group.bench_function("solve_static_guess", |b| {
        b.iter(|| black_box(solve(black_box(&obs), black_box(&guess), &params)))
    });

    // 4) Random restarts on the sphere of the first range
    let strategy = InitialGuess::sphere_around_first_range(&obs).expect("non-empty fixture");
    group.bench_function("restarts_sphere", |b| {
        b.iter_batched(
            || StdRng::seed_from_u64(42),
            |mut rng| {
                let res = trilaterate_with_restarts(&obs, &params, &strategy, 5, &mut rng);
                black_box(res)
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(gauss_newton_benches, bench_gauss_newton);
criterion_main!(gauss_newton_benches);
