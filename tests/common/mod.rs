#![allow(dead_code)]

use approx::assert_relative_eq;
use trilateration::geometry::Point;
use trilateration::observations::Range;

/// Stations shared by every observation set below.
pub const STATIONS: [Point; 7] = [
    Point::new(-9529.96875, -41.71875, -10613.03125),
    Point::new(-9570.0625, -60.28125, -10585.375),
    Point::new(-9617.125, -76.59375, -10570.6875),
    Point::new(-9662.1875, -80.34375, -10544.375),
    Point::new(-9674.40625, -81.4375, -10528.3437),
    Point::new(-9780.125, 9.75, -10414.21875),
    Point::new(-9898.96875, 49.09375, -10440.8125),
];

/// Measured ranges together with the point they were measured from.
pub struct TestObservation {
    pub measurements: Vec<Range>,
    pub expected_solution: Point,
}

pub fn ranges(distances: [f64; 7]) -> Vec<Range> {
    STATIONS
        .iter()
        .zip(distances)
        .map(|(s, d)| Range::new(*s, d))
        .collect()
}

/// Ranges measured from (close to) the origin.
pub fn observations_set_origin() -> Vec<Range> {
    ranges([
        14263.89, 14270.25, 14291.06, 14302.03, 14298.49, 14286.60, 14387.58,
    ])
}

pub fn test_observations() -> Vec<TestObservation> {
    vec![
        TestObservation {
            measurements: observations_set_origin(),
            expected_solution: Point::ORIGIN,
        },
        TestObservation {
            measurements: ranges([
                30433.55, 30405.41, 30390.37, 30364.13, 30348.13, 30237.38, 30266.39,
            ]),
            expected_solution: Point::new(-9530.5, -910.28125, 19808.125),
        },
        TestObservation {
            measurements: ranges([
                14263.78, 14270.17, 14291.01, 14302.01, 14298.48, 14286.69, 14387.72,
            ]),
            expected_solution: Point::new(6.25, -1.28125, -5.75),
        },
        TestObservation {
            measurements: ranges([
                3184.68, 3157.20, 3143.50, 3118.80, 3103.34, 2997.21, 3037.08,
            ]),
            expected_solution: Point::new(-9529.437, -64.5, -7428.4375),
        },
        TestObservation {
            measurements: ranges([
                3911.65, 3874.52, 3832.39, 3787.03, 3773.53, 3632.56, 3511.50,
            ]),
            expected_solution: Point::new(-13243.15625, 1026.5625, -10003.09375),
        },
    ]
}

pub fn assert_point_close(actual: &Point, expected: &Point, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
