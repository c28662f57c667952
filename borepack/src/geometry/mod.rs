mod enclosing;

pub mod primitives;

#[doc(inline)]
pub use enclosing::enclosing_circle;

use crate::geometry::primitives::Point;

/// Converts polar coordinates to Cartesian ones.
/// The angle is measured in degrees, counter-clockwise from the positive x-axis.
pub fn polar_to_cartesian(angle_degrees: f64, radius: f64) -> (f64, f64) {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    (radius * cos, radius * sin)
}

/// Euclidean distance between two points
pub fn distance(p0: (f64, f64), p1: (f64, f64)) -> f64 {
    Point::from(p0).distance(&Point::from(p1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use test_case::test_case;

    #[test_case(0.0, 2.0, (2.0, 0.0); "positive x-axis")]
    #[test_case(90.0, 2.0, (0.0, 2.0); "positive y-axis")]
    #[test_case(180.0, 1.5, (-1.5, 0.0); "negative x-axis")]
    #[test_case(270.0, 1.0, (0.0, -1.0); "negative y-axis")]
    #[test_case(45.0, 2.0_f64.sqrt(), (1.0, 1.0); "diagonal")]
    fn polar_conversion(angle: f64, radius: f64, expected: (f64, f64)) {
        let (x, y) = polar_to_cartesian(angle, radius);
        assert!(approx_eq!(f64, x, expected.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, y, expected.1, epsilon = 1e-12));
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance((0.0, 0.0), (3.0, 4.0)), 5.0);
        assert_eq!(distance((3.0, 4.0), (0.0, 0.0)), 5.0);
        assert_eq!(distance((-1.5, 2.0), (-1.5, 2.0)), 0.0);
        assert!(distance((1.0, 0.0), (1.0, 1e-12)) > 0.0);
    }
}
