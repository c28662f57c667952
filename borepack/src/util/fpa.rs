use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use float_cmp::approx_eq;

use crate::EPSILON;

/// Returns true iff `a` and `b` differ by at most [`EPSILON`].
pub fn almost_equal(a: f64, b: f64) -> bool {
    approx_eq!(f64, a, b, epsilon = EPSILON, ulps = 0)
}

///Wrapper around [`almost_equal`] for easy comparison of floats with the engine's tolerance.
///Two FPAs are considered equal if they are within [`EPSILON`] of each other.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl<T> From<T> for FPA
where
    T: Into<f64>,
{
    fn from(n: T) -> Self {
        FPA(n.into())
    }
}

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        almost_equal(self.0, other.0)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_values_are_equal() {
        assert!(almost_equal(1.0, 1.0 + 0.5e-9));
        assert!(almost_equal(-3.0, -3.0));
        assert!(!almost_equal(1.0, 1.0 + 1e-6));
    }

    #[test]
    fn ordering_respects_tolerance() {
        assert!(FPA(1.0) >= FPA(1.0 + 0.5e-9));
        assert!(FPA(1.0) <= FPA(1.0 - 0.5e-9));
        assert!(FPA(1.0) < FPA(1.001));
        assert_eq!(FPA(2.0).partial_cmp(&FPA(2.0 + 1e-10)), Some(Ordering::Equal));
    }
}
