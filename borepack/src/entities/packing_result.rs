use std::f64::consts::PI;

use itertools::Itertools;

use crate::color;
use crate::entities::PlacedCircle;
use crate::geometry::primitives::{Circle, Point};

/// The circular container holding all cables, always centered at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bore {
    pub radius: f64,
}

impl Bore {
    pub fn new(radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius > 0.0,
            "invalid bore radius: {}",
            radius
        );
        Self { radius }
    }

    pub fn center(&self) -> Point {
        Point::ORIGIN
    }

    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    pub fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }

    pub fn circle(&self) -> Circle {
        Circle::new(Point::ORIGIN, self.radius)
    }
}

/// Outcome of a single bore search: the bore and every circle positioned inside it.
/// Circles are stored in the order in which they were placed (descending radius).
#[derive(Clone, Debug, PartialEq)]
pub struct PackingResult {
    pub bore: Bore,
    pub circles: Vec<PlacedCircle>,
}

impl PackingResult {
    /// Assigns the visualization colors to all circles
    pub fn with_colors(self) -> Self {
        Self {
            bore: self.bore,
            circles: color::assign(&self.circles),
        }
    }

    /// Fraction of the bore's area covered by the circles
    pub fn density(&self) -> f64 {
        let circle_area: f64 = self.circles.iter().map(|c| c.circle().area()).sum();
        circle_area / self.bore.area()
    }

    /// Number of placed circles per cable name, in order of first appearance
    pub fn counts_per_name(&self) -> Vec<(&str, usize)> {
        self.circles
            .iter()
            .map(|c| c.name())
            .unique()
            .map(|name| {
                let count = self.circles.iter().filter(|c| c.name() == name).count();
                (name, count)
            })
            .collect_vec()
    }
}
