use crate::entities::CircleSpec;
use crate::geometry::primitives::{Circle, Point};

/// A [`CircleSpec`] with a position inside the bore, and optionally its visualization color.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedCircle {
    pub spec: CircleSpec,
    pub center: Point,
    /// Assigned by the [color](crate::color) module once the packing is complete
    pub color: Option<String>,
}

impl PlacedCircle {
    pub fn new(spec: CircleSpec, center: Point) -> Self {
        Self {
            spec,
            center,
            color: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn radius(&self) -> f64 {
        self.spec.radius
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.spec.radius)
    }
}
