use std::f64::consts::PI;

use crate::geometry::primitives::Point;
use crate::util::FPA;

/// Geometric primitive representing a circle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {}",
            radius
        );
        debug_assert!(center.is_finite(), "invalid circle center: {:?}", center);

        Self { center, radius }
    }

    /// True if both circles overlap by more than [`EPSILON`](crate::EPSILON).
    /// Tangent (or nearly tangent) circles do not overlap.
    pub fn overlaps(&self, other: &Circle) -> bool {
        FPA(self.center.distance(&other.center)) < FPA(self.radius + other.radius)
    }

    /// True if `other` lies entirely within this circle, up to [`EPSILON`](crate::EPSILON).
    pub fn contains(&self, other: &Circle) -> bool {
        FPA(self.center.distance(&other.center) + other.radius) <= FPA(self.radius)
    }

    /// Distance from `point` to the point of this circle furthest away from it
    pub fn reach_from(&self, point: &Point) -> f64 {
        self.center.distance(point) + self.radius
    }

    /// Returns a (not necessarily minimal) circle that fully contains all `circles`.
    /// Every circle that is not yet contained grows the running circle just enough to fit it.
    pub fn bounding_circle<'a>(circles: impl IntoIterator<Item = &'a Circle>) -> Option<Circle> {
        let mut circles = circles.into_iter();
        let mut bounding = *circles.next()?;

        for circle in circles {
            let d = bounding.center.distance(&circle.center);
            if bounding.radius < d + circle.radius {
                // circle not contained in bounding circle, expand
                if d == 0.0 {
                    bounding.radius = circle.radius;
                    continue;
                }
                let new_radius = (bounding.radius + d + circle.radius) / 2.0;
                let shift = new_radius - bounding.radius;
                let (ux, uy) = (
                    (circle.center.0 - bounding.center.0) / d,
                    (circle.center.1 - bounding.center.1) / d,
                );
                bounding = Circle::new(
                    bounding.center.translate(ux * shift, uy * shift),
                    new_radius,
                );
            }
        }
        Some(bounding)
    }

    pub fn area(&self) -> f64 {
        self.radius * self.radius * PI
    }

    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tangent_circles_do_not_overlap() {
        let a = Circle::new(Point(0.0, 0.0), 0.5);
        let b = Circle::new(Point(1.0, 0.0), 0.5);
        let c = Circle::new(Point(1.0 - 1e-10, 0.0), 0.5);
        let d = Circle::new(Point(0.9, 0.0), 0.5);
        assert!(!a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(a.overlaps(&d));
        assert!(d.overlaps(&a));
    }

    #[test]
    fn containment_is_tolerant() {
        let bore = Circle::new(Point::ORIGIN, 1.0);
        assert!(bore.contains(&Circle::new(Point(0.5, 0.0), 0.5)));
        assert!(bore.contains(&Circle::new(Point(0.5 + 1e-10, 0.0), 0.5)));
        assert!(!bore.contains(&Circle::new(Point(0.5 + 1e-6, 0.0), 0.5)));
    }

    #[test]
    fn bounding_circle_contains_all() {
        let circles = [
            Circle::new(Point(0.0, 0.0), 1.0),
            Circle::new(Point(3.0, 0.0), 0.5),
            Circle::new(Point(-1.0, 2.0), 0.25),
            Circle::new(Point(0.0, 0.0), 2.0),
        ];
        let bounding = Circle::bounding_circle(&circles).unwrap();
        assert!(circles.iter().all(|c| bounding.contains(c)));
        assert!(Circle::bounding_circle(&[]).is_none());
    }
}
