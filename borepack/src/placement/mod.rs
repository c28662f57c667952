mod front_chain;

#[doc(inline)]
pub use front_chain::FrontChain;
#[doc(inline)]
pub use front_chain::FrontKey;

use log::trace;
use ordered_float::OrderedFloat;

use crate::entities::{CircleSpec, PlacedCircle};
use crate::geometry::enclosing_circle;
use crate::geometry::primitives::{Circle, Point};
use crate::util::FPA;
use crate::EPSILON;

/// Direction (in degrees) in which the second circle is placed against the first one
pub const REFERENCE_ANGLE: f64 = 0.0;

/// Attempts to arrange all `circles` (in the given order) inside a bore of radius `trial_radius`.
///
/// Front-chain method: the first circle is placed at the origin, the second one against it
/// in the [`REFERENCE_ANGLE`] direction and every following circle tangent to two adjacent anchors
/// of the frontier, always on its outer side so the frontier advances counter-clockwise.
/// If the candidate position would overlap a frontier circle, the frontier is tightened
/// around that circle and the position is recomputed.
///
/// The arrangement is measured by its smallest enclosing circle. As soon as that no longer fits
/// `trial_radius` the attempt fails. On success, all centers are translated such that the
/// enclosing circle (and thus the bore) is centered at the origin.
///
/// Returns `None` if the circles cannot be arranged in the trial bore. Deterministic.
pub fn attempt(circles: &[CircleSpec], trial_radius: f64) -> Option<Vec<PlacedCircle>> {
    let mut arr = Arrangement::new(trial_radius, circles.len());
    let n = circles.len();
    let radius = |i: usize| circles[i].radius;

    if n == 0 {
        return Some(vec![]);
    }
    arr.commit(Circle::new(Point::ORIGIN, radius(0)))?;

    if n > 1 {
        let center = Point::from_polar(REFERENCE_ANGLE, radius(0) + radius(1));
        arr.commit(Circle::new(center, radius(1)))?;
    }

    if n > 2 {
        let center = tangent_point(&arr.placed[0], &arr.placed[1], radius(2))?;
        arr.commit(Circle::new(center, radius(2)))?;

        let (mut chain, [mut a, mut b, _]) = FrontChain::triangle(0, 1, 2);

        let mut i = 3;
        while i < n {
            let r = radius(i);
            let (circle_a, circle_b) = (&arr.placed[chain.circle(a)], &arr.placed[chain.circle(b)]);

            let candidate = tangent_point(circle_b, circle_a, r).map(|c| Circle::new(c, r));

            let Some(candidate) = candidate else {
                //anchors are too far apart to both touch the circle
                trace!("[PLACE] no tangent solution for circle {i}, placing it outward");
                arr.commit(arr.outward_circle(r)?)?;
                i += 1;
                continue;
            };

            match first_frontier_collision(&chain, a, b, &arr.placed, &candidate) {
                Some(Collision::After(j)) if j != a => {
                    //tighten the frontier around the colliding circle and retry
                    chain.link(a, j);
                    b = j;
                    continue;
                }
                Some(Collision::Before(k)) if k != b => {
                    chain.link(k, b);
                    a = k;
                    continue;
                }
                Some(_) => {
                    trace!("[PLACE] frontier exhausted for circle {i}, placing it outward");
                    arr.commit(arr.outward_circle(r)?)?;
                    i += 1;
                    continue;
                }
                None => (),
            }

            if arr.overlaps_any(&candidate) {
                //collides with a circle behind the frontier
                trace!("[PLACE] circle {i} collides behind the frontier, placing it outward");
                arr.commit(arr.outward_circle(r)?)?;
                i += 1;
                continue;
            }

            arr.commit(candidate)?;
            let c = chain.insert_between(a, b, i);

            //select the frontier pair closest to the origin as anchors for the next circle
            let mut best = (a, anchor_score(&chain, a, &arr.placed));
            for key in chain.iter_from(c).skip(1) {
                let score = anchor_score(&chain, key, &arr.placed);
                if score < best.1 {
                    best = (key, score);
                }
            }
            a = best.0;
            b = chain.next(a);
            i += 1;
        }
    }

    arr.finish(circles)
}

/// State of an arrangement under construction
struct Arrangement {
    trial_radius: f64,
    /// Placed circles, index matches the index of their [`CircleSpec`]
    placed: Vec<Circle>,
    /// Smallest circle enclosing all placed circles
    enclosure: Option<Circle>,
}

impl Arrangement {
    fn new(trial_radius: f64, capacity: usize) -> Self {
        Self {
            trial_radius,
            placed: Vec::with_capacity(capacity),
            enclosure: None,
        }
    }

    /// Validates and adds a circle to the arrangement.
    /// Returns `None` if the circle overlaps an existing one
    /// or if the arrangement no longer fits the trial bore.
    fn commit(&mut self, circle: Circle) -> Option<()> {
        if !circle.center.is_finite() || self.overlaps_any(&circle) {
            trace!("[PLACE] invalid position: {circle:?}");
            return None;
        }
        self.placed.push(circle);

        let enclosed = match &self.enclosure {
            Some(e) => e.center.distance(&circle.center) + circle.radius <= e.radius,
            None => false,
        };
        if !enclosed {
            //the enclosure can only grow
            self.enclosure = enclosing_circle(&self.placed);
        }

        match self.enclosure {
            Some(e) if FPA(e.radius) <= FPA(self.trial_radius) => Some(()),
            _ => None,
        }
    }

    fn overlaps_any(&self, circle: &Circle) -> bool {
        self.placed.iter().any(|p| p.overlaps(circle))
    }

    /// A circle of radius `r` placed just beyond the part of the arrangement
    /// which reaches furthest from the origin.
    /// It cannot overlap any placed circle. `None` if nothing has been placed yet.
    fn outward_circle(&self, r: f64) -> Option<Circle> {
        let furthest = self
            .placed
            .iter()
            .max_by_key(|p| OrderedFloat(p.reach_from(&Point::ORIGIN)))?;

        let reach = furthest.reach_from(&Point::ORIGIN);
        let norm = furthest.center.norm();
        let (ux, uy) = match norm > EPSILON {
            true => (furthest.center.0 / norm, furthest.center.1 / norm),
            false => Point::from_polar(REFERENCE_ANGLE, 1.0).into(),
        };
        Some(Circle::new(Point(ux * (reach + r), uy * (reach + r)), r))
    }

    /// Centers the arrangement at the origin and verifies all circles are contained in the trial
    /// bore
    fn finish(self, specs: &[CircleSpec]) -> Option<Vec<PlacedCircle>> {
        let Some(enclosure) = self.enclosure else {
            return Some(vec![]);
        };
        let Point(dx, dy) = enclosure.center;
        let bore = Circle::new(Point::ORIGIN, self.trial_radius);

        let placed = self
            .placed
            .iter()
            .zip(specs)
            .map(|(c, spec)| PlacedCircle::new(spec.clone(), c.center.translate(-dx, -dy)))
            .collect::<Vec<_>>();

        match placed.iter().all(|pc| bore.contains(&pc.circle())) {
            true => Some(placed),
            false => {
                trace!(
                    "[PLACE] arrangement exceeds trial radius {} after centering",
                    self.trial_radius
                );
                None
            }
        }
    }
}

enum Collision {
    /// Collision with a frontier circle following the anchor `b`
    After(FrontKey),
    /// Collision with a frontier circle preceding the anchor `a`
    Before(FrontKey),
}

/// Finds the frontier circle closest (along the frontier) to the anchors `a` and `b`
/// that overlaps `candidate`. Both directions are scanned simultaneously,
/// always advancing on the side which has covered the least distance.
fn first_frontier_collision(
    chain: &FrontChain,
    a: FrontKey,
    b: FrontKey,
    placed: &[Circle],
    candidate: &Circle,
) -> Option<Collision> {
    let circle = |k: FrontKey| &placed[chain.circle(k)];

    let (mut j, mut k) = (chain.next(b), chain.prev(a));
    let (mut sj, mut sk) = (circle(b).radius, circle(a).radius);
    loop {
        if sj <= sk {
            if circle(j).overlaps(candidate) {
                return Some(Collision::After(j));
            }
            sj += circle(j).radius;
            j = chain.next(j);
        } else {
            if circle(k).overlaps(candidate) {
                return Some(Collision::Before(k));
            }
            sk += circle(k).radius;
            k = chain.prev(k);
        }
        if j == chain.next(k) {
            return None;
        }
    }
}

/// Squared distance between the origin and the radius-weighted midpoint
/// of the frontier pair starting at `key`
fn anchor_score(chain: &FrontChain, key: FrontKey, placed: &[Circle]) -> f64 {
    let a = &placed[chain.circle(key)];
    let b = &placed[chain.circle(chain.next(key))];
    let ab = a.radius + b.radius;
    let x = (a.center.0 * b.radius + b.center.0 * a.radius) / ab;
    let y = (a.center.1 * b.radius + b.center.1 * a.radius) / ab;
    x * x + y * y
}

/// Center of a circle with radius `r` tangent to both `a` and `b`,
/// located on the left-hand side when looking from `a` towards `b`.
/// Returns `None` if no such circle exists.
pub fn tangent_point(a: &Circle, b: &Circle, r: f64) -> Option<Point> {
    let (Point(ax, ay), Point(bx, by)) = (a.center, b.center);
    let (dx, dy) = (bx - ax, by - ay);
    let d2 = dx * dx + dy * dy;
    if d2 == 0.0 {
        return None;
    }
    let a2 = (a.radius + r).powi(2);
    let b2 = (b.radius + r).powi(2);

    //solve from the anchor with the smaller tangent distance, this is numerically more stable
    let (x, h) = match a2 > b2 {
        true => {
            let x = (d2 + b2 - a2) / (2.0 * d2);
            (x, b2 / d2 - x * x)
        }
        false => {
            let x = (d2 + a2 - b2) / (2.0 * d2);
            (x, a2 / d2 - x * x)
        }
    };
    if h < -EPSILON {
        return None;
    }
    let y = h.max(0.0).sqrt();

    let p = match a2 > b2 {
        true => Point(bx - x * dx - y * dy, by - x * dy + y * dx),
        false => Point(ax + x * dx - y * dy, ay + x * dy + y * dx),
    };
    p.is_finite().then_some(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::distance;
    use float_cmp::approx_eq;
    use itertools::Itertools;

    fn specs(diameters: &[f64]) -> Vec<CircleSpec> {
        diameters
            .iter()
            .enumerate()
            .map(|(i, d)| CircleSpec::from_diameter(format!("c{i}"), *d))
            .collect_vec()
    }

    fn assert_valid(placed: &[PlacedCircle], trial_radius: f64) {
        for (p, q) in placed.iter().tuple_combinations() {
            let d = distance(p.center.into(), q.center.into());
            assert!(d >= p.radius() + q.radius() - EPSILON, "{p:?} overlaps {q:?}");
        }
        for p in placed {
            assert!(p.center.norm() + p.radius() <= trial_radius + EPSILON);
        }
    }

    #[test]
    fn tangent_point_touches_both_circles() {
        let a = Circle::new(Point(0.0, 0.0), 1.0);
        let b = Circle::new(Point(1.5, 0.0), 0.5);
        let p = tangent_point(&a, &b, 0.25).unwrap();
        assert!(approx_eq!(f64, p.distance(&a.center), 1.25, epsilon = 1e-12));
        assert!(approx_eq!(f64, p.distance(&b.center), 0.75, epsilon = 1e-12));
        //left-hand side of a -> b
        assert!(p.1 > 0.0);

        let mirrored = tangent_point(&b, &a, 0.25).unwrap();
        assert!(approx_eq!(f64, mirrored.0, p.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, mirrored.1, -p.1, epsilon = 1e-12));
    }

    #[test]
    fn tangent_point_absent_for_distant_anchors() {
        let a = Circle::new(Point(0.0, 0.0), 1.0);
        let b = Circle::new(Point(10.0, 0.0), 1.0);
        assert_eq!(tangent_point(&a, &b, 0.5), None);
        assert_eq!(tangent_point(&a, &a, 0.5), None);
    }

    #[test]
    fn two_equal_circles_are_centered() {
        let placed = attempt(&specs(&[1.0, 1.0]), 1.0).unwrap();
        assert!(approx_eq!(f64, placed[0].center.0, -0.5, epsilon = 1e-12));
        assert!(approx_eq!(f64, placed[1].center.0, 0.5, epsilon = 1e-12));
        assert!(approx_eq!(f64, placed[0].center.1, 0.0, epsilon = 1e-12));
        assert_valid(&placed, 1.0);
    }

    #[test]
    fn too_small_trial_radius_fails() {
        assert!(attempt(&specs(&[1.0, 1.0]), 0.99).is_none());
        assert!(attempt(&specs(&[2.0, 1.0, 1.0, 0.5]), 1.0).is_none());
    }

    #[test]
    fn valid_arrangement_for_mixed_sizes() {
        let circles = specs(&[2.0, 1.5, 1.5, 1.0, 1.0, 1.0, 0.5, 0.5, 0.5, 0.5, 0.25, 0.25]);
        let placed = attempt(&circles, 100.0).unwrap();
        assert_eq!(placed.len(), circles.len());
        assert_valid(&placed, 100.0);
        //order and specs are preserved
        assert!(placed.iter().zip(&circles).all(|(p, s)| p.spec == *s));
    }

    #[test]
    fn many_equal_circles_are_valid() {
        let circles = specs(&[1.0; 60]);
        let placed = attempt(&circles, 100.0).unwrap();
        assert_valid(&placed, 100.0);
    }

    #[test]
    fn placement_is_deterministic() {
        let circles = specs(&[3.0, 2.0, 2.0, 1.2, 0.8, 0.8, 0.8, 0.3]);
        let first = attempt(&circles, 50.0).unwrap();
        let second = attempt(&circles, 50.0).unwrap();
        assert_eq!(first, second);
    }
}
