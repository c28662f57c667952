use log::trace;

use crate::geometry::primitives::{Circle, Point};

/// Returns the smallest circle enclosing all `circles`, or `None` if there are none.
///
/// Move-to-front variant of Welzl's algorithm, extended to circles: the circles are visited in
/// the given order (no shuffling, so the outcome is fully deterministic) and every circle not yet
/// enclosed extends a basis of at most three circles that define the enclosure.
///
/// Should the basis ever fail to extend due to round-off, the running enclosure is grown with
/// [`Circle::bounding_circle`] instead, which is still a valid (if slightly larger) enclosure.
pub fn enclosing_circle(circles: &[Circle]) -> Option<Circle> {
    let mut enclosure: Option<Circle> = None;
    let mut basis: Vec<Circle> = Vec::with_capacity(3);
    let mut n_extensions = 0;
    let mut i = 0;
    while i < circles.len() {
        let c = &circles[i];
        match enclosure {
            Some(e) if encloses_weak(&e, c) => i += 1,
            _ => match extend_basis(&basis, c) {
                Some(extended) if n_extensions < max_extensions(circles.len()) => {
                    n_extensions += 1;
                    enclosure = Some(enclose_basis(&extended));
                    basis = extended;
                    i = 0;
                }
                _ => {
                    trace!("[ENC] basis could not be extended, falling back to bounding circle");
                    return Circle::bounding_circle(circles);
                }
            },
        }
    }
    enclosure
}

/// Upper limit on basis extensions, guards against cycling caused by round-off
fn max_extensions(n: usize) -> usize {
    100 + 10 * n * n
}

fn extend_basis(basis: &[Circle], p: &Circle) -> Option<Vec<Circle>> {
    if encloses_weak_all(p, basis) {
        return Some(vec![*p]);
    }

    for b in basis {
        if encloses_not(p, b) && encloses_weak_all(&enclose_two(b, p), basis) {
            return Some(vec![*b, *p]);
        }
    }

    for (i, bi) in basis.iter().enumerate() {
        for bj in basis.iter().skip(i + 1) {
            if encloses_not(&enclose_two(bi, bj), p)
                && encloses_not(&enclose_two(bi, p), bj)
                && encloses_not(&enclose_two(bj, p), bi)
            {
                if let Some(e) = enclose_three(bi, bj, p) {
                    if encloses_weak_all(&e, basis) {
                        return Some(vec![*bi, *bj, *p]);
                    }
                }
            }
        }
    }
    None
}

/// True if `b` is not (strictly) enclosed by `a`
fn encloses_not(a: &Circle, b: &Circle) -> bool {
    let dr = a.radius - b.radius;
    dr < 0.0 || dr * dr < a.center.sq_distance(&b.center)
}

/// True if `b` is enclosed by `a`, with a relative slack of 1e-9 in favor of enclosure
fn encloses_weak(a: &Circle, b: &Circle) -> bool {
    let dr = a.radius - b.radius + f64::max(f64::max(a.radius, b.radius), 1.0) * 1e-9;
    dr > 0.0 && dr * dr > a.center.sq_distance(&b.center)
}

fn encloses_weak_all(a: &Circle, basis: &[Circle]) -> bool {
    basis.iter().all(|b| encloses_weak(a, b))
}

fn enclose_basis(basis: &[Circle]) -> Circle {
    match basis {
        [a] => *a,
        [a, b] => enclose_two(a, b),
        [a, b, c] => enclose_three(a, b, c).unwrap_or_else(|| enclose_two(a, b)),
        _ => unreachable!("basis holds between one and three circles"),
    }
}

fn enclose_two(a: &Circle, b: &Circle) -> Circle {
    let (Point(x1, y1), r1) = (a.center, a.radius);
    let (Point(x2, y2), r2) = (b.center, b.radius);
    let (x21, y21, r21) = (x2 - x1, y2 - y1, r2 - r1);
    let l = (x21 * x21 + y21 * y21).sqrt();
    if l == 0.0 {
        //concentric
        return Circle {
            center: a.center,
            radius: f64::max(r1, r2),
        };
    }
    Circle {
        center: Point(
            (x1 + x2 + x21 / l * r21) / 2.0,
            (y1 + y2 + y21 / l * r21) / 2.0,
        ),
        radius: (l + r1 + r2) / 2.0,
    }
}

/// Circle internally tangent to `a`, `b` and `c` (problem of Apollonius), `None` if degenerate
fn enclose_three(a: &Circle, b: &Circle, c: &Circle) -> Option<Circle> {
    let (Point(x1, y1), r1) = (a.center, a.radius);
    let (Point(x2, y2), r2) = (b.center, b.radius);
    let (Point(x3, y3), r3) = (c.center, c.radius);

    let (a2, a3) = (x1 - x2, x1 - x3);
    let (b2, b3) = (y1 - y2, y1 - y3);
    let (c2, c3) = (r2 - r1, r3 - r1);
    let d1 = x1 * x1 + y1 * y1 - r1 * r1;
    let d2 = d1 - x2 * x2 - y2 * y2 + r2 * r2;
    let d3 = d1 - x3 * x3 - y3 * y3 + r3 * r3;
    let ab = a3 * b2 - a2 * b3;
    if ab == 0.0 {
        //collinear centers
        return None;
    }
    let xa = (b2 * d3 - b3 * d2) / (ab * 2.0) - x1;
    let xb = (b3 * c2 - b2 * c3) / ab;
    let ya = (a3 * d2 - a2 * d3) / (ab * 2.0) - y1;
    let yb = (a2 * c3 - a3 * c2) / ab;
    let qa = xb * xb + yb * yb - 1.0;
    let qb = 2.0 * (r1 + xa * xb + ya * yb);
    let qc = xa * xa + ya * ya - r1 * r1;
    let r = match qa.abs() > 1e-6 {
        true => -(qb + (qb * qb - 4.0 * qa * qc).sqrt()) / (2.0 * qa),
        false => -qc / qb,
    };

    let center = Point(x1 + xa + xb * r, y1 + ya + yb * r);
    match center.is_finite() && r.is_finite() && r >= 0.0 {
        true => Some(Circle { center, radius: r }),
        false => None,
    }
}
