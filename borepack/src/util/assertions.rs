use itertools::Itertools;
use log::error;

use crate::entities::PackingResult;
use crate::util::FPA;

//Various checks to verify correctness of packing results
//Used in debug_assert!() blocks and tests

/// No two placed circles overlap (beyond the tolerance)
pub fn circles_do_not_overlap(result: &PackingResult) -> bool {
    for ((i, p), (j, q)) in result.circles.iter().enumerate().tuple_combinations() {
        if p.circle().overlaps(&q.circle()) {
            error!("circles {i} and {j} overlap: {p:?} and {q:?}");
            return false;
        }
    }
    true
}

/// Every placed circle lies within the bore
pub fn circles_are_contained(result: &PackingResult) -> bool {
    let bore = result.bore.circle();
    for (i, p) in result.circles.iter().enumerate() {
        if !bore.contains(&p.circle()) {
            error!("circle {i} exceeds bore of radius {}: {p:?}", bore.radius);
            return false;
        }
    }
    true
}

/// Circles are ordered by descending radius
pub fn circles_in_processing_order(result: &PackingResult) -> bool {
    result
        .circles
        .iter()
        .tuple_windows()
        .all(|(p, q)| p.radius() >= q.radius())
}

/// A single circle is centered in a bore of exactly the same radius
pub fn single_circle_is_identity(result: &PackingResult) -> bool {
    match result.circles.as_slice() {
        [single] => {
            single.radius() == result.bore.radius && single.center.norm() == 0.0
        }
        _ => true,
    }
}

pub fn result_is_valid(result: &PackingResult) -> bool {
    circles_do_not_overlap(result)
        && circles_are_contained(result)
        && circles_in_processing_order(result)
        && single_circle_is_identity(result)
}

/// The bore is not larger than the trivial bound: all circles lined up along a diameter
pub fn bore_below_trivial_bound(result: &PackingResult) -> bool {
    let sum_of_diameters: f64 = result.circles.iter().map(|c| c.spec.diameter()).sum();
    FPA(result.bore.radius) <= FPA(sum_of_diameters)
}
