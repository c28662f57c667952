use std::cmp::Reverse;

use itertools::Itertools;
use log::{debug, trace};
use ordered_float::OrderedFloat;

use crate::entities::{Bore, CableCatalog, CableSelection, CircleSpec, PackingResult, PlacedCircle};
use crate::error::PackError;
use crate::extract::{count_circles, extract_circles};
use crate::geometry::primitives::Point;
use crate::placement;
use crate::util::PackConfig;
use crate::util::assertions;

/// Searches the smallest trial bore radius in which all `circles` can be placed.
///
/// A single circle is simply centered in a bore of the same radius.
/// Otherwise, the circles are sorted by descending radius and trial radii on a fixed grid of
/// `bore_increment` multiples are attempted, starting from the first grid radius at or above
/// `min_bound`, until the [placement] succeeds.
/// `min_bound` is derived from the total circle area and the configured packing density.
///
/// The grid does not depend on the circles, so appending a circle which is not larger than any of
/// the others never yields a smaller bore: the placement of the others is unchanged.
///
/// The circles of the result are in processing order (descending radius, ties in input order).
/// Fails if `circles` is empty, if a radius is not a positive number or if none of the first
/// `max_attempts` trial radii admits a placement.
pub fn pack(circles: &[CircleSpec], config: &PackConfig) -> Result<PackingResult, PackError> {
    debug_assert!(config.validate().is_ok(), "invalid config: {config:?}");

    if let Some((index, c)) = circles
        .iter()
        .find_position(|c| !(c.radius.is_finite() && c.radius > 0.0))
    {
        return Err(PackError::InvalidRadius {
            index,
            name: c.name.clone(),
            radius: c.radius,
        });
    }

    let result = match circles {
        [] => return Err(PackError::NoValidCables),
        [single] => PackingResult {
            bore: Bore::new(single.radius),
            circles: vec![PlacedCircle::new(single.clone(), Point::ORIGIN)],
        },
        _ => {
            let sorted = processing_order(circles);
            let min_bound = min_bound(&sorted, config.packing_density);
            let first_step = first_grid_step(min_bound, config.bore_increment);
            let trial_radius = |k: usize| (first_step + k as f64) * config.bore_increment;
            debug!(
                "[SEARCH] packing {} circles, lower bound on bore radius: {min_bound:.4}",
                sorted.len()
            );

            let found = (0..config.max_attempts).find_map(|k| {
                let trial_radius = trial_radius(k);
                trace!("[SEARCH] attempt {k}: trial radius {trial_radius:.4}");
                placement::attempt(&sorted, trial_radius).map(|placed| {
                    debug!("[SEARCH] all circles placed at radius {trial_radius:.4} (attempt {k})");
                    PackingResult {
                        bore: Bore::new(trial_radius),
                        circles: placed,
                    }
                })
            });
            match found {
                Some(result) => result,
                None => {
                    return Err(PackError::SearchExhausted {
                        attempts: config.max_attempts,
                        last_radius: trial_radius(config.max_attempts.saturating_sub(1)),
                    });
                }
            }
        }
    };

    debug_assert!(assertions::result_is_valid(&result));

    Ok(result)
}

/// Full pipeline from cable selections to a colored packing result.
///
/// The number of circles is checked against the configured maximum before any circle is created,
/// then the selections are expanded into circles (malformed rows are skipped), the bore is searched
/// and finally every cable type receives its color.
pub fn pack_cables(
    selections: &[CableSelection],
    catalog: &CableCatalog,
    config: &PackConfig,
) -> Result<PackingResult, PackError> {
    match count_circles(selections, catalog) {
        0 => Err(PackError::NoValidCables),
        count if count > config.max_circles => Err(PackError::TooManyCircles {
            count,
            max: config.max_circles,
        }),
        _ => {
            let circles = extract_circles(selections, catalog);
            Ok(pack(&circles, config)?.with_colors())
        }
    }
}

/// Sorts the circles by descending radius, ties are kept in their original order
pub fn processing_order(circles: &[CircleSpec]) -> Vec<CircleSpec> {
    circles
        .iter()
        .enumerate()
        .sorted_by_cached_key(|(i, c)| (Reverse(OrderedFloat(c.radius)), *i))
        .map(|(_, c)| c.clone())
        .collect_vec()
}

/// Lower bound on the bore radius: the radius of a bore whose area, filled at `packing_density`,
/// equals the total area of the circles.
pub fn min_bound(circles: &[CircleSpec], packing_density: f64) -> f64 {
    let sq_radii: f64 = circles.iter().map(|c| c.radius * c.radius).sum();
    (sq_radii / packing_density).sqrt()
}

/// Index of the first multiple of `bore_increment` at or above `min_bound`
fn first_grid_step(min_bound: f64, bore_increment: f64) -> f64 {
    let step = (min_bound / bore_increment).ceil();
    //guard against the division rounding up past an exact multiple
    match (step - 1.0) * bore_increment >= min_bound {
        true => step - 1.0,
        false => step,
    }
}
