use log::debug;

use crate::entities::{CableCatalog, CableSelection, CircleSpec};

/// Expands the cable selections into one [`CircleSpec`] per physical cable.
///
/// Rows without an effective name or diameter, with a non-positive diameter or with a non-positive
/// quantity are skipped: a single malformed row never fails the whole batch.
/// Circles are appended in row order, then in instance order within the row.
///
/// Allocates one circle per unit of quantity, use [`count_circles`] first to bound the output.
pub fn extract_circles(selections: &[CableSelection], catalog: &CableCatalog) -> Vec<CircleSpec> {
    let mut circles = vec![];
    for (name, diameter, quantity) in valid_rows(selections, catalog) {
        let spec = CircleSpec::from_diameter(name, diameter);
        circles.extend(std::iter::repeat_n(spec, quantity));
    }
    circles
}

/// Number of circles [`extract_circles`] would produce, without allocating them.
/// Saturates at `usize::MAX`.
pub fn count_circles(selections: &[CableSelection], catalog: &CableCatalog) -> usize {
    valid_rows(selections, catalog)
        .fold(0usize, |acc, (_, _, quantity)| acc.saturating_add(quantity))
}

/// Name, diameter and quantity of every row that contributes circles
fn valid_rows<'a>(
    selections: &'a [CableSelection],
    catalog: &'a CableCatalog,
) -> impl Iterator<Item = (&'a str, f64, usize)> + 'a {
    selections.iter().enumerate().filter_map(move |(i, selection)| {
        let Some((name, diameter)) = selection.resolve(catalog) else {
            debug!("[EXTR] skipping row {i}: no valid name or diameter ({selection:?})");
            return None;
        };
        if selection.quantity <= 0 {
            debug!(
                "[EXTR] skipping row {i}: non-positive quantity ({})",
                selection.quantity
            );
            return None;
        }
        let quantity = usize::try_from(selection.quantity).unwrap_or(usize::MAX);
        Some((name, diameter, quantity))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CableKind, CatalogCable};

    fn catalog() -> CableCatalog {
        CableCatalog::new(vec![
            CatalogCable {
                id: 0,
                name: "THHN 10".into(),
                diameter: 0.216,
            },
            CatalogCable {
                id: 1,
                name: "THHN 4".into(),
                diameter: 0.352,
            },
        ])
    }

    #[test]
    fn fans_out_quantities_in_row_order() {
        let selections = [
            CableSelection::catalog(1, 2),
            CableSelection::custom("Fiber", 0.5, 1),
            CableSelection::catalog(0, 3),
        ];
        let circles = extract_circles(&selections, &catalog());
        let names = circles.iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
        assert_eq!(
            names,
            ["THHN 4", "THHN 4", "Fiber", "THHN 10", "THHN 10", "THHN 10"]
        );
        assert_eq!(circles[0].radius, 0.176);
        assert_eq!(circles[2].radius, 0.25);
        assert_eq!(circles[5].radius, 0.108);
    }

    #[test]
    fn malformed_rows_contribute_nothing() {
        let selections = [
            CableSelection::catalog(1, 0),
            CableSelection::catalog(1, -4),
            CableSelection::catalog(42, 2),
            CableSelection::custom("", 1.0, 2),
            CableSelection::custom("Zero", 0.0, 2),
            CableSelection {
                kind: CableKind::Custom {
                    name: None,
                    diameter: Some(1.0),
                },
                quantity: 5,
            },
            CableSelection::custom("Valid", 1.0, 2),
        ];
        let circles = extract_circles(&selections, &catalog());
        assert_eq!(circles.len(), 2);
        assert!(circles.iter().all(|c| c.name == "Valid" && c.radius == 0.5));
    }

    #[test]
    fn count_matches_extraction() {
        let selections = [
            CableSelection::catalog(1, 2),
            CableSelection::catalog(42, 7),
            CableSelection::custom("Fiber", 0.5, 3),
            CableSelection::custom("Ghost", 0.5, -3),
        ];
        let catalog = catalog();
        assert_eq!(count_circles(&selections, &catalog), 5);
        assert_eq!(extract_circles(&selections, &catalog).len(), 5);
    }

    #[test]
    fn count_saturates_on_huge_quantities() {
        let selections = [
            CableSelection::custom("Bulk", 0.1, i64::MAX),
            CableSelection::custom("Bulk", 0.1, i64::MAX),
            CableSelection::custom("Bulk", 0.1, i64::MAX),
        ];
        assert_eq!(count_circles(&selections, &catalog()), usize::MAX);
    }

    #[test]
    fn empty_selection_yields_no_circles() {
        assert!(extract_circles(&[], &catalog()).is_empty());
    }
}
