use std::collections::HashMap;

use crate::entities::PlacedCircle;

/// Ordered palette from which the cable types receive their colors
pub const PALETTE: [&str; 12] = [
    "#1F77B4", //BLUE
    "#FF7F0E", //ORANGE
    "#2CA02C", //GREEN
    "#D62728", //RED
    "#9467BD", //PURPLE
    "#8C564B", //BROWN
    "#E377C2", //PINK
    "#7F7F7F", //GRAY
    "#BCBD22", //OLIVE
    "#17BECF", //CYAN
    "#FFC879", //SAND
    "#2D2D2D", //CHARCOAL
];

/// Returns the circles with their visualization color set, in the same order.
///
/// Circles sharing the exact same name and radius belong to the same cable type and receive the
/// same color.
/// Cable types are colored in order of first appearance, cycling through the [`PALETTE`] when it
/// runs out.
pub fn assign(circles: &[PlacedCircle]) -> Vec<PlacedCircle> {
    let mut groups: HashMap<(&str, u64), &str> = HashMap::new();
    circles
        .iter()
        .map(|c| {
            let n_groups = groups.len();
            let color = *groups
                .entry((c.name(), c.radius().to_bits()))
                .or_insert(PALETTE[n_groups % PALETTE.len()]);
            PlacedCircle {
                color: Some(color.to_owned()),
                ..c.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::CircleSpec;
    use crate::geometry::primitives::Point;

    fn placed(name: &str, radius: f64) -> PlacedCircle {
        PlacedCircle::new(CircleSpec::new(name, radius), Point::ORIGIN)
    }

    #[test]
    fn same_signature_same_color() {
        let circles = [
            placed("Cat6", 0.125),
            placed("RG6", 0.135),
            placed("Cat6", 0.125),
            placed("Cat6", 0.2),
        ];
        let colored = assign(&circles);
        let colors = colored.iter().map(|c| c.color.as_deref().unwrap()).collect::<Vec<_>>();
        assert_eq!(colors, [PALETTE[0], PALETTE[1], PALETTE[0], PALETTE[2]]);
        //positions and specs are untouched
        assert!(
            colored
                .iter()
                .zip(&circles)
                .all(|(a, b)| a.spec == b.spec && a.center == b.center)
        );
    }

    #[test]
    fn palette_cycles() {
        let circles = (0..PALETTE.len() + 2)
            .map(|i| placed(&format!("type {i}"), 1.0))
            .collect::<Vec<_>>();
        let colored = assign(&circles);
        assert_eq!(colored[PALETTE.len()].color.as_deref(), Some(PALETTE[0]));
        assert_eq!(colored[PALETTE.len() + 1].color.as_deref(), Some(PALETTE[1]));
    }

    #[test]
    fn assignment_is_stable() {
        let circles = [placed("a", 1.0), placed("b", 0.5), placed("a", 1.0)];
        assert_eq!(assign(&circles), assign(&circles));
        assert!(assign(&[]).is_empty());
    }
}
