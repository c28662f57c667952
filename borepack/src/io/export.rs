use itertools::Itertools;

use crate::entities::{PackingResult, PlacedCircle};
use crate::io::ext_repr::{ExtBore, ExtPackingResult, ExtPlacedCircle};

/// Exports a packing result out of the library
pub fn export(result: &PackingResult) -> ExtPackingResult {
    ExtPackingResult {
        bore: ExtBore {
            radius: result.bore.radius,
            diameter: result.bore.diameter(),
        },
        circles: result.circles.iter().map(export_placed_circle).collect_vec(),
        density: result.density(),
    }
}

pub fn export_placed_circle(circle: &PlacedCircle) -> ExtPlacedCircle {
    ExtPlacedCircle {
        name: circle.name().to_owned(),
        radius: circle.radius(),
        x: circle.center.0,
        y: circle.center.1,
        color: circle.color.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Bore, CircleSpec};
    use crate::geometry::primitives::Point;

    #[test]
    fn exports_bore_and_circles() {
        let result = PackingResult {
            bore: Bore::new(1.0),
            circles: vec![
                PlacedCircle::new(CircleSpec::new("a", 0.5), Point(-0.5, 0.0)),
                PlacedCircle::new(CircleSpec::new("a", 0.5), Point(0.5, 0.0)),
            ],
        }
        .with_colors();

        let ext = export(&result);
        assert_eq!(ext.bore.diameter, 2.0);
        assert_eq!(ext.circles.len(), 2);
        assert_eq!(ext.circles[1].x, 0.5);
        assert_eq!(ext.circles[0].color, ext.circles[1].color);
        assert!((ext.density - 0.5).abs() < 1e-12);

        let json = serde_json::to_value(&ext).unwrap();
        assert_eq!(json["bore"]["radius"], 1.0);
        assert_eq!(json["circles"][0]["name"], "a");
    }
}
