use itertools::Itertools;
use svg::Document;
use svg::node::element::{Circle, Group, Rectangle, Text, Title};

use crate::entities::PackingResult;
use crate::io::svg::svg_util::{self, SvgDrawOptions};

/// Draws the bore and all placed circles.
/// The y-axis is flipped such that the drawing matches the mathematical orientation of the
/// coordinates.
pub fn result_to_svg(result: &PackingResult, options: SvgDrawOptions, title: &str) -> Document {
    let theme = options.theme.get_theme();
    let bore = &result.bore;

    //square view box around the bore, with a margin
    let half_width = bore.radius * 1.10;
    let legend_height = match options.draw_legend {
        true => bore.radius * 0.12 * (result.counts_per_name().len() as f64 + 1.0),
        false => 0.0,
    };
    let vbox = (
        -half_width,
        -half_width,
        2.0 * half_width,
        2.0 * half_width + legend_height,
    );
    let stroke_width = 2.0 * half_width * 0.001 * theme.stroke_width_multiplier;
    let font_size = bore.radius * 0.05;

    let label = {
        let label_content = format!(
            "bore diameter: {:.3} | circles: {} | density: {:.3}% | {}",
            bore.diameter(),
            result.circles.len(),
            result.density() * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", -half_width)
            .set("y", -half_width + font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let bore_group = Group::new().set("id", "bore").add(
        Circle::new()
            .set("cx", 0.0)
            .set("cy", 0.0)
            .set("r", bore.radius)
            .set("fill", theme.bore_fill)
            .set("fill-opacity", "0.5")
            .set("stroke", theme.bore_stroke)
            .set("stroke-width", 2.0 * stroke_width)
            .add(Title::new(format!(
                "bore, radius: {:.4}, diameter: {:.4}",
                bore.radius,
                bore.diameter()
            ))),
    );

    let circles_group = result.circles.iter().enumerate().fold(
        Group::new().set("id", "circles"),
        |group, (i, pc)| {
            let fill = pc.color.as_deref().unwrap_or(theme.circle_fill);
            let svg_circle = Circle::new()
                .set("cx", pc.center.0)
                .set("cy", -pc.center.1)
                .set("r", pc.radius())
                .set("fill", fill)
                .set("stroke", svg_util::change_brightness(fill, 0.5))
                .set("stroke-width", stroke_width)
                .add(Title::new(format!(
                    "circle {i}: {}, diameter: {:.4}, center: ({:.4}, {:.4})",
                    pc.name(),
                    pc.spec.diameter(),
                    pc.center.0,
                    pc.center.1
                )));
            let group = group.add(svg_circle);
            match options.draw_labels {
                true => group.add(
                    Text::new(pc.name())
                        .set("x", pc.center.0)
                        .set("y", -pc.center.1)
                        .set("font-size", pc.radius() * 0.4)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle"),
                ),
                false => group,
            }
        },
    );

    let legend_group = match options.draw_legend {
        false => None,
        true => {
            let row_height = bore.radius * 0.12;
            let x = -half_width + row_height * 0.5;
            let first_y = half_width + row_height * 0.5;
            let names = result
                .circles
                .iter()
                .unique_by(|c| (c.name(), c.radius().to_bits()))
                .collect_vec();
            let legend = names.iter().enumerate().fold(
                Group::new().set("id", "legend"),
                |legend, (i, pc)| {
                    let y = first_y + i as f64 * row_height;
                    let fill = pc.color.as_deref().unwrap_or(theme.circle_fill);
                    let count = result
                        .circles
                        .iter()
                        .filter(|c| c.name() == pc.name() && c.radius() == pc.radius())
                        .count();
                    legend
                        .add(
                            Rectangle::new()
                                .set("x", x)
                                .set("y", y)
                                .set("width", row_height * 0.6)
                                .set("height", row_height * 0.6)
                                .set("fill", fill)
                                .set("stroke", "black")
                                .set("stroke-width", stroke_width),
                        )
                        .add(
                            Text::new(format!(
                                "{count} x {} (d = {:.3})",
                                pc.name(),
                                pc.spec.diameter()
                            ))
                            .set("x", x + row_height)
                            .set("y", y + row_height * 0.5)
                            .set("font-size", row_height * 0.5)
                            .set("font-family", "monospace"),
                        )
                },
            );
            Some(legend)
        }
    };

    let document = Document::new()
        .set("viewBox", vbox)
        .add(bore_group)
        .add(circles_group)
        .add(label);

    match legend_group {
        Some(legend) => document.add(legend),
        None => document,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Bore, CircleSpec, PlacedCircle};
    use crate::geometry::primitives::Point;

    #[test]
    fn draws_bore_and_every_circle() {
        let result = PackingResult {
            bore: Bore::new(1.0),
            circles: vec![
                PlacedCircle::new(CircleSpec::new("Cat6", 0.5), Point(-0.5, 0.0)),
                PlacedCircle::new(CircleSpec::new("RG6", 0.5), Point(0.5, 0.0)),
            ],
        }
        .with_colors();

        let options = SvgDrawOptions {
            draw_labels: true,
            ..SvgDrawOptions::default()
        };
        let svg = result_to_svg(&result, options, "two cables").to_string();
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains("two cables"));
        assert!(svg.contains("1 x Cat6"));
        assert!(svg.contains(crate::color::PALETTE[1]));
    }
}
