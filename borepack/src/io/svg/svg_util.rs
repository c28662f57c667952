use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgLayoutThemes,
    /// Draws the name of the cable type inside every circle
    #[serde(default)]
    pub draw_labels: bool,
    /// Draws a legend with the color of every cable type
    #[serde(default = "default_true")]
    pub draw_legend: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutThemes::default(),
            draw_labels: false,
            draw_legend: true,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub enum SvgLayoutThemes {
    #[default]
    EarthTones,
    Gray,
}

impl SvgLayoutThemes {
    pub fn get_theme(&self) -> SvgLayoutTheme {
        match self {
            SvgLayoutThemes::EarthTones => SvgLayoutTheme::EARTH_TONES,
            SvgLayoutThemes::Gray => SvgLayoutTheme::GRAY,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub bore_fill: &'static str,
    pub bore_stroke: &'static str,
    /// Fill of circles without an assigned color
    pub circle_fill: &'static str,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        bore_fill: "#CC824A",
        bore_stroke: "#2D2D2D",
        circle_fill: "#FFC879",
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        bore_fill: "#C3C3C3",
        bore_stroke: "#000000",
        circle_fill: "#8F8F8F",
    };
}

/// Scales the brightness of a `#RRGGBB` color by `fraction`.
/// Colors which cannot be parsed are returned unchanged.
pub fn change_brightness(color: &str, fraction: f64) -> String {
    let hex = color.trim_start_matches('#');
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
    };
    match (hex.len(), channel(0), channel(2), channel(4)) {
        (6, Some(r), Some(g), Some(b)) => {
            let scale = |c: u8| (c as f64 * fraction).clamp(0.0, 255.0) as u8;
            format!("#{:02X}{:02X}{:02X}", scale(r), scale(g), scale(b))
        }
        _ => color.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_is_scaled() {
        assert_eq!(change_brightness("#FF8000", 0.5), "#7F4000");
        assert_eq!(change_brightness("204060", 2.0), "#4080C0");
        assert_eq!(change_brightness("#FFFFFF", 2.0), "#FFFFFF");
        assert_eq!(change_brightness("black", 0.5), "black");
    }
}
