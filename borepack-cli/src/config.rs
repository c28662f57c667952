use borepack::io::svg::SvgDrawOptions;
use borepack::util::PackConfig;
use serde::{Deserialize, Serialize};

/// Configuration of the command line interface
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct BoreCliConfig {
    /// Configuration of the bore search
    #[serde(default)]
    pub pack_config: PackConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for BoreCliConfig {
    fn default() -> Self {
        Self {
            pack_config: PackConfig::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
