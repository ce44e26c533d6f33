use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the FFDH front-end
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct FFDHConfig {
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for FFDHConfig {
    fn default() -> Self {
        Self {
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
