use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgLayoutThemes,
    /// Draws the derived waste regions
    #[serde(default = "default_true")]
    pub draw_waste: bool,
    /// Waste rects with a width or height (in internal units) below this are
    /// not drawn. Display concern only; they remain in the solution file.
    #[serde(default = "default_min_visible_waste")]
    pub min_visible_waste: f32,
}

fn default_true() -> bool {
    true
}

fn default_min_visible_waste() -> f32 {
    1.0
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutThemes::default(),
            draw_waste: true,
            min_visible_waste: default_min_visible_waste(),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub enum SvgLayoutThemes {
    #[default]
    EarthTones,
    Gray,
}

impl SvgLayoutThemes {
    pub fn get_theme(&self) -> SvgLayoutTheme {
        match self {
            SvgLayoutThemes::EarthTones => EARTH_TONES_THEME,
            SvgLayoutThemes::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub sheet_fill: &'static str,
    pub part_fill: &'static str,
    pub waste_fill: &'static str,
    pub waste_stroke_opac: f32,
}

pub static EARTH_TONES_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.0,
    sheet_fill: "#CC824A",
    part_fill: "#FFC879",
    waste_fill: "#2D2D2D",
    waste_stroke_opac: 0.5,
};

pub static GRAY_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.5,
    sheet_fill: "#C3C3C3",
    part_fill: "#8F8F8F",
    waste_fill: "#FFFFFF",
    waste_stroke_opac: 0.9,
};

pub fn change_brightness(color: &str, fraction: f32) -> String {
    let mut color = color.to_string();
    if color.starts_with('#') {
        color.remove(0);
    }
    let mut r = u8::from_str_radix(&color[0..2], 16).unwrap();
    let mut g = u8::from_str_radix(&color[2..4], 16).unwrap();
    let mut b = u8::from_str_radix(&color[4..6], 16).unwrap();
    r = (r as f32 * fraction) as u8;
    g = (g as f32 * fraction) as u8;
    b = (b as f32 * fraction) as u8;
    format!("#{r:02X}{g:02X}{b:02X}")
}
