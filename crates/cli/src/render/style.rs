//! Styling records the decoder parses straight off the wire and the
//! renderer consumes unchanged.

use serde::Deserialize;
use std::fmt;

/// A paint color, accepted on the wire as a bare string, an `[r,g,b]`
/// triple, or an `[r,g,b,a]` quad. Modeled as a sum type rather than three
/// optional fields, matching this codebase's general preference for tagged
/// enums over nullable-field structs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => write!(f, "{name}"),
            Color::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({r},{g},{b},{a})"),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Offset(pub f64, pub f64);

/// Canvas and styling parameters for the map renderer, deserialized
/// verbatim from the input document's `render_settings` object.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub stop_radius: f64,
    pub line_width: f64,
    pub bus_label_font_size: f64,
    pub bus_label_offset: Offset,
    pub stop_label_font_size: f64,
    pub stop_label_offset: Offset,
    pub underlayer_color: Color,
    pub underlayer_width: f64,
    pub color_palette: Vec<Color>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parses_all_three_shapes() {
        let named: Color = serde_json::from_str("\"green\"").unwrap();
        assert_eq!(named, Color::Named("green".into()));
        let rgb: Color = serde_json::from_str("[255, 160, 0]").unwrap();
        assert_eq!(rgb, Color::Rgb(255, 160, 0));
        let rgba: Color = serde_json::from_str("[255, 160, 0, 0.5]").unwrap();
        assert_eq!(rgba, Color::Rgba(255, 160, 0, 0.5));
    }

    #[test]
    fn color_display_matches_svg_paint_syntax() {
        assert_eq!(Color::Named("white".into()).to_string(), "white");
        assert_eq!(Color::Rgb(1, 2, 3).to_string(), "rgb(1,2,3)");
        assert_eq!(Color::Rgba(1, 2, 3, 0.4).to_string(), "rgba(1,2,3,0.4)");
    }
}
