//! Color and style names from configuration files mapped onto egui types.

use egui::Color32;
use egui_plot::{LineStyle, MarkerShape};
use pc_chart::colors::parse_rgb;

/// Parse a `#rrggbb` string or a common color name; unknown names fall back to `fallback`.
pub fn parse_color(name: &str, fallback: Color32) -> Color32 {
    parse_rgb(name)
        .map(|[r, g, b]| Color32::from_rgb(r, g, b))
        .unwrap_or(fallback)
}

/// matplotlib-style line specifiers (`-`, `--`, `:`, `-.`).
pub fn line_style(spec: &str) -> LineStyle {
    match spec {
        "--" | "dashed" => LineStyle::Dashed { length: 8.0 },
        ":" | "dotted" => LineStyle::Dotted { spacing: 4.0 },
        "-." | "dashdot" => LineStyle::Dashed { length: 4.0 },
        _ => LineStyle::Solid,
    }
}

/// matplotlib-style marker specifiers.
pub fn marker_shape(spec: &str) -> MarkerShape {
    match spec {
        "s" => MarkerShape::Square,
        "D" | "d" => MarkerShape::Diamond,
        "^" => MarkerShape::Up,
        "v" => MarkerShape::Down,
        "<" => MarkerShape::Left,
        ">" => MarkerShape::Right,
        "x" => MarkerShape::Cross,
        "+" => MarkerShape::Plus,
        "*" => MarkerShape::Asterisk,
        _ => MarkerShape::Circle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        assert_eq!(
            parse_color("#440154", Color32::RED),
            Color32::from_rgb(0x44, 0x01, 0x54)
        );
        assert_eq!(parse_color("#44015", Color32::RED), Color32::RED);
        assert_eq!(parse_color("#zz0000", Color32::RED), Color32::RED);
    }

    #[test]
    fn named_colors() {
        assert_eq!(parse_color("k", Color32::RED), Color32::BLACK);
        assert_eq!(parse_color("gray", Color32::RED), Color32::from_rgb(0x80, 0x80, 0x80));
        assert_eq!(parse_color("Black", Color32::RED), Color32::BLACK);
        assert_eq!(parse_color("chartreuse", Color32::RED), Color32::RED);
    }

    #[test]
    fn styles_and_markers() {
        assert!(matches!(line_style("-"), LineStyle::Solid));
        assert!(matches!(line_style("--"), LineStyle::Dashed { .. }));
        assert!(matches!(marker_shape("s"), MarkerShape::Square));
        assert!(matches!(marker_shape("o"), MarkerShape::Circle));
    }
}
