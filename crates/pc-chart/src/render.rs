//! Chart images drawn with plotters.
//!
//! The figure is 12 × 7 inches at the geometry's `dpi`. Font sizes, margins
//! and line widths are given in points and scaled the same way, so a higher
//! `dpi` gives a sharper image of the same chart. Text uses the Ubuntu face
//! bundled with egui, which keeps rendering independent of system fonts.

use std::path::Path;
use std::sync::OnceLock;

use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::{FontStyle, register_font};

use crate::colors::parse_rgb;
use crate::geometry::{ChartGeometry, Curve, PointMarker, ZonePolygon};
use crate::store::{ensure_parent_dir, save_geometry};
use crate::{ChartError, ChartResult};

/// Figure size [in], as (width, height).
pub const FIGURE_INCHES: (f64, f64) = (12.0, 7.0);

const FONT_FAMILY: &str = "sans-serif";
const ZONE_FILL_ALPHA: f64 = 0.2;
const T_AXIS_LABEL: &str = "Dry-bulb temperature (°C)";
const W_AXIS_LABEL: &str = "Humidity ratio (kg vapor / kg dry air)";

type Plane<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Output format chosen from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Png,
    Svg,
}

impl OutputFormat {
    /// `.png` and `.svg` (any case) are images; everything else is geometry JSON.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("png") => Self::Png,
            Some("svg") => Self::Svg,
            _ => Self::Json,
        }
    }
}

/// Figure size in pixels at `dpi`.
pub fn figure_size(dpi: u32) -> (u32, u32) {
    let px = |inches: f64| (inches * f64::from(dpi)).round() as u32;
    (px(FIGURE_INCHES.0), px(FIGURE_INCHES.1))
}

/// Colors for one matplotlib style name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: [u8; 3],
    pub foreground: [u8; 3],
    pub grid: [u8; 3],
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        background: [0xff, 0xff, 0xff],
        foreground: [0x00, 0x00, 0x00],
        grid: [0xb0, 0xb0, 0xb0],
    };

    /// Theme for a `chart.style` value. Unknown names fall back to [`Theme::LIGHT`].
    pub fn from_style(style: Option<&str>) -> Self {
        let Some(style) = style else {
            return Self::LIGHT;
        };
        match style.to_ascii_lowercase().as_str() {
            "default" | "classic" | "grayscale" => Self::LIGHT,
            "ggplot" => Theme {
                background: [0xe5, 0xe5, 0xe5],
                foreground: [0x55, 0x55, 0x55],
                grid: [0xff, 0xff, 0xff],
            },
            "bmh" => Theme {
                background: [0xee, 0xee, 0xee],
                foreground: [0x33, 0x33, 0x33],
                grid: [0xb2, 0xb2, 0xb2],
            },
            "dark_background" => Theme {
                background: [0x00, 0x00, 0x00],
                foreground: [0xff, 0xff, 0xff],
                grid: [0x55, 0x55, 0x55],
            },
            s if s.starts_with("seaborn") => Theme {
                background: [0xea, 0xea, 0xf2],
                foreground: [0x26, 0x26, 0x26],
                grid: [0xff, 0xff, 0xff],
            },
            other => {
                tracing::warn!(style = other, "unknown chart style, using the default theme");
                Self::LIGHT
            }
        }
    }
}

/// Point-to-pixel conversion at a given dpi.
#[derive(Debug, Clone, Copy)]
struct Scale {
    dpi: f64,
}

impl Scale {
    fn px(self, points: f64) -> u32 {
        (points * self.dpi / 72.0).round().max(1.0) as u32
    }
}

/// Write `geometry` in the format named by the extension of `path`.
pub fn save_chart(path: &Path, geometry: &ChartGeometry) -> ChartResult<()> {
    match OutputFormat::from_path(path) {
        OutputFormat::Json => save_geometry(path, geometry),
        OutputFormat::Png => render_png(path, geometry),
        OutputFormat::Svg => render_svg(path, geometry),
    }
}

pub fn render_png(path: &Path, geometry: &ChartGeometry) -> ChartResult<()> {
    ensure_parent_dir(path)?;
    ensure_font()?;
    let size = figure_size(geometry.dpi);
    let root = BitMapBackend::new(path, size).into_drawing_area();
    draw_chart(&root, geometry)?;
    root.present().map_err(render_error)?;
    tracing::debug!(path = %path.display(), width = size.0, height = size.1, "chart image saved");
    Ok(())
}

pub fn render_svg(path: &Path, geometry: &ChartGeometry) -> ChartResult<()> {
    ensure_parent_dir(path)?;
    ensure_font()?;
    let size = figure_size(geometry.dpi);
    let root = SVGBackend::new(path, size).into_drawing_area();
    draw_chart(&root, geometry)?;
    root.present().map_err(render_error)?;
    tracing::debug!(path = %path.display(), width = size.0, height = size.1, "chart image saved");
    Ok(())
}

fn ensure_font() -> ChartResult<()> {
    static FONT: OnceLock<Result<(), String>> = OnceLock::new();
    FONT.get_or_init(|| {
        register_font(
            FONT_FAMILY,
            FontStyle::Normal,
            epaint_default_fonts::UBUNTU_LIGHT,
        )
        .map_err(|_| "invalid font data".to_string())
    })
    .clone()
    .map_err(ChartError::Render)
}

fn render_error<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Render(err.to_string())
}

fn rgb([r, g, b]: [u8; 3]) -> RGBColor {
    RGBColor(r, g, b)
}

fn color_or(name: &str, fallback: RGBColor) -> RGBColor {
    parse_rgb(name).map(rgb).unwrap_or(fallback)
}

fn text_style(points: u32, color: RGBColor) -> TextStyle<'static> {
    (FONT_FAMILY, f64::from(points)).into_font().color(&color)
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    geometry: &ChartGeometry,
) -> ChartResult<()> {
    let theme = Theme::from_style(geometry.style.as_deref());
    let scale = Scale {
        dpi: f64::from(geometry.dpi),
    };
    let background = rgb(theme.background);
    let foreground = rgb(theme.foreground);

    root.fill(&background).map_err(render_error)?;

    let [t0, t1] = geometry.t_axis;
    let [w0, w1] = geometry.w_axis;
    let mut chart = ChartBuilder::on(root)
        .caption(&geometry.title, text_style(scale.px(14.0), foreground))
        .margin(scale.px(10.0))
        .x_label_area_size(scale.px(36.0))
        .y_label_area_size(scale.px(60.0))
        .right_y_label_area_size(scale.px(60.0))
        .build_cartesian_2d(t0..t1, w0..w1)
        .map_err(render_error)?
        .set_secondary_coord(t0..t1, w0..w1);

    chart
        .configure_mesh()
        .x_desc(T_AXIS_LABEL)
        .y_desc(W_AXIS_LABEL)
        .label_style(text_style(scale.px(9.0), foreground))
        .axis_desc_style(text_style(scale.px(10.0), foreground))
        .axis_style(foreground.stroke_width(1))
        .bold_line_style(rgb(theme.grid).stroke_width(1))
        .light_line_style(TRANSPARENT.stroke_width(1))
        .y_label_formatter(&|w| format!("{w:.3}"))
        .draw()
        .map_err(render_error)?;

    chart
        .configure_secondary_axes()
        .y_desc(W_AXIS_LABEL)
        .label_style(text_style(scale.px(9.0), foreground))
        .axis_desc_style(text_style(scale.px(10.0), foreground))
        .y_label_formatter(&|w| format!("{w:.3}"))
        .draw()
        .map_err(render_error)?;

    let window = ([t0, t1], [w0, w1]);
    draw_curve(&mut *chart, &geometry.saturation, window, scale, true)?;
    for iso in &geometry.isolines {
        draw_curve(&mut *chart, &iso.curve, window, scale, false)?;
    }
    for zone in &geometry.zones {
        draw_zone(&mut *chart, zone, scale)?;
    }
    for point in &geometry.points {
        draw_point(&mut *chart, point, scale)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(text_style(scale.px(9.0), foreground))
        .background_style(background.mix(0.8).filled())
        .border_style(foreground.stroke_width(1))
        .draw()
        .map_err(render_error)?;

    Ok(())
}

fn draw_curve<DB: DrawingBackend>(
    chart: &mut Plane<'_, DB>,
    curve: &Curve,
    window: ([f64; 2], [f64; 2]),
    scale: Scale,
    in_legend: bool,
) -> ChartResult<()> {
    let style = color_or(&curve.color, BLACK).stroke_width(scale.px(curve.width));
    let runs = dash_runs(&visible_runs(&curve.points, window), &curve.style);

    for (i, run) in runs.into_iter().enumerate() {
        let anno = chart
            .draw_series(std::iter::once(PathElement::new(run, style)))
            .map_err(render_error)?;
        if in_legend && i == 0 {
            let legend_len = scale.px(20.0) as i32;
            anno.label(curve.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_len, y)], style));
        }
    }
    Ok(())
}

fn draw_zone<DB: DrawingBackend>(
    chart: &mut Plane<'_, DB>,
    zone: &ZonePolygon,
    scale: Scale,
) -> ChartResult<()> {
    let outline: Vec<(f64, f64)> = zone.points.iter().map(|&[t, w]| (t, w)).collect();
    let edge = color_or(&zone.edgecolor, BLACK);

    if let Some(face) = zone.facecolor.as_deref() {
        let fill = color_or(face, edge).mix(ZONE_FILL_ALPHA).filled();
        chart
            .draw_series(std::iter::once(Polygon::new(outline.clone(), fill)))
            .map_err(render_error)?;
    }

    let style = edge.stroke_width(scale.px(zone.linewidth));
    let legend_len = scale.px(20.0) as i32;
    chart
        .draw_series(std::iter::once(PathElement::new(outline, style)))
        .map_err(render_error)?
        .label(zone.name.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_len, y)], style));
    Ok(())
}

fn draw_point<DB: DrawingBackend>(
    chart: &mut Plane<'_, DB>,
    point: &PointMarker,
    scale: Scale,
) -> ChartResult<()> {
    let color = color_or(&point.color, BLACK);
    let at = (point.t, point.w);
    let r = scale.px(3.0) as i32;
    let style = color.filled();

    match point.marker.as_str() {
        "s" => chart.draw_series(std::iter::once(
            EmptyElement::at(at) + Rectangle::new([(-r, -r), (r, r)], style),
        )),
        "^" => chart.draw_series(std::iter::once(TriangleMarker::new(at, r, style))),
        "x" | "+" => chart.draw_series(std::iter::once(Cross::new(
            at,
            r,
            color.stroke_width(scale.px(1.0)),
        ))),
        _ => chart.draw_series(std::iter::once(Circle::new(at, r, style))),
    }
    .map_err(render_error)?;

    chart
        .draw_series(std::iter::once(
            EmptyElement::at(at)
                + Text::new(
                    format!(" {}", point.label),
                    (r, -(scale.px(4.5) as i32)),
                    text_style(scale.px(9.0), color),
                ),
        ))
        .map_err(render_error)?;
    Ok(())
}

/// Split a polyline into the runs that lie inside the axis window.
fn visible_runs(points: &[[f64; 2]], window: ([f64; 2], [f64; 2])) -> Vec<Vec<(f64, f64)>> {
    let ([t0, t1], [w0, w1]) = window;
    let inside = |t: f64, w: f64| t >= t0 && t <= t1 && w >= w0 && w <= w1;

    let mut runs = Vec::new();
    let mut current = Vec::new();
    for &[t, w] in points {
        if inside(t, w) {
            current.push((t, w));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// On/off pattern, in samples, for a matplotlib line specifier.
fn dash_pattern(spec: &str) -> Option<&'static [usize]> {
    match spec {
        "--" | "dashed" => Some(&[6, 4]),
        ":" | "dotted" => Some(&[1, 2]),
        "-." | "dashdot" => Some(&[6, 3, 1, 3]),
        _ => None,
    }
}

/// Break runs into dash segments; solid lines pass through unchanged.
fn dash_runs(runs: &[Vec<(f64, f64)>], spec: &str) -> Vec<Vec<(f64, f64)>> {
    let Some(pattern) = dash_pattern(spec) else {
        return runs.to_vec();
    };

    let mut dashes = Vec::new();
    for run in runs {
        let mut start = 0;
        let mut k = 0;
        while start + 1 < run.len() {
            let len = pattern[k % pattern.len()];
            if k % 2 == 0 {
                let end = (start + len).min(run.len() - 1);
                dashes.push(run[start..=end].to_vec());
            }
            start += len;
            k += 1;
        }
    }
    dashes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a/chart.png")), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("chart.SVG")), OutputFormat::Svg);
        assert_eq!(OutputFormat::from_path(Path::new("chart.json")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path(Path::new("chart")), OutputFormat::Json);
    }

    #[test]
    fn figure_scales_with_dpi() {
        assert_eq!(figure_size(150), (1800, 1050));
        assert_eq!(figure_size(100), (1200, 700));
    }

    #[test]
    fn style_names_pick_themes() {
        assert_eq!(Theme::from_style(None), Theme::LIGHT);
        assert_eq!(Theme::from_style(Some("classic")), Theme::LIGHT);
        assert_eq!(
            Theme::from_style(Some("dark_background")).background,
            [0, 0, 0]
        );
        assert_eq!(
            Theme::from_style(Some("seaborn-v0_8")).background,
            [0xea, 0xea, 0xf2]
        );
        assert_eq!(Theme::from_style(Some("no-such-style")), Theme::LIGHT);
    }

    #[test]
    fn runs_break_outside_window() {
        let points = [[0.0, 0.01], [1.0, 0.02], [2.0, 0.05], [3.0, 0.02], [4.0, 0.01]];
        let runs = visible_runs(&points, ([0.0, 4.0], [0.0, 0.03]));
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![(0.0, 0.01), (1.0, 0.02)]);
        assert_eq!(runs[1], vec![(3.0, 0.02), (4.0, 0.01)]);
    }

    #[test]
    fn dashed_lines_split_into_segments() {
        let run: Vec<(f64, f64)> = (0..100).map(|i| (i as f64, 0.01)).collect();
        let runs = vec![run];

        assert_eq!(dash_runs(&runs, "-"), runs);

        let dashes = dash_runs(&runs, "--");
        assert_eq!(dashes.len(), 10);
        assert!(dashes.iter().all(|d| d.len() >= 2 && d.len() <= 7));
        assert_eq!(dashes[0].first(), Some(&(0.0, 0.01)));
        assert_eq!(dashes[1].first(), Some(&(10.0, 0.01)));
    }

    #[test]
    fn point_sizes_scale_with_dpi() {
        assert_eq!(Scale { dpi: 72.0 }.px(10.0), 10);
        assert_eq!(Scale { dpi: 144.0 }.px(10.0), 20);
        assert_eq!(Scale { dpi: 10.0 }.px(0.5), 1);
    }
}
