//! Isoline families evaluated on the chart's temperature grid.

use crate::colormap;
use crate::geometry::{Curve, Isoline};
use pc_project::{IsoSetDef, IsolineKind};
use pc_psychro::{
    humidity_ratio, humidity_ratio_from_enthalpy, humidity_ratio_from_specific_volume,
    saturation_humidity_ratio, wet_bulb_line,
};

/// Isoline stroke width.
const LINE_WIDTH: f64 = 0.8;

/// Dry-bulb samples shared by every isoline, with the saturation bound at each.
#[derive(Debug, Clone)]
pub struct TemperatureGrid {
    pub t: Vec<f64>,
    pub w_sat: Vec<f64>,
    pub pressure: f64,
}

impl TemperatureGrid {
    pub fn new(t: Vec<f64>, pressure: f64) -> Self {
        let w_sat = t
            .iter()
            .map(|&t| saturation_humidity_ratio(t, pressure))
            .collect();
        Self { t, w_sat, pressure }
    }

    /// Samples of the saturation curve that evaluate to a finite humidity ratio.
    pub fn saturation_points(&self) -> Vec<[f64; 2]> {
        self.t
            .iter()
            .zip(&self.w_sat)
            .filter(|(_, w)| w.is_finite() && **w >= 0.0)
            .map(|(&t, &w)| [t, w])
            .collect()
    }
}

/// Humidity ratio of the `kind` isoline through `value`, at dry-bulb `t`.
pub fn isoline_w(kind: IsolineKind, value: f64, t: f64, p: f64) -> f64 {
    match kind {
        IsolineKind::RelativeHumidity => humidity_ratio(t, value, p),
        IsolineKind::WetBulb => wet_bulb_line(t, value, p),
        IsolineKind::Enthalpy => humidity_ratio_from_enthalpy(t, value),
        IsolineKind::SpecificVolume => humidity_ratio_from_specific_volume(t, value, p),
        IsolineKind::MoistureQuantity => value,
        IsolineKind::DewPoint => saturation_humidity_ratio(value, p),
    }
}

/// Whether a sample belongs on the chart for this family.
///
/// Non-finite values and anything above saturation never do. Families that
/// cross the saturation curve drop the sample that touches it too.
pub fn keep_sample(kind: IsolineKind, w: f64, w_sat: f64) -> bool {
    if !w.is_finite() || !w_sat.is_finite() {
        return false;
    }
    match kind {
        IsolineKind::RelativeHumidity | IsolineKind::MoistureQuantity | IsolineKind::DewPoint => {
            w >= 0.0 && w <= w_sat
        }
        IsolineKind::WetBulb => w >= 0.0 && w < w_sat,
        IsolineKind::Enthalpy | IsolineKind::SpecificVolume => w > 0.0 && w < w_sat,
    }
}

/// Every curve of one isoline set; values whose curve is masked out entirely are skipped.
pub fn family_isolines(kind: IsolineKind, set: &IsoSetDef, grid: &TemperatureGrid) -> Vec<Isoline> {
    let cmap = set.cmap.as_deref().filter(|name| {
        let known = colormap::is_known(name);
        if !known {
            tracing::warn!(cmap = *name, family = %kind, "unknown color map, using plain color");
        }
        known
    });

    let mut isolines = Vec::with_capacity(set.values.len());
    for &value in &set.values {
        let points: Vec<[f64; 2]> = grid
            .t
            .iter()
            .zip(&grid.w_sat)
            .filter_map(|(&t, &w_sat)| {
                let w = isoline_w(kind, value, t, grid.pressure);
                keep_sample(kind, w, w_sat).then_some([t, w])
            })
            .collect();

        if points.is_empty() {
            tracing::warn!(family = %kind, value, "isoline lies outside the chart, skipped");
            continue;
        }

        isolines.push(Isoline {
            family: kind,
            value,
            curve: Curve {
                label: label(kind, value),
                style: set.style.clone(),
                color: color(kind, set, cmap, value),
                width: LINE_WIDTH,
                points,
            },
        });
    }
    isolines
}

fn label(kind: IsolineKind, value: f64) -> String {
    match kind {
        IsolineKind::RelativeHumidity => format!("{} % RH", percent(value)),
        IsolineKind::WetBulb => format!("Twb {value} {}", kind.unit()),
        IsolineKind::DewPoint => format!("Tdp {value} {}", kind.unit()),
        _ => format!("{value} {}", kind.unit()),
    }
}

/// Fraction as a percentage rounded to 0.1, so 0.55 reads `55` and not `55.00000000000001`.
fn percent(fraction: f64) -> f64 {
    (fraction * 1000.0).round() / 10.0
}

fn color(kind: IsolineKind, set: &IsoSetDef, cmap: Option<&str>, value: f64) -> String {
    if kind == IsolineKind::RelativeHumidity
        && let Some(color) = cmap.and_then(|name| colormap::sample(name, value))
    {
        return color;
    }
    set.color
        .clone()
        .unwrap_or_else(|| kind.default_color().to_string())
}
