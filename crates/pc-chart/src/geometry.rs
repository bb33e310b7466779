//! Chart geometry types.

use pc_project::IsolineKind;
use serde::{Deserialize, Serialize};

/// A styled polyline of `[T °C, W kg/kg]` points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Curve {
    pub label: String,
    pub style: String,
    pub color: String,
    pub width: f64,
    pub points: Vec<[f64; 2]>,
}

impl Curve {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One curve of an isoline family, e.g. the 50 % relative-humidity line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Isoline {
    pub family: IsolineKind,
    pub value: f64,
    pub curve: Curve,
}

/// Closed zone outline; the first and last point coincide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZonePolygon {
    pub name: String,
    pub edgecolor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facecolor: Option<String>,
    pub linewidth: f64,
    pub points: Vec<[f64; 2]>,
}

impl ZonePolygon {
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }
}

/// A labelled state point with its derived properties.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointMarker {
    pub label: String,
    pub t: f64,
    pub rh: f64,
    pub w: f64,
    pub h: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t_dp: Option<f64>,
    pub itu: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hli: Option<f64>,
    pub marker: String,
    pub color: String,
}

/// Everything needed to draw one chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartGeometry {
    pub title: String,
    /// Dry-bulb axis limits [°C]
    pub t_axis: [f64; 2],
    /// Humidity-ratio axis limits [kg/kg]
    pub w_axis: [f64; 2],
    /// Total pressure [Pa]
    pub pressure: f64,
    pub dpi: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    pub saturation: Curve,
    pub isolines: Vec<Isoline>,
    pub zones: Vec<ZonePolygon>,
    pub points: Vec<PointMarker>,
}

impl ChartGeometry {
    /// Isolines belonging to one family, in configuration order.
    pub fn family(&self, kind: IsolineKind) -> impl Iterator<Item = &Isoline> {
        self.isolines.iter().filter(move |iso| iso.family == kind)
    }

    /// Return a summary string of the chart contents (for debugging).
    pub fn summary(&self) -> String {
        format!(
            "Chart('{}',T=[{:.1},{:.1}]°C,W=[{:.4},{:.4}],P={:.0}Pa,isolines={},zones={},points={})",
            self.title,
            self.t_axis[0],
            self.t_axis[1],
            self.w_axis[0],
            self.w_axis[1],
            self.pressure,
            self.isolines.len(),
            self.zones.len(),
            self.points.len()
        )
    }
}
