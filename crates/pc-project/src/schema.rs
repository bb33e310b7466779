//! Chart configuration schema.

use pc_core::constants::STANDARD_PRESSURE_PA;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A complete chart configuration file.
///
/// Isoline sets may be written as a list (`isos`, each entry carrying its
/// `name`) or as a map (`isolines`, keyed by name). After loading, every set
/// lives in `isos` and `isolines` is empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    #[serde(default)]
    pub chart: ChartDef,
    #[serde(default)]
    pub isos: Vec<IsoSetDef>,
    #[serde(
        default,
        with = "iso_map",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub isolines: Vec<IsoSetDef>,
    #[serde(default)]
    pub zones: Vec<ZoneDef>,
    #[serde(default)]
    pub points: Vec<PointDef>,
}

impl ChartConfig {
    /// Enabled isoline sets with a recognised family, in file order.
    pub fn enabled_isolines(&self) -> impl Iterator<Item = (IsolineKind, &IsoSetDef)> {
        self.isos
            .iter()
            .filter(|set| set.enabled)
            .filter_map(|set| set.kind().map(|kind| (kind, set)))
    }
}

/// Global chart settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default = "default_t_min")]
    pub t_min: f64,
    #[serde(default = "default_t_max")]
    pub t_max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_max: Option<f64>,
    #[serde(default = "default_pressure")]
    pub pressure: f64,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_dpi")]
    pub dpi: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default = "default_samples")]
    pub samples: usize,
}

impl Default for ChartDef {
    fn default() -> Self {
        Self {
            title: None,
            t_min: default_t_min(),
            t_max: default_t_max(),
            y_min: None,
            y_max: None,
            pressure: default_pressure(),
            output: default_output(),
            dpi: default_dpi(),
            style: None,
            samples: default_samples(),
        }
    }
}

fn default_t_min() -> f64 {
    0.0
}

fn default_t_max() -> f64 {
    50.0
}

fn default_pressure() -> f64 {
    STANDARD_PRESSURE_PA
}

fn default_output() -> String {
    "chart.png".to_string()
}

fn default_dpi() -> u32 {
    150
}

fn default_samples() -> usize {
    600
}

/// Isoline families the chart knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IsolineKind {
    RelativeHumidity,
    WetBulb,
    Enthalpy,
    SpecificVolume,
    MoistureQuantity,
    DewPoint,
}

impl IsolineKind {
    pub const ALL: [IsolineKind; 6] = [
        IsolineKind::RelativeHumidity,
        IsolineKind::WetBulb,
        IsolineKind::Enthalpy,
        IsolineKind::SpecificVolume,
        IsolineKind::MoistureQuantity,
        IsolineKind::DewPoint,
    ];

    /// Configuration-file name of the family.
    pub fn as_str(self) -> &'static str {
        match self {
            IsolineKind::RelativeHumidity => "relative_humidity",
            IsolineKind::WetBulb => "wet_bulb",
            IsolineKind::Enthalpy => "enthalpy",
            IsolineKind::SpecificVolume => "specific_volume",
            IsolineKind::MoistureQuantity => "moisture_quantity",
            IsolineKind::DewPoint => "dew_point",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Color used when the set does not name one.
    pub fn default_color(self) -> &'static str {
        match self {
            IsolineKind::RelativeHumidity => "k",
            IsolineKind::WetBulb => "gray",
            IsolineKind::Enthalpy => "steelblue",
            IsolineKind::SpecificVolume | IsolineKind::MoistureQuantity => "green",
            IsolineKind::DewPoint => "purple",
        }
    }

    /// Unit suffix for curve labels.
    pub fn unit(self) -> &'static str {
        match self {
            IsolineKind::RelativeHumidity => "%",
            IsolineKind::WetBulb | IsolineKind::DewPoint => "°C",
            IsolineKind::Enthalpy => "kJ/kg",
            IsolineKind::SpecificVolume => "m³/kg",
            IsolineKind::MoistureQuantity => "kg/kg",
        }
    }
}

impl fmt::Display for IsolineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One isoline family with the values to draw.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IsoSetDef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub values: Vec<f64>,
    #[serde(default = "default_line_style")]
    pub style: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmap: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl IsoSetDef {
    pub fn new(kind: IsolineKind, values: Vec<f64>) -> Self {
        Self {
            name: kind.as_str().to_string(),
            values,
            style: default_line_style(),
            color: None,
            cmap: None,
            enabled: true,
        }
    }

    pub fn kind(&self) -> Option<IsolineKind> {
        IsolineKind::from_name(&self.name)
    }
}

fn default_line_style() -> String {
    "-".to_string()
}

fn default_true() -> bool {
    true
}

/// A highlighted chart region.
///
/// Either `vertices` (`[T, RH]` pairs) or both `t_range` and `rh_range` must
/// be given; vertices win when both are present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneDef {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertices: Option<Vec<Vec<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t_range: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rh_range: Option<Vec<f64>>,
    #[serde(default)]
    pub follow_rh: bool,
    #[serde(default = "default_edgecolor")]
    pub edgecolor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facecolor: Option<String>,
    #[serde(default = "default_linewidth")]
    pub linewidth: f64,
}

/// How a zone's outline is constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoneShape<'a> {
    /// Explicit `[T, RH]` vertices.
    Vertices(&'a [Vec<f64>]),
    /// Bounded by two RH curves between two temperatures.
    FollowRh { t: (f64, f64), rh: (f64, f64) },
    /// Four corners in (T, RH) joined by straight segments.
    Box { t: (f64, f64), rh: (f64, f64) },
}

impl ZoneDef {
    /// Classify the zone, or `None` when it is ill-defined.
    pub fn shape(&self) -> Option<ZoneShape<'_>> {
        if let Some(vertices) = self.vertices.as_deref()
            && !vertices.is_empty()
        {
            return Some(ZoneShape::Vertices(vertices));
        }
        let t = pair(self.t_range.as_deref())?;
        let rh = pair(self.rh_range.as_deref())?;
        if self.follow_rh {
            Some(ZoneShape::FollowRh { t, rh })
        } else {
            Some(ZoneShape::Box { t, rh })
        }
    }

    /// Whether the zone should be filled as well as outlined.
    pub fn is_filled(&self) -> bool {
        self.facecolor
            .as_deref()
            .is_some_and(|c| !c.eq_ignore_ascii_case("none"))
    }
}

fn pair(values: Option<&[f64]>) -> Option<(f64, f64)> {
    match values? {
        [a, b] => Some((*a, *b)),
        _ => None,
    }
}

fn default_edgecolor() -> String {
    "k".to_string()
}

fn default_linewidth() -> f64 {
    1.5
}

/// A labelled reference point.
///
/// `solar_radiation` [W/m²] and `wind_speed` [m/s] are optional site data;
/// when both are present the heat load index is reported for the point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointDef {
    #[serde(default)]
    pub label: String,
    pub t: f64,
    pub rh: f64,
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default = "default_point_color")]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solar_radiation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
}

impl PointDef {
    pub fn new(label: impl Into<String>, t: f64, rh: f64) -> Self {
        Self {
            label: label.into(),
            t,
            rh,
            marker: default_marker(),
            color: default_point_color(),
            solar_radiation: None,
            wind_speed: None,
        }
    }
}

fn default_marker() -> String {
    "o".to_string()
}

fn default_point_color() -> String {
    "k".to_string()
}

/// Map form of the isoline list: `{ name: { values, style, ... } }`.
///
/// Entry order is preserved; the key becomes the set's `name`.
mod iso_map {
    use super::IsoSetDef;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(sets: &[IsoSetDef], serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(sets.len()))?;
        for set in sets {
            map.serialize_entry(&set.name, set)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<IsoSetDef>, D::Error> {
        struct IsoMapVisitor;

        impl<'de> Visitor<'de> for IsoMapVisitor {
            type Value = Vec<IsoSetDef>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from isoline name to isoline settings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut sets = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, mut set)) = access.next_entry::<String, IsoSetDef>()? {
                    set.name = name;
                    sets.push(set);
                }
                Ok(sets)
            }
        }

        deserializer.deserialize_map(IsoMapVisitor)
    }
}
