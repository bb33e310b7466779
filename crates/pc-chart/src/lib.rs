//! pc-chart: psychrometric chart geometry.
//!
//! Turns a validated [`pc_project::ChartConfig`] into plain polylines in the
//! (dry-bulb temperature, humidity ratio) plane: the saturation curve, one
//! curve per isoline value, zone outlines and point markers. The geometry is
//! stored as JSON or drawn to a PNG or SVG image.
//!
//! Every curve stays at or below the saturation curve; points that would lie
//! above it, or that evaluate to a non-finite humidity ratio, are dropped.

pub mod builder;
pub mod colormap;
pub mod colors;
pub mod geometry;
pub mod isolines;
pub mod render;
pub mod store;
pub mod zones;

pub use builder::build_chart;
pub use geometry::*;
pub use render::{OutputFormat, Theme, render_png, render_svg, save_chart};
pub use store::{load_geometry, save_geometry};

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error("Psychrometric error: {0}")]
    Psychro(#[from] pc_psychro::PsychroError),

    #[error("Comfort index error: {0}")]
    Index(#[from] pc_indexes::IndexError),

    #[error("Zone '{name}' is ill-defined")]
    IllDefinedZone { name: String },

    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
