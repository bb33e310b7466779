//! Shared application service layer for psychroflow.
//!
//! Both front-ends go through this crate: it loads chart configurations,
//! builds and saves chart geometry, and answers state-point, sweep and
//! comfort-index queries with inputs normalised the same way the loader does.

pub mod chart_service;
pub mod error;
pub mod query;

pub use chart_service::{RenderResponse, build_chart, load_config, render_to_file};
pub use error::{AppError, AppResult};
pub use query::{
    Sweep, SweepRow, hli, itu, state_point, temperature_sweep, temperature_sweep_with,
};
