//! Assemble a full chart from a configuration.

use crate::geometry::{ChartGeometry, Curve, Isoline, PointMarker};
use crate::isolines::{TemperatureGrid, family_isolines};
use crate::zones::zone_polygon;
use crate::ChartResult;
use pc_core::linspace;
use pc_project::{ChartConfig, PointDef};
use pc_psychro::{AirState, humidity_ratio_checked};
use rayon::prelude::*;

/// Headroom above the saturation humidity ratio at `t_max` for the default W axis.
const W_AXIS_HEADROOM: f64 = 1.05;

const DEFAULT_TITLE: &str = "Psychrometric chart";

/// Build the geometry of a validated configuration.
///
/// Isoline sets are evaluated in parallel; output order follows the
/// configuration. Disabled sets are skipped.
pub fn build_chart(config: &ChartConfig) -> ChartResult<ChartGeometry> {
    let chart = &config.chart;
    let p = chart.pressure;
    let grid = TemperatureGrid::new(linspace(chart.t_min, chart.t_max, chart.samples), p);

    let saturation = Curve {
        label: "100 % RH".to_string(),
        style: "-".to_string(),
        color: "orange".to_string(),
        width: 2.0,
        points: grid.saturation_points(),
    };

    let sets: Vec<_> = config.enabled_isolines().collect();
    let isolines: Vec<Isoline> = sets
        .par_iter()
        .map(|(kind, set)| family_isolines(*kind, set, &grid))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect();

    let zones = config
        .zones
        .iter()
        .map(|zone| zone_polygon(zone, p))
        .collect::<ChartResult<Vec<_>>>()?;

    let points = config
        .points
        .iter()
        .map(|point| point_marker(point, p))
        .collect::<ChartResult<Vec<_>>>()?;

    let y_min = chart.y_min.unwrap_or(0.0);
    let y_max = match chart.y_max {
        Some(y) => y,
        None => W_AXIS_HEADROOM * humidity_ratio_checked(chart.t_max, 1.0, p)?,
    };

    let geometry = ChartGeometry {
        title: chart
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        t_axis: [chart.t_min, chart.t_max],
        w_axis: [y_min, y_max],
        pressure: p,
        dpi: chart.dpi,
        style: chart.style.clone(),
        saturation,
        isolines,
        zones,
        points,
    };
    tracing::debug!(
        sets = sets.len(),
        isolines = geometry.isolines.len(),
        zones = geometry.zones.len(),
        points = geometry.points.len(),
        "chart geometry built"
    );
    Ok(geometry)
}

/// Marker for one configured point, with its state properties and comfort indexes.
pub fn point_marker(point: &PointDef, p: f64) -> ChartResult<PointMarker> {
    let state = AirState::from_t_rh(point.t, point.rh, p)?;
    let itu = pc_indexes::itu(point.t, point.rh)?;
    let hli = match (point.solar_radiation, point.wind_speed) {
        (Some(sr), Some(ws)) => Some(pc_indexes::hli(point.t, point.rh, sr, ws)?),
        _ => None,
    };

    Ok(PointMarker {
        label: point.label.clone(),
        t: state.t,
        rh: state.rh,
        w: state.w,
        h: state.h,
        t_dp: state.t_dp,
        itu,
        hli,
        marker: point.marker.clone(),
        color: point.color.clone(),
    })
}
