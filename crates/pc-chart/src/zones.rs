//! Zone outlines in the (T, W) plane.

use crate::geometry::ZonePolygon;
use crate::{ChartError, ChartResult};
use pc_core::{Tolerances, linspace, nearly_equal};
use pc_project::{ZoneDef, ZoneShape};
use pc_psychro::humidity_ratio_checked;

/// Samples along each RH boundary of a `follow_rh` zone.
pub const FOLLOW_RH_SAMPLES: usize = 200;

pub fn zone_polygon(zone: &ZoneDef, p: f64) -> ChartResult<ZonePolygon> {
    let points = match zone.shape() {
        Some(ZoneShape::Vertices(vertices)) => vertex_outline(zone, vertices, p)?,
        Some(ZoneShape::FollowRh { t, rh }) => follow_rh_outline(t, rh, p)?,
        Some(ZoneShape::Box { t, rh }) => box_outline(t, rh, p)?,
        None => {
            return Err(ChartError::IllDefinedZone {
                name: zone.name.clone(),
            });
        }
    };

    Ok(ZonePolygon {
        name: zone.name.clone(),
        edgecolor: zone.edgecolor.clone(),
        facecolor: zone.is_filled().then(|| zone.facecolor.clone()).flatten(),
        linewidth: zone.linewidth,
        points,
    })
}

/// Explicit `[T, RH]` vertices, closed back to the first one when needed.
fn vertex_outline(zone: &ZoneDef, vertices: &[Vec<f64>], p: f64) -> ChartResult<Vec<[f64; 2]>> {
    let mut corners = Vec::with_capacity(vertices.len());
    for vertex in vertices {
        let [t, rh] = vertex.as_slice() else {
            return Err(ChartError::IllDefinedZone {
                name: zone.name.clone(),
            });
        };
        corners.push((*t, *rh));
    }

    let (first, last) = match (corners.first(), corners.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => {
            return Err(ChartError::IllDefinedZone {
                name: zone.name.clone(),
            });
        }
    };
    let tol = Tolerances::default();
    if !(nearly_equal(first.0, last.0, tol) && nearly_equal(first.1, last.1, tol)) {
        corners.push(first);
    }

    corners
        .into_iter()
        .map(|(t, rh)| -> ChartResult<[f64; 2]> {
            Ok([t, humidity_ratio_checked(t, rh, p)?])
        })
        .collect()
}

/// Lower RH curve forward, upper RH curve back, closed on the low-T side.
fn follow_rh_outline(t: (f64, f64), rh: (f64, f64), p: f64) -> ChartResult<Vec<[f64; 2]>> {
    let forward = linspace(t.0, t.1, FOLLOW_RH_SAMPLES);
    let mut points = Vec::with_capacity(2 * FOLLOW_RH_SAMPLES + 1);
    for &ti in &forward {
        points.push([ti, humidity_ratio_checked(ti, rh.0, p)?]);
    }
    for &ti in forward.iter().rev() {
        points.push([ti, humidity_ratio_checked(ti, rh.1, p)?]);
    }
    points.push(points[0]);
    Ok(points)
}

/// Four (T, RH) corners joined by straight segments in the chart plane.
fn box_outline(t: (f64, f64), rh: (f64, f64), p: f64) -> ChartResult<Vec<[f64; 2]>> {
    [(t.0, rh.0), (t.1, rh.0), (t.1, rh.1), (t.0, rh.1), (t.0, rh.0)]
        .into_iter()
        .map(|(t, rh)| -> ChartResult<[f64; 2]> {
            Ok([t, humidity_ratio_checked(t, rh, p)?])
        })
        .collect()
}
