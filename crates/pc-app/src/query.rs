//! State-point, sweep and comfort-index queries.
//!
//! Relative humidity arguments accept a fraction or a percentage, normalised
//! exactly as configuration files are.

use pc_core::linspace;
use pc_project::normalize_rh;
use pc_psychro::{
    AirState, DewPointOptions, density, dew_point_batch, enthalpy, humidity_ratio_checked,
    specific_volume,
};

use crate::error::{AppError, AppResult};

/// Every property of the state at `t` [°C], `rh` and `p` [Pa].
pub fn state_point(t: f64, rh: f64, p: f64) -> AppResult<AirState> {
    let rh = normalize_rh(rh, "rh")?;
    Ok(AirState::from_t_rh(t, rh, p)?)
}

/// One row of a temperature sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    pub t: f64,
    pub w: f64,
    pub h: f64,
    pub v: f64,
    pub rho: f64,
    /// `None` for perfectly dry air
    pub t_dp: Option<f64>,
}

/// Properties along a dry-bulb sweep at constant relative humidity.
#[derive(Debug, Clone)]
pub struct Sweep {
    pub rh: f64,
    pub p: f64,
    pub rows: Vec<SweepRow>,
    /// Whether the dew-point batch met its tolerance
    pub dew_point_converged: bool,
}

impl Sweep {
    /// Rows as CSV with a header line; dry-air dew points are left empty.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("t_c,w_kg_kg,h_kj_kg,v_m3_kg,rho_kg_m3,t_dp_c\n");
        for row in &self.rows {
            let t_dp = row.t_dp.map(|v| v.to_string()).unwrap_or_default();
            csv.push_str(&format!(
                "{},{},{},{},{},{}\n",
                row.t, row.w, row.h, row.v, row.rho, t_dp
            ));
        }
        csv
    }
}

/// Sweep `points` temperatures from `t_min` to `t_max` at fixed `rh` and `p`.
///
/// Dew points are solved as one batch along the sweep with default solver options.
pub fn temperature_sweep(
    t_min: f64,
    t_max: f64,
    rh: f64,
    points: usize,
    p: f64,
) -> AppResult<Sweep> {
    temperature_sweep_with(t_min, t_max, rh, points, p, &DewPointOptions::default())
}

/// [`temperature_sweep`] with explicit dew-point solver options.
pub fn temperature_sweep_with(
    t_min: f64,
    t_max: f64,
    rh: f64,
    points: usize,
    p: f64,
    opts: &DewPointOptions,
) -> AppResult<Sweep> {
    let rh = normalize_rh(rh, "rh")?;
    if !t_min.is_finite() || !t_max.is_finite() || t_min >= t_max {
        return Err(AppError::InvalidInput(format!(
            "temperature range [{t_min}, {t_max}] must be finite and increasing"
        )));
    }
    if points < 2 {
        return Err(AppError::InvalidInput(
            "a sweep needs at least 2 points".to_string(),
        ));
    }
    if !p.is_finite() || p <= 0.0 {
        return Err(AppError::InvalidInput(format!(
            "pressure {p} must be positive and finite"
        )));
    }

    let t = linspace(t_min, t_max, points);
    let (t_dp, dew_point_converged): (Vec<Option<f64>>, bool) = if rh > 0.0 {
        let solution = dew_point_batch(rh, &t, p, opts);
        let converged = solution.converged;
        (solution.values.into_iter().map(Some).collect(), converged)
    } else {
        (vec![None; t.len()], true)
    };

    let rows = t
        .iter()
        .zip(t_dp)
        .map(|(&t, t_dp)| -> AppResult<SweepRow> {
            let w = humidity_ratio_checked(t, rh, p)?;
            Ok(SweepRow {
                t,
                w,
                h: enthalpy(t, w),
                v: specific_volume(t, w, p),
                rho: density(t, w, p),
                t_dp,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    tracing::debug!(points, rh, dew_point_converged, "temperature sweep evaluated");
    Ok(Sweep {
        rh,
        p,
        rows,
        dew_point_converged,
    })
}

/// Temperature-humidity index at `t` [°C] and `rh`.
pub fn itu(t: f64, rh: f64) -> AppResult<f64> {
    let rh = normalize_rh(rh, "rh")?;
    Ok(pc_indexes::itu(t, rh)?)
}

/// Heat load index at `t` [°C], `rh`, solar radiation `sr` [W/m²] and wind speed `ws` [m/s].
pub fn hli(t: f64, rh: f64, sr: f64, ws: f64) -> AppResult<f64> {
    let rh = normalize_rh(rh, "rh")?;
    Ok(pc_indexes::hli(t, rh, sr, ws)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pc_psychro::STANDARD_PRESSURE;

    const P: f64 = STANDARD_PRESSURE;

    #[test]
    fn state_point_accepts_percent() {
        let a = state_point(25.0, 50.0, P).unwrap();
        let b = state_point(25.0, 0.5, P).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn state_point_rejects_bad_humidity() {
        assert!(matches!(
            state_point(25.0, 150.0, P),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn sweep_rows_follow_grid() {
        let sweep = temperature_sweep(10.0, 30.0, 0.6, 5, P).unwrap();
        assert_eq!(sweep.rows.len(), 5);
        assert_eq!(sweep.rows[0].t, 10.0);
        assert_eq!(sweep.rows[4].t, 30.0);
        for row in &sweep.rows {
            let t_dp = row.t_dp.unwrap();
            assert!(t_dp < row.t);
            assert!((row.rho * row.v - 1.0).abs() < 1e-12);
        }
        assert!(sweep.rows.windows(2).all(|r| r[1].w > r[0].w));
        assert!(sweep.dew_point_converged);
    }

    #[test]
    fn sweep_reports_unconverged_dew_points() {
        let opts = DewPointOptions {
            tol: 1e-12,
            max_iter: 2,
        };
        let sweep = temperature_sweep_with(10.0, 30.0, 0.3, 5, P, &opts).unwrap();
        assert!(!sweep.dew_point_converged);
        assert!(sweep.rows.iter().all(|r| r.t_dp.is_some_and(f64::is_finite)));
    }

    #[test]
    fn dry_sweep_has_no_dew_points() {
        let sweep = temperature_sweep(0.0, 20.0, 0.0, 3, P).unwrap();
        assert!(sweep.rows.iter().all(|r| r.t_dp.is_none() && r.w == 0.0));
        assert!(sweep.dew_point_converged);
    }

    #[test]
    fn sweep_csv_has_one_line_per_row() {
        let csv = temperature_sweep(10.0, 30.0, 0.5, 3, P).unwrap().to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "t_c,w_kg_kg,h_kj_kg,v_m3_kg,rho_kg_m3,t_dp_c");
        assert!(lines[1].starts_with("10,"));
        assert!(lines[3].starts_with("30,"));
        assert!(lines[1..].iter().all(|l| l.split(',').count() == 6));

        let dry = temperature_sweep(10.0, 30.0, 0.0, 2, P).unwrap().to_csv();
        assert!(dry.lines().skip(1).all(|l| l.ends_with(',')));
    }

    #[test]
    fn sweep_rejects_bad_ranges() {
        assert!(temperature_sweep(30.0, 10.0, 0.5, 5, P).is_err());
        assert!(temperature_sweep(10.0, 30.0, 0.5, 1, P).is_err());
        assert!(temperature_sweep(10.0, 30.0, 0.5, 5, -1.0).is_err());
    }

    #[test]
    fn indexes_accept_percent() {
        assert_eq!(itu(30.0, 50.0).unwrap(), itu(30.0, 0.5).unwrap());
        assert!(matches!(
            hli(30.0, 0.5, -1.0, 2.0),
            Err(AppError::Index(_))
        ));
    }
}
