//! Cross-checks against printed psychrometric tables.
//!
//! Reference humidity ratios come from ASHRAE charts and are rounded to the
//! resolution of a printed chart, so they are compared with a 3 % relative
//! tolerance rather than exactly.

use pc_psychro::{
    Elementwise, STANDARD_PRESSURE, dew_point_temperature, enthalpy, humidity_ratio,
    humidity_ratio_each, relative_humidity_from_w, saturation_pressure, saturation_pressure_each,
    specific_volume,
};

const P: f64 = STANDARD_PRESSURE;

/// (dry-bulb [°C], relative humidity [-], humidity ratio [kg/kg])
const REFERENCE_POINTS: [(f64, f64, f64); 3] = [
    (20.0, 0.50, 0.0073),
    (25.0, 0.50, 0.0099),
    (30.0, 0.60, 0.0160),
];

fn relative_error(a: f64, b: f64) -> f64 {
    (a - b).abs() / b
}

#[test]
fn humidity_ratio_matches_reference_points() {
    for (t, rh, w_ref) in REFERENCE_POINTS {
        let w = humidity_ratio(t, rh, P);
        let err = relative_error(w, w_ref);
        assert!(
            err < 0.03,
            "T={t} °C, RH={rh}: W={w:.5}, ref={w_ref:.5}, relative error={:.3}%",
            err * 100.0
        );
    }
}

#[test]
fn saturation_pressure_is_monotonic() {
    let p = saturation_pressure_each(vec![0.0, 10.0, 20.0, 30.0]);
    assert!(p.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn humidity_ratio_increases_with_rh() {
    assert!(humidity_ratio(25.0, 0.6, P) > humidity_ratio(25.0, 0.3, P));
}

#[test]
fn enthalpy_increases_with_temperature() {
    assert!(enthalpy(30.0, 0.01) > enthalpy(20.0, 0.01));
}

#[test]
fn relative_humidity_inverse_round_trip() {
    let w = humidity_ratio(25.0, 0.5, P);
    let rh = relative_humidity_from_w(25.0, w, P);
    assert!((rh - 0.5).abs() < 1e-3);
}

#[test]
fn specific_volume_is_positive() {
    assert!(specific_volume(25.0, 0.01, P) > 0.0);
}

#[test]
fn dew_point_bounded_by_dry_bulb() {
    assert!(dew_point_temperature(0.5, 30.0, P) <= 30.0);
}

#[test]
fn elementwise_evaluation_preserves_shape() {
    let t = vec![-5.0, 0.0, 5.0, 15.0, 25.0, 35.0, 45.0];

    let p = saturation_pressure_each(&t);
    let w = humidity_ratio_each(t.as_slice(), 0.7, P);
    assert_eq!(p.len(), t.len());
    assert_eq!(w.len(), t.len());

    for (i, &ti) in t.iter().enumerate() {
        assert_eq!(p[i], saturation_pressure(ti));
        assert_eq!(w[i], humidity_ratio(ti, 0.7, P));
    }

    // Scalars stay scalars.
    let scalar: f64 = 21.0_f64.map_each(saturation_pressure);
    assert_eq!(scalar, saturation_pressure(21.0));
}
