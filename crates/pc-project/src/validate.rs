//! Configuration validation logic.

use crate::schema::{ChartConfig, ChartDef, IsoSetDef, IsolineKind, PointDef, ZoneDef, ZoneShape};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing field: {field} in {context}")]
    MissingField { field: String, context: String },

    #[error("Duplicate name: {name} in {context}")]
    DuplicateName { name: String, context: String },

    #[error("Unknown isoline family: {name}")]
    UnknownIsoline { name: String },

    #[error("Zone '{name}' is ill-defined: {reason}")]
    IllDefinedZone { name: String, reason: String },
}

fn invalid(field: impl Into<String>, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.into(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_config(config: &ChartConfig) -> Result<(), ValidationError> {
    validate_chart(&config.chart)?;

    let mut names = HashSet::new();
    for set in config.isos.iter().chain(&config.isolines) {
        validate_iso_set(set)?;
        if !names.insert(set.name.as_str()) {
            return Err(ValidationError::DuplicateName {
                name: set.name.clone(),
                context: "isolines".to_string(),
            });
        }
    }

    for zone in &config.zones {
        validate_zone(zone)?;
    }

    for point in &config.points {
        validate_point(point)?;
    }

    Ok(())
}

fn validate_chart(chart: &ChartDef) -> Result<(), ValidationError> {
    if !chart.t_min.is_finite() {
        return Err(invalid("chart.t_min", chart.t_min, "must be finite"));
    }
    if !chart.t_max.is_finite() || chart.t_max <= chart.t_min {
        return Err(invalid(
            "chart.t_max",
            chart.t_max,
            "must be finite and greater than t_min",
        ));
    }
    if !chart.pressure.is_finite() || chart.pressure <= 0.0 {
        return Err(invalid(
            "chart.pressure",
            chart.pressure,
            "must be positive and finite",
        ));
    }
    if chart.dpi == 0 {
        return Err(invalid("chart.dpi", chart.dpi, "must be positive"));
    }
    if chart.samples < 2 {
        return Err(invalid("chart.samples", chart.samples, "need at least 2"));
    }
    if let Some(y) = chart.y_min
        && !y.is_finite()
    {
        return Err(invalid("chart.y_min", y, "must be finite"));
    }
    if let Some(y) = chart.y_max
        && !y.is_finite()
    {
        return Err(invalid("chart.y_max", y, "must be finite"));
    }
    if let (Some(lo), Some(hi)) = (chart.y_min, chart.y_max)
        && lo >= hi
    {
        return Err(invalid("chart.y_max", hi, "must be greater than y_min"));
    }
    if chart.output.trim().is_empty() {
        return Err(ValidationError::MissingField {
            field: "output".to_string(),
            context: "chart".to_string(),
        });
    }
    Ok(())
}

fn validate_iso_set(set: &IsoSetDef) -> Result<(), ValidationError> {
    if set.name.is_empty() {
        return Err(ValidationError::MissingField {
            field: "name".to_string(),
            context: "isolines".to_string(),
        });
    }
    let kind = set.kind().ok_or_else(|| ValidationError::UnknownIsoline {
        name: set.name.clone(),
    })?;

    let field = format!("isos[{}].values", set.name);
    for &value in &set.values {
        if !value.is_finite() {
            return Err(invalid(&field, value, "must be finite"));
        }
        if kind == IsolineKind::RelativeHumidity && !(0.0..=1.0).contains(&value) {
            return Err(invalid(&field, value, "relative humidity must lie in [0, 1]"));
        }
        if kind == IsolineKind::SpecificVolume && value <= 0.0 {
            return Err(invalid(&field, value, "specific volume must be positive"));
        }
        if kind == IsolineKind::MoistureQuantity && value < 0.0 {
            return Err(invalid(&field, value, "humidity ratio must be non-negative"));
        }
    }
    Ok(())
}

fn validate_zone(zone: &ZoneDef) -> Result<(), ValidationError> {
    if zone.name.is_empty() {
        return Err(ValidationError::MissingField {
            field: "name".to_string(),
            context: "zones".to_string(),
        });
    }
    let ill_defined = |reason: &str| ValidationError::IllDefinedZone {
        name: zone.name.clone(),
        reason: reason.to_string(),
    };

    match zone.shape() {
        Some(ZoneShape::Vertices(vertices)) => {
            if vertices.len() < 3 {
                return Err(ill_defined("needs at least 3 vertices"));
            }
            for vertex in vertices {
                let [t, rh] = vertex.as_slice() else {
                    return Err(ill_defined("every vertex must be a [T, RH] pair"));
                };
                if !t.is_finite() || !(0.0..=1.0).contains(rh) {
                    return Err(ill_defined("vertex outside the valid (T, RH) domain"));
                }
            }
        }
        Some(ZoneShape::FollowRh { t, rh }) | Some(ZoneShape::Box { t, rh }) => {
            if !t.0.is_finite() || !t.1.is_finite() || t.0 >= t.1 {
                return Err(ill_defined("t_range must be [low, high] with low < high"));
            }
            if !(0.0..=1.0).contains(&rh.0) || !(0.0..=1.0).contains(&rh.1) {
                return Err(ill_defined("rh_range must lie in [0, 1]"));
            }
        }
        None => {
            return Err(ill_defined(
                "needs vertices, or t_range and rh_range with two values each",
            ));
        }
    }

    if !zone.linewidth.is_finite() || zone.linewidth < 0.0 {
        return Err(invalid(
            format!("zone '{}' linewidth", zone.name),
            zone.linewidth,
            "must be non-negative and finite",
        ));
    }
    Ok(())
}

fn validate_point(point: &PointDef) -> Result<(), ValidationError> {
    if point.label.is_empty() {
        return Err(ValidationError::MissingField {
            field: "label".to_string(),
            context: "points".to_string(),
        });
    }
    if !point.t.is_finite() {
        return Err(invalid(
            format!("point '{}' t", point.label),
            point.t,
            "must be finite",
        ));
    }
    if !(0.0..=1.0).contains(&point.rh) {
        return Err(invalid(
            format!("point '{}' rh", point.label),
            point.rh,
            "must lie in [0, 1]",
        ));
    }
    for (name, value) in [
        ("solar_radiation", point.solar_radiation),
        ("wind_speed", point.wind_speed),
    ] {
        if let Some(v) = value
            && (!v.is_finite() || v < 0.0)
        {
            return Err(invalid(
                format!("point '{}' {name}", point.label),
                v,
                "must be non-negative and finite",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ChartConfig {
        ChartConfig {
            isos: vec![IsoSetDef::new(IsolineKind::RelativeHumidity, vec![0.3, 0.6])],
            points: vec![PointDef::new("A", 25.0, 0.5)],
            ..ChartConfig::default()
        }
    }

    #[test]
    fn accepts_minimal_config() {
        validate_config(&ChartConfig::default()).unwrap();
        validate_config(&base()).unwrap();
    }

    #[test]
    fn rejects_inverted_temperature_axis() {
        let mut config = base();
        config.chart.t_min = 40.0;
        config.chart.t_max = 10.0;
        assert!(matches!(
            validate_config(&config),
            Err(ValidationError::InvalidValue { field, .. }) if field == "chart.t_max"
        ));
    }

    #[test]
    fn rejects_bad_pressure_and_samples() {
        let mut config = base();
        config.chart.pressure = 0.0;
        assert!(validate_config(&config).is_err());

        let mut config = base();
        config.chart.samples = 1;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_inverted_y_axis() {
        let mut config = base();
        config.chart.y_min = Some(0.02);
        config.chart.y_max = Some(0.01);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_unknown_and_duplicate_isolines() {
        let mut config = base();
        config.isos.push(IsoSetDef {
            name: "humidex".to_string(),
            ..IsoSetDef::new(IsolineKind::Enthalpy, vec![])
        });
        assert_eq!(
            validate_config(&config),
            Err(ValidationError::UnknownIsoline {
                name: "humidex".to_string()
            })
        );

        let mut config = base();
        config
            .isos
            .push(IsoSetDef::new(IsolineKind::RelativeHumidity, vec![0.9]));
        assert!(matches!(
            validate_config(&config),
            Err(ValidationError::DuplicateName { .. })
        ));
    }

    #[test]
    fn rejects_zone_without_geometry() {
        let mut config = base();
        config.zones.push(ZoneDef {
            name: "comfort".to_string(),
            vertices: None,
            t_range: Some(vec![20.0, 26.0]),
            rh_range: None,
            follow_rh: false,
            edgecolor: "k".to_string(),
            facecolor: None,
            linewidth: 1.5,
        });
        assert!(matches!(
            validate_config(&config),
            Err(ValidationError::IllDefinedZone { name, .. }) if name == "comfort"
        ));
    }

    #[test]
    fn rejects_short_vertex_list() {
        let mut config = base();
        config.zones.push(ZoneDef {
            name: "tri".to_string(),
            vertices: Some(vec![vec![20.0, 0.4], vec![26.0]]),
            t_range: None,
            rh_range: None,
            follow_rh: false,
            edgecolor: "k".to_string(),
            facecolor: None,
            linewidth: 1.5,
        });
        assert!(matches!(
            validate_config(&config),
            Err(ValidationError::IllDefinedZone { .. })
        ));
    }

    #[test]
    fn rejects_negative_site_data() {
        let mut config = base();
        config.points[0].wind_speed = Some(-1.0);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_missing_point_label() {
        let mut config = base();
        config.points[0].label.clear();
        assert!(matches!(
            validate_config(&config),
            Err(ValidationError::MissingField { field, .. }) if field == "label"
        ));
    }
}
