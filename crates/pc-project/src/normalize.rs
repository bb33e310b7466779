//! Relative-humidity normalisation applied while loading.

use crate::schema::ChartConfig;
use crate::validate::ValidationError;

/// Accept RH as a fraction in [0, 1] or a percentage in (1, 100].
///
/// Values above 1 are divided by 100; the result must lie in [0, 1].
pub fn normalize_rh(value: f64, field: &str) -> Result<f64, ValidationError> {
    let rh = if value > 1.0 { value / 100.0 } else { value };
    if !(0.0..=1.0).contains(&rh) {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "relative humidity must be a fraction in [0, 1] or a percentage in [0, 100]"
                .to_string(),
        });
    }
    Ok(rh)
}

impl ChartConfig {
    /// Fold map-form isolines into `isos` and normalise every relative humidity.
    ///
    /// Idempotent: normalising an already normalised configuration changes nothing.
    pub fn normalize(&mut self) -> Result<(), ValidationError> {
        let mapped = std::mem::take(&mut self.isolines);
        self.isos.extend(mapped);

        for set in &mut self.isos {
            if set.name == "relative_humidity" {
                for value in &mut set.values {
                    *value = normalize_rh(*value, "isos[relative_humidity].values")?;
                }
            }
        }

        for zone in &mut self.zones {
            if let Some(range) = zone.rh_range.as_mut() {
                for value in range.iter_mut() {
                    *value = normalize_rh(*value, &format!("zone '{}' rh_range", zone.name))?;
                }
            }
            if let Some(vertices) = zone.vertices.as_mut() {
                for vertex in vertices.iter_mut() {
                    if let Some(rh) = vertex.get_mut(1) {
                        *rh = normalize_rh(*rh, &format!("zone '{}' vertices", zone.name))?;
                    }
                }
            }
        }

        for point in &mut self.points {
            point.rh = normalize_rh(point.rh, &format!("point '{}' rh", point.label))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{IsoSetDef, IsolineKind, PointDef};

    #[test]
    fn fractions_pass_through() {
        assert_eq!(normalize_rh(0.0, "rh").unwrap(), 0.0);
        assert_eq!(normalize_rh(0.45, "rh").unwrap(), 0.45);
        assert_eq!(normalize_rh(1.0, "rh").unwrap(), 1.0);
    }

    #[test]
    fn percentages_are_scaled() {
        assert_eq!(normalize_rh(50.0, "rh").unwrap(), 0.5);
        assert_eq!(normalize_rh(100.0, "rh").unwrap(), 1.0);
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(normalize_rh(150.0, "rh").is_err());
        assert!(normalize_rh(-0.1, "rh").is_err());
        assert!(normalize_rh(f64::NAN, "rh").is_err());
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut config = ChartConfig {
            isolines: vec![IsoSetDef::new(IsolineKind::RelativeHumidity, vec![30.0, 0.5])],
            points: vec![PointDef::new("A", 25.0, 65.0)],
            ..ChartConfig::default()
        };
        config.normalize().unwrap();
        let once = config.clone();
        config.normalize().unwrap();

        assert_eq!(config, once);
        assert!(config.isolines.is_empty());
        assert_eq!(config.isos[0].values, vec![0.3, 0.5]);
        assert_eq!(config.points[0].rh, 0.65);
    }

    #[test]
    fn other_families_keep_their_values() {
        let mut config = ChartConfig {
            isos: vec![IsoSetDef::new(IsolineKind::Enthalpy, vec![40.0, 60.0])],
            ..ChartConfig::default()
        };
        config.normalize().unwrap();
        assert_eq!(config.isos[0].values, vec![40.0, 60.0]);
    }
}
