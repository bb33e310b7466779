// pc-core/src/units.rs

use uom::si::f64::{
    MassDensity as UomMassDensity, Pressure as UomPressure, Ratio as UomRatio,
    SpecificVolume as UomSpecificVolume, ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type SpecVolume = UomSpecificVolume;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn m3_per_kg(v: f64) -> SpecVolume {
    use uom::si::specific_volume::cubic_meter_per_kilogram;
    SpecVolume::new::<cubic_meter_per_kilogram>(v)
}

/// Temperature in degrees Celsius, the unit every psychrometric formula takes.
#[inline]
pub fn as_degc(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

#[inline]
pub fn as_pa(p: Pressure) -> f64 {
    use uom::si::pressure::pascal;
    p.get::<pascal>()
}

#[inline]
pub fn as_fraction(r: Ratio) -> f64 {
    use uom::si::ratio::ratio;
    r.get::<ratio>()
}

pub mod constants {
    /// Standard atmosphere at sea level.
    pub const STANDARD_PRESSURE_PA: f64 = 101_325.0;

    /// Offset between the Celsius and Kelvin scales.
    pub const CELSIUS_TO_KELVIN: f64 = 273.15;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = degc(27.0);
        let _r = unitless(0.5);
        let _rho = kg_per_m3(1.2);
        let _v = m3_per_kg(0.85);
        let _p0 = pa(constants::STANDARD_PRESSURE_PA);
    }

    #[test]
    fn celsius_round_trip() {
        let t = degc(25.0);
        assert!((as_degc(t) - 25.0).abs() < 1e-9);
        assert!((as_degc(degc(-5.5)) + 5.5).abs() < 1e-9);
    }

    #[test]
    fn pressure_and_ratio_accessors() {
        assert_eq!(as_pa(pa(90_000.0)), 90_000.0);
        assert_eq!(as_fraction(unitless(0.4)), 0.4);
    }
}
