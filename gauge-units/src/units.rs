//! Standard unit catalog - the units robot code reaches for, by category

use std::collections::HashMap;
use std::f64::consts::{PI, TAU};
use std::sync::LazyLock;
use gauge_core::{ConversionLaw, Dimension, GaugeError};
use crate::Unit;

// Distance

pub static METERS: LazyLock<Unit> = LazyLock::new(|| Unit::base(Dimension::LENGTH, "Meter", "m"));
pub static MILLIMETERS: LazyLock<Unit> = LazyLock::new(|| METERS.scaled("Millimeter", "mm", 0.001));
pub static CENTIMETERS: LazyLock<Unit> = LazyLock::new(|| METERS.scaled("Centimeter", "cm", 0.01));
pub static INCHES: LazyLock<Unit> = LazyLock::new(|| METERS.scaled("Inch", "in", 0.0254));
pub static FEET: LazyLock<Unit> = LazyLock::new(|| METERS.scaled("Foot", "ft", 0.3048));

// Time

pub static SECONDS: LazyLock<Unit> = LazyLock::new(|| Unit::base(Dimension::TIME, "Second", "s"));
pub static MILLISECONDS: LazyLock<Unit> = LazyLock::new(|| SECONDS.scaled("Millisecond", "ms", 1e-3));
pub static MICROSECONDS: LazyLock<Unit> = LazyLock::new(|| SECONDS.scaled("Microsecond", "us", 1e-6));
pub static MINUTES: LazyLock<Unit> = LazyLock::new(|| SECONDS.scaled("Minute", "min", 60.0));

// Angle

pub static RADIANS: LazyLock<Unit> = LazyLock::new(|| Unit::base(Dimension::ANGLE, "Radian", "rad"));
pub static DEGREES: LazyLock<Unit> = LazyLock::new(|| RADIANS.scaled("Degree", "°", PI / 180.0));
pub static ROTATIONS: LazyLock<Unit> = LazyLock::new(|| RADIANS.scaled("Rotation", "rot", TAU));

// Mass

pub static KILOGRAMS: LazyLock<Unit> = LazyLock::new(|| Unit::base(Dimension::MASS, "Kilogram", "kg"));
pub static GRAMS: LazyLock<Unit> = LazyLock::new(|| KILOGRAMS.scaled("Gram", "g", 0.001));
pub static POUNDS: LazyLock<Unit> = LazyLock::new(|| KILOGRAMS.scaled("Pound", "lb", 0.45359237));
pub static OUNCES: LazyLock<Unit> = LazyLock::new(|| POUNDS.scaled("Ounce", "oz", 1.0 / 16.0));

// Dimensionless

pub static VALUE: LazyLock<Unit> = LazyLock::new(|| Unit::base(Dimension::DIMENSIONLESS, "Value", ""));
pub static PERCENT: LazyLock<Unit> = LazyLock::new(|| VALUE.scaled("Percent", "%", 0.01));

// Frequency

pub static HERTZ: LazyLock<Unit> = LazyLock::new(|| Unit::base(Dimension::FREQUENCY, "Hertz", "Hz"));
pub static MILLIHERTZ: LazyLock<Unit> = LazyLock::new(|| HERTZ.scaled("Millihertz", "mHz", 0.001));

// Linear velocity

pub static METERS_PER_SECOND: LazyLock<Unit> =
    LazyLock::new(|| Unit::base(Dimension::VELOCITY, "Meter per Second", "m/s"));
pub static FEET_PER_SECOND: LazyLock<Unit> =
    LazyLock::new(|| METERS_PER_SECOND.scaled("Foot per Second", "ft/s", 0.3048));
pub static INCHES_PER_SECOND: LazyLock<Unit> =
    LazyLock::new(|| METERS_PER_SECOND.scaled("Inch per Second", "in/s", 0.0254));

// Angular velocity

pub static RADIANS_PER_SECOND: LazyLock<Unit> =
    LazyLock::new(|| Unit::base(Dimension::ANGULAR_VELOCITY, "Radian per Second", "rad/s"));
pub static DEGREES_PER_SECOND: LazyLock<Unit> =
    LazyLock::new(|| RADIANS_PER_SECOND.scaled("Degree per Second", "°/s", PI / 180.0));
pub static ROTATIONS_PER_SECOND: LazyLock<Unit> =
    LazyLock::new(|| RADIANS_PER_SECOND.scaled("Rotation per Second", "rot/s", TAU));
pub static RPM: LazyLock<Unit> =
    LazyLock::new(|| ROTATIONS_PER_SECOND.scaled("Rotation per Minute", "rpm", 1.0 / 60.0));

// Acceleration

pub static METERS_PER_SECOND_PER_SECOND: LazyLock<Unit> =
    LazyLock::new(|| Unit::base(Dimension::ACCELERATION, "Meter per Second per Second", "m/s²"));
pub static G: LazyLock<Unit> =
    LazyLock::new(|| METERS_PER_SECOND_PER_SECOND.scaled("Standard Gravity", "G", 9.80665));
pub static RADIANS_PER_SECOND_PER_SECOND: LazyLock<Unit> = LazyLock::new(|| {
    Unit::base(Dimension::ANGULAR_ACCELERATION, "Radian per Second per Second", "rad/s²")
});

// Force, energy, power

pub static NEWTONS: LazyLock<Unit> = LazyLock::new(|| Unit::base(Dimension::FORCE, "Newton", "N"));
pub static POUNDS_FORCE: LazyLock<Unit> =
    LazyLock::new(|| NEWTONS.scaled("Pound-force", "lbf", 4.4482216152605));
pub static JOULES: LazyLock<Unit> = LazyLock::new(|| Unit::base(Dimension::ENERGY, "Joule", "J"));
pub static WATTS: LazyLock<Unit> = LazyLock::new(|| Unit::base(Dimension::POWER, "Watt", "W"));

// Electrical

pub static AMPS: LazyLock<Unit> = LazyLock::new(|| Unit::base(Dimension::CURRENT, "Amp", "A"));
pub static MILLIAMPS: LazyLock<Unit> = LazyLock::new(|| AMPS.scaled("Milliamp", "mA", 0.001));
pub static VOLTS: LazyLock<Unit> = LazyLock::new(|| Unit::base(Dimension::VOLTAGE, "Volt", "V"));
pub static MILLIVOLTS: LazyLock<Unit> = LazyLock::new(|| VOLTS.scaled("Millivolt", "mV", 0.001));
pub static OHMS: LazyLock<Unit> = LazyLock::new(|| Unit::base(Dimension::RESISTANCE, "Ohm", "Ω"));

// Temperature

pub static KELVIN: LazyLock<Unit> = LazyLock::new(|| Unit::base(Dimension::TEMPERATURE, "Kelvin", "K"));
pub static CELSIUS: LazyLock<Unit> =
    LazyLock::new(|| KELVIN.with_law("Celsius", "°C", ConversionLaw::affine(1.0, 273.15)));
pub static FAHRENHEIT: LazyLock<Unit> = LazyLock::new(|| {
    CELSIUS.with_law("Fahrenheit", "°F", ConversionLaw::affine(5.0 / 9.0, -160.0 / 9.0))
});

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Lookup of the catalog units by symbol or name
pub struct UnitRegistry {
    units: HashMap<String, Unit>,
    aliases: HashMap<String, String>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Get a unit by symbol, or by case-insensitive name
    pub fn get(&self, key: &str) -> Option<&Unit> {
        if let Some(unit) = self.units.get(key) {
            return Some(unit);
        }
        let symbol = self.aliases.get(&key.to_lowercase())?;
        self.units.get(symbol)
    }

    /// Like [`get`](Self::get), failing with [`GaugeError::UnknownUnit`]
    pub fn require(&self, key: &str) -> Result<&Unit, GaugeError> {
        self.get(key).ok_or_else(|| GaugeError::UnknownUnit(key.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    /// All units measuring `dimension`
    pub fn by_dimension(&self, dimension: Dimension) -> Vec<&Unit> {
        self.units.values().filter(|u| u.dimension() == dimension).collect()
    }

    pub fn symbols(&self) -> Vec<&str> {
        self.units.keys().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn register(&mut self, unit: &Unit) {
        self.aliases.insert(unit.name().to_lowercase(), unit.symbol().to_string());
        self.units.insert(unit.symbol().to_string(), unit.clone());
    }

    fn alias(&mut self, alias: &str, symbol: &str) {
        self.aliases.insert(alias.to_string(), symbol.to_string());
    }

    fn register_all_units(&mut self) {
        self.register_distance_units();
        self.register_time_units();
        self.register_angle_units();
        self.register_mass_units();
        self.register_dimensionless_units();
        self.register_rate_units();
        self.register_mechanical_units();
        self.register_electrical_units();
        self.register_temperature_units();
    }

    fn register_distance_units(&mut self) {
        for unit in [&*METERS, &*MILLIMETERS, &*CENTIMETERS, &*INCHES, &*FEET] {
            self.register(unit);
        }
        self.alias("meters", "m");
        self.alias("feet", "ft");
        self.alias("inches", "in");
    }

    fn register_time_units(&mut self) {
        for unit in [&*SECONDS, &*MILLISECONDS, &*MICROSECONDS, &*MINUTES] {
            self.register(unit);
        }
        self.alias("sec", "s");
        self.alias("µs", "us");
    }

    fn register_angle_units(&mut self) {
        for unit in [&*RADIANS, &*DEGREES, &*ROTATIONS] {
            self.register(unit);
        }
        self.alias("deg", "°");
    }

    fn register_mass_units(&mut self) {
        for unit in [&*KILOGRAMS, &*GRAMS, &*POUNDS, &*OUNCES] {
            self.register(unit);
        }
        self.alias("lbs", "lb");
    }

    fn register_dimensionless_units(&mut self) {
        self.register(&VALUE);
        self.register(&PERCENT);
    }

    fn register_rate_units(&mut self) {
        for unit in [
            &*HERTZ,
            &*MILLIHERTZ,
            &*METERS_PER_SECOND,
            &*FEET_PER_SECOND,
            &*INCHES_PER_SECOND,
            &*RADIANS_PER_SECOND,
            &*DEGREES_PER_SECOND,
            &*ROTATIONS_PER_SECOND,
            &*RPM,
            &*METERS_PER_SECOND_PER_SECOND,
            &*G,
            &*RADIANS_PER_SECOND_PER_SECOND,
        ] {
            self.register(unit);
        }
        self.alias("mps", "m/s");
        self.alias("fps", "ft/s");
        self.alias("deg/s", "°/s");
        self.alias("m/s^2", "m/s²");
        self.alias("rad/s^2", "rad/s²");
    }

    fn register_mechanical_units(&mut self) {
        for unit in [&*NEWTONS, &*POUNDS_FORCE, &*JOULES, &*WATTS] {
            self.register(unit);
        }
    }

    fn register_electrical_units(&mut self) {
        for unit in [&*AMPS, &*MILLIAMPS, &*VOLTS, &*MILLIVOLTS, &*OHMS] {
            self.register(unit);
        }
        self.alias("ohm", "Ω");
    }

    fn register_temperature_units(&mut self) {
        for unit in [&*KELVIN, &*CELSIUS, &*FAHRENHEIT] {
            self.register(unit);
        }
        self.alias("degc", "°C");
        self.alias("degf", "°F");
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Measurable;
    use approx::{assert_relative_eq, relative_eq};

    #[test]
    fn test_every_unit_round_trips() {
        let samples = [0.0, 1.0, -1.0, 0.001, -273.15, 12345.678, 1e9, -1e9];
        for unit in UNITS.iter() {
            for x in samples {
                let back = unit.from_base(unit.to_base(x));
                assert!(
                    relative_eq!(back, x, epsilon = 1e-9, max_relative = 1e-9),
                    "{} round trip of {} gave {}",
                    unit.name(),
                    x,
                    back
                );
            }
        }
    }

    #[test]
    fn test_registry_lookup() {
        assert_eq!(UNITS.get("ft"), Some(&*FEET));
        assert_eq!(UNITS.get("Foot"), Some(&*FEET));
        assert_eq!(UNITS.get("feet"), Some(&*FEET));
        assert_eq!(UNITS.get("rpm"), Some(&*RPM));
        assert!(UNITS.get("furlong").is_none());
    }

    #[test]
    fn test_require_unknown() {
        let err = UNITS.require("furlong").unwrap_err();
        assert!(matches!(err, GaugeError::UnknownUnit(ref s) if s == "furlong"));
        assert!(UNITS.require("m").is_ok());
    }

    #[test]
    fn test_by_dimension() {
        let lengths = UNITS.by_dimension(Dimension::LENGTH);
        assert_eq!(lengths.len(), 5);
        assert!(lengths.iter().all(|u| u.is_equivalent(&METERS)));
        assert_eq!(UNITS.by_dimension(Dimension::TEMPERATURE).len(), 3);
    }

    #[test]
    fn test_symbols_are_unique() {
        // Each catalog unit owns its own key
        assert_eq!(UNITS.len(), 42);
        assert_eq!(UNITS.symbols().len(), UNITS.len());
    }

    #[test]
    fn test_imperial_lengths() {
        assert_relative_eq!(FEET.of(1.0).in_unit(&INCHES), 12.0, max_relative = 1e-12);
        assert_relative_eq!(INCHES.of(1.0).in_unit(&MILLIMETERS), 25.4, max_relative = 1e-12);
    }

    #[test]
    fn test_angles() {
        assert_relative_eq!(DEGREES.of(180.0).in_unit(&RADIANS), PI, max_relative = 1e-12);
        assert_relative_eq!(ROTATIONS.of(1.0).in_unit(&DEGREES), 360.0, max_relative = 1e-12);
        assert_relative_eq!(RPM.of(60.0).in_unit(&RADIANS_PER_SECOND), TAU, max_relative = 1e-12);
    }

    #[test]
    fn test_temperatures() {
        assert_relative_eq!(FAHRENHEIT.of(32.0).in_unit(&KELVIN), 273.15, max_relative = 1e-12);
        assert_relative_eq!(FAHRENHEIT.of(212.0).in_unit(&CELSIUS), 100.0, max_relative = 1e-12);
        assert_relative_eq!(CELSIUS.of(-40.0).in_unit(&FAHRENHEIT), -40.0, max_relative = 1e-12);
    }

    #[test]
    fn test_mass_and_force() {
        assert_relative_eq!(POUNDS.of(1.0).in_unit(&OUNCES), 16.0, max_relative = 1e-12);
        assert_relative_eq!(G.of(1.0).base_unit_magnitude(), 9.80665, max_relative = 1e-12);
        assert_relative_eq!(POUNDS_FORCE.of(1.0).in_unit(&NEWTONS), 4.4482216152605, max_relative = 1e-12);
    }

    #[test]
    fn test_value_has_no_symbol() {
        assert_eq!(format!("{}", VALUE.of(2.0)), "2");
        assert_relative_eq!(PERCENT.of(50.0).in_unit(&VALUE), 0.5, max_relative = 1e-12);
    }
}
