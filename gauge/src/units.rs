//! Typed handles onto the standard unit catalog

use std::sync::LazyLock;
use gauge_units::units as catalog;
use crate::dim::*;
use crate::TypedUnit;

macro_rules! typed_units {
    ($($dim:ident { $($name:ident),* $(,)? })*) => {
        $($(
            pub static $name: LazyLock<TypedUnit<$dim>> =
                LazyLock::new(|| TypedUnit::wrap(catalog::$name.clone()));
        )*)*

        #[cfg(test)]
        fn declared() -> Vec<(&'static str, gauge_core::Dimension, gauge_core::Dimension)> {
            vec![$($((stringify!($name), <$dim as Dim>::DIMENSION, catalog::$name.dimension()),)*)*]
        }
    };
}

typed_units! {
    Distance { METERS, MILLIMETERS, CENTIMETERS, INCHES, FEET }
    Time { SECONDS, MILLISECONDS, MICROSECONDS, MINUTES }
    Angle { RADIANS, DEGREES, ROTATIONS }
    Mass { KILOGRAMS, GRAMS, POUNDS, OUNCES }
    Dimensionless { VALUE, PERCENT }
    Frequency { HERTZ, MILLIHERTZ }
    LinearVelocity { METERS_PER_SECOND, FEET_PER_SECOND, INCHES_PER_SECOND }
    AngularVelocity { RADIANS_PER_SECOND, DEGREES_PER_SECOND, ROTATIONS_PER_SECOND, RPM }
    LinearAcceleration { METERS_PER_SECOND_PER_SECOND, G }
    AngularAcceleration { RADIANS_PER_SECOND_PER_SECOND }
    Force { NEWTONS, POUNDS_FORCE }
    Energy { JOULES }
    Power { WATTS }
    Current { AMPS, MILLIAMPS }
    Voltage { VOLTS, MILLIVOLTS }
    Resistance { OHMS }
    Temperature { KELVIN, CELSIUS, FAHRENHEIT }
}
