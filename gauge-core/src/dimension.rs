//! Dimensional analysis types
//!
//! Each physical quantity has dimensions represented as an 8-element vector:
//! [length, mass, time, current, temperature, amount, luminosity, angle]
//!
//! Angle gets its own axis so that angles, plain ratios and frequencies
//! stay distinguishable (rad/s is not Hz).

use std::fmt;
use serde::{Serialize, Deserialize};

/// Number of base quantities tracked by [`Dimension`]
pub const BASE_QUANTITIES: usize = 8;

/// Dimension indices for the base quantities
pub const LENGTH: usize = 0;
pub const MASS: usize = 1;
pub const TIME: usize = 2;
pub const CURRENT: usize = 3;
pub const TEMPERATURE: usize = 4;
pub const AMOUNT: usize = 5;
pub const LUMINOSITY: usize = 6;
pub const ANGLE: usize = 7;

/// Represents the dimensions of a physical quantity
/// as exponents of the base dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// [length, mass, time, current, temperature, amount, luminosity, angle]
    pub exponents: [i32; BASE_QUANTITIES],
}

impl Dimension {
    /// Dimensionless quantity (all exponents zero)
    pub const DIMENSIONLESS: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 0, 0]);

    /// Length dimension [L]
    pub const LENGTH: Dimension = Dimension::new([1, 0, 0, 0, 0, 0, 0, 0]);

    /// Mass dimension [M]
    pub const MASS: Dimension = Dimension::new([0, 1, 0, 0, 0, 0, 0, 0]);

    /// Time dimension [T]
    pub const TIME: Dimension = Dimension::new([0, 0, 1, 0, 0, 0, 0, 0]);

    /// Electric current dimension [I]
    pub const CURRENT: Dimension = Dimension::new([0, 0, 0, 1, 0, 0, 0, 0]);

    /// Temperature dimension [Θ]
    pub const TEMPERATURE: Dimension = Dimension::new([0, 0, 0, 0, 1, 0, 0, 0]);

    /// Amount of substance dimension [N]
    pub const AMOUNT: Dimension = Dimension::new([0, 0, 0, 0, 0, 1, 0, 0]);

    /// Luminous intensity dimension [J]
    pub const LUMINOSITY: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 1, 0]);

    /// Plane angle [A]
    pub const ANGLE: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 0, 1]);

    /// Linear velocity [L T^-1]
    pub const VELOCITY: Dimension = Dimension::new([1, 0, -1, 0, 0, 0, 0, 0]);

    /// Linear acceleration [L T^-2]
    pub const ACCELERATION: Dimension = Dimension::new([1, 0, -2, 0, 0, 0, 0, 0]);

    /// Angular velocity [A T^-1]
    pub const ANGULAR_VELOCITY: Dimension = Dimension::new([0, 0, -1, 0, 0, 0, 0, 1]);

    /// Angular acceleration [A T^-2]
    pub const ANGULAR_ACCELERATION: Dimension = Dimension::new([0, 0, -2, 0, 0, 0, 0, 1]);

    /// Frequency [T^-1]
    pub const FREQUENCY: Dimension = Dimension::new([0, 0, -1, 0, 0, 0, 0, 0]);

    /// Force [M L T^-2]
    pub const FORCE: Dimension = Dimension::new([1, 1, -2, 0, 0, 0, 0, 0]);

    /// Energy [M L^2 T^-2]
    pub const ENERGY: Dimension = Dimension::new([2, 1, -2, 0, 0, 0, 0, 0]);

    /// Power [M L^2 T^-3]
    pub const POWER: Dimension = Dimension::new([2, 1, -3, 0, 0, 0, 0, 0]);

    /// Voltage [M L^2 T^-3 I^-1]
    pub const VOLTAGE: Dimension = Dimension::new([2, 1, -3, -1, 0, 0, 0, 0]);

    /// Resistance [M L^2 T^-3 I^-2]
    pub const RESISTANCE: Dimension = Dimension::new([2, 1, -3, -2, 0, 0, 0, 0]);

    /// Create a new dimension from exponents
    pub const fn new(exponents: [i32; BASE_QUANTITIES]) -> Self {
        Dimension { exponents }
    }

    /// Check if this is a dimensionless quantity
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Multiply dimensions (add exponents)
    pub const fn multiply(&self, other: &Dimension) -> Dimension {
        let mut result = [0i32; BASE_QUANTITIES];
        let mut i = 0;
        while i < BASE_QUANTITIES {
            result[i] = self.exponents[i] + other.exponents[i];
            i += 1;
        }
        Dimension { exponents: result }
    }

    /// Divide dimensions (subtract exponents)
    pub const fn divide(&self, other: &Dimension) -> Dimension {
        let mut result = [0i32; BASE_QUANTITIES];
        let mut i = 0;
        while i < BASE_QUANTITIES {
            result[i] = self.exponents[i] - other.exponents[i];
            i += 1;
        }
        Dimension { exponents: result }
    }

    /// Raise to integer power (multiply exponents)
    pub const fn power(&self, exp: i32) -> Dimension {
        let mut result = [0i32; BASE_QUANTITIES];
        let mut i = 0;
        while i < BASE_QUANTITIES {
            result[i] = self.exponents[i] * exp;
            i += 1;
        }
        Dimension { exponents: result }
    }

    /// Invert dimensions (negate exponents)
    pub const fn invert(&self) -> Dimension {
        self.power(-1)
    }

    /// Get the dimension name if it matches a common dimension
    pub fn name(&self) -> Option<&'static str> {
        match self.exponents {
            [0, 0, 0, 0, 0, 0, 0, 0] => Some("dimensionless"),
            [1, 0, 0, 0, 0, 0, 0, 0] => Some("length"),
            [0, 1, 0, 0, 0, 0, 0, 0] => Some("mass"),
            [0, 0, 1, 0, 0, 0, 0, 0] => Some("time"),
            [0, 0, 0, 1, 0, 0, 0, 0] => Some("current"),
            [0, 0, 0, 0, 1, 0, 0, 0] => Some("temperature"),
            [0, 0, 0, 0, 0, 1, 0, 0] => Some("amount"),
            [0, 0, 0, 0, 0, 0, 1, 0] => Some("luminosity"),
            [0, 0, 0, 0, 0, 0, 0, 1] => Some("angle"),
            [1, 0, -1, 0, 0, 0, 0, 0] => Some("velocity"),
            [1, 0, -2, 0, 0, 0, 0, 0] => Some("acceleration"),
            [0, 0, -1, 0, 0, 0, 0, 1] => Some("angular velocity"),
            [0, 0, -2, 0, 0, 0, 0, 1] => Some("angular acceleration"),
            [0, 0, -1, 0, 0, 0, 0, 0] => Some("frequency"),
            [1, 1, -2, 0, 0, 0, 0, 0] => Some("force"),
            [2, 1, -2, 0, 0, 0, 0, 0] => Some("energy"),
            [2, 1, -3, 0, 0, 0, 0, 0] => Some("power"),
            [2, 1, -3, -1, 0, 0, 0, 0] => Some("voltage"),
            [2, 1, -3, -2, 0, 0, 0, 0] => Some("resistance"),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = ["L", "M", "T", "I", "Θ", "N", "J", "A"];
        let mut parts = Vec::new();

        for (i, &exp) in self.exponents.iter().enumerate() {
            if exp != 0 {
                if exp == 1 {
                    parts.push(names[i].to_string());
                } else {
                    parts.push(format!("{}^{}", names[i], exp));
                }
            }
        }

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}
