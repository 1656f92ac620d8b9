//! Conversion laws between a unit and its dimension's base unit

use std::fmt;
use std::hash::{Hash, Hasher};
use serde::{Serialize, Deserialize};

/// Affine conversion to the base unit: `base = value * factor + offset`
///
/// Proportional units (meters, feet, radians) have a zero offset. Offsets
/// exist for interval scales such as Celsius and Fahrenheit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConversionLaw {
    /// Multiplier applied to a magnitude in this unit
    pub factor: f64,
    /// Added after scaling
    #[serde(default)]
    pub offset: f64,
}

impl ConversionLaw {
    /// The law of a base unit
    pub const IDENTITY: ConversionLaw = ConversionLaw { factor: 1.0, offset: 0.0 };

    /// Proportional conversion (no offset)
    pub const fn linear(factor: f64) -> Self {
        ConversionLaw { factor, offset: 0.0 }
    }

    /// Conversion with an offset (for temperature scales)
    pub const fn affine(factor: f64, offset: f64) -> Self {
        ConversionLaw { factor, offset }
    }

    /// Convert a magnitude in this unit to the base unit
    pub fn to_base(&self, magnitude: f64) -> f64 {
        magnitude * self.factor + self.offset
    }

    /// Convert a base unit magnitude back into this unit
    pub fn from_base(&self, base_magnitude: f64) -> f64 {
        (base_magnitude - self.offset) / self.factor
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Check if this law has no offset
    pub fn is_linear(&self) -> bool {
        self.offset == 0.0
    }

    /// Compose two laws: apply `self`, then `outer`.
    ///
    /// Used to declare a unit relative to a non-base unit, e.g. inches
    /// (1/12 of a foot) where feet are 0.3048 of a meter.
    pub fn then(&self, outer: &ConversionLaw) -> ConversionLaw {
        ConversionLaw {
            factor: outer.factor * self.factor,
            offset: outer.factor * self.offset + outer.offset,
        }
    }
}

impl Default for ConversionLaw {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Bit pattern with -0.0 folded into 0.0
fn canonical_bits(value: f64) -> u64 {
    (value + 0.0).to_bits()
}

impl PartialEq for ConversionLaw {
    fn eq(&self, other: &Self) -> bool {
        canonical_bits(self.factor) == canonical_bits(other.factor)
            && canonical_bits(self.offset) == canonical_bits(other.offset)
    }
}

impl Eq for ConversionLaw {}

impl Hash for ConversionLaw {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.factor).hash(state);
        canonical_bits(self.offset).hash(state);
    }
}

impl fmt::Display for ConversionLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_linear() {
            write!(f, "x * {}", self.factor)
        } else {
            write!(f, "x * {} + {}", self.factor, self.offset)
        }
    }
}
