//! Measures: a magnitude paired with a unit

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use gauge_core::{Dimension, GaugeError};
use crate::{MutableMeasure, Unit, UnitAlgebra};

/// Relative tolerance used by [`Measurable::is_equivalent`]
pub const EQUIVALENCE_TOLERANCE: f64 = 1e-9;

/// Read contract shared by [`Measure`] and [`MutableMeasure`].
///
/// Implementors keep `base_unit_magnitude() == unit().to_base(magnitude())`.
/// All provided operations return a new immutable [`Measure`]; none mutate.
///
/// The engine does not check dimensions on `plus`/`minus`. Adding measures
/// of different dimensions is a caller error; the typed `Quantity` view
/// rules it out statically and [`try_plus`](Self::try_plus) checks it at runtime.
pub trait Measurable {
    /// Magnitude in this measure's own unit
    fn magnitude(&self) -> f64;

    /// Magnitude in the base unit of this measure's dimension
    fn base_unit_magnitude(&self) -> f64;

    fn unit(&self) -> &Unit;

    fn base_unit(&self) -> Unit {
        self.unit().base_unit()
    }

    fn dimension(&self) -> Dimension {
        self.unit().dimension()
    }

    /// Magnitude of this measure expressed in `unit`
    fn in_unit(&self, unit: &Unit) -> f64 {
        unit.from_base(self.base_unit_magnitude())
    }

    /// Independent immutable snapshot
    fn copy(&self) -> Measure {
        Measure::from_parts(self.magnitude(), self.base_unit_magnitude(), self.unit().clone())
    }

    /// Independent mutable measure holding the same state
    fn mutable_copy(&self) -> MutableMeasure {
        MutableMeasure::from_parts(self.magnitude(), self.base_unit_magnitude(), self.unit().clone())
    }

    /// Sum, expressed in this measure's unit
    fn plus<M: Measurable + ?Sized>(&self, other: &M) -> Measure {
        self.unit().of_base_units(self.base_unit_magnitude() + other.base_unit_magnitude())
    }

    /// Difference, expressed in this measure's unit
    fn minus<M: Measurable + ?Sized>(&self, other: &M) -> Measure {
        self.unit().of_base_units(self.base_unit_magnitude() - other.base_unit_magnitude())
    }

    /// [`plus`](Self::plus), failing when the dimensions differ
    fn try_plus<M: Measurable + ?Sized>(&self, other: &M) -> Result<Measure, GaugeError> {
        GaugeError::check_same(self.dimension(), other.dimension())?;
        Ok(self.plus(other))
    }

    /// [`minus`](Self::minus), failing when the dimensions differ
    fn try_minus<M: Measurable + ?Sized>(&self, other: &M) -> Result<Measure, GaugeError> {
        GaugeError::check_same(self.dimension(), other.dimension())?;
        Ok(self.minus(other))
    }

    fn times(&self, multiplier: f64) -> Measure {
        self.unit().of_base_units(self.base_unit_magnitude() * multiplier)
    }

    fn divide(&self, divisor: f64) -> Measure {
        self.unit().of_base_units(self.base_unit_magnitude() / divisor)
    }

    fn unary_minus(&self) -> Measure {
        self.unit().of_base_units(0.0 - self.base_unit_magnitude())
    }

    #[deprecated(note = "use `unary_minus` instead")]
    fn negate(&self) -> Measure {
        self.unary_minus()
    }

    fn abs(&self) -> Measure {
        self.unit().of_base_units(self.base_unit_magnitude().abs())
    }

    /// Product with another measure of any dimension
    fn times_measure<M: Measurable + ?Sized>(&self, other: &M, algebra: &UnitAlgebra) -> Measure {
        algebra.times(self, other)
    }

    /// Quotient by another measure of any dimension.
    ///
    /// Dividing by a zero measure gives an infinite or NaN magnitude.
    fn divide_measure<M: Measurable + ?Sized>(&self, other: &M, algebra: &UnitAlgebra) -> Measure {
        algebra.divide(self, other)
    }

    /// This quantity per one `period` (a time unit)
    fn per(&self, period: &Unit, algebra: &UnitAlgebra) -> Measure {
        algebra.per(self, period)
    }

    /// Check if `other` is within `fraction` of its own magnitude of this measure.
    ///
    /// `a.is_near(&b, 0.05)` is true when `a` is within 5% of `b`.
    fn is_near<M: Measurable + ?Sized>(&self, other: &M, fraction: f64) -> bool {
        if self.dimension() != other.dimension() {
            return false;
        }
        let diff = (self.base_unit_magnitude() - other.base_unit_magnitude()).abs();
        diff <= (other.base_unit_magnitude() * fraction).abs()
    }

    /// Check if both measures differ by at most `tolerance`
    fn is_near_within<M, T>(&self, other: &M, tolerance: &T) -> bool
    where
        M: Measurable + ?Sized,
        T: Measurable + ?Sized,
    {
        if self.dimension() != other.dimension() || self.dimension() != tolerance.dimension() {
            return false;
        }
        let diff = (self.base_unit_magnitude() - other.base_unit_magnitude()).abs();
        diff <= tolerance.base_unit_magnitude().abs()
    }

    /// Check if both measures describe the same amount, up to
    /// [`EQUIVALENCE_TOLERANCE`] relative difference
    fn is_equivalent<M: Measurable + ?Sized>(&self, other: &M) -> bool {
        if self.dimension() != other.dimension() {
            return false;
        }
        let (a, b) = (self.base_unit_magnitude(), other.base_unit_magnitude());
        if a == b {
            return true;
        }
        (a - b).abs() <= EQUIVALENCE_TOLERANCE * a.abs().max(b.abs())
    }

    /// Order by base magnitude; `None` across dimensions or for NaN
    fn compare_to<M: Measurable + ?Sized>(&self, other: &M) -> Option<Ordering> {
        if self.dimension() != other.dimension() {
            return None;
        }
        self.base_unit_magnitude().partial_cmp(&other.base_unit_magnitude())
    }

    /// e.g. `1.234e1 m`
    fn to_short_string(&self) -> String {
        format!("{:.3e} {}", self.magnitude(), self.unit().symbol())
    }

    /// e.g. `12.34 Meter`
    fn to_long_string(&self) -> String {
        format!("{} {}", self.magnitude(), self.unit().name())
    }
}

/// An immutable measure.
///
/// Every operation returns a new measure. Measures share their unit with
/// every other measure of the same unit.
#[derive(Debug, Clone)]
pub struct Measure {
    magnitude: f64,
    base_magnitude: f64,
    unit: Unit,
}

impl Measure {
    /// A measure of `magnitude` in `unit`
    pub fn of_relative_units(magnitude: f64, unit: &Unit) -> Self {
        Self::from_parts(magnitude, unit.to_base(magnitude), unit.clone())
    }

    /// A measure whose base magnitude is `base_magnitude`, expressed in `unit`
    pub fn of_base_units(base_magnitude: f64, unit: &Unit) -> Self {
        Self::from_parts(unit.from_base(base_magnitude), base_magnitude, unit.clone())
    }

    pub(crate) fn from_parts(magnitude: f64, base_magnitude: f64, unit: Unit) -> Self {
        Measure { magnitude, base_magnitude, unit }
    }

    /// The same amount, expressed in another unit of the same dimension
    pub fn to_unit(&self, unit: &Unit) -> Measure {
        Measure::of_base_units(self.base_magnitude, unit)
    }
}

impl Measurable for Measure {
    fn magnitude(&self) -> f64 {
        self.magnitude
    }

    fn base_unit_magnitude(&self) -> f64 {
        self.base_magnitude
    }

    fn unit(&self) -> &Unit {
        &self.unit
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.symbol().is_empty() {
            write!(f, "{}", self.magnitude)
        } else {
            write!(f, "{} {}", self.magnitude, self.unit.symbol())
        }
    }
}

impl PartialEq for Measure {
    fn eq(&self, other: &Self) -> bool {
        // Compare base values, like 1 km == 1000 m
        self.unit.is_equivalent(&other.unit) && self.base_magnitude == other.base_magnitude
    }
}

impl PartialOrd for Measure {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.unit.is_equivalent(&other.unit) {
            return None;
        }
        self.base_magnitude.partial_cmp(&other.base_magnitude)
    }
}

impl Neg for &Measure {
    type Output = Measure;

    fn neg(self) -> Measure {
        self.unary_minus()
    }
}

impl Neg for Measure {
    type Output = Measure;

    fn neg(self) -> Measure {
        self.unary_minus()
    }
}

impl<M: Measurable> Add<&M> for &Measure {
    type Output = Measure;

    fn add(self, other: &M) -> Measure {
        self.plus(other)
    }
}

impl<M: Measurable> Sub<&M> for &Measure {
    type Output = Measure;

    fn sub(self, other: &M) -> Measure {
        self.minus(other)
    }
}

impl Mul<f64> for &Measure {
    type Output = Measure;

    fn mul(self, multiplier: f64) -> Measure {
        self.times(multiplier)
    }
}

impl Div<f64> for &Measure {
    type Output = Measure;

    fn div(self, divisor: f64) -> Measure {
        Measurable::divide(self, divisor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{FEET, INCHES, KILOGRAMS, METERS, SECONDS};
    use approx::{assert_relative_eq, relative_eq};
    use proptest::prelude::*;

    #[test]
    fn test_of_relative_units() {
        let m = FEET.of(10.0);
        assert_eq!(m.magnitude(), 10.0);
        assert_relative_eq!(m.base_unit_magnitude(), 3.048, max_relative = 1e-12);
        assert_eq!(m.unit(), &*FEET);
        assert_eq!(m.base_unit(), *METERS);
    }

    #[test]
    fn test_of_base_units() {
        let m = Measure::of_base_units(3.048, &FEET);
        assert_relative_eq!(m.magnitude(), 10.0, max_relative = 1e-12);
        assert_eq!(m.base_unit_magnitude(), 3.048);
    }

    #[test]
    fn test_in_unit() {
        let m = METERS.of(1.0);
        assert_relative_eq!(m.in_unit(&INCHES), 39.37007874015748, max_relative = 1e-12);
        assert_relative_eq!(m.in_unit(&METERS), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_plus_mixed_units() {
        // 1 m + 1 ft, expressed in meters
        let sum = METERS.of(1.0).plus(&FEET.of(1.0));
        assert_eq!(sum.unit(), &*METERS);
        assert_relative_eq!(sum.magnitude(), 1.3048, max_relative = 1e-12);

        // and the other way round, expressed in feet
        let sum = FEET.of(1.0).plus(&METERS.of(1.0));
        assert_eq!(sum.unit(), &*FEET);
        assert_relative_eq!(sum.base_unit_magnitude(), 1.3048, max_relative = 1e-12);
    }

    #[test]
    fn test_minus() {
        let diff = FEET.of(3.0).minus(&INCHES.of(12.0));
        assert_relative_eq!(diff.magnitude(), 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_try_plus_rejects_other_dimensions() {
        let err = METERS.of(1.0).try_plus(&SECONDS.of(1.0)).unwrap_err();
        assert!(matches!(err, GaugeError::IncompatibleDimensions { .. }));
        assert!(METERS.of(1.0).try_minus(&FEET.of(1.0)).is_ok());
    }

    #[test]
    fn test_scalar_ops() {
        let m = FEET.of(2.0);
        assert_relative_eq!(m.times(3.0).magnitude(), 6.0, max_relative = 1e-12);
        assert_relative_eq!(m.divide(4.0).magnitude(), 0.5, max_relative = 1e-12);
        assert_relative_eq!((&m * 3.0).magnitude(), 6.0, max_relative = 1e-12);
        assert_relative_eq!((&m / 4.0).magnitude(), 0.5, max_relative = 1e-12);
    }

    #[test]
    fn test_divide_by_zero_scalar() {
        let m = METERS.of(1.0).divide(0.0);
        assert_eq!(m.magnitude(), f64::INFINITY);
        assert!(METERS.of(0.0).divide(0.0).magnitude().is_nan());
    }

    #[test]
    #[allow(deprecated)]
    fn test_negate_matches_unary_minus() {
        let m = FEET.of(2.5);
        assert_eq!(m.negate(), m.unary_minus());
        assert_eq!(-&m, m.unary_minus());
        assert_relative_eq!(m.unary_minus().magnitude(), -2.5, max_relative = 1e-12);
    }

    #[test]
    fn test_abs() {
        assert_relative_eq!(FEET.of(-2.0).abs().magnitude(), 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_operators() {
        let a = METERS.of(2.0);
        let b = FEET.of(1.0);
        assert_relative_eq!((&a + &b).magnitude(), 2.3048, max_relative = 1e-12);
        assert_relative_eq!((&a - &b).magnitude(), 1.6952, max_relative = 1e-12);
    }

    #[test]
    fn test_equality_across_units() {
        assert_eq!(METERS.of(0.3048), FEET.of(1.0));
        assert_ne!(METERS.of(1.0), SECONDS.of(1.0));
        assert_ne!(METERS.of(1.0), METERS.of(2.0));
    }

    #[test]
    fn test_ordering() {
        assert!(FEET.of(1.0) < METERS.of(1.0));
        assert!(METERS.of(1.0) > INCHES.of(1.0));
        assert_eq!(METERS.of(1.0).partial_cmp(&SECONDS.of(1.0)), None);
        assert_eq!(METERS.of(1.0).compare_to(&KILOGRAMS.of(1.0)), None);
        assert_eq!(FEET.of(12.0).compare_to(&INCHES.of(1.0)), Some(Ordering::Greater));
    }

    #[test]
    fn test_is_near() {
        let a = METERS.of(1.0);
        assert!(a.is_near(&METERS.of(1.04), 0.05));
        assert!(!a.is_near(&METERS.of(1.2), 0.05));
        assert!(!a.is_near(&SECONDS.of(1.0), 0.5));
    }

    #[test]
    fn test_is_near_within() {
        let a = METERS.of(1.0);
        let b = METERS.of(1.01);
        assert!(a.is_near_within(&b, &INCHES.of(1.0)));
        assert!(!a.is_near_within(&b, &INCHES.of(0.1)));
        assert!(!a.is_near_within(&b, &SECONDS.of(1.0)));
    }

    #[test]
    fn test_is_equivalent() {
        assert!(INCHES.of(12.0).is_equivalent(&FEET.of(1.0)));
        assert!(!INCHES.of(12.0).is_equivalent(&FEET.of(1.001)));
        assert!(!METERS.of(1.0).is_equivalent(&SECONDS.of(1.0)));
    }

    #[test]
    fn test_nan_propagates() {
        let m = METERS.of(f64::NAN);
        assert!(m.base_unit_magnitude().is_nan());
        assert!(m.plus(&METERS.of(1.0)).magnitude().is_nan());
        assert!(METERS.of(f64::INFINITY).times(2.0).magnitude().is_infinite());
    }

    #[test]
    fn test_copy_is_independent_snapshot() {
        let m = FEET.of(4.0);
        let c = m.copy();
        assert_eq!(c.magnitude(), 4.0);
        assert!(Unit::ptr_eq(c.unit(), m.unit()));
    }

    #[test]
    fn test_mutable_copy_isolation() {
        let m = FEET.of(4.0);
        let mut mutable = m.mutable_copy();
        mutable.set_magnitude(10.0);
        assert_eq!(mutable.magnitude(), 10.0);
        assert_eq!(m.magnitude(), 4.0);
        assert_relative_eq!(m.base_unit_magnitude(), 4.0 * 0.3048, max_relative = 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", METERS.of(5.0)), "5 m");
        assert_eq!(METERS.of(12.34).to_short_string(), "1.234e1 m");
        assert_eq!(METERS.of(12.34).to_long_string(), "12.34 Meter");
    }

    proptest! {
        #[test]
        fn prop_additive_inverse(x in -1e12f64..1e12) {
            let m = FEET.of(x);
            prop_assert_eq!(m.plus(&m.unary_minus()).base_unit_magnitude(), 0.0);
        }

        #[test]
        fn prop_scaling_is_linear(x in -1e9f64..1e9, k in -1e6f64..1e6) {
            let m = INCHES.of(x);
            prop_assert_eq!(m.times(k).base_unit_magnitude(), m.base_unit_magnitude() * k);
        }

        #[test]
        fn prop_in_unit_round_trip(x in -1e12f64..1e12) {
            let m = FEET.of(x);
            prop_assert!(relative_eq!(m.in_unit(&FEET), x, epsilon = 1e-9, max_relative = 1e-9));
        }
    }
}
