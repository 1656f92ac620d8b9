//! Mutable measures for allocation-free updates in control loops

use std::fmt;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};
use crate::{Measurable, Measure, Unit};

/// A measure whose value can be overwritten in place.
///
/// Every mutator takes `&mut self` and writes the magnitude and base
/// magnitude together, so no reader can see one updated without the other.
/// Sharing a mutable measure between tasks needs external synchronization;
/// hand out [`copy`](Measurable::copy) snapshots instead.
#[derive(Debug, Clone)]
pub struct MutableMeasure {
    magnitude: f64,
    base_magnitude: f64,
    unit: Unit,
}

impl MutableMeasure {
    pub fn of_relative_units(magnitude: f64, unit: &Unit) -> Self {
        Self::from_parts(magnitude, unit.to_base(magnitude), unit.clone())
    }

    pub fn of_base_units(base_magnitude: f64, unit: &Unit) -> Self {
        Self::from_parts(unit.from_base(base_magnitude), base_magnitude, unit.clone())
    }

    pub fn zero(unit: &Unit) -> Self {
        Self::of_relative_units(0.0, unit)
    }

    pub(crate) fn from_parts(magnitude: f64, base_magnitude: f64, unit: Unit) -> Self {
        MutableMeasure { magnitude, base_magnitude, unit }
    }

    /// Overwrite the magnitude, keeping the unit
    pub fn set_magnitude(&mut self, magnitude: f64) -> &mut Self {
        self.magnitude = magnitude;
        self.base_magnitude = self.unit.to_base(magnitude);
        self
    }

    /// Overwrite the value by its base unit magnitude, keeping the unit
    pub fn set_base_unit_magnitude(&mut self, base_magnitude: f64) -> &mut Self {
        self.magnitude = self.unit.from_base(base_magnitude);
        self.base_magnitude = base_magnitude;
        self
    }

    /// Overwrite both magnitude and unit
    pub fn replace(&mut self, magnitude: f64, unit: &Unit) -> &mut Self {
        self.unit = unit.clone();
        self.set_magnitude(magnitude)
    }

    /// Take over the full state of another measure
    pub fn replace_with<M: Measurable + ?Sized>(&mut self, other: &M) -> &mut Self {
        self.magnitude = other.magnitude();
        self.base_magnitude = other.base_unit_magnitude();
        self.unit = other.unit().clone();
        self
    }

    /// Add `raw_magnitude` expressed in this measure's own unit
    pub fn accumulate(&mut self, raw_magnitude: f64) -> &mut Self {
        self.set_magnitude(self.magnitude + raw_magnitude)
    }

    /// Immutable snapshot of the current state
    pub fn to_measure(&self) -> Measure {
        self.copy()
    }
}

impl Measurable for MutableMeasure {
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

impl<M: Measurable + ?Sized> AddAssign<&M> for MutableMeasure {
    fn add_assign(&mut self, other: &M) {
        self.set_base_unit_magnitude(self.base_magnitude + other.base_unit_magnitude());
    }
}

impl<M: Measurable + ?Sized> SubAssign<&M> for MutableMeasure {
    fn sub_assign(&mut self, other: &M) {
        self.set_base_unit_magnitude(self.base_magnitude - other.base_unit_magnitude());
    }
}

impl MulAssign<f64> for MutableMeasure {
    fn mul_assign(&mut self, multiplier: f64) {
        self.set_base_unit_magnitude(self.base_magnitude * multiplier);
    }
}

impl DivAssign<f64> for MutableMeasure {
    fn div_assign(&mut self, divisor: f64) {
        self.set_base_unit_magnitude(self.base_magnitude / divisor);
    }
}

impl fmt::Display for MutableMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.symbol().is_empty() {
            write!(f, "{}", self.magnitude)
        } else {
            write!(f, "{} {}", self.magnitude, self.unit.symbol())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{FEET, INCHES, METERS, SECONDS};
    use approx::assert_relative_eq;

    fn assert_consistent(m: &MutableMeasure) {
        assert_relative_eq!(m.base_unit_magnitude(), m.unit().to_base(m.magnitude()), max_relative = 1e-12);
    }

    #[test]
    fn test_set_magnitude() {
        let mut m = FEET.mutable(1.0);
        m.set_magnitude(10.0);
        assert_eq!(m.magnitude(), 10.0);
        assert_relative_eq!(m.base_unit_magnitude(), 3.048, max_relative = 1e-12);
        assert_consistent(&m);
    }

    #[test]
    fn test_set_base_unit_magnitude() {
        let mut m = FEET.mutable(1.0);
        m.set_base_unit_magnitude(0.6096);
        assert_relative_eq!(m.magnitude(), 2.0, max_relative = 1e-12);
        assert_consistent(&m);
    }

    #[test]
    fn test_replace() {
        let mut m = FEET.mutable(1.0);
        m.replace(5.0, &METERS);
        assert_eq!(m.unit(), &*METERS);
        assert_eq!(m.base_unit_magnitude(), 5.0);

        m.replace_with(&INCHES.of(2.0));
        assert_eq!(m.unit(), &*INCHES);
        assert_eq!(m.magnitude(), 2.0);
        assert_consistent(&m);
    }

    #[test]
    fn test_accumulate() {
        let mut m = INCHES.mutable(0.0);
        for _ in 0..12 {
            m.accumulate(1.0);
        }
        assert_eq!(m.magnitude(), 12.0);
        assert_relative_eq!(m.in_unit(&FEET), 1.0, max_relative = 1e-12);
        assert_consistent(&m);
    }

    #[test]
    fn test_compound_assignment() {
        let mut m = METERS.mutable(1.0);
        m += &FEET.of(1.0);
        assert_relative_eq!(m.magnitude(), 1.3048, max_relative = 1e-12);
        m -= &METERS.of(0.3048);
        assert_relative_eq!(m.magnitude(), 1.0, max_relative = 1e-12);
        m *= 4.0;
        m /= 2.0;
        assert_relative_eq!(m.magnitude(), 2.0, max_relative = 1e-12);
        assert_consistent(&m);
    }

    #[test]
    fn test_mutable_to_mutable() {
        let mut a = METERS.mutable(1.0);
        let b = METERS.mutable(2.0);
        a += &b;
        assert_eq!(a.magnitude(), 3.0);
    }

    #[test]
    fn test_snapshot_is_not_aliased() {
        let mut m = SECONDS.mutable(1.0);
        let before = m.to_measure();
        m.set_magnitude(99.0);
        assert_eq!(before.magnitude(), 1.0);
        assert_eq!(m.magnitude(), 99.0);
    }

    #[test]
    fn test_shared_operations_return_immutable() {
        let m = FEET.mutable(2.0);
        let doubled: Measure = m.times(2.0);
        assert_eq!(doubled.magnitude(), 4.0);
        // the mutable measure itself is untouched
        assert_eq!(m.magnitude(), 2.0);
    }

    #[test]
    fn test_zero_and_display() {
        let m = MutableMeasure::zero(&METERS);
        assert_eq!(m.base_unit_magnitude(), 0.0);
        assert_eq!(format!("{}", METERS.mutable(3.0)), "3 m");
        let b = MutableMeasure::of_base_units(0.3048, &FEET);
        assert_relative_eq!(b.magnitude(), 1.0, max_relative = 1e-12);
    }
}
