//! Named results for common cross-dimension products and quotients

use std::collections::HashMap;
use gauge_core::{Dimension, GaugeError, Op};
use tracing::{debug, trace};
use crate::units::{
    HERTZ, JOULES, METERS, METERS_PER_SECOND, METERS_PER_SECOND_PER_SECOND, NEWTONS, OHMS, RADIANS,
    RADIANS_PER_SECOND, RADIANS_PER_SECOND_PER_SECOND, VALUE, VOLTS, WATTS,
};
use crate::Unit;

/// Overrides that turn a generic Mult/Per into a named unit.
///
/// Lookups first consult the explicit table keyed by
/// `(op, left dimension, right dimension)`, then the structural rules:
///
/// - `X / X` is dimensionless
/// - `X * dimensionless` and `dimensionless * X` are `X`
/// - `X / dimensionless` is `X`
///
/// Structural results are expressed in the dimensional operand's own unit.
#[derive(Debug, Clone)]
pub struct NamedResults {
    table: HashMap<(Op, Dimension, Dimension), Unit>,
    structural: bool,
}

impl NamedResults {
    /// No overrides at all; every combination is a generic Mult/Per
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
            structural: false,
        }
    }

    /// The physical identities robot code relies on, plus the structural rules
    pub fn standard() -> Self {
        let mut rules = Self {
            table: HashMap::new(),
            structural: true,
        };

        let distance = Dimension::LENGTH;
        let time = Dimension::TIME;
        let angle = Dimension::ANGLE;
        let mass = Dimension::MASS;
        let current = Dimension::CURRENT;

        rules.insert(Op::Per, distance, time, &METERS_PER_SECOND);
        rules.insert(Op::Per, Dimension::VELOCITY, time, &METERS_PER_SECOND_PER_SECOND);
        rules.insert(Op::Per, angle, time, &RADIANS_PER_SECOND);
        rules.insert_commutative(Op::Mult, angle, Dimension::FREQUENCY, &RADIANS_PER_SECOND);
        rules.insert(Op::Per, Dimension::ANGULAR_VELOCITY, time, &RADIANS_PER_SECOND_PER_SECOND);
        rules.insert(Op::Per, Dimension::DIMENSIONLESS, time, &HERTZ);
        rules.insert_commutative(Op::Mult, time, Dimension::FREQUENCY, &VALUE);
        rules.insert_commutative(Op::Mult, Dimension::VELOCITY, time, &METERS);
        rules.insert_commutative(Op::Mult, Dimension::ANGULAR_VELOCITY, time, &RADIANS);
        rules.insert_commutative(Op::Mult, mass, Dimension::ACCELERATION, &NEWTONS);
        rules.insert_commutative(Op::Mult, Dimension::FORCE, distance, &JOULES);
        rules.insert(Op::Per, Dimension::ENERGY, time, &WATTS);
        rules.insert_commutative(Op::Mult, Dimension::POWER, time, &JOULES);
        rules.insert_commutative(Op::Mult, Dimension::VOLTAGE, current, &WATTS);
        rules.insert(Op::Per, Dimension::VOLTAGE, current, &OHMS);
        rules.insert_commutative(Op::Mult, current, Dimension::RESISTANCE, &VOLTS);

        rules
    }

    /// Add or replace a named result for `left op right`.
    ///
    /// Fails when `result` does not measure the combined dimension.
    pub fn register(&mut self, op: Op, left: Dimension, right: Dimension, result: &Unit) -> Result<(), GaugeError> {
        let expected = op.combine_dimensions(&left, &right);
        GaugeError::check_same(expected, result.dimension())?;
        debug!(%op, left = %left, right = %right, result = %result, "registered named result");
        self.insert(op, left, right, result);
        Ok(())
    }

    /// Turn the structural rules on or off
    pub fn set_structural(&mut self, enabled: bool) {
        self.structural = enabled;
    }

    /// The named unit for `left op right`, if any rule applies
    pub fn lookup(&self, op: Op, left: &Unit, right: &Unit) -> Option<Unit> {
        let (l, r) = (left.dimension(), right.dimension());
        if let Some(unit) = self.table.get(&(op, l, r)) {
            trace!(%op, left = %left, right = %right, result = %unit, "named result");
            return Some(unit.clone());
        }
        if !self.structural {
            return None;
        }

        let unit = match op {
            Op::Per if l == r => VALUE.clone(),
            Op::Mult | Op::Per if r.is_dimensionless() => left.clone(),
            Op::Mult if l.is_dimensionless() => right.clone(),
            _ => return None,
        };
        trace!(%op, left = %left, right = %right, result = %unit, "structural result");
        Some(unit)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Op, Dimension, Dimension, &Unit)> {
        self.table.iter().map(|(&(op, l, r), unit)| (op, l, r, unit))
    }

    fn insert(&mut self, op: Op, left: Dimension, right: Dimension, result: &Unit) {
        self.table.insert((op, left, right), result.clone());
    }

    fn insert_commutative(&mut self, op: Op, left: Dimension, right: Dimension, result: &Unit) {
        self.insert(op, left, right, result);
        self.insert(op, right, left, result);
    }
}

impl Default for NamedResults {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{DEGREES, FEET, KILOGRAMS, PERCENT, SECONDS};

    #[test]
    fn test_standard_rules_are_dimensionally_consistent() {
        let rules = NamedResults::standard();
        for (op, l, r, unit) in rules.iter() {
            assert_eq!(op.combine_dimensions(&l, &r), unit.dimension(), "{} {} {}", l, op, r);
        }
    }

    #[test]
    fn test_distance_per_time() {
        let rules = NamedResults::standard();
        let unit = rules.lookup(Op::Per, &FEET, &SECONDS).unwrap();
        assert_eq!(unit, *METERS_PER_SECOND);
    }

    #[test]
    fn test_commutative_entries() {
        let rules = NamedResults::standard();
        let a = rules.lookup(Op::Mult, &KILOGRAMS, &METERS_PER_SECOND_PER_SECOND).unwrap();
        let b = rules.lookup(Op::Mult, &METERS_PER_SECOND_PER_SECOND, &KILOGRAMS).unwrap();
        assert_eq!(a, *NEWTONS);
        assert_eq!(b, *NEWTONS);
    }

    #[test]
    fn test_structural_rules() {
        let rules = NamedResults::standard();
        assert_eq!(rules.lookup(Op::Per, &FEET, &METERS).unwrap(), *VALUE);
        // the dimensional operand keeps its own unit
        assert_eq!(rules.lookup(Op::Per, &DEGREES, &VALUE).unwrap(), *DEGREES);
        assert_eq!(rules.lookup(Op::Mult, &PERCENT, &FEET).unwrap(), *FEET);
        assert_eq!(rules.lookup(Op::Mult, &FEET, &PERCENT).unwrap(), *FEET);
        // value / time is a frequency, not time
        assert_eq!(rules.lookup(Op::Per, &VALUE, &SECONDS).unwrap(), *HERTZ);
    }

    #[test]
    fn test_no_rule() {
        let rules = NamedResults::standard();
        assert!(rules.lookup(Op::Mult, &FEET, &SECONDS).is_none());
        assert!(rules.lookup(Op::Per, &SECONDS, &FEET).is_none());
    }

    #[test]
    fn test_empty_has_no_structural_rules() {
        let rules = NamedResults::empty();
        assert!(rules.is_empty());
        assert!(rules.lookup(Op::Per, &FEET, &METERS).is_none());
        assert!(rules.lookup(Op::Per, &FEET, &SECONDS).is_none());
    }

    #[test]
    fn test_register_validates_dimension() {
        let mut rules = NamedResults::empty();
        let err = rules
            .register(Op::Per, Dimension::LENGTH, Dimension::TIME, &NEWTONS)
            .unwrap_err();
        assert!(matches!(err, GaugeError::IncompatibleDimensions { .. }));
        assert!(rules.is_empty());

        rules
            .register(Op::Per, Dimension::LENGTH, Dimension::TIME, &METERS_PER_SECOND)
            .unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.lookup(Op::Per, &FEET, &SECONDS).unwrap(), *METERS_PER_SECOND);
    }
}
