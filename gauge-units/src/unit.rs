//! Unit representation: identity plus conversion law to the base unit

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use gauge_core::{ConversionLaw, Dimension, Op};
use crate::{Measure, MutableMeasure};

/// A physical unit.
///
/// Units are cheap handles onto shared, immutable definitions. Cloning a
/// unit never copies its definition, and [`Unit::ptr_eq`] tells whether two
/// handles point at the same definition.
///
/// Equality is structural: two named units are equal when they have the
/// same conversion law onto the same base unit, and derived units are equal
/// when they combine equal operands with the same operator.
#[derive(Clone)]
pub struct Unit(Arc<UnitDef>);

struct UnitDef {
    name: String,
    symbol: String,
    dimension: Dimension,
    law: ConversionLaw,
    /// `None` when the unit is its own base
    base: Option<Unit>,
    kind: UnitKind,
}

/// How a unit came to be
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Declared with a name and symbol (meters, feet, meters per second)
    Named,
    /// Synthesized by combining two units
    Derived { op: Op, left: Unit, right: Unit },
}

impl Unit {
    /// Declare the canonical unit of a dimension
    pub fn base(dimension: Dimension, name: &str, symbol: &str) -> Self {
        Self::from_parts(
            name.to_string(),
            symbol.to_string(),
            dimension,
            ConversionLaw::IDENTITY,
            None,
            UnitKind::Named,
        )
    }

    /// Declare a unit that is `factor` of this one (feet = meters scaled by 0.3048)
    pub fn scaled(&self, name: &str, symbol: &str, factor: f64) -> Self {
        self.with_law(name, symbol, ConversionLaw::linear(factor))
    }

    /// Declare a unit whose law is expressed relative to this unit.
    ///
    /// The new unit shares this unit's base, so `law` is composed with this
    /// unit's own law.
    pub fn with_law(&self, name: &str, symbol: &str, law: ConversionLaw) -> Self {
        Self::from_parts(
            name.to_string(),
            symbol.to_string(),
            self.dimension(),
            law.then(&self.law()),
            Some(self.base_unit()),
            UnitKind::Named,
        )
    }

    pub(crate) fn from_parts(
        name: String,
        symbol: String,
        dimension: Dimension,
        law: ConversionLaw,
        base: Option<Unit>,
        kind: UnitKind,
    ) -> Self {
        Unit(Arc::new(UnitDef { name, symbol, dimension, law, base, kind }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn symbol(&self) -> &str {
        &self.0.symbol
    }

    pub fn dimension(&self) -> Dimension {
        self.0.dimension
    }

    pub fn law(&self) -> ConversionLaw {
        self.0.law
    }

    pub fn kind(&self) -> &UnitKind {
        &self.0.kind
    }

    /// Check if this unit was synthesized from two operands
    pub fn is_derived(&self) -> bool {
        matches!(self.0.kind, UnitKind::Derived { .. })
    }

    /// Check if this is the canonical unit of its dimension
    pub fn is_base(&self) -> bool {
        self.0.base.is_none()
    }

    /// The canonical unit of this unit's dimension (itself if already canonical)
    pub fn base_unit(&self) -> Unit {
        match &self.0.base {
            Some(base) => base.clone(),
            None => self.clone(),
        }
    }

    /// Convert a magnitude in this unit to the base unit
    pub fn to_base(&self, magnitude: f64) -> f64 {
        self.0.law.to_base(magnitude)
    }

    /// Convert a base unit magnitude to this unit
    pub fn from_base(&self, base_magnitude: f64) -> f64 {
        self.0.law.from_base(base_magnitude)
    }

    /// Convert a magnitude expressed in `other` into this unit
    pub fn convert_from(&self, magnitude: f64, other: &Unit) -> f64 {
        self.from_base(other.to_base(magnitude))
    }

    /// Check if both units measure against the same base unit
    pub fn is_equivalent(&self, other: &Unit) -> bool {
        base_identity_eq(&self.base_unit(), &other.base_unit())
    }

    /// Check if both handles point at the same definition
    pub fn ptr_eq(a: &Unit, b: &Unit) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// A measure of `magnitude` in this unit
    pub fn of(&self, magnitude: f64) -> Measure {
        Measure::of_relative_units(magnitude, self)
    }

    /// A measure whose base unit magnitude is `base_magnitude`, expressed in this unit
    pub fn of_base_units(&self, base_magnitude: f64) -> Measure {
        Measure::of_base_units(base_magnitude, self)
    }

    /// A mutable measure of `magnitude` in this unit
    pub fn mutable(&self, magnitude: f64) -> MutableMeasure {
        MutableMeasure::of_relative_units(magnitude, self)
    }

    pub fn zero(&self) -> Measure {
        self.of(0.0)
    }

    pub fn one(&self) -> Measure {
        self.of(1.0)
    }
}

/// Identity of two base units.
///
/// Named base units are identified by dimension, name and symbol; derived
/// base units by their operands.
fn base_identity_eq(a: &Unit, b: &Unit) -> bool {
    if Unit::ptr_eq(a, b) {
        return true;
    }
    match (&a.0.kind, &b.0.kind) {
        (UnitKind::Named, UnitKind::Named) => {
            a.0.dimension == b.0.dimension && a.0.name == b.0.name && a.0.symbol == b.0.symbol
        }
        (UnitKind::Derived { .. }, UnitKind::Derived { .. }) => a.0.kind == b.0.kind,
        _ => false,
    }
}

fn hash_base_identity<H: Hasher>(base: &Unit, state: &mut H) {
    match &base.0.kind {
        UnitKind::Named => {
            base.0.dimension.hash(state);
            base.0.name.hash(state);
            base.0.symbol.hash(state);
        }
        UnitKind::Derived { .. } => base.hash(state),
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        if Unit::ptr_eq(self, other) {
            return true;
        }
        match (&self.0.kind, &other.0.kind) {
            (UnitKind::Derived { .. }, UnitKind::Derived { .. }) => self.0.kind == other.0.kind,
            (UnitKind::Named, UnitKind::Named) => {
                self.0.law == other.0.law
                    && self.0.dimension == other.0.dimension
                    && base_identity_eq(&self.base_unit(), &other.base_unit())
            }
            _ => false,
        }
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.0.kind {
            UnitKind::Named => {
                0u8.hash(state);
                self.0.law.hash(state);
                hash_base_identity(&self.base_unit(), state);
            }
            UnitKind::Derived { op, left, right } => {
                1u8.hash(state);
                op.hash(state);
                left.hash(state);
                right.hash(state);
            }
        }
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("name", &self.0.name)
            .field("symbol", &self.0.symbol)
            .field("dimension", &self.0.dimension)
            .field("law", &self.0.law)
            .finish()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.symbol)
    }
}
