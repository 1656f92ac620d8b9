//! Units bound to a compile-time dimension

use std::fmt;
use std::marker::PhantomData;
use gauge_core::GaugeError;
use gauge_units::Unit;
use crate::{Dim, MutQuantity, Quantity};

/// A [`Unit`] whose dimension is `D`
pub struct TypedUnit<D: Dim> {
    unit: Unit,
    _dim: PhantomData<D>,
}

impl<D: Dim> TypedUnit<D> {
    /// Wrap `unit`, failing if it does not measure `D`
    pub fn new(unit: Unit) -> Result<Self, GaugeError> {
        GaugeError::check_same(D::DIMENSION, unit.dimension())?;
        Ok(Self::wrap(unit))
    }

    pub(crate) fn wrap(unit: Unit) -> Self {
        debug_assert_eq!(unit.dimension(), D::DIMENSION);
        TypedUnit { unit, _dim: PhantomData }
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn into_unit(self) -> Unit {
        self.unit
    }

    pub fn base_unit(&self) -> TypedUnit<D> {
        Self::wrap(self.unit.base_unit())
    }

    /// Declare a new unit that is `factor` of this one
    pub fn scaled(&self, name: &str, symbol: &str, factor: f64) -> TypedUnit<D> {
        Self::wrap(self.unit.scaled(name, symbol, factor))
    }

    pub fn of(&self, magnitude: f64) -> Quantity<D> {
        Quantity::of_relative_units(magnitude, self)
    }

    pub fn of_base_units(&self, base_magnitude: f64) -> Quantity<D> {
        Quantity::of_base_units(base_magnitude, self)
    }

    pub fn mutable(&self, magnitude: f64) -> MutQuantity<D> {
        MutQuantity::of_relative_units(magnitude, self)
    }

    pub fn zero(&self) -> Quantity<D> {
        self.of(0.0)
    }

    pub fn one(&self) -> Quantity<D> {
        self.of(1.0)
    }
}

impl<D: Dim> Clone for TypedUnit<D> {
    fn clone(&self) -> Self {
        Self::wrap(self.unit.clone())
    }
}

impl<D: Dim> PartialEq for TypedUnit<D> {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit
    }
}

impl<D: Dim> fmt::Debug for TypedUnit<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypedUnit").field(&self.unit).finish()
    }
}

impl<D: Dim> fmt::Display for TypedUnit<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.unit, f)
    }
}

impl<D: Dim> AsRef<Unit> for TypedUnit<D> {
    fn as_ref(&self) -> &Unit {
        &self.unit
    }
}
