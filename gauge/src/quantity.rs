//! Dimension-checked quantities

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use gauge_core::GaugeError;
use gauge_units::{Measurable, Measure, MutableMeasure, Unit, UnitAlgebra};
use crate::dim::{Dim, MultDim, PerDim, Time};
use crate::TypedUnit;

/// A measure whose dimension is fixed at compile time.
///
/// `plus` and `minus` only accept quantities of the same `D`, so adding a
/// distance to a time does not compile. Products and quotients carry
/// [`MultDim`]/[`PerDim`] tags; [`cast`](Self::cast) re-tags them as a named
/// dimension after a runtime check.
pub struct Quantity<D: Dim> {
    measure: Measure,
    _dim: PhantomData<D>,
}

impl<D: Dim> Quantity<D> {
    pub fn of_relative_units(magnitude: f64, unit: &TypedUnit<D>) -> Self {
        Self::wrap(Measure::of_relative_units(magnitude, unit.unit()))
    }

    pub fn of_base_units(base_magnitude: f64, unit: &TypedUnit<D>) -> Self {
        Self::wrap(Measure::of_base_units(base_magnitude, unit.unit()))
    }

    /// Wrap an untyped measure, failing if it does not measure `D`
    pub fn from_measure(measure: Measure) -> Result<Self, GaugeError> {
        GaugeError::check_same(D::DIMENSION, measure.dimension())?;
        Ok(Self::wrap(measure))
    }

    fn wrap(measure: Measure) -> Self {
        debug_assert_eq!(measure.dimension(), D::DIMENSION);
        Quantity { measure, _dim: PhantomData }
    }

    pub fn as_measure(&self) -> &Measure {
        &self.measure
    }

    pub fn into_measure(self) -> Measure {
        self.measure
    }

    pub fn typed_unit(&self) -> TypedUnit<D> {
        TypedUnit::wrap(self.measure.unit().clone())
    }

    pub fn base_unit(&self) -> TypedUnit<D> {
        TypedUnit::wrap(self.measure.base_unit())
    }

    pub fn in_unit(&self, unit: &TypedUnit<D>) -> f64 {
        self.measure.in_unit(unit.unit())
    }

    /// The same amount expressed in `unit`
    pub fn to_unit(&self, unit: &TypedUnit<D>) -> Self {
        Self::wrap(self.measure.to_unit(unit.unit()))
    }

    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn mutable_copy(&self) -> MutQuantity<D> {
        MutQuantity::wrap(self.measure.mutable_copy())
    }

    pub fn plus(&self, other: &Quantity<D>) -> Self {
        Self::wrap(self.measure.plus(&other.measure))
    }

    pub fn minus(&self, other: &Quantity<D>) -> Self {
        Self::wrap(self.measure.minus(&other.measure))
    }

    pub fn times(&self, multiplier: f64) -> Self {
        Self::wrap(self.measure.times(multiplier))
    }

    pub fn divide(&self, divisor: f64) -> Self {
        Self::wrap(Measurable::divide(&self.measure, divisor))
    }

    pub fn unary_minus(&self) -> Self {
        Self::wrap(self.measure.unary_minus())
    }

    #[deprecated(note = "use `unary_minus` instead")]
    pub fn negate(&self) -> Self {
        self.unary_minus()
    }

    pub fn abs(&self) -> Self {
        Self::wrap(self.measure.abs())
    }

    /// Product with a quantity of any dimension
    pub fn times_quantity<E: Dim>(&self, other: &Quantity<E>, algebra: &UnitAlgebra) -> Quantity<MultDim<D, E>> {
        Quantity::wrap(algebra.times(&self.measure, &other.measure))
    }

    /// Quotient by a quantity of any dimension
    pub fn divide_quantity<E: Dim>(&self, other: &Quantity<E>, algebra: &UnitAlgebra) -> Quantity<PerDim<D, E>> {
        Quantity::wrap(algebra.divide(&self.measure, &other.measure))
    }

    /// This quantity per one `period`
    pub fn per(&self, period: &TypedUnit<Time>, algebra: &UnitAlgebra) -> Quantity<PerDim<D, Time>> {
        Quantity::wrap(algebra.per(&self.measure, period.unit()))
    }

    /// Re-tag as dimension `E`, which must have the same exponents.
    ///
    /// Turns `Quantity<PerDim<Distance, Time>>` into `Quantity<LinearVelocity>`.
    pub fn cast<E: Dim>(self) -> Result<Quantity<E>, GaugeError> {
        Quantity::from_measure(self.measure)
    }
}

impl<D: Dim> Measurable for Quantity<D> {
    fn magnitude(&self) -> f64 {
        self.measure.magnitude()
    }

    fn base_unit_magnitude(&self) -> f64 {
        self.measure.base_unit_magnitude()
    }

    fn unit(&self) -> &Unit {
        self.measure.unit()
    }
}

impl<D: Dim> Clone for Quantity<D> {
    fn clone(&self) -> Self {
        Self::wrap(self.measure.clone())
    }
}

impl<D: Dim> fmt::Debug for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Quantity").field(&self.measure).finish()
    }
}

impl<D: Dim> fmt::Display for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.measure, f)
    }
}

impl<D: Dim> PartialEq for Quantity<D> {
    fn eq(&self, other: &Self) -> bool {
        self.measure == other.measure
    }
}

impl<D: Dim> PartialOrd for Quantity<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.measure.partial_cmp(&other.measure)
    }
}

impl<D: Dim> From<Quantity<D>> for Measure {
    fn from(quantity: Quantity<D>) -> Self {
        quantity.measure
    }
}

impl<D: Dim> Neg for &Quantity<D> {
    type Output = Quantity<D>;

    fn neg(self) -> Quantity<D> {
        self.unary_minus()
    }
}

impl<D: Dim> Add for &Quantity<D> {
    type Output = Quantity<D>;

    fn add(self, other: &Quantity<D>) -> Quantity<D> {
        self.plus(other)
    }
}

impl<D: Dim> Sub for &Quantity<D> {
    type Output = Quantity<D>;

    fn sub(self, other: &Quantity<D>) -> Quantity<D> {
        self.minus(other)
    }
}

impl<D: Dim> Mul<f64> for &Quantity<D> {
    type Output = Quantity<D>;

    fn mul(self, multiplier: f64) -> Quantity<D> {
        self.times(multiplier)
    }
}

impl<D: Dim> Div<f64> for &Quantity<D> {
    type Output = Quantity<D>;

    fn div(self, divisor: f64) -> Quantity<D> {
        self.divide(divisor)
    }
}

/// Mutable counterpart of [`Quantity`], for in-place updates in periodic loops
pub struct MutQuantity<D: Dim> {
    measure: MutableMeasure,
    _dim: PhantomData<D>,
}

impl<D: Dim> MutQuantity<D> {
    pub fn of_relative_units(magnitude: f64, unit: &TypedUnit<D>) -> Self {
        Self::wrap(MutableMeasure::of_relative_units(magnitude, unit.unit()))
    }

    pub fn of_base_units(base_magnitude: f64, unit: &TypedUnit<D>) -> Self {
        Self::wrap(MutableMeasure::of_base_units(base_magnitude, unit.unit()))
    }

    fn wrap(measure: MutableMeasure) -> Self {
        MutQuantity { measure, _dim: PhantomData }
    }

    pub fn as_measure(&self) -> &MutableMeasure {
        &self.measure
    }

    pub fn set_magnitude(&mut self, magnitude: f64) -> &mut Self {
        self.measure.set_magnitude(magnitude);
        self
    }

    pub fn set_base_unit_magnitude(&mut self, base_magnitude: f64) -> &mut Self {
        self.measure.set_base_unit_magnitude(base_magnitude);
        self
    }

    pub fn replace(&mut self, magnitude: f64, unit: &TypedUnit<D>) -> &mut Self {
        self.measure.replace(magnitude, unit.unit());
        self
    }

    pub fn replace_with(&mut self, other: &Quantity<D>) -> &mut Self {
        self.measure.replace_with(other);
        self
    }

    pub fn accumulate(&mut self, raw_magnitude: f64) -> &mut Self {
        self.measure.accumulate(raw_magnitude);
        self
    }

    pub fn in_unit(&self, unit: &TypedUnit<D>) -> f64 {
        self.measure.in_unit(unit.unit())
    }

    /// Immutable snapshot of the current state
    pub fn copy(&self) -> Quantity<D> {
        Quantity::wrap(self.measure.copy())
    }

    pub fn mutable_copy(&self) -> MutQuantity<D> {
        Self::wrap(self.measure.clone())
    }
}

impl<D: Dim> Measurable for MutQuantity<D> {
    fn magnitude(&self) -> f64 {
        self.measure.magnitude()
    }

    fn base_unit_magnitude(&self) -> f64 {
        self.measure.base_unit_magnitude()
    }

    fn unit(&self) -> &Unit {
        self.measure.unit()
    }
}

impl<D: Dim> fmt::Debug for MutQuantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MutQuantity").field(&self.measure).finish()
    }
}

impl<D: Dim> fmt::Display for MutQuantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.measure, f)
    }
}

impl<D: Dim> AddAssign<&Quantity<D>> for MutQuantity<D> {
    fn add_assign(&mut self, other: &Quantity<D>) {
        self.measure += other;
    }
}

impl<D: Dim> SubAssign<&Quantity<D>> for MutQuantity<D> {
    fn sub_assign(&mut self, other: &Quantity<D>) {
        self.measure -= other;
    }
}

impl<D: Dim> MulAssign<f64> for MutQuantity<D> {
    fn mul_assign(&mut self, multiplier: f64) {
        self.measure *= multiplier;
    }
}

impl<D: Dim> DivAssign<f64> for MutQuantity<D> {
    fn div_assign(&mut self, divisor: f64) {
        self.measure /= divisor;
    }
}
