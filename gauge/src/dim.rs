//! Type-level dimension tags

use std::marker::PhantomData;
use gauge_core::Dimension;

/// A dimension known at compile time.
///
/// Tags carry no data. They only pick which [`Quantity`](crate::Quantity)
/// values may be added to one another.
pub trait Dim: 'static {
    const DIMENSION: Dimension;
}

macro_rules! dims {
    ($($(#[$meta:meta])* $name:ident => $dimension:expr),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $name;

            impl Dim for $name {
                const DIMENSION: Dimension = $dimension;
            }
        )*
    };
}

dims! {
    /// Pure numbers, ratios and percentages
    Dimensionless => Dimension::DIMENSIONLESS,
    Distance => Dimension::LENGTH,
    Time => Dimension::TIME,
    Angle => Dimension::ANGLE,
    Mass => Dimension::MASS,
    Frequency => Dimension::FREQUENCY,
    LinearVelocity => Dimension::VELOCITY,
    AngularVelocity => Dimension::ANGULAR_VELOCITY,
    LinearAcceleration => Dimension::ACCELERATION,
    AngularAcceleration => Dimension::ANGULAR_ACCELERATION,
    Force => Dimension::FORCE,
    Energy => Dimension::ENERGY,
    Power => Dimension::POWER,
    Current => Dimension::CURRENT,
    Voltage => Dimension::VOLTAGE,
    Resistance => Dimension::RESISTANCE,
    Temperature => Dimension::TEMPERATURE,
}

/// Product of two dimensions (`A * B`)
pub struct MultDim<A, B>(PhantomData<fn() -> (A, B)>);

/// Quotient of two dimensions (`A / B`)
pub struct PerDim<A, B>(PhantomData<fn() -> (A, B)>);

impl<A: Dim, B: Dim> Dim for MultDim<A, B> {
    const DIMENSION: Dimension = A::DIMENSION.multiply(&B::DIMENSION);
}

impl<A: Dim, B: Dim> Dim for PerDim<A, B> {
    const DIMENSION: Dimension = A::DIMENSION.divide(&B::DIMENSION);
}

/// `PerDim<D, Time>`, the result of `per` on a time unit
pub type Rate<D> = PerDim<D, Time>;
