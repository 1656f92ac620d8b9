//! Gauge - Statically Typed Physical Quantities
//!
//! A thin typed layer over [`gauge_units`]: a [`Quantity<D>`] is a measure
//! whose dimension `D` is checked by the compiler. Cross-dimension products
//! and quotients still run through a [`UnitAlgebra`], so they share its
//! derived-unit cache and named results.
//!
//! ```
//! use gauge::prelude::*;
//! use gauge::units::{FEET, SECONDS, FEET_PER_SECOND};
//!
//! let algebra = UnitAlgebra::new();
//! let speed: Quantity<LinearVelocity> = FEET
//!     .of(30.0)
//!     .divide_quantity(&SECONDS.of(2.0), &algebra)
//!     .cast()
//!     .unwrap();
//! assert!((speed.in_unit(&FEET_PER_SECOND) - 15.0).abs() < 1e-9);
//! ```

mod dim;
mod unit;
mod quantity;
pub mod units;

pub use dim::{
    Angle, AngularAcceleration, AngularVelocity, Current, Dim, Dimensionless, Distance, Energy, Force,
    Frequency, LinearAcceleration, LinearVelocity, Mass, MultDim, PerDim, Power, Rate, Resistance,
    Temperature, Time, Voltage,
};
pub use unit::TypedUnit;
pub use quantity::{MutQuantity, Quantity};

pub use gauge_core::{ConversionLaw, Dimension, GaugeError, Op};
pub use gauge_units::{
    AlgebraConfig, DerivedUnitCache, Measurable, Measure, MutableMeasure, NamedResults, Unit, UnitAlgebra,
    UNITS,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::dim::*;
    pub use crate::{MutQuantity, Quantity, TypedUnit};
    pub use gauge_units::prelude::*;
}
