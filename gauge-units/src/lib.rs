//! Gauge Units - Units, Measures and the Derived-Unit Algebra
//!
//! Every unit converts to and from the base unit of its dimension, and every
//! measure stores its magnitude in both scales. Multiplying or dividing
//! measures of any two dimensions goes through a [`UnitAlgebra`], which
//! either picks a named result (distance / time is meters per second) or
//! synthesizes a derived Mult/Per unit and caches it so the same combination
//! always yields the same unit instance.
//!
//! Catalog:
//! - Distance (m, mm, cm, in, ft)
//! - Time (s, ms, us, min)
//! - Angle (rad, °, rot)
//! - Mass (kg, g, lb, oz)
//! - Dimensionless (value, %)
//! - Rates (Hz, m/s, ft/s, rad/s, rpm, m/s², G, rad/s²)
//! - Mechanical (N, lbf, J, W)
//! - Electrical (A, mA, V, mV, Ω)
//! - Temperature (K, °C, °F)

mod unit;
mod combine;
mod cache;
mod measure;
mod mutable;
mod rules;
mod config;
mod algebra;
pub mod units;

pub use unit::{Unit, UnitKind};
pub use combine::synthesize;
pub use cache::{DerivedUnitCache, DEFAULT_WARN_THRESHOLD};
pub use measure::{Measurable, Measure, EQUIVALENCE_TOLERANCE};
pub use mutable::MutableMeasure;
pub use rules::NamedResults;
pub use config::{AlgebraConfig, CONFIG_ENV};
pub use algebra::UnitAlgebra;
pub use units::{UnitRegistry, UNITS};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Measurable, Measure, MutableMeasure, Unit, UnitAlgebra};
    pub use gauge_core::prelude::*;
}
