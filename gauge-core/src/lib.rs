//! Gauge Core - Fundamental types
//!
//! This crate provides the core types used throughout Gauge:
//! - `Dimension`: Exponent vector over the base quantities
//! - `ConversionLaw`: How a unit maps onto its dimension's base unit
//! - `Op`: Mult/Per, the operators that synthesize derived units
//! - `GaugeError`: Errors from checked operations, lookup and config

mod dimension;
mod law;
mod op;
mod error;

pub use dimension::{Dimension, BASE_QUANTITIES};
pub use law::ConversionLaw;
pub use op::Op;
pub use error::GaugeError;

/// Exponent indices into [`Dimension::exponents`]
pub mod axis {
    pub use crate::dimension::{LENGTH, MASS, TIME, CURRENT, TEMPERATURE, AMOUNT, LUMINOSITY, ANGLE};
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Dimension, ConversionLaw, Op, GaugeError};
}
