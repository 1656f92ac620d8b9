//! Operators that synthesize derived units

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::Dimension;

/// How two operand units are combined into a derived unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    /// Product of two units (N·m)
    Mult,
    /// Quotient of two units (m/s)
    Per,
}

impl Op {
    /// Apply the operator to two magnitudes
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Op::Mult => left * right,
            Op::Per => left / right,
        }
    }

    /// Dimension of the result of combining `left` and `right`
    pub const fn combine_dimensions(self, left: &Dimension, right: &Dimension) -> Dimension {
        match self {
            Op::Mult => left.multiply(right),
            Op::Per => left.divide(right),
        }
    }

    /// Separator used in derived unit symbols
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Mult => "*",
            Op::Per => "/",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Mult => write!(f, "mult"),
            Op::Per => write!(f, "per"),
        }
    }
}
