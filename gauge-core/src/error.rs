//! Errors raised by the checked parts of the API
//!
//! Arithmetic itself never fails: NaN and infinities flow through per IEEE-754.
//! These errors only come from dimension checks, unit lookup and configuration.

use std::path::PathBuf;
use thiserror::Error;
use crate::Dimension;

#[derive(Debug, Error)]
pub enum GaugeError {
    /// Two operands (or a value and its declared type) have different dimensions
    #[error("incompatible dimensions: {left} vs {right}")]
    IncompatibleDimensions {
        left: Dimension,
        right: Dimension,
    },

    /// No declared unit has this symbol
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Configuration file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be deserialized
    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl GaugeError {
    pub fn incompatible(left: Dimension, right: Dimension) -> Self {
        GaugeError::IncompatibleDimensions { left, right }
    }

    /// Fail unless both dimensions are equal
    pub fn check_same(left: Dimension, right: Dimension) -> Result<(), GaugeError> {
        if left == right {
            Ok(())
        } else {
            Err(Self::incompatible(left, right))
        }
    }
}
