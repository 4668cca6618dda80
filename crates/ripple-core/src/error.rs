//! Error types for run-configuration validation.
//!
//! Stepping itself is pure arithmetic and raises nothing; everything here is
//! fatal at construction time.

use std::error::Error;
use std::fmt;

/// Errors from parameter validation at configuration time.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamError {
    /// Grid spacing `dx` is zero, negative, or non-finite.
    NonPositiveSpacing {
        /// The rejected value.
        value: f64,
    },
    /// Time step `dt` is zero, negative, or non-finite.
    NonPositiveTimeStep {
        /// The rejected value.
        value: f64,
    },
    /// A model constant is outside its valid range or non-finite.
    InvalidConstant {
        /// Name of the offending constant.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A boundary-policy code or name outside the enumerated set.
    UnknownBoundaryPolicy {
        /// The unrecognised input.
        token: String,
    },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSpacing { value } => {
                write!(f, "grid spacing dx must be finite and > 0, got {value}")
            }
            Self::NonPositiveTimeStep { value } => {
                write!(f, "time step dt must be finite and > 0, got {value}")
            }
            Self::InvalidConstant { name, value } => {
                write!(f, "invalid value for {name}: {value}")
            }
            Self::UnknownBoundaryPolicy { token } => {
                write!(f, "unknown boundary policy: {token}")
            }
        }
    }
}

impl Error for ParamError {}
