//! Boundary-condition policy for the grid edge.

use crate::error::ParamError;
use std::str::FromStr;

/// How a kernel resolves a neighbour lookup that falls outside the grid.
///
/// This decides only genuinely out-of-range lookups; in-range neighbours are
/// always read directly, whatever the policy.
///
/// # Examples
///
/// ```
/// use ripple_core::BoundaryPolicy;
///
/// assert_eq!(BoundaryPolicy::from_code(2), Ok(BoundaryPolicy::Absorbing));
/// assert_eq!("toroidal".parse(), Ok(BoundaryPolicy::Toroidal));
/// assert!(BoundaryPolicy::from_code(7).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryPolicy {
    /// Out-of-range neighbours are the zero cell (fixed-value edge).
    Dirichlet,
    /// Out-of-range neighbours mirror the edge cell itself (zero-gradient).
    Neumann,
    /// Zero-gradient lookups plus an attenuation ramp near the edge
    /// (sponge layer) that damps energy instead of reflecting it.
    Absorbing,
    /// Coordinates wrap to the opposite side (periodic, torus topology).
    Toroidal,
}

impl BoundaryPolicy {
    /// Decode the wire/config integer code used by driver front-ends.
    ///
    /// Codes: 0 = Dirichlet, 1 = Neumann, 2 = Absorbing, 3 = Toroidal.
    ///
    /// # Errors
    ///
    /// `ParamError::UnknownBoundaryPolicy` for any other value.
    pub fn from_code(code: i32) -> Result<Self, ParamError> {
        match code {
            0 => Ok(Self::Dirichlet),
            1 => Ok(Self::Neumann),
            2 => Ok(Self::Absorbing),
            3 => Ok(Self::Toroidal),
            _ => Err(ParamError::UnknownBoundaryPolicy {
                token: code.to_string(),
            }),
        }
    }
}

impl FromStr for BoundaryPolicy {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dirichlet" => Ok(Self::Dirichlet),
            "neumann" => Ok(Self::Neumann),
            "absorbing" => Ok(Self::Absorbing),
            "toroidal" => Ok(Self::Toroidal),
            _ => Err(ParamError::UnknownBoundaryPolicy {
                token: s.to_string(),
            }),
        }
    }
}
