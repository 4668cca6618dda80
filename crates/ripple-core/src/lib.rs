//! Core types for the Ripple stencil PDE solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! per-cell state vocabulary ([`Cell`]), the boundary-condition policy enum,
//! and the validated parameter structs shared by every kernel and driver.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod cell;
pub mod error;
pub mod params;

pub use boundary::BoundaryPolicy;
pub use cell::Cell;
pub use error::ParamError;
pub use params::{PointSource, ReactionDiffusionParams, WaveParams};
