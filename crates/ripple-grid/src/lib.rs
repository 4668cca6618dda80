//! Grid storage and stencil operations for the Ripple solver.
//!
//! This crate owns the spatial substrate every kernel runs on:
//!
//! - [`Grid`]: a fixed-size, flat, row-major cell arena
//! - [`FrontBack`]: the double buffer whose roles swap after each sweep
//! - [`boundary`]: neighbour resolution under the four [`BoundaryPolicy`]
//!   variants
//! - [`stencil`]: the 5-point discrete Laplacian
//! - [`CellKernel`]: the per-cell step contract drivers execute
//!
//! [`BoundaryPolicy`]: ripple_core::BoundaryPolicy

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod buffer;
pub mod error;
pub mod grid;
pub mod kernel;
pub mod stencil;

pub use buffer::FrontBack;
pub use error::GridError;
pub use grid::Grid;
pub use kernel::CellKernel;
