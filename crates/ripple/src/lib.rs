//! Ripple: an explicit-time-stepping 2D stencil PDE solver.
//!
//! Advances a double-buffered field one step at a time with pure per-cell
//! kernels — a two-species reaction-diffusion system (Turing patterns) and a
//! damped, forced wave equation — over a shared boundary-aware 5-point
//! stencil. This facade re-exports the public API from all Ripple
//! sub-crates; for most users, adding `ripple` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ripple::prelude::*;
//!
//! // Seed a 64x64 field with uniform concentration noise.
//! let mut initial = Grid::new(64, 64).unwrap();
//! ripple::kernels::seed::uniform_concentrations(&mut initial, 42);
//!
//! // Stock Turing-pattern constants, sequential sweep.
//! let mut sim = Simulation::new(SimConfig {
//!     initial,
//!     kernel: Box::new(ReactionDiffusion::new(
//!         ReactionDiffusionParams::builder().build().unwrap(),
//!     )),
//!     workers: Some(1),
//! })
//! .unwrap();
//!
//! let after = sim.step();
//! assert_eq!(after.cell_count(), 64 * 64);
//! assert_eq!(sim.tick(), 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module      | Sub-crate        | Contents                                  |
//! |-------------|------------------|-------------------------------------------|
//! | [`types`]   | `ripple-core`    | Cell, policies, parameters, errors        |
//! | [`grid`]    | `ripple-grid`    | Grid, double buffer, boundary, stencil    |
//! | [`kernels`] | `ripple-kernels` | Reaction-diffusion, wave, sources, seeds  |
//! | [`engine`]  | `ripple-engine`  | Sweeps, `Simulation`, `RealtimeSim`       |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: cells, boundary policies, parameters, errors.
pub mod types {
    pub use ripple_core::*;
}

/// Grid storage, double buffering, boundary resolution, and the stencil.
pub mod grid {
    pub use ripple_grid::*;
}

/// Reference kernels, point-source forcing, and seeding.
pub mod kernels {
    pub use ripple_kernels::*;
}

/// Sweep drivers and simulation loops.
pub mod engine {
    pub use ripple_engine::*;
}

/// The most commonly used items in one import.
pub mod prelude {
    pub use ripple_core::{
        BoundaryPolicy, Cell, ParamError, PointSource, ReactionDiffusionParams, WaveParams,
    };
    pub use ripple_engine::{RealtimeSim, SimConfig, Simulation};
    pub use ripple_grid::{CellKernel, FrontBack, Grid, GridError};
    pub use ripple_kernels::{ReactionDiffusion, Wave};
}
