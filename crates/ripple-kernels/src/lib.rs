//! Reference PDE kernels for the Ripple solver.
//!
//! Two per-cell update rules share the grid/stencil substrate:
//!
//! - [`ReactionDiffusion`] — two-species kinetics producing Turing patterns
//! - [`Wave`] — a damped, forced wave equation with sponge attenuation
//!
//! Plus the pieces that feed them: Gaussian point-source forcing
//! ([`source`]) and deterministic initial conditions ([`seed`]).

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod reaction_diffusion;
pub mod seed;
pub mod source;
pub mod wave;

pub use reaction_diffusion::ReactionDiffusion;
pub use wave::Wave;
