//! Sweep drivers and simulation loops for the Ripple solver.
//!
//! Kernels are pure per-cell functions; everything that schedules them lives
//! here, outside the solver core:
//!
//! - [`sweep`]/[`sweep_parallel`]: cover every grid position exactly once per
//!   step, sequentially or across row bands
//! - [`Simulation`]: the synchronous owner of the double buffer — step,
//!   publish, read out
//! - [`RealtimeSim`]: a free-running background thread serving frame
//!   snapshots over channels
//!
//! [`sweep`]: sweep::sweep
//! [`sweep_parallel`]: sweep::sweep_parallel

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod realtime;
pub mod sim;
pub mod sweep;

pub use config::{ConfigError, SimConfig};
pub use metrics::StepMetrics;
pub use realtime::{Frame, FrameError, RealtimeSim};
pub use sim::Simulation;
