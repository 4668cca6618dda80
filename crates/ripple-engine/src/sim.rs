//! Synchronous simulation loop.
//!
//! [`Simulation`] is the primary user-facing driver: it owns the double
//! buffer and a boxed kernel, and each [`step()`](Simulation::step) runs one
//! full sweep, publishes the result, and returns a borrowed view of the new
//! state.
//!
//! # Ownership model
//!
//! `Simulation` is `Send` (can be moved to a background thread — see
//! [`RealtimeSim`](crate::RealtimeSim)) and all mutating methods take
//! `&mut self`. `step()` returns a `&Grid` borrowing from `self`, so a
//! caller cannot step again while holding a readout reference — the borrow
//! checker enforces the between-step barrier at compile time.

use std::time::Instant;

use ripple_grid::{CellKernel, FrontBack, Grid};

use crate::config::{ConfigError, SimConfig};
use crate::metrics::StepMetrics;
use crate::sweep::{sweep, sweep_parallel};

// Compile-time assertion: Simulation must stay Send so RealtimeSim can own
// it on the tick thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

/// Owner of the buffer pair and kernel; advances the field step by step.
///
/// Elapsed time and step count live here, not in the kernel: each sweep is
/// evaluated at the time of its *starting* state, and afterwards
/// `elapsed = tick · dt`.
pub struct Simulation {
    buffers: FrontBack,
    kernel: Box<dyn CellKernel>,
    workers: usize,
    tick: u64,
    elapsed: f64,
    last_metrics: StepMetrics,
}

impl Simulation {
    /// Build a simulation from a validated configuration.
    ///
    /// # Errors
    ///
    /// Propagates [`SimConfig::validate`] failures.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let workers = config.resolved_workers();
        Ok(Self {
            buffers: FrontBack::new(config.initial),
            kernel: config.kernel,
            workers,
            tick: 0,
            elapsed: 0.0,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Advance one step: sweep every cell, publish the buffer swap, and
    /// return the new published grid.
    pub fn step(&mut self) -> &Grid {
        let started = Instant::now();
        let t = self.elapsed;

        let (current, next) = self.buffers.split();
        if self.workers > 1 {
            sweep_parallel(self.kernel.as_ref(), current, next, t, self.workers);
        } else {
            sweep(self.kernel.as_ref(), current, next, t);
        }
        self.buffers.publish();

        self.tick += 1;
        self.elapsed = self.tick as f64 * self.kernel.time_step();
        self.last_metrics = StepMetrics {
            cells: self.buffers.front().cell_count(),
            total_us: started.elapsed().as_micros() as u64,
        };
        self.buffers.front()
    }

    /// The published grid: the readout surface for presentation.
    pub fn grid(&self) -> &Grid {
        self.buffers.front()
    }

    /// Mutable access to the published grid, for (re)seeding between runs.
    pub fn grid_mut(&mut self) -> &mut Grid {
        self.buffers.front_mut()
    }

    /// Number of completed steps.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Elapsed simulation time: `tick · dt`.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// The kernel driving this run.
    pub fn kernel(&self) -> &dyn CellKernel {
        self.kernel.as_ref()
    }

    /// Metrics from the most recent step.
    pub fn metrics(&self) -> StepMetrics {
        self.last_metrics
    }
}
