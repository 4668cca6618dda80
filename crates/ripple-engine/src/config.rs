//! Simulation configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use ripple_grid::{CellKernel, Grid};

/// Builder-input for constructing a [`Simulation`](crate::Simulation).
///
/// The initial grid carries the seed state (noise, spots, sponge frame — the
/// caller's choice); the kernel carries every per-run constant. Worker count
/// selects between the sequential and row-band parallel sweep.
pub struct SimConfig {
    /// Initial field contents. Becomes the first published grid.
    pub initial: Grid,
    /// The per-cell update rule to run.
    pub kernel: Box<dyn CellKernel>,
    /// Sweep worker threads. `None` = auto-detect from available
    /// parallelism (clamped to `[1, 16]`); `Some(1)` = sequential.
    pub workers: Option<usize>,
}

impl SimConfig {
    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`; explicit zero is rejected
    /// by [`validate()`](SimConfig::validate) before this is consulted.
    pub fn resolved_workers(&self) -> usize {
        match self.workers {
            Some(n) => n.clamp(1, 64),
            None => {
                let cpus = std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1);
                cpus.clamp(1, 16)
            }
        }
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// `ConfigError::ZeroWorkers` if the worker count is explicitly zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == Some(0) {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(())
    }
}

/// Errors detected while validating driver configuration.
///
/// Grid and parameter errors surface earlier, from their own constructors;
/// by the time a `SimConfig` exists its grid and kernel are already valid.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Worker count is explicitly zero.
    ZeroWorkers,
    /// Target step rate is NaN, infinite, zero, or negative.
    InvalidStepRate {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWorkers => write!(f, "worker count must be at least 1"),
            Self::InvalidStepRate { value } => {
                write!(f, "step rate must be finite and > 0, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_core::{BoundaryPolicy, Cell};

    struct Identity;

    impl CellKernel for Identity {
        fn name(&self) -> &str {
            "identity"
        }

        fn boundary(&self) -> BoundaryPolicy {
            BoundaryPolicy::Neumann
        }

        fn time_step(&self) -> f64 {
            1.0
        }

        fn step_cell(&self, x: u32, y: u32, current: &Grid, _t: f64) -> Cell {
            current.get(x, y)
        }
    }

    fn config(workers: Option<usize>) -> SimConfig {
        SimConfig {
            initial: Grid::new(4, 4).unwrap(),
            kernel: Box::new(Identity),
            workers,
        }
    }

    #[test]
    fn zero_workers_rejected() {
        assert_eq!(config(Some(0)).validate(), Err(ConfigError::ZeroWorkers));
    }

    #[test]
    fn explicit_workers_clamped() {
        assert_eq!(config(Some(3)).resolved_workers(), 3);
        assert_eq!(config(Some(10_000)).resolved_workers(), 64);
    }

    #[test]
    fn auto_workers_in_range() {
        let n = config(None).resolved_workers();
        assert!((1..=16).contains(&n));
    }
}
