//! Per-step performance metrics.

/// Timing data for the most recent step.
///
/// Populated by [`Simulation::step`](crate::Simulation::step); consumers
/// (telemetry, frame pacing) read it between steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Number of cells updated.
    pub cells: usize,
    /// Wall-clock time of the whole sweep + publish, in microseconds.
    pub total_us: u64,
}
