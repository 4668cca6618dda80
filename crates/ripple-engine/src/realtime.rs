//! Free-running simulation on a background thread.
//!
//! [`RealtimeSim`] moves a [`Simulation`] onto a dedicated thread that steps
//! continuously, optionally paced to a target rate. User threads request
//! frame snapshots over a bounded channel and block on a per-request reply
//! channel; the tick thread drains requests after each completed step, so a
//! frame always shows a fully published state — never a half-written sweep.
//!
//! Shutdown raises an atomic flag, lets any in-flight step run to
//! completion, and joins the thread, recovering the `Simulation`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, Sender};
use ripple_grid::Grid;

use crate::config::ConfigError;
use crate::sim::Simulation;

/// A published snapshot of the running simulation.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Copy of the published grid.
    pub grid: Grid,
    /// Completed step count at capture time.
    pub tick: u64,
    /// Elapsed simulation time at capture time.
    pub elapsed: f64,
}

/// Error requesting a frame from the tick thread.
#[derive(Debug, PartialEq, Eq)]
pub enum FrameError {
    /// The tick thread has shut down.
    Shutdown,
}

impl std::fmt::Display for FrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shutdown => write!(f, "tick thread has shut down"),
        }
    }
}

impl std::error::Error for FrameError {}

struct FrameRequest {
    reply: Sender<Frame>,
}

/// Handle to a simulation free-running on a background thread.
pub struct RealtimeSim {
    request_tx: Option<Sender<FrameRequest>>,
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<Simulation>>,
}

impl RealtimeSim {
    /// Move `sim` onto a background thread and start stepping.
    ///
    /// `rate_hz` caps the step rate (the thread sleeps out the remainder of
    /// each period); `None` runs flat out.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidStepRate` if `rate_hz` is zero, negative, or
    /// non-finite.
    pub fn spawn(sim: Simulation, rate_hz: Option<f64>) -> Result<Self, ConfigError> {
        if let Some(hz) = rate_hz {
            if !(hz > 0.0) || !hz.is_finite() {
                return Err(ConfigError::InvalidStepRate { value: hz });
            }
        }
        let budget = rate_hz.map(|hz| Duration::from_secs_f64(1.0 / hz));

        let (request_tx, request_rx) = bounded::<FrameRequest>(16);
        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&shutdown);

        let handle = thread::spawn(move || tick_loop(sim, request_rx, flag, budget));

        Ok(Self {
            request_tx: Some(request_tx),
            shutdown,
            handle: Some(handle),
        })
    }

    /// Request a snapshot of the latest published state.
    ///
    /// Blocks until the tick thread finishes its current step and replies.
    ///
    /// # Errors
    ///
    /// `FrameError::Shutdown` if the tick thread is gone.
    pub fn latest_frame(&self) -> Result<Frame, FrameError> {
        let (reply_tx, reply_rx) = bounded(1);
        let request_tx = self.request_tx.as_ref().ok_or(FrameError::Shutdown)?;
        request_tx
            .send(FrameRequest { reply: reply_tx })
            .map_err(|_| FrameError::Shutdown)?;
        reply_rx.recv().map_err(|_| FrameError::Shutdown)
    }

    /// Stop stepping and recover the simulation.
    ///
    /// The in-flight step (if any) runs to completion; no further steps are
    /// scheduled. Returns `None` only if the tick thread panicked.
    pub fn shutdown(mut self) -> Option<Simulation> {
        self.shutdown.store(true, Ordering::Relaxed);
        self.request_tx.take();
        self.handle.take().and_then(|h| h.join().ok())
    }
}

impl Drop for RealtimeSim {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        self.request_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn tick_loop(
    mut sim: Simulation,
    request_rx: Receiver<FrameRequest>,
    shutdown: Arc<AtomicBool>,
    budget: Option<Duration>,
) -> Simulation {
    while !shutdown.load(Ordering::Relaxed) {
        let started = Instant::now();
        sim.step();

        // Serve every snapshot request that arrived during the step.
        while let Ok(request) = request_rx.try_recv() {
            let _ = request.reply.send(Frame {
                grid: sim.grid().clone(),
                tick: sim.tick(),
                elapsed: sim.elapsed(),
            });
        }

        if let Some(budget) = budget {
            let spent = started.elapsed();
            if spent < budget {
                thread::sleep(budget - spent);
            }
        }
    }
    sim
}
