//! Double-buffered grid pair with ping-pong swap.
//!
//! [`FrontBack`] owns two same-shaped grids that alternate between the
//! "front" (published, read-only during a sweep) and "back" (staging,
//! write-only) roles. [`FrontBack::publish`] swaps the roles in place;
//! contents are never copied.

use crate::error::GridError;
use crate::grid::Grid;

/// Two same-shaped grids with swappable front/back roles.
///
/// The lifecycle per step is:
/// 1. [`split()`](FrontBack::split) — borrow `(front, back)` for one sweep
/// 2. every cell of `back` is overwritten from `front`
/// 3. [`publish()`](FrontBack::publish) — swap roles, begin the next step
///
/// During a sweep, cell updates read only from the front grid and write only
/// their own position in the back grid; the split borrow makes a read of the
/// half-written back grid unrepresentable.
#[derive(Debug)]
pub struct FrontBack {
    front: Grid,
    back: Grid,
}

impl FrontBack {
    /// Build a buffer pair from an initial state. The back grid starts as a
    /// clone of `initial`; its contents are irrelevant because a sweep
    /// overwrites every cell before the first publish.
    pub fn new(initial: Grid) -> Self {
        let back = initial.clone();
        Self {
            front: initial,
            back,
        }
    }

    /// Pair two existing grids.
    ///
    /// # Errors
    ///
    /// `GridError::DimensionMismatch` if the shapes differ.
    pub fn from_pair(front: Grid, back: Grid) -> Result<Self, GridError> {
        if front.width() != back.width() || front.height() != back.height() {
            return Err(GridError::DimensionMismatch {
                front: (front.width(), front.height()),
                back: (back.width(), back.height()),
            });
        }
        Ok(Self { front, back })
    }

    /// Grid width (both buffers, always equal).
    pub fn width(&self) -> u32 {
        self.front.width()
    }

    /// Grid height (both buffers, always equal).
    pub fn height(&self) -> u32 {
        self.front.height()
    }

    /// The published grid: the readout surface between steps.
    pub fn front(&self) -> &Grid {
        &self.front
    }

    /// Mutable access to the published grid, for seeding initial conditions
    /// before the run starts.
    pub fn front_mut(&mut self) -> &mut Grid {
        &mut self.front
    }

    /// Borrow `(front, back)` for one sweep: read-shared current state and
    /// the write-partitioned next state.
    pub fn split(&mut self) -> (&Grid, &mut Grid) {
        (&self.front, &mut self.back)
    }

    /// Swap the front/back roles. Call after a sweep has overwritten every
    /// back cell. Swapping is a role exchange, not a copy; two publishes
    /// restore the original buffer identity with contents untouched.
    pub fn publish(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }
}
