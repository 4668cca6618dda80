//! Whole-grid sweeps: invoke the kernel for every position exactly once.
//!
//! Both sweeps uphold the same contract: read only `current`, write every
//! cell of `next` exactly once, no ordering dependency between cells. The
//! parallel variant partitions `next` into disjoint row bands, so workers
//! never share a write destination; the scope join is the barrier between
//! "all cells written" and the caller's buffer swap.

use ripple_grid::{CellKernel, Grid};

/// Sequential reference sweep.
///
/// Panics in debug builds if the two grids differ in shape; a
/// [`FrontBack`](ripple_grid::FrontBack) split can never produce that.
pub fn sweep(kernel: &dyn CellKernel, current: &Grid, next: &mut Grid, t: f64) {
    debug_assert_eq!(current.width(), next.width());
    debug_assert_eq!(current.height(), next.height());

    for y in 0..current.height() {
        for x in 0..current.width() {
            next.set(x, y, kernel.step_cell(x, y, current, t));
        }
    }
}

/// Row-band parallel sweep, bit-identical to [`sweep`].
///
/// `next` is split into `workers` contiguous row bands via `chunks_mut`;
/// each scoped thread owns one band outright while all share read access to
/// `current`. No locks, no mid-sweep synchronization.
pub fn sweep_parallel(
    kernel: &dyn CellKernel,
    current: &Grid,
    next: &mut Grid,
    t: f64,
    workers: usize,
) {
    debug_assert_eq!(current.width(), next.width());
    debug_assert_eq!(current.height(), next.height());

    let height = current.height() as usize;
    let workers = workers.clamp(1, height);
    if workers == 1 {
        return sweep(kernel, current, next, t);
    }

    let width = current.width() as usize;
    let band_rows = height.div_ceil(workers);
    let band_len = band_rows * width;

    std::thread::scope(|scope| {
        for (band_index, band) in next.cells_mut().chunks_mut(band_len).enumerate() {
            let y0 = (band_index * band_rows) as u32;
            scope.spawn(move || {
                for (offset, slot) in band.iter_mut().enumerate() {
                    let x = (offset % width) as u32;
                    let y = y0 + (offset / width) as u32;
                    *slot = kernel.step_cell(x, y, current, t);
                }
            });
        }
    });
}
