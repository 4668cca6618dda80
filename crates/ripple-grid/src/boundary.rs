//! Neighbour resolution at and beyond the grid edge.
//!
//! In-range positions always read the grid directly; the policy only decides
//! what stands in for a lookup that falls outside `[0, W) × [0, H)`. Pure
//! lookups: any position is resolvable under any policy.

use crate::grid::Grid;
use ripple_core::{BoundaryPolicy, Cell};

/// Resolve a single axis value under the given policy.
///
/// Returns `Some(resolved_index)` or `None` when the policy substitutes the
/// zero cell (Dirichlet).
///
/// - In-range values pass through untouched, whatever the policy.
/// - `Neumann` and `Absorbing` clamp to the edge cell (zero-gradient; the
///   sponge damping of `Absorbing` lives in the wave kernel's attenuation
///   channel, not here).
/// - `Toroidal` wraps modulo the axis length.
pub fn resolve_axis(value: i32, len: u32, policy: BoundaryPolicy) -> Option<i32> {
    let n = len as i32;
    if value >= 0 && value < n {
        return Some(value);
    }
    match policy {
        BoundaryPolicy::Dirichlet => None,
        BoundaryPolicy::Neumann | BoundaryPolicy::Absorbing => Some(value.clamp(0, n - 1)),
        BoundaryPolicy::Toroidal => Some(((value % n) + n) % n),
    }
}

/// Resolve a (possibly out-of-range) neighbour position to a cell value.
///
/// Both axes resolve independently; if either axis is Dirichlet-absorbed the
/// result is [`Cell::ZERO`].
pub fn resolve(grid: &Grid, x: i32, y: i32, policy: BoundaryPolicy) -> Cell {
    match (
        resolve_axis(x, grid.width(), policy),
        resolve_axis(y, grid.height(), policy),
    ) {
        (Some(rx), Some(ry)) => grid.get(rx as u32, ry as u32),
        _ => Cell::ZERO,
    }
}
