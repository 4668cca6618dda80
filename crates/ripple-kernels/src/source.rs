//! Gaussian point-source forcing for the wave model.
//!
//! Pure functions of position and time; the source list is configuration and
//! is never mutated by the solver.

use ripple_core::PointSource;

/// Contribution of a single source at grid position `(x, y)` and elapsed
/// time `t`:
///
/// ```text
/// A · exp(−d² / (2σ²)) · cos(ω·t)
/// ```
///
/// where `d² = dx²·((x − cx)² + (y − cy)²)` — Euclidean distance scaled by
/// the grid spacing.
pub fn source_value(source: &PointSource, x: u32, y: u32, dx: f32, t: f64) -> f32 {
    let ox = x as f32 - source.center.0;
    let oy = y as f32 - source.center.1;
    let d2 = (dx * dx) * (ox * ox + oy * oy);
    let envelope = (-d2 / (2.0 * source.sigma * source.sigma)).exp();
    let phase = (f64::from(source.omega) * t).cos() as f32;
    source.amplitude * envelope * phase
}

/// Total exogenous forcing at `(x, y)`: the sum over all sources, in order.
pub fn total_forcing(sources: &[PointSource], x: u32, y: u32, dx: f32, t: f64) -> f32 {
    sources
        .iter()
        .map(|s| source_value(s, x, y, dx, t))
        .sum()
}
