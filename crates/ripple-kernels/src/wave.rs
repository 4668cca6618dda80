//! Damped, forced wave-equation kernel.
//!
//! Integrates velocity before position (symplectic Euler), which is what
//! keeps the oscillation from pumping energy the way naive explicit Euler
//! does:
//!
//! ```text
//! Lu  = laplacian(u)                      (scalar channel only)
//! v'  = v + dt·(c²·Lu − f)
//! u'  = u + dt·v'
//! f'  = Σ source contributions at (x, y, t)   (replaces f)
//! if att > 0: u' ← (1 − clamp(att, 0, 1))·u'
//! ```
//!
//! The attenuation channel implements the sponge layer for the Absorbing
//! boundary: seed an `att` ramp near the edge and outgoing energy is
//! geometrically damped instead of reflecting. `v'` and `f'` are never
//! attenuated; a cell with `att = 1` has its field value pinned to zero.

use crate::source::total_forcing;
use ripple_core::{BoundaryPolicy, Cell, WaveParams};
use ripple_grid::stencil::laplacian_at;
use ripple_grid::{CellKernel, Grid};

/// The damped, forced wave kernel.
///
/// # Examples
///
/// ```
/// use ripple_core::{BoundaryPolicy, WaveParams};
/// use ripple_grid::CellKernel;
/// use ripple_kernels::Wave;
///
/// let kernel = Wave::new(
///     WaveParams::builder()
///         .wave_speed(1.0)
///         .boundary(BoundaryPolicy::Toroidal)
///         .build()
///         .unwrap(),
/// );
/// assert_eq!(kernel.boundary(), BoundaryPolicy::Toroidal);
/// ```
#[derive(Debug)]
pub struct Wave {
    params: WaveParams,
}

impl Wave {
    /// Wrap an already-validated parameter set.
    pub fn new(params: WaveParams) -> Self {
        Self { params }
    }

    /// The configured parameters.
    pub fn params(&self) -> &WaveParams {
        &self.params
    }
}

impl CellKernel for Wave {
    fn name(&self) -> &str {
        "wave"
    }

    fn boundary(&self) -> BoundaryPolicy {
        self.params.boundary()
    }

    fn time_step(&self) -> f64 {
        self.params.dt()
    }

    fn max_dt(&self) -> Option<f64> {
        // 2D 5-point CFL: c·dt/dx <= 1/√2. Advisory only.
        Some(self.params.dx() / (self.params.wave_speed() * 2.0_f64.sqrt()))
    }

    fn step_cell(&self, x: u32, y: u32, current: &Grid, t: f64) -> Cell {
        let dx = self.params.dx() as f32;
        let dt = self.params.dt() as f32;
        let c2 = (self.params.wave_speed() * self.params.wave_speed()) as f32;

        let cell = current.get(x, y);
        let lu = laplacian_at(current, x, y, self.params.boundary(), dx).u();

        let v_next = cell.v() + dt * (c2 * lu - cell.force());
        let mut u_next = cell.u() + dt * v_next;
        let f_next = total_forcing(self.params.sources(), x, y, dx, t);

        let mut att = cell.att();
        if att > 0.0 {
            att = att.clamp(0.0, 1.0);
            u_next *= 1.0 - att;
        }

        Cell::wave(u_next, v_next, f_next, att)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_core::PointSource;

    fn params() -> ripple_core::params::WaveParamsBuilder {
        WaveParams::builder().dx(1.0).dt(0.05).wave_speed(1.0)
    }

    fn impulse_grid(w: u32, h: u32, x: u32, y: u32, u: f32) -> Grid {
        let mut grid = Grid::new(w, h).unwrap();
        grid.set(x, y, Cell::wave(u, 0.0, 0.0, 0.0));
        grid
    }

    /// One full sweep into a fresh grid, the way a driver would run it.
    fn sweep(kernel: &Wave, current: &Grid, t: f64) -> Grid {
        Grid::from_fn(current.width(), current.height(), |x, y| {
            kernel.step_cell(x, y, current, t)
        })
        .unwrap()
    }

    #[test]
    fn zero_field_stays_zero() {
        let kernel = Wave::new(params().build().unwrap());
        let grid = Grid::new(5, 5).unwrap();
        let next = sweep(&kernel, &grid, 0.0);
        assert!(next.cells().iter().all(|&c| c == Cell::ZERO));
    }

    #[test]
    fn velocity_integrates_before_position() {
        let kernel = Wave::new(params().build().unwrap());
        let grid = impulse_grid(5, 5, 2, 2, 10.0);

        let out = kernel.step_cell(2, 2, &grid, 0.0);
        // Lu = (0+0+0+0 − 40)/1 = −40; v' = 0 + 0.05·(−40) = −2
        assert!((out.v() + 2.0).abs() < 1e-5);
        // u' uses the NEW v: 10 + 0.05·(−2) = 9.9
        assert!((out.u() - 9.9).abs() < 1e-5);
    }

    #[test]
    fn restoring_force_spreads_to_neighbours() {
        let kernel = Wave::new(params().build().unwrap());
        let grid = impulse_grid(5, 5, 2, 2, 10.0);
        let next = sweep(&kernel, &grid, 0.0);
        // Neighbours see a positive Laplacian and pick up outward velocity.
        assert!(next.get(2, 1).v() > 0.0);
        assert!(next.get(2, 3).v() > 0.0);
        assert!(next.get(1, 2).v() > 0.0);
        assert!(next.get(3, 2).v() > 0.0);
    }

    #[test]
    fn force_opposes_velocity_growth() {
        let kernel = Wave::new(params().build().unwrap());
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, Cell::wave(0.0, 0.0, 4.0, 0.0));
        let out = kernel.step_cell(1, 1, &grid, 0.0);
        // v' = 0 + dt·(c²·Lu − f); Lu = 0 here, so v' = −0.05·4 = −0.2.
        assert!((out.v() + 0.2).abs() < 1e-6);
    }

    #[test]
    fn forcing_is_replaced_not_accumulated() {
        // No sources configured: any stale force must drop straight to zero.
        let kernel = Wave::new(params().build().unwrap());
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, Cell::wave(0.0, 0.0, 5.0, 0.0));
        let out = kernel.step_cell(1, 1, &grid, 0.0);
        assert_eq!(out.force(), 0.0);
    }

    #[test]
    fn sources_write_fresh_forcing() {
        let kernel = Wave::new(
            params()
                .source(PointSource {
                    center: (1.0, 1.0),
                    amplitude: 8.0,
                    sigma: 2.0,
                    omega: 0.0,
                })
                .build()
                .unwrap(),
        );
        let grid = Grid::new(3, 3).unwrap();
        let out = kernel.step_cell(1, 1, &grid, 0.0);
        // At the source centre with ω = 0: full amplitude.
        assert_eq!(out.force(), 8.0);
    }

    #[test]
    fn full_attenuation_kills_u_in_one_step() {
        let kernel = Wave::new(params().build().unwrap());
        // Absurd u/v and loud neighbours; att = 1 still pins u to 0.
        let mut grid = Grid::from_fn(3, 3, |_, _| Cell::wave(100.0, -50.0, 0.0, 0.0)).unwrap();
        grid.set(1, 1, Cell::wave(1e6, 1e6, 0.0, 1.0));
        let out = kernel.step_cell(1, 1, &grid, 0.0);
        assert_eq!(out.u(), 0.0);
        assert_eq!(out.att(), 1.0);
    }

    #[test]
    fn attenuation_above_one_is_clamped() {
        let kernel = Wave::new(params().build().unwrap());
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, Cell::wave(4.0, 0.0, 0.0, 3.0));
        let out = kernel.step_cell(1, 1, &grid, 0.0);
        assert_eq!(out.att(), 1.0);
        assert_eq!(out.u(), 0.0);
    }

    #[test]
    fn partial_attenuation_damps_geometrically() {
        let kernel = Wave::new(params().build().unwrap());
        let mut grid = Grid::new(1, 1).unwrap();
        // Single cell with Dirichlet neighbours: Lu = −4u.
        grid.set(0, 0, Cell::wave(1.0, 0.0, 0.0, 0.5));
        let out = kernel.step_cell(0, 0, &grid, 0.0);
        // v' = 0.05·(−4) = −0.2; u' = 1 − 0.01 = 0.99; damped: 0.495.
        assert!((out.u() - 0.495).abs() < 1e-5);
        // Velocity is not attenuated.
        assert!((out.v() + 0.2).abs() < 1e-6);
    }

    #[test]
    fn energy_does_not_amplify() {
        // Source-free, zero-attenuation, Dirichlet, f = 0: repeated stepping
        // at a CFL-respecting dt must not raise max|u| above its initial
        // value. Coarse smoke test, not an exact bound.
        let kernel = Wave::new(params().build().unwrap());
        assert!(kernel.time_step() < kernel.max_dt().unwrap());

        let mut grid = impulse_grid(9, 9, 4, 4, 1.0);
        let initial_max = 1.0_f32;
        for step in 0..50 {
            grid = sweep(&kernel, &grid, step as f64 * kernel.time_step());
            let max_u = grid
                .cells()
                .iter()
                .map(|c| c.u().abs())
                .fold(0.0_f32, f32::max);
            assert!(
                max_u <= initial_max * 1.001,
                "step {step}: max|u| grew to {max_u}"
            );
        }
    }

    #[test]
    fn cfl_bound_scales_with_speed_and_spacing() {
        let kernel = Wave::new(params().wave_speed(100.0).dx(2.0).build().unwrap());
        let expected = 2.0 / (100.0 * 2.0_f64.sqrt());
        assert!((kernel.max_dt().unwrap() - expected).abs() < 1e-12);
    }
}
