//! Two-species reaction-diffusion kernel (Turing patterns).
//!
//! Combines 5-point diffusion with local nonlinear kinetics:
//!
//! ```text
//! L  = laplacian(cell)
//! Ra = a − a³ − b + alpha
//! a' = a + dt·(Da·L.a + Ra(a, b))
//! Rb = beta·(a' − b)
//! b' = b + dt·(Db·L.b + Rb(a', b))
//! ```
//!
//! `Rb` reads the already-updated `a'`, not the pre-step `a`. The coupling is
//! deliberate and load-bearing: evaluating `Rb` against the stale `a` turns
//! the scheme into full explicit Euler, which diverges at larger `dt`.
//!
//! The boundary is fixed to Neumann — concentrations are never absorbed at
//! the wall, so the total amount of each species changes only through the
//! kinetics.

use ripple_core::{BoundaryPolicy, Cell, ReactionDiffusionParams};
use ripple_grid::stencil::laplacian_at;
use ripple_grid::{CellKernel, Grid};

/// The two-species reaction-diffusion kernel.
///
/// # Examples
///
/// ```
/// use ripple_core::ReactionDiffusionParams;
/// use ripple_kernels::ReactionDiffusion;
/// use ripple_grid::CellKernel;
///
/// let kernel = ReactionDiffusion::new(
///     ReactionDiffusionParams::builder().build().unwrap(),
/// );
/// assert_eq!(kernel.name(), "reaction_diffusion");
/// ```
#[derive(Debug)]
pub struct ReactionDiffusion {
    params: ReactionDiffusionParams,
}

impl ReactionDiffusion {
    /// Wrap an already-validated parameter set.
    pub fn new(params: ReactionDiffusionParams) -> Self {
        Self { params }
    }

    /// The configured parameters.
    pub fn params(&self) -> &ReactionDiffusionParams {
        &self.params
    }
}

impl CellKernel for ReactionDiffusion {
    fn name(&self) -> &str {
        "reaction_diffusion"
    }

    fn boundary(&self) -> BoundaryPolicy {
        BoundaryPolicy::Neumann
    }

    fn time_step(&self) -> f64 {
        self.params.dt()
    }

    fn max_dt(&self) -> Option<f64> {
        // Explicit 5-point diffusion bound: dt <= dx² / (4·D). Advisory only.
        let d = self.params.da().max(self.params.db());
        if d > 0.0 {
            Some(self.params.dx() * self.params.dx() / (4.0 * d))
        } else {
            None
        }
    }

    fn step_cell(&self, x: u32, y: u32, current: &Grid, _t: f64) -> Cell {
        let dx = self.params.dx() as f32;
        let dt = self.params.dt() as f32;
        let da = self.params.da() as f32;
        let db = self.params.db() as f32;
        let alpha = self.params.alpha() as f32;
        let beta = self.params.beta() as f32;

        let cell = current.get(x, y);
        let l = laplacian_at(current, x, y, BoundaryPolicy::Neumann, dx);

        let (a, b) = (cell.a(), cell.b());
        let ra = a - a * a * a - b + alpha;
        let a_next = a + dt * (da * l.a() + ra);
        // Semi-implicit: the b kinetics see the fresh a.
        let rb = beta * (a_next - b);
        let b_next = b + dt * (db * l.b() + rb);

        Cell::conc(a_next, b_next)
    }
}
