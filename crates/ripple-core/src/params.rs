//! Immutable per-run parameter structs, built through validating builders.
//!
//! All validation happens once at `build()`; the per-cell step functions never
//! re-check. Numerical stability of a given `dx`/`dt` combination is the
//! caller's concern (see each kernel's advisory CFL bound).

use crate::boundary::BoundaryPolicy;
use crate::error::ParamError;
use smallvec::SmallVec;

fn check_dx(value: f64) -> Result<(), ParamError> {
    if !(value > 0.0) || !value.is_finite() {
        return Err(ParamError::NonPositiveSpacing { value });
    }
    Ok(())
}

fn check_dt(value: f64) -> Result<(), ParamError> {
    if !(value > 0.0) || !value.is_finite() {
        return Err(ParamError::NonPositiveTimeStep { value });
    }
    Ok(())
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ParamError> {
    if !(value > 0.0) || !value.is_finite() {
        return Err(ParamError::InvalidConstant { name, value });
    }
    Ok(())
}

fn check_finite(name: &'static str, value: f64) -> Result<(), ParamError> {
    if !value.is_finite() {
        return Err(ParamError::InvalidConstant { name, value });
    }
    Ok(())
}

// ── PointSource ─────────────────────────────────────────────────

/// A localized Gaussian forcing term for the wave model.
///
/// Contributes `A · exp(−d² / (2σ²)) · cos(ω·t)` at every cell, where `d` is
/// the Euclidean distance to `center` scaled by the grid spacing. Sources are
/// configuration: the solver reads them every step and never mutates them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointSource {
    /// Centre position in grid coordinates `(x, y)`.
    pub center: (f32, f32),
    /// Peak amplitude `A`.
    pub amplitude: f32,
    /// Spatial spread `σ` of the Gaussian envelope. Must be > 0.
    pub sigma: f32,
    /// Angular frequency `ω` of the temporal oscillation.
    pub omega: f32,
}

impl PointSource {
    fn validate(&self) -> Result<(), ParamError> {
        check_finite("source center x", self.center.0 as f64)?;
        check_finite("source center y", self.center.1 as f64)?;
        check_finite("source amplitude", self.amplitude as f64)?;
        check_positive("source sigma", self.sigma as f64)?;
        check_finite("source omega", self.omega as f64)?;
        Ok(())
    }
}

// ── ReactionDiffusionParams ─────────────────────────────────────

/// Immutable configuration for the two-species reaction-diffusion kernel.
///
/// Defaults reproduce the stock Turing-pattern run:
/// `dx = 1`, `dt = 0.0005`, `Da = 1`, `Db = 100`, `alpha = −0.005`,
/// `beta = 10`.
///
/// # Construction
///
/// ```
/// use ripple_core::ReactionDiffusionParams;
///
/// let params = ReactionDiffusionParams::builder()
///     .diffusion(1.0, 100.0)
///     .kinetics(-0.005, 10.0)
///     .build()
///     .unwrap();
/// assert_eq!(params.db(), 100.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ReactionDiffusionParams {
    dx: f64,
    dt: f64,
    da: f64,
    db: f64,
    alpha: f64,
    beta: f64,
}

/// Builder for [`ReactionDiffusionParams`].
pub struct ReactionDiffusionParamsBuilder {
    dx: f64,
    dt: f64,
    da: f64,
    db: f64,
    alpha: f64,
    beta: f64,
}

impl ReactionDiffusionParams {
    /// Create a builder seeded with the stock Turing-pattern constants.
    pub fn builder() -> ReactionDiffusionParamsBuilder {
        ReactionDiffusionParamsBuilder {
            dx: 1.0,
            dt: 0.0005,
            da: 1.0,
            db: 100.0,
            alpha: -0.005,
            beta: 10.0,
        }
    }

    /// Grid spacing.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Time step.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Diffusion rate of species `a`.
    pub fn da(&self) -> f64 {
        self.da
    }

    /// Diffusion rate of species `b`.
    pub fn db(&self) -> f64 {
        self.db
    }

    /// Reaction offset constant.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Coupling rate of the `b` kinetics.
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl ReactionDiffusionParamsBuilder {
    /// Set the grid spacing (default 1.0). Must be finite and > 0.
    pub fn dx(mut self, dx: f64) -> Self {
        self.dx = dx;
        self
    }

    /// Set the time step (default 0.0005). Must be finite and > 0.
    pub fn dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Set both diffusion rates (defaults 1.0 and 100.0). Must be >= 0.
    pub fn diffusion(mut self, da: f64, db: f64) -> Self {
        self.da = da;
        self.db = db;
        self
    }

    /// Set the reaction constants (defaults −0.005 and 10.0). Must be finite.
    pub fn kinetics(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Build the parameter set, validating all values.
    ///
    /// # Errors
    ///
    /// - `NonPositiveSpacing` / `NonPositiveTimeStep` for bad `dx` / `dt`
    /// - `InvalidConstant` for negative or non-finite diffusion rates, or
    ///   non-finite reaction constants
    pub fn build(self) -> Result<ReactionDiffusionParams, ParamError> {
        check_dx(self.dx)?;
        check_dt(self.dt)?;
        for (name, value) in [("Da", self.da), ("Db", self.db)] {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(ParamError::InvalidConstant { name, value });
            }
        }
        check_finite("alpha", self.alpha)?;
        check_finite("beta", self.beta)?;
        Ok(ReactionDiffusionParams {
            dx: self.dx,
            dt: self.dt,
            da: self.da,
            db: self.db,
            alpha: self.alpha,
            beta: self.beta,
        })
    }
}

// ── WaveParams ──────────────────────────────────────────────────

/// Immutable configuration for the damped, forced wave kernel.
///
/// Defaults reproduce the stock wave-tank run: `dx = 1`, `dt = 0.0005`,
/// `c = 100`, Dirichlet boundary, no sources.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveParams {
    dx: f64,
    dt: f64,
    wave_speed: f64,
    boundary: BoundaryPolicy,
    sources: SmallVec<[PointSource; 4]>,
}

/// Builder for [`WaveParams`].
pub struct WaveParamsBuilder {
    dx: f64,
    dt: f64,
    wave_speed: f64,
    boundary: BoundaryPolicy,
    sources: SmallVec<[PointSource; 4]>,
}

impl WaveParams {
    /// Create a builder seeded with the stock wave-tank constants.
    pub fn builder() -> WaveParamsBuilder {
        WaveParamsBuilder {
            dx: 1.0,
            dt: 0.0005,
            wave_speed: 100.0,
            boundary: BoundaryPolicy::Dirichlet,
            sources: SmallVec::new(),
        }
    }

    /// Grid spacing.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Time step.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Wave propagation speed `c`.
    pub fn wave_speed(&self) -> f64 {
        self.wave_speed
    }

    /// Configured boundary policy.
    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// The ordered point-source list.
    pub fn sources(&self) -> &[PointSource] {
        &self.sources
    }
}

impl WaveParamsBuilder {
    /// Set the grid spacing (default 1.0). Must be finite and > 0.
    pub fn dx(mut self, dx: f64) -> Self {
        self.dx = dx;
        self
    }

    /// Set the time step (default 0.0005). Must be finite and > 0.
    pub fn dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Set the wave speed (default 100.0). Must be finite and > 0.
    pub fn wave_speed(mut self, c: f64) -> Self {
        self.wave_speed = c;
        self
    }

    /// Set the boundary policy (default Dirichlet).
    pub fn boundary(mut self, policy: BoundaryPolicy) -> Self {
        self.boundary = policy;
        self
    }

    /// Append one point source to the forcing list.
    pub fn source(mut self, source: PointSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Replace the entire forcing list.
    pub fn sources(mut self, sources: impl IntoIterator<Item = PointSource>) -> Self {
        self.sources = sources.into_iter().collect();
        self
    }

    /// Build the parameter set, validating all values.
    ///
    /// # Errors
    ///
    /// - `NonPositiveSpacing` / `NonPositiveTimeStep` for bad `dx` / `dt`
    /// - `InvalidConstant` for a non-positive wave speed or any source with
    ///   non-finite fields or `sigma <= 0`
    pub fn build(self) -> Result<WaveParams, ParamError> {
        check_dx(self.dx)?;
        check_dt(self.dt)?;
        check_positive("wave speed", self.wave_speed)?;
        for source in &self.sources {
            source.validate()?;
        }
        Ok(WaveParams {
            dx: self.dx,
            dt: self.dt,
            wave_speed: self.wave_speed,
            boundary: self.boundary,
            sources: self.sources,
        })
    }
}
