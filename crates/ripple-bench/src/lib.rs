//! Benchmark profiles for the Ripple solver.
//!
//! Provides pre-built [`SimConfig`] profiles shared by the criterion
//! benches:
//!
//! - [`turing_profile`]: 100x100 grid, stock reaction-diffusion constants
//! - [`wave_profile`]: 100x100 grid, two-source wave tank with sponge frame

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ripple_core::{BoundaryPolicy, PointSource, ReactionDiffusionParams, WaveParams};
use ripple_engine::SimConfig;
use ripple_grid::Grid;
use ripple_kernels::seed::{sponge_frame, uniform_concentrations};
use ripple_kernels::{ReactionDiffusion, Wave};

/// Stock Turing-pattern run: 100x100 grid (10K cells), noise seed.
pub fn turing_profile(seed: u64, workers: Option<usize>) -> SimConfig {
    let mut initial = Grid::new(100, 100).unwrap();
    uniform_concentrations(&mut initial, seed);

    SimConfig {
        initial,
        kernel: Box::new(ReactionDiffusion::new(
            ReactionDiffusionParams::builder().build().unwrap(),
        )),
        workers,
    }
}

/// Two-source wave tank: 100x100 grid, absorbing sponge frame of width 10.
pub fn wave_profile(workers: Option<usize>) -> SimConfig {
    let mut initial = Grid::new(100, 100).unwrap();
    sponge_frame(&mut initial, 10);

    let params = WaveParams::builder()
        .dx(1.0)
        .dt(0.0005)
        .wave_speed(100.0)
        .boundary(BoundaryPolicy::Absorbing)
        .source(PointSource {
            center: (50.0, 20.0),
            amplitude: 100.0,
            sigma: 10.0,
            omega: 10.0,
        })
        .source(PointSource {
            center: (30.0, 30.0),
            amplitude: 30.0,
            sigma: 10.0,
            omega: 9.0,
        })
        .build()
        .unwrap();

    SimConfig {
        initial,
        kernel: Box::new(Wave::new(params)),
        workers,
    }
}
