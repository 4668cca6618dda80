//! Deterministic initial conditions.
//!
//! Seeding runs once, before the first step; kernels never mutate these
//! fields themselves. All randomness flows through a seeded ChaCha8 RNG, so
//! identical seeds reproduce identical grids — the same determinism contract
//! the step functions honour.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use ripple_core::Cell;
use ripple_grid::Grid;

/// Fill both concentrations with independent uniform noise in `[0, 1)`.
///
/// The usual starting point for pattern formation: a perturbation with no
/// structure for the kinetics to latch onto except what diffusion amplifies.
pub fn uniform_concentrations(grid: &mut Grid, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for cell in grid.cells_mut() {
        *cell = Cell::conc(rng.random::<f32>(), rng.random::<f32>());
    }
}

/// Zero the field, then stamp `count` random disks of radius `radius` with
/// `a = 0.5`, `b = 0.25`.
///
/// Disk centres are drawn uniformly over the grid; overlapping disks simply
/// restamp the same values.
pub fn concentration_spots(grid: &mut Grid, count: usize, radius: f32, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    grid.fill(Cell::ZERO);

    let (w, h) = (grid.width(), grid.height());
    let r2 = radius * radius;
    for _ in 0..count {
        let cx = w as f32 * rng.random::<f32>();
        let cy = h as f32 * rng.random::<f32>();

        // Only the disk's bounding box needs scanning.
        let x_lo = (cx - radius).floor().max(0.0) as u32;
        let x_hi = ((cx + radius).ceil() as u32).min(w.saturating_sub(1));
        let y_lo = (cy - radius).floor().max(0.0) as u32;
        let y_hi = ((cy + radius).ceil() as u32).min(h.saturating_sub(1));

        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                let ox = x as f32 - cx;
                let oy = y as f32 - cy;
                if ox * ox + oy * oy <= r2 {
                    grid.set(x, y, Cell::conc(0.5, 0.25));
                }
            }
        }
    }
}

/// Write the sponge-layer attenuation ramp for the Absorbing boundary.
///
/// Cells within `width` of the nearest border get
/// `att = 1 − d/width` (1.0 on the border itself, falling off linearly
/// toward the interior); everything deeper stays untouched. Only the
/// attenuation channel is written — field value, velocity, and force are
/// preserved.
pub fn sponge_frame(grid: &mut Grid, width: u32) {
    if width == 0 {
        return;
    }
    let (w, h) = (grid.width(), grid.height());
    for y in 0..h {
        for x in 0..w {
            let d = x.min(y).min(w - 1 - x).min(h - 1 - y);
            if d < width {
                let mut cell = grid.get(x, y);
                cell.0[3] = 1.0 - d as f32 / width as f32;
                grid.set(x, y, cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_noise_is_deterministic() {
        let mut a = Grid::new(8, 8).unwrap();
        let mut b = Grid::new(8, 8).unwrap();
        uniform_concentrations(&mut a, 42);
        uniform_concentrations(&mut b, 42);
        assert_eq!(a, b);

        let mut c = Grid::new(8, 8).unwrap();
        uniform_concentrations(&mut c, 43);
        assert_ne!(a, c);
    }

    #[test]
    fn uniform_noise_stays_in_range() {
        let mut grid = Grid::new(16, 16).unwrap();
        uniform_concentrations(&mut grid, 7);
        for cell in grid.cells() {
            assert!((0.0..1.0).contains(&cell.a()));
            assert!((0.0..1.0).contains(&cell.b()));
            assert_eq!(cell.0[2], 0.0);
            assert_eq!(cell.0[3], 0.0);
        }
    }

    #[test]
    fn spots_stamp_expected_values() {
        let mut grid = Grid::new(32, 32).unwrap();
        concentration_spots(&mut grid, 3, 4.0, 11);

        let stamped: Vec<&Cell> = grid
            .cells()
            .iter()
            .filter(|c| **c != Cell::ZERO)
            .collect();
        assert!(!stamped.is_empty(), "at least one disk cell should land");
        for cell in stamped {
            assert_eq!(cell.a(), 0.5);
            assert_eq!(cell.b(), 0.25);
        }
    }

    #[test]
    fn spots_are_deterministic() {
        let mut a = Grid::new(24, 24).unwrap();
        let mut b = Grid::new(24, 24).unwrap();
        concentration_spots(&mut a, 5, 3.0, 99);
        concentration_spots(&mut b, 5, 3.0, 99);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_spots_leaves_grid_clear() {
        let mut grid = Grid::new(8, 8).unwrap();
        uniform_concentrations(&mut grid, 1);
        concentration_spots(&mut grid, 0, 4.0, 1);
        assert!(grid.cells().iter().all(|&c| c == Cell::ZERO));
    }

    #[test]
    fn sponge_ramp_values() {
        let mut grid = Grid::new(9, 9).unwrap();
        sponge_frame(&mut grid, 3);

        // Border: d = 0 → att = 1.
        assert_eq!(grid.get(0, 4).att(), 1.0);
        assert_eq!(grid.get(8, 4).att(), 1.0);
        assert_eq!(grid.get(4, 0).att(), 1.0);
        assert_eq!(grid.get(4, 8).att(), 1.0);
        // One ring in: d = 1 → att = 2/3.
        assert!((grid.get(1, 4).att() - 2.0 / 3.0).abs() < 1e-6);
        // Two rings in: d = 2 → att = 1/3.
        assert!((grid.get(2, 4).att() - 1.0 / 3.0).abs() < 1e-6);
        // Interior: untouched.
        assert_eq!(grid.get(4, 4).att(), 0.0);
    }

    #[test]
    fn sponge_preserves_other_channels() {
        let mut grid = Grid::from_fn(6, 6, |_, _| Cell::wave(1.5, -0.5, 2.0, 0.0)).unwrap();
        sponge_frame(&mut grid, 2);
        let edge = grid.get(0, 3);
        assert_eq!(edge.u(), 1.5);
        assert_eq!(edge.v(), -0.5);
        assert_eq!(edge.force(), 2.0);
        assert_eq!(edge.att(), 1.0);
    }

    #[test]
    fn sponge_width_zero_is_noop() {
        let mut grid = Grid::new(4, 4).unwrap();
        sponge_frame(&mut grid, 0);
        assert!(grid.cells().iter().all(|&c| c == Cell::ZERO));
    }
}
