//! Benchmark levels for the Lazor ray tracer.
//!
//! [`random_level`] builds a seeded block layout with lasers entering from
//! every edge and a scattering of targets, so benchmark runs are
//! reproducible across machines.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lazor_core::{Block, Coord, Ray, TargetSet};
use lazor_grid::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A generated grid with its lasers and targets.
#[derive(Clone, Debug)]
pub struct BenchLevel {
    /// Block layout.
    pub grid: Grid,
    /// One laser per edge cell, pointing inward.
    pub rays: Vec<Ray>,
    /// Target cells.
    pub targets: TargetSet,
}

/// Build a `rows` x `cols` level from `seed`.
///
/// Each cell holds a non-empty block with probability `density`, chosen
/// uniformly among reflective, opaque and refractive. About one cell in a
/// hundred is a target.
///
/// # Panics
///
/// Panics if either dimension is zero or exceeds `i32::MAX`.
pub fn random_level(seed: u64, rows: usize, cols: usize, density: f64) -> BenchLevel {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = Grid::new(rows, cols).expect("benchmark grid dimensions");
    let (r_max, c_max) = (grid.rows() as i32, grid.cols() as i32);

    for row in 0..r_max {
        for col in 0..c_max {
            if rng.random::<f64>() < density {
                let block = match rng.random_range(0..3) {
                    0 => Block::Reflective,
                    1 => Block::Opaque,
                    _ => Block::Refractive,
                };
                grid.place(Coord::new(row, col), block)
                    .expect("coordinate inside grid");
            }
        }
    }

    let mut rays = Vec::with_capacity(2 * (rows + cols));
    for col in 0..c_max {
        rays.push(Ray::new((-1, col), (1, 0)));
        rays.push(Ray::new((r_max, col), (-1, 0)));
    }
    for row in 0..r_max {
        rays.push(Ray::new((row, -1), (0, 1)));
        rays.push(Ray::new((row, c_max), (0, -1)));
    }

    let target_count = (grid.cell_count() / 100).max(1);
    let mut targets = TargetSet::with_capacity(target_count);
    while targets.len() < target_count {
        targets.insert(Coord::new(
            rng.random_range(0..r_max),
            rng.random_range(0..c_max),
        ));
    }

    BenchLevel {
        grid,
        rays,
        targets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_level() {
        let a = random_level(7, 16, 16, 0.3);
        let b = random_level(7, 16, 16, 0.3);
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.targets, b.targets);
    }

    #[test]
    fn one_laser_per_edge_cell() {
        let level = random_level(1, 4, 6, 0.5);
        assert_eq!(level.rays.len(), 2 * (4 + 6));
        assert!(level.rays.iter().all(|r| !level.grid.contains(r.position())));
    }

    #[test]
    fn zero_density_is_empty() {
        let level = random_level(3, 10, 10, 0.0);
        assert_eq!(level.grid.count(Block::Empty), 100);
        assert_eq!(level.targets.len(), 1);
    }
}
