//! Test utilities and fixtures for Lazor development.
//!
//! Provides terse builders for grids, rays and target sets, plus the
//! [`levels`] module of level-file texts shared by loader and engine
//! tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod levels;

use lazor_core::{Block, Coord, Ray, TargetSet};
use lazor_grid::Grid;

/// Build a grid from tag rows such as `["o o o", "o B o", "o o o"]`.
///
/// Whitespace is ignored here, unlike in level files where a space is an
/// empty cell. Panics on an empty or ragged layout, which is always a bug
/// in the test itself.
pub fn grid_from_ascii(rows: &[&str]) -> Grid {
    let cells: Vec<Vec<Block>> = rows
        .iter()
        .map(|row| {
            row.chars()
                .filter(|ch| !ch.is_whitespace())
                .map(Block::from_tag)
                .collect()
        })
        .collect();
    Grid::from_rows(cells).expect("fixture grid must be rectangular and non-empty")
}

/// A `rows * cols` grid with the listed blocks placed.
pub fn grid_with(rows: usize, cols: usize, blocks: &[((i32, i32), Block)]) -> Grid {
    let mut grid = Grid::new(rows, cols).expect("fixture grid must be non-empty");
    for &(coord, block) in blocks {
        grid.place(coord.into(), block)
            .expect("fixture block must be inside the grid");
    }
    grid
}

/// Collect `(row, col)` pairs into a [`TargetSet`].
pub fn targets(coords: &[(i32, i32)]) -> TargetSet {
    coords.iter().map(|&t| Coord::from(t)).collect()
}

/// An active ray at `position` heading along `velocity`.
pub fn ray(position: (i32, i32), velocity: (i32, i32)) -> Ray {
    Ray::new(position, velocity)
}

/// Map `(row, col)` pairs to a path.
pub fn path(coords: &[(i32, i32)]) -> Vec<Coord> {
    coords.iter().map(|&t| Coord::from(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_grid_skips_whitespace() {
        let grid = grid_from_ascii(&["o A", "B C"]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.block_at(Coord::new(0, 1)), Some(Block::Reflective));
        assert_eq!(grid.block_at(Coord::new(1, 0)), Some(Block::Opaque));
        assert_eq!(grid.block_at(Coord::new(1, 1)), Some(Block::Refractive));
    }

    #[test]
    fn targets_deduplicate() {
        assert_eq!(targets(&[(1, 1), (1, 1), (0, 2)]).len(), 2);
    }
}
