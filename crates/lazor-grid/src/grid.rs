//! 2D block grid addressed by `(row, col)`.

use crate::error::GridError;
use lazor_core::{Block, Coord};
use std::fmt;

/// A rectangular grid of blocks.
///
/// Each cell has coordinate `(row, col)` where `0 <= row < rows` and
/// `0 <= col < cols`. Cells are stored row-major. Every cell holds a
/// [`Block`]; a cell with no optical element holds [`Block::Empty`].
///
/// Construction rejects empty and ragged layouts, so every `Grid` is
/// rectangular with at least one cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<Block>,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Create a `rows * cols` grid with every cell empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazor_core::{Block, Coord};
    /// use lazor_grid::Grid;
    ///
    /// let grid = Grid::new(3, 4).unwrap();
    /// assert_eq!(grid.cell_count(), 12);
    /// assert_eq!(grid.block_at(Coord::new(2, 3)), Some(Block::Empty));
    /// assert_eq!(grid.block_at(Coord::new(3, 0)), None);
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let (r, c) = Self::check_dims(rows, cols)?;
        Ok(Self {
            rows: r,
            cols: c,
            cells: vec![Block::Empty; rows * cols],
        })
    }

    /// Build a grid from row vectors.
    ///
    /// Returns `Err(GridError::EmptyGrid)` for no rows or an empty first
    /// row, and `Err(GridError::RaggedRow)` if any row's length differs
    /// from the first.
    pub fn from_rows(rows: Vec<Vec<Block>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let (r, c) = Self::check_dims(height, width)?;

        let mut cells = Vec::with_capacity(height * width);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: index,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            rows: r,
            cols: c,
            cells,
        })
    }

    fn check_dims(rows: usize, cols: usize) -> Result<(u32, u32), GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok((rows as u32, cols as u32))
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        self.index_of(coord).is_some()
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        if coord.row < 0 || coord.col < 0 {
            return None;
        }
        let (r, c) = (coord.row as u32, coord.col as u32);
        if r >= self.rows || c >= self.cols {
            return None;
        }
        Some(r as usize * self.cols as usize + c as usize)
    }

    /// The block at `coord`, or `None` if `coord` is outside the grid.
    ///
    /// `None` means "outside"; an in-range cell without an optical element
    /// returns `Some(Block::Empty)`.
    pub fn block_at(&self, coord: Coord) -> Option<Block> {
        self.index_of(coord).map(|i| self.cells[i])
    }

    /// Put `block` at `coord`, returning the block it replaced.
    pub fn place(&mut self, coord: Coord, block: Block) -> Result<Block, GridError> {
        let index = self.index_of(coord).ok_or(GridError::CoordOutOfBounds {
            coord,
            rows: self.rows,
            cols: self.cols,
        })?;
        Ok(std::mem::replace(&mut self.cells[index], block))
    }

    /// Row-major iterator over every `(coord, block)` pair.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Block)> + '_ {
        let cols = self.cols as usize;
        self.cells.iter().enumerate().map(move |(i, &block)| {
            let coord = Coord::new((i / cols) as i32, (i % cols) as i32);
            (coord, block)
        })
    }

    /// Number of cells holding `block`.
    pub fn count(&self, block: Block) -> usize {
        self.cells.iter().filter(|&&b| b == block).count()
    }
}

/// Renders one line per row using the level tag characters.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols as usize) {
            for block in row {
                write!(f, "{}", block.tag())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
