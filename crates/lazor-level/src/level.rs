//! Level parsing.

use std::fs;
use std::path::Path as FsPath;
use std::str::FromStr;

use lazor_core::{Block, Coord, Ray, TargetSet};
use lazor_engine::{Solution, Solver};
use lazor_grid::Grid;
use log::{info, warn};

use crate::error::LevelError;

const GRID_START: &str = "GRID START";
const GRID_STOP: &str = "GRID STOP";

/// Everything the engine needs to trace one puzzle configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    /// The block layout.
    pub grid: Grid,
    /// Lasers in file order.
    pub rays: Vec<Ray>,
    /// Target cells in file order, duplicates removed.
    pub targets: TargetSet,
}

impl Level {
    /// Parse level text.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazor_core::{Block, Coord};
    /// use lazor_level::Level;
    ///
    /// let level = Level::parse("GRID START\noB\nGRID STOP\nL 0 -1 0 1\nP 0 0\n").unwrap();
    /// assert_eq!(level.grid.block_at(Coord::new(0, 1)), Some(Block::Opaque));
    /// assert_eq!(level.rays.len(), 1);
    /// assert!(level.targets.contains(&Coord::new(0, 0)));
    /// ```
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let mut rows: Vec<Vec<Block>> = Vec::new();
        let mut grid_start: Option<usize> = None;
        let mut grid_done = false;
        let mut rays = Vec::new();
        let mut targets = TargetSet::new();

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line == GRID_START {
                if grid_start.is_some() || grid_done {
                    return Err(LevelError::DuplicateGrid { line: line_no });
                }
                grid_start = Some(line_no);
                continue;
            }
            if line == GRID_STOP {
                if grid_start.take().is_none() {
                    return Err(LevelError::UnexpectedGridStop { line: line_no });
                }
                grid_done = true;
                continue;
            }

            if grid_start.is_some() {
                rows.push(line.chars().map(Block::from_tag).collect());
                continue;
            }

            let mut fields = line.split_whitespace();
            match fields.next() {
                Some("L") => {
                    let [row, col, d_row, d_col] = parse_ints::<4>(fields, line_no, "laser")?;
                    rays.push(Ray::new((row, col), (d_row, d_col)));
                }
                Some("P") => {
                    let [row, col] = parse_ints::<2>(fields, line_no, "target")?;
                    targets.insert(Coord::new(row, col));
                }
                _ => warn!("line {line_no}: ignoring unrecognised line '{line}'"),
            }
        }

        if let Some(start_line) = grid_start {
            return Err(LevelError::UnterminatedGrid { start_line });
        }
        if !grid_done {
            return Err(LevelError::MissingGrid);
        }

        let grid = Grid::from_rows(rows)?;
        info!(
            "loaded {}x{} level with {} lasers and {} targets",
            grid.rows(),
            grid.cols(),
            rays.len(),
            targets.len()
        );
        Ok(Self {
            grid,
            rays,
            targets,
        })
    }

    /// Read and parse a level file.
    pub fn load(path: impl AsRef<FsPath>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        info!("reading level {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Solve this level with `solver`.
    pub fn solve(&self, solver: &Solver) -> Solution {
        solver.solve(&self.rays, &self.grid, &self.targets)
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse exactly `N` integer fields.
fn parse_ints<'a, const N: usize>(
    fields: impl Iterator<Item = &'a str>,
    line: usize,
    kind: &'static str,
) -> Result<[i32; N], LevelError> {
    let tokens: Vec<&str> = fields.collect();
    if tokens.len() != N {
        return Err(LevelError::MalformedDirective {
            line,
            kind,
            expected: N,
            found: tokens.len(),
        });
    }
    let mut out = [0i32; N];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = token.parse().map_err(|_| LevelError::InvalidInteger {
            line,
            token: token.to_string(),
        })?;
    }
    Ok(out)
}
