//! Coordinates, velocities, and the collection aliases built on them.

use indexmap::IndexSet;
use std::fmt;

/// A grid cell address as `(row, col)`.
///
/// Coordinates are signed so that a ray may sit (or start) outside the
/// grid; whether a coordinate lies inside is decided by the grid, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index (first axis).
    pub row: i32,
    /// Column index (second axis).
    pub col: i32,
}

impl Coord {
    /// Create a coordinate from a row and a column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The coordinate one step along `velocity`.
    ///
    /// Returns `None` if either axis overflows `i32`. Such a position can
    /// never be inside a grid, so callers treat `None` as "outside".
    pub fn checked_step(self, velocity: Velocity) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(velocity.d_row)?,
            col: self.col.checked_add(velocity.d_col)?,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// Per-step displacement of a ray as `(d_row, d_col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Velocity {
    /// Row displacement per step.
    pub d_row: i32,
    /// Column displacement per step.
    pub d_col: i32,
}

impl Velocity {
    /// Create a velocity from its row and column components.
    pub const fn new(d_row: i32, d_col: i32) -> Self {
        Self { d_row, d_col }
    }

    /// Both components negated: the ray travels straight back.
    ///
    /// Uses wrapping negation so `i32::MIN` components stay total.
    pub fn reversed(self) -> Self {
        Self {
            d_row: self.d_row.wrapping_neg(),
            d_col: self.d_col.wrapping_neg(),
        }
    }

    /// Quarter turn: `(d_row, d_col) -> (-d_col, d_row)`.
    pub fn quarter_turn(self) -> Self {
        Self {
            d_row: self.d_col.wrapping_neg(),
            d_col: self.d_row,
        }
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.d_row, self.d_col)
    }
}

impl From<(i32, i32)> for Velocity {
    fn from((d_row, d_col): (i32, i32)) -> Self {
        Self { d_row, d_col }
    }
}

/// The ordered cells one ray visited, one entry per in-bounds step.
pub type Path = Vec<Coord>;

/// Target cells, unique and kept in insertion order for stable reporting.
pub type TargetSet = IndexSet<Coord>;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn coord_display_matches_report_format() {
        assert_eq!(Coord::new(3, -1).to_string(), "(3, -1)");
    }

    #[test]
    fn checked_step_moves_by_velocity() {
        let c = Coord::new(2, 5);
        assert_eq!(c.checked_step(Velocity::new(1, -1)), Some(Coord::new(3, 4)));
        assert_eq!(c.checked_step(Velocity::new(0, 0)), Some(c));
    }

    #[test]
    fn checked_step_overflow_is_none() {
        let c = Coord::new(i32::MAX, 0);
        assert_eq!(c.checked_step(Velocity::new(1, 0)), None);
        let c = Coord::new(0, i32::MIN);
        assert_eq!(c.checked_step(Velocity::new(0, -1)), None);
    }

    #[test]
    fn quarter_turn_cycles_through_cardinals() {
        let down = Velocity::new(1, 0);
        assert_eq!(down.quarter_turn(), Velocity::new(0, 1));
        assert_eq!(down.quarter_turn().quarter_turn(), Velocity::new(-1, 0));
    }

    #[test]
    fn tuple_conversions() {
        assert_eq!(Coord::from((1, 2)), Coord::new(1, 2));
        assert_eq!(Velocity::from((-1, 1)), Velocity::new(-1, 1));
    }

    proptest! {
        #[test]
        fn reversed_is_involution(dr in any::<i32>(), dc in any::<i32>()) {
            let v = Velocity::new(dr, dc);
            prop_assert_eq!(v.reversed().reversed(), v);
        }

        #[test]
        fn quarter_turn_has_order_four(dr in any::<i32>(), dc in any::<i32>()) {
            let v = Velocity::new(dr, dc);
            prop_assert_eq!(v.quarter_turn().quarter_turn().quarter_turn().quarter_turn(), v);
        }
    }
}
