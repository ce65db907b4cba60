//! Optical blocks and their interaction rules.

use crate::ray::Ray;
use std::fmt;

/// The optical element occupying a grid cell.
///
/// Blocks carry no data beyond their kind and never change state; an
/// interaction only touches the ray's velocity and active flag.
///
/// | Kind | Tag | Effect on `(d_row, d_col)` |
/// |------|-----|-----------------------------|
/// | [`Empty`](Block::Empty) | `o` | unchanged |
/// | [`Reflective`](Block::Reflective) | `A` | `(-d_row, -d_col)` |
/// | [`Opaque`](Block::Opaque) | `B` | ray deactivated |
/// | [`Refractive`](Block::Refractive) | `C` | `(-d_col, d_row)` |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Block {
    /// No optical element.
    #[default]
    Empty,
    /// Sends the ray straight back the way it came.
    Reflective,
    /// Absorbs the ray.
    Opaque,
    /// Turns the ray a quarter turn and lets it continue.
    Refractive,
}

impl Block {
    /// All block kinds, `Empty` first.
    pub const ALL: [Block; 4] = [
        Block::Empty,
        Block::Reflective,
        Block::Opaque,
        Block::Refractive,
    ];

    /// Apply this block's rule to `ray`, mutating it in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazor_core::{Block, Ray, Velocity};
    ///
    /// let mut ray = Ray::new((1, 1), (1, 0));
    /// Block::Refractive.interact(&mut ray);
    /// assert_eq!(ray.velocity(), Velocity::new(0, 1));
    ///
    /// Block::Opaque.interact(&mut ray);
    /// assert!(!ray.is_active());
    /// ```
    pub fn interact(self, ray: &mut Ray) {
        match self {
            Block::Empty => {}
            Block::Reflective => ray.set_velocity(ray.velocity().reversed()),
            Block::Opaque => ray.deactivate(),
            Block::Refractive => ray.set_velocity(ray.velocity().quarter_turn()),
        }
    }

    /// Map a level-file tag to a block. Unknown tags are empty cells.
    pub fn from_tag(tag: char) -> Self {
        match tag {
            'A' => Block::Reflective,
            'B' => Block::Opaque,
            'C' => Block::Refractive,
            _ => Block::Empty,
        }
    }

    /// The level-file tag for this block.
    pub fn tag(self) -> char {
        match self {
            Block::Empty => 'o',
            Block::Reflective => 'A',
            Block::Opaque => 'B',
            Block::Refractive => 'C',
        }
    }

    /// `true` for [`Block::Empty`].
    pub fn is_empty(self) -> bool {
        self == Block::Empty
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Block::Empty => "empty",
            Block::Reflective => "reflective",
            Block::Opaque => "opaque",
            Block::Refractive => "refractive",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Velocity;
    use proptest::prelude::*;

    fn ray_with(d_row: i32, d_col: i32) -> Ray {
        Ray::new((0, 0), (d_row, d_col))
    }

    #[test]
    fn empty_is_identity() {
        let mut ray = ray_with(1, -1);
        let before = ray;
        Block::Empty.interact(&mut ray);
        assert_eq!(ray, before);
    }

    #[test]
    fn reflective_reverses_velocity() {
        let mut ray = ray_with(1, 0);
        Block::Reflective.interact(&mut ray);
        assert_eq!(ray.velocity(), Velocity::new(-1, 0));
        assert!(ray.is_active());
    }

    #[test]
    fn opaque_deactivates_and_keeps_velocity() {
        let mut ray = ray_with(0, 1);
        Block::Opaque.interact(&mut ray);
        assert!(!ray.is_active());
        assert_eq!(ray.velocity(), Velocity::new(0, 1));
    }

    #[test]
    fn refractive_turns_quarter() {
        let mut ray = ray_with(2, 3);
        Block::Refractive.interact(&mut ray);
        assert_eq!(ray.velocity(), Velocity::new(-3, 2));
        assert!(ray.is_active());
    }

    #[test]
    fn interaction_never_moves_the_ray() {
        for block in Block::ALL {
            let mut ray = Ray::new((4, 7), (1, 1));
            block.interact(&mut ray);
            assert_eq!(ray.position().row, 4);
            assert_eq!(ray.position().col, 7);
        }
    }

    #[test]
    fn tags_round_trip_for_known_kinds() {
        for block in Block::ALL {
            assert_eq!(Block::from_tag(block.tag()), block);
        }
        assert_eq!(Block::from_tag('x'), Block::Empty);
        assert_eq!(Block::from_tag('o'), Block::Empty);
    }

    proptest! {
        #[test]
        fn reflective_twice_restores_velocity(dr in -100i32..100, dc in -100i32..100) {
            let mut ray = ray_with(dr, dc);
            Block::Reflective.interact(&mut ray);
            Block::Reflective.interact(&mut ray);
            prop_assert_eq!(ray.velocity(), Velocity::new(dr, dc));
        }

        #[test]
        fn refractive_four_times_restores_velocity(dr in -100i32..100, dc in -100i32..100) {
            let mut ray = ray_with(dr, dc);
            for _ in 0..4 {
                Block::Refractive.interact(&mut ray);
            }
            prop_assert_eq!(ray.velocity(), Velocity::new(dr, dc));
        }
    }
}
