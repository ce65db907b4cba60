//! Mutable ray state advanced by the tracer.

use crate::id::{Coord, Velocity};

/// A simulated beam: where it is, where it is heading, and whether it is
/// still travelling.
///
/// A ray starts active. The tracer moves it and blocks redirect or absorb
/// it; once deactivated it stays inactive for good. There is no way to
/// reactivate a ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ray {
    position: Coord,
    velocity: Velocity,
    active: bool,
}

impl Ray {
    /// Create an active ray at `position` heading along `velocity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazor_core::{Coord, Ray, Velocity};
    ///
    /// let mut ray = Ray::new(Coord::new(0, 1), Velocity::new(1, 0));
    /// assert!(ray.is_active());
    /// assert_eq!(ray.advance(), Some(Coord::new(1, 1)));
    /// ```
    pub fn new(position: impl Into<Coord>, velocity: impl Into<Velocity>) -> Self {
        Self {
            position: position.into(),
            velocity: velocity.into(),
            active: true,
        }
    }

    /// Current position.
    pub fn position(&self) -> Coord {
        self.position
    }

    /// Current velocity.
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Whether the ray is still travelling.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Replace the velocity.
    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    /// Stop the ray permanently.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Move one step along the current velocity and return the new position.
    ///
    /// On coordinate overflow the position is left unchanged, the ray is
    /// deactivated and `None` is returned: an overflowing position lies
    /// outside every grid.
    pub fn advance(&mut self) -> Option<Coord> {
        match self.position.checked_step(self.velocity) {
            Some(next) => {
                self.position = next;
                Some(next)
            }
            None => {
                self.active = false;
                None
            }
        }
    }
}
