//! Solver configuration, validation, and error types.
//!
//! [`SolverConfig`] is the builder-input for a [`Solver`](crate::Solver).
//! [`validate()`](SolverConfig::validate) checks it once at construction;
//! tracing itself never fails.

use std::error::Error;
use std::fmt;

// ── CycleKey ───────────────────────────────────────────────────────

/// What the tracer's cycle guard remembers about each visited cell.
///
/// The default, [`Position`](CycleKey::Position), stops a ray the first
/// time it re-enters any cell it already crossed. This bounds every trace
/// to `rows * cols + 1` steps, but it also abandons rays that would cross
/// a cell a second time in a different direction on their way to a target.
/// [`PositionVelocity`](CycleKey::PositionVelocity) only stops a ray that
/// re-enters a cell with the same velocity it had before, which is an
/// exact periodicity test.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CycleKey {
    /// Stop on any revisited position.
    #[default]
    Position,
    /// Stop only on a revisited `(position, velocity)` pair.
    PositionVelocity,
}

impl fmt::Display for CycleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position => f.write_str("position"),
            Self::PositionVelocity => f.write_str("position-velocity"),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SolverConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `workers` was set to `Some(0)`.
    ZeroWorkers,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWorkers => write!(f, "workers must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── SolverConfig ───────────────────────────────────────────────────

/// Configuration for a [`Solver`](crate::Solver).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Cycle guard key. Default: [`CycleKey::Position`].
    pub cycle_key: CycleKey,
    /// Number of tracing threads. `None` or `Some(1)` traces sequentially
    /// on the calling thread. Default: `None`.
    pub workers: Option<usize>,
}

impl SolverConfig {
    /// Upper bound applied to explicit worker counts.
    pub const MAX_WORKERS: usize = 64;

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == Some(0) {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(())
    }

    /// Resolve the thread count actually used for `ray_count` rays.
    ///
    /// Explicit values are clamped to `[1, MAX_WORKERS]` and never exceed
    /// the number of rays, so idle threads are not spawned.
    pub fn resolved_worker_count(&self, ray_count: usize) -> usize {
        match self.workers {
            Some(n) => n.clamp(1, Self::MAX_WORKERS).min(ray_count.max(1)),
            None => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sequential_position_keyed() {
        let config = SolverConfig::default();
        assert_eq!(config.cycle_key, CycleKey::Position);
        assert_eq!(config.workers, None);
        assert_eq!(config.resolved_worker_count(10), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_workers_rejected() {
        let config = SolverConfig {
            workers: Some(0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWorkers));
    }

    #[test]
    fn worker_count_clamped_to_rays_and_cap() {
        let config = SolverConfig {
            workers: Some(8),
            ..Default::default()
        };
        assert_eq!(config.resolved_worker_count(3), 3);
        assert_eq!(config.resolved_worker_count(100), 8);
        assert_eq!(config.resolved_worker_count(0), 1);

        let config = SolverConfig {
            workers: Some(1000),
            ..Default::default()
        };
        assert_eq!(
            config.resolved_worker_count(1000),
            SolverConfig::MAX_WORKERS
        );
    }

    #[test]
    fn cycle_key_display() {
        assert_eq!(CycleKey::Position.to_string(), "position");
        assert_eq!(CycleKey::PositionVelocity.to_string(), "position-velocity");
    }
}
