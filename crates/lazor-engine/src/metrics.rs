//! Aggregate counters for a solve.
//!
//! [`SolveMetrics`] tallies how the traced rays ended. It carries no
//! timing data, so two solves of the same level always produce equal
//! metrics.

use crate::tracer::{Termination, TraceOutcome};

/// Counters collected over every ray a [`Solver`](crate::Solver) traced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolveMetrics {
    /// Number of rays handed to the tracer.
    pub rays_traced: usize,
    /// Sum of steps taken across all traced rays.
    pub total_steps: usize,
    /// Rays that reached a target.
    pub target_hits: usize,
    /// Rays that left the grid.
    pub exited: usize,
    /// Rays absorbed by an opaque block.
    pub absorbed: usize,
    /// Rays stopped by the cycle guard.
    pub cycles: usize,
    /// Rays that were already inactive.
    pub inactive: usize,
}

impl SolveMetrics {
    /// Fold one trace outcome into the counters.
    pub fn record(&mut self, outcome: &TraceOutcome) {
        self.rays_traced += 1;
        self.total_steps += outcome.steps;
        match outcome.termination {
            Termination::TargetHit => self.target_hits += 1,
            Termination::ExitedGrid => self.exited += 1,
            Termination::Absorbed => self.absorbed += 1,
            Termination::CycleDetected => self.cycles += 1,
            Termination::Inactive => self.inactive += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazor_core::Coord;

    fn outcome(termination: Termination, steps: usize) -> TraceOutcome {
        TraceOutcome {
            path: vec![Coord::new(0, 0); steps],
            hit: termination == Termination::TargetHit,
            termination,
            steps,
        }
    }

    #[test]
    fn default_metrics_are_zero() {
        let m = SolveMetrics::default();
        assert_eq!(m.rays_traced, 0);
        assert_eq!(m.total_steps, 0);
        assert_eq!(m.target_hits, 0);
        assert_eq!(m.exited, 0);
        assert_eq!(m.absorbed, 0);
        assert_eq!(m.cycles, 0);
        assert_eq!(m.inactive, 0);
    }

    #[test]
    fn record_tallies_by_termination() {
        let mut m = SolveMetrics::default();
        m.record(&outcome(Termination::ExitedGrid, 3));
        m.record(&outcome(Termination::Absorbed, 2));
        m.record(&outcome(Termination::CycleDetected, 5));
        m.record(&outcome(Termination::TargetHit, 1));
        m.record(&outcome(Termination::Inactive, 0));
        assert_eq!(m.rays_traced, 5);
        assert_eq!(m.total_steps, 11);
        assert_eq!(m.exited, 1);
        assert_eq!(m.absorbed, 1);
        assert_eq!(m.cycles, 1);
        assert_eq!(m.target_hits, 1);
        assert_eq!(m.inactive, 1);
    }
}
