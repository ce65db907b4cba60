//! Trace orchestration across all rays of a level.
//!
//! [`Solver::solve`] traces rays in input order and stops at the first one
//! that reaches *any* target. That ray's path is the solution. The solver
//! does not check that every target in the set was covered; callers that
//! care can ask [`Solution::uncovered_targets`].
//!
//! # Parallel mode
//!
//! With [`SolverConfig::workers`] above one, rays are striped across
//! scoped worker threads that share the grid and targets by reference.
//! Every ray is traced and results come back over a crossbeam channel;
//! the winner is then the hit with the lowest input index, so `solved`
//! and `paths` match the sequential answer exactly. Only `outcomes` and
//! `metrics` differ, because the sequential mode skips rays after the
//! first hit.

use std::thread;

use lazor_core::{Coord, Path, Ray, TargetSet};
use lazor_grid::Grid;
use log::{debug, info};
use smallvec::SmallVec;

use crate::config::{ConfigError, SolverConfig};
use crate::metrics::SolveMetrics;
use crate::tracer::{TraceOutcome, Tracer};

// ── Solution ────────────────────────────────────────────────────

/// Result of [`Solver::solve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// `true` iff some ray reached a target.
    pub solved: bool,
    /// The winning ray's path when solved, empty otherwise.
    pub paths: SmallVec<[Path; 1]>,
    /// Input index of the winning ray.
    pub winner: Option<usize>,
    /// Outcome of every traced ray, indexed by input position.
    pub outcomes: Vec<TraceOutcome>,
    /// Counters over `outcomes`.
    pub metrics: SolveMetrics,
}

impl Solution {
    fn from_outcomes(outcomes: Vec<TraceOutcome>) -> Self {
        let mut metrics = SolveMetrics::default();
        for outcome in &outcomes {
            metrics.record(outcome);
        }

        let winner = outcomes.iter().position(|o| o.hit);
        let paths = match winner {
            Some(i) => SmallVec::from_elem(outcomes[i].path.clone(), 1),
            None => SmallVec::new(),
        };

        Self {
            solved: winner.is_some(),
            paths,
            winner,
            outcomes,
            metrics,
        }
    }

    /// Targets that no reported path visits, in target-set order.
    ///
    /// Empty for an unsolved solution only if `targets` is empty.
    pub fn uncovered_targets(&self, targets: &TargetSet) -> Vec<Coord> {
        targets
            .iter()
            .filter(|t| !self.paths.iter().any(|path| path.contains(t)))
            .copied()
            .collect()
    }
}

// ── Solver ──────────────────────────────────────────────────────

/// Runs the tracer over every ray of a level.
///
/// # Example
///
/// ```
/// use lazor_core::{Coord, Ray, TargetSet};
/// use lazor_engine::{Solver, SolverConfig};
/// use lazor_grid::Grid;
///
/// let grid = Grid::new(3, 3).unwrap();
/// let targets: TargetSet = [Coord::new(1, 2)].into_iter().collect();
/// let rays = [Ray::new((0, 0), (0, -1)), Ray::new((1, 0), (0, 1))];
///
/// let solver = Solver::new(SolverConfig::default()).unwrap();
/// let solution = solver.solve(&rays, &grid, &targets);
/// assert!(solution.solved);
/// assert_eq!(solution.winner, Some(1));
/// assert_eq!(solution.paths[0], vec![Coord::new(1, 1), Coord::new(1, 2)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a solver after validating `config`.
    pub fn new(config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Trace `rays` through `grid` and report the first one to reach a
    /// target.
    ///
    /// The input rays are copied before tracing and left untouched, so
    /// repeated calls with the same inputs return equal solutions.
    pub fn solve(&self, rays: &[Ray], grid: &Grid, targets: &TargetSet) -> Solution {
        let tracer = Tracer::new(grid, targets).with_cycle_key(self.config.cycle_key);
        let workers = self.config.resolved_worker_count(rays.len());

        let outcomes = if workers > 1 {
            debug!("tracing {} rays on {workers} workers", rays.len());
            trace_parallel(tracer, rays, workers)
        } else {
            trace_sequential(tracer, rays)
        };

        let solution = Solution::from_outcomes(outcomes);
        match solution.winner {
            Some(i) => info!(
                "solved by ray {i} after {} steps",
                solution.outcomes[i].steps
            ),
            None => info!("no ray reached a target ({} traced)", rays.len()),
        }
        solution
    }
}

fn trace_sequential(tracer: Tracer<'_>, rays: &[Ray]) -> Vec<TraceOutcome> {
    let mut outcomes = Vec::with_capacity(rays.len());
    for (index, ray) in rays.iter().enumerate() {
        let mut ray = *ray;
        let outcome = tracer.trace(&mut ray);
        debug!("ray {index}: {}", outcome.termination);
        let hit = outcome.hit;
        outcomes.push(outcome);
        if hit {
            break;
        }
    }
    outcomes
}

fn trace_parallel(tracer: Tracer<'_>, rays: &[Ray], workers: usize) -> Vec<TraceOutcome> {
    let (result_tx, result_rx) = crossbeam_channel::unbounded::<(usize, TraceOutcome)>();

    thread::scope(|scope| {
        for worker in 0..workers {
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                for (index, ray) in rays.iter().enumerate().skip(worker).step_by(workers) {
                    let mut ray = *ray;
                    let outcome = tracer.trace(&mut ray);
                    if result_tx.send((index, outcome)).is_err() {
                        break;
                    }
                }
            });
        }
    });
    drop(result_tx);

    let mut slots: Vec<Option<TraceOutcome>> = vec![None; rays.len()];
    for (index, outcome) in result_rx.try_iter() {
        debug!("ray {index}: {}", outcome.termination);
        slots[index] = Some(outcome);
    }
    slots.into_iter().flatten().collect()
}
