//! Single-ray step loop.
//!
//! Each step of a trace runs, in order:
//!
//! 1. **Move**: position += velocity. The starting cell is never
//!    recorded or checked.
//! 2. **Bounds**: a position outside the grid ends the trace
//!    ([`Termination::ExitedGrid`]) without a path entry.
//! 3. **Record**: the position is appended to the path.
//! 4. **Target**: a target position ends the trace with a hit. This runs
//!    before interaction, so an opaque target still counts.
//! 5. **Cycle guard**: a position seen earlier in this trace ends it
//!    ([`Termination::CycleDetected`]).
//! 6. **Interact**: the cell's block acts on the ray. An opaque block
//!    deactivates it and the loop ends ([`Termination::Absorbed`]).

use indexmap::IndexSet;
use lazor_core::{Coord, Path, Ray, TargetSet, Velocity};
use lazor_grid::Grid;
use log::{debug, trace as trace_log};
use std::fmt;

use crate::config::CycleKey;

/// Why a trace stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The ray landed on a target cell.
    TargetHit,
    /// The ray stepped outside the grid.
    ExitedGrid,
    /// An opaque block absorbed the ray.
    Absorbed,
    /// The ray re-entered a cell it had already crossed.
    CycleDetected,
    /// The ray was inactive before the first step.
    Inactive,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::TargetHit => "target hit",
            Self::ExitedGrid => "exited grid",
            Self::Absorbed => "absorbed",
            Self::CycleDetected => "cycle detected",
            Self::Inactive => "inactive",
        };
        f.write_str(s)
    }
}

/// Result of tracing one ray.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceOutcome {
    /// In-bounds positions visited, in order.
    pub path: Path,
    /// `true` iff the trace ended on a target.
    pub hit: bool,
    /// Why the trace stopped.
    pub termination: Termination,
    /// Number of moves made, including a final move out of the grid.
    pub steps: usize,
}

/// Cells already crossed during one trace.
enum Visited {
    Position(IndexSet<Coord>),
    PositionVelocity(IndexSet<(Coord, Velocity)>),
}

impl Visited {
    fn new(key: CycleKey) -> Self {
        match key {
            CycleKey::Position => Self::Position(IndexSet::new()),
            CycleKey::PositionVelocity => Self::PositionVelocity(IndexSet::new()),
        }
    }

    /// Returns `false` if the entry was already present.
    fn insert(&mut self, position: Coord, velocity: Velocity) -> bool {
        match self {
            Self::Position(set) => set.insert(position),
            Self::PositionVelocity(set) => set.insert((position, velocity)),
        }
    }

    /// Number of entries from the first visit of this key to the newest,
    /// i.e. the length of the loop a repeat visit would close.
    fn loop_len(&self, position: Coord, velocity: Velocity) -> Option<usize> {
        let (index, len) = match self {
            Self::Position(set) => (set.get_index_of(&position)?, set.len()),
            Self::PositionVelocity(set) => {
                (set.get_index_of(&(position, velocity))?, set.len())
            }
        };
        Some(len - index)
    }
}

/// Traces rays through one grid against one target set.
///
/// The grid and targets are borrowed read-only, so a single `Tracer` can
/// be shared by reference across threads. Each [`trace`](Tracer::trace)
/// call owns its visited set; nothing carries over between calls.
#[derive(Clone, Copy, Debug)]
pub struct Tracer<'a> {
    grid: &'a Grid,
    targets: &'a TargetSet,
    cycle_key: CycleKey,
}

impl<'a> Tracer<'a> {
    /// Create a tracer with the default position-keyed cycle guard.
    pub fn new(grid: &'a Grid, targets: &'a TargetSet) -> Self {
        Self {
            grid,
            targets,
            cycle_key: CycleKey::default(),
        }
    }

    /// Use `cycle_key` for the cycle guard.
    pub fn with_cycle_key(mut self, cycle_key: CycleKey) -> Self {
        self.cycle_key = cycle_key;
        self
    }

    /// The grid being traced.
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// The target set being checked.
    pub fn targets(&self) -> &'a TargetSet {
        self.targets
    }

    /// Advance `ray` until it stops, mutating it in place.
    ///
    /// On return the ray is inactive unless it stopped on a target.
    pub fn trace(&self, ray: &mut Ray) -> TraceOutcome {
        let mut path = Path::new();
        if !ray.is_active() {
            return finish(path, Termination::Inactive, 0);
        }

        let mut visited = Visited::new(self.cycle_key);
        let mut steps = 0;

        while ray.is_active() {
            steps += 1;
            let entry_velocity = ray.velocity();
            let position = match ray.advance() {
                Some(p) if self.grid.contains(p) => p,
                _ => {
                    ray.deactivate();
                    return finish(path, Termination::ExitedGrid, steps);
                }
            };

            path.push(position);
            trace_log!("step {steps}: {position} heading {entry_velocity}");

            if self.targets.contains(&position) {
                return finish(path, Termination::TargetHit, steps);
            }

            if !visited.insert(position, entry_velocity) {
                if let Some(cells) = visited.loop_len(position, entry_velocity) {
                    debug!("cycle closes at {position} after a loop of {cells} cells");
                }
                ray.deactivate();
                return finish(path, Termination::CycleDetected, steps);
            }

            if let Some(block) = self.grid.block_at(position) {
                block.interact(ray);
            }
        }

        finish(path, Termination::Absorbed, steps)
    }
}

fn finish(path: Path, termination: Termination, steps: usize) -> TraceOutcome {
    debug!(
        "trace ended after {steps} steps ({termination}), path length {}",
        path.len()
    );
    TraceOutcome {
        path,
        hit: termination == Termination::TargetHit,
        termination,
        steps,
    }
}

/// Trace `ray` through `grid` with the default cycle guard.
///
/// # Examples
///
/// ```
/// use lazor_core::{Coord, Ray, TargetSet};
/// use lazor_engine::trace;
/// use lazor_grid::Grid;
///
/// let grid = Grid::new(3, 3).unwrap();
/// let targets: TargetSet = [Coord::new(2, 1)].into_iter().collect();
/// let mut ray = Ray::new((0, 1), (1, 0));
///
/// let outcome = trace(&mut ray, &grid, &targets);
/// assert!(outcome.hit);
/// assert_eq!(outcome.path, vec![Coord::new(1, 1), Coord::new(2, 1)]);
/// ```
pub fn trace(ray: &mut Ray, grid: &Grid, targets: &TargetSet) -> TraceOutcome {
    Tracer::new(grid, targets).trace(ray)
}
