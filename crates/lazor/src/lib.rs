//! Lazor: a ray tracer for laser-and-block grid puzzles.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Lazor sub-crates, and hosts the `lazor` command-line tool.
//!
//! # Quick start
//!
//! ```rust
//! use lazor::prelude::*;
//!
//! let level = Level::parse(
//!     "GRID START\n\
//!      ooo\n\
//!      oCo\n\
//!      ooo\n\
//!      GRID STOP\n\
//!      L -1 1 1 0\n\
//!      P 1 2\n",
//! )
//! .unwrap();
//!
//! let solver = Solver::new(SolverConfig::default()).unwrap();
//! let solution = level.solve(&solver);
//! assert!(solution.solved);
//! assert_eq!(
//!     solution.paths[0],
//!     vec![Coord::new(0, 1), Coord::new(1, 1), Coord::new(1, 2)]
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lazor-core` | Coordinates, velocities, blocks, rays |
//! | [`grid`] | `lazor-grid` | The rectangular block grid |
//! | [`engine`] | `lazor-engine` | Tracer, solver, configuration, metrics |
//! | [`level`] | `lazor-level` | Level-file loader and report writer |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod logger;

/// Core value types (`lazor-core`).
pub use lazor_core as types;

/// The block grid (`lazor-grid`).
pub use lazor_grid as grid;

/// Tracing and solving (`lazor-engine`).
///
/// [`engine::trace`] follows one ray; [`engine::Solver`] runs every ray of
/// a level and picks the first to reach a target.
pub use lazor_engine as engine;

/// Level loading and report rendering (`lazor-level`).
pub use lazor_level as level;

/// Common imports for typical Lazor usage.
///
/// ```rust
/// use lazor::prelude::*;
/// ```
pub mod prelude {
    pub use lazor_core::{Block, Coord, Path, Ray, TargetSet, Velocity};
    pub use lazor_engine::{
        trace, CycleKey, Solution, Solver, SolverConfig, Termination, TraceOutcome, Tracer,
    };
    pub use lazor_grid::Grid;
    pub use lazor_level::{render_report, write_report, Level};
}
