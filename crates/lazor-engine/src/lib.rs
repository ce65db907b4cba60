//! Ray tracer and solver for Lazor levels.
//!
//! - [`trace`] / [`Tracer`] advance a single [`Ray`](lazor_core::Ray)
//!   through a [`Grid`](lazor_grid::Grid) until it leaves the grid, is
//!   absorbed, revisits a cell, or lands on a target.
//! - [`Solver`] runs the tracer over every ray of a level and reports the
//!   first ray (in input order) that reaches a target.
//!
//! Tracing is synchronous and allocation-light. The solver can optionally
//! spread rays over worker threads; results are identical either way.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod solver;
pub mod tracer;

pub use config::{ConfigError, CycleKey, SolverConfig};
pub use metrics::SolveMetrics;
pub use solver::{Solution, Solver};
pub use tracer::{trace, Termination, TraceOutcome, Tracer};
