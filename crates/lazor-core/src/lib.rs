//! Core types for the Lazor ray-tracing engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types every other Lazor crate speaks in: grid coordinates and
//! velocities, the optical [`Block`] kinds with their interaction rules,
//! and the mutable [`Ray`] state that a tracer advances step by step.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod id;
pub mod ray;

pub use block::Block;
pub use id::{Coord, Path, TargetSet, Velocity};
pub use ray::Ray;
