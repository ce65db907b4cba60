//! Rectangular block grid for Lazor ray tracing.
//!
//! A [`Grid`] maps every in-range [`Coord`](lazor_core::Coord) to a
//! [`Block`](lazor_core::Block). Lookups outside the grid return `None`,
//! which is distinct from an in-range [`Block::Empty`](lazor_core::Block::Empty)
//! cell. Grids are built once from level data and then only read while
//! rays are traced.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::Grid;
