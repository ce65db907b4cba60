//! Level-file loader and solution report writer for Lazor.
//!
//! The level format is line-oriented text:
//!
//! ```text
//! # comment
//! GRID START
//! ooo
//! oBo
//! ooo
//! GRID STOP
//! L 0 1 1 0      laser: row col d_row d_col
//! P 2 1          target: row col
//! ```
//!
//! Grid cells use the block tags `A` (reflective), `B` (opaque) and
//! `C` (refractive). Every other character of a row, spaces included,
//! is an empty cell, so `o A o` is five cells wide.
//!
//! - [`Level`] parses that text into the grid, rays and targets the
//!   engine consumes.
//! - [`write_report`] renders a [`Solution`](lazor_engine::Solution) as
//!   the plain-text path listing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod level;
pub mod report;

pub use error::LevelError;
pub use level::Level;
pub use report::{render_report, write_report, COMPLETION_MARKER, NO_SOLUTION_MARKER};
