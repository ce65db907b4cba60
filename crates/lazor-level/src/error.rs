//! Error types for level loading.

use std::fmt;
use std::io;

use lazor_grid::GridError;

/// Errors that can occur while reading or parsing a level.
///
/// Line numbers are 1-based and refer to the original text, comments and
/// blank lines included.
#[derive(Debug)]
pub enum LevelError {
    /// An I/O error occurred while reading the level file.
    Io(io::Error),
    /// The grid section does not describe a valid grid.
    Grid(GridError),
    /// `GRID START` was never closed by `GRID STOP`.
    UnterminatedGrid {
        /// Line of the opening `GRID START`.
        start_line: usize,
    },
    /// `GRID STOP` appeared outside a grid section.
    UnexpectedGridStop {
        /// Line of the stray `GRID STOP`.
        line: usize,
    },
    /// A second `GRID START` appeared after a grid was already read.
    DuplicateGrid {
        /// Line of the second `GRID START`.
        line: usize,
    },
    /// A laser or target line has the wrong number of fields.
    MalformedDirective {
        /// Line of the directive.
        line: usize,
        /// `"laser"` or `"target"`.
        kind: &'static str,
        /// Number of integers expected after the tag.
        expected: usize,
        /// Number of fields found after the tag.
        found: usize,
    },
    /// A field that should be an integer is not.
    InvalidInteger {
        /// Line of the field.
        line: usize,
        /// The offending text.
        token: String,
    },
    /// The level has no grid section.
    MissingGrid,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
            Self::UnterminatedGrid { start_line } => {
                write!(f, "GRID START on line {start_line} has no matching GRID STOP")
            }
            Self::UnexpectedGridStop { line } => {
                write!(f, "line {line}: GRID STOP without GRID START")
            }
            Self::DuplicateGrid { line } => {
                write!(f, "line {line}: level already has a grid")
            }
            Self::MalformedDirective {
                line,
                kind,
                expected,
                found,
            } => {
                write!(
                    f,
                    "line {line}: {kind} needs {expected} integers, found {found} fields"
                )
            }
            Self::InvalidInteger { line, token } => {
                write!(f, "line {line}: '{token}' is not an integer")
            }
            Self::MissingGrid => write!(f, "level has no GRID START / GRID STOP section"),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LevelError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for LevelError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
