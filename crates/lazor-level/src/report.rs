//! Plain-text solution reports.
//!
//! A solved report lists each path as a `Path:` header, one
//! `(row, col)` line per visited cell and a blank separator line, and
//! ends with [`COMPLETION_MARKER`]. An unsolved solution renders as the
//! single line [`NO_SOLUTION_MARKER`].

use std::io::{self, Write};

use lazor_engine::Solution;

/// Final line of a solved report.
pub const COMPLETION_MARKER: &str = "Solution complete. All targets hit.";

/// The whole report for an unsolved level.
pub const NO_SOLUTION_MARKER: &str = "No solution found.";

/// Render the report for `solution` as a string.
pub fn render_report(solution: &Solution) -> String {
    if !solution.solved {
        return format!("{NO_SOLUTION_MARKER}\n");
    }
    let mut out = String::new();
    for path in &solution.paths {
        out.push_str("Path:\n");
        for coord in path {
            out.push_str(&coord.to_string());
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str(COMPLETION_MARKER);
    out.push('\n');
    out
}

/// Write the report for `solution` to `writer`.
pub fn write_report<W: Write>(mut writer: W, solution: &Solution) -> io::Result<()> {
    writer.write_all(render_report(solution).as_bytes())?;
    writer.flush()
}
