//! Command-line arguments for the `lazor` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use lazor_engine::{CycleKey, SolverConfig};
use log::LevelFilter;

/// Log verbosity accepted by `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    Warn,
    /// Load and solve summaries.
    Info,
    /// Per-ray outcomes.
    Debug,
    /// Every tracer step.
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Cycle guard choice accepted by `--cycle-key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CycleKeyArg {
    /// Stop a ray on any revisited cell.
    Position,
    /// Stop a ray only when it revisits a cell with the same velocity.
    PositionVelocity,
}

impl From<CycleKeyArg> for CycleKey {
    fn from(arg: CycleKeyArg) -> Self {
        match arg {
            CycleKeyArg::Position => CycleKey::Position,
            CycleKeyArg::PositionVelocity => CycleKey::PositionVelocity,
        }
    }
}

/// Trace the lasers of a level file and report the first one to reach a target.
#[derive(Debug, Parser)]
#[command(name = "lazor", version, about)]
pub struct Args {
    /// Level file to solve.
    pub level: PathBuf,

    /// Where to write the solution report.
    #[arg(short, long, default_value = "solution.txt")]
    pub output: PathBuf,

    /// Trace lasers on this many threads (1 = sequential).
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// What the cycle guard remembers about visited cells.
    #[arg(long, value_enum, default_value_t = CycleKeyArg::Position)]
    pub cycle_key: CycleKeyArg,

    /// Logging level.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

impl Args {
    /// Solver configuration selected by these arguments.
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            cycle_key: self.cycle_key.into(),
            workers: self.workers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["lazor", "mad_1.bff"]).unwrap();
        assert_eq!(args.level, PathBuf::from("mad_1.bff"));
        assert_eq!(args.output, PathBuf::from("solution.txt"));
        assert_eq!(args.log_level, LogLevel::Warn);
        assert_eq!(args.solver_config(), SolverConfig::default());
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "lazor",
            "level.bff",
            "--output",
            "out.txt",
            "--workers",
            "4",
            "--cycle-key",
            "position-velocity",
            "--log-level",
            "trace",
        ])
        .unwrap();
        assert_eq!(args.output, PathBuf::from("out.txt"));
        assert_eq!(args.log_level, LogLevel::Trace);
        let config = args.solver_config();
        assert_eq!(config.workers, Some(4));
        assert_eq!(config.cycle_key, CycleKey::PositionVelocity);
    }

    #[test]
    fn level_is_required() {
        assert!(Args::try_parse_from(["lazor"]).is_err());
    }

    #[test]
    fn log_level_maps_to_filter() {
        assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::Debug);
        assert_eq!(LevelFilter::from(LogLevel::Error), LevelFilter::Error);
    }
}
