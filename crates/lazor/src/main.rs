//! `lazor` command-line entry point.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use lazor::cli::Args;
use lazor::logger::init_logger;
use lazor_engine::{Solution, Solver};
use lazor_level::{write_report, Level, LevelError, NO_SOLUTION_MARKER};
use log::info;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.log_level.into());

    match run(&args) {
        Ok(true) => {
            println!(
                "Solution found! Report written to {}",
                args.output.display()
            );
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("{NO_SOLUTION_MARKER}");
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

/// Load, solve and report. Returns whether a laser reached a target.
fn run(args: &Args) -> Result<bool, RunError> {
    let solver = Solver::new(args.solver_config()).map_err(RunError::Config)?;
    let level = Level::load(&args.level).map_err(RunError::Level)?;
    let solution = level.solve(&solver);
    info!(
        "traced {} lasers in {} steps",
        solution.metrics.rays_traced, solution.metrics.total_steps
    );
    if solution.solved {
        save_report(&args.output, &solution).map_err(|source| RunError::Output {
            path: args.output.display().to_string(),
            source,
        })?;
    }
    Ok(solution.solved)
}

fn save_report(path: &Path, solution: &Solution) -> io::Result<()> {
    let file = File::create(path)?;
    write_report(BufWriter::new(file), solution)
}

#[derive(Debug)]
enum RunError {
    Config(lazor_engine::ConfigError),
    Level(LevelError),
    Output { path: String, source: io::Error },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid solver configuration: {e}"),
            Self::Level(e) => write!(f, "cannot load level: {e}"),
            Self::Output { path, source } => write!(f, "cannot write report to {path}: {source}"),
        }
    }
}
