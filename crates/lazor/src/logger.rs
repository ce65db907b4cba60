//! Logger setup for the `lazor` binary.

use log::LevelFilter;

/// Initialize the logger with the specified level.
///
/// `RUST_LOG` is read first; `level` then overrides the global filter.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
