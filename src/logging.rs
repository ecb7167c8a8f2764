//! Diagnostic logging bootstrap.
//!
//! Logs go to stderr so they never interleave with menu text on stdout.
//! The level comes from command-line flags only; `RUST_LOG` is not read.

use log::LevelFilter;

/// Map `-q` / `-v` counts to a level filter. Default is `warn`.
pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. A second call is a no-op.
pub fn init_logging(verbosity: u8, quiet: bool) {
    let level = level_for(verbosity, quiet);
    let result = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .format_target(false)
        .target(env_logger::Target::Stderr)
        .try_init();

    if result.is_ok() {
        log::debug!("logging initialized at {level}");
    }
}
