use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Installs the stderr subscriber. `-v` raises the level one step at a time
/// from warnings; `quiet` silences everything.
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already installed.
pub fn setup_logging(verbosity: u8, quiet: bool) -> Result<(), String> {
    let level_filter = if quiet {
        LevelFilter::OFF
    } else {
        level_for(verbosity)
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(level_filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| format!("could not install logger: {e}"))
}

#[must_use]
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
