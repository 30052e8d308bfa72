//! Diagnostics for `datecalc`. Results go to stdout; tracing events go to
//! stderr and are silent below `warn` unless asked for.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Only the binary and the calendar engine log; dependencies stay quiet.
const TARGETS: [&str; 2] = ["datecalc", "civil_calendar"];

/// Level selected by a repeated `-v` flag.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `target=level` directives for [`TARGETS`] at the given verbosity.
fn directives(verbosity: u8) -> String {
    let level = level_for(verbosity);
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber. A set `RUST_LOG` wins over `-v`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity > 1)
        .with_writer(std::io::stderr)
        .init();
}
