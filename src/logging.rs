//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`, leaving stdout to action
//! output, help text and the `-d` dumps.

use tracing::level_filters::LevelFilter;

/// Install the global subscriber. `debug` comes from the `-d` flag.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(debug: bool) {
    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
