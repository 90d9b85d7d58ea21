//! Logger setup
//!
//! Simple `[LEVEL] message` output on stderr; the front end itself never
//! writes to the terminal, it only emits `tracing` events.

use tracing::Level;
use tracing_subscriber::fmt;

/// Install the global tracing subscriber
///
/// `verbose` raises the level from warnings to full debug output. Safe to
/// call once per process; later calls are ignored.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
