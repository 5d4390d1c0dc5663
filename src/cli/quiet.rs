//! Global quiet mode state for CLI.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global quiet mode flag - suppresses warnings and logging
static QUIET: AtomicBool = AtomicBool::new(false);

/// Enable quiet mode. Also silences the logger.
pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
    if quiet {
        log::set_max_level(log::LevelFilter::Off);
    }
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}
