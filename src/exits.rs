//! Exit handling: fatal errors and signal handlers.

use std::io::Write;

use crate::error::Error;

pub const FAILURE: i32 = 1;
pub const INTERRUPTED: i32 = 130;

/// Report a fatal error on stdout and exit with status 1.
/// Owned buffers must already be dropped; nothing runs after this.
pub fn fail(err: &Error) -> ! {
    log::debug!("fatal: {:?}", err);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let _ = writeln!(out, "{}", err);
    let _ = out.flush();
    std::process::exit(FAILURE)
}

/// Signal handler for SIGINT/SIGTERM/SIGHUP - exit without printing a password
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::_exit(INTERRUPTED) }
}

/// Install signal handlers. Call this early in main().
pub fn install_handlers() {
    unsafe {
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep password memory out of core dumps.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}
