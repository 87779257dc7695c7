//! SIGINT handling.
//!
//! The handler fires once: it writes a short notice to stderr and ends the
//! process with [`exit_codes::INTERRUPTED`]. Only async-signal-safe calls
//! (`write(2)`, `_exit(2)`) are made from inside it.

#[cfg(unix)]
use crate::error::CliError;
use crate::error::Result;
#[cfg(unix)]
use crate::exit_codes;

/// Printed to stderr when interrupted.
#[cfg(unix)]
const NOTICE: &[u8] = b"\nExiting.\n";

/// Install the SIGINT handler for the rest of the process lifetime.
#[cfg(unix)]
pub fn install() -> Result<()> {
    use nix::sys::signal::{SaFlags, SigAction, SigHandler, SigSet, Signal, sigaction};

    let action = SigAction::new(
        SigHandler::Handler(on_interrupt),
        SaFlags::SA_RESETHAND,
        SigSet::empty(),
    );

    // SAFETY: on_interrupt only calls async-signal-safe functions.
    let previous = unsafe { sigaction(Signal::SIGINT, &action) };
    previous.map_err(|e| CliError::Platform(format!("cannot install SIGINT handler: {}", e)))?;

    Ok(())
}

#[cfg(not(unix))]
pub fn install() -> Result<()> {
    Ok(())
}

#[cfg(unix)]
extern "C" fn on_interrupt(_signal: nix::libc::c_int) {
    // SAFETY: NOTICE is a static buffer; both calls are async-signal-safe.
    unsafe {
        nix::libc::write(
            nix::libc::STDERR_FILENO,
            NOTICE.as_ptr().cast(),
            NOTICE.len(),
        );
        nix::libc::_exit(exit_codes::INTERRUPTED);
    }
}
