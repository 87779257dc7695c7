//! Implementation of the `over` action.

use crate::error::Result;
use crate::exit_codes;
use crate::platform;
use std::io::Write;

/// Print the operating system name and release, space separated.
pub fn run(out: &mut impl Write) -> Result<i32> {
    let os = platform::os_release()?;
    writeln!(out, "{}", os)?;
    Ok(exit_codes::SUCCESS)
}
