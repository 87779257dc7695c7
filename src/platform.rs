//! Host operating system queries.

#[cfg(unix)]
use crate::error::CliError;
use crate::error::Result;
use std::fmt;

/// Operating system name and release, as `uname -s` and `uname -r` report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsRelease {
    pub name: String,
    pub release: String,
}

impl fmt::Display for OsRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.release)
    }
}

/// Query the running kernel through `uname(2)`.
#[cfg(unix)]
pub fn os_release() -> Result<OsRelease> {
    let uts = nix::sys::utsname::uname()
        .map_err(|e| CliError::Platform(format!("uname failed: {}", e)))?;

    Ok(OsRelease {
        name: uts.sysname().to_string_lossy().into_owned(),
        release: uts.release().to_string_lossy().into_owned(),
    })
}

/// Without `uname` only the compile-time OS name is known.
#[cfg(not(unix))]
pub fn os_release() -> Result<OsRelease> {
    Ok(OsRelease {
        name: std::env::consts::OS.to_string(),
        release: "unknown".to_string(),
    })
}
