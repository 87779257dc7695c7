//! Command line handling for cliutil.
//!
//! The grammar is positional and order-sensitive (flags, then one action
//! word, then free-form values), so it is parsed by hand in [`parser`].
//! This module decides whether an invocation is a help request or a run.

pub mod parser;
pub mod trace;
pub mod types;

#[cfg(test)]
mod tests;

pub use types::{Action, ParsedArguments};

use crate::error::UsageError;
use std::ffi::OsString;
use std::path::Path;

/// First arguments that request the full help text.
pub const HELP_FLAGS: [&str; 3] = ["-h", "-?", "--help"];

/// First argument that turns on the raw and parsed debug dumps.
pub const TRACE_FLAG: &str = "-d";

/// What a single process invocation asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments, or a help flag in first position.
    Help,

    /// A valid command line to dispatch.
    Run {
        args: ParsedArguments,
        /// `-d` was the very first argument.
        trace: bool,
    },
}

impl Invocation {
    /// Classify the full process argument list, `argv[0]` included.
    ///
    /// Help flags only count in first position; later on they are
    /// ordinary (unrecognized) flags.
    pub fn from_argv(argv: &[String]) -> Result<Self, UsageError> {
        let Some(first) = argv.get(1) else {
            return Ok(Invocation::Help);
        };

        if HELP_FLAGS.contains(&first.as_str()) {
            return Ok(Invocation::Help);
        }

        let args = parser::parse(&argv[1..])?;
        Ok(Invocation::Run {
            args,
            trace: first == TRACE_FLAG,
        })
    }
}

/// Whether the debug dumps are enabled for this argument list.
pub fn wants_trace(argv: &[String]) -> bool {
    argv.get(1).is_some_and(|arg| arg == TRACE_FLAG)
}

/// Name the program was invoked as: the last path component of `argv[0]`.
pub fn program_name(argv: &[String]) -> String {
    argv.first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

/// Convert process arguments to `String`s.
///
/// Arguments that are not valid UTF-8 are converted lossily: each invalid
/// sequence becomes U+FFFD.
pub fn collect_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}
