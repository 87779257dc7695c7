//! Action implementations for cliutil.
//!
//! Each action writes its output to the supplied writer (stdout in the
//! binary) and returns an exit code.

mod date;
mod echo;
mod over;

use crate::cli::{Action, ParsedArguments};
use crate::error::Result;
use std::io::Write;
use tracing::debug;

/// Dispatch a validated command line to its action.
pub fn dispatch(args: &ParsedArguments, out: &mut impl Write) -> Result<i32> {
    debug!(action = %args.action, values = args.values.len(), "dispatching");

    match args.action {
        Action::Echo => echo::run(args, out),
        Action::Date => date::run(args, out),
        Action::Over => over::run(out),
    }
}
