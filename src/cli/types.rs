//! Parsed command line model.

use crate::error::UsageError;
use std::fmt;
use std::str::FromStr;

/// The action keyword selecting what the utility does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Print the `-f` value and the value arguments, quoted.
    Echo,
    /// Print the `-f` value, if any, and the local date and time.
    Date,
    /// Print the operating system name and release.
    Over,
}

impl Action {
    /// Lower-case keyword as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Echo => "echo",
            Action::Date => "date",
            Action::Over => "over",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = UsageError;

    /// Case-insensitive match against the three keywords.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        match lowered.as_str() {
            "echo" => Ok(Action::Echo),
            "date" => Ok(Action::Date),
            "over" => Ok(Action::Over),
            _ => Err(UsageError::UnrecognizedAction(lowered)),
        }
    }
}

/// A fully parsed and validated command line.
///
/// Built once by [`super::parser::parse`] and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArguments {
    /// `-d`: debug tracing.
    pub debug: bool,

    /// `-e`: example boolean flag, no behavior attached.
    pub easy: bool,

    /// `-f` value. Empty when the flag was not given (or given as `-f=`).
    pub fish_value: String,

    pub action: Action,

    /// Everything after the action keyword, verbatim and in order.
    pub values: Vec<String>,
}
