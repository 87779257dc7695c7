//! Error types for cliutil.
//!
//! Uses thiserror for derive macros. Parsing and validation only ever
//! produce a [`UsageError`]; everything else is wrapped by [`CliError`].

use crate::exit_codes;
use std::io;
use thiserror::Error;

/// A user-facing problem with the command line.
///
/// The messages are printed after a `*** Error: ` prefix and followed by
/// the help hint, so they carry no prefix of their own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// `-f` was the last argument, or was followed by an empty argument.
    #[error("-f requires an argument.")]
    MissingFlagValue,

    /// A `-`-prefixed argument in the flags phase that matches no flag.
    #[error("Unrecognized flag [{0}].")]
    UnrecognizedFlag(String),

    #[error("Missing required action word.")]
    MissingAction,

    /// Holds the lower-cased argument.
    #[error("Unrecognized action [{0}]")]
    UnrecognizedAction(String),

    #[error("Action ECHO requires one or more value arguments.")]
    EchoRequiresValues,

    #[error("Action DATE does not allow extra value arguments.")]
    DateDisallowsValues,

    #[error("Action OVER does not allow -f nor extra value arguments.")]
    OverDisallowsFishOrValues,
}

/// Main error type for cliutil operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Action output could not be written.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    /// The host could not be queried for its OS name and release.
    #[error("platform query failed: {0}")]
    Platform(String),
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => exit_codes::USAGE_ERROR,
            CliError::Io(_) => exit_codes::RUNTIME_FAILURE,
            CliError::Platform(_) => exit_codes::RUNTIME_FAILURE,
        }
    }
}

/// Result type alias for cliutil operations.
pub type Result<T> = std::result::Result<T, CliError>;
