//! Command line grammar: `flags* ACTION values*`, then per-action validation.
//!
//! Parsing is pure. Nothing here prints or exits; every failure comes back
//! as a [`UsageError`] for `main` to report.

use super::types::{Action, ParsedArguments};
use crate::error::UsageError;

/// Flags collected before the action keyword.
#[derive(Debug, Default)]
struct Flags {
    debug: bool,
    easy: bool,
    fish_value: String,
}

/// Parse the arguments that follow the program name.
///
/// # Arguments
///
/// * `args` - process arguments without `argv[0]`
///
/// # Returns
///
/// * `Ok(ParsedArguments)` - grammar matched and the combination is legal
/// * `Err(UsageError)` - first problem found, in grammar order
pub fn parse(args: &[String]) -> Result<ParsedArguments, UsageError> {
    let mut flags = Flags::default();
    let rest = parse_flags(args, &mut flags)?;
    let (action, rest) = parse_action(rest)?;

    let parsed = ParsedArguments {
        debug: flags.debug,
        easy: flags.easy,
        fish_value: flags.fish_value,
        action,
        values: rest.to_vec(),
    };

    validate(&parsed)?;
    Ok(parsed)
}

/// Consume leading flags and return the unconsumed tail.
///
/// The phase ends at the first argument that does not start with `-`.
/// A bare `-` does start with `-`, so it is rejected as a flag.
fn parse_flags<'a>(args: &'a [String], flags: &mut Flags) -> Result<&'a [String], UsageError> {
    let mut i = 0;

    while i < args.len() {
        let arg = args[i].as_str();
        if !arg.starts_with('-') {
            break;
        }

        match arg {
            "-d" => flags.debug = true,
            "-e" => flags.easy = true,
            _ if arg.starts_with("-f") => {
                let (value, consumed_next) = fish_value(arg, args.get(i + 1))?;
                flags.fish_value = value;
                if consumed_next {
                    i += 1;
                }
            }
            _ => return Err(UsageError::UnrecognizedFlag(arg.to_string())),
        }

        i += 1;
    }

    Ok(&args[i..])
}

/// Resolve the value of a `-f` argument.
///
/// Forms are tried in order: `-f=VALUE`, `-fVALUE`, `-f VALUE`. The
/// separate form takes the next argument verbatim, even one starting with
/// `-`, but not an empty one. Returns whether the next argument was used.
fn fish_value(arg: &str, next: Option<&String>) -> Result<(String, bool), UsageError> {
    if let Some(value) = arg.strip_prefix("-f=") {
        return Ok((value.to_string(), false));
    }

    if let Some(value) = arg.strip_prefix("-f").filter(|v| !v.is_empty()) {
        return Ok((value.to_string(), false));
    }

    match next {
        Some(value) if !value.is_empty() => Ok((value.clone(), true)),
        _ => Err(UsageError::MissingFlagValue),
    }
}

/// Take the action keyword off the front of `args`.
fn parse_action(args: &[String]) -> Result<(Action, &[String]), UsageError> {
    match args.split_first() {
        Some((word, rest)) if !word.is_empty() => Ok((word.parse()?, rest)),
        _ => Err(UsageError::MissingAction),
    }
}

/// Check that the `-f` value and the values are legal for the action.
///
/// - echo needs at least one value
/// - date takes no values (`-f` is fine)
/// - over takes neither
pub fn validate(parsed: &ParsedArguments) -> Result<(), UsageError> {
    match parsed.action {
        Action::Echo if parsed.values.is_empty() => Err(UsageError::EchoRequiresValues),
        Action::Date if !parsed.values.is_empty() => Err(UsageError::DateDisallowsValues),
        Action::Over if !parsed.fish_value.is_empty() || !parsed.values.is_empty() => {
            Err(UsageError::OverDisallowsFishOrValues)
        }
        _ => Ok(()),
    }
}
