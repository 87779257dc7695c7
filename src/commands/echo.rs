//! Implementation of the `echo` action.

use crate::cli::ParsedArguments;
use crate::error::Result;
use crate::exit_codes;
use std::io::Write;

/// Print the `-f` value (if any) and every value argument, each quoted,
/// separated by single spaces.
pub fn run(args: &ParsedArguments, out: &mut impl Write) -> Result<i32> {
    writeln!(out, "{}", render(&args.fish_value, &args.values))?;
    Ok(exit_codes::SUCCESS)
}

fn render(fish_value: &str, values: &[String]) -> String {
    let fish = (!fish_value.is_empty()).then_some(fish_value);

    fish.into_iter()
        .chain(values.iter().map(String::as_str))
        .map(|word| format!("\"{}\"", word))
        .collect::<Vec<_>>()
        .join(" ")
}
