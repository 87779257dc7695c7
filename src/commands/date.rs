//! Implementation of the `date` action.

use crate::cli::ParsedArguments;
use crate::error::Result;
use crate::exit_codes;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::io::Write;

/// Timestamp layout: `YYYY-MM-DD HH:MM:SS`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Print the `-f` value (if any) followed by the current local date and time.
pub fn run(args: &ParsedArguments, out: &mut impl Write) -> Result<i32> {
    writeln!(out, "{}", render(&args.fish_value, &Local::now()))?;
    Ok(exit_codes::SUCCESS)
}

fn render<Tz>(fish_value: &str, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let stamp = now.format(DATE_FORMAT);
    if fish_value.is_empty() {
        stamp.to_string()
    } else {
        format!("{} {}", fish_value, stamp)
    }
}
