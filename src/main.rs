//! cliutil: a starting point for small command-line utilities.
//!
//! This is the main entry point for the `cliutil` binary. It parses
//! arguments, dispatches to the selected action, and turns errors into
//! messages and exit codes. Nothing below `main` prints errors or exits.

mod cli;
mod commands;
mod error;
mod exit_codes;
mod help;
mod interrupt;
mod logging;
mod platform;

use cli::{Invocation, trace};
use error::{CliError, Result};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = interrupt::install() {
        eprintln!("Warning: {}", err);
    }

    let argv = cli::collect_args(std::env::args_os());

    let result = {
        let mut out = io::stdout().lock();
        let result = run(&argv, &mut out);
        let _ = out.flush();
        result
    };

    match result {
        Ok(code) => ExitCode::from(code as u8),
        Err(CliError::Usage(err)) => {
            // Usage errors share stdout with the help text
            println!("*** Error: {}", err);
            println!("{}", help::HINT);
            ExitCode::from(exit_codes::USAGE_ERROR as u8)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Parse `argv` (program name included), dispatch, and return the exit code.
///
/// A help request is not an error but still exits with
/// [`exit_codes::USAGE_ERROR`].
fn run(argv: &[String], out: &mut impl Write) -> Result<i32> {
    if cli::wants_trace(argv) {
        writeln!(out, "{}", trace::raw_args(argv))?;
    }

    match Invocation::from_argv(argv)? {
        Invocation::Help => {
            let program = cli::program_name(argv);
            writeln!(out, "{}", help::render(&program, help::VERSION))?;
            Ok(exit_codes::USAGE_ERROR)
        }
        Invocation::Run { args, trace: dump } => {
            logging::init(args.debug);
            if dump {
                writeln!(out, "{}", trace::parsed_args(&args))?;
            }
            commands::dispatch(&args, out)
        }
    }
}
