//! Help text.

/// Pointer printed under every usage error.
pub const HINT: &str = "For full help use -h or --help";

/// Version shown at the bottom of the help text.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render the full help text for the given program name and version.
pub fn render(program: &str, version: &str) -> String {
    format!(
        r#"
Usage: {program} [-d] [-e] [-f value] ACTION [value]...

This utility is a starting point for writing a new command line utility.
Copy it and start adding everything you want.
It demonstrates parsing several kinds of command line arguments:
flags, one action word, and free-form value arguments.

Actions:
ECHO  print the -f value and the value arguments, one or more value arguments required.
DATE  print the -f value if any, and the date to the console, value arguments not allowed.
OVER  print the os name and release to the console, neither -f nor value arguments allowed.

-d    enable debug messages, off by default
-e    enable the arbitrary Easy flag, off by default
-f    specify an arbitrary value, -fval, or -f val, or -f=val

Example 1, echo arguments, specify fish:
$ {program} -f Carp ECHO "one arg" "all second arg" three
Output:
"Carp" "one arg" "all second arg" "three"

Example 2, print date:
$ {program} -f Bass DATE
Output:
Bass 2025-12-24 13:09:00

Version {version}
"#
    )
}
