//! Tests for argument parsing, validation and invocation classification.

use super::parser::{parse, validate};
use super::trace::{parsed_args, raw_args};
use super::{Action, Invocation, ParsedArguments, collect_args, program_name, wants_trace};
use crate::error::UsageError;
use rstest::rstest;
use std::ffi::OsString;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn argv(list: &[&str]) -> Vec<String> {
    let mut full = vec!["cliutil".to_string()];
    full.extend(args(list));
    full
}

// ============================================================================
// Flags phase
// ============================================================================

#[test]
fn test_boolean_flags() {
    let parsed = parse(&args(&["-d", "-e", "echo", "x"])).unwrap();
    assert!(parsed.debug);
    assert!(parsed.easy);
    assert_eq!(parsed.fish_value, "");
}

#[test]
fn test_no_flags() {
    let parsed = parse(&args(&["echo", "x"])).unwrap();
    assert!(!parsed.debug);
    assert!(!parsed.easy);
    assert_eq!(parsed.action, Action::Echo);
}

#[rstest]
#[case(&["-f", "Carp", "echo", "x"])]
#[case(&["-fCarp", "echo", "x"])]
#[case(&["-f=Carp", "echo", "x"])]
fn test_fish_forms_are_equivalent(#[case] input: &[&str]) {
    let parsed = parse(&args(input)).unwrap();
    assert_eq!(
        parsed,
        ParsedArguments {
            debug: false,
            easy: false,
            fish_value: "Carp".to_string(),
            action: Action::Echo,
            values: vec!["x".to_string()],
        }
    );
}

#[test]
fn test_fish_equals_form_allows_empty_value() {
    let parsed = parse(&args(&["-f=", "over"])).unwrap();
    assert_eq!(parsed.fish_value, "");
}

#[test]
fn test_fish_equals_form_keeps_later_equals() {
    let parsed = parse(&args(&["-f=a=b", "date"])).unwrap();
    assert_eq!(parsed.fish_value, "a=b");
}

#[test]
fn test_fish_separate_form_consumes_dash_argument() {
    let parsed = parse(&args(&["-f", "-d", "date"])).unwrap();
    assert_eq!(parsed.fish_value, "-d");
    assert!(!parsed.debug);
}

#[test]
fn test_fish_separate_form_keeps_whitespace() {
    let parsed = parse(&args(&["-f", "Big Carp", "date"])).unwrap();
    assert_eq!(parsed.fish_value, "Big Carp");
}

#[test]
fn test_last_fish_wins() {
    let parsed = parse(&args(&["-fOne", "-f", "Two", "date"])).unwrap();
    assert_eq!(parsed.fish_value, "Two");
}

#[rstest]
#[case(&["-f"])]
#[case(&["-d", "-f"])]
#[case(&["-f", "", "echo", "x"])]
fn test_fish_without_value_fails(#[case] input: &[&str]) {
    assert_eq!(parse(&args(input)), Err(UsageError::MissingFlagValue));
}

#[rstest]
#[case("-")]
#[case("-x")]
#[case("-dx")]
#[case("--debug")]
#[case("-h")]
fn test_unrecognized_flag(#[case] flag: &str) {
    assert_eq!(
        parse(&args(&[flag, "echo", "x"])),
        Err(UsageError::UnrecognizedFlag(flag.to_string()))
    );
}

// ============================================================================
// Action phase
// ============================================================================

#[rstest]
#[case("echo", Action::Echo)]
#[case("ECHO", Action::Echo)]
#[case("Date", Action::Date)]
#[case("oVeR", Action::Over)]
fn test_action_is_case_insensitive(#[case] word: &str, #[case] expected: Action) {
    let mut input = vec![word];
    if expected == Action::Echo {
        input.push("x");
    }
    assert_eq!(parse(&args(&input)).unwrap().action, expected);
}

#[rstest]
#[case(&[])]
#[case(&["-d"])]
#[case(&["-e", ""])]
fn test_missing_action(#[case] input: &[&str]) {
    assert_eq!(parse(&args(input)), Err(UsageError::MissingAction));
}

#[test]
fn test_unrecognized_action_is_reported_lowercased() {
    assert_eq!(
        parse(&args(&["LIST", "x"])),
        Err(UsageError::UnrecognizedAction("list".to_string()))
    );
}

#[test]
fn test_action_display_is_lowercase() {
    assert_eq!(Action::Echo.to_string(), "echo");
    assert_eq!(Action::Date.to_string(), "date");
    assert_eq!(Action::Over.to_string(), "over");
}

// ============================================================================
// Values phase
// ============================================================================

#[test]
fn test_values_preserve_order_and_whitespace() {
    let parsed = parse(&args(&["echo", "a", "b b", " c "])).unwrap();
    assert_eq!(parsed.values, vec!["a", "b b", " c "]);
}

#[test]
fn test_values_may_look_like_flags() {
    let parsed = parse(&args(&["echo", "-d", "-f", "--help"])).unwrap();
    assert!(!parsed.debug);
    assert_eq!(parsed.fish_value, "");
    assert_eq!(parsed.values, vec!["-d", "-f", "--help"]);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_echo_requires_values() {
    assert_eq!(
        parse(&args(&["-f", "Carp", "echo"])),
        Err(UsageError::EchoRequiresValues)
    );
}

#[test]
fn test_date_allows_fish() {
    let parsed = parse(&args(&["-f", "Today:", "date"])).unwrap();
    assert_eq!(parsed.action, Action::Date);
    assert_eq!(parsed.fish_value, "Today:");
}

#[test]
fn test_date_rejects_values() {
    assert_eq!(
        parse(&args(&["date", "one"])),
        Err(UsageError::DateDisallowsValues)
    );
}

#[rstest]
#[case(&["-f", "X", "over"])]
#[case(&["over", "one"])]
#[case(&["-fX", "over", "one"])]
fn test_over_rejects_fish_and_values(#[case] input: &[&str]) {
    assert_eq!(
        parse(&args(input)),
        Err(UsageError::OverDisallowsFishOrValues)
    );
}

#[test]
fn test_over_plain() {
    let parsed = parse(&args(&["-d", "-e", "over"])).unwrap();
    assert_eq!(parsed.action, Action::Over);
    assert!(parsed.values.is_empty());
}

#[test]
fn test_validate_accepts_echo_with_values() {
    let parsed = ParsedArguments {
        debug: false,
        easy: false,
        fish_value: String::new(),
        action: Action::Echo,
        values: vec!["v".to_string()],
    };
    assert_eq!(validate(&parsed), Ok(()));
}

#[test]
fn test_flag_error_wins_over_action_error() {
    assert_eq!(
        parse(&args(&["-z", "bogus"])),
        Err(UsageError::UnrecognizedFlag("-z".to_string()))
    );
}

// ============================================================================
// Invocation
// ============================================================================

#[test]
fn test_no_arguments_is_help() {
    assert_eq!(Invocation::from_argv(&argv(&[])), Ok(Invocation::Help));
    assert_eq!(Invocation::from_argv(&[]), Ok(Invocation::Help));
}

#[rstest]
#[case("-h")]
#[case("-?")]
#[case("--help")]
fn test_help_flag_first_is_help(#[case] flag: &str) {
    assert_eq!(
        Invocation::from_argv(&argv(&[flag, "bogus", "-z"])),
        Ok(Invocation::Help)
    );
}

#[test]
fn test_trace_only_when_debug_flag_first() {
    let first = Invocation::from_argv(&argv(&["-d", "over"])).unwrap();
    assert!(matches!(first, Invocation::Run { trace: true, .. }));

    let second = Invocation::from_argv(&argv(&["-e", "-d", "over"])).unwrap();
    match second {
        Invocation::Run { args, trace } => {
            assert!(args.debug);
            assert!(!trace);
        }
        Invocation::Help => panic!("expected a run"),
    }
}

#[test]
fn test_invocation_propagates_usage_error() {
    assert_eq!(
        Invocation::from_argv(&argv(&["echo"])),
        Err(UsageError::EchoRequiresValues)
    );
}

#[test]
fn test_wants_trace() {
    assert!(wants_trace(&argv(&["-d", "echo", "x"])));
    assert!(!wants_trace(&argv(&["-e", "-d", "echo", "x"])));
    assert!(!wants_trace(&argv(&[])));
}

#[rstest]
#[case(&["/usr/local/bin/cliutil"], "cliutil")]
#[case(&["./tool"], "tool")]
#[case(&["tool"], "tool")]
#[case(&[""], "cliutil")]
#[case(&[], "cliutil")]
fn test_program_name(#[case] input: &[&str], #[case] expected: &str) {
    assert_eq!(program_name(&args(input)), expected);
}

#[test]
fn test_collect_args_keeps_utf8_verbatim() {
    let raw = vec![OsString::from("cliutil"), OsString::from(" b b ")];
    assert_eq!(collect_args(raw), vec!["cliutil", " b b "]);
}

#[cfg(unix)]
#[test]
fn test_collect_args_replaces_invalid_utf8() {
    use std::os::unix::ffi::OsStringExt;

    let raw = vec![OsString::from_vec(vec![b'a', 0xff, b'z'])];
    assert_eq!(collect_args(raw), vec!["a\u{FFFD}z"]);
}

// ============================================================================
// Debug dumps
// ============================================================================

#[test]
fn test_raw_args_dump() {
    let full = args(&["util", "-d", "-f", "Big Carp", "ECHO", "one"]);
    assert_eq!(
        raw_args(&full),
        "Debug:ARGC=6,ARGV:0=[util],1=[-d],2=[-f],3=[Big Carp],4=[ECHO],5=[one],"
    );
}

#[test]
fn test_parsed_args_dump() {
    let parsed = parse(&args(&["-d", "-e", "-f", "Big Carp", "Echo", "a b", "c"])).unwrap();
    assert_eq!(
        parsed_args(&parsed),
        "Debug:Args:Dbug=[true],Easy=[true],Fish=[Big Carp],Act=[echo],Valc=2,Vals:[0]=[a b],[1]=[c],"
    );
}

#[test]
fn test_parsed_args_dump_without_values() {
    let parsed = parse(&args(&["over"])).unwrap();
    assert_eq!(
        parsed_args(&parsed),
        "Debug:Args:Dbug=[false],Easy=[false],Fish=[],Act=[over],Valc=0,Vals:"
    );
}
