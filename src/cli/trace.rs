//! Debug dumps printed when `-d` is the first argument.

use super::types::ParsedArguments;

/// One-line dump of the raw process arguments, program name included.
///
/// ```text
/// Debug:ARGC=4,ARGV:0=[cliutil],1=[-d],2=[ECHO],3=[one two],
/// ```
pub fn raw_args(argv: &[String]) -> String {
    let listed: String = argv
        .iter()
        .enumerate()
        .map(|(i, arg)| format!("{}=[{}],", i, arg))
        .collect();

    format!("Debug:ARGC={},ARGV:{}", argv.len(), listed)
}

/// One-line dump of the parsed arguments.
///
/// ```text
/// Debug:Args:Dbug=[true],Easy=[false],Fish=[],Act=[echo],Valc=1,Vals:[0]=[one two],
/// ```
pub fn parsed_args(args: &ParsedArguments) -> String {
    let listed: String = args
        .values
        .iter()
        .enumerate()
        .map(|(i, value)| format!("[{}]=[{}],", i, value))
        .collect();

    format!(
        "Debug:Args:Dbug=[{}],Easy=[{}],Fish=[{}],Act=[{}],Valc={},Vals:{}",
        args.debug,
        args.easy,
        args.fish_value,
        args.action,
        args.values.len(),
        listed
    )
}
