//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! Commands that only read a grammar (check/dump) also accept the input and
//! runtime flags of exec/trace, hidden from `--help`, so a command line can be
//! switched between subcommands without editing the flags.

use clap::Command;

use super::args::*;

/// Add hidden input args (for commands that don't match input).
fn with_hidden_input_args(cmd: Command) -> Command {
    cmd.arg(input_path_arg().hide(true))
        .arg(input_text_arg().hide(true))
}

/// Add hidden runtime args (for commands that don't run the interpreter).
fn with_hidden_run_args(cmd: Command) -> Command {
    cmd.arg(compact_arg().hide(true))
        .arg(verbose_arg().hide(true))
        .arg(no_result_arg().hide(true))
        .arg(fuel_arg().hide(true))
        .arg(recursion_limit_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("peglet")
        .about("PEG grammars to recursive-descent Rust parsers")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(gen_command())
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(exec_command())
        .subcommand(trace_command())
}

/// Generate a Rust parser from a grammar.
pub fn gen_command() -> Command {
    Command::new("gen")
        .about("Generate a Rust parser from a grammar")
        .override_usage(
            "\
  peglet gen <GRAMMAR> [-o <FILE>]
  peglet gen -g <JSON> [-o <FILE>]",
        )
        .after_help(
            r#"EXAMPLES:
  peglet gen grammar.json                      # print to stdout
  peglet gen grammar.json -o src/parser.rs     # write to file
  peglet gen grammar.json --entry parse_expr   # custom entry point
  peglet gen grammar.json --extern-runtime peglet_runtime"#,
        )
        .arg(grammar_path_arg())
        .arg(grammar_text_arg())
        .arg(no_comments_arg())
        .arg(entry_arg())
        .arg(extern_runtime_arg())
        .arg(output_file_arg())
}

/// Validate a grammar.
///
/// Accepts all runtime flags, but only uses grammar/entry/color.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a grammar")
        .override_usage(
            "\
  peglet check <GRAMMAR>
  peglet check -g <JSON>",
        )
        .after_help(
            r#"EXAMPLES:
  peglet check grammar.json                # silent on success
  peglet check grammar.json --entry lex    # also validate the entry name"#,
        )
        .arg(grammar_path_arg())
        .arg(grammar_text_arg())
        .arg(entry_arg())
        .arg(color_arg());

    with_hidden_run_args(with_hidden_input_args(cmd))
}

/// Show a grammar in PEG notation.
///
/// Accepts all runtime flags, but only uses grammar/color.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show a grammar in PEG notation")
        .override_usage(
            "\
  peglet dump <GRAMMAR>
  peglet dump -g <JSON>",
        )
        .arg(grammar_path_arg())
        .arg(grammar_text_arg())
        .arg(color_arg());

    with_hidden_run_args(with_hidden_input_args(cmd))
}

/// Match input with a grammar and output the result as JSON.
///
/// Accepts trace flags, but ignores them.
pub fn exec_command() -> Command {
    let cmd = Command::new("exec")
        .about("Match input with a grammar and output the result as JSON")
        .override_usage(
            "\
  peglet exec <GRAMMAR> <INPUT>
  peglet exec <GRAMMAR> -s <TEXT>
  peglet exec -g <JSON> <INPUT>",
        )
        .after_help(
            r#"EXAMPLES:
  peglet exec grammar.json input.txt       # two positional files
  peglet exec grammar.json -s '1+2'        # inline input
  peglet exec -g '{...}' input.txt         # inline grammar + input file"#,
        )
        .arg(grammar_path_arg())
        .arg(input_path_arg())
        .arg(grammar_text_arg())
        .arg(input_text_arg())
        .arg(color_arg())
        .arg(compact_arg())
        .arg(fuel_arg())
        .arg(recursion_limit_arg());

    cmd.arg(verbose_arg().hide(true))
        .arg(no_result_arg().hide(true))
}

/// Trace grammar execution for debugging.
///
/// Accepts exec output flags, but ignores them.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace grammar execution for debugging")
        .override_usage(
            "\
  peglet trace <GRAMMAR> <INPUT>
  peglet trace <GRAMMAR> -s <TEXT>
  peglet trace -g <JSON> <INPUT>",
        )
        .after_help(
            r#"EXAMPLES:
  peglet trace grammar.json input.txt      # rules and backtracking
  peglet trace grammar.json -s '12a' -v    # also every matcher attempt
  peglet trace grammar.json -s '12a' -vv   # also matched text"#,
        )
        .arg(grammar_path_arg())
        .arg(input_path_arg())
        .arg(grammar_text_arg())
        .arg(input_text_arg())
        .arg(color_arg())
        .arg(verbose_arg())
        .arg(no_result_arg())
        .arg(fuel_arg())
        .arg(recursion_limit_arg());

    cmd.arg(compact_arg().hide(true))
}
