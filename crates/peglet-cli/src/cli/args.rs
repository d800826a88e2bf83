//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! so one definition serves every command that accepts the flag, visible or
//! hidden (via `.hide(true)`).

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Grammar JSON file (positional, `-` for stdin).
pub fn grammar_path_arg() -> Arg {
    Arg::new("grammar_path")
        .value_name("GRAMMAR")
        .value_parser(value_parser!(PathBuf))
        .help("Grammar JSON file (- for stdin)")
}

/// Inline grammar JSON (-g/--grammar).
pub fn grammar_text_arg() -> Arg {
    Arg::new("grammar_text")
        .short('g')
        .long("grammar")
        .value_name("JSON")
        .help("Inline grammar JSON")
}

/// Input file to match (positional).
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("INPUT")
        .value_parser(value_parser!(PathBuf))
        .help("Input file to match (- for stdin)")
}

/// Inline input text (-s/--input).
pub fn input_text_arg() -> Arg {
    Arg::new("input_text")
        .short('s')
        .long("input")
        .value_name("TEXT")
        .help("Inline input text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Omit rule comments (--no-comments).
pub fn no_comments_arg() -> Arg {
    Arg::new("no_comments")
        .long("no-comments")
        .action(ArgAction::SetTrue)
        .help("Don't precede rule functions with their PEG rendering")
}

/// Entry point name (--entry).
pub fn entry_arg() -> Arg {
    Arg::new("entry")
        .long("entry")
        .value_name("NAME")
        .default_value("parse")
        .help("Name of the generated entry point function")
}

/// Use a runtime crate instead of embedding (--extern-runtime).
pub fn extern_runtime_arg() -> Arg {
    Arg::new("extern_runtime")
        .long("extern-runtime")
        .value_name("PATH")
        .help("Import the runtime from PATH (e.g. peglet_runtime) instead of embedding it")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty when stdout is a TTY)")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for matcher attempts, -vv for matched text)")
}

/// Skip the result (--no-result).
pub fn no_result_arg() -> Arg {
    Arg::new("no_result")
        .long("no-result")
        .action(ArgAction::SetTrue)
        .help("Skip the result, show the trace only")
}

/// Execution fuel limit (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .default_value("1000000")
        .value_parser(value_parser!(u32))
        .help("Execution fuel limit")
}

/// Rule nesting limit (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .default_value("1024")
        .value_parser(value_parser!(u32))
        .help("Maximum rule nesting depth")
}
