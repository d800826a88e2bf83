//! Match input with a grammar and print the result.

use std::path::PathBuf;

use peglet_core::Colors;
use peglet_vm::{FuelLimits, Interpreter, format_value};

use super::loader::{exit_with, load_input, load_valid_grammar};

pub struct ExecArgs {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub pretty: bool,
    pub limits: FuelLimits,
    pub color: bool,
}

pub fn run(args: ExecArgs) {
    let grammar =
        load_valid_grammar(args.grammar_path.as_deref(), args.grammar_text.as_deref());
    let input = load_input(
        args.input_path.as_deref(),
        args.input_text.as_deref(),
        args.grammar_path.as_deref(),
    )
    .unwrap_or_else(|e| exit_with(e));

    let interpreter = Interpreter::builder(&grammar).limits(args.limits).build();
    let outcome = match interpreter.run(&input) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("runtime error: {}", e);
            std::process::exit(2);
        }
    };

    match outcome.value() {
        Some(value) => {
            let colors = Colors::new(args.color);
            println!("{}", format_value(value, args.pretty, colors));
        }
        None => exit_with("no match"),
    }
}
