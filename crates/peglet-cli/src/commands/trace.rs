//! Trace grammar execution for debugging.

use std::path::PathBuf;

use peglet_core::Colors;
use peglet_vm::{FuelLimits, Interpreter, Passthrough, PrintTracer, Verbosity, format_value};

use super::loader::{exit_with, load_input, load_valid_grammar};

pub struct TraceArgs {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub verbosity: Verbosity,
    pub no_result: bool,
    pub limits: FuelLimits,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let grammar =
        load_valid_grammar(args.grammar_path.as_deref(), args.grammar_text.as_deref());
    let input = load_input(
        args.input_path.as_deref(),
        args.input_text.as_deref(),
        args.grammar_path.as_deref(),
    )
    .unwrap_or_else(|e| exit_with(e));

    let colors = Colors::new(args.color);
    let interpreter = Interpreter::builder(&grammar).limits(args.limits).build();
    let mut tracer = PrintTracer::new(args.verbosity, colors);

    let outcome = match interpreter.run_with(&input, &mut tracer, &mut Passthrough) {
        Ok(outcome) => {
            tracer.print();
            outcome
        }
        Err(e) => {
            tracer.print();
            eprintln!("runtime error: {}", e);
            std::process::exit(2);
        }
    };

    let Some(value) = outcome.value() else {
        std::process::exit(1);
    };

    if args.no_result {
        return;
    }

    println!("{}---{}", colors.dim, colors.reset);
    println!("{}", format_value(value, true, colors));
    println!(
        "{}matched {} of {} code points{}",
        colors.dim,
        outcome.end,
        input.len(),
        colors.reset
    );
}
