use std::path::PathBuf;

use peglet_compiler::{Config, validate};
use peglet_core::Colors;

use super::loader::{exit_with, load_grammar};

pub struct CheckArgs {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub entry: String,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let grammar = load_grammar(args.grammar_path.as_deref(), args.grammar_text.as_deref())
        .unwrap_or_else(|e| exit_with(e));

    let config = Config::new().entry_name(args.entry);
    if let Err(e) = validate(&grammar, &config) {
        let c = Colors::new(args.color);
        eprintln!("{}error{}: {}", c.red, c.reset, e);
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
