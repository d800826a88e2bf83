//! Generate a Rust parser from a grammar.

use std::fs;
use std::path::PathBuf;

use peglet_compiler::{Config, RuntimeMode, generate};

use super::loader::{exit_with, load_grammar};

pub struct GenArgs {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub comments: bool,
    pub entry: String,
    pub runtime: RuntimeMode,
    pub output: Option<PathBuf>,
}

pub fn run(args: GenArgs) {
    let grammar = load_grammar(args.grammar_path.as_deref(), args.grammar_text.as_deref())
        .unwrap_or_else(|e| exit_with(e));

    let config = Config::new()
        .comments(args.comments)
        .entry_name(args.entry)
        .runtime(args.runtime);
    let code = generate(&grammar, &config).unwrap_or_else(|e| exit_with(e));

    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, code) {
                exit_with(format!("failed to write '{}': {}", path.display(), e));
            }
        }
        None => print!("{}", code),
    }
}
