use std::path::PathBuf;

use peglet_core::{Colors, Grammar};

use super::loader::{exit_with, load_grammar};

pub struct DumpArgs {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let grammar = load_grammar(args.grammar_path.as_deref(), args.grammar_text.as_deref())
        .unwrap_or_else(|e| exit_with(e));

    print!("{}", render(&grammar, Colors::new(args.color)));
}

/// One `Name <- body` line per rule, then the grammar code block if any.
pub fn render(grammar: &Grammar, colors: Colors) -> String {
    let c = colors;
    let mut out = String::new();
    for rule in &grammar.rules {
        out.push_str(&format!(
            "{}{}{} {}<-{} {}\n",
            c.blue, rule.name, c.reset, c.dim, c.reset, rule.body
        ));
    }
    if let Some(code) = &grammar.code {
        out.push_str(&format!("\n{}{{{}}}{}\n", c.dim, code, c.reset));
    }
    out
}
