//! Assembly of the complete generated source file.

use peglet_core::Grammar;

use super::emitter::Emitter;
use super::error::{CompileError, CompileResult};
use super::rule::rule_fn;
use super::{CompileCtx, Config, RuntimeMode, validate};

const HEADER: &str = "// Code generated by peglet. DO NOT EDIT.";

/// Validate `grammar` and generate its recognizer as Rust source.
///
/// Layout: header, runtime (once), entry points, one recognizer per rule in
/// declaration order, action units in allocation order, grammar code.
pub fn generate(grammar: &Grammar, config: &Config) -> CompileResult<String> {
    validate(grammar, config)?;
    let start = grammar.start_rule().ok_or(CompileError::EmptyGrammar)?;

    let mut ctx = CompileCtx::new(config);
    let rules: Vec<String> = grammar.rules.iter().map(|r| ctx.compile_rule(r)).collect();

    let mut e = Emitter::new();
    e.line(HEADER);
    e.line("");
    emit_runtime(&mut e, &config.runtime);
    e.line("");
    emit_entry(&mut e, &config.entry_name, &start.name);

    for unit in rules.iter().chain(&ctx.actions) {
        e.line("");
        e.raw(unit);
    }
    if let Some(code) = &grammar.code {
        e.line("");
        e.raw(code);
    }

    let mut output = e.finish();
    output.push('\n');
    Ok(output)
}

fn emit_runtime(e: &mut Emitter, mode: &RuntimeMode) {
    match mode {
        RuntimeMode::Embedded => {
            e.line("#[allow(dead_code)]");
            e.line("mod __runtime {");
            e.raw(peglet_runtime::SOURCE);
            e.line("}");
            e.line("");
            e.line("use self::__runtime::*;");
        }
        RuntimeMode::Extern(path) => e.line(&format!("use {path}::*;")),
    }
}

fn emit_entry(e: &mut Emitter, entry: &str, start: &str) {
    e.line(&format!("/// Match rule `{start}` at the beginning of `src`."));
    e.open(&format!("pub fn {entry}(src: &[char]) -> PegResult {{"));
    e.line("let mut __p = Parser::new(src);");
    e.line(&format!("{}(&mut __p)", rule_fn(start)));
    e.close("}");
    e.line("");
    e.line(&format!("/// [`{entry}`] over the code points of `src`."));
    e.open(&format!("pub fn {entry}_str(src: &str) -> PegResult {{"));
    e.line("let src: Vec<char> = src.chars().collect();");
    e.line(&format!("{entry}(&src)"));
    e.close("}");
}
