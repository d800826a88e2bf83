//! Sequences, capture bindings and semantic-action units.

use peglet_core::{ActionExpr, Binding, SeqExpr};

use super::emitter::Emitter;
use super::{CompileCtx, Mode};

/// Local variable holding a captured element's value.
fn capture_var(binding: Binding<'_>) -> String {
    match binding {
        Binding::Named(label) => label.to_string(),
        Binding::Positional(slot) => format!("__v{slot}"),
        Binding::Discard => unreachable!("discarded elements have no variable"),
    }
}

impl CompileCtx<'_> {
    /// Match elements left to right; on the first failure restore the cursor
    /// saved before the first element and fail the whole sequence.
    ///
    /// A lone captured element without an action is its own result and
    /// already restores on failure, so it is emitted bare.
    pub(crate) fn compile_action(&mut self, action: &ActionExpr, mode: Mode) -> String {
        let seq = &action.seq;
        let bindings = seq.bindings();
        if action.code.is_none()
            && let ([element], [binding]) = (seq.elements.as_slice(), bindings.as_slice())
            && binding.is_capture()
        {
            return self.compile_prefixed(&element.expr, mode);
        }

        let label = self.block_label("seq");
        let mut e = Emitter::new();
        e.open(&format!("{label}: {{"));
        e.line("let __start = __p.pos();");

        let mut vars = Vec::new();
        for (element, &binding) in seq.elements.iter().zip(&bindings) {
            let expr = self.compile_prefixed(&element.expr, mode);
            e.expr("let __r = ", &expr, ";");
            if binding.is_capture() {
                let var = capture_var(binding);
                e.open(&format!("let Ok({var}) = __r else {{"));
                emit_fail(&mut e, &label);
                e.close("};");
                vars.push(var);
            } else {
                e.open("if __r.is_err() {");
                emit_fail(&mut e, &label);
                e.close("}");
            }
        }

        let result = match &action.code {
            Some(code) => self.action_unit(code, seq, &vars),
            None => match vars.as_slice() {
                [] => "Value::List(Vec::new())".to_string(),
                [only] => only.clone(),
                many => format!("Value::List(vec![{}])", many.join(", ")),
            },
        };
        e.line(&format!("Ok({result})"));
        e.close("}");
        e.finish()
    }

    /// Register `code` as a standalone function of the captures and return
    /// the call expression.
    ///
    /// Labeled sequences pass each capture by name. Unlabeled ones pass a
    /// single capture as `result: Value` and several as `result: [Value; N]`.
    fn action_unit(&mut self, code: &str, seq: &SeqExpr, vars: &[String]) -> String {
        let name = self.action_name();
        let (params, args) = if seq.has_label() {
            let params: Vec<String> = vars.iter().map(|v| format!("{v}: Value")).collect();
            (params.join(", "), vars.join(", "))
        } else {
            match vars {
                [] => (String::new(), String::new()),
                [only] => ("result: Value".to_string(), only.clone()),
                many => (
                    format!("result: [Value; {}]", many.len()),
                    format!("[{}]", many.join(", ")),
                ),
            }
        };

        let mut e = Emitter::new();
        if self.config.comments {
            e.line(&format!("// Action in {}: {seq}", self.rule));
        }
        e.line("#[allow(non_snake_case, unused_variables)]");
        e.line(&format!("fn {name}({params}) -> Value {{"));
        e.raw(code);
        e.line("}");
        self.actions.push(e.finish());

        format!("{name}({args})")
    }
}

fn emit_fail(e: &mut Emitter, label: &str) {
    e.line("__p.back_to(__start);");
    e.line(&format!("break {label} Err(NoMatch);"));
}
