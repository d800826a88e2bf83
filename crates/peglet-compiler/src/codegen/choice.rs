//! Ordered choice.

use peglet_core::ChoiceExpr;

use super::emitter::Emitter;
use super::{CompileCtx, Mode};

impl CompileCtx<'_> {
    /// Try alternatives in order; the first success wins.
    ///
    /// Every failed alternative is followed by a restore to the cursor saved
    /// on entry, so the next one (or the final failure) starts from there.
    /// A single alternative needs no dispatch: sequences restore on their own.
    pub(crate) fn compile_choice(&mut self, choice: &ChoiceExpr, mode: Mode) -> String {
        if let [only] = choice.alternatives.as_slice() {
            return self.compile_action(only, mode);
        }

        let label = self.block_label("choice");
        let mut e = Emitter::new();
        e.open(&format!("{label}: {{"));
        e.line("let __start = __p.pos();");
        for alternative in &choice.alternatives {
            let expr = self.compile_action(alternative, mode);
            e.expr("let __r = ", &expr, ";");
            e.open("if __r.is_ok() {");
            e.line(&format!("break {label} __r;"));
            e.close("}");
            e.line("__p.back_to(__start);");
        }
        e.line("Err(NoMatch)");
        e.close("}");
        e.finish()
    }
}
