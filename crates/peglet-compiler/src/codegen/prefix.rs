//! Lookahead predicates and quantifiers.

use peglet_core::{PrefixOp, PrefixedExpr, SuffixOp, SuffixedExpr};

use super::{CompileCtx, Mode};

impl CompileCtx<'_> {
    /// `&e` / `!e` run `e` under a cursor the runtime restores afterwards.
    ///
    /// A bare matcher is tested in place. Groups, rule calls and quantifiers
    /// keep `mode` so their parts advance past each other inside the check.
    pub(crate) fn compile_prefixed(&mut self, expr: &PrefixedExpr, mode: Mode) -> String {
        let Some(op) = expr.prefix else {
            return self.compile_suffixed(&expr.expr, mode);
        };

        let inner_mode = if expr.expr.is_bare_matcher() {
            Mode::LOOKAHEAD
        } else {
            mode
        };
        let inner = self.compile_suffixed(&expr.expr, inner_mode);
        let combinator = match op {
            PrefixOp::And => "lookahead",
            PrefixOp::Not => "negative_lookahead",
        };
        format!("__p.{combinator}(|__p| {inner})")
    }

    /// Quantifiers wrap the primary in a closure the runtime calls per attempt.
    pub(crate) fn compile_suffixed(&mut self, expr: &SuffixedExpr, mode: Mode) -> String {
        let primary = self.compile_primary(&expr.primary, mode);
        let Some(op) = expr.suffix else {
            return primary;
        };

        let combinator = match op {
            SuffixOp::Optional => "try_optional",
            SuffixOp::OneOrMore => "try_one_or_more",
            SuffixOp::ZeroOrMore => "try_zero_or_more",
        };
        format!("__p.{combinator}(|__p| {primary})")
    }
}
