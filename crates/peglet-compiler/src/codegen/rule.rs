//! Primaries and rule recognizers.

use peglet_core::{PrimaryExpr, Rule};

use super::emitter::Emitter;
use super::matcher::compile_matcher;
use super::{CompileCtx, Mode};

/// Name of the generated recognizer for rule `name`.
pub(crate) fn rule_fn(name: &str) -> String {
    format!("rule_{name}")
}

impl<'a> CompileCtx<'a> {
    /// `fn rule_<Name>(__p: &mut Parser<'_>) -> PegResult`, body in consuming mode.
    pub(crate) fn compile_rule(&mut self, rule: &'a Rule) -> String {
        self.rule = &rule.name;
        let body = self.compile_choice(&rule.body, Mode::CONSUMING);

        let mut e = Emitter::new();
        if self.config.comments {
            e.line(&format!("// Rule: {rule}"));
        }
        e.line("#[allow(non_snake_case)]");
        e.open(&format!(
            "fn {}(__p: &mut Parser<'_>) -> PegResult {{",
            rule_fn(&rule.name)
        ));
        e.expr("", &body, "");
        e.close("}");
        e.finish()
    }

    /// Rule references are plain calls; recursion goes through the native stack.
    pub(crate) fn compile_primary(&mut self, primary: &PrimaryExpr, mode: Mode) -> String {
        match primary {
            PrimaryExpr::Matcher(matcher) => compile_matcher(matcher, mode),
            PrimaryExpr::RuleRef(name) => format!("{}(__p)", rule_fn(name)),
            PrimaryExpr::Group(choice) => self.compile_choice(choice, mode),
        }
    }
}
