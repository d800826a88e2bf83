//! Grammar interpreter over the runtime combinators.
//!
//! Each construct maps onto the runtime call the code generator would emit
//! for it: choices save and restore the cursor, sequences restore to their
//! start on the first failing element, lookahead tests a bare matcher in
//! place and lets anything larger advance until the runtime restores the
//! cursor, quantifiers go through `try_*`. The consuming flag is passed by
//! value, so a lookahead only affects its own operand.
//!
//! Fatal conditions (fuel, recursion, undefined rules) cannot travel through
//! `PegResult`. They are recorded in `fault`, every later step fails
//! immediately, and `run_with` reports the fault once the walk unwinds.

use peglet_core::{
    ActionExpr, Binding, ChoiceExpr, Grammar, Matcher, PrefixOp, PrefixedExpr, PrimaryExpr,
    SuffixOp, SuffixedExpr,
};
use peglet_runtime::{NoMatch, Parser, PegResult, Value};

use super::actions::{ActionCall, ActionHandler, Captures, Passthrough};
use super::error::RuntimeError;
use super::trace::{NoopTracer, Tracer};

/// Runtime limits for interpretation.
#[derive(Clone, Copy, Debug)]
pub struct FuelLimits {
    /// Maximum matcher and rule steps (default: 1,000,000).
    pub(crate) exec_fuel: u32,
    /// Maximum rule nesting (default: 1,024).
    pub(crate) recursion_limit: u32,
}

impl Default for FuelLimits {
    fn default() -> Self {
        Self {
            exec_fuel: 1_000_000,
            recursion_limit: 1024,
        }
    }
}

impl FuelLimits {
    /// Create new fuel limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = fuel;
        self
    }

    /// Set the recursion limit.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn get_exec_fuel(&self) -> u32 {
        self.exec_fuel
    }
    pub fn get_recursion_limit(&self) -> u32 {
        self.recursion_limit
    }
}

/// Result of running the start rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub result: PegResult,
    /// Cursor after the start rule returned. Zero on failure.
    pub end: usize,
}

impl Outcome {
    pub fn is_match(&self) -> bool {
        self.result.is_ok()
    }

    pub fn value(&self) -> Option<&Value> {
        self.result.as_ref().ok()
    }
}

/// Interpreter for one grammar. Reusable across inputs.
pub struct Interpreter<'g> {
    grammar: &'g Grammar,
    limits: FuelLimits,
}

/// Builder for `Interpreter`.
pub struct InterpreterBuilder<'g> {
    grammar: &'g Grammar,
    limits: FuelLimits,
}

impl<'g> InterpreterBuilder<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            limits: FuelLimits::default(),
        }
    }

    /// Set the fuel limits.
    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.limits = self.limits.exec_fuel(fuel);
        self
    }

    /// Set the recursion limit.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.limits = self.limits.recursion_limit(limit);
        self
    }

    pub fn build(self) -> Interpreter<'g> {
        Interpreter {
            grammar: self.grammar,
            limits: self.limits,
        }
    }
}

impl<'g> Interpreter<'g> {
    pub fn builder(grammar: &'g Grammar) -> InterpreterBuilder<'g> {
        InterpreterBuilder::new(grammar)
    }

    /// Match the start rule at the beginning of `src`.
    ///
    /// Uses `NoopTracer` and `Passthrough` actions.
    pub fn run(&self, src: &[char]) -> Result<Outcome, RuntimeError> {
        self.run_with(src, &mut NoopTracer, &mut Passthrough)
    }

    /// Match the start rule with a tracer and an action handler.
    pub fn run_with<T: Tracer, A: ActionHandler>(
        &self,
        src: &[char],
        tracer: &mut T,
        actions: &mut A,
    ) -> Result<Outcome, RuntimeError> {
        let start = self.grammar.start_rule().ok_or(RuntimeError::EmptyGrammar)?;

        let mut exec = Exec {
            grammar: self.grammar,
            tracer,
            actions,
            limits: self.limits,
            exec_fuel: self.limits.exec_fuel,
            recursion_depth: 0,
            rule: start.name.as_str(),
            fault: None,
        };
        let mut p = Parser::new(src);
        let result = exec.call_rule(&mut p, &start.name);

        if let Some(fault) = exec.fault {
            return Err(fault);
        }
        Ok(Outcome {
            result,
            end: p.pos(),
        })
    }
}

/// State of one run.
struct Exec<'g, 'r, T, A> {
    grammar: &'g Grammar,
    tracer: &'r mut T,
    actions: &'r mut A,
    limits: FuelLimits,
    exec_fuel: u32,
    recursion_depth: u32,
    /// Rule whose body is executing, reported with action calls.
    rule: &'g str,
    fault: Option<RuntimeError>,
}

impl<'g, T: Tracer, A: ActionHandler> Exec<'g, '_, T, A> {
    /// Spend one unit of fuel. Fails once a fault is recorded.
    fn tick(&mut self) -> Result<(), NoMatch> {
        if self.fault.is_some() {
            return Err(NoMatch);
        }
        if self.exec_fuel == 0 {
            return self.fail(RuntimeError::ExecFuelExhausted(self.limits.exec_fuel));
        }
        self.exec_fuel -= 1;
        Ok(())
    }

    fn fail<R>(&mut self, error: RuntimeError) -> Result<R, NoMatch> {
        self.fault = Some(error);
        Err(NoMatch)
    }

    fn call_rule(&mut self, p: &mut Parser<'_>, name: &str) -> PegResult {
        self.tick()?;
        let grammar = self.grammar;
        let Some(rule) = grammar.rule(name) else {
            return self.fail(RuntimeError::UndefinedRule(name.to_string()));
        };
        if self.recursion_depth >= self.limits.recursion_limit {
            return self.fail(RuntimeError::RecursionLimitExceeded(
                self.limits.recursion_limit,
            ));
        }

        self.tracer.trace_enter_rule(&rule.name, p.pos());
        self.recursion_depth += 1;
        let caller = std::mem::replace(&mut self.rule, rule.name.as_str());

        let result = self.choice(p, &rule.body, true);

        self.rule = caller;
        self.recursion_depth -= 1;
        self.tracer.trace_exit_rule(&rule.name, p.pos(), &result);
        result
    }

    fn choice(&mut self, p: &mut Parser<'_>, choice: &ChoiceExpr, consuming: bool) -> PegResult {
        let start = p.pos();
        for alternative in &choice.alternatives {
            let result = self.action(p, alternative, consuming);
            if result.is_ok() {
                return result;
            }
            p.back_to(start);
            self.tracer.trace_backtrack(start);
        }
        Err(NoMatch)
    }

    fn action(&mut self, p: &mut Parser<'_>, action: &ActionExpr, consuming: bool) -> PegResult {
        let seq = &action.seq;
        let start = p.pos();

        let mut captured = Vec::new();
        for (element, binding) in seq.elements.iter().zip(seq.bindings()) {
            match self.prefixed(p, &element.expr, consuming) {
                Ok(value) if binding.is_capture() => captured.push((binding, value)),
                Ok(_) => {}
                Err(NoMatch) => {
                    p.back_to(start);
                    return Err(NoMatch);
                }
            }
        }

        let captures = if seq.has_label() {
            Captures::Named(
                captured
                    .into_iter()
                    .filter_map(|(binding, value)| match binding {
                        Binding::Named(label) => Some((label, value)),
                        _ => None,
                    })
                    .collect(),
            )
        } else {
            Captures::Positional(captured.into_iter().map(|(_, value)| value).collect())
        };

        let Some(code) = &action.code else {
            return Ok(captures.into_value());
        };
        if self.fault.is_some() {
            return Err(NoMatch);
        }
        self.tracer.trace_action(self.rule, p.pos());
        Ok(self.actions.call(ActionCall {
            rule: self.rule,
            code,
            captures,
        }))
    }

    fn prefixed(&mut self, p: &mut Parser<'_>, expr: &PrefixedExpr, consuming: bool) -> PegResult {
        let inner = consuming && !expr.expr.is_bare_matcher();
        match expr.prefix {
            None => self.suffixed(p, &expr.expr, consuming),
            Some(PrefixOp::And) => p.lookahead(|p| self.suffixed(p, &expr.expr, inner)),
            Some(PrefixOp::Not) => p.negative_lookahead(|p| self.suffixed(p, &expr.expr, inner)),
        }
    }

    fn suffixed(&mut self, p: &mut Parser<'_>, expr: &SuffixedExpr, consuming: bool) -> PegResult {
        let primary = &expr.primary;
        match expr.suffix {
            None => self.primary(p, primary, consuming),
            Some(SuffixOp::Optional) => p.try_optional(|p| self.primary(p, primary, consuming)),
            Some(SuffixOp::OneOrMore) => {
                p.try_one_or_more(|p| self.primary(p, primary, consuming))
            }
            Some(SuffixOp::ZeroOrMore) => {
                p.try_zero_or_more(|p| self.primary(p, primary, consuming))
            }
        }
    }

    fn primary(&mut self, p: &mut Parser<'_>, primary: &PrimaryExpr, consuming: bool) -> PegResult {
        match primary {
            PrimaryExpr::Matcher(matcher) => self.matcher(p, matcher, consuming),
            PrimaryExpr::RuleRef(name) => self.call_rule(p, name),
            PrimaryExpr::Group(choice) => self.choice(p, choice, consuming),
        }
    }

    fn matcher(&mut self, p: &mut Parser<'_>, matcher: &Matcher, consuming: bool) -> PegResult {
        self.tick()?;
        let pos = p.pos();
        let result = match matcher {
            Matcher::Any => p.expect_any(consuming),
            Matcher::Literal(literal) => {
                p.expect_literal(consuming, literal, literal.chars().count())
            }
            Matcher::Class(class) => {
                let ranges: Vec<(char, char)> =
                    class.ranges.iter().map(|r| (r.start, r.end)).collect();
                if class.negated {
                    p.expect_class_not(consuming, &ranges)
                } else {
                    p.expect_class(consuming, &ranges)
                }
            }
        };
        self.tracer.trace_match(matcher, pos, &result);
        result
    }
}
