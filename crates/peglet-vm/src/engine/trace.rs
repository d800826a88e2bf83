//! Tracing infrastructure for debugging interpretation.
//!
//! The interpreter is generic over [`Tracer`]. With [`NoopTracer`] every
//! method is an `#[inline(always)]` empty function and tracing costs nothing;
//! [`PrintTracer`] collects indented, optionally colored lines.

use peglet_core::{Colors, Matcher};
use peglet_runtime::PegResult;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Default: rule enter/exit, backtracks, actions.
    #[default]
    Default,
    /// Verbose (-v): also every matcher attempt.
    Verbose,
    /// Very verbose (-vv): also the text each successful matcher yielded.
    VeryVerbose,
}

/// Tracer trait for interpreter instrumentation.
///
/// Positions are cursor offsets in code points.
/// - `trace_enter_rule` - before a rule body runs
/// - `trace_exit_rule` - after it returns
/// - `trace_match` - after a terminal matcher ran, with its start position
/// - `trace_backtrack` - when a choice restores the cursor after a failed alternative
/// - `trace_action` - before an action is handed to the action handler
pub trait Tracer {
    fn trace_enter_rule(&mut self, rule: &str, pos: usize);

    fn trace_exit_rule(&mut self, rule: &str, pos: usize, result: &PegResult);

    fn trace_match(&mut self, matcher: &Matcher, pos: usize, result: &PegResult);

    fn trace_backtrack(&mut self, pos: usize);

    fn trace_action(&mut self, rule: &str, pos: usize);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter_rule(&mut self, _rule: &str, _pos: usize) {}

    #[inline(always)]
    fn trace_exit_rule(&mut self, _rule: &str, _pos: usize, _result: &PegResult) {}

    #[inline(always)]
    fn trace_match(&mut self, _matcher: &Matcher, _pos: usize, _result: &PegResult) {}

    #[inline(always)]
    fn trace_backtrack(&mut self, _pos: usize) {}

    #[inline(always)]
    fn trace_action(&mut self, _rule: &str, _pos: usize) {}
}

const OK: &str = "✓";
const FAIL: &str = "✗";
const BACKTRACK: &str = "↺";
const ACTION: &str = "ƒ";

/// Tracer that collects execution trace for debugging.
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
    /// Current rule nesting, for indentation.
    depth: usize,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
            depth: 0,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn push(&mut self, content: String) {
        self.lines.push(format!("{}{}", "  ".repeat(self.depth), content));
    }

    fn pos(&self, pos: usize) -> String {
        let c = self.colors;
        format!("{}@{}{}", c.dim, pos, c.reset)
    }

    fn status(&self, result: &PegResult) -> String {
        let c = self.colors;
        if result.is_ok() {
            format!("{}{}{}", c.green, OK, c.reset)
        } else {
            format!("{}{}{}", c.red, FAIL, c.reset)
        }
    }
}

impl Tracer for PrintTracer {
    fn trace_enter_rule(&mut self, rule: &str, pos: usize) {
        let c = self.colors;
        let line = format!("{}{}{} {}", c.blue, rule, c.reset, self.pos(pos));
        self.push(line);
        self.depth += 1;
    }

    fn trace_exit_rule(&mut self, rule: &str, pos: usize, result: &PegResult) {
        let c = self.colors;
        self.depth = self.depth.saturating_sub(1);
        let line = format!(
            "{} {}{}{} {}",
            self.status(result),
            c.blue,
            rule,
            c.reset,
            self.pos(pos)
        );
        self.push(line);
    }

    fn trace_match(&mut self, matcher: &Matcher, pos: usize, result: &PegResult) {
        if self.verbosity == Verbosity::Default {
            return;
        }

        let c = self.colors;
        let mut line = format!("{} {} {}", self.status(result), matcher, self.pos(pos));
        if self.verbosity == Verbosity::VeryVerbose
            && let Ok(value) = result
        {
            line.push_str(&format!(" {}{}{}{}", c.dim, c.green, value.flatten(), c.reset));
        }
        self.push(line);
    }

    fn trace_backtrack(&mut self, pos: usize) {
        let c = self.colors;
        let line = format!("{}{} @{}{}", c.dim, BACKTRACK, pos, c.reset);
        self.push(line);
    }

    fn trace_action(&mut self, rule: &str, pos: usize) {
        let c = self.colors;
        let line = format!("{}{} {}{} {}", c.dim, ACTION, rule, c.reset, self.pos(pos));
        self.push(line);
    }
}
