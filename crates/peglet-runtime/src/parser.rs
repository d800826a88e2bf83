//! Cursor, matchers and combinators for generated PEG recognizers.
//!
//! Every operation either succeeds with a [`Value`] or fails with [`NoMatch`].
//! A failing operation leaves the cursor where it was before the operation
//! started; a succeeding one advances it by exactly the number of code points
//! it consumed.

use std::fmt;

/// The single failure kind: no match at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoMatch;

impl fmt::Display for NoMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no match")
    }
}

impl std::error::Error for NoMatch {}

/// Outcome of every matcher, combinator and rule.
pub type PegResult = Result<Value, NoMatch>;

/// Value produced by a successful match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Value {
    /// Nothing was captured (e.g. an optional that did not match).
    #[default]
    None,
    /// A matched code point or literal.
    Leaf(String),
    /// Ordered results of a sequence or repetition.
    List(Vec<Value>),
}

impl Value {
    pub fn leaf(text: impl Into<String>) -> Self {
        Value::Leaf(text.into())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Value::Leaf(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Concatenate all leaves depth-first, left to right. `None` is empty.
    pub fn flatten(&self) -> String {
        let mut out = String::new();
        self.flatten_into(&mut out);
        out
    }

    /// [`Value::flatten`] as code points, the unit [`Parser`] matches on.
    pub fn chars(&self) -> Vec<char> {
        let mut out = Vec::new();
        self.chars_into(&mut out);
        out
    }

    fn chars_into(&self, out: &mut Vec<char>) {
        match self {
            Value::None => {}
            Value::Leaf(s) => out.extend(s.chars()),
            Value::List(items) => {
                for item in items {
                    item.chars_into(out);
                }
            }
        }
    }

    fn flatten_into(&self, out: &mut String) {
        match self {
            Value::None => {}
            Value::Leaf(s) => out.push_str(s),
            Value::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

/// Free-function form of [`Value::flatten`] for use inside action code.
pub fn flatten(value: &Value) -> String {
    value.flatten()
}

/// Free-function form of [`Value::chars`].
pub fn flatten_chars(value: &Value) -> Vec<char> {
    value.chars()
}

/// Cursor over an immutable sequence of code points.
#[derive(Debug, Clone)]
pub struct Parser<'s> {
    src: &'s [char],
    pos: usize,
}

impl<'s> Parser<'s> {
    pub fn new(src: &'s [char]) -> Self {
        Self { src, pos: 0 }
    }

    pub fn src(&self) -> &'s [char] {
        self.src
    }

    /// Save point: the current cursor offset in code points.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Restore a save point taken with [`Parser::pos`].
    #[inline]
    pub fn back_to(&mut self, pos: usize) {
        debug_assert!(pos <= self.src.len(), "restore past end of input");
        self.pos = pos;
    }

    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remaining(&self) -> usize {
        self.src.len() - self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// `.` - any single code point; fails only at end of input.
    pub fn expect_any(&mut self, consume: bool) -> PegResult {
        self.expect_char(consume, |_| true)
    }

    /// Literal of `len` code points, compared in full.
    pub fn expect_literal(&mut self, consume: bool, literal: &str, len: usize) -> PegResult {
        let end = self.pos + len;
        if end > self.src.len() || !literal.chars().eq(self.src[self.pos..end].iter().copied()) {
            return Err(NoMatch);
        }
        if consume {
            self.advance(len);
        }
        Ok(Value::leaf(literal))
    }

    /// `[...]` - code point inside one of the inclusive ranges.
    pub fn expect_class(&mut self, consume: bool, ranges: &[(char, char)]) -> PegResult {
        self.expect_char(consume, |c| in_ranges(c, ranges))
    }

    /// `[^...]` - code point outside every range; still fails at end of input.
    pub fn expect_class_not(&mut self, consume: bool, ranges: &[(char, char)]) -> PegResult {
        self.expect_char(consume, |c| !in_ranges(c, ranges))
    }

    fn expect_char(&mut self, consume: bool, accept: impl FnOnce(char) -> bool) -> PegResult {
        match self.src.get(self.pos) {
            Some(&c) if accept(c) => {
                if consume {
                    self.advance(1);
                }
                Ok(Value::Leaf(c.to_string()))
            }
            _ => Err(NoMatch),
        }
    }

    /// `e?` - never fails; yields `Value::None` when `e` does not match.
    pub fn try_optional(&mut self, mut attempt: impl FnMut(&mut Self) -> PegResult) -> PegResult {
        let start = self.pos;
        match attempt(self) {
            Ok(value) => Ok(value),
            Err(NoMatch) => {
                self.pos = start;
                Ok(Value::None)
            }
        }
    }

    /// `e+` - fails only if the first attempt fails.
    pub fn try_one_or_more(&mut self, attempt: impl FnMut(&mut Self) -> PegResult) -> PegResult {
        let items = self.repeat(attempt);
        if items.is_empty() {
            return Err(NoMatch);
        }
        Ok(Value::List(items))
    }

    /// `e*` - never fails; yields a possibly empty list.
    pub fn try_zero_or_more(&mut self, attempt: impl FnMut(&mut Self) -> PegResult) -> PegResult {
        Ok(Value::List(self.repeat(attempt)))
    }

    /// Collect consecutive successes. The cursor ends after the last success.
    ///
    /// An attempt that succeeds without consuming input ends the repetition
    /// after its value is recorded; repeating it could never make progress.
    fn repeat(&mut self, mut attempt: impl FnMut(&mut Self) -> PegResult) -> Vec<Value> {
        let mut items = Vec::new();
        loop {
            let before = self.pos;
            match attempt(self) {
                Ok(value) => {
                    items.push(value);
                    if self.pos == before {
                        break;
                    }
                }
                Err(NoMatch) => {
                    self.pos = before;
                    break;
                }
            }
        }
        items
    }

    /// `&e` - run `attempt` and restore the cursor whatever its outcome.
    pub fn lookahead(&mut self, attempt: impl FnOnce(&mut Self) -> PegResult) -> PegResult {
        let start = self.pos;
        let result = attempt(self);
        self.pos = start;
        result
    }

    /// `!e` - succeed with `Value::None` iff `attempt` fails; never moves the cursor.
    pub fn negative_lookahead(&mut self, attempt: impl FnOnce(&mut Self) -> PegResult) -> PegResult {
        match self.lookahead(attempt) {
            Ok(_) => Err(NoMatch),
            Err(NoMatch) => Ok(Value::None),
        }
    }
}

fn in_ranges(c: char, ranges: &[(char, char)]) -> bool {
    ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi)
}
