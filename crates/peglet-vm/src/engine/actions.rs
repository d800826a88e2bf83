//! Semantic actions under interpretation.
//!
//! Action code is target-language source and cannot run inside the
//! interpreter. Each action invocation is handed to an [`ActionHandler`]
//! together with the captures the generated action unit would receive.

use peglet_runtime::Value;

/// Captures of one sequence, in element order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Captures<'a> {
    /// The sequence uses labels; unlabeled elements were discarded.
    Named(Vec<(&'a str, Value)>),
    /// No labels; lookahead elements were discarded.
    Positional(Vec<Value>),
}

impl Captures<'_> {
    pub fn len(&self) -> usize {
        match self {
            Captures::Named(v) => v.len(),
            Captures::Positional(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value of the capture labeled `label`.
    pub fn get(&self, label: &str) -> Option<&Value> {
        match self {
            Captures::Named(v) => v.iter().find(|(l, _)| *l == label).map(|(_, v)| v),
            Captures::Positional(_) => None,
        }
    }

    /// The result a sequence has without an action: the single capture, or
    /// a list of all captures.
    pub fn into_value(self) -> Value {
        let mut values: Vec<Value> = match self {
            Captures::Named(v) => v.into_iter().map(|(_, v)| v).collect(),
            Captures::Positional(v) => v,
        };
        if values.len() == 1 {
            values.swap_remove(0)
        } else {
            Value::List(values)
        }
    }
}

/// One action invocation.
#[derive(Clone, Debug)]
pub struct ActionCall<'a> {
    /// Rule whose alternative carries the action.
    pub rule: &'a str,
    /// Action source as written in the grammar.
    pub code: &'a str,
    pub captures: Captures<'a>,
}

/// Computes the value of an alternative that carries an action.
pub trait ActionHandler {
    fn call(&mut self, call: ActionCall<'_>) -> Value;
}

/// Ignores action code and yields the plain sequence result.
#[derive(Clone, Copy, Debug, Default)]
pub struct Passthrough;

impl ActionHandler for Passthrough {
    fn call(&mut self, call: ActionCall<'_>) -> Value {
        call.captures.into_value()
    }
}

impl<F> ActionHandler for F
where
    F: FnMut(ActionCall<'_>) -> Value,
{
    fn call(&mut self, call: ActionCall<'_>) -> Value {
        self(call)
    }
}
