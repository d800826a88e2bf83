//! Reference interpreter for peglet grammars.
//!
//! Executes a grammar AST directly over the `peglet-runtime` combinators,
//! with the same semantics as generated parsers. Used to try grammars
//! without compiling generated code, and to trace how a match unfolds.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

pub use engine::{
    ActionCall, ActionHandler, Captures, FuelLimits, Interpreter, InterpreterBuilder, NoopTracer,
    Outcome, Passthrough, PrintTracer, RuntimeError, Tracer, Verbosity, format_value,
};
pub use peglet_runtime::{NoMatch, PegResult, Value};
