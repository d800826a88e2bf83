//! Interpreter engine.
//!
//! The interpreter walks the grammar tree and drives a runtime `Parser`,
//! reporting to a `Tracer` and delegating semantic actions to an
//! `ActionHandler`.

mod actions;
mod error;
mod interpreter;
mod trace;
mod value;

#[cfg(test)]
mod actions_tests;
#[cfg(test)]
mod interpreter_tests;
#[cfg(test)]
mod trace_tests;

pub use actions::{ActionCall, ActionHandler, Captures, Passthrough};
pub use error::RuntimeError;
pub use interpreter::{FuelLimits, Interpreter, InterpreterBuilder, Outcome};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use value::format_value;
