//! Rust code generation from grammar ASTs.
//!
//! Compilation is one recursive walk over the tree. Each construct has a
//! single compile function that returns the Rust expression for it:
//! - `matcher` - `.`, `'lit'`, `[a-z]`
//! - `prefix` - `&e`, `!e`, `e?`, `e+`, `e*`
//! - `sequence` - element bindings and semantic-action units
//! - `choice` - ordered alternation with backtracking
//! - `rule` - primaries and rule recognizers
//! - `artifact` - the complete output file

mod artifact;
mod choice;
mod config;
mod ctx;
mod emitter;
mod error;
mod matcher;
mod prefix;
mod rule;
mod sequence;
mod validate;

#[cfg(test)]
mod artifact_tests;
#[cfg(test)]
mod choice_tests;

pub use artifact::generate;
pub use config::{Config, RuntimeMode};
pub(crate) use ctx::{CompileCtx, Mode};
pub use error::{CompileError, CompileResult};
pub use validate::validate;
