//! peglet compiler: grammar AST to Rust recognizer source.
//!
//! - `codegen` - validation, compilation context and the per-construct
//!   compilers (matcher, prefix/suffix, sequence/action, choice, rule)
//!
//! The output is a single Rust source file: the runtime combinators from
//! `peglet-runtime` (embedded or imported), one function per rule, one
//! function per semantic action and the grammar's trailing code.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod codegen;

#[cfg(test)]
pub mod test_utils;

pub use codegen::{CompileError, CompileResult, Config, RuntimeMode, generate, validate};
