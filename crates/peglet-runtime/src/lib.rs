//! Runtime support for peglet-generated parsers.
//!
//! Generated recognizers call into [`Parser`] for cursor bookkeeping, the
//! three terminal matchers and the quantifier/lookahead combinators. The
//! whole surface lives in `parser.rs`, which the code generator embeds
//! verbatim into every artifact unless told to `use` this crate instead.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod parser;


pub use parser::{NoMatch, Parser, PegResult, Value, flatten, flatten_chars};

/// Source of `parser.rs`, embedded by the code generator.
pub const SOURCE: &str = include_str!("parser.rs");
