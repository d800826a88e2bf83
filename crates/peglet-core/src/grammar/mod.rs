//! PEG grammar model.
//!
//! This module provides the typed grammar tree consumed by the code generator
//! and the interpreter, its JSON form, and PEG-notation display used for
//! generated comments and `peglet dump`. `build` has terse constructors for
//! assembling trees in code.

mod binding;
pub mod build;
mod display;
mod json;
mod types;


pub use binding::Binding;
pub use json::GrammarError;
pub use types::{
    ActionExpr, CharClass, CharRange, ChoiceExpr, Grammar, LabeledExpr, Matcher, PrefixOp,
    PrefixedExpr, PrimaryExpr, Rule, SeqExpr, SuffixOp, SuffixedExpr,
};
