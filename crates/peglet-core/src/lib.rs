//! Core data structures for peglet.
//!
//! This crate holds what every other peglet crate agrees on:
//! - `grammar` - the PEG abstract syntax tree, its JSON form and PEG display
//! - `colors` - ANSI palette for terminal output
//! - `utils` - identifier helpers shared by the code generator and the CLI

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod colors;
pub mod grammar;
pub mod utils;


pub use colors::Colors;
pub use grammar::{
    ActionExpr, Binding, CharClass, CharRange, ChoiceExpr, Grammar, GrammarError, LabeledExpr,
    Matcher, PrefixOp, PrefixedExpr, PrimaryExpr, Rule, SeqExpr, SuffixOp, SuffixedExpr,
};
