//! Terse constructors for grammar trees.
//!
//! ```
//! use peglet_core::SuffixOp;
//! use peglet_core::grammar::build::*;
//!
//! // Digits <- [0-9]+
//! let g = grammar(vec![rule(
//!     "Digits",
//!     vec![seq(vec![quant(class(&[('0', '9')]), SuffixOp::OneOrMore)])],
//! )]);
//! assert_eq!(g.to_string(), "Digits <- [0-9]+\n");
//! ```

use super::types::{
    ActionExpr, CharClass, CharRange, ChoiceExpr, Grammar, LabeledExpr, PrefixedExpr,
    PrimaryExpr, Rule, SeqExpr, SuffixOp, SuffixedExpr,
};

pub fn any() -> PrimaryExpr {
    PrimaryExpr::any()
}

pub fn lit(s: &str) -> PrimaryExpr {
    PrimaryExpr::literal(s)
}

pub fn class(ranges: &[(char, char)]) -> PrimaryExpr {
    PrimaryExpr::class(CharClass::new(to_ranges(ranges)))
}

pub fn class_not(ranges: &[(char, char)]) -> PrimaryExpr {
    PrimaryExpr::class(CharClass::negated(to_ranges(ranges)))
}

fn to_ranges(ranges: &[(char, char)]) -> Vec<CharRange> {
    ranges.iter().map(|&(s, e)| CharRange::new(s, e)).collect()
}

pub fn call(name: &str) -> PrimaryExpr {
    PrimaryExpr::rule(name)
}

pub fn group(alternatives: Vec<ActionExpr>) -> PrimaryExpr {
    PrimaryExpr::Group(ChoiceExpr::new(alternatives))
}

/// Plain element: no label, prefix or suffix.
pub fn el(primary: PrimaryExpr) -> LabeledExpr {
    primary.element()
}

/// Attach `label` to an element built by the other helpers.
pub fn labeled(label: &str, element: LabeledExpr) -> LabeledExpr {
    LabeledExpr::labeled(label, element.expr)
}

/// `&primary`
pub fn and(primary: PrimaryExpr) -> LabeledExpr {
    LabeledExpr::new(PrefixedExpr::and(SuffixedExpr::new(primary)))
}

/// `!primary`
pub fn not(primary: PrimaryExpr) -> LabeledExpr {
    LabeledExpr::new(PrefixedExpr::not(SuffixedExpr::new(primary)))
}

pub fn quant(primary: PrimaryExpr, op: SuffixOp) -> LabeledExpr {
    LabeledExpr::new(PrefixedExpr::new(SuffixedExpr::with_suffix(primary, op)))
}

pub fn seq(elements: Vec<LabeledExpr>) -> ActionExpr {
    ActionExpr::new(SeqExpr::new(elements))
}

pub fn choice(alternatives: Vec<ActionExpr>) -> ChoiceExpr {
    ChoiceExpr::new(alternatives)
}

pub fn rule(name: &str, alternatives: Vec<ActionExpr>) -> Rule {
    Rule::new(name, ChoiceExpr::new(alternatives))
}

pub fn grammar(rules: Vec<Rule>) -> Grammar {
    Grammar::new(rules)
}
