//! Capture binding rules for sequence elements.
//!
//! Both the code generator and the interpreter decide where each element's
//! value goes through [`SeqExpr::bindings`], so the two can never disagree:
//! - lookahead elements (`&e`, `!e`) are always discarded
//! - if any element has a label, labeled elements bind by name and unlabeled
//!   ones are discarded
//! - otherwise captured elements take consecutive positional slots

use super::types::SeqExpr;

/// Where an element's value goes after a successful match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding<'a> {
    /// Bound to the variable named by the element's label.
    Named(&'a str),
    /// Bound to positional slot `n` (counting captured elements only).
    Positional(usize),
    /// Matched for its effect on success/failure only.
    Discard,
}

impl Binding<'_> {
    pub fn is_capture(&self) -> bool {
        !matches!(self, Binding::Discard)
    }
}

impl SeqExpr {
    /// One binding per element, in element order.
    pub fn bindings(&self) -> Vec<Binding<'_>> {
        let labeled = self.has_label();
        let mut next_slot = 0;

        self.elements
            .iter()
            .map(|element| {
                if element.expr.is_lookahead() {
                    return Binding::Discard;
                }
                if labeled {
                    return match element.label.as_deref() {
                        Some(label) => Binding::Named(label),
                        None => Binding::Discard,
                    };
                }
                let slot = next_slot;
                next_slot += 1;
                Binding::Positional(slot)
            })
            .collect()
    }

    /// Bindings of captured elements only, in element order.
    pub fn captures(&self) -> Vec<Binding<'_>> {
        self.bindings()
            .into_iter()
            .filter(Binding::is_capture)
            .collect()
    }
}
