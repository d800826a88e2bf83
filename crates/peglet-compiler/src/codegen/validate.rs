//! Checks that keep generated code compilable.
//!
//! Runs before any emission. Left recursion and unreachable rules are not
//! detected: both still produce valid Rust.

use indexmap::IndexSet;
use peglet_core::utils::{is_identifier, is_valid_label};
use peglet_core::{Binding, ChoiceExpr, Grammar, Matcher, PrimaryExpr, SeqExpr};

use super::Config;
use super::error::{CompileError, CompileResult};

/// Reject grammars (and configs) that would generate invalid Rust.
pub fn validate(grammar: &Grammar, config: &Config) -> CompileResult<()> {
    // The entry also defines `{entry}_str`, which must not land on a recognizer.
    let entry = config.entry_name.as_str();
    if !is_valid_label(entry) || !is_valid_label(&format!("{entry}_str")) {
        return Err(CompileError::InvalidEntryName(entry.to_string()));
    }

    if grammar.rules.is_empty() {
        return Err(CompileError::EmptyGrammar);
    }

    let mut rules = IndexSet::new();
    for rule in &grammar.rules {
        if !is_identifier(&rule.name) {
            return Err(CompileError::InvalidRuleName(rule.name.clone()));
        }
        if !rules.insert(rule.name.as_str()) {
            return Err(CompileError::DuplicateRule(rule.name.clone()));
        }
    }

    for rule in &grammar.rules {
        let validator = Validator {
            rule: &rule.name,
            rules: &rules,
        };
        validator.choice(&rule.body)?;
    }
    Ok(())
}

struct Validator<'a> {
    rule: &'a str,
    rules: &'a IndexSet<&'a str>,
}

impl Validator<'_> {
    fn choice(&self, choice: &ChoiceExpr) -> CompileResult<()> {
        if choice.alternatives.is_empty() {
            return Err(CompileError::EmptyChoice {
                rule: self.rule.to_string(),
            });
        }
        for alternative in &choice.alternatives {
            self.seq(&alternative.seq)?;
        }
        Ok(())
    }

    fn seq(&self, seq: &SeqExpr) -> CompileResult<()> {
        if seq.elements.is_empty() {
            return Err(CompileError::EmptySequence {
                rule: self.rule.to_string(),
            });
        }

        let mut bound = IndexSet::new();
        for (element, binding) in seq.elements.iter().zip(seq.bindings()) {
            if let Some(label) = &element.label
                && !is_valid_label(label)
            {
                return Err(CompileError::InvalidLabel {
                    rule: self.rule.to_string(),
                    label: label.clone(),
                });
            }
            if let Binding::Named(label) = binding
                && !bound.insert(label)
            {
                return Err(CompileError::DuplicateLabel {
                    rule: self.rule.to_string(),
                    label: label.to_string(),
                });
            }
            self.primary(&element.expr.expr.primary)?;
        }
        Ok(())
    }

    fn primary(&self, primary: &PrimaryExpr) -> CompileResult<()> {
        match primary {
            PrimaryExpr::Matcher(Matcher::Class(class)) => {
                if let Some(range) = class.ranges.iter().find(|r| r.start > r.end) {
                    return Err(CompileError::InvalidCharRange {
                        rule: self.rule.to_string(),
                        start: range.start,
                        end: range.end,
                    });
                }
                Ok(())
            }
            PrimaryExpr::Matcher(Matcher::Any | Matcher::Literal(_)) => Ok(()),
            PrimaryExpr::RuleRef(name) => {
                if self.rules.contains(name.as_str()) {
                    Ok(())
                } else {
                    Err(CompileError::UndefinedRule {
                        rule: self.rule.to_string(),
                        name: name.clone(),
                    })
                }
            }
            PrimaryExpr::Group(choice) => self.choice(choice),
        }
    }
}
