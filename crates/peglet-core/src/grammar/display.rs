//! PEG-notation rendering of grammar nodes.
//!
//! Output is always a single line: action code is elided as `{ ... }` so a
//! rendered rule can be placed in a `//` comment of generated code.

use std::fmt::{self, Display, Formatter, Write};

use super::types::{
    ActionExpr, CharClass, ChoiceExpr, Grammar, LabeledExpr, Matcher, PrefixOp, PrefixedExpr,
    PrimaryExpr, Rule, SeqExpr, SuffixOp, SuffixedExpr,
};

impl Display for Grammar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {}", self.name, self.body)
    }
}

impl Display for ChoiceExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, alt) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str(" / ")?;
            }
            write!(f, "{alt}")?;
        }
        Ok(())
    }
}

impl Display for ActionExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.seq)?;
        if self.code.is_some() {
            f.write_str(" { ... }")?;
        }
        Ok(())
    }
}

impl Display for SeqExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            write!(f, "{element}")?;
        }
        Ok(())
    }
}

impl Display for LabeledExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "{label}:")?;
        }
        write!(f, "{}", self.expr)
    }
}

impl Display for PrefixedExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.prefix {
            Some(PrefixOp::And) => f.write_char('&')?,
            Some(PrefixOp::Not) => f.write_char('!')?,
            None => {}
        }
        write!(f, "{}", self.expr)
    }
}

impl Display for SuffixedExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary)?;
        match self.suffix {
            Some(SuffixOp::Optional) => f.write_char('?'),
            Some(SuffixOp::OneOrMore) => f.write_char('+'),
            Some(SuffixOp::ZeroOrMore) => f.write_char('*'),
            None => Ok(()),
        }
    }
}

impl Display for PrimaryExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PrimaryExpr::Matcher(m) => write!(f, "{m}"),
            PrimaryExpr::RuleRef(name) => f.write_str(name),
            PrimaryExpr::Group(choice) => write!(f, "({choice})"),
        }
    }
}

impl Display for Matcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Any => f.write_char('.'),
            Matcher::Literal(s) => {
                f.write_char('\'')?;
                for c in s.chars() {
                    write_escaped(f, c, &['\''])?;
                }
                f.write_char('\'')
            }
            Matcher::Class(class) => write!(f, "{class}"),
        }
    }
}

impl Display for CharClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        const SPECIAL: &[char] = &[']', '-', '^'];

        f.write_char('[')?;
        if self.negated {
            f.write_char('^')?;
        }
        for range in &self.ranges {
            write_escaped(f, range.start, SPECIAL)?;
            if range.end != range.start {
                f.write_char('-')?;
                write_escaped(f, range.end, SPECIAL)?;
            }
        }
        f.write_char(']')
    }
}

fn write_escaped(f: &mut Formatter<'_>, c: char, special: &[char]) -> fmt::Result {
    if c == '\\' || special.contains(&c) {
        write!(f, "\\{c}")
    } else if c.is_control() {
        write!(f, "{}", c.escape_default())
    } else {
        f.write_char(c)
    }
}
