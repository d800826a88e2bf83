//! Grammar AST type definitions.
//!
//! The tree is built once by a front-end (or loaded from JSON) and is
//! read-only afterwards. Every node category is a closed type so consumers
//! match on it exhaustively.

/// A complete PEG grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    /// Rules in declaration order. The first rule is the start symbol.
    pub rules: Vec<Rule>,
    /// Grammar-level user code, emitted verbatim after the generated parser.
    pub code: Option<String>,
}

impl Grammar {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules, code: None }
    }

    /// Attach grammar-level user code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// The implicit start symbol: the first declared rule.
    pub fn start_rule(&self) -> Option<&Rule> {
        self.rules.first()
    }

    /// Find a rule by name.
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }
}

/// Named rule: `Name <- body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: String,
    pub body: ChoiceExpr,
}

impl Rule {
    pub fn new(name: impl Into<String>, body: ChoiceExpr) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }
}

/// Ordered alternation `a / b / c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceExpr {
    pub alternatives: Vec<ActionExpr>,
}

impl ChoiceExpr {
    pub fn new(alternatives: Vec<ActionExpr>) -> Self {
        Self { alternatives }
    }
}

/// A sequence with an optional semantic action snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionExpr {
    pub seq: SeqExpr,
    pub code: Option<String>,
}

impl ActionExpr {
    pub fn new(seq: SeqExpr) -> Self {
        Self { seq, code: None }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Sequence `a b c`. Must contain at least one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqExpr {
    pub elements: Vec<LabeledExpr>,
}

impl SeqExpr {
    pub fn new(elements: Vec<LabeledExpr>) -> Self {
        Self { elements }
    }

    /// True if any element carries an explicit label.
    pub fn has_label(&self) -> bool {
        self.elements.iter().any(|e| e.label.is_some())
    }
}

/// Element of a sequence, optionally labeled: `name:expr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledExpr {
    pub label: Option<String>,
    pub expr: PrefixedExpr,
}

impl LabeledExpr {
    pub fn new(expr: PrefixedExpr) -> Self {
        Self { label: None, expr }
    }

    pub fn labeled(label: impl Into<String>, expr: PrefixedExpr) -> Self {
        Self {
            label: Some(label.into()),
            expr,
        }
    }
}

/// Lookahead predicate operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOp {
    /// `&e` - succeeds iff `e` matches, consumes nothing.
    And,
    /// `!e` - succeeds iff `e` fails, consumes nothing.
    Not,
}

/// Optionally prefixed expression: `&e`, `!e`, or `e`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixedExpr {
    pub prefix: Option<PrefixOp>,
    pub expr: SuffixedExpr,
}

impl PrefixedExpr {
    pub fn new(expr: SuffixedExpr) -> Self {
        Self { prefix: None, expr }
    }

    pub fn and(expr: SuffixedExpr) -> Self {
        Self {
            prefix: Some(PrefixOp::And),
            expr,
        }
    }

    pub fn not(expr: SuffixedExpr) -> Self {
        Self {
            prefix: Some(PrefixOp::Not),
            expr,
        }
    }

    /// Lookahead elements never contribute a value to their sequence.
    pub fn is_lookahead(&self) -> bool {
        self.prefix.is_some()
    }
}

/// Quantifier operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixOp {
    /// `?`
    Optional,
    /// `+`
    OneOrMore,
    /// `*`
    ZeroOrMore,
}

/// Optionally quantified primary: `e?`, `e+`, `e*`, or `e`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixedExpr {
    pub suffix: Option<SuffixOp>,
    pub primary: PrimaryExpr,
}

impl SuffixedExpr {
    pub fn new(primary: PrimaryExpr) -> Self {
        Self {
            suffix: None,
            primary,
        }
    }

    pub fn with_suffix(primary: PrimaryExpr, suffix: SuffixOp) -> Self {
        Self {
            suffix: Some(suffix),
            primary,
        }
    }

    /// A single unquantified matcher. Only these can be tested in place;
    /// anything larger has to move the cursor between its parts.
    pub fn is_bare_matcher(&self) -> bool {
        self.suffix.is_none() && matches!(self.primary, PrimaryExpr::Matcher(_))
    }
}

/// Primary expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimaryExpr {
    Matcher(Matcher),
    /// Call into another rule's recognizer.
    RuleRef(String),
    /// Parenthesized alternation `( ... )`.
    Group(ChoiceExpr),
}

/// Terminal matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// `.` - any single code point.
    Any,
    /// `'abc'` - exact code-point sequence.
    Literal(String),
    /// `[a-z]` / `[^a-z]`.
    Class(CharClass),
}

/// Character class: ordered inclusive ranges plus a negation flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    pub ranges: Vec<CharRange>,
    pub negated: bool,
}

impl CharClass {
    pub fn new(ranges: Vec<CharRange>) -> Self {
        Self {
            ranges,
            negated: false,
        }
    }

    pub fn negated(ranges: Vec<CharRange>) -> Self {
        Self {
            ranges,
            negated: true,
        }
    }

    /// Membership test honoring the negation flag.
    pub fn matches(&self, c: char) -> bool {
        self.ranges.iter().any(|r| r.contains(c)) != self.negated
    }
}

/// Inclusive code-point range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRange {
    pub start: char,
    pub end: char,
}

impl CharRange {
    pub fn new(start: char, end: char) -> Self {
        Self { start, end }
    }

    pub fn single(c: char) -> Self {
        Self { start: c, end: c }
    }

    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }
}

// Shorthands for building trees in code and tests.

impl PrimaryExpr {
    pub fn any() -> Self {
        Self::Matcher(Matcher::Any)
    }

    pub fn literal(s: impl Into<String>) -> Self {
        Self::Matcher(Matcher::Literal(s.into()))
    }

    pub fn class(class: CharClass) -> Self {
        Self::Matcher(Matcher::Class(class))
    }

    pub fn rule(name: impl Into<String>) -> Self {
        Self::RuleRef(name.into())
    }

    /// Wrap as a plain sequence element (no label, prefix or suffix).
    pub fn element(self) -> LabeledExpr {
        LabeledExpr::new(PrefixedExpr::new(SuffixedExpr::new(self)))
    }
}
