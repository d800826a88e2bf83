//! JSON deserialization for grammar files.
//!
//! The JSON form mirrors the AST one level at a time. Rules are an object so
//! declaration order is the key order; primaries are internally tagged with a
//! `type` field:
//!
//! ```json
//! {
//!   "rules": {
//!     "Digits": [
//!       { "seq": [ { "suffix": "+", "primary": { "type": "CLASS", "ranges": [["0", "9"]] } } ] }
//!     ]
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use super::types::{
    ActionExpr, CharClass, CharRange, ChoiceExpr, Grammar, LabeledExpr, Matcher, PrefixOp,
    PrefixedExpr, PrimaryExpr, Rule, SeqExpr, SuffixOp, SuffixedExpr,
};

/// Error during grammar loading.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Grammar {
    /// Parse grammar from JSON string.
    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        let raw: RawGrammar = serde_json::from_str(json)?;
        Ok(raw.into())
    }
}

/// Raw grammar structure matching the JSON format.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGrammar {
    rules: IndexMap<String, Vec<RawAlternative>>,
    #[serde(default)]
    code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAlternative {
    seq: Vec<RawElement>,
    #[serde(default)]
    code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawElement {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    prefix: Option<RawPrefix>,
    #[serde(default)]
    suffix: Option<RawSuffix>,
    primary: RawPrimary,
}

#[derive(Debug, Deserialize)]
enum RawPrefix {
    #[serde(rename = "&")]
    And,
    #[serde(rename = "!")]
    Not,
}

#[derive(Debug, Deserialize)]
enum RawSuffix {
    #[serde(rename = "?")]
    Optional,
    #[serde(rename = "+")]
    OneOrMore,
    #[serde(rename = "*")]
    ZeroOrMore,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
#[allow(clippy::upper_case_acronyms)]
enum RawPrimary {
    ANY,
    LITERAL {
        value: String,
    },
    CLASS {
        ranges: Vec<(char, char)>,
        #[serde(default)]
        negated: bool,
    },
    RULE {
        name: String,
    },
    GROUP {
        alternatives: Vec<RawAlternative>,
    },
}

impl From<RawGrammar> for Grammar {
    fn from(raw: RawGrammar) -> Self {
        // IndexMap keeps key order, so the first key stays the start rule.
        Self {
            rules: raw
                .rules
                .into_iter()
                .map(|(name, alternatives)| Rule::new(name, choice(alternatives)))
                .collect(),
            code: raw.code,
        }
    }
}

fn choice(alternatives: Vec<RawAlternative>) -> ChoiceExpr {
    ChoiceExpr::new(alternatives.into_iter().map(Into::into).collect())
}

impl From<RawAlternative> for ActionExpr {
    fn from(raw: RawAlternative) -> Self {
        Self {
            seq: SeqExpr::new(raw.seq.into_iter().map(Into::into).collect()),
            code: raw.code,
        }
    }
}

impl From<RawElement> for LabeledExpr {
    fn from(raw: RawElement) -> Self {
        Self {
            label: raw.label,
            expr: PrefixedExpr {
                prefix: raw.prefix.map(|p| match p {
                    RawPrefix::And => PrefixOp::And,
                    RawPrefix::Not => PrefixOp::Not,
                }),
                expr: SuffixedExpr {
                    suffix: raw.suffix.map(|s| match s {
                        RawSuffix::Optional => SuffixOp::Optional,
                        RawSuffix::OneOrMore => SuffixOp::OneOrMore,
                        RawSuffix::ZeroOrMore => SuffixOp::ZeroOrMore,
                    }),
                    primary: raw.primary.into(),
                },
            },
        }
    }
}

impl From<RawPrimary> for PrimaryExpr {
    fn from(raw: RawPrimary) -> Self {
        match raw {
            RawPrimary::ANY => PrimaryExpr::Matcher(Matcher::Any),
            RawPrimary::LITERAL { value } => PrimaryExpr::Matcher(Matcher::Literal(value)),
            RawPrimary::CLASS { ranges, negated } => PrimaryExpr::Matcher(Matcher::Class(CharClass {
                ranges: ranges
                    .into_iter()
                    .map(|(start, end)| CharRange::new(start, end))
                    .collect(),
                negated,
            })),
            RawPrimary::RULE { name } => PrimaryExpr::RuleRef(name),
            RawPrimary::GROUP { alternatives } => PrimaryExpr::Group(choice(alternatives)),
        }
    }
}
