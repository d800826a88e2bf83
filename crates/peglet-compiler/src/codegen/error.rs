//! Errors for grammars the code generator refuses to compile.

/// A grammar that would produce invalid Rust. Compilation stops at the first one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("grammar has no rules")]
    EmptyGrammar,

    #[error("rule `{0}` is defined more than once")]
    DuplicateRule(String),

    #[error("rule `{0}` is not a valid identifier")]
    InvalidRuleName(String),

    #[error("rule `{rule}` references undefined rule `{name}`")]
    UndefinedRule { rule: String, name: String },

    #[error("rule `{rule}` contains a choice without alternatives")]
    EmptyChoice { rule: String },

    #[error("rule `{rule}` contains an empty sequence")]
    EmptySequence { rule: String },

    #[error("rule `{rule}`: `{label}` cannot be used as a label")]
    InvalidLabel { rule: String, label: String },

    #[error("rule `{rule}`: label `{label}` is bound twice in one sequence")]
    DuplicateLabel { rule: String, label: String },

    #[error("rule `{rule}`: character range {start:?}-{end:?} is reversed")]
    InvalidCharRange { rule: String, start: char, end: char },

    #[error("`{0}` cannot be used as the entry point name")]
    InvalidEntryName(String),
}

pub type CompileResult<T> = std::result::Result<T, CompileError>;
