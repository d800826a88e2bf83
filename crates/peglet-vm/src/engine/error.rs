//! Errors that stop interpretation.
//!
//! A grammar that simply does not match is not an error: that outcome is
//! `NoMatch` inside the result.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Execution fuel exhausted (too many matcher and rule steps).
    #[error("runtime execution limit exceeded ({0} steps)")]
    ExecFuelExhausted(u32),

    /// Recursion fuel exhausted (rules nested too deeply, e.g. left recursion).
    #[error("runtime recursion limit exceeded ({0} nested rules)")]
    RecursionLimitExceeded(u32),

    #[error("undefined rule `{0}`")]
    UndefinedRule(String),

    #[error("grammar has no rules")]
    EmptyGrammar,
}
