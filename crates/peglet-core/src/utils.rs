//! Identifier helpers.
//!
//! Rule names and capture labels end up as Rust identifiers in generated
//! code, so both the code generator and the CLI `check` command validate them
//! with the same rules.

/// Strict and reserved Rust keywords (2024 edition).
const KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Value-namespace names a generated parser relies on: prelude variants it
/// matches on and the runtime items pulled in by `use`.
const GENERATED_SCOPE: &[&str] = &[
    "Some", "None", "Ok", "Err", "NoMatch", "Parser", "PegResult", "Value", "flatten",
    "flatten_chars",
];

/// Check whether `s` is an ASCII identifier: `[A-Za-z_][A-Za-z0-9_]*`, not `_` alone.
///
/// # Examples
/// ```
/// use peglet_core::utils::is_identifier;
/// assert!(is_identifier("Digits"));
/// assert!(is_identifier("_tail"));
/// assert!(!is_identifier("9lives"));
/// assert!(!is_identifier("_"));
/// ```
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    s != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check whether `s` is a Rust keyword.
pub fn is_keyword(s: &str) -> bool {
    KEYWORDS.contains(&s)
}

/// Names starting with `__` belong to generated code (`__p`, `__start`, `__action_0`).
pub fn is_reserved(s: &str) -> bool {
    s.starts_with("__")
}

/// Names a binding would shadow in generated code: rule recognizers
/// (`rule_Expr`) and [`GENERATED_SCOPE`].
///
/// # Examples
/// ```
/// use peglet_core::utils::is_generated_name;
/// assert!(is_generated_name("rule_Expr"));
/// assert!(is_generated_name("None"));
/// assert!(!is_generated_name("ruler"));
/// ```
pub fn is_generated_name(s: &str) -> bool {
    s.starts_with("rule_") || GENERATED_SCOPE.contains(&s)
}

/// Check whether `s` can be used as a capture label in generated code.
pub fn is_valid_label(s: &str) -> bool {
    is_identifier(s) && !is_keyword(s) && !is_reserved(s) && !is_generated_name(s)
}
