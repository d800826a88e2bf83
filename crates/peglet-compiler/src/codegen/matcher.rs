//! Terminal matchers: `.`, `'lit'`, `[a-z]`, `[^a-z]`.

use peglet_core::{CharRange, Matcher};

use super::Mode;

/// One runtime matcher call. The mode decides whether a success consumes.
pub(crate) fn compile_matcher(matcher: &Matcher, mode: Mode) -> String {
    let consume = mode.consuming;
    match matcher {
        Matcher::Any => format!("__p.expect_any({consume})"),
        // Length is in code points, the unit the runtime cursor counts in.
        Matcher::Literal(literal) => format!(
            "__p.expect_literal({consume}, {literal:?}, {})",
            literal.chars().count()
        ),
        Matcher::Class(class) => {
            let method = if class.negated {
                "expect_class_not"
            } else {
                "expect_class"
            };
            format!("__p.{method}({consume}, {})", range_table(&class.ranges))
        }
    }
}

/// `&[('a', 'z'), ('_', '_')]`
fn range_table(ranges: &[CharRange]) -> String {
    let items: Vec<String> = ranges
        .iter()
        .map(|r| format!("({:?}, {:?})", r.start, r.end))
        .collect();
    format!("&[{}]", items.join(", "))
}
