//! JSON-like rendering of match results.

use peglet_core::Colors;
use peglet_runtime::Value;

/// Format a result value as colored JSON.
///
/// Color scheme (jq-inspired):
/// - Leaves: Green strings
/// - `None`: Dim `null`
/// - Structure `[],`: Dim
pub fn format_value(value: &Value, pretty: bool, colors: Colors) -> String {
    let mut out = String::new();
    write_value(&mut out, value, &colors, pretty, 0);
    out
}

fn write_value(out: &mut String, value: &Value, c: &Colors, pretty: bool, indent: usize) {
    match value {
        Value::None => {
            out.push_str(c.dim);
            out.push_str("null");
            out.push_str(c.reset);
        }
        Value::Leaf(s) => {
            out.push_str(c.green);
            out.push('"');
            out.push_str(&escape_json_string(s));
            out.push('"');
            out.push_str(c.reset);
        }
        Value::List(items) => write_list(out, items, c, pretty, indent),
    }
}

fn write_list(out: &mut String, items: &[Value], c: &Colors, pretty: bool, indent: usize) {
    out.push_str(c.dim);
    out.push('[');
    out.push_str(c.reset);

    if items.is_empty() {
        out.push_str(c.dim);
        out.push(']');
        out.push_str(c.reset);
        return;
    }

    let elem_indent = if pretty { indent + 2 } else { 0 };

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(c.dim);
            out.push(',');
            out.push_str(c.reset);
        }

        if pretty {
            out.push('\n');
            out.push_str(&" ".repeat(elem_indent));
        }

        write_value(out, item, c, pretty, elem_indent);
    }

    if pretty {
        out.push('\n');
        out.push_str(&" ".repeat(indent));
    }

    out.push_str(c.dim);
    out.push(']');
    out.push_str(c.reset);
}

fn escape_json_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result
}
