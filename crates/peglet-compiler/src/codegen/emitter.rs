//! Indentation-aware text buffer.
//!
//! Compile functions return expressions as text indented from column zero.
//! Embedding one inside another goes through [`Emitter::expr`], which shifts
//! every line of the inner text to the current level.

const INDENT: &str = "    ";

pub(crate) struct Emitter {
    output: String,
    level: usize,
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            level: 0,
        }
    }

    /// Write one line at the current level. Empty lines carry no indentation.
    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.level {
                self.output.push_str(INDENT);
            }
            self.output.push_str(text);
        }
        self.output.push('\n');
    }

    /// Write `text`, then indent following lines one level deeper.
    pub fn open(&mut self, text: &str) {
        self.line(text);
        self.level += 1;
    }

    /// Dedent one level, then write `text`.
    pub fn close(&mut self, text: &str) {
        debug_assert!(self.level > 0, "unbalanced close");
        self.level = self.level.saturating_sub(1);
        self.line(text);
    }

    /// Write `head`, a possibly multi-line `expr`, and `tail` as lines.
    pub fn expr(&mut self, head: &str, expr: &str, tail: &str) {
        for line in format!("{head}{expr}{tail}").lines() {
            self.line(line);
        }
    }

    /// Append text as-is, bypassing indentation.
    pub fn raw(&mut self, text: &str) {
        self.output.push_str(text);
        if !text.ends_with('\n') {
            self.output.push('\n');
        }
    }

    /// The accumulated text without its final newline.
    pub fn finish(mut self) -> String {
        if self.output.ends_with('\n') {
            self.output.pop();
        }
        self.output
    }
}
