//! Terminal escapes for `peglet dump`, `exec` and `trace`.
//!
//! Rule names are blue, matched text and literals green, failures red,
//! cursor positions and punctuation dim.

/// Escape sequences spliced around colored spans; all empty when disabled.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub red: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        red: "\x1b[31m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        red: "",
        dim: "",
        reset: "",
    };

    /// Palette for `--color`: [`Colors::ON`] or [`Colors::OFF`].
    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
