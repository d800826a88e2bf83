//! Test helpers for the code generator.

pub use peglet_core::grammar::build::*;

use crate::codegen::{CompileCtx, Config};

/// Config without rule comments, so expected output stays short.
pub fn quiet() -> Config {
    Config::new().comments(false)
}

impl CompileCtx<'_> {
    /// Action units registered so far, joined by blank lines.
    pub fn actions_text(&self) -> String {
        self.actions.join("\n\n")
    }
}
