//! Compilation context threaded through every compile function.

use super::Config;

/// Whether matchers advance the cursor on success.
///
/// Passed by value: `&'x'` or `!.` compiles the matcher with
/// [`Mode::LOOKAHEAD`] and the caller's mode is untouched for its siblings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Mode {
    pub consuming: bool,
}

impl Mode {
    pub const CONSUMING: Self = Self { consuming: true };
    pub const LOOKAHEAD: Self = Self { consuming: false };
}

/// Per-`generate` state: name allocators and the action side buffer.
pub(crate) struct CompileCtx<'a> {
    pub(super) config: &'a Config,
    /// Rule currently being compiled, for action comments.
    pub(super) rule: &'a str,
    next_action: usize,
    next_block: usize,
    /// Action units in allocation order, each a complete item.
    pub(crate) actions: Vec<String>,
}

impl<'a> CompileCtx<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            rule: "",
            next_action: 0,
            next_block: 0,
            actions: Vec::new(),
        }
    }

    /// Fresh action unit name: `__action_0`, `__action_1`, ...
    pub fn action_name(&mut self) -> String {
        let name = format!("__action_{}", self.next_action);
        self.next_action += 1;
        name
    }

    /// Fresh block label: `'__choice0`, `'__seq1`, ...
    ///
    /// One counter for all kinds so a label is unique within the artifact.
    pub fn block_label(&mut self, kind: &str) -> String {
        let label = format!("'__{kind}{}", self.next_block);
        self.next_block += 1;
        label
    }
}
