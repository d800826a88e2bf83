//! Configuration for code generation.

/// Where generated code finds the runtime combinators.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RuntimeMode {
    /// Copy `peglet-runtime`'s source into a private module of the artifact.
    #[default]
    Embedded,
    /// `use <path>::*;` - the artifact depends on a runtime crate instead.
    Extern(String),
}

/// Configuration for code generation.
#[derive(Clone, Debug)]
pub struct Config {
    /// Precede each rule recognizer with its PEG rendering
    pub(crate) comments: bool,
    /// Name of the public entry point; `<name>_str` is emitted alongside
    pub(crate) entry_name: String,
    pub(crate) runtime: RuntimeMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            comments: true,
            entry_name: "parse".to_string(),
            runtime: RuntimeMode::default(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit `// Rule: ...` comments.
    pub fn comments(mut self, value: bool) -> Self {
        self.comments = value;
        self
    }

    /// Set the entry point name.
    pub fn entry_name(mut self, name: impl Into<String>) -> Self {
        self.entry_name = name.into();
        self
    }

    /// Set how the runtime is provided.
    pub fn runtime(mut self, mode: RuntimeMode) -> Self {
        self.runtime = mode;
        self
    }
}
