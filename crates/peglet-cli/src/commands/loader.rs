//! Loading grammars and input for the commands.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use peglet_compiler::{Config, validate};
use peglet_core::{Grammar, GrammarError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("grammar is required: use positional argument or -g/--grammar")]
    MissingGrammar,

    #[error("input is required: use positional argument or -s/--input")]
    MissingInput,

    #[error("grammar and input cannot both be from stdin")]
    BothStdin,

    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

/// Load a grammar from inline JSON, a file, or stdin (`-`).
pub fn load_grammar(path: Option<&Path>, text: Option<&str>) -> Result<Grammar, LoadError> {
    let json = match (text, path) {
        (Some(text), _) => text.to_owned(),
        (None, Some(path)) => read(path)?,
        (None, None) => return Err(LoadError::MissingGrammar),
    };
    Ok(Grammar::from_json(&json)?)
}

/// Load input text as code points.
pub fn load_input(
    path: Option<&Path>,
    text: Option<&str>,
    grammar_path: Option<&Path>,
) -> Result<Vec<char>, LoadError> {
    let input = match (text, path) {
        (Some(text), _) => text.to_owned(),
        (None, Some(path)) => {
            if is_stdin(path) && grammar_path.is_some_and(is_stdin) {
                return Err(LoadError::BothStdin);
            }
            read(path)?
        }
        (None, None) => return Err(LoadError::MissingInput),
    };
    Ok(input.chars().collect())
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read(path: &Path) -> Result<String, LoadError> {
    let result = if is_stdin(path) {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(path)
    };
    result.map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Print the error and exit with status 1.
pub fn exit_with(error: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", error);
    std::process::exit(1)
}

/// Load a grammar and reject the shapes neither the compiler nor the
/// interpreter can run, exiting on failure.
pub fn load_valid_grammar(path: Option<&Path>, text: Option<&str>) -> Grammar {
    let grammar = load_grammar(path, text).unwrap_or_else(|e| exit_with(e));
    if let Err(e) = validate(&grammar, &Config::default()) {
        exit_with(e);
    }
    grammar
}
