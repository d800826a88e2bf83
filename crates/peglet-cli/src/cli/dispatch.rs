//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs populated from clap, one per subcommand
//! - `from_matches()` extractors that pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls to bridge dispatch → command handlers
//! - Positional shifting for exec/trace (`-g` shifts the first positional to input)

use std::path::PathBuf;

use clap::ArgMatches;
use peglet_compiler::RuntimeMode;
use peglet_vm::{FuelLimits, Verbosity};

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;
use crate::commands::generate::GenArgs;
use crate::commands::trace::TraceArgs;

pub struct GenParams {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub no_comments: bool,
    pub entry: String,
    pub extern_runtime: Option<String>,
    pub output: Option<PathBuf>,
}

impl GenParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: m.get_one::<PathBuf>("grammar_path").cloned(),
            grammar_text: m.get_one::<String>("grammar_text").cloned(),
            no_comments: m.get_flag("no_comments"),
            entry: parse_entry(m),
            extern_runtime: m.get_one::<String>("extern_runtime").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

impl From<GenParams> for GenArgs {
    fn from(p: GenParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            grammar_text: p.grammar_text,
            comments: !p.no_comments,
            entry: p.entry,
            runtime: match p.extern_runtime {
                Some(path) => RuntimeMode::Extern(path),
                None => RuntimeMode::Embedded,
            },
            output: p.output,
        }
    }
}

pub struct CheckParams {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub entry: String,
    pub color: ColorChoice,
    // Note: input and runtime flags are parsed but not extracted
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: m.get_one::<PathBuf>("grammar_path").cloned(),
            grammar_text: m.get_one::<String>("grammar_text").cloned(),
            entry: parse_entry(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            grammar_text: p.grammar_text,
            entry: p.entry,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: m.get_one::<PathBuf>("grammar_path").cloned(),
            grammar_text: m.get_one::<String>("grammar_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            grammar_text: p.grammar_text,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExecParams {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub compact: bool,
    pub fuel: u32,
    pub recursion_limit: u32,
    pub color: ColorChoice,
    // Note: verbose, no_result are parsed but not extracted (trace flags)
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let grammar_text = m.get_one::<String>("grammar_text").cloned();
        let (grammar_path, input_path) = shift_positional_to_input(
            grammar_text.is_some(),
            m.get_one::<PathBuf>("grammar_path").cloned(),
            m.get_one::<PathBuf>("input_path").cloned(),
        );

        Self {
            grammar_path,
            grammar_text,
            input_path,
            input_text: m.get_one::<String>("input_text").cloned(),
            compact: m.get_flag("compact"),
            fuel: parse_fuel(m),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        // Pretty by default when stdout is a TTY, unless --compact is passed
        let pretty = !p.compact && std::io::IsTerminal::is_terminal(&std::io::stdout());

        Self {
            grammar_path: p.grammar_path,
            grammar_text: p.grammar_text,
            input_path: p.input_path,
            input_text: p.input_text,
            pretty,
            limits: FuelLimits::new()
                .exec_fuel(p.fuel)
                .recursion_limit(p.recursion_limit),
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub verbose: u8,
    pub no_result: bool,
    pub fuel: u32,
    pub recursion_limit: u32,
    pub color: ColorChoice,
    // Note: compact is parsed but not extracted (exec flag)
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let grammar_text = m.get_one::<String>("grammar_text").cloned();
        let (grammar_path, input_path) = shift_positional_to_input(
            grammar_text.is_some(),
            m.get_one::<PathBuf>("grammar_path").cloned(),
            m.get_one::<PathBuf>("input_path").cloned(),
        );

        Self {
            grammar_path,
            grammar_text,
            input_path,
            input_text: m.get_one::<String>("input_text").cloned(),
            verbose: m.get_count("verbose"),
            no_result: m.get_flag("no_result"),
            fuel: parse_fuel(m),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            grammar_path: p.grammar_path,
            grammar_text: p.grammar_text,
            input_path: p.input_path,
            input_text: p.input_text,
            verbosity,
            no_result: p.no_result,
            limits: FuelLimits::new()
                .exec_fuel(p.fuel)
                .recursion_limit(p.recursion_limit),
            color: p.color.should_colorize(),
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_entry(m: &ArgMatches) -> String {
    m.get_one::<String>("entry")
        .cloned()
        .unwrap_or_else(|| "parse".to_string())
}

fn parse_fuel(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("fuel")
        .copied()
        .unwrap_or_else(|| FuelLimits::default().get_exec_fuel())
}

fn parse_recursion_limit(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("recursion_limit")
        .copied()
        .unwrap_or_else(|| FuelLimits::default().get_recursion_limit())
}

/// When -g is used with a single positional arg, shift it from grammar to input.
/// This enables: `peglet exec -g '{...}' input.txt`
fn shift_positional_to_input(
    has_grammar_text: bool,
    grammar_path: Option<PathBuf>,
    input_path: Option<PathBuf>,
) -> (Option<PathBuf>, Option<PathBuf>) {
    if has_grammar_text && grammar_path.is_some() && input_path.is_none() {
        (None, grammar_path)
    } else {
        (grammar_path, input_path)
    }
}
