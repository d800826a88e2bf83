//! Generates the parsers under test into `OUT_DIR`.
//!
//! Each grammar becomes `OUT_DIR/<name>.rs`, included as a module by
//! `src/lib.rs`. Grammars wrapped by `measured` start with a rule that pairs
//! the original start rule's value with the input it left unconsumed, which
//! is how tests see where the cursor stopped.

use std::path::Path;
use std::{env, fs};

use peglet_compiler::{Config, RuntimeMode, generate};
use peglet_core::grammar::build::*;
use peglet_core::{Grammar, PrimaryExpr, SuffixOp};

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");

    for (name, grammar, config) in grammars() {
        let source = generate(&grammar, &config)
            .unwrap_or_else(|err| panic!("failed to generate `{name}`: {err}"));
        let path = Path::new(&out_dir).join(format!("{name}.rs"));
        fs::write(&path, source)
            .unwrap_or_else(|err| panic!("failed to write {}: {err}", path.display()));
    }

    println!("cargo::rerun-if-changed=build.rs");
}

fn external() -> Config {
    Config::new().runtime(RuntimeMode::Extern("peglet_runtime".to_string()))
}

/// `Measured <- value:Start rest:Rest`, with `Rest <- .*` appended.
fn measured(g: Grammar) -> Grammar {
    let start = g.rules[0].name.clone();
    let wrapper = rule(
        "Measured",
        vec![
            seq(vec![labeled("value", el(call(&start))), labeled("rest", el(call("Rest")))])
                .with_code("Value::List(vec![value, Value::leaf(flatten(&rest))])"),
        ],
    );
    let rest = rule("Rest", vec![seq(vec![quant(any(), SuffixOp::ZeroOrMore)])]);

    let mut rules = vec![wrapper];
    rules.extend(g.rules);
    rules.push(rest);
    Grammar {
        rules,
        code: g.code,
    }
}

/// `('a' 'b')`
fn ab() -> PrimaryExpr {
    group(vec![seq(vec![el(lit("a")), el(lit("b"))])])
}

fn grammars() -> Vec<(&'static str, Grammar, Config)> {
    // Digits <- [0-9]+
    let digits = || {
        grammar(vec![rule(
            "Digits",
            vec![seq(vec![quant(class(&[('0', '9')]), SuffixOp::OneOrMore)])],
        )])
    };

    vec![
        ("digits", digits(), Config::new()),
        ("digits_measured", measured(digits()), Config::new()),
        (
            // Opt <- 'x'?
            "opt_measured",
            measured(grammar(vec![rule(
                "Opt",
                vec![seq(vec![quant(lit("x"), SuffixOp::Optional)])],
            )])),
            Config::new(),
        ),
        (
            // Look <- &'x' 'x'
            "look_measured",
            measured(grammar(vec![rule(
                "Look",
                vec![seq(vec![and(lit("x")), el(lit("x"))])],
            )])),
            external(),
        ),
        (
            // A <- &('a' 'b') 'a'
            "and_group_measured",
            measured(grammar(vec![rule(
                "A",
                vec![seq(vec![and(ab()), el(lit("a"))])],
            )])),
            external(),
        ),
        (
            // N <- !('a' 'b') .
            "not_group_measured",
            measured(grammar(vec![rule(
                "N",
                vec![seq(vec![not(ab()), el(any())])],
            )])),
            external(),
        ),
        (
            // C <- 'ab' 'c' / 'a' / 'ab'
            "choice_measured",
            measured(grammar(vec![rule(
                "C",
                vec![
                    seq(vec![el(lit("ab")), el(lit("c"))]),
                    seq(vec![el(lit("a"))]),
                    seq(vec![el(lit("ab"))]),
                ],
            )])),
            external(),
        ),
        (
            // S <- ('a' 'b' 'c')?
            "atomic_measured",
            measured(grammar(vec![rule(
                "S",
                vec![seq(vec![quant(
                    group(vec![seq(vec![el(lit("a")), el(lit("b")), el(lit("c"))])]),
                    SuffixOp::Optional,
                )])],
            )])),
            external(),
        ),
        (
            // R <- 'ab'+
            "repeat_measured",
            measured(grammar(vec![rule(
                "R",
                vec![seq(vec![quant(lit("ab"), SuffixOp::OneOrMore)])],
            )])),
            external(),
        ),
        (
            // Z <- ('x'?)*
            "zero_width_measured",
            measured(grammar(vec![rule(
                "Z",
                vec![seq(vec![quant(
                    group(vec![seq(vec![quant(lit("x"), SuffixOp::Optional)])]),
                    SuffixOp::ZeroOrMore,
                )])],
            )])),
            external(),
        ),
        (
            // L <- 'abc' / [^0-9]
            "terminals_measured",
            measured(grammar(vec![rule(
                "L",
                vec![seq(vec![el(lit("abc"))]), seq(vec![el(class_not(&[('0', '9')]))])],
            )])),
            external(),
        ),
        (
            // Parens <- '(' Parens? ')'
            "parens_measured",
            measured(grammar(vec![rule(
                "Parens",
                vec![seq(vec![
                    el(lit("(")),
                    quant(call("Parens"), SuffixOp::Optional),
                    el(lit(")")),
                ])],
            )])),
            Config::new(),
        ),
        (
            // Pair <- k:Word '=' v:Word { pair(&k, &v) }
            // Word <- [a-z]+
            "pairs",
            grammar(vec![
                rule(
                    "Pair",
                    vec![
                        seq(vec![
                            labeled("k", el(call("Word"))),
                            el(lit("=")),
                            labeled("v", el(call("Word"))),
                        ])
                        .with_code("pair(&k, &v)"),
                    ],
                ),
                rule("Word", vec![seq(vec![quant(class(&[('a', 'z')]), SuffixOp::OneOrMore)])]),
            ])
            .with_code(
                "fn pair(k: &Value, v: &Value) -> Value {\n    \
                 Value::leaf(format!(\"{}:{}\", flatten(k), flatten(v)))\n}",
            ),
            external().entry_name("parse_pair").comments(false),
        ),
        (
            // Sum <- [0-9] '+' [0-9] { ... }
            "sum",
            grammar(vec![rule(
                "Sum",
                vec![
                    seq(vec![el(class(&[('0', '9')])), el(lit("+")), el(class(&[('0', '9')]))])
                        .with_code(
                            "let [a, _, b] = result;\n\
                             Value::leaf((digit(&a) + digit(&b)).to_string())",
                        ),
                ],
            )])
            .with_code("fn digit(v: &Value) -> u32 {\n    flatten(v).parse().unwrap_or(0)\n}"),
            Config::new(),
        ),
        (
            // Len <- w:.+ { ... }
            "length",
            grammar(vec![rule(
                "Len",
                vec![
                    seq(vec![labeled("w", quant(any(), SuffixOp::OneOrMore))])
                        .with_code("Value::leaf(flatten_chars(&w).len().to_string())"),
                ],
            )]),
            external(),
        ),
    ]
}
