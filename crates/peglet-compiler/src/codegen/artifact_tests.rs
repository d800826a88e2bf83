use peglet_core::{Grammar, PrimaryExpr, SuffixOp};

use super::{CompileError, Config, RuntimeMode, generate};
use crate::test_utils::*;

fn digits() -> Grammar {
    grammar(vec![rule(
        "Digits",
        vec![seq(vec![quant(class(&[('0', '9')]), SuffixOp::OneOrMore)])],
    )])
}

#[test]
fn extern_runtime_artifact() {
    let config = quiet().runtime(RuntimeMode::Extern("peglet_runtime".into()));

    let out = generate(&digits(), &config).unwrap();

    insta::assert_snapshot!(out, @r"
    // Code generated by peglet. DO NOT EDIT.

    use peglet_runtime::*;

    /// Match rule `Digits` at the beginning of `src`.
    pub fn parse(src: &[char]) -> PegResult {
        let mut __p = Parser::new(src);
        rule_Digits(&mut __p)
    }

    /// [`parse`] over the code points of `src`.
    pub fn parse_str(src: &str) -> PegResult {
        let src: Vec<char> = src.chars().collect();
        parse(&src)
    }

    #[allow(non_snake_case)]
    fn rule_Digits(__p: &mut Parser<'_>) -> PegResult {
        __p.try_one_or_more(|__p| __p.expect_class(true, &[('0', '9')]))
    }
    ");
}

#[test]
fn embedded_runtime_appears_once() {
    let out = generate(&digits(), &Config::new()).unwrap();

    assert!(out.starts_with("// Code generated by peglet. DO NOT EDIT.\n"));
    assert!(out.contains("#[allow(dead_code)]\nmod __runtime {\n"));
    assert_eq!(out.matches(peglet_runtime::SOURCE).count(), 1);
    assert!(out.contains("use self::__runtime::*;"));
    assert!(out.contains("// Rule: Digits <- [0-9]+\n"));
    assert!(out.ends_with("}\n"));
}

#[test]
fn entry_point_targets_first_rule() {
    let g = grammar(vec![
        rule("Program", vec![seq(vec![el(PrimaryExpr::rule("Stmt"))])]),
        rule("Stmt", vec![seq(vec![el(lit(";"))])]),
    ]);

    let out = generate(&g, &quiet().entry_name("parse_program")).unwrap();

    assert!(out.contains("pub fn parse_program(src: &[char]) -> PegResult {"));
    assert!(out.contains("    rule_Program(&mut __p)\n"));
    assert!(out.contains("pub fn parse_program_str(src: &str) -> PegResult {"));
    assert!(out.find("fn rule_Program").unwrap() < out.find("fn rule_Stmt").unwrap());
}

#[test]
fn sections_in_order() {
    let g = grammar(vec![
        rule(
            "Sum",
            vec![
                seq(vec![
                    labeled("a", el(PrimaryExpr::rule("Num"))),
                    el(lit("+")),
                    labeled("b", el(PrimaryExpr::rule("Num"))),
                ])
                .with_code("    add(a, b)"),
            ],
        ),
        rule(
            "Num",
            vec![seq(vec![quant(class(&[('0', '9')]), SuffixOp::OneOrMore)]).with_code("    result")],
        ),
    ])
    .with_code("fn add(a: Value, b: Value) -> Value {\n    Value::List(vec![a, b])\n}");

    let out = generate(&g, &Config::new()).unwrap();

    let positions: Vec<usize> = [
        "mod __runtime",
        "pub fn parse(",
        "fn rule_Sum(",
        "fn rule_Num(",
        "// Action in Sum: a:Num '+' b:Num\n",
        "fn __action_0(a: Value, b: Value) -> Value {",
        "// Action in Num: [0-9]+\n",
        "fn __action_1(result: Value) -> Value {",
        "fn add(a: Value, b: Value) -> Value {",
    ]
    .iter()
    .map(|needle| out.find(needle).unwrap_or_else(|| panic!("missing {needle:?}")))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    assert!(out.ends_with("    Value::List(vec![a, b])\n}\n"));
}

#[test]
fn output_is_deterministic() {
    let config = Config::new();

    assert_eq!(
        generate(&digits(), &config).unwrap(),
        generate(&digits(), &config).unwrap()
    );
}

#[test]
fn invalid_grammar_emits_nothing() {
    let g = grammar(vec![rule("A", vec![seq(vec![el(PrimaryExpr::rule("B"))])])]);

    assert_eq!(
        generate(&g, &Config::new()),
        Err(CompileError::UndefinedRule {
            rule: "A".into(),
            name: "B".into()
        })
    );
}
