use peglet_core::grammar::build::*;
use peglet_core::{Colors, Grammar, SuffixOp};
use peglet_runtime::Value;

use crate::engine::{ActionCall, Interpreter, Passthrough, PrintTracer, Tracer, Verbosity};

fn trace(grammar: &Grammar, input: &str, verbosity: Verbosity) -> String {
    let src: Vec<char> = input.chars().collect();
    let mut tracer = PrintTracer::new(verbosity, Colors::OFF);
    Interpreter::builder(grammar)
        .build()
        .run_with(&src, &mut tracer, &mut Passthrough)
        .unwrap();
    tracer.lines().join("\n")
}

/// Digits <- [0-9]+
fn digits() -> Grammar {
    grammar(vec![rule(
        "Digits",
        vec![seq(vec![quant(class(&[('0', '9')]), SuffixOp::OneOrMore)])],
    )])
}

#[test]
fn default_verbosity_shows_rules_only() {
    insta::assert_snapshot!(trace(&digits(), "12a", Verbosity::Default), @r"
    Digits @0
    ✓ Digits @2
    ");
}

#[test]
fn verbose_shows_matcher_attempts() {
    insta::assert_snapshot!(trace(&digits(), "12a", Verbosity::Verbose), @r"
    Digits @0
      ✓ [0-9] @0
      ✓ [0-9] @1
      ✗ [0-9] @2
    ✓ Digits @2
    ");
}

#[test]
fn very_verbose_shows_matched_text() {
    insta::assert_snapshot!(trace(&digits(), "7", Verbosity::VeryVerbose), @r"
    Digits @0
      ✓ [0-9] @0 7
      ✗ [0-9] @1
    ✓ Digits @1
    ");
}

#[test]
fn nested_rules_indent_and_backtrack() {
    // List <- Item ',' List / Item
    // Item <- 'a' / 'b'
    let g = grammar(vec![
        rule(
            "List",
            vec![
                seq(vec![el(call("Item")), el(lit(",")), el(call("List"))]),
                seq(vec![el(call("Item"))]),
            ],
        ),
        rule("Item", vec![seq(vec![el(lit("a"))]), seq(vec![el(lit("b"))])]),
    ]);

    insta::assert_snapshot!(trace(&g, "b", Verbosity::Default), @r"
    List @0
      Item @0
        ↺ @0
      ✓ Item @1
      ↺ @0
      Item @0
        ↺ @0
      ✓ Item @1
    ✓ List @1
    ");
}

#[test]
fn failed_rule_is_marked() {
    insta::assert_snapshot!(trace(&digits(), "x", Verbosity::Verbose), @r"
    Digits @0
      ✗ [0-9] @0
      ↺ @0
    ✗ Digits @0
    ");
}

#[test]
fn action_calls_are_traced() {
    // Num <- d:[0-9] {…}
    let g = grammar(vec![rule(
        "Num",
        vec![seq(vec![labeled("d", el(class(&[('0', '9')])))]).with_code("d")],
    )]);
    let src: Vec<char> = "5".chars().collect();
    let mut tracer = PrintTracer::new(Verbosity::Default, Colors::OFF);
    let mut handler = |call: ActionCall<'_>| call.captures.into_value();

    let out = Interpreter::builder(&g)
        .build()
        .run_with(&src, &mut tracer, &mut handler)
        .unwrap();

    assert_eq!(out.result, Ok(Value::leaf("5")));
    insta::assert_snapshot!(tracer.lines().join("\n"), @r"
    Num @0
      ƒ Num @1
    ✓ Num @1
    ");
}

#[test]
fn colored_lines_carry_ansi_codes() {
    let mut tracer = PrintTracer::new(Verbosity::Default, Colors::ON);
    tracer.trace_enter_rule("Digits", 3);

    assert_eq!(tracer.lines(), ["\x1b[34mDigits\x1b[0m \x1b[2m@3\x1b[0m"]);
}
