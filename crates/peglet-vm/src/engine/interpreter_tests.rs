use peglet_core::grammar::build::*;
use peglet_core::{Grammar, SuffixOp};
use peglet_runtime::{NoMatch, Value};

use crate::engine::{
    ActionCall, Captures, FuelLimits, Interpreter, NoopTracer, Outcome, RuntimeError,
};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn run(grammar: &Grammar, input: &str) -> Outcome {
    Interpreter::builder(grammar)
        .build()
        .run(&chars(input))
        .unwrap()
}

fn leaves(items: &[&str]) -> Value {
    Value::List(items.iter().map(|s| Value::leaf(*s)).collect())
}

/// Digits <- [0-9]+
fn digits() -> Grammar {
    grammar(vec![rule(
        "Digits",
        vec![seq(vec![quant(class(&[('0', '9')]), SuffixOp::OneOrMore)])],
    )])
}

// --- Scenarios ---

#[test]
fn digits_full_input() {
    let out = run(&digits(), "123");

    assert_eq!(out.result, Ok(leaves(&["1", "2", "3"])));
    assert_eq!(out.end, 3);
    assert_eq!(out.value().map(Value::flatten).as_deref(), Some("123"));
}

#[test]
fn digits_stop_before_letter() {
    let out = run(&digits(), "12a");

    assert!(out.is_match());
    assert_eq!(out.end, 2);
    assert_eq!(out.value().unwrap().flatten(), "12");
}

#[test]
fn digits_fail_on_leading_letter() {
    let out = run(&digits(), "a12");

    assert_eq!(out.result, Err(NoMatch));
    assert_eq!(out.end, 0);
    assert!(out.value().is_none());
}

#[test]
fn optional_miss_is_empty() {
    // Opt <- 'x'?
    let g = grammar(vec![rule(
        "Opt",
        vec![seq(vec![quant(lit("x"), SuffixOp::Optional)])],
    )]);
    let out = run(&g, "y");

    assert_eq!(out.result, Ok(Value::None));
    assert_eq!(out.end, 0);
}

#[test]
fn lookahead_then_match_binds_second_only() {
    // Look <- &'x' 'x'
    let g = grammar(vec![rule("Look", vec![seq(vec![and(lit("x")), el(lit("x"))])])]);
    let out = run(&g, "x");

    assert_eq!(out.result, Ok(Value::leaf("x")));
    assert_eq!(out.end, 1);
}

// --- Choice and sequence ---

#[test]
fn choice_takes_first_success() {
    // A <- 'a' / 'ab'
    let g = grammar(vec![rule("A", vec![seq(vec![el(lit("a"))]), seq(vec![el(lit("ab"))])])]);
    let out = run(&g, "ab");

    assert_eq!(out.result, Ok(Value::leaf("a")));
    assert_eq!(out.end, 1);
}

#[test]
fn choice_failure_restores_cursor() {
    // A <- 'a' 'b' / 'a' 'c'
    let g = grammar(vec![rule(
        "A",
        vec![
            seq(vec![el(lit("a")), el(lit("b"))]),
            seq(vec![el(lit("a")), el(lit("c"))]),
        ],
    )]);
    let out = run(&g, "ad");

    assert_eq!(out.result, Err(NoMatch));
    assert_eq!(out.end, 0);
}

#[test]
fn sequence_is_atomic() {
    // S <- 'a' 'b' 'c' / 'a'
    let g = grammar(vec![rule(
        "S",
        vec![
            seq(vec![el(lit("a")), el(lit("b")), el(lit("c"))]),
            seq(vec![el(lit("a"))]),
        ],
    )]);
    let out = run(&g, "abx");

    assert_eq!(out.result, Ok(Value::leaf("a")));
    assert_eq!(out.end, 1);
}

#[test]
fn sequence_without_captures_yields_empty_list() {
    // E <- !'x'
    let g = grammar(vec![rule("E", vec![seq(vec![not(lit("x"))])])]);
    let out = run(&g, "");

    assert_eq!(out.result, Ok(Value::List(vec![])));
}

#[test]
fn not_is_dual_of_match() {
    // N <- !'x' .
    let g = grammar(vec![rule("N", vec![seq(vec![not(lit("x")), el(any())])])]);

    let out = run(&g, "y");
    assert_eq!(out.result, Ok(Value::leaf("y")));
    assert_eq!(out.end, 1);

    let out = run(&g, "x");
    assert_eq!(out.result, Err(NoMatch));
    assert_eq!(out.end, 0);
}

#[test]
fn lookahead_over_group_and_rule_consumes_nothing() {
    // A <- &('a' 'b') &B 'a'
    // B <- 'ab'
    let g = grammar(vec![
        rule(
            "A",
            vec![seq(vec![
                and(group(vec![seq(vec![el(lit("a")), el(lit("b"))])])),
                and(call("B")),
                el(lit("a")),
            ])],
        ),
        rule("B", vec![seq(vec![el(lit("ab"))])]),
    ]);
    let out = run(&g, "ab");

    assert_eq!(out.result, Ok(Value::leaf("a")));
    assert_eq!(out.end, 1);
}

#[test]
fn not_over_group_rejects_the_whole_sequence() {
    // N <- !('a' 'b') .
    let g = grammar(vec![rule(
        "N",
        vec![seq(vec![
            not(group(vec![seq(vec![el(lit("a")), el(lit("b"))])])),
            el(any()),
        ])],
    )]);

    let out = run(&g, "ab");
    assert_eq!(out.result, Err(NoMatch));
    assert_eq!(out.end, 0);

    let out = run(&g, "ac");
    assert_eq!(out.result, Ok(Value::leaf("a")));
    assert_eq!(out.end, 1);
}

#[test]
fn group_repetition_collects_alternatives() {
    // G <- ('a' / 'b')+
    let g = grammar(vec![rule(
        "G",
        vec![seq(vec![quant(
            group(vec![seq(vec![el(lit("a"))]), seq(vec![el(lit("b"))])]),
            SuffixOp::OneOrMore,
        )])],
    )]);
    let out = run(&g, "abbac");

    assert_eq!(out.result, Ok(leaves(&["a", "b", "b", "a"])));
    assert_eq!(out.end, 4);
}

#[test]
fn repetition_of_zero_width_group_terminates() {
    // Z <- ('x'?)*
    let g = grammar(vec![rule(
        "Z",
        vec![seq(vec![quant(
            group(vec![seq(vec![quant(lit("x"), SuffixOp::Optional)])]),
            SuffixOp::ZeroOrMore,
        )])],
    )]);
    let out = run(&g, "y");

    assert_eq!(out.result, Ok(Value::List(vec![Value::None])));
    assert_eq!(out.end, 0);
}

#[test]
fn rule_references_nest_results() {
    // Pair <- Item ',' Item
    // Item <- [a-z]
    let g = grammar(vec![
        rule("Pair", vec![seq(vec![el(call("Item")), el(lit(",")), el(call("Item"))])]),
        rule("Item", vec![seq(vec![el(class(&[('a', 'z')]))])]),
    ]);
    let out = run(&g, "a,b");

    assert_eq!(out.result, Ok(leaves(&["a", ",", "b"])));
    assert_eq!(out.end, 3);
}

// --- Actions ---

/// Pair <- k:[a-z]+ '=' v:[0-9]+ { ... }
fn pair() -> Grammar {
    grammar(vec![rule(
        "Pair",
        vec![
            seq(vec![
                labeled("k", quant(class(&[('a', 'z')]), SuffixOp::OneOrMore)),
                el(lit("=")),
                labeled("v", quant(class(&[('0', '9')]), SuffixOp::OneOrMore)),
            ])
            .with_code("Value::leaf(flatten(&k))"),
        ],
    )])
}

#[test]
fn labeled_action_receives_named_captures() {
    let g = pair();
    let mut handler = |call: ActionCall<'_>| {
        assert_eq!(call.rule, "Pair");
        assert_eq!(call.code, "Value::leaf(flatten(&k))");
        assert_eq!(call.captures.len(), 2);
        let k = call.captures.get("k").unwrap().flatten();
        let v = call.captures.get("v").unwrap().flatten();
        Value::leaf(format!("{k}:{v}"))
    };

    let out = Interpreter::builder(&g)
        .build()
        .run_with(&chars("key=42"), &mut NoopTracer, &mut handler)
        .unwrap();

    assert_eq!(out.result, Ok(Value::leaf("key:42")));
    assert_eq!(out.end, 6);
}

#[test]
fn passthrough_ignores_action_code() {
    let out = run(&pair(), "ab=1");

    let expected = Value::List(vec![leaves(&["a", "b"]), leaves(&["1"])]);
    assert_eq!(out.result, Ok(expected));
}

#[test]
fn unlabeled_action_receives_positional_captures() {
    // P <- 'a' &'b' 'b' { ... }
    let g = grammar(vec![rule(
        "P",
        vec![seq(vec![el(lit("a")), and(lit("b")), el(lit("b"))]).with_code("result[0]")],
    )]);
    let mut captured = None;
    let mut handler = |call: ActionCall<'_>| {
        captured = Some(call.captures.clone().into_value());
        assert_eq!(call.captures.get("a"), None);
        Value::leaf("done")
    };

    let out = Interpreter::builder(&g)
        .build()
        .run_with(&chars("ab"), &mut NoopTracer, &mut handler)
        .unwrap();

    assert_eq!(out.result, Ok(Value::leaf("done")));
    assert_eq!(captured, Some(leaves(&["a", "b"])));
}

#[test]
fn actions_run_only_for_matching_alternatives() {
    // A <- 'a' {one} / 'b' {two}
    let g = grammar(vec![rule(
        "A",
        vec![
            seq(vec![el(lit("a"))]).with_code("one"),
            seq(vec![el(lit("b"))]).with_code("two"),
        ],
    )]);
    let mut seen = Vec::new();
    let mut handler = |call: ActionCall<'_>| {
        seen.push(call.code.to_string());
        Value::None
    };

    Interpreter::builder(&g)
        .build()
        .run_with(&chars("b"), &mut NoopTracer, &mut handler)
        .unwrap();

    assert_eq!(seen, ["two"]);
}

#[test]
fn action_sees_innermost_rule() {
    // Outer <- Inner {outer}
    // Inner <- 'x' {inner}
    let g = grammar(vec![
        rule("Outer", vec![seq(vec![el(call("Inner"))]).with_code("outer")]),
        rule("Inner", vec![seq(vec![el(lit("x"))]).with_code("inner")]),
    ]);
    let mut seen = Vec::new();
    let mut handler = |call: ActionCall<'_>| {
        let rendered = match &call.captures {
            Captures::Positional(values) => format!("{}({})", call.rule, values.len()),
            Captures::Named(_) => unreachable!("no labels in this grammar"),
        };
        seen.push(rendered);
        Value::leaf(call.code)
    };

    let out = Interpreter::builder(&g)
        .build()
        .run_with(&chars("x"), &mut NoopTracer, &mut handler)
        .unwrap();

    assert_eq!(seen, ["Inner(1)", "Outer(1)"]);
    assert_eq!(out.result, Ok(Value::leaf("outer")));
}

// --- Limits and fatal errors ---

#[test]
fn exec_fuel_exhaustion_is_fatal() {
    let g = digits();
    let err = Interpreter::builder(&g)
        .exec_fuel(5)
        .build()
        .run(&chars("123456789"))
        .unwrap_err();

    assert_eq!(err, RuntimeError::ExecFuelExhausted(5));
    assert_eq!(err.to_string(), "runtime execution limit exceeded (5 steps)");
}

#[test]
fn left_recursion_hits_recursion_limit() {
    // A <- A 'x' / 'x'
    let g = grammar(vec![rule(
        "A",
        vec![seq(vec![el(call("A")), el(lit("x"))]), seq(vec![el(lit("x"))])],
    )]);
    let err = Interpreter::builder(&g)
        .limits(FuelLimits::new().recursion_limit(16))
        .build()
        .run(&chars("xxx"))
        .unwrap_err();

    assert_eq!(err, RuntimeError::RecursionLimitExceeded(16));
}

#[test]
fn undefined_rule_is_fatal_even_with_fallback() {
    // A <- Missing / 'x'
    let g = grammar(vec![rule(
        "A",
        vec![seq(vec![el(call("Missing"))]), seq(vec![el(lit("x"))])],
    )]);
    let err = Interpreter::builder(&g).build().run(&chars("x")).unwrap_err();

    assert_eq!(err, RuntimeError::UndefinedRule("Missing".to_string()));
}

#[test]
fn empty_grammar_is_rejected() {
    let g = Grammar::new(vec![]);
    let err = Interpreter::builder(&g).build().run(&[]).unwrap_err();

    assert_eq!(err, RuntimeError::EmptyGrammar);
}

#[test]
fn fuel_limits_defaults() {
    let limits = FuelLimits::default();

    assert_eq!(limits.get_exec_fuel(), 1_000_000);
    assert_eq!(limits.get_recursion_limit(), 1024);
}

#[test]
fn interpreter_is_reusable() {
    let g = digits();
    let interpreter = Interpreter::builder(&g).exec_fuel(100).build();

    assert!(interpreter.run(&chars("42")).unwrap().is_match());
    assert!(!interpreter.run(&chars("x")).unwrap().is_match());
    assert_eq!(interpreter.run(&chars("7")).unwrap().end, 1);
}
