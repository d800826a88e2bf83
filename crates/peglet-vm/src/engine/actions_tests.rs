use peglet_runtime::Value;

use super::{ActionCall, ActionHandler, Captures, Passthrough};

#[test]
fn named_captures_lookup() {
    let captures = Captures::Named(vec![("k", Value::leaf("key")), ("v", Value::None)]);

    assert_eq!(captures.len(), 2);
    assert_eq!(captures.get("k"), Some(&Value::leaf("key")));
    assert_eq!(captures.get("v"), Some(&Value::None));
    assert_eq!(captures.get("missing"), None);
}

#[test]
fn positional_captures_have_no_names() {
    let captures = Captures::Positional(vec![Value::leaf("a")]);

    assert_eq!(captures.get("a"), None);
    assert!(!captures.is_empty());
}

#[test]
fn into_value_matches_sequence_result_shape() {
    assert_eq!(Captures::Positional(vec![]).into_value(), Value::List(vec![]));
    assert_eq!(
        Captures::Positional(vec![Value::leaf("a")]).into_value(),
        Value::leaf("a")
    );
    assert_eq!(
        Captures::Named(vec![("x", Value::leaf("a")), ("y", Value::leaf("b"))]).into_value(),
        Value::List(vec![Value::leaf("a"), Value::leaf("b")])
    );
}

#[test]
fn passthrough_returns_captures() {
    let call = ActionCall {
        rule: "R",
        code: "ignored",
        captures: Captures::Positional(vec![Value::leaf("a"), Value::leaf("b")]),
    };

    assert_eq!(
        Passthrough.call(call),
        Value::List(vec![Value::leaf("a"), Value::leaf("b")])
    );
}

#[test]
fn closures_are_handlers() {
    let mut calls = 0;
    let mut handler = |call: ActionCall<'_>| {
        calls += 1;
        Value::leaf(call.code)
    };
    let call = ActionCall {
        rule: "R",
        code: "body",
        captures: Captures::Positional(vec![]),
    };

    assert_eq!(ActionHandler::call(&mut handler, call), Value::leaf("body"));
    assert_eq!(calls, 1);
}
