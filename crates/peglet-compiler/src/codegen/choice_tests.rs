use peglet_core::{PrefixOp, PrefixedExpr, SuffixedExpr};

use super::{CompileCtx, Mode};
use crate::test_utils::*;

#[test]
fn alternatives_restore_cursor_between_attempts() {
    let config = quiet();
    let mut ctx = CompileCtx::new(&config);
    let body = choice(vec![
        seq(vec![el(group(vec![seq(vec![el(lit("a"))]), seq(vec![el(lit("b"))])]))]),
        seq(vec![el(lit("c"))]),
    ]);

    let out = ctx.compile_choice(&body, Mode::CONSUMING);

    insta::assert_snapshot!(out, @r#"
    '__choice0: {
        let __start = __p.pos();
        let __r = '__choice1: {
            let __start = __p.pos();
            let __r = __p.expect_literal(true, "a", 1);
            if __r.is_ok() {
                break '__choice1 __r;
            }
            __p.back_to(__start);
            let __r = __p.expect_literal(true, "b", 1);
            if __r.is_ok() {
                break '__choice1 __r;
            }
            __p.back_to(__start);
            Err(NoMatch)
        };
        if __r.is_ok() {
            break '__choice0 __r;
        }
        __p.back_to(__start);
        let __r = __p.expect_literal(true, "c", 1);
        if __r.is_ok() {
            break '__choice0 __r;
        }
        __p.back_to(__start);
        Err(NoMatch)
    }
    "#);
}

#[test]
fn single_alternative_needs_no_dispatch() {
    let config = quiet();
    let mut ctx = CompileCtx::new(&config);

    let out = ctx.compile_choice(&choice(vec![seq(vec![el(lit("a"))])]), Mode::CONSUMING);

    assert_eq!(out, r#"__p.expect_literal(true, "a", 1)"#);
}

#[test]
fn alternatives_keep_declared_order() {
    let config = quiet();
    let mut ctx = CompileCtx::new(&config);
    let body = choice(vec![
        seq(vec![el(lit("ab"))]),
        seq(vec![el(lit("a"))]),
    ]);

    let out = ctx.compile_choice(&body, Mode::CONSUMING);

    let longer = out.find(r#""ab""#).unwrap();
    let shorter = out.find(r#""a", 1"#).unwrap();
    assert!(longer < shorter);
}

#[test]
fn group_under_lookahead_advances_between_elements() {
    let config = quiet();
    let mut ctx = CompileCtx::new(&config);
    let element = PrefixedExpr {
        prefix: Some(PrefixOp::And),
        expr: SuffixedExpr::new(group(vec![
            seq(vec![el(lit("a")), el(lit("b"))]),
            seq(vec![el(lit("c"))]),
        ])),
    };

    let out = ctx.compile_prefixed(&element, Mode::CONSUMING);

    assert!(out.starts_with("__p.lookahead(|__p| '__choice0: {"));
    assert!(!out.contains("(false"));
    assert_eq!(out.matches("(true").count(), 3);
}
