use peglet_core::grammar::build::*;
use peglet_core::{Colors, SuffixOp};

use super::dump::render;

#[test]
fn render_plain() {
    let g = grammar(vec![
        rule(
            "List",
            vec![seq(vec![
                labeled("first", el(call("Item"))),
                quant(group(vec![seq(vec![el(lit(",")), el(call("Item"))])]), SuffixOp::ZeroOrMore),
            ])],
        ),
        rule("Item", vec![seq(vec![quant(class(&[('a', 'z')]), SuffixOp::OneOrMore)])]),
    ]);

    insta::assert_snapshot!(render(&g, Colors::OFF), @r"
    List <- first:Item (',' Item)*
    Item <- [a-z]+
    ");
}

#[test]
fn render_grammar_code() {
    let g = grammar(vec![rule("A", vec![seq(vec![el(any())])])]).with_code("fn helper() {}");

    insta::assert_snapshot!(render(&g, Colors::OFF), @r"
    A <- .

    {fn helper() {}}
    ");
}

#[test]
fn render_colored_rule_names() {
    let g = grammar(vec![rule("A", vec![seq(vec![el(any())])])]);

    assert_eq!(
        render(&g, Colors::ON),
        "\x1b[34mA\x1b[0m \x1b[2m<-\x1b[0m .\n"
    );
}
