use pretty_assertions::assert_eq;
use wisp_ir::{ExecScope, NodeId, OpIx, Span, Token, TokenKind, TokenList};
use wisp_lexer::lex;

use crate::{build_scope, EmitMode, ParseError, ParseErrorKind, ScopeBuilder};

fn scope(source: &str) -> ExecScope {
    build_scope(&lex(source).unwrap()).unwrap()
}

fn scope_with(source: &str, mode: EmitMode) -> ExecScope {
    ScopeBuilder::new(&lex(source).unwrap())
        .emit_mode(mode)
        .build()
        .unwrap()
}

fn build_err(source: &str) -> ParseError {
    build_scope(&lex(source).unwrap()).unwrap_err()
}

/// Node table as `(op, left, right)` triples, using the compact debug
/// form of references ("v0", "n1", "unset").
fn shapes(scope: &ExecScope) -> Vec<(&'static str, String, String)> {
    scope
        .nodes()
        .iter()
        .map(|node| {
            (
                node.op.symbol(),
                format!("{:?}", node.left),
                format!("{:?}", node.right),
            )
        })
        .collect()
}

fn raws(scope: &ExecScope) -> Vec<&str> {
    scope.values().iter().map(|value| &*value.raw).collect()
}

fn triple(op: &'static str, left: &str, right: &str) -> (&'static str, String, String) {
    (op, left.to_owned(), right.to_owned())
}

#[test]
fn test_empty_input_builds_empty_scope() {
    let scope = scope("");
    assert!(scope.is_empty());
    assert_eq!(scope.root(), None);
}

#[test]
fn test_literals_only_scope_has_no_nodes() {
    let scope = scope("42");
    assert_eq!(raws(&scope), vec!["42"]);
    assert!(scope.nodes().is_empty());
    assert_eq!(scope.root(), None);
}

#[test]
fn test_values_recorded_in_source_order() {
    let scope = scope("(10 + 20) * 30 - 40");
    assert_eq!(raws(&scope), vec!["10", "20", "30", "40"]);
}

#[test]
fn test_single_addition() {
    let scope = scope("1 + 2");
    assert_eq!(shapes(&scope), vec![triple("+", "v0", "v1")]);
    assert_eq!(scope.root(), Some(NodeId::new(0)));
}

#[test]
fn test_higher_precedence_binds_tighter() {
    // `*` must hold out against the parked `+` and emit first.
    let scope = scope("1 + 2 * 3");
    assert_eq!(
        shapes(&scope),
        vec![triple("*", "v1", "v2"), triple("+", "v0", "n0")]
    );
}

#[test]
fn test_equal_precedence_groups_from_the_right() {
    // Equal precedence never flushes, so `8 - 2 + 1` is 8 - (2 + 1).
    let scope = scope("8 - 2 + 1");
    assert_eq!(
        shapes(&scope),
        vec![triple("+", "v1", "v2"), triple("-", "v0", "n0")]
    );
}

#[test]
fn test_division_chain_groups_from_the_right() {
    let scope = scope("100 / 10 / 2");
    assert_eq!(
        shapes(&scope),
        vec![triple("/", "v1", "v2"), triple("/", "v0", "n0")]
    );
}

#[test]
fn test_group_markers_never_reach_the_node_table() {
    let scope = scope("(1 + 2) * 3");
    for node in scope.nodes() {
        let symbol = node.op.symbol();
        assert!(symbol != "(" && symbol != ")");
    }
    assert_eq!(
        shapes(&scope),
        vec![triple("+", "v0", "v1"), triple("*", "n0", "v2")]
    );
}

#[test]
fn test_group_flushes_inner_operators_first() {
    let scope = scope("2 * (3 + 4)");
    assert_eq!(
        shapes(&scope),
        vec![triple("+", "v1", "v2"), triple("*", "v0", "n0")]
    );
}

#[test]
fn test_nested_groups_collapse() {
    let scope = scope("((1 + 2))");
    assert_eq!(shapes(&scope), vec![triple("+", "v0", "v1")]);
}

#[test]
fn test_group_overrides_precedence() {
    // Without the group `*` would take `2`; with it the sum emits first.
    let scope = scope("(1 + 2) * (3 + 4)");
    assert_eq!(
        shapes(&scope),
        vec![
            triple("+", "v0", "v1"),
            triple("+", "v2", "v3"),
            triple("*", "n0", "n1"),
        ]
    );
}

#[test]
fn test_chained_mode_reaches_back_for_missing_operands() {
    // The group's node is not restacked, so `*` comes up one short and
    // chains its right side to the previous node.
    let scope = scope_with("(1 + 2) * 3", EmitMode::Chained);
    assert_eq!(
        shapes(&scope),
        vec![triple("+", "v0", "v1"), triple("*", "v2", "n0")]
    );
}

#[test]
fn test_chained_mode_links_adjacent_groups_in_reverse() {
    let scope = scope_with("(1 + 2) * (3 + 4)", EmitMode::Chained);
    assert_eq!(
        shapes(&scope),
        vec![
            triple("+", "v0", "v1"),
            triple("+", "v2", "v3"),
            triple("*", "n1", "n0"),
        ]
    );
}

#[test]
fn test_chained_and_stacked_agree_on_simple_input() {
    let chained = scope_with("1 + 2 * 3", EmitMode::Chained);
    let stacked = scope_with("1 + 2 * 3", EmitMode::Stacked);
    assert_eq!(chained, stacked);
}

#[test]
fn test_lone_operator_emits_unset_operands() {
    let plus = Token::op("+").unwrap();
    for mode in [EmitMode::Stacked, EmitMode::Chained] {
        let tokens: TokenList = std::iter::once(plus.clone()).collect();
        let scope = ScopeBuilder::new(&tokens).emit_mode(mode).build().unwrap();
        assert_eq!(shapes(&scope), vec![triple("+", "unset", "unset")]);
    }
}

#[test]
fn test_missing_trailing_operand_stays_unset() {
    // Stacked mode pops the right side first, chained mode fills the
    // left side first. Either way the hole stays unset.
    let stacked = scope("1 +");
    assert_eq!(shapes(&stacked), vec![triple("+", "unset", "v0")]);
    let chained = scope_with("1 +", EmitMode::Chained);
    assert_eq!(shapes(&chained), vec![triple("+", "v0", "unset")]);
}

#[test]
fn test_unknown_operator_is_reported() {
    let bogus = Token::new(TokenKind::Op(OpIx::new(200)), "@", Span::new(0, 1));
    let tokens: TokenList = std::iter::once(bogus).collect();
    let err = build_scope(&tokens).unwrap_err();
    assert_eq!(
        err,
        ParseError::new(
            ParseErrorKind::UnknownOperator { symbol: "@".into() },
            Span::new(0, 1),
        )
    );
}

#[test]
fn test_unmatched_group_close_is_reported() {
    let err = build_err("1 + 2)");
    assert_eq!(err.kind, ParseErrorKind::UnmatchedGroupClose);
    assert_eq!(err.span, Span::new(5, 6));
}

#[test]
fn test_unclosed_group_reports_the_open_span() {
    let err = build_err("(1 + (2 * 3");
    assert_eq!(err.kind, ParseErrorKind::UnclosedGroup);
    // The innermost dangling open is flushed first.
    assert_eq!(err.span, Span::new(5, 6));
}

#[test]
fn test_error_display() {
    assert_eq!(
        build_err("1)").to_string(),
        "group close without a matching open at 1..2"
    );
    assert_eq!(
        build_err("(1").to_string(),
        "group opened at 0..1 is never closed"
    );
}
