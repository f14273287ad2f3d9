//! Tests for whole-scope evaluation over hand-built scopes.

use pretty_assertions::assert_eq;
use wisp_ir::{ExecScope, LeafRef, Node, OpIx, Value};

use crate::errors::EvalError;
use crate::evaluate;

fn op(symbol: &str) -> OpIx {
    OpIx::resolve(symbol).unwrap()
}

#[test]
fn test_empty_scope() {
    assert_eq!(evaluate(&ExecScope::new()), Err(EvalError::EmptyExpression));
}

#[test]
fn test_bare_literal() {
    let mut scope = ExecScope::new();
    scope.push_value(Value::int(42));
    assert_eq!(evaluate(&scope).unwrap(), Value::int(42));
}

#[test]
fn test_first_value_wins_without_nodes() {
    let mut scope = ExecScope::new();
    scope.push_value(Value::int(1));
    scope.push_value(Value::int(2));
    assert_eq!(evaluate(&scope).unwrap(), Value::int(1));
}

#[test]
fn test_single_node() {
    let mut scope = ExecScope::new();
    let a = scope.push_value(Value::int(2));
    let b = scope.push_value(Value::int(3));
    scope.push_node(Node::new(op("+"), LeafRef::Value(a), LeafRef::Value(b)));
    assert_eq!(evaluate(&scope).unwrap(), Value::int(5));
}

#[test]
fn test_nested_nodes() {
    // (1 + 2) * 3, wired by hand.
    let mut scope = ExecScope::new();
    let one = scope.push_value(Value::int(1));
    let two = scope.push_value(Value::int(2));
    let three = scope.push_value(Value::int(3));
    let sum = scope.push_node(Node::new(op("+"), LeafRef::Value(one), LeafRef::Value(two)));
    scope.push_node(Node::new(op("*"), LeafRef::Node(sum), LeafRef::Value(three)));
    assert_eq!(evaluate(&scope).unwrap(), Value::int(9));
}

#[test]
fn test_last_node_is_the_root() {
    // Two independent sums; only the second is the result.
    let mut scope = ExecScope::new();
    let a = scope.push_value(Value::int(1));
    let b = scope.push_value(Value::int(2));
    let c = scope.push_value(Value::int(10));
    let d = scope.push_value(Value::int(20));
    scope.push_node(Node::new(op("+"), LeafRef::Value(a), LeafRef::Value(b)));
    scope.push_node(Node::new(op("+"), LeafRef::Value(c), LeafRef::Value(d)));
    assert_eq!(evaluate(&scope).unwrap(), Value::int(30));
}

#[test]
fn test_missing_operand_is_reported() {
    let mut scope = ExecScope::new();
    let a = scope.push_value(Value::int(1));
    scope.push_node(Node::new(op("+"), LeafRef::UNSET, LeafRef::Value(a)));
    let err = evaluate(&scope).unwrap_err();
    assert!(matches!(err, EvalError::MalformedScope { .. }));
    assert!(err.to_string().contains("missing an operand"));
}

#[test]
fn test_self_reference_is_rejected() {
    let mut scope = ExecScope::new();
    let a = scope.push_value(Value::int(1));
    scope.push_node(Node::new(
        op("+"),
        LeafRef::Node(wisp_ir::NodeId::new(0)),
        LeafRef::Value(a),
    ));
    let err = evaluate(&scope).unwrap_err();
    assert!(matches!(err, EvalError::MalformedScope { .. }));
    assert!(err.to_string().contains("non-earlier"));
}

#[test]
fn test_out_of_range_value_ref_is_rejected() {
    let mut scope = ExecScope::new();
    let a = scope.push_value(Value::int(1));
    scope.push_node(Node::new(
        op("+"),
        LeafRef::Value(a),
        LeafRef::Value(wisp_ir::ValueId::new(7)),
    ));
    let err = evaluate(&scope).unwrap_err();
    assert!(matches!(err, EvalError::MalformedScope { .. }));
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn test_deep_chain_does_not_overflow_the_stack() {
    // A left-leaning chain summing ten thousand ones. Each step recurses
    // into the previous node, so this exercises the stack growth path.
    let mut scope = ExecScope::new();
    let first = scope.push_value(Value::int(1));
    let second = scope.push_value(Value::int(1));
    let mut last = scope.push_node(Node::new(
        op("+"),
        LeafRef::Value(first),
        LeafRef::Value(second),
    ));
    for _ in 0..10_000 {
        let next = scope.push_value(Value::int(1));
        last = scope.push_node(Node::new(op("+"), LeafRef::Node(last), LeafRef::Value(next)));
    }
    assert_eq!(evaluate(&scope).unwrap(), Value::int(10_002));
}

#[test]
fn test_evaluation_is_repeatable() {
    let mut scope = ExecScope::new();
    let a = scope.push_value(Value::int(6));
    let b = scope.push_value(Value::int(7));
    scope.push_node(Node::new(op("*"), LeafRef::Value(a), LeafRef::Value(b)));
    let first = evaluate(&scope);
    let second = evaluate(&scope);
    assert_eq!(first, second);
    assert_eq!(first.unwrap(), Value::int(42));
}
