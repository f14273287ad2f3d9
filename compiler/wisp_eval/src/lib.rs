//! Scope evaluation for the Wisp compiler.
//!
//! Reduces an [`ExecScope`] to a single [`Value`] by walking the node
//! table from the root. Evaluation leans on the builder's structural
//! guarantee that node edges only point backwards: recursion always
//! terminates, and a scope that breaks the guarantee reports
//! [`EvalError::MalformedScope`] instead of looping or panicking.
//!
//! Evaluation is pure. The scope is read-only, results are fresh
//! values, and evaluating the same scope twice gives the same answer,
//! so scopes can be shared freely across threads.

mod errors;
mod operators;
mod stack;

pub use errors::{EvalError, EvalResult};
pub use operators::eval_binary;

use stack::ensure_sufficient_stack;
use wisp_ir::{ExecScope, LeafRef, NodeId, Value};

/// Evaluate a scope to a single value.
///
/// A scope without nodes is a bare literal expression and evaluates to
/// its first value.
///
/// # Errors
///
/// Returns [`EvalError::EmptyExpression`] for a scope with no values
/// and no nodes, [`EvalError::MalformedScope`] for structural breaches,
/// and the arithmetic errors from [`eval_binary`].
pub fn evaluate(scope: &ExecScope) -> Result<Value, EvalError> {
    match scope.root() {
        Some(root) => eval_node(scope, root),
        None => scope
            .values()
            .first()
            .cloned()
            .ok_or(EvalError::EmptyExpression),
    }
}

fn eval_node(scope: &ExecScope, id: NodeId) -> EvalResult {
    let Some(node) = scope.get_node(id) else {
        return Err(EvalError::malformed(format!(
            "node reference n{} out of range",
            id.raw()
        )));
    };
    let left = eval_leaf(scope, id, node.left)?;
    let right = eval_leaf(scope, id, node.right)?;
    eval_binary(&left, &right, node.op)
}

/// Resolve one operand edge of a node.
///
/// Node edges must point strictly backwards; an edge at or past the
/// parent could otherwise recurse forever.
fn eval_leaf(scope: &ExecScope, parent: NodeId, leaf: LeafRef) -> EvalResult {
    if !leaf.is_valid() {
        return Err(EvalError::malformed("operator is missing an operand"));
    }
    match leaf {
        LeafRef::Value(id) => scope.get_value(id).cloned().ok_or_else(|| {
            EvalError::malformed(format!("value reference v{} out of range", id.raw()))
        }),
        LeafRef::Node(id) => {
            if id.index() >= parent.index() {
                return Err(EvalError::malformed(format!(
                    "node n{} references non-earlier node n{}",
                    parent.raw(),
                    id.raw()
                )));
            }
            ensure_sufficient_stack(|| eval_node(scope, id))
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
