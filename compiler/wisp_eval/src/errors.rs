//! Error types for scope evaluation.

use std::fmt;

use wisp_ir::Value;

/// Result type for evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// What went wrong while evaluating a scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// The scope holds no values and no nodes.
    EmptyExpression,
    /// An operator was applied to operand types it does not support.
    UnsupportedOperand {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    /// The scope violates a structural invariant: an unset operand, a
    /// reference out of range, a forward edge, or a group marker in the
    /// node table.
    MalformedScope { detail: Box<str> },
    /// Integer division or remainder by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed 64 bits.
    IntegerOverflow { operation: &'static str },
}

impl EvalError {
    /// A malformed-scope error with the given detail text.
    pub fn malformed(detail: impl Into<Box<str>>) -> Self {
        EvalError::MalformedScope {
            detail: detail.into(),
        }
    }

    /// An unsupported-operand error for `op` between `left` and `right`.
    pub fn unsupported(op: &'static str, left: &'static str, right: &'static str) -> Self {
        EvalError::UnsupportedOperand { op, left, right }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::EmptyExpression => write!(f, "nothing to evaluate"),
            EvalError::UnsupportedOperand { op, left, right } => {
                write!(f, "`{op}` is not supported between {left} and {right}")
            }
            EvalError::MalformedScope { detail } => write!(f, "malformed scope: {detail}"),
            EvalError::DivisionByZero => write!(f, "division by zero"),
            EvalError::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
        }
    }
}

impl std::error::Error for EvalError {}
