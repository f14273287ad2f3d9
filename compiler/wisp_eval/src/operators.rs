//! Binary operator implementations for the evaluator.
//!
//! Direct match-based dispatch over the fixed kind set. The operator
//! table is small and closed, so matching on the symbol keeps every
//! combination visible and exhaustively checked.
//!
//! # Numeric promotion
//!
//! Two int operands stay in checked 64-bit integer arithmetic. If either
//! side is a float, both are promoted to floats and the operation uses
//! IEEE semantics, where division by zero produces an infinity rather
//! than an error. The remainder operator is integer-only. Strings do not
//! participate in arithmetic at all.

use wisp_ir::{OpIx, Value, ValueKind};

use crate::errors::{EvalError, EvalResult};

/// Checked arithmetic where the only failure is overflow.
#[inline]
fn checked_arith(result: Option<i64>, operation: &'static str) -> EvalResult {
    result
        .map(Value::int)
        .ok_or(EvalError::IntegerOverflow { operation })
}

/// Checked division or remainder with a zero guard.
///
/// The overflow case is real: `i64::MIN / -1` does not fit.
#[inline]
fn checked_div(
    divisor: i64,
    op: impl FnOnce() -> Option<i64>,
    operation: &'static str,
) -> EvalResult {
    if divisor == 0 {
        Err(EvalError::DivisionByZero)
    } else {
        op().map(Value::int)
            .ok_or(EvalError::IntegerOverflow { operation })
    }
}

/// Evaluate `left op right`.
///
/// # Errors
///
/// Returns [`EvalError::UnsupportedOperand`] for combinations outside
/// the numeric rules, [`EvalError::DivisionByZero`] and
/// [`EvalError::IntegerOverflow`] from integer arithmetic, and
/// [`EvalError::MalformedScope`] when `op` is not an evaluable table
/// entry or a numeric value fails to re-parse from its raw text.
pub fn eval_binary(left: &Value, right: &Value, op: OpIx) -> EvalResult {
    let Some(entry) = op.lookup() else {
        return Err(EvalError::malformed(format!(
            "node holds unregistered operator index {}",
            op.raw()
        )));
    };
    if entry.is_group() {
        return Err(EvalError::malformed(format!(
            "group marker `{}` in the node table",
            entry.symbol
        )));
    }
    match (left.kind, right.kind) {
        (ValueKind::Int, ValueKind::Int) => {
            eval_int_binary(parse_int(left)?, parse_int(right)?, entry.symbol)
        }
        (ValueKind::Int | ValueKind::Float, ValueKind::Int | ValueKind::Float) => {
            if entry.symbol == "%" {
                return Err(EvalError::unsupported(
                    "%",
                    left.type_name(),
                    right.type_name(),
                ));
            }
            eval_float_binary(parse_float(left)?, parse_float(right)?, entry.symbol)
        }
        _ => Err(EvalError::unsupported(
            entry.symbol,
            left.type_name(),
            right.type_name(),
        )),
    }
}

/// Binary operations on two integers, all through checked arithmetic.
fn eval_int_binary(a: i64, b: i64, symbol: &'static str) -> EvalResult {
    match symbol {
        "+" => checked_arith(a.checked_add(b), "addition"),
        "-" => checked_arith(a.checked_sub(b), "subtraction"),
        "*" => checked_arith(a.checked_mul(b), "multiplication"),
        "/" => checked_div(b, || a.checked_div(b), "division"),
        "%" => checked_div(b, || a.checked_rem(b), "remainder"),
        _ => Err(EvalError::unsupported(symbol, "int", "int")),
    }
}

/// Binary operations with at least one float operand, after promotion.
fn eval_float_binary(a: f64, b: f64, symbol: &'static str) -> EvalResult {
    match symbol {
        "+" => Ok(Value::float(a + b)),
        "-" => Ok(Value::float(a - b)),
        "*" => Ok(Value::float(a * b)),
        "/" => Ok(Value::float(a / b)),
        _ => Err(EvalError::unsupported(symbol, "float", "float")),
    }
}

/// Re-materialize an integer from its raw text.
///
/// The lexer only admits parseable integer literals, so a failure here
/// means the value table was built by hand or corrupted.
fn parse_int(value: &Value) -> Result<i64, EvalError> {
    value.raw.parse().map_err(|_| {
        EvalError::malformed(format!("int value `{}` does not parse", value.raw))
    })
}

/// Re-materialize a float from its raw text. Int raw text parses too,
/// which is what promotion relies on.
fn parse_float(value: &Value) -> Result<f64, EvalError> {
    value.raw.parse().map_err(|_| {
        EvalError::malformed(format!("float value `{}` does not parse", value.raw))
    })
}
