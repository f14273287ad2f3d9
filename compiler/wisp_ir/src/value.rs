//! Literal values recorded into the execution scope.
//!
//! A value keeps the literal's text form alongside its kind tag. The
//! text is the canonical representation: the evaluator re-materializes
//! numbers from it, and results print as it.

use std::fmt;

use crate::token::{Token, TokenKind};

/// The kind of a recorded value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    Int,
    Float,
    Str,
}

impl ValueKind {
    /// Human-readable type name for error messages.
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Str => "str",
        }
    }
}

/// A literal value: raw text plus kind tag.
///
/// Created once when a literal token is recorded; never mutated.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Value {
    /// Canonical text form of the value.
    pub raw: Box<str>,
    pub kind: ValueKind,
}

impl Value {
    #[inline]
    pub fn new(raw: impl Into<Box<str>>, kind: ValueKind) -> Self {
        Value {
            raw: raw.into(),
            kind,
        }
    }

    /// Integer value from a number.
    pub fn int(n: i64) -> Self {
        Value::new(n.to_string(), ValueKind::Int)
    }

    /// Float value from a number.
    pub fn float(x: f64) -> Self {
        Value::new(x.to_string(), ValueKind::Float)
    }

    /// String value from text.
    pub fn str(s: impl Into<Box<str>>) -> Self {
        Value::new(s, ValueKind::Str)
    }

    /// Build a value from a literal token.
    ///
    /// Returns `None` for operator tokens, which carry no value.
    pub fn from_token(token: &Token) -> Option<Self> {
        let kind = match token.kind {
            TokenKind::Int => ValueKind::Int,
            TokenKind::Float => ValueKind::Float,
            TokenKind::Str => ValueKind::Str,
            TokenKind::Op(_) => return None,
        };
        Some(Value::new(token.raw.clone(), kind))
    }

    /// Human-readable type name for error messages.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.kind.name()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind, self.raw)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// Size assertions to prevent accidental regressions
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Value, ValueKind};
    // Value: Box<str> (16) + ValueKind (1) + padding = 24 bytes
    crate::static_assert_size!(Value, 24);
    crate::static_assert_size!(ValueKind, 1);
}
