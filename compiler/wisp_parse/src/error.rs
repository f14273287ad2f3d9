//! Error types for scope building.

use std::fmt;

use wisp_ir::Span;

/// What went wrong while building a scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// An operator token carried an index outside the operator table.
    ///
    /// The lexer only produces registered operators, so this surfaces
    /// hand-built token streams with stale indices.
    UnknownOperator {
        /// Raw text of the offending token.
        symbol: Box<str>,
    },
    /// A group close token with no matching open on the stack.
    UnmatchedGroupClose,
    /// A group open token that was never closed before the end of input.
    UnclosedGroup,
}

/// A scope-building failure, located in the source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// The failure category.
    pub kind: ParseErrorKind,
    /// Where in the source the failure was detected. For
    /// [`ParseErrorKind::UnclosedGroup`] this is the span of the open
    /// token left dangling, not the end of input.
    pub span: Span,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnknownOperator { symbol } => {
                write!(f, "unknown operator `{symbol}` at {}", self.span)
            }
            ParseErrorKind::UnmatchedGroupClose => {
                write!(f, "group close without a matching open at {}", self.span)
            }
            ParseErrorKind::UnclosedGroup => {
                write!(f, "group opened at {} is never closed", self.span)
            }
        }
    }
}

impl std::error::Error for ParseError {}
