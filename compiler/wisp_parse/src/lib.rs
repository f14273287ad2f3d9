//! Scope building for the Wisp compiler.
//!
//! This crate turns the flat token stream produced by `wisp_lexer` into
//! an executable [`ExecScope`]: every literal becomes a row in the value
//! table and every operator becomes a node wired to the operands it
//! consumes. Precedence is resolved with a single shunting-yard pass
//! over the tokens; no intermediate tree is ever allocated.
//!
//! The builder supports two node emission modes, selected via
//! [`EmitMode`]. [`EmitMode::Stacked`] treats emitted nodes as ordinary
//! operands and is the default. [`EmitMode::Chained`] reproduces the
//! historical linking behavior where short-handed operators reach back
//! to previously emitted nodes instead.

mod builder;
mod error;

pub use builder::{EmitMode, ScopeBuilder};
pub use error::{ParseError, ParseErrorKind};

use wisp_ir::{ExecScope, TokenList};

/// Builds an execution scope from `tokens` using the default emission
/// mode.
///
/// # Errors
///
/// Returns a [`ParseError`] if an operator token is not in the operator
/// table or if group tokens are unbalanced.
pub fn build_scope(tokens: &TokenList) -> Result<ExecScope, ParseError> {
    ScopeBuilder::new(tokens).build()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
