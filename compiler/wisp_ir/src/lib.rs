//! Wisp IR - Intermediate Representation Types
//!
//! This crate contains the core data structures for the Wisp compiler:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - The operator table (symbols, precedence, grouping)
//! - Values, nodes, and the flattened [`ExecScope`] arena
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: no `Box<Node>`, edges are `ValueId`/`NodeId`
//!   indices into contiguous arrays
//! - **Immutable Once Built**: a finished scope is never mutated; the
//!   evaluator only reads it
//!
//! The `cache` feature adds serde derives so a finished scope can be
//! persisted and reloaded.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod ids;
mod node;
pub mod ops;
mod scope;
mod span;
mod token;
mod value;

pub use ids::{NodeId, ValueId};
pub use node::{LeafRef, Node};
pub use ops::{Group, OpIx, Operator};
pub use scope::ExecScope;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
pub use value::{Value, ValueKind};
