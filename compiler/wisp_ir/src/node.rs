//! Flat AST nodes and the tagged references that wire them together.

use std::fmt;

use crate::ids::{NodeId, ValueId};
use crate::ops::OpIx;

/// A tagged reference to either a recorded value or an earlier node.
///
/// This is the edge type of the flattened AST. The unset state is a
/// reference carrying an invalid id; scope building resolves operands
/// into set references, and an unset reference surviving into a
/// finished scope marks a malformed expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum LeafRef {
    /// Reference into the value arena.
    Value(ValueId),
    /// Reference into the node arena.
    Node(NodeId),
}

impl LeafRef {
    /// The unresolved sentinel.
    pub const UNSET: LeafRef = LeafRef::Value(ValueId::INVALID);

    /// Check that the reference carries a valid id.
    #[inline]
    pub const fn is_valid(self) -> bool {
        match self {
            LeafRef::Value(id) => id.is_valid(),
            LeafRef::Node(id) => id.is_valid(),
        }
    }
}

impl Default for LeafRef {
    fn default() -> Self {
        Self::UNSET
    }
}

impl fmt::Debug for LeafRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeafRef::Value(id) if id.is_valid() => write!(f, "v{}", id.raw()),
            LeafRef::Node(id) if id.is_valid() => write!(f, "n{}", id.raw()),
            _ => write!(f, "unset"),
        }
    }
}

/// One operation in the flattened AST.
///
/// Appended in creation order; a node's position in the arena is its
/// identity, and later nodes may only reference earlier ones.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub op: OpIx,
    pub left: LeafRef,
    pub right: LeafRef,
}

impl Node {
    #[inline]
    pub const fn new(op: OpIx, left: LeafRef, right: LeafRef) -> Self {
        Node { op, left, right }
    }
}

// Size assertions to prevent accidental regressions
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{LeafRef, Node};
    // LeafRef: u32 payload + discriminant, padded to u32 alignment
    crate::static_assert_size!(LeafRef, 8);
    // Node: two LeafRefs (16) + OpIx (1) + padding = 20 bytes
    crate::static_assert_size!(Node, 20);
}
