//! Arena ids for the flattened execution scope.
//!
//! Values and nodes live in flat arrays inside [`ExecScope`](crate::ExecScope);
//! these ids are the only way to refer to them. `u32::MAX` is reserved as the
//! invalid sentinel, standing in for an operand reference that was never
//! resolved during scope building.

use std::fmt;

/// Index into the value arena.
///
/// # Design
/// - Memory: 4 bytes (vs 8 bytes for a pointer)
/// - Equality: O(1) integer compare
/// - Cache locality: indices into a contiguous array
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ValueId(u32);

impl ValueId {
    /// Invalid value ID (sentinel).
    pub const INVALID: ValueId = ValueId(u32::MAX);

    /// Create a new `ValueId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ValueId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a valid ID.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "ValueId({})", self.0)
        } else {
            write!(f, "ValueId::INVALID")
        }
    }
}

impl Default for ValueId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Index into the node arena.
///
/// Same representation as [`ValueId`]; the two are distinct types so an
/// index can never be used against the wrong array.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Invalid node ID (sentinel).
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// Create a new `NodeId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a valid ID.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "NodeId({})", self.0)
        } else {
            write!(f, "NodeId::INVALID")
        }
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::INVALID
    }
}

// Size assertions to prevent accidental regressions
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{NodeId, ValueId};
    crate::static_assert_size!(ValueId, 4);
    crate::static_assert_size!(NodeId, 4);
}
