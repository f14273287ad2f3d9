//! The operator table.
//!
//! A static, read-only mapping from operator symbol to precedence and
//! grouping behavior. Initialized at compile time; every registered
//! symbol maps to exactly one entry. Tokens and nodes refer to entries
//! by [`OpIx`] rather than by symbol text.
//!
//! # Precedence
//!
//! Higher number = tighter binding. The comparison rule used during
//! scope building is strict greater-than: a stacked operator is flushed
//! only when its precedence strictly exceeds the incoming operator's.
//! Equal-precedence operators therefore never flush each other, and an
//! equal-precedence chain groups from the right (`8 - 2 + 1` evaluates
//! as `8 - (2 + 1)`).

/// Grouping behavior of a table entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Group {
    /// Ordinary binary operator.
    None,
    /// Opens a group; pushed unconditionally, never flushed by precedence.
    Open,
    /// Closes a group; flushes until the matching open entry.
    Close,
}

/// One entry in the operator table.
#[derive(Debug)]
pub struct Operator {
    /// Source-level symbol.
    pub symbol: &'static str,
    /// Binding strength. Meaningless for group entries, which are never
    /// compared by precedence.
    pub precedence: u8,
    /// Grouping behavior.
    pub group: Group,
}

impl Operator {
    /// Strict greater-than comparison used when deciding whether a
    /// stacked operator is flushed before the incoming one.
    #[inline]
    pub const fn outranks(&self, incoming: &Operator) -> bool {
        self.precedence > incoming.precedence
    }

    /// Check if this entry opens a group.
    #[inline]
    pub const fn is_group_open(&self) -> bool {
        matches!(self.group, Group::Open)
    }

    /// Check if this entry closes a group.
    #[inline]
    pub const fn is_group_close(&self) -> bool {
        matches!(self.group, Group::Close)
    }

    /// Check if this entry is part of a grouping pair.
    #[inline]
    pub const fn is_group(&self) -> bool {
        !matches!(self.group, Group::None)
    }
}

/// The registered operators.
///
/// Order is stable: `OpIx` values index this table directly, including
/// values that travel through a serialized scope.
static TABLE: [Operator; 7] = [
    Operator {
        symbol: "(",
        precedence: 0,
        group: Group::Open,
    },
    Operator {
        symbol: ")",
        precedence: 0,
        group: Group::Close,
    },
    Operator {
        symbol: "*",
        precedence: 2,
        group: Group::None,
    },
    Operator {
        symbol: "/",
        precedence: 2,
        group: Group::None,
    },
    Operator {
        symbol: "%",
        precedence: 2,
        group: Group::None,
    },
    Operator {
        symbol: "+",
        precedence: 1,
        group: Group::None,
    },
    Operator {
        symbol: "-",
        precedence: 1,
        group: Group::None,
    },
];

/// Index into the operator table.
///
/// Stable across the life of the process and across serialization, since
/// the table is a compile-time constant.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct OpIx(u8);

impl OpIx {
    /// Number of registered operators.
    pub const COUNT: usize = TABLE.len();

    /// Create an index from a raw value.
    ///
    /// An out-of-range value is representable (it can arrive through a
    /// deserialized scope); [`lookup`](Self::lookup) reports it as `None`.
    #[inline]
    pub const fn new(index: u8) -> Self {
        OpIx(index)
    }

    /// Get the raw u8 value.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Resolve a symbol to its table index.
    ///
    /// Returns `None` for unregistered symbols (comparisons and anything
    /// else the table does not carry).
    pub fn resolve(symbol: &str) -> Option<OpIx> {
        TABLE
            .iter()
            .position(|entry| entry.symbol == symbol)
            .and_then(|i| u8::try_from(i).ok())
            .map(OpIx)
    }

    /// Look up the table entry for this index.
    ///
    /// Returns `None` if the index is out of range.
    #[inline]
    pub fn lookup(self) -> Option<&'static Operator> {
        TABLE.get(self.0 as usize)
    }

    /// The symbol for this index, or `"?"` if out of range.
    ///
    /// Intended for display; callers that need to distinguish an invalid
    /// index use [`lookup`](Self::lookup).
    #[inline]
    pub fn symbol(self) -> &'static str {
        self.lookup().map_or("?", |entry| entry.symbol)
    }
}

impl std::fmt::Debug for OpIx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.lookup() {
            Some(entry) => write!(f, "OpIx({})", entry.symbol),
            None => write!(f, "OpIx(#{})", self.0),
        }
    }
}

/// All table entries, in index order.
pub fn table() -> &'static [Operator] {
    &TABLE
}

// Size assertions to prevent accidental regressions
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::OpIx;
    crate::static_assert_size!(OpIx, 1);
}
