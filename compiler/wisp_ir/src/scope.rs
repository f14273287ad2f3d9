//! The execution scope: a flat arena owning one expression.

use crate::ids::{NodeId, ValueId};
use crate::node::Node;
use crate::value::Value;

/// Convert an arena length to `u32`, reserving the sentinel.
fn to_u32(value: usize, what: &str) -> u32 {
    match u32::try_from(value) {
        Ok(v) if v != u32::MAX => v,
        _ => panic!("too many {what} for a single scope"),
    }
}

/// Arena for one expression's values and nodes.
///
/// Two parallel growth-only arrays addressed by [`ValueId`] and
/// [`NodeId`]. Created empty, populated incrementally during scope
/// building, and read-only afterwards. The expression's root is the
/// last node appended; a scope with no nodes is a bare literal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecScope {
    values: Vec<Value>,
    nodes: Vec<Node>,
}

impl ExecScope {
    /// Create an empty scope.
    pub fn new() -> Self {
        ExecScope {
            values: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Create a scope pre-allocated for roughly `token_count` tokens.
    ///
    /// Every token becomes at most one value or one node, so half the
    /// token count is a fair estimate for each array.
    pub fn with_capacity(token_count: usize) -> Self {
        let estimated = token_count / 2 + 1;
        ExecScope {
            values: Vec::with_capacity(estimated),
            nodes: Vec::with_capacity(estimated),
        }
    }

    /// Record a value, returning its ID.
    pub fn push_value(&mut self, value: Value) -> ValueId {
        let id = ValueId::new(to_u32(self.values.len(), "values"));
        self.values.push(value);
        id
    }

    /// Append a node, returning its ID.
    pub fn push_node(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(to_u32(self.nodes.len(), "nodes"));
        self.nodes.push(node);
        id
    }

    /// Get a value by ID.
    ///
    /// # Panics
    /// Panics if the ID is invalid or out of range. Use
    /// [`get_value`](Self::get_value) for untrusted scopes.
    #[inline]
    pub fn value(&self, id: ValueId) -> &Value {
        &self.values[id.index()]
    }

    /// Get a node by ID.
    ///
    /// # Panics
    /// Panics if the ID is invalid or out of range. Use
    /// [`get_node`](Self::get_node) for untrusted scopes.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Get a value by ID, `None` if invalid or out of range.
    #[inline]
    pub fn get_value(&self, id: ValueId) -> Option<&Value> {
        self.values.get(id.index())
    }

    /// Get a node by ID, `None` if invalid or out of range.
    #[inline]
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// All recorded values, in recording order.
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// All nodes, in creation order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The root of the expression: the last node appended.
    ///
    /// `None` when the scope holds no nodes (a bare literal, or nothing).
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        let len = self.nodes.len();
        len.checked_sub(1).map(|i| NodeId::new(to_u32(i, "nodes")))
    }

    /// Check if the scope holds neither values nor nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.nodes.is_empty()
    }
}
