//! Shunting-yard construction of execution scopes.

use smallvec::SmallVec;
use tracing::trace;
use wisp_ir::{
    ExecScope, LeafRef, Node, NodeId, OpIx, Operator, Span, Token, TokenKind, TokenList, Value,
};

use crate::error::{ParseError, ParseErrorKind};

/// How emitted nodes connect to the operands around them.
///
/// Both modes run the same operator-precedence pass and differ only in
/// how a freshly emitted node is linked to its neighbours.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EmitMode {
    /// Emitted nodes are pushed back onto the operand stack, so a later
    /// operator consumes them exactly like a literal. Operand order is
    /// preserved across group boundaries.
    #[default]
    Stacked,
    /// Emitted nodes are never pushed back. An operator that comes up
    /// short on operands instead chains to the most recently emitted
    /// nodes, walking backwards one node per missing side. With two
    /// grouped subexpressions this links them in reverse order, which
    /// matters for `-`, `/`, and `%`.
    Chained,
}

/// An operator parked on the stack until something with lower binding
/// power forces it out.
#[derive(Copy, Clone, Debug)]
struct PendingOp {
    ix: OpIx,
    entry: &'static Operator,
    span: Span,
}

/// Single-pass builder that turns a token sequence into an [`ExecScope`].
///
/// Literals are appended to the value table as they appear, so value
/// order always matches source order. Operators park on a stack and are
/// emitted as nodes once a lower-precedence operator, a group close, or
/// the end of input flushes them. Equal precedence does not flush, so
/// runs like `8 - 2 + 1` group from the right.
pub struct ScopeBuilder<'t> {
    tokens: &'t TokenList,
    mode: EmitMode,
    scope: ExecScope,
    ops: SmallVec<[PendingOp; 8]>,
    operands: SmallVec<[LeafRef; 8]>,
}

impl<'t> ScopeBuilder<'t> {
    /// Creates a builder over `tokens` using the default emission mode.
    #[must_use]
    pub fn new(tokens: &'t TokenList) -> Self {
        Self {
            tokens,
            mode: EmitMode::default(),
            scope: ExecScope::with_capacity(tokens.len()),
            ops: SmallVec::new(),
            operands: SmallVec::new(),
        }
    }

    /// Selects the node emission mode.
    #[must_use]
    pub fn emit_mode(mut self, mode: EmitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Consumes the builder and produces the finished scope.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if an operator token is not in the
    /// operator table or if group tokens are unbalanced.
    pub fn build(mut self) -> Result<ExecScope, ParseError> {
        let tokens = self.tokens;
        for token in tokens {
            self.record(token)?;
        }
        self.flush()?;
        trace!(
            values = self.scope.values().len(),
            nodes = self.scope.nodes().len(),
            "scope built"
        );
        Ok(self.scope)
    }

    fn record(&mut self, token: &Token) -> Result<(), ParseError> {
        if let TokenKind::Op(ix) = token.kind {
            return self.record_operator(ix, token);
        }
        if let Some(value) = Value::from_token(token) {
            let id = self.scope.push_value(value);
            trace!(id = id.index(), raw = &*token.raw, "record value");
            self.operands.push(LeafRef::Value(id));
        }
        Ok(())
    }

    fn record_operator(&mut self, ix: OpIx, token: &Token) -> Result<(), ParseError> {
        let Some(entry) = ix.lookup() else {
            return Err(ParseError::new(
                ParseErrorKind::UnknownOperator {
                    symbol: token.raw.clone(),
                },
                token.span,
            ));
        };
        if entry.is_group_open() {
            trace!("open group");
            self.ops.push(PendingOp {
                ix,
                entry,
                span: token.span,
            });
            return Ok(());
        }
        if entry.is_group_close() {
            return self.close_group(token);
        }
        // Strictly higher precedence flushes; equal precedence stays
        // parked. Group opens fence off everything beneath them.
        while let Some(top) = self.ops.last().copied() {
            if top.entry.is_group_open() || !top.entry.outranks(entry) {
                break;
            }
            self.ops.pop();
            self.emit(top.ix);
        }
        self.ops.push(PendingOp {
            ix,
            entry,
            span: token.span,
        });
        Ok(())
    }

    /// Flushes parked operators down to the nearest group open, which is
    /// discarded. Group markers themselves never become nodes.
    fn close_group(&mut self, token: &Token) -> Result<(), ParseError> {
        trace!("close group");
        while let Some(top) = self.ops.pop() {
            if top.entry.is_group_open() {
                return Ok(());
            }
            self.emit(top.ix);
        }
        Err(ParseError::new(
            ParseErrorKind::UnmatchedGroupClose,
            token.span,
        ))
    }

    /// Flushes everything left on the operator stack at end of input.
    fn flush(&mut self) -> Result<(), ParseError> {
        while let Some(top) = self.ops.pop() {
            if top.entry.is_group_open() {
                return Err(ParseError::new(ParseErrorKind::UnclosedGroup, top.span));
            }
            self.emit(top.ix);
        }
        Ok(())
    }

    fn emit(&mut self, op: OpIx) {
        let (left, right) = match self.mode {
            EmitMode::Stacked => self.pop_operands(),
            EmitMode::Chained => self.pop_operands_chained(),
        };
        let id = self.scope.push_node(Node::new(op, left, right));
        trace!(node = id.index(), op = op.symbol(), ?left, ?right, "emit node");
        if self.mode == EmitMode::Stacked {
            self.operands.push(LeafRef::Node(id));
        }
    }

    /// Takes the two most recent operands; a missing side stays unset.
    fn pop_operands(&mut self) -> (LeafRef, LeafRef) {
        let right = self.operands.pop().unwrap_or(LeafRef::UNSET);
        let left = self.operands.pop().unwrap_or(LeafRef::UNSET);
        (left, right)
    }

    /// Takes up to two operands, then resolves missing sides against
    /// nodes emitted earlier, newest first. A lone operand lands on the
    /// left and the chained node fills the right, so `(1+2)*(3+4)` links
    /// its groups in reverse source order.
    fn pop_operands_chained(&mut self) -> (LeafRef, LeafRef) {
        let mut left = LeafRef::UNSET;
        let mut right = LeafRef::UNSET;
        if let Some(top) = self.operands.pop() {
            left = top;
            if let Some(deeper) = self.operands.pop() {
                right = left;
                left = deeper;
            }
        }
        let mut chain = self.scope.nodes().len();
        if !left.is_valid() && chain > 0 {
            chain -= 1;
            left = node_ref(chain);
        }
        if !right.is_valid() && chain > 0 {
            chain -= 1;
            right = node_ref(chain);
        }
        (left, right)
    }
}

/// A node reference by index, unset if the index does not fit in an id.
fn node_ref(index: usize) -> LeafRef {
    match u32::try_from(index) {
        Ok(raw) => LeafRef::Node(NodeId::new(raw)),
        Err(_) => LeafRef::UNSET,
    }
}
