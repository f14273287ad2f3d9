//! Token types for the Wisp lexer.
//!
//! A token pairs a kind with the raw source text it came from and its
//! span. The scope builder consumes any [`TokenList`], whether produced
//! by the lexer or constructed directly.

use std::fmt;

use crate::ops::OpIx;
use crate::span::Span;

/// What a token represents.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Integer literal.
    Int,
    /// Float literal.
    Float,
    /// String literal (raw text holds the unescaped content).
    Str,
    /// Operator, resolved to its table index.
    Op(OpIx),
}

impl TokenKind {
    /// Check if this token is a literal (records a value during building).
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::Float | TokenKind::Str)
    }
}

/// A token with its raw text and span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the token. For string literals this is the content
    /// with escapes already processed; for operators, the symbol.
    pub raw: Box<str>,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, raw: impl Into<Box<str>>, span: Span) -> Self {
        Token {
            kind,
            raw: raw.into(),
            span,
        }
    }

    /// Create a token with a dummy span, for hand-built token lists.
    pub fn dummy(kind: TokenKind, raw: impl Into<Box<str>>) -> Self {
        Token {
            kind,
            raw: raw.into(),
            span: Span::DUMMY,
        }
    }

    /// Create an operator token from a symbol, resolving it through the
    /// operator table. Returns `None` for unregistered symbols.
    pub fn op(symbol: &str) -> Option<Self> {
        OpIx::resolve(symbol).map(|ix| Token::dummy(TokenKind::Op(ix), symbol))
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({}) @ {}", self.kind, self.raw, self.span)
    }
}

/// An ordered list of tokens, the input to scope building.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Create a new token list with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Create from a Vec of tokens.
    #[inline]
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }

    /// Push a token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Get the number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get token at index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Get a slice of all tokens.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over tokens.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Consume into Vec.
    #[inline]
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenList({} tokens)", self.tokens.len())
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList {
            tokens: iter.into_iter().collect(),
        }
    }
}

// Size assertions to prevent accidental regressions in frequently-allocated types.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    // Token: Box<str> (16) + Span (8) + TokenKind (2) + padding = 32 bytes
    crate::static_assert_size!(Token, 32);
    // TokenKind largest variant: Op(OpIx) = 1 byte payload + 1 byte discriminant
    crate::static_assert_size!(TokenKind, 2);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_token_kind_literal() {
        assert!(TokenKind::Int.is_literal());
        assert!(TokenKind::Float.is_literal());
        assert!(TokenKind::Str.is_literal());
        let Some(plus) = OpIx::resolve("+") else {
            panic!("`+` must resolve");
        };
        assert!(!TokenKind::Op(plus).is_literal());
    }

    #[test]
    fn test_token_op_constructor() {
        let Some(token) = Token::op("*") else {
            panic!("`*` must resolve");
        };
        assert_eq!(&*token.raw, "*");
        assert!(matches!(token.kind, TokenKind::Op(_)));
        assert!(Token::op("==").is_none());
    }

    #[test]
    fn test_token_list_push_and_iter() {
        let mut list = TokenList::new();
        assert!(list.is_empty());
        list.push(Token::dummy(TokenKind::Int, "1"));
        list.push(Token::dummy(TokenKind::Int, "2"));
        assert_eq!(list.len(), 2);
        let raws: Vec<&str> = list.iter().map(|t| &*t.raw).collect();
        assert_eq!(raws, vec!["1", "2"]);
    }

    #[test]
    fn test_token_list_from_vec_round_trip() {
        let tokens = vec![
            Token::dummy(TokenKind::Int, "7"),
            Token::dummy(TokenKind::Float, "2.5"),
        ];
        let list = TokenList::from_vec(tokens.clone());
        assert_eq!(list.as_slice(), &tokens[..]);
        assert_eq!(list.into_vec(), tokens);
    }

    #[test]
    fn test_token_list_debug() {
        let list = TokenList::from_vec(vec![Token::dummy(TokenKind::Int, "1")]);
        assert_eq!(format!("{list:?}"), "TokenList(1 tokens)");
    }
}
