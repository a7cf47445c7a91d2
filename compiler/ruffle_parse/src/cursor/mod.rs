//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use ruffle_ir::{Name, Span, Token, TokenKind};
use tracing::trace;

use crate::recovery::TokenSet;

/// Cursor for navigating tokens.
///
/// Works on any token slice. A slice that does not end in `Eof` behaves as
/// if it did: reading past the last token yields a synthetic `Eof` placed
/// right after it. The cursor never advances past `Eof`.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    eof: Token,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof_span = match tokens.last() {
            Some(last) if last.kind == TokenKind::Eof => last.span,
            Some(last) => last.span.end_point(),
            None => Span::DUMMY,
        };
        Cursor {
            tokens,
            eof: Token::new(TokenKind::Eof, eof_span),
            pos: 0,
        }
    }

    /// Get the current position in the token stream.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Tokens from the current position on.
    pub fn remaining(&self) -> &'a [Token] {
        &self.tokens[self.pos.min(self.tokens.len())..]
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Get the previous token's span.
    #[inline]
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.span,
            None => Span::DUMMY,
        }
    }

    /// Check if at end of token stream.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Check if the current token has the same kind as `kind`, ignoring payloads.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind().discriminant_index() == kind.discriminant_index()
    }

    /// Check if the current token is in `set`.
    #[inline]
    pub fn check_set(&self, set: TokenSet) -> bool {
        set.contains(&self.current_kind())
    }

    /// The current identifier's name, if the current token is one.
    #[inline]
    pub fn current_ident(&self) -> Option<Name> {
        match self.current_kind() {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// Peek at the token kind at offset `n` from current position.
    ///
    /// `peek_kind_at(0)` is the current token. Returns `Eof` past the end.
    #[inline]
    pub fn peek_kind_at(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map_or(TokenKind::Eof, |token| token.kind)
    }

    /// Advance to the next token and return the consumed token.
    ///
    /// At `Eof` the cursor stays put and returns the `Eof` token again.
    #[inline]
    pub fn advance(&mut self) -> Token {
        let token = *self.current();
        if token.kind != TokenKind::Eof {
            trace!(
                pos = self.pos,
                kind = %token.kind.display_name(),
                span_start = token.span.start,
                "advance"
            );
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        self.check(kind).then(|| self.advance())
    }
}

#[cfg(test)]
mod tests;
