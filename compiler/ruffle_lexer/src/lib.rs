//! Lexer for Ruffle using logos with string interning.
//!
//! The lexer is context-free: `?` and `!` are always single tokens, and the
//! type parser decides what a run of them means. It never stops on bad
//! input. Every lexical error becomes a `TokenKind::Error` token plus a
//! [`LexError`], and scanning resumes at the next safe point.

mod error;
mod raw;

use logos::Logos;
use ruffle_ir::{LineIndex, Span, StringInterner, Token, TokenKind, TokenList};

pub use error::LexError;
use raw::{RawError, RawToken};

/// Result of lexing a whole source buffer.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LexOutput {
    /// Tokens, terminated by exactly one `Eof`.
    pub tokens: TokenList,
    /// Errors in source order.
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex source code into a `TokenList`.
#[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let mut lexer = Lexer::new(source, interner);
    let tokens: TokenList = lexer.by_ref().collect();
    let errors = lexer.take_errors();
    tracing::trace!(tokens = tokens.len(), errors = errors.len(), "lexed");
    LexOutput { tokens, errors }
}

/// Lazy token stream over one source buffer.
///
/// Yields tokens in source order, then a single `Eof`, then `None`. A lexer
/// can start at any byte offset ([`Lexer::starting_at`]) for a
/// resynchronization scan; its spans are still relative to the whole
/// source.
pub struct Lexer<'a> {
    source: &'a str,
    /// Byte offset `raw` started at.
    base: usize,
    raw: logos::Lexer<'a, RawToken>,
    lines: LineIndex,
    interner: &'a StringInterner,
    peeked: Option<Token>,
    errors: Vec<LexError>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, interner: &'a StringInterner) -> Self {
        Self::starting_at(source, 0, interner)
    }

    /// Start scanning at `offset`.
    ///
    /// Offsets past the end clamp to the end; an offset inside a multi-byte
    /// character moves forward to the next character boundary.
    pub fn starting_at(source: &'a str, offset: usize, interner: &'a StringInterner) -> Self {
        let mut base = offset.min(source.len());
        while !source.is_char_boundary(base) {
            base += 1;
        }
        Lexer {
            source,
            base,
            raw: RawToken::lexer(&source[base..]),
            lines: LineIndex::build(source),
            interner,
            peeked: None,
            errors: Vec::new(),
            finished: false,
        }
    }

    /// Look at the next token without consuming it.
    pub fn peek(&mut self) -> Option<&Token> {
        if self.peeked.is_none() {
            self.peeked = self.scan();
        }
        self.peeked.as_ref()
    }

    /// Byte offset of the next unconsumed token (or of the end of the last
    /// consumed one).
    pub fn offset(&self) -> usize {
        match &self.peeked {
            Some(token) => token.span.start as usize,
            None => self.base + self.raw.span().end,
        }
    }

    /// Errors found so far; the lexer keeps scanning afterwards.
    pub fn take_errors(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.errors)
    }

    fn span_of(&self, range: std::ops::Range<usize>) -> Span {
        let range = (self.base + range.start)..(self.base + range.end);
        Span::from_range(range, self.source, &self.lines)
    }

    fn scan(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let Some(result) = self.raw.next() else {
            self.finished = true;
            let end = self.source.len();
            return Some(Token::new(TokenKind::Eof, self.span_of_absolute(end)));
        };

        let kind = match result {
            Ok(RawToken::UnterminatedString) => {
                return Some(self.error_token(RawError::UnterminatedLiteral));
            }
            Ok(raw) => raw::convert(raw, self.raw.slice(), self.interner),
            Err(RawError::InvalidCharacter) => {
                self.skip_to_whitespace();
                return Some(self.error_token(RawError::InvalidCharacter));
            }
            Err(kind) => return Some(self.error_token(kind)),
        };

        Some(Token::new(kind, self.span_of(self.raw.span())))
    }

    fn span_of_absolute(&self, offset: usize) -> Span {
        Span::from_range(offset..offset, self.source, &self.lines)
    }

    /// Extend the current bad token up to the next whitespace.
    fn skip_to_whitespace(&mut self) {
        let local = self.raw.span();
        let rest = &self.source[self.base + local.start..];
        let run = rest
            .char_indices()
            .skip(1)
            .find(|(_, c)| c.is_whitespace())
            .map_or(rest.len(), |(i, _)| i);
        let extra = run.saturating_sub(local.len());
        if extra > 0 {
            tracing::trace!(skipped = extra, "resynchronizing after invalid character");
            self.raw.bump(extra);
        }
    }

    fn error_token(&mut self, kind: RawError) -> Token {
        let span = self.span_of(self.raw.span());
        self.errors
            .push(LexError::from_raw(kind, self.raw.slice(), span));
        Token::new(TokenKind::Error, span)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.peeked.take() {
            Some(token) => Some(token),
            None => self.scan(),
        }
    }
}
