//! Parse error types.
//!
//! Each variant carries the spans needed to point at the problem, and
//! converts to a `Diagnostic` with an `E1xxx` code.

use ruffle_diagnostic::{Diagnostic, ErrorCode};
use ruffle_ir::{Span, Token, TokenKind};
use thiserror::Error;

use crate::recovery::TokenSet;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    /// A token that cannot start or continue a type.
    #[error("expected {expected}, found {}", found.display_name())]
    UnexpectedToken {
        expected: TokenSet,
        found: TokenKind,
        span: Span,
    },

    /// `T!E!F` without parentheses; `first` and `second` are the two `!`s.
    #[error("ambiguous error union chain")]
    AmbiguousErrorChain { first: Span, second: Span },

    /// `(` with no matching `)`.
    #[error("expected `)`, found {}", found.display_name())]
    UnclosedParen {
        open: Span,
        found: TokenKind,
        span: Span,
    },

    /// Type nesting beyond `limit`.
    #[error("type is nested too deeply (limit is {limit})")]
    TooDeep { limit: usize, span: Span },
}

impl ParseError {
    /// `UnexpectedToken` for `found`, which was not in `expected`.
    pub fn unexpected(expected: TokenSet, found: &Token) -> Self {
        ParseError::UnexpectedToken {
            expected,
            found: found.kind,
            span: found.span,
        }
    }

    /// Primary location of the error.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnclosedParen { span, .. }
            | ParseError::TooDeep { span, .. } => *span,
            ParseError::AmbiguousErrorChain { second, .. } => *second,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseError::AmbiguousErrorChain { .. } => ErrorCode::E1002,
            ParseError::UnclosedParen { .. } => ErrorCode::E1003,
            ParseError::TooDeep { .. } => ErrorCode::E1004,
        }
    }

    /// Whether the offending token is a lexer `Error` token.
    ///
    /// The lexer has already reported those, so callers usually skip the
    /// parse diagnostic.
    pub fn is_from_lex_error(&self) -> bool {
        matches!(
            self,
            ParseError::UnexpectedToken {
                found: TokenKind::Error,
                ..
            } | ParseError::UnclosedParen {
                found: TokenKind::Error,
                ..
            }
        )
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            ParseError::UnexpectedToken { expected, span, .. } => {
                let label = if expected.count() == 1 {
                    format!("expected {expected}")
                } else {
                    "unexpected token".to_owned()
                };
                diag.with_label(*span, label)
            }
            ParseError::AmbiguousErrorChain { first, second } => diag
                .with_label(*second, "second `!` here")
                .with_secondary_label(*first, "first `!` here")
                .with_note("`!` does not chain; each error union has one error type")
                .with_help("parenthesize the error type, as in `T!(E!F)`"),
            ParseError::UnclosedParen { open, span, .. } => diag
                .with_label(*span, "expected `)`")
                .with_secondary_label(*open, "unclosed `(` opened here"),
            ParseError::TooDeep { span, .. } => diag
                .with_label(*span, "nesting limit reached here")
                .with_help("introduce a named type for part of this annotation"),
        }
    }
}
