//! Lexical errors.

use ruffle_diagnostic::{Diagnostic, ErrorCode};
use ruffle_ir::Span;
use thiserror::Error;

use crate::raw::RawError;

/// An error found while scanning source text.
///
/// Each error also produced a `TokenKind::Error` token covering `span`, so
/// the token stream stays aligned with the source.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum LexError {
    /// String literal with no closing quote on its line.
    #[error("unterminated string literal")]
    UnterminatedLiteral { span: Span },

    /// A run of characters that starts no token.
    #[error("invalid character `{found}`")]
    InvalidCharacter { found: String, span: Span },

    /// Integer literal outside the `u64` range.
    #[error("integer literal `{text}` is too large")]
    InvalidInteger { text: String, span: Span },

    /// Float literal with a dangling exponent.
    #[error("malformed float literal `{text}`")]
    InvalidFloat { text: String, span: Span },

    /// Float literal whose value is not finite as an `f64`.
    #[error("float literal `{text}` is out of range")]
    FloatOutOfRange { text: String, span: Span },
}

impl LexError {
    pub(crate) fn from_raw(kind: RawError, text: &str, span: Span) -> Self {
        match kind {
            RawError::InvalidCharacter => LexError::InvalidCharacter {
                found: text.to_owned(),
                span,
            },
            RawError::UnterminatedLiteral => LexError::UnterminatedLiteral { span },
            RawError::InvalidInteger => LexError::InvalidInteger {
                text: text.to_owned(),
                span,
            },
            RawError::InvalidFloat => LexError::InvalidFloat {
                text: text.to_owned(),
                span,
            },
            RawError::FloatOutOfRange => LexError::FloatOutOfRange {
                text: text.to_owned(),
                span,
            },
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedLiteral { span }
            | LexError::InvalidCharacter { span, .. }
            | LexError::InvalidInteger { span, .. }
            | LexError::InvalidFloat { span, .. }
            | LexError::FloatOutOfRange { span, .. } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnterminatedLiteral { .. } => ErrorCode::E0001,
            LexError::InvalidCharacter { .. } => ErrorCode::E0002,
            LexError::InvalidInteger { .. } => ErrorCode::E0003,
            LexError::InvalidFloat { .. } | LexError::FloatOutOfRange { .. } => ErrorCode::E0004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            LexError::UnterminatedLiteral { span } => diag
                .with_label(*span, "string starts here")
                .with_help("string literals end on the line they start"),
            LexError::InvalidCharacter { span, .. } => {
                diag.with_label(*span, "not valid in Ruffle source")
            }
            LexError::InvalidInteger { span, .. } => diag
                .with_label(*span, "does not fit in 64 bits")
                .with_note(format!("the largest integer literal is {}", u64::MAX)),
            LexError::InvalidFloat { span, .. } => diag
                .with_label(*span, "expected digits after the exponent")
                .with_help("write floats like `3.14` or `2.5e-3`"),
            LexError::FloatOutOfRange { span, .. } => diag
                .with_label(*span, "does not fit in an `f64`")
                .with_note(format!("the largest float literal is about {:e}", f64::MAX)),
        }
    }
}
