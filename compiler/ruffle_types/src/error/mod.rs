//! Semantic errors found while normalizing type annotations.

use ruffle_diagnostic::{Diagnostic, ErrorCode, Suggestion};
use ruffle_ir::{Name, Span, StringInterner};
use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SemanticError {
    /// A name that is neither built in nor declared.
    #[error("unknown type")]
    UnknownType {
        name: Name,
        span: Span,
        /// A declared name within a small edit distance.
        suggestion: Option<Name>,
    },

    /// `T!(E?)`: the error arm is optional.
    #[error("error type cannot be optional")]
    OptionalError { span: Span },

    /// `(T!E)!F`: the success arm is itself an error union.
    #[error("success type of an error union cannot be an error union")]
    NestedSuccessUnion { span: Span },

    /// A type declared twice, or a declaration shadowing a built-in.
    #[error("type declared more than once")]
    DuplicateType {
        name: Name,
        span: Span,
        /// The earlier declaration; `None` for a built-in.
        previous: Option<Span>,
    },
}

impl SemanticError {
    pub fn span(&self) -> Span {
        match self {
            SemanticError::UnknownType { span, .. }
            | SemanticError::OptionalError { span }
            | SemanticError::NestedSuccessUnion { span }
            | SemanticError::DuplicateType { span, .. } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SemanticError::UnknownType { .. } => ErrorCode::E2001,
            SemanticError::OptionalError { .. } => ErrorCode::E2002,
            SemanticError::NestedSuccessUnion { .. } => ErrorCode::E2003,
            SemanticError::DuplicateType { .. } => ErrorCode::E2004,
        }
    }

    /// Render as a diagnostic, resolving names through `interner`.
    pub fn to_diagnostic(&self, interner: &StringInterner) -> Diagnostic {
        let diag = Diagnostic::error(self.code());
        match self {
            SemanticError::UnknownType {
                name,
                span,
                suggestion,
            } => {
                let diag = diag
                    .with_message(format!("unknown type `{}`", interner.lookup(*name)))
                    .with_label(*span, "not declared");
                match suggestion {
                    Some(candidate) => diag.with_suggestion(Suggestion::did_you_mean(
                        *span,
                        interner.lookup(*candidate),
                    )),
                    None => diag,
                }
            }
            SemanticError::OptionalError { span } => diag
                .with_message(self.to_string())
                .with_label(*span, "optional error type")
                .with_note("an error union already distinguishes success from failure")
                .with_help("remove the `?` from the error type"),
            SemanticError::NestedSuccessUnion { span } => diag
                .with_message(self.to_string())
                .with_label(*span, "this success type can fail")
                .with_help("move the inner error into the error arm, as in `T!(E!F)`"),
            SemanticError::DuplicateType {
                name,
                span,
                previous,
            } => {
                let diag = diag
                    .with_message(format!(
                        "type `{}` is declared more than once",
                        interner.lookup(*name)
                    ))
                    .with_label(*span, "redeclared here");
                match previous {
                    Some(previous) => diag.with_secondary_label(*previous, "first declared here"),
                    None => diag.with_note(format!("`{}` is a built-in type", interner.lookup(*name))),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
