//! Type normalization.
//!
//! Rewrites a raw `TypeExpr` into a `CanonicalType`:
//! - `Grouped(x)` is `x`
//! - `Optional(Optional(x))` is `Optional(x)`, with one W2101 warning per
//!   extra `?`
//! - `ErrorUnion(ok, err)` requires `err` not to be optional and `ok` not to
//!   be an error union; an error union inside `err` is kept as a nested
//!   descriptor
//! - every name must resolve
//!
//! Errors in the success arm are reported before errors in the error arm.

use ruffle_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode, Suggestion};
use ruffle_ir::{Name, Span, StringInterner, TypeExpr, TypeExprKind};
use tracing::trace;

use crate::suggest::suggest_similar;
use crate::{CanonicalType, SemanticError, TypeResolver};

/// Normalizes type annotations against one symbol table.
///
/// Holds no per-annotation state; one normalizer serves a whole unit.
pub struct Normalizer<'a> {
    resolver: &'a dyn TypeResolver,
    interner: &'a StringInterner,
    warn_redundant_optional: bool,
}

impl<'a> Normalizer<'a> {
    pub fn new(resolver: &'a dyn TypeResolver, interner: &'a StringInterner) -> Self {
        Normalizer {
            resolver,
            interner,
            warn_redundant_optional: true,
        }
    }

    /// Enable or disable the redundant-optional warning.
    #[must_use]
    pub fn with_redundant_optional_warnings(mut self, enabled: bool) -> Self {
        self.warn_redundant_optional = enabled;
        self
    }

    /// Normalize one annotation.
    ///
    /// Warnings go to `diagnostics`; the first error is returned.
    #[tracing::instrument(level = "trace", skip_all, fields(span_start = ty.span.start))]
    pub fn normalize(
        &self,
        ty: &TypeExpr,
        diagnostics: &mut DiagnosticQueue,
    ) -> Result<CanonicalType, SemanticError> {
        self.lower(ty, diagnostics)
    }

    fn lower(
        &self,
        ty: &TypeExpr,
        diagnostics: &mut DiagnosticQueue,
    ) -> Result<CanonicalType, SemanticError> {
        match &ty.kind {
            TypeExprKind::Grouped(inner) => self.lower(inner, diagnostics),
            TypeExprKind::Named(name) => {
                self.resolve(*name, ty.span)?;
                Ok(CanonicalType::named(*name))
            }
            TypeExprKind::Optional { inner, question } => {
                let canonical = self.lower(inner, diagnostics)?;
                if canonical.optional {
                    trace!(span_start = ty.span.start, "collapsed redundant optional");
                    if self.warn_redundant_optional {
                        diagnostics.push(redundant_optional(*question));
                    }
                }
                Ok(canonical.with_optional(true))
            }
            TypeExprKind::ErrorUnion { ok, err } => {
                let success = self.lower(ok, diagnostics)?;
                if success.is_fallible() {
                    return Err(SemanticError::NestedSuccessUnion { span: ok.span });
                }
                let error = self.lower(err, diagnostics)?;
                if error.optional {
                    return Err(SemanticError::OptionalError { span: err.span });
                }
                Ok(success.with_error(error))
            }
        }
    }

    fn resolve(&self, name: Name, span: Span) -> Result<(), SemanticError> {
        if self.resolver.resolve(name).is_some() {
            return Ok(());
        }
        let wanted = self.interner.lookup(name);
        let names = self.resolver.names();
        let suggestion = suggest_similar(wanted, names.iter().map(|n| self.interner.lookup(*n)))
            .and_then(|candidate| self.interner.get(candidate));
        Err(SemanticError::UnknownType {
            name,
            span,
            suggestion,
        })
    }
}

fn redundant_optional(span: Span) -> Diagnostic {
    Diagnostic::warning(ErrorCode::W2101)
        .with_message("redundant optional")
        .with_label(span, "type is already optional")
        .with_suggestion(Suggestion::delete("remove the extra `?`", span))
}
