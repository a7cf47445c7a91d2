//! Raw type annotation trees.
//!
//! `TypeExpr` captures a type annotation exactly as written, before any
//! validation. Parentheses survive as `Grouped` nodes so that diagnostics
//! can point at them; the normalizer strips them.

use crate::{Name, Span};

/// A parsed type annotation.
///
/// - `i32` → `Named(i32)`
/// - `i32?` → `Optional(Named(i32))`
/// - `i32!Error?` → `Optional(ErrorUnion(Named(i32), Named(Error)))`
/// - `!Error` → `ErrorUnion(Named(unit), Named(Error))`, the `unit` leaf has
///   a zero-width span at the `!`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeExpr {
    pub kind: TypeExprKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeExprKind {
    /// A type name: `i32`, `bool`, `IpAddress`.
    Named(Name),

    /// `T?`
    Optional {
        inner: Box<TypeExpr>,
        /// The `?` token.
        question: Span,
    },

    /// `T!E`
    ErrorUnion {
        /// Success arm.
        ok: Box<TypeExpr>,
        /// Error arm.
        err: Box<TypeExpr>,
    },

    /// `(T)`
    Grouped(Box<TypeExpr>),
}

impl TypeExpr {
    #[inline]
    pub fn new(kind: TypeExprKind, span: Span) -> Self {
        TypeExpr { kind, span }
    }

    #[inline]
    pub fn named(name: Name, span: Span) -> Self {
        TypeExpr::new(TypeExprKind::Named(name), span)
    }

    /// The implicit `unit` success type of a bare `!E`.
    #[inline]
    pub fn unit(span: Span) -> Self {
        TypeExpr::named(Name::UNIT, span)
    }

    #[inline]
    pub fn optional(inner: TypeExpr, question: Span, span: Span) -> Self {
        TypeExpr::new(
            TypeExprKind::Optional {
                inner: Box::new(inner),
                question,
            },
            span,
        )
    }

    #[inline]
    pub fn error_union(ok: TypeExpr, err: TypeExpr, span: Span) -> Self {
        TypeExpr::new(
            TypeExprKind::ErrorUnion {
                ok: Box::new(ok),
                err: Box::new(err),
            },
            span,
        )
    }

    #[inline]
    pub fn grouped(inner: TypeExpr, span: Span) -> Self {
        TypeExpr::new(TypeExprKind::Grouped(Box::new(inner)), span)
    }

    /// Check if this node is a plain name.
    #[inline]
    pub fn is_named(&self) -> bool {
        matches!(self.kind, TypeExprKind::Named(_))
    }

    /// Check if this node is the implicit `unit` success arm.
    #[inline]
    pub fn is_unit(&self) -> bool {
        matches!(self.kind, TypeExprKind::Named(name) if name == Name::UNIT)
    }

    /// Copy of this tree with every `Grouped` node removed.
    #[must_use]
    pub fn strip_groups(&self) -> TypeExpr {
        match &self.kind {
            TypeExprKind::Named(_) => self.clone(),
            TypeExprKind::Grouped(inner) => inner.strip_groups(),
            TypeExprKind::Optional { inner, question } => {
                TypeExpr::optional(inner.strip_groups(), *question, self.span)
            }
            TypeExprKind::ErrorUnion { ok, err } => {
                TypeExpr::error_union(ok.strip_groups(), err.strip_groups(), self.span)
            }
        }
    }

    /// Nesting depth; a bare name has depth 1.
    pub fn depth(&self) -> usize {
        match &self.kind {
            TypeExprKind::Named(_) => 1,
            TypeExprKind::Optional { inner, .. } | TypeExprKind::Grouped(inner) => 1 + inner.depth(),
            TypeExprKind::ErrorUnion { ok, err } => 1 + ok.depth().max(err.depth()),
        }
    }

    /// Visit every `Named` leaf, left to right.
    pub fn for_each_name(&self, f: &mut impl FnMut(Name, Span)) {
        match &self.kind {
            TypeExprKind::Named(name) => f(*name, self.span),
            TypeExprKind::Optional { inner, .. } | TypeExprKind::Grouped(inner) => {
                inner.for_each_name(f);
            }
            TypeExprKind::ErrorUnion { ok, err } => {
                ok.for_each_name(f);
                err.for_each_name(f);
            }
        }
    }
}

#[cfg(test)]
mod tests;
