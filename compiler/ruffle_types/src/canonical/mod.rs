//! Canonical type descriptors.
//!
//! A `CanonicalType` is the flattened, validated form of a type annotation.
//! Parentheses are gone, every `?` that mattered is a flag, and the error
//! arm is a nested descriptor:
//!
//! | Source | base | base_optional | error | optional |
//! |--------|------|---------------|-------|----------|
//! | `i32` | i32 | false | - | false |
//! | `i32?` | i32 | false | - | true |
//! | `i32?!E` | i32 | true | E | false |
//! | `(i32!E)?` | i32 | false | E | true |
//! | `!E` | unit | false | E | false |

use std::fmt;

use ruffle_ir::{Name, Span, StringInterner, TypeExpr};

/// Printed base name of [`CanonicalType::error_placeholder`].
const ERROR_PLACEHOLDER: &str = "{error}";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CanonicalType {
    /// Innermost success type.
    pub base: Name,
    /// Optionality of the success arm alone (`T?!E`). Only set when `error`
    /// is present.
    pub base_optional: bool,
    /// Error arm; never optional itself.
    pub error: Option<Box<CanonicalType>>,
    /// Optionality of the whole value.
    pub optional: bool,
}

impl CanonicalType {
    /// A plain, non-optional named type.
    pub fn named(base: Name) -> Self {
        CanonicalType {
            base,
            base_optional: false,
            error: None,
            optional: false,
        }
    }

    /// Stand-in for an annotation that failed to normalize.
    pub fn error_placeholder(interner: &StringInterner) -> Self {
        CanonicalType::named(interner.intern(ERROR_PLACEHOLDER))
    }

    pub fn is_error_placeholder(&self, interner: &StringInterner) -> bool {
        self.error.is_none() && interner.lookup(self.base) == ERROR_PLACEHOLDER
    }

    #[must_use]
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Attach an error arm; the current optionality moves to the success arm.
    #[must_use]
    pub fn with_error(self, error: CanonicalType) -> Self {
        CanonicalType {
            base: self.base,
            base_optional: self.optional,
            error: Some(Box::new(error)),
            optional: false,
        }
    }

    pub fn is_fallible(&self) -> bool {
        self.error.is_some()
    }

    /// A bare, non-optional name: prints without parentheses anywhere.
    pub fn is_plain(&self) -> bool {
        self.error.is_none() && !self.optional
    }

    /// Rebuild a `TypeExpr` with dummy spans.
    ///
    /// Normalizing the result gives back `self` without diagnostics.
    pub fn to_type_expr(&self) -> TypeExpr {
        let span = Span::DUMMY;
        let mut ty = TypeExpr::named(self.base, span);
        if let Some(error) = &self.error {
            if self.base_optional {
                ty = TypeExpr::optional(ty, span, span);
            }
            let mut err = error.to_type_expr();
            if !error.is_plain() {
                err = TypeExpr::grouped(err, span);
            }
            ty = TypeExpr::error_union(ty, err, span);
        }
        if self.optional {
            ty = TypeExpr::optional(ty, span, span);
        }
        ty
    }

    /// Source syntax for this type, resolving names through `interner`.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> CanonicalDisplay<'a> {
        CanonicalDisplay { ty: self, interner }
    }

    pub fn to_source(&self, interner: &StringInterner) -> String {
        self.display(interner).to_string()
    }
}

/// `Display` adapter returned by [`CanonicalType::display`].
///
/// The output re-parses to an equal canonical type. The implicit `unit`
/// success arm prints as a bare `!E`.
pub struct CanonicalDisplay<'a> {
    ty: &'a CanonicalType,
    interner: &'a StringInterner,
}

impl fmt::Display for CanonicalDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ty = self.ty;
        match &ty.error {
            Some(error) => {
                let implicit_unit = ty.base == Name::UNIT && !ty.base_optional;
                if !implicit_unit {
                    f.write_str(self.interner.lookup(ty.base))?;
                    if ty.base_optional {
                        f.write_str("?")?;
                    }
                }
                if error.is_plain() {
                    write!(f, "!{}", error.display(self.interner))?;
                } else {
                    write!(f, "!({})", error.display(self.interner))?;
                }
            }
            None => f.write_str(self.interner.lookup(ty.base))?,
        }
        if ty.optional {
            f.write_str("?")?;
        }
        Ok(())
    }
}
