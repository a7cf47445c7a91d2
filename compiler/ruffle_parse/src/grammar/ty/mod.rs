//! Type expression parsing.
//!
//! ```text
//! type          := error_type
//! error_type    := ( optional_type | ε ) '!' atom '?'*
//!                | optional_type
//! optional_type := atom '?'*
//! atom          := identifier | '(' type ')'
//! ```
//!
//! `?` binds tighter than `!`, and `?`s after a complete `T!E` wrap the whole
//! union. `!` does not chain: `T!E!F` is rejected and the error arm must be
//! parenthesized.

use ruffle_ir::{Span, TokenKind, TypeExpr};
use tracing::trace;

use crate::recovery::{ATOM_START, TYPE_START};
use crate::{ParseError, Parser, MAX_TYPE_DEPTH};

/// A parsed subtree and its height (a bare name has height 1).
type Measured = (TypeExpr, usize);

impl Parser<'_> {
    /// Parse a type expression at the cursor.
    ///
    /// On success the cursor sits on the first token after the type. On
    /// failure the cursor is left at the offending token.
    pub fn parse_type(&mut self) -> Result<TypeExpr, ParseError> {
        self.parse_measured_type().map(|(ty, _)| ty)
    }

    fn parse_measured_type(&mut self) -> Result<Measured, ParseError> {
        if self.depth >= MAX_TYPE_DEPTH {
            return Err(too_deep(self.cursor.current_span()));
        }
        self.depth += 1;
        let result = self.parse_error_type();
        self.depth -= 1;
        result
    }

    fn parse_error_type(&mut self) -> Result<Measured, ParseError> {
        if !self.cursor.check_set(TYPE_START) {
            return Err(ParseError::unexpected(TYPE_START, self.cursor.current()));
        }
        let start = self.cursor.current_span();

        let (ok, ok_height) = if self.cursor.check(TokenKind::Bang) {
            // `!E` has an implicit unit success arm.
            (TypeExpr::unit(Span::point(start.start, start.line, start.column)), 1)
        } else {
            self.parse_optional_type()?
        };

        let Some(bang) = self.cursor.eat(TokenKind::Bang) else {
            return Ok((ok, ok_height));
        };
        let (err, err_height) = self.parse_atom()?;
        let height = grow(ok_height.max(err_height), bang.span)?;
        let union = TypeExpr::error_union(ok, err, start.merge(self.cursor.previous_span()));
        trace!(span_start = union.span.start, height, "error union");

        let measured = self.parse_question_marks((union, height), start)?;
        if self.cursor.check(TokenKind::Bang) {
            return Err(ParseError::AmbiguousErrorChain {
                first: bang.span,
                second: self.cursor.current_span(),
            });
        }
        Ok(measured)
    }

    fn parse_optional_type(&mut self) -> Result<Measured, ParseError> {
        let start = self.cursor.current_span();
        let atom = self.parse_atom()?;
        self.parse_question_marks(atom, start)
    }

    /// Wrap `inner` in one `Optional` per `?` at the cursor.
    fn parse_question_marks(&mut self, inner: Measured, start: Span) -> Result<Measured, ParseError> {
        let (mut ty, mut height) = inner;
        while self.cursor.check(TokenKind::Question) {
            height = grow(height, self.cursor.current_span())?;
            let question = self.cursor.advance();
            ty = TypeExpr::optional(ty, question.span, start.merge(question.span));
        }
        Ok((ty, height))
    }

    fn parse_atom(&mut self) -> Result<Measured, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                let token = self.cursor.advance();
                Ok((TypeExpr::named(name, token.span), 1))
            }
            TokenKind::LParen => {
                let open = self.cursor.advance();
                let (inner, height) = self.parse_measured_type()?;
                match self.cursor.eat(TokenKind::RParen) {
                    Some(close) => Ok((
                        TypeExpr::grouped(inner, open.span.merge(close.span)),
                        grow(height, close.span)?,
                    )),
                    None => {
                        let found = self.cursor.current();
                        Err(ParseError::UnclosedParen {
                            open: open.span,
                            found: found.kind,
                            span: found.span,
                        })
                    }
                }
            }
            _ => Err(ParseError::unexpected(ATOM_START, self.cursor.current())),
        }
    }
}

/// Height of a node one level above a subtree of `height`.
///
/// `?` wraps outside a group stack on the heights inside it, so the whole
/// tree is bounded, not just each paren level.
fn grow(height: usize, span: Span) -> Result<usize, ParseError> {
    let height = height + 1;
    if height > MAX_TYPE_DEPTH {
        return Err(too_deep(span));
    }
    Ok(height)
}

fn too_deep(span: Span) -> ParseError {
    ParseError::TooDeep {
        limit: MAX_TYPE_DEPTH,
        span,
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
