//! Parser for Ruffle type annotations.
//!
//! Recursive descent over the lexer's token stream. The crate has two entry
//! points:
//! - [`parse_type`] / [`Parser::parse_type`]: one type annotation, for any
//!   outer parser that reaches a `:` or `->`.
//! - [`skim`]: a coarse item-level walk that collects `struct`/`enum`/`class`
//!   declarations and every annotation site in a unit, skipping statements
//!   and expressions by brace depth.
//!
//! Errors are values ([`ParseError`]); after one, callers resynchronize with
//! [`synchronize`] and a recovery [`TokenSet`].

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::ParseError;
pub use grammar::{skim, Annotation, AnnotationSite, DeclKind, Declaration, SkimOutput};
pub use recovery::{synchronize, TokenSet, ATOM_START, STMT_BOUNDARY, TYPE_START};

use ruffle_ir::{Token, TypeExpr};

/// Deepest type nesting the parser accepts.
///
/// Bounds the height of every parsed tree: each group, `?` and `!` adds a
/// level on top of what it wraps.
pub const MAX_TYPE_DEPTH: usize = 256;

/// Parser state: a cursor plus the current type nesting depth.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser::from_cursor(Cursor::new(tokens))
    }

    /// Resume parsing from an existing cursor position.
    pub fn from_cursor(cursor: Cursor<'a>) -> Self {
        Parser { cursor, depth: 0 }
    }

    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    pub fn into_cursor(self) -> Cursor<'a> {
        self.cursor
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> &'a [Token] {
        self.cursor.remaining()
    }
}

/// Parse one type from the front of `tokens`.
///
/// Returns the type and the tokens right after it. The first token must
/// start a type; anything after the type is left for the caller.
#[tracing::instrument(level = "trace", skip_all, fields(tokens = tokens.len()))]
pub fn parse_type(tokens: &[Token]) -> Result<(TypeExpr, &[Token]), ParseError> {
    let mut parser = Parser::new(tokens);
    let ty = parser.parse_type()?;
    Ok((ty, parser.remaining()))
}
