//! Item-level skimmer.
//!
//! Walks a unit's tokens looking only for what the type front end needs:
//! `struct`, `enum` and `class` names, and every place a type annotation
//! appears. Statements and expressions are skipped by brace depth, never
//! parsed.
//!
//! Annotation sites:
//! - `let x: T`, `const X: T`, `static X: T`
//! - parameters `fn f(x: T)`
//! - fields `struct S { x: T }` and `class C { x: T }`
//! - return types `fn f() -> T` and `fn f() T`
//!
//! A broken annotation is recorded with its `ParseError`, then the skimmer
//! synchronizes to the site's follow set or a statement boundary and carries
//! on.

use ruffle_ir::{Name, Span, Token, TokenKind, TypeExpr};
use tracing::debug;

use crate::recovery::{synchronize, TokenSet, STMT_BOUNDARY, TYPE_START};
use crate::{ParseError, Parser};

/// Kind of a declared type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Struct,
    Enum,
    Class,
}

/// A `struct`, `enum` or `class` header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub name: Name,
    pub kind: DeclKind,
    /// Span of the declared name.
    pub span: Span,
}

/// Where a type annotation was written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnnotationSite {
    Let,
    Const,
    Static,
    Param,
    Field,
    Return,
}

/// One type annotation and its parse result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    pub site: AnnotationSite,
    /// Enclosing function, struct or class.
    pub owner: Option<Name>,
    /// Bound name; `None` for return types.
    pub binding: Option<Name>,
    /// Span of the type, or of the error when it failed to parse.
    pub span: Span,
    pub ty: Result<TypeExpr, ParseError>,
}

impl Annotation {
    pub fn is_ok(&self) -> bool {
        self.ty.is_ok()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkimOutput {
    pub declarations: Vec<Declaration>,
    pub annotations: Vec<Annotation>,
    /// Malformed item headers (a `struct` with no name, and so on).
    pub errors: Vec<ParseError>,
}

impl SkimOutput {
    /// Every parse error: item headers first, then failed annotations.
    pub fn parse_errors(&self) -> impl Iterator<Item = &ParseError> {
        self.errors
            .iter()
            .chain(self.annotations.iter().filter_map(|a| a.ty.as_ref().err()))
    }

    /// Successfully parsed annotations.
    pub fn types(&self) -> impl Iterator<Item = (&Annotation, &TypeExpr)> {
        self.annotations
            .iter()
            .filter_map(|a| a.ty.as_ref().ok().map(|ty| (a, ty)))
    }
}

/// Collect declarations and annotations from a unit's tokens.
#[tracing::instrument(level = "trace", skip_all, fields(tokens = tokens.len()))]
pub fn skim(tokens: &[Token]) -> SkimOutput {
    let mut skimmer = Skimmer {
        parser: Parser::new(tokens),
        out: SkimOutput::default(),
    };
    skimmer.items(false);
    debug!(
        declarations = skimmer.out.declarations.len(),
        annotations = skimmer.out.annotations.len(),
        errors = skimmer.out.errors.len(),
        "skimmed unit"
    );
    skimmer.out
}

const PARAM_FOLLOW: TokenSet = TokenSet::new()
    .with(TokenKind::Comma)
    .with(TokenKind::RParen);

const FIELD_FOLLOW: TokenSet = TokenSet::new()
    .with(TokenKind::Comma)
    .with(TokenKind::Semicolon)
    .with(TokenKind::RBrace);

const BINDING_FOLLOW: TokenSet = TokenSet::new()
    .with(TokenKind::Eq)
    .with(TokenKind::Semicolon);

const RETURN_FOLLOW: TokenSet = TokenSet::new()
    .with(TokenKind::LBrace)
    .with(TokenKind::Semicolon);

/// Where an item header ends and its body (or terminator) begins.
const HEADER_END: TokenSet = STMT_BOUNDARY.with(TokenKind::LBrace);

struct Skimmer<'a> {
    parser: Parser<'a>,
    out: SkimOutput,
}

impl Skimmer<'_> {
    fn kind(&self) -> TokenKind {
        self.parser.cursor.current_kind()
    }

    fn advance(&mut self) -> Token {
        self.parser.cursor.advance()
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.parser.cursor.check(kind)
    }

    /// Items at module level, or inside an `impl`/`mod` body when `nested`.
    fn items(&mut self, nested: bool) {
        loop {
            match self.kind() {
                TokenKind::Eof => return,
                TokenKind::RBrace => {
                    self.advance();
                    if nested {
                        return;
                    }
                }
                TokenKind::Struct => self.struct_like(DeclKind::Struct),
                TokenKind::Class => self.struct_like(DeclKind::Class),
                TokenKind::Enum => self.enum_decl(),
                TokenKind::Fn => self.function(),
                TokenKind::Impl | TokenKind::Mod => self.block_item(),
                TokenKind::Let => self.binding(AnnotationSite::Let, None),
                TokenKind::Const => self.binding(AnnotationSite::Const, None),
                TokenKind::Static => self.binding(AnnotationSite::Static, None),
                TokenKind::LBrace => self.skip_balanced(),
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// `struct Name ... { fields }`, `class Name ... { members }`, or a
    /// header ending in `;`.
    fn struct_like(&mut self, kind: DeclKind) {
        self.advance();
        let owner = self.declaration(kind);
        self.skip_header();
        if !self.check(TokenKind::LBrace) {
            self.parser.cursor.eat(TokenKind::Semicolon);
            return;
        }
        self.advance();
        loop {
            match self.kind() {
                TokenKind::Eof => return,
                TokenKind::RBrace => {
                    self.advance();
                    return;
                }
                TokenKind::Ident(field) if self.parser.cursor.peek_kind_at(1) == TokenKind::Colon => {
                    self.advance();
                    self.advance();
                    self.annotation(AnnotationSite::Field, owner, Some(field), FIELD_FOLLOW);
                }
                TokenKind::Fn => self.function(),
                TokenKind::Let => self.binding(AnnotationSite::Let, owner),
                TokenKind::Const => self.binding(AnnotationSite::Const, owner),
                TokenKind::Static => self.binding(AnnotationSite::Static, owner),
                TokenKind::LBrace => self.skip_balanced(),
                _ => {
                    self.advance();
                }
            }
        }
    }

    fn enum_decl(&mut self) {
        self.advance();
        self.declaration(DeclKind::Enum);
        self.skip_header();
        if self.check(TokenKind::LBrace) {
            self.skip_balanced();
        } else {
            self.parser.cursor.eat(TokenKind::Semicolon);
        }
    }

    /// Record the declared name at the cursor, if there is one.
    fn declaration(&mut self, kind: DeclKind) -> Option<Name> {
        if let Some(name) = self.parser.cursor.current_ident() {
            let token = self.advance();
            self.out.declarations.push(Declaration {
                name,
                kind,
                span: token.span,
            });
            Some(name)
        } else {
            let expected = TokenSet::single(TokenKind::Ident(Name::EMPTY));
            self.out
                .errors
                .push(ParseError::unexpected(expected, self.parser.cursor.current()));
            None
        }
    }

    /// `impl ... { items }` and `mod name { items }`.
    fn block_item(&mut self) {
        self.advance();
        self.skip_header();
        if self.parser.cursor.eat(TokenKind::LBrace).is_some() {
            self.items(true);
        } else {
            self.parser.cursor.eat(TokenKind::Semicolon);
        }
    }

    fn function(&mut self) {
        self.advance();
        let owner = self.parser.cursor.current_ident();
        if owner.is_some() {
            self.advance();
        }

        if self.parser.cursor.eat(TokenKind::LParen).is_some() {
            self.params(owner);
        }

        // The arrow is optional: `fn f() T` and `fn f() -> T` are the same.
        if self.parser.cursor.eat(TokenKind::Arrow).is_some()
            || self.parser.cursor.check_set(TYPE_START)
        {
            self.annotation(AnnotationSite::Return, owner, None, RETURN_FOLLOW);
        }

        if self.check(TokenKind::LBrace) {
            self.body(owner);
        } else {
            self.parser.cursor.eat(TokenKind::Semicolon);
        }
    }

    /// Parameter list after `(`, through the closing `)`.
    fn params(&mut self, owner: Option<Name>) {
        loop {
            match self.kind() {
                TokenKind::RParen => {
                    self.advance();
                    return;
                }
                TokenKind::Ident(param) if self.parser.cursor.peek_kind_at(1) == TokenKind::Colon => {
                    self.advance();
                    self.advance();
                    self.annotation(AnnotationSite::Param, owner, Some(param), PARAM_FOLLOW);
                }
                // Missing `)`: leave the boundary for the caller.
                kind if HEADER_END.contains(&kind) => return,
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Function body from `{` through the matching `}`.
    fn body(&mut self, owner: Option<Name>) {
        self.advance();
        let mut depth = 1usize;
        loop {
            match self.kind() {
                TokenKind::Eof => return,
                TokenKind::LBrace => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RBrace => {
                    self.advance();
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                TokenKind::Let => self.binding(AnnotationSite::Let, owner),
                TokenKind::Fn => self.function(),
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// `let`, `const` or `static` followed by an optional `: T`.
    ///
    /// Leading identifiers before the bound name (`let mut x`) are skipped.
    /// The initializer is left to the enclosing loop.
    fn binding(&mut self, site: AnnotationSite, owner: Option<Name>) {
        self.advance();
        while matches!(self.kind(), TokenKind::Ident(_))
            && matches!(self.parser.cursor.peek_kind_at(1), TokenKind::Ident(_))
        {
            self.advance();
        }
        let Some(binding) = self.parser.cursor.current_ident() else {
            return;
        };
        self.advance();
        if self.parser.cursor.eat(TokenKind::Colon).is_some() {
            self.annotation(site, owner, Some(binding), BINDING_FOLLOW);
        }
    }

    /// Parse one annotation at the cursor and record it.
    fn annotation(
        &mut self,
        site: AnnotationSite,
        owner: Option<Name>,
        binding: Option<Name>,
        follow: TokenSet,
    ) {
        let ty = self.parser.parse_type();
        let span = match &ty {
            Ok(ty) => ty.span,
            Err(err) => err.span(),
        };
        let failed = ty.is_err();
        self.out.annotations.push(Annotation {
            site,
            owner,
            binding,
            span,
            ty,
        });
        if failed {
            synchronize(&mut self.parser.cursor, follow.union(STMT_BOUNDARY));
        }
    }

    /// Skip an item header up to its body or terminator.
    fn skip_header(&mut self) {
        while !self.parser.cursor.check_set(HEADER_END) {
            self.advance();
        }
    }

    /// Skip from `{` through the matching `}` (or to end of input).
    fn skip_balanced(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.kind() {
                TokenKind::Eof => return,
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.advance();
                        return;
                    }
                }
                _ => {}
            }
            self.advance();
        }
    }
}
