//! Tokens produced by the Ruffle lexer.

use std::fmt;
use std::ops::Index;

use crate::{Name, Span};

/// Token kinds for Ruffle.
///
/// `?` and `!` are always single-character tokens. There is deliberately no
/// `??`, `!=` or `!==` kind: the lexer stays context-free and the parser
/// decides what a run of `?`/`!` means.
///
/// Float literals store bits as u64 for Hash compatibility.
/// String/Ident use interned Name for Hash compatibility.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Integer literal: 42, `1_000`
    Int(u64),
    /// Float literal: 3.14, 2.5e-3 (stored as bits for Eq/Hash)
    Float(u64),
    /// String literal (interned, escapes cooked): "hello"
    String(Name),
    /// Identifier (interned)
    Ident(Name),

    // Keywords
    Let,
    Fn,
    If,
    Else,
    While,
    For,
    Return,
    Class,
    Impl,
    Struct,
    Enum,
    SelfValue, // self
    Super,
    Use,
    Mod,
    Const,
    Static,

    // Punctuation
    Dot,
    Comma,
    Semicolon,
    Bang,
    Question,
    Colon,
    DoubleColon,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Arrow,    // ->
    FatArrow, // =>

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    EqEq,
    EqEqEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    AmpAmp,
    PipePipe,
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,

    /// Lexically invalid span (the lexer reported why)
    Error,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Number of distinct discriminants.
    pub const COUNT: u8 = 56;

    /// Dense discriminant index, used by token sets for O(1) membership.
    pub const fn discriminant_index(&self) -> u8 {
        match self {
            // Literals (0-3)
            Self::Int(_) => 0,
            Self::Float(_) => 1,
            Self::String(_) => 2,
            Self::Ident(_) => 3,

            // Keywords (4-20)
            Self::Let => 4,
            Self::Fn => 5,
            Self::If => 6,
            Self::Else => 7,
            Self::While => 8,
            Self::For => 9,
            Self::Return => 10,
            Self::Class => 11,
            Self::Impl => 12,
            Self::Struct => 13,
            Self::Enum => 14,
            Self::SelfValue => 15,
            Self::Super => 16,
            Self::Use => 17,
            Self::Mod => 18,
            Self::Const => 19,
            Self::Static => 20,

            // Punctuation (21-35)
            Self::Dot => 21,
            Self::Comma => 22,
            Self::Semicolon => 23,
            Self::Bang => 24,
            Self::Question => 25,
            Self::Colon => 26,
            Self::DoubleColon => 27,
            Self::LParen => 28,
            Self::RParen => 29,
            Self::LBracket => 30,
            Self::RBracket => 31,
            Self::LBrace => 32,
            Self::RBrace => 33,
            Self::Arrow => 34,
            Self::FatArrow => 35,

            // Operators (36-53)
            Self::Plus => 36,
            Self::Minus => 37,
            Self::Star => 38,
            Self::Slash => 39,
            Self::Percent => 40,
            Self::EqEq => 41,
            Self::EqEqEq => 42,
            Self::Lt => 43,
            Self::LtEq => 44,
            Self::Gt => 45,
            Self::GtEq => 46,
            Self::AmpAmp => 47,
            Self::PipePipe => 48,
            Self::Eq => 49,
            Self::PlusEq => 50,
            Self::MinusEq => 51,
            Self::StarEq => 52,
            Self::SlashEq => 53,

            // Special (54-55)
            Self::Error => 54,
            Self::Eof => 55,
        }
    }

    /// Check if this token is a reserved keyword.
    pub fn is_keyword(&self) -> bool {
        (4..=20).contains(&self.discriminant_index())
    }

    /// Human-readable name for error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "integer",
            TokenKind::Float(_) => "float",
            TokenKind::String(_) => "string",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Let => "`let`",
            TokenKind::Fn => "`fn`",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::While => "`while`",
            TokenKind::For => "`for`",
            TokenKind::Return => "`return`",
            TokenKind::Class => "`class`",
            TokenKind::Impl => "`impl`",
            TokenKind::Struct => "`struct`",
            TokenKind::Enum => "`enum`",
            TokenKind::SelfValue => "`self`",
            TokenKind::Super => "`super`",
            TokenKind::Use => "`use`",
            TokenKind::Mod => "`mod`",
            TokenKind::Const => "`const`",
            TokenKind::Static => "`static`",
            TokenKind::Dot => "`.`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Bang => "`!`",
            TokenKind::Question => "`?`",
            TokenKind::Colon => "`:`",
            TokenKind::DoubleColon => "`::`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Arrow => "`->`",
            TokenKind::FatArrow => "`=>`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Percent => "`%`",
            TokenKind::EqEq => "`==`",
            TokenKind::EqEqEq => "`===`",
            TokenKind::Lt => "`<`",
            TokenKind::LtEq => "`<=`",
            TokenKind::Gt => "`>`",
            TokenKind::GtEq => "`>=`",
            TokenKind::AmpAmp => "`&&`",
            TokenKind::PipePipe => "`||`",
            TokenKind::Eq => "`=`",
            TokenKind::PlusEq => "`+=`",
            TokenKind::MinusEq => "`-=`",
            TokenKind::StarEq => "`*=`",
            TokenKind::SlashEq => "`/=`",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of input",
        }
    }

    /// Display name for the token at the given discriminant index.
    pub fn display_name_from_index(index: u8) -> Option<&'static str> {
        let kind = match index {
            0 => TokenKind::Int(0),
            1 => TokenKind::Float(0),
            2 => TokenKind::String(Name::EMPTY),
            3 => TokenKind::Ident(Name::EMPTY),
            _ => return Self::FIXED.get(usize::from(index).checked_sub(4)?).map(TokenKind::display_name),
        };
        Some(kind.display_name())
    }

    /// Payload-free kinds in discriminant order, starting at index 4.
    const FIXED: [TokenKind; 52] = [
        TokenKind::Let,
        TokenKind::Fn,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::For,
        TokenKind::Return,
        TokenKind::Class,
        TokenKind::Impl,
        TokenKind::Struct,
        TokenKind::Enum,
        TokenKind::SelfValue,
        TokenKind::Super,
        TokenKind::Use,
        TokenKind::Mod,
        TokenKind::Const,
        TokenKind::Static,
        TokenKind::Dot,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Bang,
        TokenKind::Question,
        TokenKind::Colon,
        TokenKind::DoubleColon,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Arrow,
        TokenKind::FatArrow,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::EqEq,
        TokenKind::EqEqEq,
        TokenKind::Lt,
        TokenKind::LtEq,
        TokenKind::Gt,
        TokenKind::GtEq,
        TokenKind::AmpAmp,
        TokenKind::PipePipe,
        TokenKind::Eq,
        TokenKind::PlusEq,
        TokenKind::MinusEq,
        TokenKind::StarEq,
        TokenKind::SlashEq,
        TokenKind::Error,
        TokenKind::Eof,
    ];
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its source location.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Owned token stream for one translation unit.
///
/// A list produced by the lexer always ends with exactly one `Eof` token.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token kinds only, for tests and tracing.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList {
            tokens: iter.into_iter().collect(),
        }
    }
}
