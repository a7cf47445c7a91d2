//! Raw logos tokens and their conversion into `TokenKind`.

use logos::Logos;
use ruffle_ir::{StringInterner, TokenKind};

/// Error kinds reported by the logos state machine.
///
/// An unmatched character produces the default kind; the numeric literal
/// callbacks report the others. `UnterminatedLiteral` is raised by the
/// lexer when it sees a `RawToken::UnterminatedString`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum RawError {
    #[default]
    InvalidCharacter,
    UnterminatedLiteral,
    InvalidInteger,
    InvalidFloat,
    FloatOutOfRange,
}

/// Raw token from logos (before interning).
#[derive(Logos, Clone, Copy, Debug, Eq, PartialEq)]
#[logos(error = RawError)]
#[logos(skip r"[ \t\r\n\f]+|//[^\n]*|/\*([^*]|\*+[^*/])*\*+/")]
pub(crate) enum RawToken {
    // === Keywords ===
    #[token("let")]
    Let,
    #[token("fn")]
    Fn,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("for")]
    For,
    #[token("return")]
    Return,
    #[token("class")]
    Class,
    #[token("impl")]
    Impl,
    #[token("struct")]
    Struct,
    #[token("enum")]
    Enum,
    #[token("self")]
    SelfValue,
    #[token("super")]
    Super,
    #[token("use")]
    Use,
    #[token("mod")]
    Mod,
    #[token("const")]
    Const,
    #[token("static")]
    Static,

    // === Punctuation ===
    // `?` and `!` never combine with a neighbour.
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("!")]
    Bang,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("::")]
    DoubleColon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("->")]
    Arrow,
    #[token("=>")]
    FatArrow,

    // === Operators ===
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("==")]
    EqEq,
    #[token("===")]
    EqEqEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("=")]
    Eq,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,

    // === Literals ===
    #[regex(r"[0-9][0-9_]*", |lex| parse_int(lex.slice()))]
    Int(u64),

    // The exponent digits are optional here so that `2.5e` is reported as
    // a malformed float instead of a float followed by an identifier.
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9_]*)?", |lex| parse_float(lex.slice()))]
    Float(u64),

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    // No closing quote before the end of the line; reported as an error.
    #[regex(r#""([^"\\\n]|\\.)*"#)]
    UnterminatedString,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

fn parse_int(slice: &str) -> Result<u64, RawError> {
    slice
        .replace('_', "")
        .parse::<u64>()
        .map_err(|_| RawError::InvalidInteger)
}

fn parse_float(slice: &str) -> Result<u64, RawError> {
    match slice.replace('_', "").parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value.to_bits()),
        Ok(_) => Err(RawError::FloatOutOfRange),
        Err(_) => Err(RawError::InvalidFloat),
    }
}

/// Convert a raw token to a `TokenKind`, interning identifiers and strings.
pub(crate) fn convert(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        // Literals
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::Float(bits) => TokenKind::Float(bits),
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            TokenKind::String(interner.intern(&unescape_string(content)))
        }
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),
        RawToken::UnterminatedString => TokenKind::Error,

        // Keywords
        RawToken::Let => TokenKind::Let,
        RawToken::Fn => TokenKind::Fn,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::While => TokenKind::While,
        RawToken::For => TokenKind::For,
        RawToken::Return => TokenKind::Return,
        RawToken::Class => TokenKind::Class,
        RawToken::Impl => TokenKind::Impl,
        RawToken::Struct => TokenKind::Struct,
        RawToken::Enum => TokenKind::Enum,
        RawToken::SelfValue => TokenKind::SelfValue,
        RawToken::Super => TokenKind::Super,
        RawToken::Use => TokenKind::Use,
        RawToken::Mod => TokenKind::Mod,
        RawToken::Const => TokenKind::Const,
        RawToken::Static => TokenKind::Static,

        // Punctuation
        RawToken::Dot => TokenKind::Dot,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Question => TokenKind::Question,
        RawToken::Colon => TokenKind::Colon,
        RawToken::DoubleColon => TokenKind::DoubleColon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::FatArrow => TokenKind::FatArrow,

        // Operators
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::EqEqEq => TokenKind::EqEqEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::Eq => TokenKind::Eq,
        RawToken::PlusEq => TokenKind::PlusEq,
        RawToken::MinusEq => TokenKind::MinusEq,
        RawToken::StarEq => TokenKind::StarEq,
        RawToken::SlashEq => TokenKind::SlashEq,
    }
}

/// Process string escape sequences.
///
/// Unknown escapes are kept as written.
pub(crate) fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('r') => result.push('\r'),
                Some('t') => result.push('\t'),
                Some('\\') => result.push('\\'),
                Some('"') => result.push('"'),
                Some('0') => result.push('\0'),
                Some(c) => {
                    result.push('\\');
                    result.push(c);
                }
                None => result.push('\\'),
            }
        } else {
            result.push(c);
        }
    }

    result
}
