//! Error recovery for the parser.
//!
//! Provides token sets and synchronization for continuing parsing after errors.
//! Uses bitset-based O(1) membership testing.

use std::fmt;

use ruffle_ir::{Name, TokenKind};

use crate::cursor::Cursor;

/// A set of token kinds using bitset representation for O(1) membership testing.
///
/// Each bit in the u64 corresponds to a `TokenKind` discriminant index.
/// Payloads are ignored: `Ident(a)` and `Ident(b)` are the same member.
///
/// # Example
/// ```
/// use ruffle_ir::{Name, TokenKind};
/// use ruffle_parse::TokenSet;
///
/// const CLOSERS: TokenSet = TokenSet::new()
///     .with(TokenKind::RParen)
///     .with(TokenKind::RBrace);
///
/// assert!(CLOSERS.contains(&TokenKind::RBrace));
/// assert_eq!(CLOSERS.to_string(), "`)` or `}`");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TokenSet(u64);

// Every discriminant must fit in the bitset.
const _: () = assert!(TokenKind::COUNT <= 64);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a token set containing a single token kind.
    #[inline]
    #[allow(clippy::needless_pass_by_value)] // const fn builder for static initialization
    pub const fn single(kind: TokenKind) -> Self {
        Self(1u64 << kind.discriminant_index())
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    #[allow(clippy::needless_pass_by_value)] // const fn builder for static initialization
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check if this set contains a token kind.
    #[inline]
    pub const fn contains(&self, kind: &TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Display names of the members, in discriminant order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        (0..TokenKind::COUNT)
            .filter(|index| self.0 & (1u64 << index) != 0)
            .filter_map(TokenKind::display_name_from_index)
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders as a human list: "identifier, `!` or `(`".
impl fmt::Display for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.names().collect();
        match names.split_last() {
            None => f.write_str("nothing"),
            Some((last, [])) => f.write_str(last),
            Some((last, rest)) => write!(f, "{} or {last}", rest.join(", ")),
        }
    }
}

/// Recovery set for statement and item boundaries.
///
/// After a broken annotation the outer parser skips to one of these and
/// resumes.
pub const STMT_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::Semicolon)
    .with(TokenKind::RBrace)
    .with(TokenKind::Fn)
    .with(TokenKind::Let)
    .with(TokenKind::Struct)
    .with(TokenKind::Enum)
    .with(TokenKind::Class)
    .with(TokenKind::Impl)
    .with(TokenKind::Use)
    .with(TokenKind::Mod)
    .with(TokenKind::Const)
    .with(TokenKind::Static)
    .with(TokenKind::Eof);

/// Tokens that can start a type.
pub const TYPE_START: TokenSet = TokenSet::new()
    .with(TokenKind::Ident(Name::EMPTY))
    .with(TokenKind::LParen)
    .with(TokenKind::Bang);

/// Tokens that can start an atom (the operand of `!`).
pub const ATOM_START: TokenSet = TokenSet::new()
    .with(TokenKind::Ident(Name::EMPTY))
    .with(TokenKind::LParen);

/// Advance the cursor until reaching a token in the recovery set or EOF.
///
/// Returns `true` if a recovery token was found, `false` if EOF was reached.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> bool {
    let start = cursor.position();
    let found = loop {
        if recovery.contains(&cursor.current_kind()) {
            break !cursor.is_at_end() || recovery.contains(&TokenKind::Eof);
        }
        if cursor.is_at_end() {
            break false;
        }
        cursor.advance();
    };
    tracing::debug!(skipped = cursor.position() - start, found, "synchronized");
    found
}
