//! Ruffle IR - shared front-end data types.
//!
//! This crate holds the data that flows between the Ruffle front-end phases:
//! - Spans and the line index used to stamp them
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - `TypeExpr`, the raw tree produced for every type annotation
//!
//! # Design Philosophy
//!
//! - **Intern identifiers**: Strings → Name(u32), so type names compare in O(1)
//! - **Own the tree**: `TypeExpr` nodes own their children; there is no sharing
//!   and no back-reference, so the tree can be handed to any later stage as is.
//!
//! Types that contain floats store them as u64 bits for Hash compatibility.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod name;
mod span;
mod token;
mod type_expr;

pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use span::{LineIndex, Span};
pub use token::{Token, TokenKind, TokenList};
pub use type_expr::{TypeExpr, TypeExprKind};
