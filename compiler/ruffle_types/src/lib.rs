//! Type normalization for Ruffle.
//!
//! Turns the raw [`TypeExpr`](ruffle_ir::TypeExpr) trees produced by the
//! parser into [`CanonicalType`] descriptors:
//!
//! - groups are stripped,
//! - redundant `?`s collapse (with a warning),
//! - structurally invalid unions are rejected,
//! - every name is resolved against a [`TypeResolver`].
//!
//! The symbol table is built in a declare pass ([`SymbolTable::declare`]),
//! then frozen ([`SymbolTable::freeze`]) and shared read-only by every
//! normalizer of the invocation.

mod canonical;
mod error;
mod normalize;
mod suggest;
mod symbols;

pub use canonical::{CanonicalDisplay, CanonicalType};
pub use error::SemanticError;
pub use normalize::Normalizer;
pub use suggest::{edit_distance, suggest_similar};
pub use symbols::{FrozenSymbols, Symbol, SymbolTable, TypeKind, TypeResolver, BUILTIN_TYPES};
