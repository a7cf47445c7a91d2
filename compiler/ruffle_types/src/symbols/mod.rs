//! Symbol table for type names.
//!
//! Built-ins are present from the start; `struct`, `enum` and `class` names
//! are added during the declare pass. Once frozen the table is read-only and
//! cheap to share across threads.

use std::sync::Arc;

use ruffle_ir::{Name, Span, StringInterner};
use rustc_hash::FxHashMap;

use crate::SemanticError;

/// Built-in type names, resolvable in every unit.
pub const BUILTIN_TYPES: [&str; 20] = [
    "unit", "bool", "char", "str", "String", "i8", "i16", "i32", "i64", "i128", "isize", "u8",
    "u16", "u32", "u64", "u128", "usize", "f32", "f64", "Error",
];

/// What a type name resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Builtin,
    Struct,
    Enum,
    Class,
}

/// A symbol table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub kind: TypeKind,
    /// Declaration site; `None` for built-ins.
    pub span: Option<Span>,
}

/// Read access to type names, as seen by the normalizer.
pub trait TypeResolver {
    fn resolve(&self, name: Name) -> Option<TypeKind>;

    /// Every resolvable name, in no particular order.
    fn names(&self) -> Vec<Name>;
}

/// Mutable symbol table used during the declare pass.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    symbols: FxHashMap<Name, Symbol>,
}

impl SymbolTable {
    /// A table holding the built-in types.
    pub fn new(interner: &StringInterner) -> Self {
        let mut symbols = FxHashMap::default();
        for builtin in BUILTIN_TYPES {
            symbols.insert(
                interner.intern(builtin),
                Symbol {
                    kind: TypeKind::Builtin,
                    span: None,
                },
            );
        }
        SymbolTable { symbols }
    }

    /// Add a declared type.
    ///
    /// Fails with `DuplicateType` if the name is already taken, including by
    /// a built-in.
    pub fn declare(&mut self, name: Name, kind: TypeKind, span: Span) -> Result<(), SemanticError> {
        if let Some(previous) = self.symbols.get(&name) {
            return Err(SemanticError::DuplicateType {
                name,
                span,
                previous: previous.span,
            });
        }
        tracing::trace!(?kind, "declare type");
        self.symbols.insert(
            name,
            Symbol {
                kind,
                span: Some(span),
            },
        );
        Ok(())
    }

    pub fn get(&self, name: Name) -> Option<&Symbol> {
        self.symbols.get(&name)
    }

    pub fn contains(&self, name: Name) -> bool {
        self.symbols.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Finish the declare pass.
    pub fn freeze(self) -> FrozenSymbols {
        FrozenSymbols(Arc::new(self))
    }
}

impl TypeResolver for SymbolTable {
    fn resolve(&self, name: Name) -> Option<TypeKind> {
        self.symbols.get(&name).map(|symbol| symbol.kind)
    }

    fn names(&self) -> Vec<Name> {
        self.symbols.keys().copied().collect()
    }
}

/// Read-only, shareable symbol table.
#[derive(Clone, Debug)]
pub struct FrozenSymbols(Arc<SymbolTable>);

impl std::ops::Deref for FrozenSymbols {
    type Target = SymbolTable;

    fn deref(&self) -> &SymbolTable {
        &self.0
    }
}

impl TypeResolver for FrozenSymbols {
    fn resolve(&self, name: Name) -> Option<TypeKind> {
        self.0.resolve(name)
    }

    fn names(&self) -> Vec<Name> {
        self.0.names()
    }
}
