//! Type name registry
//!
//! The parser only ever asks one question about types: does this name
//! resolve? The registry answers it for the built-in type set and is passed
//! to the parser explicitly, so no type state outlives a compilation unit.

use indexmap::IndexMap;

/// Built-in type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ty {
    /// Placeholder for declarations with no initializer type yet
    None,
    /// Sentinel for lookups that failed
    Invalid,
    UInt64,
    Int64,
    Float64,
    Str,
}

/// A named type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    pub ty: Ty,
    pub name: String,
}

impl Type {
    fn new(ty: Ty, name: &str) -> Self {
        Self {
            ty,
            name: name.to_string(),
        }
    }
}

/// Registry of declared type names
///
/// Insertion-ordered so dumps and error listings stay deterministic.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    declared: IndexMap<String, Type>,
}

impl TypeRegistry {
    /// Create a registry preloaded with the built-in types
    pub fn new() -> Self {
        let mut declared = IndexMap::new();
        for ty in [
            Type::new(Ty::None, "none"),
            Type::new(Ty::UInt64, "uint64"),
            Type::new(Ty::Int64, "int64"),
            Type::new(Ty::Float64, "float64"),
            Type::new(Ty::Str, "string"),
        ] {
            declared.insert(ty.name.clone(), ty);
        }
        Self { declared }
    }

    /// Resolve a type name
    #[inline]
    pub fn resolve(&self, name: &str) -> Option<&Type> {
        self.declared.get(name)
    }

    /// Names of all declared types, in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.declared.keys().map(String::as_str)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
