//! Generic definition identifiers and metadata.
//!
//! A [`GenericDef`] is the uninstantiated side of a constructed generic type:
//! `List<T>`'s definition carries its arity, kind, declared variances, and the
//! base/interface templates written in terms of its own type parameters
//! (`ParamOwner::Definition`). Constructed types (`TypeData::Applied`) pair a
//! `DefId` with concrete type arguments; hierarchy queries instantiate the
//! templates on demand.

use crate::interner::Atom;
use crate::types::{FunctionShapeId, TypeId, Variance};
use serde::{Deserialize, Serialize};

/// Identity of a generic (or arity-0 nominal) type definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DefId(pub u32);

/// What sort of declaration a definition is. Classes and structs are always
/// treated as invariant by the relation engine regardless of declared
/// variance; interfaces and delegates honor it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefKind {
    Class,
    Struct,
    Interface,
    Delegate,
}

impl DefKind {
    pub fn honors_variance(self) -> bool {
        matches!(self, DefKind::Interface | DefKind::Delegate)
    }
}

/// Metadata for one type definition.
#[derive(Debug, Clone)]
pub struct GenericDef {
    pub name: Atom,
    pub kind: DefKind,
    /// Declared variance per type-parameter position; length is the arity.
    pub variances: Vec<Variance>,
    /// Base class template over this definition's own parameters.
    pub base: Option<TypeId>,
    /// Directly implemented interface templates over this definition's own
    /// parameters.
    pub interfaces: Vec<TypeId>,
    /// Invoke signature template, present only for `DefKind::Delegate`.
    pub invoke: Option<FunctionShapeId>,
    /// Whether rank-1 arrays are implicitly convertible to this interface
    /// (the `IEnumerable<T>`-like family).
    pub array_interface: bool,
}

impl GenericDef {
    pub fn arity(&self) -> usize {
        self.variances.len()
    }
}
