//! Structural type representation.
//!
//! Types are hash-consed into [`TypeId`]s by the [`TypeInterner`]; `TypeData`
//! is the exhaustive sum type over every shape the inference engine can
//! encounter. Structural dispatch in the solver is an exhaustive `match` over
//! this enum, so "no rule applies" is a structurally enforced default arm
//! rather than a runtime type test that fell through.
//!
//! [`TypeInterner`]: crate::intern::TypeInterner

use crate::def::DefId;
use crate::interner::Atom;
use serde::{Deserialize, Serialize};

/// Interned type handle. Equality of `TypeId`s is structural equality of the
/// underlying types (hash-consing), which makes type comparison O(1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeId(pub u32);

// Intrinsics are pre-registered by `TypeInterner::new` in this exact order.
impl TypeId {
    pub const ERROR: TypeId = TypeId(0);
    pub const OBJECT: TypeId = TypeId(1);
    pub const DYNAMIC: TypeId = TypeId(2);
    pub const VOID: TypeId = TypeId(3);
    pub const BOOL: TypeId = TypeId(4);
    pub const CHAR: TypeId = TypeId(5);
    pub const BYTE: TypeId = TypeId(6);
    pub const SHORT: TypeId = TypeId(7);
    pub const INT: TypeId = TypeId(8);
    pub const UINT: TypeId = TypeId(9);
    pub const LONG: TypeId = TypeId(10);
    pub const ULONG: TypeId = TypeId(11);
    pub const FLOAT: TypeId = TypeId(12);
    pub const DOUBLE: TypeId = TypeId(13);
    pub const DECIMAL: TypeId = TypeId(14);
    pub const STRING: TypeId = TypeId(15);
}

/// Handle into the interner's shared type-argument list table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeListId(pub u32);

/// Handle into the interner's tuple element list table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TupleListId(pub u32);

/// Handle into the interner's function shape table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionShapeId(pub u32);

/// The built-in leaf types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntrinsicKind {
    Error,
    Object,
    /// The `dynamic`-like marker. Structurally equivalent to `Object` for
    /// bound deduplication, but preferred over it when candidates merge.
    Dynamic,
    Void,
    Bool,
    Char,
    Byte,
    Short,
    Int,
    UInt,
    Long,
    ULong,
    Float,
    Double,
    Decimal,
    String,
}

/// Who declared a type parameter.
///
/// `Method` parameters are the ones the inference engine solves for; their
/// ordinal indexes the bound store directly. `Definition` parameters only
/// occur inside generic-definition templates (base classes, interfaces,
/// delegate signatures) and are substituted away by instantiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamOwner {
    Method,
    Definition,
}

/// Declared variance of a generic definition's type-parameter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variance {
    Invariant,
    Covariant,
    Contravariant,
}

/// How a formal parameter receives its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RefKind {
    #[default]
    Value,
    Ref,
    Out,
}

impl RefKind {
    /// By-ref parameters force exact inference in phase 1.
    pub fn is_managed_reference(self) -> bool {
        !matches!(self, RefKind::Value)
    }
}

/// One element of a tuple type. The name is incidental: type equivalence
/// ignores it, and candidate merging intersects names element-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TupleElement {
    pub ty: TypeId,
    pub name: Option<Atom>,
}

/// One parameter of a function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParamInfo {
    pub ty: TypeId,
    pub ref_kind: RefKind,
}

impl ParamInfo {
    pub fn by_value(ty: TypeId) -> Self {
        Self {
            ty,
            ref_kind: RefKind::Value,
        }
    }
}

/// The parameter list and return type of a function type (or of a delegate
/// definition's invoke signature, expressed over the definition's own
/// type parameters).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionShape {
    pub params: Vec<ParamInfo>,
    pub return_type: TypeId,
}

/// The structural shape of a type.
///
/// Every variant is made of handles, so `TypeData` is `Copy` and the interner
/// can hash-cons it cheaply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeData {
    Intrinsic(IntrinsicKind),
    /// A generic type parameter, identified by ordinal within its owner's
    /// parameter list.
    TypeParameter { owner: ParamOwner, ordinal: u16 },
    /// Array with element type and rank (rank 1 = vector).
    Array { elem: TypeId, rank: u8 },
    Tuple(TupleListId),
    Pointer(TypeId),
    /// A constructed generic type: a definition applied to type arguments.
    Applied { def: DefId, args: TypeListId },
    /// A structural function type (anonymous function target shape).
    Function(FunctionShapeId),
    /// Optional/annotated wrapper around a payload type.
    Nullable(TypeId),
    /// Stand-in for a type parameter that inference never fixed. Carries the
    /// parameter's declared name so diagnostics can still display it.
    Placeholder(Atom),
}
