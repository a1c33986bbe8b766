//! Reference/value classification of types.
//!
//! The relation engine needs to know whether a type argument is a reference
//! type: only reference types may vary under co/contravariant positions, and
//! array element inference forces exact recursion for value-typed elements.

use crate::def::DefKind;
use crate::intern::TypeInterner;
use crate::types::{IntrinsicKind, TypeData, TypeId};
use bitflags::bitflags;

bitflags! {
    /// Classification flags for a type. `REFERENCE` and `VALUE` are mutually
    /// exclusive; a type may carry neither (type parameters, pointers,
    /// placeholders, error).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TypeFlags: u8 {
        const REFERENCE = 1 << 0;
        const VALUE = 1 << 1;
    }
}

pub fn type_flags(interner: &TypeInterner, ty: TypeId) -> TypeFlags {
    match interner.lookup(ty) {
        TypeData::Intrinsic(kind) => match kind {
            IntrinsicKind::Object | IntrinsicKind::Dynamic | IntrinsicKind::String => {
                TypeFlags::REFERENCE
            }
            IntrinsicKind::Error | IntrinsicKind::Void => TypeFlags::empty(),
            _ => TypeFlags::VALUE,
        },
        // An unconstrained type parameter is not known to be a reference
        // type, which forces exact inference in variance positions.
        TypeData::TypeParameter { .. } | TypeData::Placeholder(_) => TypeFlags::empty(),
        TypeData::Array { .. } | TypeData::Function(_) => TypeFlags::REFERENCE,
        TypeData::Tuple(_) | TypeData::Nullable(_) => TypeFlags::VALUE,
        TypeData::Pointer(_) => TypeFlags::empty(),
        TypeData::Applied { def, .. } => match interner.def(def).kind {
            DefKind::Struct => TypeFlags::VALUE,
            DefKind::Class | DefKind::Interface | DefKind::Delegate => TypeFlags::REFERENCE,
        },
    }
}

pub fn is_reference_type(interner: &TypeInterner, ty: TypeId) -> bool {
    type_flags(interner, ty).contains(TypeFlags::REFERENCE)
}

pub fn is_value_type(interner: &TypeInterner, ty: TypeId) -> bool {
    type_flags(interner, ty).contains(TypeFlags::VALUE)
}

#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod tests;
