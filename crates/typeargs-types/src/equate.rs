//! Type equivalence and candidate merging.
//!
//! Bound sets deduplicate with an equivalence that ignores incidental
//! annotation differences: tuple element names are ignored, and the dynamic
//! marker compares equal to `object`. When two equivalent candidates meet
//! during fixing they are *merged*, not merely deduplicated: the dynamic
//! marker wins over plain `object`, and tuple element names are intersected
//! (kept where both sides agree, dropped where they differ).

use crate::intern::TypeInterner;
use crate::types::{TupleElement, TypeData, TypeId};

/// Structural equality up to incidental annotations.
pub fn equivalent(interner: &TypeInterner, a: TypeId, b: TypeId) -> bool {
    if a == b {
        return true;
    }
    match (interner.lookup(a), interner.lookup(b)) {
        // dynamic and object differ only in annotation.
        (TypeData::Intrinsic(ka), TypeData::Intrinsic(kb)) => {
            use crate::types::IntrinsicKind::{Dynamic, Object};
            matches!((ka, kb), (Object, Dynamic) | (Dynamic, Object))
        }
        (
            TypeData::Array { elem: ea, rank: ra },
            TypeData::Array { elem: eb, rank: rb },
        ) => ra == rb && equivalent(interner, ea, eb),
        (TypeData::Tuple(la), TypeData::Tuple(lb)) => {
            let ea = interner.tuple_list(la);
            let eb = interner.tuple_list(lb);
            ea.len() == eb.len()
                && ea
                    .iter()
                    .zip(eb.iter())
                    .all(|(x, y)| equivalent(interner, x.ty, y.ty))
        }
        (TypeData::Pointer(pa), TypeData::Pointer(pb)) => equivalent(interner, pa, pb),
        (TypeData::Nullable(ia), TypeData::Nullable(ib)) => equivalent(interner, ia, ib),
        (TypeData::Applied { def: da, args: la }, TypeData::Applied { def: db, args: lb }) => {
            if da != db {
                return false;
            }
            let aa = interner.type_list(la);
            let ab = interner.type_list(lb);
            aa.iter()
                .zip(ab.iter())
                .all(|(&x, &y)| equivalent(interner, x, y))
        }
        (TypeData::Function(sa), TypeData::Function(sb)) => {
            let fa = interner.function_shape(sa);
            let fb = interner.function_shape(sb);
            fa.params.len() == fb.params.len()
                && fa
                    .params
                    .iter()
                    .zip(fb.params.iter())
                    .all(|(x, y)| {
                        x.ref_kind == y.ref_kind && equivalent(interner, x.ty, y.ty)
                    })
                && equivalent(interner, fa.return_type, fb.return_type)
        }
        _ => false,
    }
}

/// Merges two equivalent types into their combined form.
///
/// Falls back to `a` when the types are not equivalent; callers are expected
/// to have checked [`equivalent`] first.
pub fn merge(interner: &TypeInterner, a: TypeId, b: TypeId) -> TypeId {
    if a == b {
        return a;
    }
    match (interner.lookup(a), interner.lookup(b)) {
        (TypeData::Intrinsic(_), TypeData::Intrinsic(_)) => {
            // Equivalent but unequal intrinsics are exactly {object, dynamic}.
            if a == TypeId::DYNAMIC || b == TypeId::DYNAMIC {
                TypeId::DYNAMIC
            } else {
                a
            }
        }
        (
            TypeData::Array { elem: ea, rank },
            TypeData::Array { elem: eb, .. },
        ) => interner.array(merge(interner, ea, eb), rank),
        (TypeData::Tuple(la), TypeData::Tuple(lb)) => {
            let ea = interner.tuple_list(la);
            let eb = interner.tuple_list(lb);
            let merged: Vec<TupleElement> = ea
                .iter()
                .zip(eb.iter())
                .map(|(x, y)| TupleElement {
                    ty: merge(interner, x.ty, y.ty),
                    name: if x.name == y.name { x.name } else { None },
                })
                .collect();
            interner.tuple(merged)
        }
        (TypeData::Pointer(pa), TypeData::Pointer(pb)) => {
            interner.pointer(merge(interner, pa, pb))
        }
        (TypeData::Nullable(ia), TypeData::Nullable(ib)) => {
            interner.nullable(merge(interner, ia, ib))
        }
        (TypeData::Applied { def, args: la }, TypeData::Applied { args: lb, .. }) => {
            let aa = interner.type_list(la);
            let ab = interner.type_list(lb);
            let merged: Vec<TypeId> = aa
                .iter()
                .zip(ab.iter())
                .map(|(&x, &y)| merge(interner, x, y))
                .collect();
            interner.applied(def, &merged)
        }
        (TypeData::Function(sa), TypeData::Function(sb)) => {
            let fa = interner.function_shape(sa);
            let fb = interner.function_shape(sb);
            let params = fa
                .params
                .iter()
                .zip(fb.params.iter())
                .map(|(x, y)| crate::types::ParamInfo {
                    ty: merge(interner, x.ty, y.ty),
                    ref_kind: x.ref_kind,
                })
                .collect();
            interner.function(params, merge(interner, fa.return_type, fb.return_type))
        }
        _ => a,
    }
}

#[cfg(test)]
#[path = "tests/equate_tests.rs"]
mod tests;
