//! Occurrence scans over type shapes.
//!
//! Shared by the dependency tracker (which parameters occur in a signature's
//! input/output positions), the output-type propagator (is there anything
//! left to infer), and the first-argument entry (which parameters must fix).

use crate::bounds::BoundStore;
use fixedbitset::FixedBitSet;
use typeargs_types::limits::MAX_TYPE_RECURSION_DEPTH;
use typeargs_types::{ParamInfo, ParamOwner, TupleElement, TypeData, TypeInterner, TypeId};

/// Sets the bit for every method type parameter occurring in `ty`.
pub fn collect_method_params(interner: &TypeInterner, ty: TypeId, mask: &mut FixedBitSet) {
    collect_inner(interner, ty, mask, 0);
}

fn collect_inner(interner: &TypeInterner, ty: TypeId, mask: &mut FixedBitSet, depth: usize) {
    if depth > MAX_TYPE_RECURSION_DEPTH {
        return;
    }
    match interner.lookup(ty) {
        TypeData::TypeParameter {
            owner: ParamOwner::Method,
            ordinal,
        } => {
            if (ordinal as usize) < mask.len() {
                mask.insert(ordinal as usize);
            }
        }
        TypeData::TypeParameter { .. }
        | TypeData::Intrinsic(_)
        | TypeData::Placeholder(_) => {}
        TypeData::Array { elem, .. } => collect_inner(interner, elem, mask, depth + 1),
        TypeData::Tuple(list) => {
            for e in interner.tuple_list(list) {
                collect_inner(interner, e.ty, mask, depth + 1);
            }
        }
        TypeData::Pointer(pointee) => collect_inner(interner, pointee, mask, depth + 1),
        TypeData::Nullable(inner) => collect_inner(interner, inner, mask, depth + 1),
        TypeData::Applied { args, .. } => {
            for arg in interner.type_list(args) {
                collect_inner(interner, arg, mask, depth + 1);
            }
        }
        TypeData::Function(shape_id) => {
            let shape = interner.function_shape(shape_id);
            for p in &shape.params {
                collect_inner(interner, p.ty, mask, depth + 1);
            }
            collect_inner(interner, shape.return_type, mask, depth + 1);
        }
    }
}

/// Whether any *unfixed* method type parameter occurs in `ty`.
pub fn contains_unfixed_param(interner: &TypeInterner, ty: TypeId, bounds: &BoundStore) -> bool {
    let mut mask = FixedBitSet::with_capacity(bounds.len());
    collect_method_params(interner, ty, &mut mask);
    mask.ones().any(|i| !bounds.is_fixed(i))
}

/// Replaces every *fixed* method type parameter in `ty` with its fixed
/// result. Unfixed parameters are left in place.
pub fn substitute_fixed(interner: &TypeInterner, ty: TypeId, bounds: &BoundStore) -> TypeId {
    substitute_inner(interner, ty, bounds, 0)
}

fn substitute_inner(
    interner: &TypeInterner,
    ty: TypeId,
    bounds: &BoundStore,
    depth: usize,
) -> TypeId {
    if depth > MAX_TYPE_RECURSION_DEPTH {
        return ty;
    }
    match interner.lookup(ty) {
        TypeData::TypeParameter {
            owner: ParamOwner::Method,
            ordinal,
        } => {
            let index = ordinal as usize;
            if index < bounds.len() {
                bounds.fixed(index).unwrap_or(ty)
            } else {
                ty
            }
        }
        TypeData::TypeParameter { .. }
        | TypeData::Intrinsic(_)
        | TypeData::Placeholder(_) => ty,
        TypeData::Array { elem, rank } => {
            interner.array(substitute_inner(interner, elem, bounds, depth + 1), rank)
        }
        TypeData::Tuple(list) => {
            let elements: Vec<TupleElement> = interner
                .tuple_list(list)
                .into_iter()
                .map(|e| TupleElement {
                    ty: substitute_inner(interner, e.ty, bounds, depth + 1),
                    name: e.name,
                })
                .collect();
            interner.tuple(elements)
        }
        TypeData::Pointer(pointee) => {
            interner.pointer(substitute_inner(interner, pointee, bounds, depth + 1))
        }
        TypeData::Nullable(inner) => {
            interner.nullable(substitute_inner(interner, inner, bounds, depth + 1))
        }
        TypeData::Applied { def, args } => {
            let inst: Vec<TypeId> = interner
                .type_list(args)
                .into_iter()
                .map(|a| substitute_inner(interner, a, bounds, depth + 1))
                .collect();
            interner.applied(def, &inst)
        }
        TypeData::Function(shape_id) => {
            let shape = interner.function_shape(shape_id);
            let params: Vec<ParamInfo> = shape
                .params
                .into_iter()
                .map(|p| ParamInfo {
                    ty: substitute_inner(interner, p.ty, bounds, depth + 1),
                    ref_kind: p.ref_kind,
                })
                .collect();
            interner.function(
                params,
                substitute_inner(interner, shape.return_type, bounds, depth + 1),
            )
        }
    }
}

#[cfg(test)]
#[path = "tests/occurrence_tests.rs"]
mod tests;
