//! Hierarchy queries: instantiation, base-class chains, interface sets.
//!
//! Generic definitions store their base class and implemented interfaces as
//! *templates* over their own type parameters. Queries on a constructed type
//! substitute the construction's arguments into those templates on demand.

use crate::intern::TypeInterner;
use crate::limits::MAX_HIERARCHY_DEPTH;
use crate::types::{ParamInfo, ParamOwner, TupleElement, TypeData, TypeId};

/// Substitutes `args` for definition-owned type parameters in `ty`.
///
/// Method-owned parameters are left untouched; they belong to the inference
/// run, not to the definition being instantiated.
pub fn instantiate(interner: &TypeInterner, ty: TypeId, args: &[TypeId]) -> TypeId {
    match interner.lookup(ty) {
        TypeData::TypeParameter {
            owner: ParamOwner::Definition,
            ordinal,
        } => args.get(ordinal as usize).copied().unwrap_or(TypeId::ERROR),
        TypeData::TypeParameter { .. }
        | TypeData::Intrinsic(_)
        | TypeData::Placeholder(_) => ty,
        TypeData::Array { elem, rank } => {
            interner.array(instantiate(interner, elem, args), rank)
        }
        TypeData::Tuple(list) => {
            let elements: Vec<TupleElement> = interner
                .tuple_list(list)
                .into_iter()
                .map(|e| TupleElement {
                    ty: instantiate(interner, e.ty, args),
                    name: e.name,
                })
                .collect();
            interner.tuple(elements)
        }
        TypeData::Pointer(pointee) => interner.pointer(instantiate(interner, pointee, args)),
        TypeData::Nullable(inner) => interner.nullable(instantiate(interner, inner, args)),
        TypeData::Applied { def, args: list } => {
            let inst: Vec<TypeId> = interner
                .type_list(list)
                .into_iter()
                .map(|a| instantiate(interner, a, args))
                .collect();
            interner.applied(def, &inst)
        }
        TypeData::Function(shape_id) => {
            let shape = interner.function_shape(shape_id);
            let params: Vec<ParamInfo> = shape
                .params
                .into_iter()
                .map(|p| ParamInfo {
                    ty: instantiate(interner, p.ty, args),
                    ref_kind: p.ref_kind,
                })
                .collect();
            interner.function(params, instantiate(interner, shape.return_type, args))
        }
    }
}

/// The immediate base class of a type, instantiated, if it has one.
pub fn base_type(interner: &TypeInterner, ty: TypeId) -> Option<TypeId> {
    match interner.lookup(ty) {
        TypeData::Applied { def, args } => {
            let def_data = interner.def(def);
            let args = interner.type_list(args);
            match def_data.base {
                Some(template) => Some(instantiate(interner, template, &args)),
                // Every class/struct/delegate ultimately derives from object;
                // interfaces have no base class.
                None => match def_data.kind {
                    crate::def::DefKind::Interface => None,
                    _ => Some(TypeId::OBJECT),
                },
            }
        }
        TypeData::Intrinsic(_) if ty != TypeId::OBJECT && ty != TypeId::ERROR => {
            Some(TypeId::OBJECT)
        }
        TypeData::Array { .. } | TypeData::Tuple(_) | TypeData::Function(_) => Some(TypeId::OBJECT),
        _ => None,
    }
}

/// The transitive base-class chain of `ty`, nearest first, excluding `ty`
/// itself. Bounded by `MAX_HIERARCHY_DEPTH` to tolerate misdeclared cycles.
pub fn base_chain(interner: &TypeInterner, ty: TypeId) -> Vec<TypeId> {
    let mut chain = Vec::new();
    let mut current = ty;
    while let Some(base) = base_type(interner, current) {
        if chain.len() >= MAX_HIERARCHY_DEPTH || chain.contains(&base) {
            break;
        }
        chain.push(base);
        current = base;
    }
    chain
}

/// The full transitive set of interfaces implemented by `ty`, instantiated
/// and deduplicated, in declaration-then-inheritance order.
pub fn all_interfaces(interner: &TypeInterner, ty: TypeId) -> Vec<TypeId> {
    let mut out = Vec::new();
    collect_interfaces(interner, ty, &mut out, 0);
    for base in base_chain(interner, ty) {
        collect_interfaces(interner, base, &mut out, 0);
    }
    out
}

fn collect_interfaces(interner: &TypeInterner, ty: TypeId, out: &mut Vec<TypeId>, depth: usize) {
    if depth >= MAX_HIERARCHY_DEPTH {
        return;
    }
    if let TypeData::Applied { def, args } = interner.lookup(ty) {
        let def_data = interner.def(def);
        let args = interner.type_list(args);
        for template in &def_data.interfaces {
            let iface = instantiate(interner, *template, &args);
            if !out.contains(&iface) {
                out.push(iface);
                collect_interfaces(interner, iface, out, depth + 1);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/hierarchy_tests.rs"]
mod tests;
