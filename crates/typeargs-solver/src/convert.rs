//! A standard implicit-conversion oracle.
//!
//! The fixing resolver only asks one question of its host: does an implicit
//! conversion exist from one type to another. [`StandardConversions`] answers
//! it for the built-in shapes: identity, numeric widening, boxing to
//! `object`/`dynamic`, optional-wrapper lifting, array covariance, the
//! rank-1-array-to-element-interface conversion, variance conversion between
//! constructions of one definition, and inheritance or interface
//! implementation. Hosts with richer type systems supply their own oracle.

use crate::collab::ConversionOracle;
use typeargs_types::limits::MAX_TYPE_RECURSION_DEPTH;
use typeargs_types::{
    DefId, IntrinsicKind, TypeData, TypeInterner, TypeId, Variance, all_interfaces, base_chain,
    equivalent, is_reference_type,
};

pub struct StandardConversions<'a> {
    interner: &'a TypeInterner,
}

impl<'a> StandardConversions<'a> {
    pub fn new(interner: &'a TypeInterner) -> Self {
        Self { interner }
    }

    fn conv_at(&self, from: TypeId, to: TypeId, depth: usize) -> bool {
        if depth > MAX_TYPE_RECURSION_DEPTH {
            return false;
        }
        let interner = self.interner;
        if equivalent(interner, from, to) {
            return true;
        }
        let from_data = interner.lookup(from);
        let to_data = interner.lookup(to);

        // Boxing and reference conversion to the top types. Pointers and void
        // have no conversions at all.
        if to == TypeId::OBJECT || to == TypeId::DYNAMIC {
            return from != TypeId::VOID
                && from != TypeId::ERROR
                && !matches!(from_data, TypeData::Pointer(_));
        }

        // Optional-wrapper lifting: S -> T? and S? -> T? whenever S -> T.
        if let TypeData::Nullable(to_inner) = to_data {
            let from_inner = match from_data {
                TypeData::Nullable(inner) => inner,
                _ => from,
            };
            return self.conv_at(from_inner, to_inner, depth + 1);
        }

        match (from_data, to_data) {
            (TypeData::Intrinsic(f), TypeData::Intrinsic(t)) => numeric_widens(f, t),
            (
                TypeData::Array { elem: fe, rank: fr },
                TypeData::Array { elem: te, rank: tr },
            ) => {
                // Array covariance holds only between reference element types.
                fr == tr
                    && is_reference_type(interner, fe)
                    && is_reference_type(interner, te)
                    && self.conv_at(fe, te, depth + 1)
            }
            (TypeData::Array { elem, rank: 1 }, TypeData::Applied { def, args }) => {
                let def_data = interner.def(def);
                if def_data.array_interface && def_data.arity() == 1 {
                    let target_elem = interner.type_list(args)[0];
                    equivalent(interner, elem, target_elem)
                        || (is_reference_type(interner, elem)
                            && self.conv_at(elem, target_elem, depth + 1))
                } else {
                    false
                }
            }
            (
                TypeData::Applied { def: fd, args: fa },
                TypeData::Applied { def: td, args: ta },
            ) if fd == td => {
                let from_args = interner.type_list(fa);
                let to_args = interner.type_list(ta);
                self.variance_convertible(fd, &from_args, &to_args, depth)
            }
            _ => self.hierarchy_convertible(from, to, depth),
        }
    }

    /// Variance conversion between two constructions of one definition.
    fn variance_convertible(
        &self,
        def: DefId,
        from_args: &[TypeId],
        to_args: &[TypeId],
        depth: usize,
    ) -> bool {
        let interner = self.interner;
        let def_data = interner.def(def);
        let honors_variance = def_data.kind.honors_variance();
        from_args
            .iter()
            .zip(to_args.iter())
            .enumerate()
            .all(|(position, (&f, &t))| {
                if equivalent(interner, f, t) {
                    return true;
                }
                if !honors_variance {
                    return false;
                }
                match def_data.variances[position] {
                    Variance::Invariant => false,
                    Variance::Covariant => {
                        is_reference_type(interner, f) && self.conv_at(f, t, depth + 1)
                    }
                    Variance::Contravariant => {
                        is_reference_type(interner, t) && self.conv_at(t, f, depth + 1)
                    }
                }
            })
    }

    /// Inheritance and interface implementation: some ancestor or implemented
    /// interface of `from` converts to `to` by identity or variance.
    fn hierarchy_convertible(&self, from: TypeId, to: TypeId, depth: usize) -> bool {
        let interner = self.interner;
        let to_data = interner.lookup(to);
        let candidates = base_chain(interner, from)
            .into_iter()
            .chain(all_interfaces(interner, from));
        for candidate in candidates {
            if equivalent(interner, candidate, to) {
                return true;
            }
            if let (
                TypeData::Applied { def: cd, args: ca },
                TypeData::Applied { def: td, args: ta },
            ) = (interner.lookup(candidate), to_data)
            {
                if cd == td {
                    let candidate_args = interner.type_list(ca);
                    let to_args = interner.type_list(ta);
                    if self.variance_convertible(cd, &candidate_args, &to_args, depth) {
                        return true;
                    }
                }
            }
        }
        false
    }
}

impl ConversionOracle for StandardConversions<'_> {
    fn has_implicit_conversion(&self, from: TypeId, to: TypeId) -> bool {
        self.conv_at(from, to, 0)
    }
}

/// The implicit numeric widening table, restricted to the modeled intrinsics.
fn numeric_widens(from: IntrinsicKind, to: IntrinsicKind) -> bool {
    use IntrinsicKind::*;
    match from {
        Byte => matches!(to, Short | Int | UInt | Long | ULong | Float | Double | Decimal),
        Short => matches!(to, Int | Long | Float | Double | Decimal),
        Char => matches!(to, Int | UInt | Long | ULong | Float | Double | Decimal),
        Int => matches!(to, Long | Float | Double | Decimal),
        UInt => matches!(to, Long | ULong | Float | Double | Decimal),
        Long => matches!(to, Float | Double | Decimal),
        ULong => matches!(to, Float | Double | Decimal),
        Float => matches!(to, Double),
        _ => false,
    }
}

#[cfg(test)]
#[path = "tests/convert_tests.rs"]
mod tests;
