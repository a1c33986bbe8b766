//! The exact / lower-bound / upper-bound type-relation engine.
//!
//! Three mutually recursive procedures walk a (source, target) pair of type
//! shapes. The only productive step is hitting an unfixed method type
//! parameter in target position, which records `source` into that
//! parameter's bound set; every other rule is structural dispatch. Rules are
//! tried in a fixed order and the first match wins; a pair matching no rule
//! is an unproductive call, not an error.
//!
//! Variance handling: a type-argument position recurses with the enclosing
//! relation only when the position is declared covariant on an interface or
//! delegate definition *and* the source argument is a reference type; a
//! contravariant position flips lower/upper. Exact inference never varies.
//! Class and struct definitions are treated as invariant regardless of
//! declared variance.

use crate::arguments::Argument;
use crate::bounds::BoundKind;
use crate::driver::TypeArgInferrer;
use typeargs_types::limits::MAX_TYPE_RECURSION_DEPTH;
use typeargs_types::{
    DefId, DefKind, FunctionShape, ParamInfo, ParamOwner, TupleElement, TypeData, TypeId,
    Variance, all_interfaces, base_chain, instantiate, is_reference_type,
};

impl<'a> TypeArgInferrer<'a> {
    pub(crate) fn exact_inference(&mut self, source: TypeId, target: TypeId) {
        self.exact_at(source, target, 0);
    }

    pub(crate) fn lower_bound_inference(&mut self, source: TypeId, target: TypeId) {
        self.lower_at(source, target, 0);
    }

    pub(crate) fn upper_bound_inference(&mut self, source: TypeId, target: TypeId) {
        self.upper_at(source, target, 0);
    }

    fn infer_kind_at(&mut self, kind: BoundKind, source: TypeId, target: TypeId, depth: usize) {
        match kind {
            BoundKind::Exact => self.exact_at(source, target, depth),
            BoundKind::Lower => self.lower_at(source, target, depth),
            BoundKind::Upper => self.upper_at(source, target, depth),
        }
    }

    // =========================================================================
    // Exact inference
    // =========================================================================

    fn exact_at(&mut self, source: TypeId, target: TypeId, depth: usize) {
        if depth > MAX_TYPE_RECURSION_DEPTH {
            return;
        }
        let interner = self.interner();
        let source_data = interner.lookup(source);
        let target_data = interner.lookup(target);

        // Wrapper unwrap.
        if let (TypeData::Nullable(s), TypeData::Nullable(t)) = (source_data, target_data) {
            return self.exact_at(s, t, depth + 1);
        }

        // Unfixed type parameter in target position: the productive case.
        if self.try_record_bound(target_data, BoundKind::Exact, source) {
            return;
        }

        match (source_data, target_data) {
            (
                TypeData::Array { elem: se, rank: sr },
                TypeData::Array { elem: te, rank: tr },
            ) if sr == tr => self.exact_at(se, te, depth + 1),
            (TypeData::Tuple(sl), TypeData::Tuple(tl)) => {
                let selems = interner.tuple_list(sl);
                let telems = interner.tuple_list(tl);
                if selems.len() == telems.len() {
                    for (s, t) in selems.iter().zip(telems.iter()) {
                        self.exact_at(s.ty, t.ty, depth + 1);
                    }
                }
            }
            (
                TypeData::Applied { def: sd, args: sa },
                TypeData::Applied { def: td, args: ta },
            ) if sd == td => {
                let source_args = interner.type_list(sa);
                let target_args = interner.type_list(ta);
                // Exact inference never varies.
                for (&s, &t) in source_args.iter().zip(target_args.iter()) {
                    self.exact_at(s, t, depth + 1);
                }
            }
            (TypeData::Pointer(sp), TypeData::Pointer(tp)) => self.exact_at(sp, tp, depth + 1),
            _ => {}
        }
    }

    // =========================================================================
    // Lower-bound inference
    // =========================================================================

    fn lower_at(&mut self, source: TypeId, target: TypeId, depth: usize) {
        if depth > MAX_TYPE_RECURSION_DEPTH {
            return;
        }
        let interner = self.interner();
        let source_data = interner.lookup(source);
        let target_data = interner.lookup(target);

        if let (TypeData::Nullable(s), TypeData::Nullable(t)) = (source_data, target_data) {
            return self.lower_at(s, t, depth + 1);
        }

        if self.try_record_bound(target_data, BoundKind::Lower, source) {
            return;
        }

        if let TypeData::Array { elem, rank } = source_data {
            if self.array_target_inference(BoundKind::Lower, elem, rank, target_data, depth) {
                return;
            }
        }

        match (source_data, target_data) {
            (TypeData::Tuple(sl), TypeData::Tuple(tl)) => {
                let selems = interner.tuple_list(sl);
                let telems = interner.tuple_list(tl);
                if selems.len() == telems.len() {
                    for (s, t) in selems.iter().zip(telems.iter()) {
                        self.lower_at(s.ty, t.ty, depth + 1);
                    }
                }
            }
            (
                TypeData::Applied { def: sd, args: sa },
                TypeData::Applied { def: td, args: ta },
            ) if sd == td => {
                let source_args = interner.type_list(sa);
                let target_args = interner.type_list(ta);
                self.variance_recurse(BoundKind::Lower, sd, &source_args, &target_args, depth);
            }
            (_, TypeData::Applied { def: td, .. }) => {
                if interner.def(td).kind == DefKind::Class {
                    // Class inheritance never varies: exact on the matching
                    // ancestor's type arguments.
                    self.base_chain_inference(source, target, td, depth);
                } else if interner.def(td).kind.honors_variance() {
                    self.unique_interface_inference(BoundKind::Lower, source, target, td, depth);
                }
            }
            _ => {}
        }
    }

    // =========================================================================
    // Upper-bound inference
    // =========================================================================

    fn upper_at(&mut self, source: TypeId, target: TypeId, depth: usize) {
        if depth > MAX_TYPE_RECURSION_DEPTH {
            return;
        }
        let interner = self.interner();
        let source_data = interner.lookup(source);
        let target_data = interner.lookup(target);

        if let (TypeData::Nullable(s), TypeData::Nullable(t)) = (source_data, target_data) {
            return self.upper_at(s, t, depth + 1);
        }

        if self.try_record_bound(target_data, BoundKind::Upper, source) {
            return;
        }

        if let TypeData::Array { elem, rank } = source_data {
            if self.array_target_inference(BoundKind::Upper, elem, rank, target_data, depth) {
                return;
            }
        }

        match (source_data, target_data) {
            (
                TypeData::Applied { def: sd, args: sa },
                TypeData::Applied { def: td, args: ta },
            ) if sd == td => {
                let source_args = interner.type_list(sa);
                let target_args = interner.type_list(ta);
                self.variance_recurse(BoundKind::Upper, sd, &source_args, &target_args, depth);
            }
            (TypeData::Applied { def: sd, .. }, _) => {
                if interner.def(sd).kind == DefKind::Class {
                    // Walk the target's base chain for an ancestor sharing the
                    // source's definition.
                    self.base_chain_inference_upper(source, target, sd, depth);
                } else if interner.def(sd).kind.honors_variance() {
                    self.unique_interface_inference(BoundKind::Upper, source, target, sd, depth);
                }
            }
            _ => {}
        }
    }

    // =========================================================================
    // Shared structural helpers
    // =========================================================================

    /// Records `source` when the target shape is an unfixed method type
    /// parameter. A fixed parameter is an ordinary concrete type and records
    /// nothing.
    fn try_record_bound(&mut self, target: TypeData, kind: BoundKind, source: TypeId) -> bool {
        if let TypeData::TypeParameter {
            owner: ParamOwner::Method,
            ordinal,
        } = target
        {
            let index = ordinal as usize;
            if index < self.bounds.len() && !self.bounds.is_fixed(index) {
                self.bounds.record(self.interner(), index, kind, source);
                return true;
            }
        }
        false
    }

    /// Array-source rules for lower/upper inference: array vs array of equal
    /// rank, and rank-1 array vs enumerable-like interface of the element
    /// type. Value-typed elements cannot vary, so they force exact recursion.
    fn array_target_inference(
        &mut self,
        kind: BoundKind,
        source_elem: TypeId,
        source_rank: u8,
        target_data: TypeData,
        depth: usize,
    ) -> bool {
        let interner = self.interner();
        let target_elem = match target_data {
            TypeData::Array { elem, rank } if rank == source_rank => Some(elem),
            // The enumerable-family shortcut exists only with the array as
            // the assignment source, so only lower-bound inference takes it.
            TypeData::Applied { def, args }
                if source_rank == 1 && kind == BoundKind::Lower =>
            {
                let def_data = interner.def(def);
                if def_data.array_interface && def_data.arity() == 1 {
                    Some(interner.type_list(args)[0])
                } else {
                    None
                }
            }
            _ => None,
        };
        let Some(target_elem) = target_elem else {
            return false;
        };
        if is_reference_type(interner, source_elem) {
            self.infer_kind_at(kind, source_elem, target_elem, depth + 1);
        } else {
            self.exact_at(source_elem, target_elem, depth + 1);
        }
        true
    }

    /// Type-argument recursion for two constructions of the same definition,
    /// choosing the relation per position from the declared variance, the
    /// calling kind, and the source argument's reference-ness.
    fn variance_recurse(
        &mut self,
        kind: BoundKind,
        def: DefId,
        source_args: &[TypeId],
        target_args: &[TypeId],
        depth: usize,
    ) {
        let def_data = self.interner().def(def);
        let honors_variance = def_data.kind.honors_variance();
        for (position, (&s, &t)) in source_args.iter().zip(target_args.iter()).enumerate() {
            let variance = def_data.variances[position];
            if !honors_variance
                || variance == Variance::Invariant
                || !is_reference_type(self.interner(), s)
            {
                self.exact_at(s, t, depth + 1);
                continue;
            }
            match variance {
                Variance::Covariant => self.infer_kind_at(kind, s, t, depth + 1),
                Variance::Contravariant => {
                    let flipped = match kind {
                        BoundKind::Lower => BoundKind::Upper,
                        BoundKind::Upper => BoundKind::Lower,
                        BoundKind::Exact => BoundKind::Exact,
                    };
                    self.infer_kind_at(flipped, s, t, depth + 1);
                }
                Variance::Invariant => unreachable!("invariant handled above"),
            }
        }
    }

    /// Lower-bound rule 6: the source's base-class chain may contain an
    /// ancestor constructed from the target's definition.
    fn base_chain_inference(&mut self, source: TypeId, target: TypeId, target_def: DefId, depth: usize) {
        let interner = self.interner();
        let TypeData::Applied { args: ta, .. } = interner.lookup(target) else {
            return;
        };
        for ancestor in base_chain(interner, source) {
            if let TypeData::Applied { def, args } = interner.lookup(ancestor) {
                if def == target_def {
                    let ancestor_args = interner.type_list(args);
                    let target_args = interner.type_list(ta);
                    for (&s, &t) in ancestor_args.iter().zip(target_args.iter()) {
                        self.exact_at(s, t, depth + 1);
                    }
                    return;
                }
            }
        }
    }

    /// Upper-bound rule 6: the target's base-class chain may contain an
    /// ancestor constructed from the source's definition.
    fn base_chain_inference_upper(
        &mut self,
        source: TypeId,
        target: TypeId,
        source_def: DefId,
        depth: usize,
    ) {
        let interner = self.interner();
        let TypeData::Applied { args: sa, .. } = interner.lookup(source) else {
            return;
        };
        for ancestor in base_chain(interner, target) {
            if let TypeData::Applied { def, args } = interner.lookup(ancestor) {
                if def == source_def {
                    let source_args = interner.type_list(sa);
                    let ancestor_args = interner.type_list(args);
                    for (&s, &t) in source_args.iter().zip(ancestor_args.iter()) {
                        self.exact_at(s, t, depth + 1);
                    }
                    return;
                }
            }
        }
    }

    /// Rule 7: a unique implemented interface sharing the other side's
    /// definition drives variance-aware recursion. Zero or several matches
    /// make the inference silently unproductive; ambiguity is not an error.
    fn unique_interface_inference(
        &mut self,
        kind: BoundKind,
        source: TypeId,
        target: TypeId,
        shared_def: DefId,
        depth: usize,
    ) {
        let interner = self.interner();
        let (search_root, fixed_side) = match kind {
            BoundKind::Lower => (source, target),
            BoundKind::Upper => (target, source),
            BoundKind::Exact => return,
        };
        let mut matched = None;
        for iface in all_interfaces(interner, search_root) {
            if let TypeData::Applied { def, .. } = interner.lookup(iface) {
                if def == shared_def {
                    if matched.is_some() {
                        // More than one construction of the definition.
                        return;
                    }
                    matched = Some(iface);
                }
            }
        }
        let Some(matched) = matched else {
            return;
        };
        let (source_ty, target_ty) = match kind {
            BoundKind::Lower => (matched, fixed_side),
            BoundKind::Upper => (fixed_side, matched),
            BoundKind::Exact => unreachable!(),
        };
        let TypeData::Applied { args: sa, .. } = interner.lookup(source_ty) else {
            return;
        };
        let TypeData::Applied { args: ta, .. } = interner.lookup(target_ty) else {
            return;
        };
        let source_args = interner.type_list(sa);
        let target_args = interner.type_list(ta);
        self.variance_recurse(kind, shared_def, &source_args, &target_args, depth);
    }

    // =========================================================================
    // Function-type and tuple-target queries
    // =========================================================================

    /// The invocable signature of a function-typed formal: either a
    /// structural function type or a delegate construction's instantiated
    /// invoke signature.
    pub(crate) fn function_signature(&self, ty: TypeId) -> Option<FunctionShape> {
        let interner = self.interner();
        match interner.lookup(ty) {
            TypeData::Function(shape_id) => Some(interner.function_shape(shape_id)),
            TypeData::Applied { def, args } => {
                let def_data = interner.def(def);
                let shape_id = def_data.invoke?;
                let template = interner.function_shape(shape_id);
                let args = interner.type_list(args);
                let params: Vec<ParamInfo> = template
                    .params
                    .into_iter()
                    .map(|p| ParamInfo {
                        ty: instantiate(interner, p.ty, &args),
                        ref_kind: p.ref_kind,
                    })
                    .collect();
                Some(FunctionShape {
                    params,
                    return_type: instantiate(interner, template.return_type, &args),
                })
            }
            _ => None,
        }
    }

    /// Tuple-compatible targets for tuple-literal decomposition: a tuple
    /// type, possibly behind the optional wrapper.
    pub(crate) fn tuple_target_elements(&self, ty: TypeId) -> Option<Vec<TupleElement>> {
        let interner = self.interner();
        let data = match interner.lookup(ty) {
            TypeData::Nullable(inner) => interner.lookup(inner),
            other => other,
        };
        match data {
            TypeData::Tuple(list) => Some(interner.tuple_list(list)),
            _ => None,
        }
    }

    // =========================================================================
    // Phase-1 argument-level dispatch
    // =========================================================================

    /// One explicit inference per (argument, formal) pair: tuple literals
    /// decompose recursively, explicitly-typed lambdas contribute exact
    /// parameter-type inferences, typed expressions feed the relation engine
    /// directly.
    pub(crate) fn make_explicit_argument_inference(
        &mut self,
        arg: &Argument,
        formal: TypeId,
        kind: BoundKind,
    ) {
        match arg {
            Argument::TupleLiteral { elements, fallback } => {
                if let Some(target_elems) = self.tuple_target_elements(formal) {
                    if target_elems.len() == elements.len() {
                        for (element, target) in elements.iter().zip(target_elems.iter()) {
                            self.make_explicit_argument_inference(element, target.ty, kind);
                        }
                        return;
                    }
                }
                if let Some(ty) = fallback {
                    self.infer_kind_at(kind, *ty, formal, 0);
                }
            }
            Argument::Lambda(lambda) => {
                let Some(param_types) = &lambda.explicit_param_types else {
                    return;
                };
                let Some(sig) = self.function_signature(formal) else {
                    return;
                };
                // Arity-limited: a mismatch just yields fewer bounds.
                let count = param_types.len().min(sig.params.len());
                for i in 0..count {
                    self.exact_inference(param_types[i], sig.params[i].ty);
                }
            }
            Argument::Typed(ty) => self.infer_kind_at(kind, *ty, formal, 0),
            Argument::OverloadSet(_) | Argument::Untyped => {}
        }
    }
}

#[cfg(test)]
#[path = "tests/relate_tests.rs"]
mod tests;
