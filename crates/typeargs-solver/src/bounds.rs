//! Per-parameter bound sets and fixed results.
//!
//! The store is an ordinal-indexed arena: one slot per method type parameter,
//! each holding three bound sets (exact, lower, upper) and an optional fixed
//! result. Recording into a set deduplicates with the annotation-insensitive
//! equivalence from `typeargs-types`; merging of near-duplicates happens
//! later, at fixing time, when the sets are combined into candidates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;
use typeargs_types::{Atom, TypeInterner, TypeId, equivalent};

/// Which relation a bound asserts between a source type and the parameter's
/// eventual fixed type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundKind {
    /// The parameter must equal the bound.
    Exact,
    /// The bound is assignable to the parameter (parameter >= bound).
    Lower,
    /// The parameter is assignable to the bound (parameter <= bound).
    Upper,
}

#[derive(Debug, Default, Clone)]
struct ParamBounds {
    exact: SmallVec<[TypeId; 2]>,
    lower: SmallVec<[TypeId; 2]>,
    upper: SmallVec<[TypeId; 2]>,
    fixed: Option<TypeId>,
}

/// Bound sets and fixed results for every method type parameter of one
/// inference run.
#[derive(Debug, Default)]
pub struct BoundStore {
    params: Vec<ParamBounds>,
}

impl BoundStore {
    pub fn new(param_count: usize) -> Self {
        Self {
            params: vec![ParamBounds::default(); param_count],
        }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Adds `ty` to the named bound set. No-op if an equivalent type is
    /// already present. The parameter must be unfixed; recording a bound on a
    /// fixed parameter is a caller bug.
    pub fn record(&mut self, interner: &TypeInterner, index: usize, kind: BoundKind, ty: TypeId) {
        debug_assert!(
            self.params[index].fixed.is_none(),
            "bound recorded for already-fixed type parameter {index}"
        );
        // Error and void carry no inference information.
        if ty == TypeId::ERROR || ty == TypeId::VOID {
            return;
        }
        let set = match kind {
            BoundKind::Exact => &mut self.params[index].exact,
            BoundKind::Lower => &mut self.params[index].lower,
            BoundKind::Upper => &mut self.params[index].upper,
        };
        if set.iter().any(|&existing| equivalent(interner, existing, ty)) {
            return;
        }
        trace!(param = index, ?kind, ty = ty.0, "recorded bound");
        set.push(ty);
    }

    pub fn bounds(&self, index: usize, kind: BoundKind) -> &[TypeId] {
        match kind {
            BoundKind::Exact => &self.params[index].exact,
            BoundKind::Lower => &self.params[index].lower,
            BoundKind::Upper => &self.params[index].upper,
        }
    }

    pub fn has_any_bound(&self, index: usize) -> bool {
        let p = &self.params[index];
        !(p.exact.is_empty() && p.lower.is_empty() && p.upper.is_empty())
    }

    pub fn is_fixed(&self, index: usize) -> bool {
        self.params[index].fixed.is_some()
    }

    pub fn fixed(&self, index: usize) -> Option<TypeId> {
        self.params[index].fixed
    }

    pub fn all_fixed(&self) -> bool {
        self.params.iter().all(|p| p.fixed.is_some())
    }

    pub fn unfixed_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.params
            .iter()
            .enumerate()
            .filter(|(_, p)| p.fixed.is_none())
            .map(|(i, _)| i)
    }

    /// Sets the fixed result for a parameter. Once set it is permanent for
    /// the remainder of the run.
    pub fn fix(&mut self, index: usize, ty: TypeId) {
        let param = &mut self.params[index];
        debug_assert!(param.fixed.is_none(), "type parameter {index} fixed twice");
        debug_assert!(
            !(param.exact.is_empty() && param.lower.is_empty() && param.upper.is_empty()),
            "type parameter {index} fixed without bounds"
        );
        param.fixed = Some(ty);
    }

    /// One type per parameter, fixed result or named placeholder, regardless
    /// of overall success.
    pub fn finalize(&self, interner: &TypeInterner, names: &[Atom]) -> Vec<TypeId> {
        debug_assert_eq!(names.len(), self.params.len());
        self.params
            .iter()
            .zip(names.iter())
            .map(|(p, &name)| match p.fixed {
                Some(ty) => ty,
                None => interner.intern(typeargs_types::TypeData::Placeholder(name)),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/bounds_tests.rs"]
mod tests;
