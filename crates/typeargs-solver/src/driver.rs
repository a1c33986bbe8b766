//! Phase driver: orchestrates one type-argument inference run.
//!
//! Phase 1 collects bounds from the explicit arguments. Phase 2 loops:
//! output-type propagation, then fix every parameter nothing depends on,
//! then (only if that fixed nothing) fix every parameter something else
//! depends on, until every parameter is fixed or no progress is possible.
//! Each successful round fixes at least one parameter, so the loop runs at
//! most once per parameter.
//!
//! One [`TypeArgInferrer`] is the whole run: bound store, dependency matrix,
//! and the (argument, formal) pairing. It is constructed per invocation,
//! mutated in place by one caller, and discarded with the result; nothing is
//! shared across runs.

use crate::arguments::{Argument, FormalParam};
use crate::bounds::{BoundKind, BoundStore};
use crate::collab::InferenceHost;
use crate::dependency::DependencyMatrix;
use crate::occurrence::collect_method_params;
use fixedbitset::FixedBitSet;
use serde::Serialize;
use tracing::{debug, trace};
use typeargs_types::{Atom, TypeData, TypeId};

/// Terminal output of a run. `type_args` always has one entry per type
/// parameter; parameters that never fixed come back as named placeholders so
/// callers can still render a best-effort signature for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InferenceResult {
    pub success: bool,
    pub type_args: Vec<TypeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Unstarted,
    Phase1Done,
    Phase2Looping,
    Succeeded,
    Failed,
}

/// How a fixing round went.
enum RoundOutcome {
    /// At least one parameter fixed, none failed.
    Progress,
    /// Some selected parameter failed to fix.
    Failed,
    /// Nothing was eligible.
    NoneSelected,
}

/// One inference run. Owns all mutable state exclusively.
pub struct TypeArgInferrer<'a> {
    pub(crate) host: InferenceHost<'a>,
    pub(crate) type_params: &'a [Atom],
    pub(crate) formals: &'a [FormalParam],
    pub(crate) args: &'a [Argument],
    pub(crate) bounds: BoundStore,
    pub(crate) deps: Option<DependencyMatrix>,
    pub(crate) phase: Phase,
}

/// Infers type arguments for a generic call.
///
/// An empty formal-parameter list reports immediate failure without
/// constructing a run. If the argument list is shorter than the formal list,
/// only the overlapping prefix contributes bounds.
pub fn infer_type_arguments(
    host: InferenceHost<'_>,
    type_params: &[Atom],
    formals: &[FormalParam],
    args: &[Argument],
) -> InferenceResult {
    if formals.is_empty() {
        debug!("empty formal parameter list, inference fails immediately");
        return InferenceResult {
            success: false,
            type_args: placeholders(host, type_params),
        };
    }
    let mut inferrer = TypeArgInferrer::new(host, type_params, formals, args);
    inferrer.run()
}

/// Reduced one-shot entry for speculative applicability checks: a single
/// lower-bound inference from argument 0 into formal type 0, then a fixing
/// attempt on exactly the parameters occurring in formal type 0. Never loops
/// and never touches the dependency tracker.
pub fn infer_from_first_argument(
    host: InferenceHost<'_>,
    type_params: &[Atom],
    formals: &[FormalParam],
    args: &[Argument],
) -> InferenceResult {
    if formals.is_empty() || args.is_empty() {
        return InferenceResult {
            success: false,
            type_args: placeholders(host, type_params),
        };
    }
    let mut inferrer = TypeArgInferrer::new(host, type_params, formals, args);
    let success = inferrer.infer_first_argument();
    let type_args = inferrer.bounds.finalize(host.interner, type_params);
    InferenceResult { success, type_args }
}

fn placeholders(host: InferenceHost<'_>, type_params: &[Atom]) -> Vec<TypeId> {
    type_params
        .iter()
        .map(|&name| host.interner.intern(TypeData::Placeholder(name)))
        .collect()
}

impl<'a> TypeArgInferrer<'a> {
    pub fn new(
        host: InferenceHost<'a>,
        type_params: &'a [Atom],
        formals: &'a [FormalParam],
        args: &'a [Argument],
    ) -> Self {
        Self {
            host,
            type_params,
            formals,
            args,
            bounds: BoundStore::new(type_params.len()),
            deps: None,
            phase: Phase::Unstarted,
        }
    }

    pub(crate) fn interner(&self) -> &'a typeargs_types::TypeInterner {
        self.host.interner
    }

    /// The (argument, formal) pairs in order, truncated to the shorter list.
    fn pair_count(&self) -> usize {
        self.args.len().min(self.formals.len())
    }

    fn run(&mut self) -> InferenceResult {
        self.infer_phase_one();
        let success = self.infer_phase_two();
        self.phase = if success { Phase::Succeeded } else { Phase::Failed };
        debug!(success, "type argument inference complete");
        InferenceResult {
            success,
            type_args: self.bounds.finalize(self.interner(), self.type_params),
        }
    }

    // =========================================================================
    // Phase 1: explicit, argument-driven bound collection
    // =========================================================================

    fn infer_phase_one(&mut self) {
        debug_assert_eq!(self.phase, Phase::Unstarted);
        for i in 0..self.pair_count() {
            let formal = self.formals[i];
            // By-ref parameters and raw-pointer formals admit no variance.
            let kind = if formal.ref_kind.is_managed_reference()
                || matches!(self.interner().lookup(formal.ty), TypeData::Pointer(_))
            {
                BoundKind::Exact
            } else {
                BoundKind::Lower
            };
            trace!(arg = i, ?kind, "phase 1 argument inference");
            let arg = self.args[i].clone();
            self.make_explicit_argument_inference(&arg, formal.ty, kind);
        }
        self.phase = Phase::Phase1Done;
        debug!("phase 1 complete");
    }

    // =========================================================================
    // Phase 2: output propagation and fixing
    // =========================================================================

    fn infer_phase_two(&mut self) -> bool {
        debug_assert_eq!(self.phase, Phase::Phase1Done);
        self.phase = Phase::Phase2Looping;
        loop {
            if self.bounds.all_fixed() {
                return true;
            }
            self.make_output_inferences();
            match self.fix_nondependent_parameters() {
                RoundOutcome::Progress => continue,
                RoundOutcome::Failed => return false,
                RoundOutcome::NoneSelected => {}
            }
            match self.fix_dependent_parameters() {
                RoundOutcome::Progress => continue,
                RoundOutcome::Failed => return false,
                RoundOutcome::NoneSelected => {
                    debug!("no remaining parameter has a path to resolution");
                    return false;
                }
            }
        }
    }

    /// Fixes every unfixed parameter that has bounds and does not depend on
    /// any other unfixed parameter.
    fn fix_nondependent_parameters(&mut self) -> RoundOutcome {
        let selected: Vec<usize> = self
            .bounds
            .unfixed_indices()
            .filter(|&i| self.bounds.has_any_bound(i))
            .collect();
        let selected: Vec<usize> = selected
            .into_iter()
            .filter(|&i| !self.dependencies().depends_on_any(i))
            .collect();
        self.fix_selected(&selected, "non-dependent")
    }

    /// Fixes every unfixed parameter that has bounds and is depended upon by
    /// at least one other unfixed parameter.
    fn fix_dependent_parameters(&mut self) -> RoundOutcome {
        let selected: Vec<usize> = self
            .bounds
            .unfixed_indices()
            .filter(|&i| self.bounds.has_any_bound(i))
            .collect();
        let selected: Vec<usize> = selected
            .into_iter()
            .filter(|&i| self.dependencies().any_depends_on(i))
            .collect();
        self.fix_selected(&selected, "dependent")
    }

    fn fix_selected(&mut self, selected: &[usize], round: &'static str) -> RoundOutcome {
        if selected.is_empty() {
            return RoundOutcome::NoneSelected;
        }
        // All selected parameters are attempted even after a failure, to
        // maximize the information in the partial result.
        let mut any_failed = false;
        for &i in selected {
            match self.fix_parameter(i) {
                Ok(ty) => trace!(param = i, ty = ty.0, round, "parameter fixed"),
                Err(err) => {
                    debug!(param = i, ?err, round, "parameter failed to fix");
                    any_failed = true;
                }
            }
        }
        if any_failed {
            RoundOutcome::Failed
        } else {
            RoundOutcome::Progress
        }
    }

    // =========================================================================
    // Dependency tracking
    // =========================================================================

    /// Builds the dependency matrix on first use. `Direct(i, j)` holds iff
    /// some pair's function-typed formal has unfixed `j` in an input position
    /// and unfixed `i` in the output position.
    pub(crate) fn dependencies(&mut self) -> &mut DependencyMatrix {
        if self.deps.is_none() {
            let n = self.type_params.len();
            let mut matrix = DependencyMatrix::new(n);
            for p in 0..self.pair_count() {
                if !matches!(
                    self.args[p],
                    Argument::Lambda(_) | Argument::OverloadSet(_)
                ) {
                    continue;
                }
                let Some(sig) = self.function_signature(self.formals[p].ty) else {
                    continue;
                };
                let mut inputs = FixedBitSet::with_capacity(n);
                for param in &sig.params {
                    collect_method_params(self.interner(), param.ty, &mut inputs);
                }
                let mut outputs = FixedBitSet::with_capacity(n);
                collect_method_params(self.interner(), sig.return_type, &mut outputs);
                for j in inputs.ones().filter(|&j| !self.bounds.is_fixed(j)) {
                    for i in outputs.ones().filter(|&i| !self.bounds.is_fixed(i)) {
                        matrix.set_direct(i, j);
                    }
                }
            }
            matrix.deduce();
            self.deps = Some(matrix);
        }
        self.deps.as_mut().expect("dependency matrix just built")
    }

    // =========================================================================
    // First-argument entry
    // =========================================================================

    fn infer_first_argument(&mut self) -> bool {
        let formal0 = self.formals[0].ty;
        if let Some(source) = self.args[0].static_type() {
            self.lower_bound_inference(source, formal0);
        }
        let mut occurring = FixedBitSet::with_capacity(self.type_params.len());
        collect_method_params(self.interner(), formal0, &mut occurring);
        let mut all_fixed = true;
        for i in occurring.ones() {
            if self.bounds.is_fixed(i) {
                continue;
            }
            if !self.bounds.has_any_bound(i) || self.fix_parameter(i).is_err() {
                all_fixed = false;
            }
        }
        debug!(success = all_fixed, "first-argument inference complete");
        all_fixed
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
