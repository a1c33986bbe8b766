//! Fixing: collapsing a parameter's bound sets into one type.
//!
//! An exact bound short-circuits: a single distinct exact bound is the answer
//! unconditionally, and two or more distinct exact bounds fail, lower and
//! upper bounds notwithstanding. Without exact bounds the candidates are the
//! merged lower and upper bounds, filtered by implicit convertibility against
//! every bound, and the unique candidate every other candidate converts to
//! wins.

use crate::bounds::BoundKind;
use crate::driver::TypeArgInferrer;
use tracing::{debug, trace};
use typeargs_types::{TypeId, equivalent, merge};

/// Why a parameter could not be fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixError {
    /// No bound set has any member.
    NoBounds,
    /// Two or more non-equivalent exact bounds.
    AmbiguousExactBounds,
    /// The filtered candidate set has no unique most-general member.
    NoUniqueBestCandidate,
}

impl<'a> TypeArgInferrer<'a> {
    /// Attempts to fix parameter `index` from its current bound sets. On
    /// success the result is permanent and the dependency matrix is
    /// invalidated for the fixed parameter.
    pub(crate) fn fix_parameter(&mut self, index: usize) -> Result<TypeId, FixError> {
        let chosen = self.select_candidate(index)?;
        trace!(param = index, ty = chosen.0, "fixing parameter");
        self.bounds.fix(index, chosen);
        if let Some(deps) = self.deps.as_mut() {
            deps.on_fixed(index);
        }
        Ok(chosen)
    }

    fn select_candidate(&self, index: usize) -> Result<TypeId, FixError> {
        let interner = self.interner();

        let exact = self.bounds.bounds(index, BoundKind::Exact);
        if !exact.is_empty() {
            let mut candidates: Vec<TypeId> = Vec::with_capacity(1);
            for &bound in exact {
                add_candidate(interner, &mut candidates, bound);
            }
            return if candidates.len() == 1 {
                Ok(candidates[0])
            } else {
                debug!(param = index, count = candidates.len(), "conflicting exact bounds");
                Err(FixError::AmbiguousExactBounds)
            };
        }

        let lower = self.bounds.bounds(index, BoundKind::Lower);
        let upper = self.bounds.bounds(index, BoundKind::Upper);
        let mut candidates: Vec<TypeId> = Vec::new();
        for &bound in lower.iter().chain(upper.iter()) {
            add_candidate(interner, &mut candidates, bound);
        }
        if candidates.is_empty() {
            return Err(FixError::NoBounds);
        }

        // Every surviving candidate must sit between all lower bounds and all
        // upper bounds under implicit conversion.
        let conversions = self.host.conversions;
        candidates.retain(|&c| {
            lower
                .iter()
                .all(|&l| equivalent(interner, l, c) || conversions.has_implicit_conversion(l, c))
                && upper
                    .iter()
                    .all(|&u| equivalent(interner, c, u) || conversions.has_implicit_conversion(c, u))
        });

        // The winner is the candidate every other candidate converts to.
        let mut best = None;
        for &c in &candidates {
            let dominant = candidates.iter().all(|&other| {
                equivalent(interner, other, c) || conversions.has_implicit_conversion(other, c)
            });
            if dominant {
                if best.is_some_and(|b| !equivalent(interner, b, c)) {
                    return Err(FixError::NoUniqueBestCandidate);
                }
                best = Some(c);
            }
        }
        best.ok_or(FixError::NoUniqueBestCandidate)
    }
}

/// Adds a candidate, merging with an existing equivalent one instead of
/// duplicating. Merging prefers `dynamic` over `object` and keeps tuple
/// element names only where both sides agree.
fn add_candidate(
    interner: &typeargs_types::TypeInterner,
    candidates: &mut Vec<TypeId>,
    ty: TypeId,
) {
    for slot in candidates.iter_mut() {
        if equivalent(interner, *slot, ty) {
            *slot = merge(interner, *slot, ty);
            return;
        }
    }
    candidates.push(ty);
}

#[cfg(test)]
#[path = "tests/fixing_tests.rs"]
mod tests;
