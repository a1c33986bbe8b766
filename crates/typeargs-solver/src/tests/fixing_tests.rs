use super::*;
use crate::bounds::BoundKind;
use crate::collab::{InferenceHost, NoLambdas, NoOverloads};
use crate::convert::StandardConversions;
use crate::dependency::DependencyMatrix;
use crate::driver::TypeArgInferrer;
use typeargs_types::{TypeInterner, TypeId};

macro_rules! inferrer {
    ($inf:ident, $interner:expr, $names:expr) => {
        let conv = StandardConversions::new($interner);
        let no_overloads = NoOverloads;
        let no_lambdas = NoLambdas;
        let host = InferenceHost {
            interner: $interner,
            conversions: &conv,
            overloads: &no_overloads,
            lambdas: &no_lambdas,
        };
        let mut $inf = TypeArgInferrer::new(host, $names, &[], &[]);
    };
}

#[test]
fn single_exact_bound_wins_unconditionally() {
    let interner = TypeInterner::new();
    let names = [interner.intern_str("T")];
    inferrer!(inf, &interner, &names);
    inf.bounds.record(&interner, 0, BoundKind::Exact, TypeId::STRING);
    // Contradictory lower and upper bounds are irrelevant.
    inf.bounds.record(&interner, 0, BoundKind::Lower, TypeId::INT);
    inf.bounds.record(&interner, 0, BoundKind::Upper, TypeId::BOOL);
    assert_eq!(inf.fix_parameter(0), Ok(TypeId::STRING));
    assert_eq!(inf.bounds.fixed(0), Some(TypeId::STRING));
}

#[test]
fn equivalent_candidates_merge_preferring_dynamic() {
    let interner = TypeInterner::new();
    let names = [interner.intern_str("T")];
    inferrer!(inf, &interner, &names);
    // object arrives via a lower bound, dynamic via an upper bound; the
    // merged candidate keeps the dynamic spelling.
    inf.bounds.record(&interner, 0, BoundKind::Lower, TypeId::OBJECT);
    inf.bounds.record(&interner, 0, BoundKind::Upper, TypeId::DYNAMIC);
    assert_eq!(inf.fix_parameter(0), Ok(TypeId::DYNAMIC));
}

#[test]
fn distinct_exact_bounds_are_ambiguous() {
    let interner = TypeInterner::new();
    let names = [interner.intern_str("T")];
    inferrer!(inf, &interner, &names);
    inf.bounds.record(&interner, 0, BoundKind::Exact, TypeId::INT);
    inf.bounds.record(&interner, 0, BoundKind::Exact, TypeId::STRING);
    assert_eq!(inf.fix_parameter(0), Err(FixError::AmbiguousExactBounds));
    assert!(!inf.bounds.is_fixed(0));
}

#[test]
fn widest_lower_bound_is_selected() {
    let interner = TypeInterner::new();
    let names = [interner.intern_str("T")];
    inferrer!(inf, &interner, &names);
    inf.bounds.record(&interner, 0, BoundKind::Lower, TypeId::INT);
    inf.bounds.record(&interner, 0, BoundKind::Lower, TypeId::LONG);
    assert_eq!(inf.fix_parameter(0), Ok(TypeId::LONG));
}

#[test]
fn upper_bounds_filter_the_candidates() {
    let interner = TypeInterner::new();
    let names = [interner.intern_str("T")];
    inferrer!(inf, &interner, &names);
    inf.bounds.record(&interner, 0, BoundKind::Lower, TypeId::INT);
    inf.bounds.record(&interner, 0, BoundKind::Upper, TypeId::INT);
    inf.bounds.record(&interner, 0, BoundKind::Upper, TypeId::LONG);
    // long survives the lower bound but cannot convert to upper bound int.
    assert_eq!(inf.fix_parameter(0), Ok(TypeId::INT));
}

#[test]
fn unrelated_lower_bounds_have_no_best_candidate() {
    let interner = TypeInterner::new();
    let names = [interner.intern_str("T")];
    inferrer!(inf, &interner, &names);
    inf.bounds.record(&interner, 0, BoundKind::Lower, TypeId::INT);
    inf.bounds.record(&interner, 0, BoundKind::Lower, TypeId::STRING);
    assert_eq!(inf.fix_parameter(0), Err(FixError::NoUniqueBestCandidate));
}

#[test]
fn empty_bound_sets_cannot_fix() {
    let interner = TypeInterner::new();
    let names = [interner.intern_str("T")];
    inferrer!(inf, &interner, &names);
    assert_eq!(inf.fix_parameter(0), Err(FixError::NoBounds));
}

#[test]
fn fixing_invalidates_the_dependency_matrix() {
    let interner = TypeInterner::new();
    let names = [interner.intern_str("T"), interner.intern_str("U")];
    inferrer!(inf, &interner, &names);
    let mut matrix = DependencyMatrix::new(2);
    matrix.set_direct(0, 1);
    matrix.deduce();
    inf.deps = Some(matrix);
    inf.bounds.record(&interner, 1, BoundKind::Lower, TypeId::INT);
    inf.fix_parameter(1).expect("fixable");
    let deps = inf.deps.as_mut().expect("matrix installed");
    assert!(!deps.depends_on(0, 1));
}
