use super::*;
use crate::bounds::{BoundKind, BoundStore};
use fixedbitset::FixedBitSet;
use typeargs_types::{DefKind, GenericDef, TypeInterner, TypeId, Variance};

fn list_def(interner: &TypeInterner) -> typeargs_types::DefId {
    interner.register_def(GenericDef {
        name: interner.intern_str("List"),
        kind: DefKind::Class,
        variances: vec![Variance::Invariant],
        base: None,
        interfaces: Vec::new(),
        invoke: None,
        array_interface: false,
    })
}

fn collect(interner: &TypeInterner, ty: TypeId, n: usize) -> Vec<usize> {
    let mut mask = FixedBitSet::with_capacity(n);
    collect_method_params(interner, ty, &mut mask);
    mask.ones().collect()
}

#[test]
fn collects_params_across_shapes() {
    let interner = TypeInterner::new();
    let list = list_def(&interner);
    let t0 = interner.method_param(0);
    let t2 = interner.method_param(2);
    let ty = interner.function_of(
        &[interner.array(t0, 1), interner.applied(list, &[t2])],
        interner.nullable(t0),
    );
    assert_eq!(collect(&interner, ty, 3), vec![0, 2]);
    assert_eq!(collect(&interner, TypeId::INT, 3), Vec::<usize>::new());
    // Definition-owned params are not the solver's.
    assert_eq!(collect(&interner, interner.def_param(0), 3), Vec::<usize>::new());
}

#[test]
fn out_of_range_ordinals_are_ignored() {
    let interner = TypeInterner::new();
    let ty = interner.method_param(7);
    assert_eq!(collect(&interner, ty, 2), Vec::<usize>::new());
}

#[test]
fn unfixed_detection_respects_fixing() {
    let interner = TypeInterner::new();
    let mut bounds = BoundStore::new(2);
    let ty = interner.tuple_of(&[interner.method_param(0), interner.method_param(1)]);
    assert!(contains_unfixed_param(&interner, ty, &bounds));
    bounds.record(&interner, 0, BoundKind::Lower, TypeId::INT);
    bounds.fix(0, TypeId::INT);
    assert!(contains_unfixed_param(&interner, ty, &bounds));
    bounds.record(&interner, 1, BoundKind::Lower, TypeId::INT);
    bounds.fix(1, TypeId::INT);
    assert!(!contains_unfixed_param(&interner, ty, &bounds));
}

#[test]
fn substitution_replaces_only_fixed_params() {
    let interner = TypeInterner::new();
    let list = list_def(&interner);
    let t0 = interner.method_param(0);
    let t1 = interner.method_param(1);
    let mut bounds = BoundStore::new(2);
    bounds.record(&interner, 0, BoundKind::Lower, TypeId::STRING);
    bounds.fix(0, TypeId::STRING);
    let ty = interner.applied(list, &[interner.function_of(&[t0], t1)]);
    let expected = interner.applied(list, &[interner.function_of(&[TypeId::STRING], t1)]);
    assert_eq!(substitute_fixed(&interner, ty, &bounds), expected);
}
