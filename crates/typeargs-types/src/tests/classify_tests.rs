use super::*;
use crate::def::{DefKind, GenericDef};
use crate::intern::TypeInterner;
use crate::types::{TypeId, Variance};

fn register(interner: &TypeInterner, name: &str, kind: DefKind) -> crate::def::DefId {
    interner.register_def(GenericDef {
        name: interner.intern_str(name),
        kind,
        variances: vec![Variance::Invariant],
        base: None,
        interfaces: Vec::new(),
        invoke: None,
        array_interface: false,
    })
}

#[test]
fn intrinsic_classification() {
    let interner = TypeInterner::new();
    assert!(is_reference_type(&interner, TypeId::STRING));
    assert!(is_reference_type(&interner, TypeId::OBJECT));
    assert!(is_reference_type(&interner, TypeId::DYNAMIC));
    assert!(is_value_type(&interner, TypeId::INT));
    assert!(is_value_type(&interner, TypeId::BOOL));
    assert_eq!(type_flags(&interner, TypeId::ERROR), TypeFlags::empty());
    assert_eq!(type_flags(&interner, TypeId::VOID), TypeFlags::empty());
}

#[test]
fn structural_shapes() {
    let interner = TypeInterner::new();
    assert!(is_reference_type(&interner, interner.array(TypeId::INT, 1)));
    assert!(is_reference_type(&interner, interner.function_of(&[], TypeId::VOID)));
    assert!(is_value_type(&interner, interner.tuple_of(&[TypeId::INT])));
    assert!(is_value_type(&interner, interner.nullable(TypeId::INT)));
    assert_eq!(
        type_flags(&interner, interner.pointer(TypeId::INT)),
        TypeFlags::empty()
    );
}

#[test]
fn type_parameters_are_unclassified() {
    let interner = TypeInterner::new();
    assert_eq!(type_flags(&interner, interner.method_param(0)), TypeFlags::empty());
    assert_eq!(type_flags(&interner, interner.placeholder("T")), TypeFlags::empty());
}

#[test]
fn applied_classification_follows_def_kind() {
    let interner = TypeInterner::new();
    let class = register(&interner, "List", DefKind::Class);
    let strukt = register(&interner, "Span", DefKind::Struct);
    let iface = register(&interner, "ISeq", DefKind::Interface);
    assert!(is_reference_type(&interner, interner.applied(class, &[TypeId::INT])));
    assert!(is_value_type(&interner, interner.applied(strukt, &[TypeId::INT])));
    assert!(is_reference_type(&interner, interner.applied(iface, &[TypeId::INT])));
}
