use super::*;
use crate::def::{DefId, DefKind, GenericDef};
use crate::intern::TypeInterner;
use crate::types::{TypeData, TypeId, Variance};

struct Hierarchy {
    interner: TypeInterner,
    enumerable: DefId,
    collection: DefId,
    list: DefId,
    keyed_list: DefId,
}

// IEnumerable<out T>; ICollection<T> : IEnumerable<T>; List<T> : ICollection<T>;
// KeyedList<K, V> : List<V>.
fn hierarchy() -> Hierarchy {
    let interner = TypeInterner::new();
    let enumerable = interner.register_def(GenericDef {
        name: interner.intern_str("IEnumerable"),
        kind: DefKind::Interface,
        variances: vec![Variance::Covariant],
        base: None,
        interfaces: Vec::new(),
        invoke: None,
        array_interface: true,
    });
    let t = interner.def_param(0);
    let collection = interner.register_def(GenericDef {
        name: interner.intern_str("ICollection"),
        kind: DefKind::Interface,
        variances: vec![Variance::Invariant],
        base: None,
        interfaces: vec![interner.applied(enumerable, &[t])],
        invoke: None,
        array_interface: false,
    });
    let list = interner.register_def(GenericDef {
        name: interner.intern_str("List"),
        kind: DefKind::Class,
        variances: vec![Variance::Invariant],
        base: None,
        interfaces: vec![interner.applied(collection, &[t])],
        invoke: None,
        array_interface: false,
    });
    let v = interner.def_param(1);
    let keyed_list = interner.register_def(GenericDef {
        name: interner.intern_str("KeyedList"),
        kind: DefKind::Class,
        variances: vec![Variance::Invariant; 2],
        base: Some(interner.applied(list, &[v])),
        interfaces: Vec::new(),
        invoke: None,
        array_interface: false,
    });
    Hierarchy {
        interner,
        enumerable,
        collection,
        list,
        keyed_list,
    }
}

#[test]
fn instantiate_substitutes_definition_params_only() {
    let h = hierarchy();
    let i = &h.interner;
    let template = i.array(i.def_param(0), 1);
    assert_eq!(
        instantiate(i, template, &[TypeId::INT]),
        i.array(TypeId::INT, 1)
    );
    // Method params belong to the inference run, not to the definition.
    let method = i.method_param(0);
    assert_eq!(instantiate(i, method, &[TypeId::INT]), method);
    // Out-of-range ordinals collapse to the error type.
    assert_eq!(instantiate(i, i.def_param(5), &[TypeId::INT]), TypeId::ERROR);
}

#[test]
fn base_type_of_constructions() {
    let h = hierarchy();
    let i = &h.interner;
    let keyed = i.applied(h.keyed_list, &[TypeId::STRING, TypeId::INT]);
    assert_eq!(base_type(i, keyed), Some(i.applied(h.list, &[TypeId::INT])));
    // Classes without a declared base derive from object.
    let list = i.applied(h.list, &[TypeId::INT]);
    assert_eq!(base_type(i, list), Some(TypeId::OBJECT));
    // Interfaces have no base class.
    let iface = i.applied(h.enumerable, &[TypeId::INT]);
    assert_eq!(base_type(i, iface), None);
    assert_eq!(base_type(i, TypeId::OBJECT), None);
    assert_eq!(base_type(i, TypeId::INT), Some(TypeId::OBJECT));
    assert_eq!(base_type(i, i.array(TypeId::INT, 1)), Some(TypeId::OBJECT));
}

#[test]
fn base_chain_is_nearest_first_and_ends_at_object() {
    let h = hierarchy();
    let i = &h.interner;
    let keyed = i.applied(h.keyed_list, &[TypeId::STRING, TypeId::INT]);
    let chain = base_chain(i, keyed);
    assert_eq!(
        chain,
        vec![i.applied(h.list, &[TypeId::INT]), TypeId::OBJECT]
    );
}

#[test]
fn all_interfaces_is_transitive_and_deduplicated() {
    let h = hierarchy();
    let i = &h.interner;
    let keyed = i.applied(h.keyed_list, &[TypeId::STRING, TypeId::INT]);
    let ifaces = all_interfaces(i, keyed);
    assert_eq!(
        ifaces,
        vec![
            i.applied(h.collection, &[TypeId::INT]),
            i.applied(h.enumerable, &[TypeId::INT]),
        ]
    );
}

#[test]
fn cyclic_base_declarations_terminate() {
    let interner = TypeInterner::new();
    // Loop<T> : Loop<T>, a misdeclaration the walk must tolerate. The base
    // template is built by hand because the definition id does not exist yet.
    let args = interner.intern_type_list(vec![interner.def_param(0)]);
    let self_template = interner.intern(TypeData::Applied {
        def: DefId(0),
        args,
    });
    let looped = interner.register_def(GenericDef {
        name: interner.intern_str("Loop"),
        kind: DefKind::Class,
        variances: vec![Variance::Invariant],
        base: Some(self_template),
        interfaces: Vec::new(),
        invoke: None,
        array_interface: false,
    });
    assert_eq!(looped, DefId(0));
    let ty = interner.applied(looped, &[TypeId::INT]);
    assert_eq!(base_chain(&interner, ty), vec![ty]);
}
