//! Type interner: hash-consing of `TypeData` into `TypeId`.
//!
//! The interner owns four side tables (types, type lists, tuple lists,
//! function shapes) plus the generic definition registry and the string
//! interner. Interning the same structure twice yields the same id, so the
//! solver compares types by `TypeId` and only looks up `TypeData` when it
//! needs to recurse structurally.
//!
//! Interior mutability keeps the public API `&self`: the inference engine
//! holds a shared reference to the interner for a whole run while still being
//! able to mint placeholder and merged types on the way out.

use crate::def::{DefId, GenericDef};
use crate::interner::{Atom, Interner};
use crate::types::{
    FunctionShape, FunctionShapeId, IntrinsicKind, ParamInfo, ParamOwner, TupleElement,
    TupleListId, TypeData, TypeId, TypeListId,
};
use rustc_hash::FxHashMap;
use std::cell::RefCell;

#[derive(Default)]
struct InternerState {
    atoms: Interner,
    type_map: FxHashMap<TypeData, TypeId>,
    types: Vec<TypeData>,
    type_list_map: FxHashMap<Vec<TypeId>, TypeListId>,
    type_lists: Vec<Vec<TypeId>>,
    tuple_list_map: FxHashMap<Vec<TupleElement>, TupleListId>,
    tuple_lists: Vec<Vec<TupleElement>>,
    shape_map: FxHashMap<FunctionShape, FunctionShapeId>,
    shapes: Vec<FunctionShape>,
    defs: Vec<GenericDef>,
}

pub struct TypeInterner {
    state: RefCell<InternerState>,
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInterner {
    /// Creates an interner with all intrinsic types pre-registered at the
    /// `TypeId` constants (`TypeId::INT`, `TypeId::STRING`, ...).
    pub fn new() -> Self {
        let interner = Self {
            state: RefCell::new(InternerState::default()),
        };
        // Registration order must match the TypeId constants.
        for kind in [
            IntrinsicKind::Error,
            IntrinsicKind::Object,
            IntrinsicKind::Dynamic,
            IntrinsicKind::Void,
            IntrinsicKind::Bool,
            IntrinsicKind::Char,
            IntrinsicKind::Byte,
            IntrinsicKind::Short,
            IntrinsicKind::Int,
            IntrinsicKind::UInt,
            IntrinsicKind::Long,
            IntrinsicKind::ULong,
            IntrinsicKind::Float,
            IntrinsicKind::Double,
            IntrinsicKind::Decimal,
            IntrinsicKind::String,
        ] {
            interner.intern(TypeData::Intrinsic(kind));
        }
        interner
    }

    // =========================================================================
    // Strings
    // =========================================================================

    pub fn intern_str(&self, s: &str) -> Atom {
        self.state.borrow_mut().atoms.intern(s)
    }

    /// Resolves an atom to an owned string. Only used off the hot path
    /// (placeholder construction, diagnostics, debug formatting).
    pub fn resolve_atom(&self, atom: Atom) -> String {
        self.state.borrow().atoms.resolve(atom).to_string()
    }

    // =========================================================================
    // Types
    // =========================================================================

    pub fn intern(&self, data: TypeData) -> TypeId {
        let mut state = self.state.borrow_mut();
        if let Some(&id) = state.type_map.get(&data) {
            return id;
        }
        let id = TypeId(state.types.len() as u32);
        state.types.push(data);
        state.type_map.insert(data, id);
        id
    }

    /// Looks up the structural shape of an interned type.
    ///
    /// Panics on a foreign `TypeId`; every id handled by this crate must have
    /// come from the same interner.
    pub fn lookup(&self, id: TypeId) -> TypeData {
        self.state.borrow().types[id.0 as usize]
    }

    pub fn type_list(&self, id: TypeListId) -> Vec<TypeId> {
        self.state.borrow().type_lists[id.0 as usize].clone()
    }

    pub fn tuple_list(&self, id: TupleListId) -> Vec<TupleElement> {
        self.state.borrow().tuple_lists[id.0 as usize].clone()
    }

    pub fn function_shape(&self, id: FunctionShapeId) -> FunctionShape {
        self.state.borrow().shapes[id.0 as usize].clone()
    }

    // =========================================================================
    // Convenience constructors
    // =========================================================================

    pub fn array(&self, elem: TypeId, rank: u8) -> TypeId {
        debug_assert!(rank >= 1, "arrays have rank >= 1");
        self.intern(TypeData::Array { elem, rank })
    }

    pub fn vector(&self, elem: TypeId) -> TypeId {
        self.array(elem, 1)
    }

    pub fn tuple(&self, elements: Vec<TupleElement>) -> TypeId {
        let list = self.intern_tuple_list(elements);
        self.intern(TypeData::Tuple(list))
    }

    /// Tuple with unnamed elements.
    pub fn tuple_of(&self, element_types: &[TypeId]) -> TypeId {
        self.tuple(
            element_types
                .iter()
                .map(|&ty| TupleElement { ty, name: None })
                .collect(),
        )
    }

    pub fn pointer(&self, pointee: TypeId) -> TypeId {
        self.intern(TypeData::Pointer(pointee))
    }

    pub fn nullable(&self, inner: TypeId) -> TypeId {
        self.intern(TypeData::Nullable(inner))
    }

    pub fn applied(&self, def: DefId, args: &[TypeId]) -> TypeId {
        debug_assert_eq!(
            args.len(),
            self.def(def).arity(),
            "type argument count must match definition arity"
        );
        let list = self.intern_type_list(args.to_vec());
        self.intern(TypeData::Applied { def, args: list })
    }

    pub fn function(&self, params: Vec<ParamInfo>, return_type: TypeId) -> TypeId {
        let shape = self.intern_function_shape(FunctionShape {
            params,
            return_type,
        });
        self.intern(TypeData::Function(shape))
    }

    pub fn function_of(&self, param_types: &[TypeId], return_type: TypeId) -> TypeId {
        self.function(
            param_types.iter().copied().map(ParamInfo::by_value).collect(),
            return_type,
        )
    }

    /// A type parameter of the method whose type arguments are being inferred.
    pub fn method_param(&self, ordinal: u16) -> TypeId {
        self.intern(TypeData::TypeParameter {
            owner: ParamOwner::Method,
            ordinal,
        })
    }

    /// A type parameter of a generic definition, used inside its templates.
    pub fn def_param(&self, ordinal: u16) -> TypeId {
        self.intern(TypeData::TypeParameter {
            owner: ParamOwner::Definition,
            ordinal,
        })
    }

    pub fn placeholder(&self, name: &str) -> TypeId {
        let atom = self.intern_str(name);
        self.intern(TypeData::Placeholder(atom))
    }

    pub fn intern_type_list(&self, list: Vec<TypeId>) -> TypeListId {
        let mut state = self.state.borrow_mut();
        if let Some(&id) = state.type_list_map.get(&list) {
            return id;
        }
        let id = TypeListId(state.type_lists.len() as u32);
        state.type_lists.push(list.clone());
        state.type_list_map.insert(list, id);
        id
    }

    pub fn intern_tuple_list(&self, list: Vec<TupleElement>) -> TupleListId {
        let mut state = self.state.borrow_mut();
        if let Some(&id) = state.tuple_list_map.get(&list) {
            return id;
        }
        let id = TupleListId(state.tuple_lists.len() as u32);
        state.tuple_lists.push(list.clone());
        state.tuple_list_map.insert(list, id);
        id
    }

    pub fn intern_function_shape(&self, shape: FunctionShape) -> FunctionShapeId {
        let mut state = self.state.borrow_mut();
        if let Some(&id) = state.shape_map.get(&shape) {
            return id;
        }
        let id = FunctionShapeId(state.shapes.len() as u32);
        state.shapes.push(shape.clone());
        state.shape_map.insert(shape, id);
        id
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    pub fn register_def(&self, def: GenericDef) -> DefId {
        let mut state = self.state.borrow_mut();
        debug_assert!(
            def.invoke.is_none() || matches!(def.kind, crate::def::DefKind::Delegate),
            "only delegate definitions carry an invoke signature"
        );
        let id = DefId(state.defs.len() as u32);
        state.defs.push(def);
        id
    }

    pub fn def(&self, id: DefId) -> GenericDef {
        self.state.borrow().defs[id.0 as usize].clone()
    }
}

#[cfg(test)]
#[path = "tests/intern_tests.rs"]
mod tests;
