//! Call-site input contract: formal parameters and argument descriptors.
//!
//! The engine never sees syntax. A caller hands it an ordered list of formal
//! parameter types (with ref-kinds) and an ordered list of [`Argument`]
//! descriptors exposing exactly what inference needs: a static type if one
//! exists, lambda parameter info, or an unresolved overload-set name.

use serde::{Deserialize, Serialize};
use typeargs_types::{Atom, RefKind, TypeId};

/// One formal parameter of the generic signature under inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormalParam {
    pub ty: TypeId,
    pub ref_kind: RefKind,
}

impl FormalParam {
    pub fn by_value(ty: TypeId) -> Self {
        Self {
            ty,
            ref_kind: RefKind::Value,
        }
    }

    pub fn by_ref(ty: TypeId) -> Self {
        Self {
            ty,
            ref_kind: RefKind::Ref,
        }
    }
}

/// Opaque handle to an anonymous function literal. The engine never inspects
/// lambda bodies; it round-trips this handle through the
/// [`LambdaBodyTyper`](crate::collab::LambdaBodyTyper) collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LambdaId(pub u32);

/// An anonymous function literal argument.
#[derive(Debug, Clone)]
pub struct LambdaArg {
    pub id: LambdaId,
    /// Declared parameter types, present only when the literal's parameter
    /// list is explicitly typed. Drives phase-1 exact inference.
    pub explicit_param_types: Option<Vec<TypeId>>,
}

/// One call-site argument, reduced to what inference can observe.
#[derive(Debug, Clone)]
pub enum Argument {
    /// An ordinary expression with a static type.
    Typed(TypeId),
    /// An anonymous function literal.
    Lambda(LambdaArg),
    /// An unresolved overload-set name (method group).
    OverloadSet(Atom),
    /// A tuple literal, decomposed recursively against tuple-shaped targets.
    /// `fallback` is the literal's own static type, if it has one, used when
    /// the target is not tuple-shaped.
    TupleLiteral {
        elements: Vec<Argument>,
        fallback: Option<TypeId>,
    },
    /// An argument with nothing to contribute (e.g. an untyped literal).
    Untyped,
}

impl Argument {
    /// The argument's static type, if it has one.
    pub fn static_type(&self) -> Option<TypeId> {
        match self {
            Argument::Typed(ty) => Some(*ty),
            Argument::TupleLiteral { fallback, .. } => *fallback,
            Argument::Lambda(_) | Argument::OverloadSet(_) | Argument::Untyped => None,
        }
    }
}
