//! External collaborator interfaces.
//!
//! The engine is a library-internal algorithm: it owns no conversion logic,
//! no overload resolution, and no lambda body analysis. Those capabilities
//! are supplied through the traits here and bundled into an
//! [`InferenceHost`] for the duration of a run.

use crate::arguments::LambdaId;
use typeargs_types::{Atom, FunctionShape, TypeInterner, TypeId};

/// Answers implicit-convertibility queries during candidate filtering and
/// best-candidate selection.
pub trait ConversionOracle {
    fn has_implicit_conversion(&self, from: TypeId, to: TypeId) -> bool;
}

/// Resolves an unresolved overload-set name against candidate parameter
/// types, yielding the single applicable member's return type if exactly one
/// exists.
pub trait OverloadResolver {
    fn resolve(&self, set: Atom, param_types: &[TypeId]) -> Option<TypeId>;
}

/// Infers the body result type of an anonymous function literal against a
/// fully-fixed function type.
pub trait LambdaBodyTyper {
    fn infer_return_type(&self, lambda: LambdaId, target: &FunctionShape) -> Option<TypeId>;
}

/// An overload resolver for hosts whose call sites never pass method groups.
pub struct NoOverloads;

impl OverloadResolver for NoOverloads {
    fn resolve(&self, _set: Atom, _param_types: &[TypeId]) -> Option<TypeId> {
        None
    }
}

/// A lambda collaborator for hosts whose call sites never pass lambdas.
pub struct NoLambdas;

impl LambdaBodyTyper for NoLambdas {
    fn infer_return_type(&self, _lambda: LambdaId, _target: &FunctionShape) -> Option<TypeId> {
        None
    }
}

/// Everything an inference run borrows from its surroundings. Cheap to copy;
/// one host can serve any number of independent runs.
#[derive(Clone, Copy)]
pub struct InferenceHost<'a> {
    pub interner: &'a TypeInterner,
    pub conversions: &'a dyn ConversionOracle,
    pub overloads: &'a dyn OverloadResolver,
    pub lambdas: &'a dyn LambdaBodyTyper,
}
