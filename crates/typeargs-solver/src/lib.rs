//! Type-argument inference for generic method invocations.
//!
//! Given a generic method's type parameters, its formal parameters, and the
//! call's argument list, the engine infers one type argument per type
//! parameter in two phases:
//! - Phase 1 walks each (argument, formal) pair and collects exact, lower,
//!   and upper bounds on the type parameters occurring in the formal types.
//! - Phase 2 alternates output-type propagation (lambda returns, overload-set
//!   results) with fixing rounds ordered by the inter-parameter dependency
//!   relation, until every parameter is fixed or no progress is possible.
//!
//! The engine is pure with respect to its host: implicit-conversion queries,
//! overload resolution, and lambda body typing are behind the traits in
//! [`collab`], and every run owns all of its mutable state.
//!
//! Entry points: [`infer_type_arguments`] for full inference and
//! [`infer_from_first_argument`] for the reduced single-argument form used by
//! speculative applicability checks.

pub mod arguments;
pub mod bounds;
pub mod collab;
pub mod convert;
pub mod dependency;
pub mod driver;
pub mod fixing;
pub mod occurrence;
mod output;
mod relate;

pub use arguments::{Argument, FormalParam, LambdaArg, LambdaId};
pub use bounds::{BoundKind, BoundStore};
pub use collab::{
    ConversionOracle, InferenceHost, LambdaBodyTyper, NoLambdas, NoOverloads, OverloadResolver,
};
pub use convert::StandardConversions;
pub use dependency::{Dependency, DependencyMatrix};
pub use driver::{InferenceResult, TypeArgInferrer, infer_from_first_argument, infer_type_arguments};
pub use fixing::FixError;
pub use occurrence::{collect_method_params, contains_unfixed_param, substitute_fixed};

#[cfg(test)]
#[path = "tests/inference_scenarios.rs"]
mod inference_scenarios;
