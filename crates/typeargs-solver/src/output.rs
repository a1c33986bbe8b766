//! Output-type inference: bounds derived from what arguments *produce*.
//!
//! Runs at the top of every phase-2 round. Lambdas and overload sets only
//! contribute once every type parameter in the signature's input positions is
//! fixed; the fixed signature is then concrete enough to type the body or
//! resolve the set, and the resulting return type flows into the signature's
//! return position as a lower bound.

use crate::arguments::Argument;
use crate::driver::TypeArgInferrer;
use crate::occurrence::{contains_unfixed_param, substitute_fixed};
use tracing::trace;
use typeargs_types::{FunctionShape, TypeId};

impl<'a> TypeArgInferrer<'a> {
    pub(crate) fn make_output_inferences(&mut self) {
        for i in 0..self.args.len().min(self.formals.len()) {
            let arg = self.args[i].clone();
            let formal = self.formals[i].ty;
            self.make_output_inference(&arg, formal);
        }
    }

    fn make_output_inference(&mut self, arg: &Argument, formal: TypeId) {
        match arg {
            Argument::TupleLiteral { elements, .. } => {
                if let Some(target_elems) = self.tuple_target_elements(formal) {
                    if target_elems.len() == elements.len() {
                        for (element, target) in elements.iter().zip(target_elems.iter()) {
                            self.make_output_inference(element, target.ty);
                        }
                    }
                }
            }
            Argument::Lambda(lambda) => {
                let Some(sig) = self.ready_signature(formal) else {
                    return;
                };
                if let Some(ret) = self.host.lambdas.infer_return_type(lambda.id, &sig) {
                    trace!(lambda = lambda.id.0, ret = ret.0, "lambda return inferred");
                    self.lower_bound_inference(ret, sig.return_type);
                }
            }
            Argument::OverloadSet(set) => {
                let Some(sig) = self.ready_signature(formal) else {
                    return;
                };
                let param_types: Vec<TypeId> = sig.params.iter().map(|p| p.ty).collect();
                if let Some(ret) = self.host.overloads.resolve(*set, &param_types) {
                    if ret != TypeId::VOID {
                        self.lower_bound_inference(ret, sig.return_type);
                    }
                }
            }
            Argument::Typed(ty) => {
                if contains_unfixed_param(self.interner(), formal, &self.bounds) {
                    self.lower_bound_inference(*ty, formal);
                }
            }
            Argument::Untyped => {}
        }
    }

    /// The formal's signature with fixed parameters substituted into input
    /// positions, provided the return still mentions an unfixed parameter and
    /// no input does. Otherwise the argument has nothing (more) to say.
    fn ready_signature(&self, formal: TypeId) -> Option<FunctionShape> {
        let interner = self.interner();
        let sig = self.function_signature(formal)?;
        if !contains_unfixed_param(interner, sig.return_type, &self.bounds) {
            return None;
        }
        if sig
            .params
            .iter()
            .any(|p| contains_unfixed_param(interner, p.ty, &self.bounds))
        {
            return None;
        }
        let params = sig
            .params
            .into_iter()
            .map(|p| typeargs_types::ParamInfo {
                ty: substitute_fixed(interner, p.ty, &self.bounds),
                ref_kind: p.ref_kind,
            })
            .collect();
        Some(FunctionShape {
            params,
            return_type: sig.return_type,
        })
    }
}

#[cfg(test)]
#[path = "tests/output_tests.rs"]
mod tests;
