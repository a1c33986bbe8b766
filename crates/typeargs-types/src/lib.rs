//! Interned type model for the typeargs inference engine.
//!
//! This crate provides the substrate the solver crate operates on:
//! - String interning (`Atom`, `Interner`)
//! - Hash-consed structural types (`TypeId`, `TypeData`, `TypeInterner`)
//! - Generic definition registry (`DefId`, `GenericDef`) with variance,
//!   base/interface templates, and delegate invoke signatures
//! - Hierarchy queries (instantiation, base chains, interface sets)
//! - Equivalence up to incidental annotations, and candidate merging
//! - Reference/value classification
//! - Centralized recursion limits
//!
//! Key property: interning makes type equality an O(1) `TypeId` comparison,
//! so the solver's hot paths never hash or compare structures.

pub mod classify;
pub mod def;
pub mod equate;
pub mod hierarchy;
pub mod intern;
pub mod interner;
pub mod limits;
pub mod types;

pub use classify::{TypeFlags, is_reference_type, is_value_type, type_flags};
pub use def::{DefId, DefKind, GenericDef};
pub use equate::{equivalent, merge};
pub use hierarchy::{all_interfaces, base_chain, base_type, instantiate};
pub use intern::TypeInterner;
pub use interner::{Atom, Interner};
pub use types::{
    FunctionShape, FunctionShapeId, IntrinsicKind, ParamInfo, ParamOwner, RefKind, TupleElement,
    TupleListId, TypeData, TypeId, TypeListId, Variance,
};
