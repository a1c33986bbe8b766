//! Centralized limits and thresholds.
//!
//! Type shapes are caller-supplied, so every structural recursion in this
//! workspace is bounded. Centralizing the limits keeps the values consistent
//! across the type model and the solver.

/// Maximum depth for structural recursion over a type shape (occurrence
/// scans, fixed-value substitution, relation-engine recursion).
pub const MAX_TYPE_RECURSION_DEPTH: usize = 128;

/// Maximum length of a base-class chain or interface expansion. Misdeclared
/// cyclic hierarchies terminate at this bound instead of looping.
pub const MAX_HIERARCHY_DEPTH: usize = 100;
