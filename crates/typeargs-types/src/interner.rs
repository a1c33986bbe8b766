//! String interning for identifier deduplication.
//!
//! Type-parameter names, tuple element names, and generic definition names are
//! interned into [`Atom`]s so that the rest of the crate compares names by a
//! `u32` instead of by string contents.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// An interned string handle. Two atoms are equal iff the strings they were
/// interned from are equal within the same [`Interner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Atom(pub u32);

/// A plain, single-threaded string interner.
#[derive(Debug, Default)]
pub struct Interner {
    map: FxHashMap<Box<str>, Atom>,
    strings: Vec<Box<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a string, returning the existing atom if it was seen before.
    pub fn intern(&mut self, s: &str) -> Atom {
        if let Some(&atom) = self.map.get(s) {
            return atom;
        }
        let atom = Atom(self.strings.len() as u32);
        let boxed: Box<str> = s.into();
        self.strings.push(boxed.clone());
        self.map.insert(boxed, atom);
        atom
    }

    /// Resolves an atom back to its string.
    ///
    /// Panics if the atom was not produced by this interner; that is a caller
    /// bug, not a recoverable condition.
    pub fn resolve(&self, atom: Atom) -> &str {
        &self.strings[atom.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
