//! The inter-parameter dependency relation.
//!
//! Parameter `i` depends directly on parameter `j` when some argument's
//! function-typed formal has `j` in an input (parameter) position and `i` in
//! the output (return) position: `i` cannot be output-inferred until `j` is
//! fixed. The full relation is the transitive closure of the direct one.
//!
//! Fixing a parameter zaps its row and column to `NotDependent` and marks the
//! matrix dirty; the next query strips the stale `Indirect` entries and
//! recomputes the closure lazily.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Dependency state between an ordered pair of type parameters. Only
/// meaningful while both parameters are unfixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dependency {
    Unknown,
    NotDependent,
    Direct,
    Indirect,
}

impl Dependency {
    fn holds(self) -> bool {
        matches!(self, Dependency::Direct | Dependency::Indirect)
    }
}

/// N×N dependency matrix over the method type parameters.
#[derive(Debug)]
pub struct DependencyMatrix {
    n: usize,
    cells: Vec<Dependency>,
    dirty: bool,
}

impl DependencyMatrix {
    pub fn new(param_count: usize) -> Self {
        Self {
            n: param_count,
            cells: vec![Dependency::Unknown; param_count * param_count],
            dirty: false,
        }
    }

    fn at(&self, i: usize, j: usize) -> Dependency {
        self.cells[i * self.n + j]
    }

    fn set(&mut self, i: usize, j: usize, dep: Dependency) {
        self.cells[i * self.n + j] = dep;
    }

    /// Seeds one direct dependency. Call for every (output, input) parameter
    /// pair before [`deduce`](Self::deduce).
    pub fn set_direct(&mut self, i: usize, j: usize) {
        self.set(i, j, Dependency::Direct);
    }

    /// Computes the transitive closure by fixed-point iteration, then settles
    /// every remaining `Unknown` entry to `NotDependent`.
    pub fn deduce(&mut self) {
        self.close();
        self.settle_unknowns();
        self.dirty = false;
    }

    fn close(&mut self) {
        loop {
            let mut changed = false;
            for i in 0..self.n {
                for j in 0..self.n {
                    if self.at(i, j) != Dependency::Unknown {
                        continue;
                    }
                    let via_k = (0..self.n)
                        .any(|k| self.at(i, k).holds() && self.at(k, j).holds());
                    if via_k {
                        self.set(i, j, Dependency::Indirect);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
    }

    fn settle_unknowns(&mut self) {
        for cell in &mut self.cells {
            if *cell == Dependency::Unknown {
                *cell = Dependency::NotDependent;
            }
        }
    }

    /// Invalidation after parameter `p` is fixed: nothing depends on a fixed
    /// parameter and a fixed parameter depends on nothing, but indirect
    /// entries that were routed through `p` must be rededuced before the next
    /// query.
    pub fn on_fixed(&mut self, p: usize) {
        for k in 0..self.n {
            self.set(p, k, Dependency::NotDependent);
            self.set(k, p, Dependency::NotDependent);
        }
        self.dirty = true;
        trace!(param = p, "dependency matrix invalidated");
    }

    fn ensure_fresh(&mut self) {
        if !self.dirty {
            return;
        }
        for cell in &mut self.cells {
            if *cell == Dependency::Indirect {
                *cell = Dependency::Unknown;
            }
        }
        self.close();
        self.settle_unknowns();
        self.dirty = false;
    }

    pub fn depends_on(&mut self, i: usize, j: usize) -> bool {
        self.ensure_fresh();
        self.at(i, j).holds()
    }

    /// Whether `i` depends on any (necessarily unfixed) parameter.
    pub fn depends_on_any(&mut self, i: usize) -> bool {
        self.ensure_fresh();
        (0..self.n).any(|j| self.at(i, j).holds())
    }

    /// Whether any parameter depends on `i`.
    pub fn any_depends_on(&mut self, i: usize) -> bool {
        self.ensure_fresh();
        (0..self.n).any(|j| self.at(j, i).holds())
    }
}

#[cfg(test)]
#[path = "tests/dependency_tests.rs"]
mod tests;
