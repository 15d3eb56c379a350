//! Sets of non-terminals.

use std::ops;

use bit_vec::BitVec;

use crate::symbol::Symbol;

/// A set of symbols, one bit per symbol ID.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

impl SymbolBitSet {
    /// Creates a set with room for `num_syms` symbols. Every symbol starts
    /// out present if `elem` is `true`, absent otherwise.
    pub fn from_elem(num_syms: usize, elem: bool) -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(num_syms, elem),
        }
    }

    /// Adds or removes a symbol.
    ///
    /// # Panics
    ///
    /// Panics if the symbol's ID is not below the set's capacity.
    pub fn set(&mut self, sym: Symbol, present: bool) {
        self.bit_vec.set(sym.usize(), present);
    }

    /// Checks whether a symbol is present. Symbols beyond the capacity are
    /// absent.
    pub fn contains(&self, sym: Symbol) -> bool {
        self.bit_vec.get(sym.usize()).unwrap_or(false)
    }

    /// Returns the number of symbols present.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Checks whether no symbol is present.
    pub fn is_empty(&self) -> bool {
        self.bit_vec.none()
    }

    /// Iterates over present symbols in order of their IDs.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.bit_vec
            .iter()
            .enumerate()
            .filter_map(|(id, present)| present.then(|| Symbol::from(id)))
    }
}

impl ops::Index<Symbol> for SymbolBitSet {
    type Output = bool;

    fn index(&self, sym: Symbol) -> &bool {
        if self.contains(sym) {
            &true
        } else {
            &false
        }
    }
}
