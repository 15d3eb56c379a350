//! Allocation of symbols.

use std::borrow::Cow;

use crate::symbol::{Symbol, SymbolId};

/// Hands out symbols with consecutive IDs, starting from zero. Each symbol
/// may carry a name.
#[allow(missing_copy_implementations)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct SymbolSource {
    next_id: SymbolId,
    names: Vec<Option<String>>,
}

impl SymbolSource {
    /// Creates a source of numeric symbols with an empty symbol space.
    pub fn new() -> Self {
        SymbolSource {
            next_id: 0,
            names: vec![],
        }
    }

    /// Returns generated symbols.
    pub fn sym<const N: usize>(&mut self) -> [Symbol; N] {
        let mut result = [Symbol::default(); N];
        for dest in &mut result {
            *dest = self.next_sym(None);
        }
        result
    }

    /// Generates a new unique symbol.
    ///
    /// If a name is given, it will be recorded within the symbol
    /// source.
    pub fn next_sym(&mut self, name: Option<Cow<str>>) -> Symbol {
        let ret = Symbol::from(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        debug_assert_ne!(ret.usize(), SymbolId::MAX as usize, "ran out of symbol IDs");
        self.names.push(name.map(Cow::into_owned));
        ret
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.next_id as usize
    }

    /// Checks whether this source generated the given symbol.
    pub fn contains(&self, sym: Symbol) -> bool {
        sym.usize() < self.num_syms()
    }

    /// Returns the name of a symbol, if it has one.
    pub fn name_of(&self, sym: Symbol) -> Option<&str> {
        self.names.get(sym.usize()).and_then(|name| name.as_deref())
    }

    /// Returns the list of names, indexed by symbol ID.
    pub fn names(&self) -> &[Option<String>] {
        &self.names[..]
    }

    /// Returns an iterator that generates anonymous symbols.
    pub fn generate(&mut self) -> Generate {
        Generate { source: self }
    }
}

/// Iterator for generating symbols.
pub struct Generate<'a> {
    source: &'a mut SymbolSource,
}

impl<'a> Iterator for Generate<'a> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.source.next_sym(None))
    }
}
