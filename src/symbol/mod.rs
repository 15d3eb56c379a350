//! Non-terminal symbols. A symbol is nothing more than an ID handed out by a
//! [`SymbolSource`]; names live in the source.

pub mod set;
pub mod source;

pub use self::set::SymbolBitSet;
pub use self::source::SymbolSource;

/// Storage for symbol IDs.
pub(crate) type SymbolId = u32;

/// A non-terminal of a grammar in Chomsky Normal Form.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Symbol(SymbolId);

impl Symbol {
    /// Returns the symbol's ID as an index into per-symbol tables.
    #[inline]
    pub fn usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for Symbol {
    #[inline]
    fn from(id: u32) -> Self {
        Symbol(id)
    }
}

impl From<usize> for Symbol {
    #[inline]
    fn from(id: usize) -> Self {
        debug_assert!(id <= SymbolId::MAX as usize, "symbol ID out of range");
        Symbol(id as SymbolId)
    }
}

impl From<Symbol> for u32 {
    #[inline]
    fn from(sym: Symbol) -> Self {
        sym.0
    }
}

impl From<Symbol> for usize {
    #[inline]
    fn from(sym: Symbol) -> Self {
        sym.usize()
    }
}
