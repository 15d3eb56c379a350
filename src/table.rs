//! The triangular table of derivable non-terminals used by recognition.

use bit_matrix::BitMatrix;

use crate::symbol::Symbol;

/// Holds, for every range `[start, end]` of an input, the set of non-terminals
/// that derive exactly that range.
///
/// Cells are rows of a bit matrix with one column per symbol. All ranges of
/// the same length occupy consecutive rows, shortest ranges first. Symbols
/// can be inserted but never removed.
#[derive(Debug)]
pub struct DerivationTable {
    len: usize,
    num_syms: usize,
    cells: BitMatrix,
}

impl DerivationTable {
    /// Creates an empty table for an input of `len` terminals and a grammar
    /// with `num_syms` symbols.
    pub fn new(len: usize, num_syms: usize) -> Self {
        let num_cells = len * (len + 1) / 2;
        DerivationTable {
            len,
            num_syms,
            cells: BitMatrix::new(num_cells, num_syms),
        }
    }

    /// Returns the length of the input this table covers.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of cells, one per range.
    pub fn num_cells(&self) -> usize {
        self.len * (self.len + 1) / 2
    }

    fn row(&self, start: usize, end: usize) -> usize {
        assert!(
            start <= end && end < self.len,
            "range [{}, {}] out of bounds for input of length {}",
            start,
            end,
            self.len
        );
        let span = end - start;
        span * self.len - span * span.saturating_sub(1) / 2 + start
    }

    /// Checks whether `sym` derives the range `[start, end]`.
    pub fn contains(&self, start: usize, end: usize, sym: Symbol) -> bool {
        sym.usize() < self.num_syms && self.cells[(self.row(start, end), sym.usize())]
    }

    /// Records that `sym` derives the range `[start, end]`. Returns `true` if
    /// the symbol was not recorded before.
    pub fn insert(&mut self, start: usize, end: usize, sym: Symbol) -> bool {
        debug_assert!(sym.usize() < self.num_syms, "symbol out of range");
        let row = self.row(start, end);
        if self.cells[(row, sym.usize())] {
            false
        } else {
            self.cells.set(row, sym.usize(), true);
            true
        }
    }

    /// Iterates over the non-terminals that derive the range `[start, end]`.
    pub fn cell(&self, start: usize, end: usize) -> impl Iterator<Item = Symbol> + '_ {
        self.cells
            .iter_row(self.row(start, end))
            .take(self.num_syms)
            .enumerate()
            .filter_map(|(id, present)| if present { Some(Symbol::from(id)) } else { None })
    }

    /// Iterates over the non-terminals that derive the whole input. Empty for
    /// an empty input.
    pub fn full_range(&self) -> impl Iterator<Item = Symbol> + '_ {
        let cell = if self.is_empty() {
            None
        } else {
            Some(self.cell(0, self.len - 1))
        };
        cell.into_iter().flatten()
    }

    /// Iterates over all ranges as `(start, end)` in fill order: by
    /// increasing length, then by increasing start.
    pub fn ranges(&self) -> impl Iterator<Item = (usize, usize)> {
        let len = self.len;
        (1..=len).flat_map(move |span| (0..=len - span).map(move |start| (start, start + span - 1)))
    }
}
