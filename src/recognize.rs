//! Recognition of words with the Cocke-Younger-Kasami algorithm.

use std::hash::Hash;

use log::{debug, trace};

use crate::grammar::Grammar;
use crate::symbol::Symbol;
use crate::table::DerivationTable;

/// Decides whether words are derivable from a non-terminal of a grammar.
///
/// A recognizer borrows its grammar and holds no other state; each call
/// builds its own table.
#[derive(Clone, Copy, Debug)]
pub struct Recognizer<'g, T> {
    grammar: &'g Grammar<T>,
}

impl<'g, T> Recognizer<'g, T>
where
    T: Copy + Eq + Hash,
{
    /// Creates a recognizer for the given grammar.
    pub fn new(grammar: &'g Grammar<T>) -> Self {
        Recognizer { grammar }
    }

    /// Checks whether `input` is derivable from the grammar's start symbol.
    pub fn recognize(&self, input: &[T]) -> bool {
        self.recognize_from(input, self.grammar.start())
    }

    /// Checks whether `input` is derivable from `start`.
    ///
    /// The empty word is never derivable.
    pub fn recognize_from(&self, input: &[T], start: Symbol) -> bool {
        if input.is_empty() {
            return false;
        }
        let table = self.fill(input);
        table.contains(0, input.len() - 1, start)
    }

    /// Computes the sets of non-terminals that derive every range of `input`.
    ///
    /// Ranges are completed in order of increasing length, so both parts of
    /// every split are final by the time a range is computed.
    pub fn fill(&self, input: &[T]) -> DerivationTable {
        let n = input.len();
        let mut table = DerivationTable::new(n, self.grammar.num_syms());
        debug!("filling {} cells for an input of length {}", table.num_cells(), n);

        for (pos, terminal) in input.iter().enumerate() {
            for &lhs in self.grammar.terminal_producers(terminal) {
                table.insert(pos, pos, lhs);
            }
        }

        let mut heads = vec![];
        for len in 2..=n {
            let mut added = 0;
            for start in 0..=n - len {
                let end = start + len - 1;
                for split in start..end {
                    for left in table.cell(start, split) {
                        for &(_, right, lhs) in self.grammar.binary_rules_with_left(left) {
                            if table.contains(split + 1, end, right) {
                                heads.push(lhs);
                            }
                        }
                    }
                }
                for lhs in heads.drain(..) {
                    if table.insert(start, end, lhs) {
                        added += 1;
                    }
                }
            }
            trace!("ranges of length {}: {} derivations", len, added);
        }
        table
    }

    /// Returns the grammar this recognizer uses.
    pub fn grammar(&self) -> &'g Grammar<T> {
        self.grammar
    }
}

/// Checks whether `sequence` is derivable from `start` in `grammar`.
pub fn parse<T>(grammar: &Grammar<T>, sequence: &[T], start: Symbol) -> bool
where
    T: Copy + Eq + Hash,
{
    Recognizer::new(grammar).recognize_from(sequence, start)
}
