//! Library for recognizing words against context-free grammars in Chomsky Normal Form, with the
//! Cocke-Younger-Kasami algorithm.
//!
//! Rules are collected in a [`Cnf`], which is then built into an immutable [`Grammar`]. A
//! [`Recognizer`] fills a [`DerivationTable`] over the input, bottom-up by range length, and
//! answers whether the start symbol derives the whole input.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, allow(missing_docs))]

pub mod cnf;
#[cfg(feature = "generation")]
pub mod generate;
pub mod grammar;
pub mod load;
pub mod recognize;
pub mod rule;
pub mod symbol;
pub mod table;

pub use crate::cnf::Cnf;
pub use crate::grammar::{Grammar, GrammarError};
pub use crate::load::{LoadError, Puzzle};
pub use crate::recognize::{parse, Recognizer};
pub use crate::rule::{CnfRhs, CnfRule};
pub use crate::symbol::{Symbol, SymbolBitSet, SymbolSource};
pub use crate::table::DerivationTable;
