//! This module defines grammar rules. Each rule in a grammar in Chomsky Normal Form
//! has a single non-terminal on its left-hand side, and on its right-hand side
//! either one terminal or exactly two non-terminals.

pub mod builder;

use crate::symbol::Symbol;

/// Right-hand side of a rule in Chomsky Normal Form.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum CnfRhs<T> {
    /// `A -> a`
    Terminal(T),
    /// `A -> B C`
    Binary([Symbol; 2]),
}

/// A rule in Chomsky Normal Form.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CnfRule<T> {
    /// The rule's left-hand side symbol.
    pub lhs: Symbol,
    /// The rule's right-hand side.
    pub rhs: CnfRhs<T>,
}

impl<T> CnfRule<T> {
    /// Creates a rule of the form `lhs -> terminal`.
    pub fn terminal(lhs: Symbol, terminal: T) -> Self {
        CnfRule {
            lhs,
            rhs: CnfRhs::Terminal(terminal),
        }
    }

    /// Creates a rule of the form `lhs -> left right`.
    pub fn binary(lhs: Symbol, children: [Symbol; 2]) -> Self {
        CnfRule {
            lhs,
            rhs: CnfRhs::Binary(children),
        }
    }

    /// Returns the two non-terminals on the right-hand side, if this rule has them.
    pub fn children(&self) -> Option<[Symbol; 2]> {
        match self.rhs {
            CnfRhs::Binary(children) => Some(children),
            CnfRhs::Terminal(_) => None,
        }
    }
}
