//! Grammar rules can be built with the builder pattern.

use crate::cnf::Cnf;
use crate::rule::CnfRule;
use crate::symbol::Symbol;

/// The rule builder.
pub struct RuleBuilder<'a, T> {
    lhs: Option<Symbol>,
    grammar: &'a mut Cnf<T>,
}

impl<'a, T> RuleBuilder<'a, T> {
    /// Creates a rule builder.
    pub fn new(grammar: &'a mut Cnf<T>) -> Self {
        RuleBuilder { lhs: None, grammar }
    }

    /// Starts building a new rule with the given LHS.
    pub fn rule(mut self, lhs: Symbol) -> Self {
        self.lhs = Some(lhs);
        self
    }

    /// Adds an alternative of the form `lhs -> terminal` to the grammar.
    ///
    /// # Panics
    ///
    /// Panics if no LHS was given with `rule`.
    pub fn terminal(self, terminal: T) -> Self {
        let lhs = self.lhs.expect("rule builder used without a LHS");
        self.grammar.add_rule(CnfRule::terminal(lhs, terminal));
        self
    }

    /// Adds an alternative of the form `lhs -> left right` to the grammar.
    ///
    /// # Panics
    ///
    /// Panics if no LHS was given with `rule`.
    pub fn binary(self, children: [Symbol; 2]) -> Self {
        let lhs = self.lhs.expect("rule builder used without a LHS");
        self.grammar.add_rule(CnfRule::binary(lhs, children));
        self
    }

    /// Adds several terminal alternatives at once.
    pub fn terminals<I>(mut self, terminals: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        for terminal in terminals {
            self = self.terminal(terminal);
        }
        self
    }
}
