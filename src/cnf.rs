//! Definitions of the mutable rule container that a grammar is built from.

use std::borrow::Cow;
use std::fmt::{self, Write};
use std::hash::Hash;
use std::slice;

use crate::grammar::{Grammar, GrammarError};
use crate::rule::builder::RuleBuilder;
use crate::rule::{CnfRhs, CnfRule};
use crate::symbol::{Symbol, SymbolSource};

/// A collection of rules in Chomsky Normal Form, together with the symbols
/// they use and the start symbol.
///
/// Rules are added with the builder pattern:
///
/// ```
/// use cyk::Cnf;
///
/// let mut cnf = Cnf::new();
/// let [start, a, b] = cnf.sym();
/// cnf.rule(start).binary([a, b])
///    .rule(a).terminal('a')
///    .rule(b).terminal('b');
/// cnf.set_start(start);
///
/// let grammar = cnf.build().unwrap();
/// assert!(grammar.recognize(&['a', 'b']));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
pub struct Cnf<T = char> {
    /// The symbol source.
    sym_source: SymbolSource,
    /// The array of rules.
    rules: Vec<CnfRule<T>>,
    /// The start symbol.
    start: Option<Symbol>,
}

impl<T> Default for Cnf<T> {
    fn default() -> Self {
        Self::with_sym_source(SymbolSource::new())
    }
}

impl<T> Cnf<T> {
    /// Creates an empty grammar.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty grammar with the given symbol source.
    pub fn with_sym_source(sym_source: SymbolSource) -> Self {
        Cnf {
            sym_source,
            rules: vec![],
            start: None,
        }
    }

    /// Returns generated symbols.
    pub fn sym<const N: usize>(&mut self) -> [Symbol; N] {
        self.sym_source.sym()
    }

    /// Generates a new unique symbol, optionally with a name.
    pub fn next_sym(&mut self, name: Option<Cow<str>>) -> Symbol {
        self.sym_source.next_sym(name)
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Assigns the start symbol.
    pub fn set_start(&mut self, start: Symbol) {
        self.start = Some(start);
    }

    /// Returns the start symbol, if one was assigned.
    pub fn start(&self) -> Option<Symbol> {
        self.start
    }

    /// Starts building a new rule.
    pub fn rule(&mut self, lhs: Symbol) -> RuleBuilder<T> {
        RuleBuilder::new(self).rule(lhs)
    }

    /// Inserts a rule.
    pub fn add_rule(&mut self, rule: CnfRule<T>) {
        self.rules.push(rule);
    }

    /// Returns an iterator over the grammar's rules.
    pub fn rules(&self) -> slice::Iter<CnfRule<T>> {
        self.rules.iter()
    }
}

impl<T> Cnf<T>
where
    T: Copy + Eq + Hash,
{
    /// Validates the rules and builds the lookup structure used for recognition.
    pub fn build(&self) -> Result<Grammar<T>, GrammarError> {
        Grammar::new(self)
    }
}

impl<T> Cnf<T>
where
    T: fmt::Display,
{
    /// Formats the rules as lines of the form `A -> a` and `A -> B C`.
    ///
    /// Symbols without a name are written as `g` followed by their ID.
    pub fn stringify(&self) -> String {
        let mut result = String::new();
        let stringify_sym = |sym: Symbol| match self.sym_source.name_of(sym) {
            Some(name) => name.to_string(),
            None => format!("g{}", sym.usize()),
        };
        for rule in self.rules() {
            let lhs = stringify_sym(rule.lhs);
            let written = match &rule.rhs {
                CnfRhs::Terminal(terminal) => {
                    writeln!(&mut result, "{} -> {}", lhs, terminal)
                }
                CnfRhs::Binary([left, right]) => writeln!(
                    &mut result,
                    "{} -> {} {}",
                    lhs,
                    stringify_sym(*left),
                    stringify_sym(*right)
                ),
            };
            written.expect("writing to String failed");
        }
        result
    }
}
