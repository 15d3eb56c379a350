//! The read-only grammar representation queried during recognition.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::hash::Hash;

use log::{debug, warn};

use crate::cnf::Cnf;
use crate::recognize::Recognizer;
use crate::rule::{CnfRhs, CnfRule};
use crate::symbol::{Symbol, SymbolBitSet, SymbolSource};

/// A grammar in Chomsky Normal Form, indexed for lookups by right-hand side.
///
/// Built once from a [`Cnf`] and never modified afterward, so a single
/// grammar can serve any number of recognitions, including concurrent ones.
#[derive(Clone, Debug)]
pub struct Grammar<T = char> {
    sym_source: SymbolSource,
    start: Symbol,
    /// Heads of `A -> a`, by terminal.
    terminal_producers: HashMap<T, Vec<Symbol>>,
    /// Heads of `A -> B C`, by `(B, C)`.
    binary_producers: HashMap<(Symbol, Symbol), Vec<Symbol>>,
    /// Binary rules as `(B, C, A)`, sorted by `B`.
    by_left: Vec<(Symbol, Symbol, Symbol)>,
    /// Distinct rules in the order they were first given.
    rules: Vec<CnfRule<T>>,
}

/// Returned when rules cannot form a grammar.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GrammarError {
    /// No start symbol was assigned.
    MissingStart,
    /// A rule or the start symbol refers to a symbol that was not generated
    /// by the grammar's symbol source.
    UnknownSymbol(Symbol),
    /// A non-terminal appears on a right-hand side, but heads no rule.
    UndefinedNonterminal {
        /// The offending symbol.
        sym: Symbol,
        /// Its name, if it has one.
        name: Option<String>,
    },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GrammarError::MissingStart => write!(f, "grammar has no start symbol"),
            GrammarError::UnknownSymbol(sym) => {
                write!(f, "symbol {} does not belong to this grammar", sym.usize())
            }
            GrammarError::UndefinedNonterminal {
                sym,
                name: Some(name),
            } => write!(f, "non-terminal {} ({}) is used but never defined", name, sym.usize()),
            GrammarError::UndefinedNonterminal { sym, name: None } => {
                write!(f, "non-terminal {} is used but never defined", sym.usize())
            }
        }
    }
}

impl Error for GrammarError {}

impl<T> Grammar<T>
where
    T: Copy + Eq + Hash,
{
    /// Validates the rules of `cnf` and builds the lookup structures.
    ///
    /// Duplicate rules are merged. A start symbol that heads no rule is
    /// accepted; such a grammar derives nothing.
    pub fn new(cnf: &Cnf<T>) -> Result<Self, GrammarError> {
        let sym_source = cnf.sym_source();
        let start = cnf.start().ok_or(GrammarError::MissingStart)?;
        check_known(sym_source, start)?;

        let mut defined = SymbolBitSet::from_elem(sym_source.num_syms(), false);
        let mut terminal_producers: HashMap<T, Vec<Symbol>> = HashMap::new();
        let mut binary_producers: HashMap<(Symbol, Symbol), Vec<Symbol>> = HashMap::new();
        let mut rules = Vec::with_capacity(cnf.rules().len());

        for rule in cnf.rules() {
            check_known(sym_source, rule.lhs)?;
            defined.set(rule.lhs, true);
            let heads = match rule.rhs {
                CnfRhs::Terminal(terminal) => terminal_producers.entry(terminal).or_default(),
                CnfRhs::Binary([left, right]) => {
                    check_known(sym_source, left)?;
                    check_known(sym_source, right)?;
                    binary_producers.entry((left, right)).or_default()
                }
            };
            if !heads.contains(&rule.lhs) {
                heads.push(rule.lhs);
                rules.push(*rule);
            }
        }

        for children in cnf.rules().filter_map(|rule| rule.children()) {
            for child in children {
                if !defined[child] {
                    return Err(GrammarError::UndefinedNonterminal {
                        sym: child,
                        name: sym_source.name_of(child).map(str::to_string),
                    });
                }
            }
        }

        let mut by_left: Vec<_> = binary_producers
            .iter()
            .flat_map(|(&(left, right), heads)| heads.iter().map(move |&lhs| (left, right, lhs)))
            .collect();
        by_left.sort();

        let grammar = Grammar {
            sym_source: sym_source.clone(),
            start,
            terminal_producers,
            binary_producers,
            by_left,
            rules,
        };
        debug!(
            "built grammar with {} symbols, {} terminal rules and {} binary rules",
            grammar.num_syms(),
            grammar.terminal_rule_count(),
            grammar.binary_rule_count()
        );
        grammar.warn_unreachable();
        Ok(grammar)
    }

    /// Returns the non-terminals `A` for which `A -> terminal` is a rule.
    pub fn terminal_producers(&self, terminal: &T) -> &[Symbol] {
        self.terminal_producers
            .get(terminal)
            .map_or(&[][..], |heads| &heads[..])
    }

    /// Checks whether `input` is derivable from the start symbol.
    pub fn recognize(&self, input: &[T]) -> bool {
        Recognizer::new(self).recognize(input)
    }
}

impl<T> Grammar<T> {
    /// Returns the non-terminals `A` for which `A -> left right` is a rule.
    pub fn binary_producers(&self, left: Symbol, right: Symbol) -> &[Symbol] {
        self.binary_producers
            .get(&(left, right))
            .map_or(&[][..], |heads| &heads[..])
    }

    /// Returns binary rules as `(left, right, lhs)` triples whose left child is `left`.
    pub fn binary_rules_with_left(&self, left: Symbol) -> &[(Symbol, Symbol, Symbol)] {
        let begin = self.by_left.partition_point(|&(sym, _, _)| sym < left);
        let end = self.by_left.partition_point(|&(sym, _, _)| sym <= left);
        &self.by_left[begin..end]
    }

    /// Returns the start symbol.
    pub fn start(&self) -> Symbol {
        self.start
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Returns the name of a symbol, if it has one.
    pub fn name_of(&self, sym: Symbol) -> Option<&str> {
        self.sym_source.name_of(sym)
    }

    /// Finds the symbol with the given name.
    pub fn symbol_named(&self, name: &str) -> Option<Symbol> {
        self.sym_source
            .names()
            .iter()
            .position(|n| n.as_deref() == Some(name))
            .map(Symbol::from)
    }

    /// Returns the distinct rules in the order they were first given.
    pub fn rules(&self) -> &[CnfRule<T>] {
        &self.rules[..]
    }

    /// Returns the number of distinct rules of the form `A -> a`.
    pub fn terminal_rule_count(&self) -> usize {
        self.rules.len() - self.by_left.len()
    }

    /// Returns the number of distinct rules of the form `A -> B C`.
    pub fn binary_rule_count(&self) -> usize {
        self.by_left.len()
    }

    /// Returns the set of non-terminals reachable from the start symbol.
    pub fn reachable_symbols(&self) -> SymbolBitSet {
        let mut children = vec![vec![]; self.num_syms()];
        for &(left, right, lhs) in &self.by_left {
            children[lhs.usize()].extend([left, right]);
        }
        let mut reachable = SymbolBitSet::from_elem(self.num_syms(), false);
        reachable.set(self.start, true);
        let mut work_stack = vec![self.start];
        while let Some(work_sym) = work_stack.pop() {
            for &child in &children[work_sym.usize()] {
                if !reachable[child] {
                    reachable.set(child, true);
                    work_stack.push(child);
                }
            }
        }
        reachable
    }

    fn warn_unreachable(&self) {
        let reachable = self.reachable_symbols();
        let mut heads = SymbolBitSet::from_elem(self.num_syms(), false);
        for sym in self.terminal_producers.values().flatten() {
            heads.set(*sym, true);
        }
        for &(_, _, lhs) in &self.by_left {
            heads.set(lhs, true);
        }
        for sym in heads.iter().filter(|&sym| !reachable[sym]) {
            match self.name_of(sym) {
                Some(name) => warn!("non-terminal {} is unreachable from the start symbol", name),
                None => warn!("non-terminal {} is unreachable from the start symbol", sym.usize()),
            }
        }
    }
}

fn check_known(sym_source: &SymbolSource, sym: Symbol) -> Result<(), GrammarError> {
    if sym_source.contains(sym) {
        Ok(())
    } else {
        Err(GrammarError::UnknownSymbol(sym))
    }
}
