//! Generate random words from a grammar.

use std::hash::Hash;

use log::trace;
use rand::{thread_rng, Rng};

use crate::grammar::Grammar;
use crate::rule::CnfRhs;
use crate::symbol::Symbol;

/// Returned when we fail to generate a random word.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RandomGenError {
    /// The word would have more terminals than the given limit.
    LimitExceeded,
    /// We reached a non-terminal that heads no rule.
    NoRules(Symbol),
}

/// Extension trait that allows generation.
pub trait Random<T> {
    /// Generates a word derivable from the start symbol, driven by the given
    /// **rng**. Every non-terminal is expanded with one of its rules, chosen
    /// uniformly, leftmost first.
    ///
    /// # Errors
    ///
    /// Returns an error when the word would be longer than `limit`, or when a
    /// non-terminal without rules is reached.
    fn random<R: Rng>(&self, limit: Option<u64>, rng: &mut R) -> Result<Vec<T>, RandomGenError>;

    /// Same as `fn random`, but uses the thread rng.
    fn with_thread_rng(&self, limit: Option<u64>) -> Result<Vec<T>, RandomGenError> {
        let mut rng = thread_rng();
        self.random(limit, &mut rng)
    }
}

impl<T> Random<T> for Grammar<T>
where
    T: Copy + Eq + Hash,
{
    fn random<R: Rng>(&self, limit: Option<u64>, rng: &mut R) -> Result<Vec<T>, RandomGenError> {
        let mut rhs_by_lhs: Vec<Vec<CnfRhs<T>>> = vec![vec![]; self.num_syms()];
        for rule in self.rules() {
            rhs_by_lhs[rule.lhs.usize()].push(rule.rhs);
        }

        let mut work = vec![self.start()];
        let mut result = vec![];
        while let Some(sym) = work.pop() {
            let alternatives = &rhs_by_lhs[sym.usize()];
            if alternatives.is_empty() {
                return Err(RandomGenError::NoRules(sym));
            }
            match alternatives[rng.gen_range(0..alternatives.len())] {
                CnfRhs::Terminal(terminal) => result.push(terminal),
                CnfRhs::Binary([left, right]) => work.extend([right, left]),
            }
            // Every pending non-terminal yields at least one terminal.
            if let Some(max_terminals) = limit {
                if (result.len() + work.len()) as u64 > max_terminals {
                    return Err(RandomGenError::LimitExceeded);
                }
            }
        }
        trace!("generated a word of length {}", result.len());
        Ok(result)
    }
}

#[test]
fn test_simplest_random_generation() {
    use crate::Cnf;

    let mut cnf = Cnf::new();
    let [lhs, a] = cnf.sym();
    cnf.rule(lhs).binary([a, a]).rule(a).terminal('x');
    cnf.set_start(lhs);
    let grammar = cnf.build().unwrap();

    assert_eq!(grammar.with_thread_rng(Some(2)), Ok(vec!['x', 'x']));
    assert_eq!(grammar.with_thread_rng(Some(1)), Err(RandomGenError::LimitExceeded));
}
