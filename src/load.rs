//! Allows us to load grammars in Chomsky Normal Form from text.
//!
//! A rule is written on its own line as `HEAD -> BODY`, where the body is
//! either a single terminal character (optionally quoted), or two
//! non-terminal names separated by whitespace. Two characters without
//! whitespace are read as two one-character non-terminal names, so `S -> AB`
//! means `S -> A B`.

use std::error::Error;
use std::fmt;

use elsa::FrozenIndexSet;
use log::debug;

use crate::cnf::Cnf;
use crate::grammar::{Grammar, GrammarError};
use crate::rule::CnfRule;
use crate::symbol::Symbol;

/// Represents an error when loading a grammar from text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LoadError {
    /// The text is malformed.
    Parse {
        /// Human-readable reason for the error.
        reason: String,
        /// Line where the error happened.
        ///
        /// One-indexed. Zero when the input ended early.
        line: u32,
    },
    /// The rules do not form a valid grammar.
    Grammar(GrammarError),
}

impl LoadError {
    fn parse(reason: impl Into<String>, line: u32) -> Self {
        LoadError::Parse {
            reason: reason.into(),
            line,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Parse { reason, line: 0 } => {
                write!(f, "Parse error at end of input: {}", reason)
            }
            LoadError::Parse { reason, line } => {
                write!(f, "Parse error at line {}: {}", line, reason)
            }
            LoadError::Grammar(error) => write!(f, "Invalid grammar: {}", error),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Grammar(error) => Some(error),
            LoadError::Parse { .. } => None,
        }
    }
}

impl From<GrammarError> for LoadError {
    fn from(error: GrammarError) -> Self {
        LoadError::Grammar(error)
    }
}

/// Right-hand side as written in the text.
enum Body<'a> {
    Terminal(char),
    Binary(&'a str, &'a str),
}

/// Maps names to symbols while rules are read.
struct Loader {
    /// Names in order of first appearance. A name's index is its symbol ID.
    names: FrozenIndexSet<String>,
    cnf: Cnf<char>,
}

impl Loader {
    fn new() -> Self {
        Loader {
            names: FrozenIndexSet::new(),
            cnf: Cnf::new(),
        }
    }

    fn sym(&mut self, name: &str) -> Symbol {
        let (index, _) = self.names.insert_full(name.to_string());
        if index == self.cnf.num_syms() {
            self.cnf.next_sym(Some(name.into()))
        } else {
            Symbol::from(index)
        }
    }

    /// Reads a rule line. Returns its head.
    fn rule(&mut self, line: &str, line_no: u32) -> Result<Symbol, LoadError> {
        let (head, body) = line
            .split_once("->")
            .ok_or_else(|| LoadError::parse("expected `->`", line_no))?;
        let head = head.trim();
        if head.is_empty() || head.contains(char::is_whitespace) {
            return Err(LoadError::parse(
                "expected a single non-terminal on the left-hand side",
                line_no,
            ));
        }
        let lhs = self.sym(head);
        let rule = match parse_body(body.trim(), line_no)? {
            Body::Terminal(terminal) => CnfRule::terminal(lhs, terminal),
            Body::Binary(left, right) => CnfRule::binary(lhs, [self.sym(left), self.sym(right)]),
        };
        self.cnf.add_rule(rule);
        Ok(lhs)
    }
}

fn parse_body(body: &str, line_no: u32) -> Result<Body, LoadError> {
    let chars: Vec<char> = body.chars().collect();
    if let [open @ ('\'' | '"'), terminal, close] = chars[..] {
        if open == close {
            return Ok(Body::Terminal(terminal));
        }
    }
    let tokens: Vec<&str> = body.split_whitespace().collect();
    match tokens[..] {
        [] => Err(LoadError::parse("empty right-hand side", line_no)),
        [token] => {
            let mut split = token.char_indices();
            match (split.next(), split.next(), split.next()) {
                (Some((_, terminal)), None, _) => Ok(Body::Terminal(terminal)),
                (Some(_), Some((mid, _)), None) => Ok(Body::Binary(&token[..mid], &token[mid..])),
                _ => Err(LoadError::parse(
                    format!("expected one terminal or two non-terminals, found `{}`", token),
                    line_no,
                )),
            }
        }
        [left, right] => Ok(Body::Binary(left, right)),
        _ => Err(LoadError::parse(
            format!(
                "expected one terminal or two non-terminals, found {} symbols",
                tokens.len()
            ),
            line_no,
        )),
    }
}

fn is_skipped(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

impl Cnf<char> {
    /// Reads rules from text, one per line. Blank lines and lines starting
    /// with `#` are skipped.
    ///
    /// The head of the first rule becomes the start symbol.
    pub fn load(text: &str) -> Result<Self, LoadError> {
        let mut loader = Loader::new();
        let mut start = None;
        for (line_no, line) in (1..).zip(text.lines()) {
            if is_skipped(line) {
                continue;
            }
            let lhs = loader.rule(line, line_no)?;
            start.get_or_insert(lhs);
        }
        if let Some(start) = start {
            loader.cnf.set_start(start);
        }
        debug!("loaded {} rules", loader.cnf.rules().len());
        Ok(loader.cnf)
    }
}

/// One instance of the grammar puzzle: a grammar and the words to check
/// against it.
///
/// The text format is the rule count, the start symbol's name, the rules,
/// the word count, and the words, each on its own line.
#[derive(Clone, Debug)]
pub struct Puzzle {
    /// The grammar.
    pub grammar: Grammar<char>,
    /// Words to check, in input order.
    pub words: Vec<String>,
}

impl Puzzle {
    /// Reads a puzzle.
    pub fn load(text: &str) -> Result<Self, LoadError> {
        let mut lines = (1..).zip(text.lines());
        let mut next_line = |what: &str| {
            lines
                .next()
                .ok_or_else(|| LoadError::parse(format!("expected {}", what), 0))
        };

        let (line_no, line) = next_line("the rule count")?;
        let num_rules = parse_count(line, line_no)?;
        let (_, start_name) = next_line("the start symbol")?;
        let start_name = start_name.trim();
        if start_name.is_empty() {
            return Err(LoadError::parse("empty start symbol", line_no + 1));
        }

        let mut loader = Loader::new();
        let start = loader.sym(start_name);
        loader.cnf.set_start(start);
        for _ in 0..num_rules {
            let (line_no, line) = next_line("a rule")?;
            loader.rule(line, line_no)?;
        }

        let (line_no, line) = next_line("the word count")?;
        let num_words = parse_count(line, line_no)?;
        let mut words = Vec::with_capacity(num_words);
        for _ in 0..num_words {
            let (_, word) = next_line("a word")?;
            words.push(word.trim().to_string());
        }

        let grammar = loader.cnf.build()?;
        Ok(Puzzle { grammar, words })
    }

    /// Checks every word against the grammar.
    pub fn solve(&self) -> Vec<bool> {
        self.words
            .iter()
            .map(|word| {
                let input: Vec<char> = word.chars().collect();
                self.grammar.recognize(&input)
            })
            .collect()
    }
}

fn parse_count(line: &str, line_no: u32) -> Result<usize, LoadError> {
    line.trim()
        .parse()
        .map_err(|_| LoadError::parse(format!("expected a count, found `{}`", line.trim()), line_no))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::CnfRhs;

    #[test]
    fn test_body_forms() {
        let cnf = Cnf::load("S -> AB\nS -> A Bee\nA -> a\nBee -> 'b'\nB -> \" \"").unwrap();
        let rhs: Vec<_> = cnf.rules().map(|rule| rule.rhs).collect();
        let [s, a, b, bee] = [0usize, 1, 2, 3].map(Symbol::from);
        assert_eq!(
            rhs,
            vec![
                CnfRhs::Binary([a, b]),
                CnfRhs::Binary([a, bee]),
                CnfRhs::Terminal('a'),
                CnfRhs::Terminal('b'),
                CnfRhs::Terminal(' '),
            ]
        );
        assert_eq!(cnf.start(), Some(s));
        assert_eq!(cnf.sym_source().name_of(bee), Some("Bee"));
    }

    #[test]
    fn test_skips_comments() {
        let cnf = Cnf::load("# comment\n\nS -> a\n").unwrap();
        assert_eq!(cnf.rules().len(), 1);
    }

    #[test]
    fn test_rejects_bad_arity() {
        assert_eq!(
            Cnf::load("S -> a\nS -> A B C").unwrap_err(),
            LoadError::parse("expected one terminal or two non-terminals, found 3 symbols", 2)
        );
        assert!(matches!(
            Cnf::load("S -> abc"),
            Err(LoadError::Parse { line: 1, .. })
        ));
        assert!(matches!(Cnf::load("S ->"), Err(LoadError::Parse { line: 1, .. })));
        assert!(matches!(Cnf::load("S a"), Err(LoadError::Parse { line: 1, .. })));
        assert!(matches!(Cnf::load(" -> a"), Err(LoadError::Parse { line: 1, .. })));
    }

    #[test]
    fn test_puzzle_ends_early() {
        let error = Puzzle::load("2\nS\nS -> a\n").unwrap_err();
        assert_eq!(error, LoadError::parse("expected a rule", 0));
        assert_eq!(error.to_string(), "Parse error at end of input: expected a rule");
    }
}
