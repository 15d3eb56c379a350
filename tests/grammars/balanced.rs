//! Non-empty balanced parentheses.

use cyk::{Cnf, Grammar};

pub fn grammar() -> Grammar<char> {
    let mut cnf = Cnf::new();
    let [start, open, close, tail] = cnf.sym();
    cnf.rule(start)
        .binary([start, start])
        .binary([open, close])
        .binary([open, tail])
        .rule(tail)
        .binary([start, close])
        .rule(open)
        .terminal('(')
        .rule(close)
        .terminal(')');
    cnf.set_start(start);
    cnf.build().unwrap()
}

/// `S -> a | A S` with `A -> ( )`: any number of `()` followed by `a`.
pub fn prefixed_grammar() -> Grammar<char> {
    let mut cnf = Cnf::new();
    let [start, pair, open, close] = cnf.sym();
    cnf.rule(start)
        .terminal('a')
        .binary([pair, start])
        .rule(pair)
        .binary([open, close])
        .rule(open)
        .terminal('(')
        .rule(close)
        .terminal(')');
    cnf.set_start(start);
    cnf.build().unwrap()
}

pub fn is_balanced(word: &[char]) -> bool {
    let mut depth = 0i32;
    for &ch in word {
        depth += match ch {
            '(' => 1,
            ')' => -1,
            _ => return false,
        };
        if depth < 0 {
            return false;
        }
    }
    depth == 0 && !word.is_empty()
}

/// Enumerates every word over `(` and `)` of the given length.
pub fn all_words(len: usize) -> impl Iterator<Item = Vec<char>> {
    (0..1u32 << len).map(move |bits| {
        (0..len)
            .map(|i| if bits & (1 << i) != 0 { '(' } else { ')' })
            .collect()
    })
}
