mod support;

use cyk::{Cnf, CnfRule, GrammarError, Symbol};

#[test]
fn test_lookups() {
    let mut cnf = Cnf::new();
    let [start, a, b] = cnf.sym();
    cnf.rule(start)
        .binary([a, b])
        .binary([a, a])
        .rule(b)
        .binary([a, b])
        .terminal('b')
        .rule(a)
        .terminal('a')
        .rule(start)
        .terminal('a');
    cnf.set_start(start);
    let grammar = cnf.build().unwrap();

    assert_eq!(grammar.terminal_producers(&'a'), &[a, start]);
    assert_eq!(grammar.terminal_producers(&'b'), &[b]);
    assert!(grammar.terminal_producers(&'c').is_empty());
    assert_eq!(grammar.binary_producers(a, b), &[start, b]);
    assert_eq!(grammar.binary_producers(a, a), &[start]);
    assert!(grammar.binary_producers(b, a).is_empty());
    assert_eq!(grammar.binary_rules_with_left(a).len(), 3);
    assert!(grammar.binary_rules_with_left(b).is_empty());
    assert_eq!(grammar.terminal_rule_count(), 3);
    assert_eq!(grammar.binary_rule_count(), 3);
}

#[test]
fn test_duplicate_rules_are_merged() {
    let mut cnf = Cnf::new();
    let [start, a] = cnf.sym();
    cnf.rule(start)
        .binary([a, a])
        .binary([a, a])
        .rule(a)
        .terminal('a')
        .terminal('a');
    cnf.set_start(start);
    let grammar = cnf.build().unwrap();
    assert_eq!(grammar.rules().len(), 2);
    assert_eq!(grammar.binary_producers(a, a), &[start]);
    assert_eq!(grammar.terminal_producers(&'a'), &[a]);
}

#[test]
fn test_missing_start() {
    let mut cnf = Cnf::new();
    let [start] = cnf.sym();
    cnf.rule(start).terminal('a');
    assert_eq!(cnf.build().unwrap_err(), GrammarError::MissingStart);
}

#[test]
fn test_unknown_symbol() {
    let mut cnf = Cnf::new();
    let [start, a] = cnf.sym();
    let foreign = Symbol::from(5usize);
    cnf.rule(start).binary([a, foreign]).rule(a).terminal('a');
    cnf.set_start(start);
    assert_eq!(cnf.build().unwrap_err(), GrammarError::UnknownSymbol(foreign));

    let mut cnf: Cnf = Cnf::new();
    cnf.set_start(foreign);
    assert_eq!(cnf.build().unwrap_err(), GrammarError::UnknownSymbol(foreign));
}

#[test]
fn test_undefined_nonterminal() {
    let mut cnf = Cnf::new();
    let [start, a] = cnf.sym();
    let b = cnf.next_sym(Some("B".into()));
    cnf.rule(start).binary([a, b]).rule(a).terminal('a');
    cnf.set_start(start);
    let error = cnf.build().unwrap_err();
    assert_eq!(
        error,
        GrammarError::UndefinedNonterminal {
            sym: b,
            name: Some("B".to_string())
        }
    );
    assert_eq!(error.to_string(), "non-terminal B (2) is used but never defined");
}

#[test]
fn test_start_without_rules_derives_nothing() {
    let mut cnf = Cnf::new();
    let [start, a] = cnf.sym();
    cnf.rule(a).terminal('a');
    cnf.set_start(start);
    let grammar = cnf.build().unwrap();
    assert!(!grammar.recognize(&['a']));
}

#[test]
fn test_reachable_symbols() {
    support::init_logger();
    let mut cnf = Cnf::new();
    let [start, a, b, unused] = cnf.sym();
    cnf.rule(start)
        .binary([a, b])
        .rule(a)
        .terminal('a')
        .rule(b)
        .terminal('b')
        .rule(unused)
        .binary([a, a]);
    cnf.set_start(start);
    let grammar = cnf.build().unwrap();
    let reachable = grammar.reachable_symbols();
    assert_eq!(reachable.iter().collect::<Vec<_>>(), vec![start, a, b]);
    assert!(!reachable[unused]);
}

#[test]
fn test_stringify_loads_back() {
    let mut cnf = Cnf::new();
    let start = cnf.next_sym(Some("Expr".into()));
    let [tail] = cnf.sym();
    let [plus, num] = ["Plus", "Num"].map(|name| cnf.next_sym(Some(name.into())));
    cnf.rule(start)
        .terminal('1')
        .binary([start, tail])
        .rule(tail)
        .binary([plus, num])
        .rule(plus)
        .terminal('+')
        .rule(num)
        .terminals(['1', '2']);
    cnf.set_start(start);

    let text = cnf.stringify();
    assert_eq!(
        text,
        "Expr -> 1\nExpr -> Expr g1\ng1 -> Plus Num\nPlus -> +\nNum -> 1\nNum -> 2\n"
    );

    let reloaded = Cnf::load(&text).unwrap();
    let rules = |cnf: &Cnf| cnf.rules().copied().collect::<Vec<CnfRule<char>>>();
    assert_eq!(rules(&reloaded), rules(&cnf));
    let grammar = reloaded.build().unwrap();
    assert!(grammar.recognize(&support::word("1+2+1")));
    assert!(!grammar.recognize(&support::word("1+")));
}
