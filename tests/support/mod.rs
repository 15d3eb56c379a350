#![allow(dead_code)]

use cyk::{Cnf, DerivationTable, Grammar};

pub fn word(text: &str) -> Vec<char> {
    text.chars().collect()
}

pub fn load(rules: &str) -> Grammar<char> {
    Cnf::load(rules)
        .and_then(|cnf| cnf.build().map_err(Into::into))
        .unwrap_or_else(|err| panic!("fixture failed to load: {}", err))
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Collects every cell of a table, in fill order.
pub fn cells(table: &DerivationTable) -> Vec<((usize, usize), Vec<usize>)> {
    table
        .ranges()
        .map(|(start, end)| {
            let syms = table.cell(start, end).map(|sym| sym.usize()).collect();
            ((start, end), syms)
        })
        .collect()
}
