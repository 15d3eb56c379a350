//! Reads a grammar puzzle from standard input and prints `true` or `false`
//! for each of its words.

use std::io::{self, Read, Write};
use std::process;

use log::{error, info};

use cyk::Puzzle;

fn main() {
    env_logger::init();

    let mut text = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut text) {
        error!("failed to read standard input: {}", err);
        process::exit(1);
    }

    let puzzle = match Puzzle::load(&text) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };
    info!("checking {} words", puzzle.words.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for answer in puzzle.solve() {
        if writeln!(out, "{}", answer).is_err() {
            process::exit(1);
        }
    }
}
