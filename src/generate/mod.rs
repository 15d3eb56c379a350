//! Generation of words that a grammar derives.

mod random;

pub use self::random::{Random, RandomGenError};
