//! The grammar used to illustrate CYK in most textbooks.

pub const RULES: &str = "
S -> A B
S -> B C
A -> B A
A -> a
B -> C C
B -> b
C -> A B
C -> a
";
