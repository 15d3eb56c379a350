#![allow(dead_code)]

pub mod balanced;
pub mod textbook;
