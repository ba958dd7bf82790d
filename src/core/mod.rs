//! Core data structures and algorithms: formulas, inference rules, lines,
//! and the proofs built from them.

pub mod error;
pub mod formula;
pub mod line;
pub mod proof;
pub mod rule;
