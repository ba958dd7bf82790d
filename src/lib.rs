//! A verifier for Lemmon-style natural-deduction proofs in first-order logic
//! with equality.
//!
//! * The core library exposes [parser::parse_formula], [parser::build_proof],
//!   and [core::proof::Proof::is_valid].
//! * lemmon is meant to be driven from a binary crate via [shell::main];
//!   library use is also supported directly through the `core`/`parser`
//!   modules.

pub mod core;
pub mod parser;
pub mod shell;
mod util;

mod tests;
