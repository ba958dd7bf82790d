//! The ingestion pipeline: a formula-syntax parser and a proof-text decoder
//! built on top of it.

pub mod decode;
pub mod formula;

pub use decode::build_proof;
pub use formula::parse_formula;
