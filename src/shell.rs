//! Imperative shell: loads a proof, decodes it, and reports per-line verdicts.

use std::process::ExitCode;

use crate::parser::build_proof;
use crate::util::{file_exists, read_file};

/// Runs the verifier against `input` (a file path, or `-` for standard input),
/// printing one verdict line per decoded proof line to standard output.
///
/// Returns the process exit code: 0 once the proof decodes (regardless of how
/// many individual lines turn out invalid), 1 on a
/// [crate::core::error::ProofBuildError], 2 if the input itself could not be
/// loaded.
pub fn main(input: &str) -> ExitCode {
    log::info!("loading proof input from '{input}'");

    if !file_exists(input) {
        eprintln!("error: no such file '{input}'");
        return ExitCode::from(2);
    }

    let text = match read_file(input) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error reading '{input}': {err}");
            return ExitCode::from(2);
        }
    };

    let proof = match build_proof(&text) {
        Ok(proof) => proof,
        Err(err) => {
            log::error!("proof build failed: {err}");
            eprintln!("error: {err}");
            return ExitCode::from(1);
        }
    };
    log::info!("proof decoded with {} lines", proof.len());

    for (label, _source_text, id) in proof.iter() {
        let valid = proof.is_valid(id);
        log::debug!("line '{label}' is_valid={valid}");
        println!(
            "{label}\t{}\t{}\t{}",
            proof.formula(id),
            proof.rule(id).symbol(),
            if valid { "valid" } else { "invalid" }
        );
    }

    ExitCode::SUCCESS
}
