//! Decodes the proof-line text grammar into a [Proof].

use crate::core::error::{ParseError, ProofBuildError};
use crate::core::line::{Line, LineId};
use crate::core::proof::Proof;
use crate::core::rule::Rule;
use crate::parser::formula::parse_formula;

/// Resolves a comma-separated label list against already-built lines,
/// treating `own_label` as a valid self-reference (used by deps, not by
/// rule citations, which never refer to their own line).
fn resolve_labels(
    field: &str,
    proof: &Proof,
    own_label: Option<&str>,
    line: &str,
) -> Result<(Vec<LineId>, bool), ProofBuildError> {
    let mut ids = Vec::new();
    let mut self_dependency = false;
    for label in field.split(',') {
        if Some(label) == own_label {
            self_dependency = true;
            continue;
        }
        match proof.label_id(label) {
            Some(id) => ids.push(id),
            None => {
                return Err(ProofBuildError::UnknownLabel {
                    line: line.to_string(),
                    label: label.to_string(),
                })
            }
        }
    }
    Ok((ids, self_dependency))
}

/// Decodes a full proof text into a [Proof], in source order.
///
/// Each non-blank, comment-stripped line must have 4 or 5 whitespace-
/// separated fields: `<deps> <line-no> <formula> [<rule-cites>] <rule-symbol>`,
/// the bracketed field present iff the rule has nonzero arity.
pub fn build_proof(text: &str) -> Result<Proof, ProofBuildError> {
    let mut proof = Proof::new();

    for raw_line in text.lines() {
        let stripped = match raw_line.split_once('#') {
            Some((before, _)) => before,
            None => raw_line,
        };
        let stripped = stripped.trim();
        if stripped.is_empty() {
            continue;
        }

        log::debug!("decoding proof line: {stripped}");
        let fields: Vec<&str> = stripped.split_whitespace().collect();
        let (deps_field, line_no, formula_field, cites_field, rule_symbol) = match fields.len() {
            4 => (fields[0], fields[1], fields[2], None, fields[3]),
            5 => (fields[0], fields[1], fields[2], Some(fields[3]), fields[4]),
            _ => {
                log::warn!("malformed proof line: {stripped}");
                return Err(ProofBuildError::MalformedLine {
                    line: stripped.to_string(),
                });
            }
        };

        if line_no == "-" {
            return Err(ProofBuildError::DashAsLabel {
                line: stripped.to_string(),
            });
        }
        if proof.label_id(line_no).is_some() {
            return Err(ProofBuildError::DuplicateLabel {
                line: stripped.to_string(),
                label: line_no.to_string(),
            });
        }

        let own_id = proof.next_id();

        let (dependencies, self_dependency) = if deps_field == "-" {
            (Vec::new(), false)
        } else {
            resolve_labels(deps_field, &proof, Some(line_no), stripped)?
        };

        let formula = parse_formula(formula_field).map_err(|source| {
            log::warn!("formula parse failure on line: {stripped}");
            ProofBuildError::Inner {
                line: stripped.to_string(),
                source,
            }
        })?;

        let cited_ids = match cites_field {
            Some(field) => resolve_labels(field, &proof, None, stripped)?.0,
            None => Vec::new(),
        };
        let rule = Rule::create(rule_symbol, &cited_ids).map_err(|source: ParseError| {
            log::warn!("rule construction failure on line: {stripped}");
            ProofBuildError::Inner {
                line: stripped.to_string(),
                source,
            }
        })?;

        let line = Line::new(dependencies, formula, rule, self_dependency, own_id);
        proof.push(line_no.to_string(), stripped.to_string(), line);
    }

    log::info!("decoded proof with {} lines", proof.len());
    Ok(proof)
}
