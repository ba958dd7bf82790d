//! Error types raised while turning text into formulas, rules, and proofs.

use std::fmt;

/// A structural error encountered while tokenizing or assembling a formula,
/// or while constructing a [crate::core::rule::Rule].
///
/// Raised at parse/construction time only; checking whether an already-built
/// [crate::core::line::Line] is valid never fails (see [crate::core::line::Line::is_valid]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    reason: String,
    offending: String,
}

impl ParseError {
    pub(crate) fn new(reason: impl Into<String>, offending: impl Into<String>) -> Self {
        ParseError {
            reason: reason.into(),
            offending: offending.into(),
        }
    }

    /// The short, human-readable reason this input was rejected.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The offending substring or token, verbatim.
    pub fn offending(&self) -> &str {
        &self.offending
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (in '{}')", self.reason, self.offending)
    }
}

impl std::error::Error for ParseError {}

/// An error encountered while decoding the proof-line grammar into a
/// [crate::core::proof::Proof] (see [crate::parser::decode]).
///
/// Wraps [ParseError] for failures that occur one layer down, in formula
/// parsing or rule construction, so callers can tell which layer failed
/// without losing the offending proof-line text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofBuildError {
    /// A line did not split into 4 or 5 whitespace-separated fields.
    MalformedLine { line: String },
    /// The line-number label `-` was used, which is reserved for "no dependencies".
    DashAsLabel { line: String },
    /// The same line-number label was used twice.
    DuplicateLabel { line: String, label: String },
    /// A dependency or rule citation referred to a label that does not (yet) exist.
    UnknownLabel { line: String, label: String },
    /// Formula parsing or rule construction failed for this line.
    Inner { line: String, source: ParseError },
}

impl ProofBuildError {
    /// The original, unmodified source line this error was raised for.
    pub fn offending_line(&self) -> &str {
        match self {
            ProofBuildError::MalformedLine { line }
            | ProofBuildError::DashAsLabel { line }
            | ProofBuildError::DuplicateLabel { line, .. }
            | ProofBuildError::UnknownLabel { line, .. }
            | ProofBuildError::Inner { line, .. } => line,
        }
    }
}

impl fmt::Display for ProofBuildError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProofBuildError::MalformedLine { line } => {
                write!(f, "malformed proof line (wrong field count): '{line}'")
            }
            ProofBuildError::DashAsLabel { line } => {
                write!(f, "'-' cannot be used as a line label: '{line}'")
            }
            ProofBuildError::DuplicateLabel { line, label } => {
                write!(f, "line label '{label}' already exists: '{line}'")
            }
            ProofBuildError::UnknownLabel { line, label } => {
                write!(f, "unknown line label '{label}': '{line}'")
            }
            ProofBuildError::Inner { line, source } => {
                write!(f, "{source} (in proof line '{line}')")
            }
        }
    }
}

impl std::error::Error for ProofBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProofBuildError::Inner { source, .. } => Some(source),
            _ => None,
        }
    }
}
