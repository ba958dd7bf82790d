//! The ordered collection of lines produced by decoding a proof text.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::core::formula::Formula;
use crate::core::line::{Line, LineId};
use crate::core::rule::Rule;

struct Entry {
    label: String,
    source_text: String,
    line: Line,
}

/// An ordered, append-only collection of lines, each retaining the original
/// source text it was decoded from plus its resolved [Line].
///
/// Lines are addressed by [LineId], a stable index into this proof's arena
/// (see [crate::core::line::LineId]); this is what gives dependency sets and
/// rule citations their identity semantics. Per-line validity is memoized
/// lazily, since [Line::is_valid] recursion can revisit the same cited line
/// from multiple rule checks.
pub struct Proof {
    entries: Vec<Entry>,
    labels: HashMap<String, LineId>,
    validity_cache: RefCell<HashMap<LineId, bool>>,
}

impl Proof {
    pub(crate) fn new() -> Proof {
        Proof {
            entries: Vec::new(),
            labels: HashMap::new(),
            validity_cache: RefCell::new(HashMap::new()),
        }
    }

    /// Reserves the next `LineId` without storing anything, so a line's own
    /// dependency set can reference itself (self-dependency for Premise and
    /// Assumption) before the `Line` itself is built.
    pub(crate) fn next_id(&self) -> LineId {
        self.entries.len()
    }

    pub(crate) fn label_id(&self, label: &str) -> Option<LineId> {
        self.labels.get(label).copied()
    }

    /// Appends a fully-resolved line, under `label`, retaining `source_text`
    /// verbatim. Returns the `LineId` it was assigned — must equal the value
    /// [Proof::next_id] returned before the line was constructed.
    pub(crate) fn push(&mut self, label: String, source_text: String, line: Line) -> LineId {
        let id = self.entries.len();
        self.labels.insert(label.clone(), id);
        self.entries.push(Entry {
            label,
            source_text,
            line,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn label(&self, id: LineId) -> &str {
        &self.entries[id].label
    }

    pub fn source_text(&self, id: LineId) -> &str {
        &self.entries[id].source_text
    }

    pub fn formula(&self, id: LineId) -> &Formula {
        self.entries[id].line.formula()
    }

    pub fn rule(&self, id: LineId) -> &Rule {
        self.entries[id].line.rule()
    }

    pub fn dependencies(&self, id: LineId) -> &[LineId] {
        self.entries[id].line.dependencies()
    }

    pub fn is_assumption(&self, id: LineId) -> bool {
        self.entries[id].line.is_assumption()
    }

    /// Iterates all lines in source order as `(label, source_text, LineId)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, LineId)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(id, entry)| (entry.label.as_str(), entry.source_text.as_str(), id))
    }

    /// Whether the line at `id` is a correct application of its rule.
    ///
    /// Total: never fails. Recursively demands every line the rule cites
    /// (other than a Premise/Assumption's self-citation) is itself valid
    /// before applying the rule's own structural and dependency conditions.
    /// Results are memoized per [LineId], which is sound because lines are
    /// immutable and the citation graph is acyclic (citations only reach
    /// earlier lines, plus the controlled self-reference).
    pub fn is_valid(&self, id: LineId) -> bool {
        if let Some(&cached) = self.validity_cache.borrow().get(&id) {
            return cached;
        }
        let rule = self.rule(id).clone();
        let premises_valid = rule
            .cited_lines()
            .iter()
            .all(|&cited| cited == id || self.is_valid(cited));
        let result = premises_valid && rule.check(self, id);
        self.validity_cache.borrow_mut().insert(id, result);
        result
    }
}
