//! A single justified step of a proof.

use crate::core::formula::Formula;
use crate::core::rule::Rule;

/// A stable handle into a [crate::core::proof::Proof]'s line arena.
///
/// Assigned at construction order and never reused, so index equality is
/// exactly identity equality — two lines asserting the same formula remain
/// distinguishable dependency-set elements.
pub type LineId = usize;

/// A single line of a proof: an asserted formula, justified by a rule, with
/// an explicit set of open-assumption dependencies.
///
/// Constructed once and never mutated afterward (except for the controlled
/// self-dependency append performed immediately at construction time, before
/// the line is otherwise observable).
#[derive(Debug, Clone)]
pub struct Line {
    pub(crate) formula: Formula,
    pub(crate) rule: Rule,
    pub(crate) dependencies: Vec<LineId>,
    pub(crate) is_assumption: bool,
}

impl Line {
    /// Builds a line from already-resolved dependencies, a formula, and a
    /// constructed rule. `own_id` is the `LineId` this line will be stored
    /// under; if `self_dependency` is set, `own_id` is appended to the
    /// dependency set (used by Premise and Assumption).
    pub(crate) fn new(
        mut dependencies: Vec<LineId>,
        formula: Formula,
        rule: Rule,
        self_dependency: bool,
        own_id: LineId,
    ) -> Line {
        let is_assumption = rule.is_assumption();
        if self_dependency {
            dependencies.push(own_id);
        }
        Line {
            formula,
            rule,
            dependencies,
            is_assumption,
        }
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn dependencies(&self) -> &[LineId] {
        &self.dependencies
    }

    /// True iff this line's rule is Premise or Assumption.
    pub fn is_assumption(&self) -> bool {
        self.is_assumption
    }
}
