//! First-order formulas and the operations the rule engine builds on:
//! structural equality up to α-equivalence, free-variable correspondence,
//! and variable occurrence search.

use std::collections::HashMap;
use std::fmt;

/// An algebraic tree of first-order formulas with equality.
///
/// Invariants upheld by every constructor reachable from the parser
/// (see [crate::parser::formula]): predicate argument lists are never
/// empty, and a quantifier's bound variable is never reused as a binder
/// by an enclosing quantifier of the same formula.
#[derive(Debug, Clone)]
pub enum Formula {
    /// A propositional atom, e.g. `P`.
    Atomic(String),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Conditional(Box<Formula>, Box<Formula>),
    Not(Box<Formula>),
    /// A named relation over an ordered, non-empty list of argument tokens.
    /// `=` is a predicate like any other, rendered infix by the parser.
    Predicate(String, Vec<String>),
    Universal(String, Box<Formula>),
    Existential(String, Box<Formula>),
}

/// Renaming map threaded through α-equivalence checks, from a bound
/// variable on the left-hand side to its counterpart on the right.
pub type VariableMap = HashMap<String, String>;

impl Formula {
    /// Structural equality up to α-equivalence, started with an empty renaming.
    pub fn equal(&self, other: &Formula) -> bool {
        self.equal_under_map(other, &VariableMap::new())
    }

    /// Structural equality up to α-equivalence, starting from `map`.
    ///
    /// `map` is never mutated for the caller: at a quantifier node a new,
    /// extended map is built for that subtree only. A bound variable already
    /// present in `map` re-bound by a nested quantifier is shadowing, and is
    /// rejected (the comparison fails rather than silently overwriting).
    pub fn equal_under_map(&self, other: &Formula, map: &VariableMap) -> bool {
        use Formula::*;
        match (self, other) {
            (Atomic(a), Atomic(b)) => a == b,
            (And(l1, r1), And(l2, r2))
            | (Or(l1, r1), Or(l2, r2))
            | (Conditional(l1, r1), Conditional(l2, r2)) => {
                l1.equal_under_map(l2, map) && r1.equal_under_map(r2, map)
            }
            (Not(i1), Not(i2)) => i1.equal_under_map(i2, map),
            (Predicate(p1, args1), Predicate(p2, args2)) => {
                p1 == p2
                    && args1.len() == args2.len()
                    && args1
                        .iter()
                        .zip(args2)
                        .all(|(a, b)| Self::variable_matches(a, b, map))
            }
            (Universal(v1, i1), Universal(v2, i2))
            | (Existential(v1, i1), Existential(v2, i2)) => {
                if map.contains_key(v1) {
                    return false;
                }
                let mut extended = map.clone();
                extended.insert(v1.clone(), v2.clone());
                i1.equal_under_map(i2, &extended)
            }
            _ => false,
        }
    }

    fn variable_matches(a: &str, b: &str, map: &VariableMap) -> bool {
        match map.get(a) {
            Some(renamed) => renamed == b,
            None => a == b,
        }
    }

    /// Finds the counterpart of free variable `variable` (as it occurs in
    /// `self`) within `other`, by parallel descent over formulas of matching
    /// shape. Search order: left subtree, right subtree, inner subtree, this
    /// node's own bound-variable slot, then its predicate argument list.
    ///
    /// Returns `None` if no occurrence of `variable` is found, or if `self`
    /// and `other` diverge in shape at the point a match would be made
    /// (e.g. differing predicate arities) — callers must treat that as "no
    /// correspondence", not as a license to assume structural equality.
    pub fn free_variable_correspondence(&self, variable: &str, other: &Formula) -> Option<String> {
        use Formula::*;
        match (self, other) {
            (And(l1, r1), And(l2, r2))
            | (Or(l1, r1), Or(l2, r2))
            | (Conditional(l1, r1), Conditional(l2, r2)) => l1
                .free_variable_correspondence(variable, l2)
                .or_else(|| r1.free_variable_correspondence(variable, r2)),
            (Not(i1), Not(i2)) => i1.free_variable_correspondence(variable, i2),
            (Universal(v1, i1), Universal(v2, i2))
            | (Existential(v1, i1), Existential(v2, i2)) => i1
                .free_variable_correspondence(variable, i2)
                .or_else(|| (v1 == variable).then(|| v2.clone())),
            (Predicate(_, args1), Predicate(_, args2)) => {
                if args1.len() != args2.len() {
                    return None;
                }
                args1
                    .iter()
                    .zip(args2)
                    .find(|(a, _)| a.as_str() == variable)
                    .map(|(_, b)| b.clone())
            }
            _ => None,
        }
    }

    /// True iff `v` occurs anywhere in `self`: as a subformula leaf, as a
    /// quantifier's bound-variable slot, or as a predicate argument token.
    pub fn contains_variable(&self, v: &str) -> bool {
        use Formula::*;
        match self {
            Atomic(_) => false,
            And(l, r) | Or(l, r) | Conditional(l, r) => {
                l.contains_variable(v) || r.contains_variable(v)
            }
            Not(i) => i.contains_variable(v),
            Predicate(_, args) => args.iter().any(|a| a == v),
            Universal(bound, i) | Existential(bound, i) => bound == v || i.contains_variable(v),
        }
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for Formula {}

/// Renders a canonical, fully-parenthesized form that round-trips through
/// [crate::parser::parse_formula].
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Formula::*;
        match self {
            Atomic(name) => write!(f, "{name}"),
            And(l, r) => write!(f, "({l})&({r})"),
            Or(l, r) => write!(f, "({l})v({r})"),
            Conditional(l, r) => write!(f, "({l})>({r})"),
            Not(i) => write!(f, "~({i})"),
            Predicate(name, args) => write!(f, "{name}({})", args.join(",")),
            Universal(v, i) => write!(f, "A({v})({i})"),
            Existential(v, i) => write!(f, "E({v})({i})"),
        }
    }
}
