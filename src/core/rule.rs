//! The 16 inference rules of the Lemmon-style natural-deduction system, and
//! the validity conditions each one checks against a [crate::core::proof::Proof].

use crate::core::error::ParseError;
use crate::core::formula::Formula;
use crate::core::line::LineId;
use crate::core::proof::Proof;

/// One inference rule, carrying the cited premise lines (already resolved to
/// [LineId]s) its arity demands.
#[derive(Debug, Clone)]
pub enum Rule {
    Premise,
    Assumption,
    AndIntroduction(LineId, LineId),
    AndElimination(LineId),
    OrIntroduction(LineId),
    OrElimination(LineId, LineId, LineId, LineId, LineId),
    ConditionalProof(LineId, LineId),
    ModusPonens(LineId, LineId),
    DoubleNegationIntroduction(LineId),
    DoubleNegationElimination(LineId),
    ModusTollens(LineId, LineId),
    ReductioAdAbsurdum(LineId, LineId),
    UniversalIntroduction(LineId),
    UniversalElimination(LineId),
    ExistentialIntroduction(LineId),
    ExistentialElimination(LineId, LineId, LineId),
    EqualityIntroduction,
    EqualityElimination(LineId, LineId),
}

impl Rule {
    /// Constructs a rule from its symbol and its cited premise lines, in the
    /// order the symbol's table entry demands.
    ///
    /// Fails if the symbol is unknown or the cited-line count does not match
    /// the rule's fixed arity.
    pub fn create(symbol: &str, lines: &[LineId]) -> Result<Rule, ParseError> {
        let arity = Rule::arity(symbol).ok_or_else(|| {
            ParseError::new(format!("rule '{symbol}' is invalid"), symbol.to_string())
        })?;
        if lines.len() != arity {
            return Err(ParseError::new(
                format!("rule '{symbol}' has invalid number of line numbers"),
                symbol.to_string(),
            ));
        }
        Ok(match symbol {
            "P" => Rule::Premise,
            "A" => Rule::Assumption,
            "&I" => Rule::AndIntroduction(lines[0], lines[1]),
            "&E" => Rule::AndElimination(lines[0]),
            "vI" => Rule::OrIntroduction(lines[0]),
            "vE" => Rule::OrElimination(lines[0], lines[1], lines[2], lines[3], lines[4]),
            "CP" => Rule::ConditionalProof(lines[0], lines[1]),
            "MP" => Rule::ModusPonens(lines[0], lines[1]),
            "DNI" => Rule::DoubleNegationIntroduction(lines[0]),
            "DNE" => Rule::DoubleNegationElimination(lines[0]),
            "MT" => Rule::ModusTollens(lines[0], lines[1]),
            "RAA" => Rule::ReductioAdAbsurdum(lines[0], lines[1]),
            "UI" => Rule::UniversalIntroduction(lines[0]),
            "UE" => Rule::UniversalElimination(lines[0]),
            "EI" => Rule::ExistentialIntroduction(lines[0]),
            "EE" => Rule::ExistentialElimination(lines[0], lines[1], lines[2]),
            "=I" => Rule::EqualityIntroduction,
            "=E" => Rule::EqualityElimination(lines[0], lines[1]),
            _ => unreachable!("arity lookup above already rejected unknown symbols"),
        })
    }

    /// The fixed arity for a rule symbol, or `None` if the symbol is unknown.
    pub fn arity(symbol: &str) -> Option<usize> {
        Some(match symbol {
            "P" | "A" | "=I" => 0,
            "&E" | "vI" | "DNI" | "DNE" | "UI" | "UE" | "EI" => 1,
            "&I" | "CP" | "MP" | "MT" | "RAA" | "=E" => 2,
            "EE" => 3,
            "vE" => 5,
            _ => return None,
        })
    }

    /// The symbol this rule was constructed from.
    pub fn symbol(&self) -> &'static str {
        match self {
            Rule::Premise => "P",
            Rule::Assumption => "A",
            Rule::AndIntroduction(..) => "&I",
            Rule::AndElimination(..) => "&E",
            Rule::OrIntroduction(..) => "vI",
            Rule::OrElimination(..) => "vE",
            Rule::ConditionalProof(..) => "CP",
            Rule::ModusPonens(..) => "MP",
            Rule::DoubleNegationIntroduction(..) => "DNI",
            Rule::DoubleNegationElimination(..) => "DNE",
            Rule::ModusTollens(..) => "MT",
            Rule::ReductioAdAbsurdum(..) => "RAA",
            Rule::UniversalIntroduction(..) => "UI",
            Rule::UniversalElimination(..) => "UE",
            Rule::ExistentialIntroduction(..) => "EI",
            Rule::ExistentialElimination(..) => "EE",
            Rule::EqualityIntroduction => "=I",
            Rule::EqualityElimination(..) => "=E",
        }
    }

    /// True iff this rule is Premise or Assumption (see [crate::core::line::Line::is_assumption]).
    pub fn is_assumption(&self) -> bool {
        matches!(self, Rule::Premise | Rule::Assumption)
    }

    /// The cited premise lines, in citation order. Empty for 0-arity rules.
    pub fn cited_lines(&self) -> Vec<LineId> {
        match *self {
            Rule::Premise | Rule::Assumption | Rule::EqualityIntroduction => vec![],
            Rule::AndElimination(a)
            | Rule::OrIntroduction(a)
            | Rule::DoubleNegationIntroduction(a)
            | Rule::DoubleNegationElimination(a)
            | Rule::UniversalIntroduction(a)
            | Rule::UniversalElimination(a)
            | Rule::ExistentialIntroduction(a) => vec![a],
            Rule::AndIntroduction(a, b)
            | Rule::ConditionalProof(a, b)
            | Rule::ModusPonens(a, b)
            | Rule::ModusTollens(a, b)
            | Rule::ReductioAdAbsurdum(a, b)
            | Rule::EqualityElimination(a, b) => vec![a, b],
            Rule::ExistentialElimination(a, b, c) => vec![a, b, c],
            Rule::OrElimination(a, b, c, d, e) => vec![a, b, c, d, e],
        }
    }

    /// The expected dependency set E: the concatenation of every cited
    /// premise's own dependency set, with rule-specific assumptions
    /// discharged (removed).
    fn expected_dependencies(&self, proof: &Proof) -> Vec<LineId> {
        let mut expected: Vec<LineId> = self
            .cited_lines()
            .iter()
            .flat_map(|&cited| proof.dependencies(cited).iter().copied())
            .collect();
        let discharge = |expected: &mut Vec<LineId>, discharged: LineId| {
            expected.retain(|&id| id != discharged);
        };
        match *self {
            Rule::OrElimination(_, a1, _, a2, _) => {
                discharge(&mut expected, a1);
                discharge(&mut expected, a2);
            }
            Rule::ConditionalProof(a, _) | Rule::ReductioAdAbsurdum(a, _) => {
                discharge(&mut expected, a);
            }
            Rule::ExistentialElimination(_, t, _) => {
                discharge(&mut expected, t);
            }
            _ => {}
        }
        expected
    }

    /// Checks this rule's full validity condition for the line it justifies,
    /// given the frozen proof it lives in. Assumes every cited premise has
    /// already been recursively confirmed valid (step 1 of the protocol in
    /// §4.3 is the caller's responsibility; see [Proof::is_valid]).
    pub(crate) fn check(&self, proof: &Proof, own_id: LineId) -> bool {
        let own_formula = proof.formula(own_id);
        let own_dependencies = proof.dependencies(own_id);

        // Premise and Assumption do not follow the shared "expected
        // dependencies from cited premises" protocol below: they have no
        // premises at all, and their dependency-set requirement is the
        // self-reference check directly, not an empty expected set.
        if matches!(self, Rule::Premise | Rule::Assumption) {
            return own_dependencies.len() == 1 && own_dependencies[0] == own_id;
        }

        if !same_set(own_dependencies, &self.expected_dependencies(proof)) {
            return false;
        }

        match *self {
            Rule::Premise | Rule::Assumption => unreachable!("handled above"),
            Rule::AndIntroduction(a, b) => match own_formula {
                Formula::And(left, right) => {
                    left.equal(proof.formula(a)) && right.equal(proof.formula(b))
                }
                _ => false,
            },
            Rule::AndElimination(a) => match proof.formula(a) {
                Formula::And(left, right) => {
                    own_formula.equal(left) || own_formula.equal(right)
                }
                _ => false,
            },
            Rule::OrIntroduction(a) => match own_formula {
                Formula::Or(left, right) => {
                    proof.formula(a).equal(left) || proof.formula(a).equal(right)
                }
                _ => false,
            },
            Rule::OrElimination(d, a1, c1, a2, c2) => {
                let (x, y) = match proof.formula(d) {
                    Formula::Or(x, y) => (x.as_ref(), y.as_ref()),
                    _ => return false,
                };
                proof.is_assumption(a1)
                    && proof.formula(a1).equal(x)
                    && proof.dependencies(c1).contains(&a1)
                    && proof.formula(c1).equal(own_formula)
                    && proof.is_assumption(a2)
                    && proof.formula(a2).equal(y)
                    && proof.dependencies(c2).contains(&a2)
                    && proof.formula(c2).equal(own_formula)
            }
            Rule::ConditionalProof(a, c) => match own_formula {
                Formula::Conditional(left, right) => {
                    proof.is_assumption(a)
                        && proof.dependencies(c).contains(&a)
                        && proof.formula(a).equal(left)
                        && proof.formula(c).equal(right)
                }
                _ => false,
            },
            Rule::ModusPonens(i, a) => match proof.formula(i) {
                Formula::Conditional(left, right) => {
                    left.equal(proof.formula(a)) && right.equal(own_formula)
                }
                _ => false,
            },
            Rule::DoubleNegationIntroduction(a) => match own_formula {
                Formula::Not(outer) => match outer.as_ref() {
                    Formula::Not(inner) => inner.equal(proof.formula(a)),
                    _ => false,
                },
                _ => false,
            },
            Rule::DoubleNegationElimination(a) => match proof.formula(a) {
                Formula::Not(outer) => match outer.as_ref() {
                    Formula::Not(inner) => inner.equal(own_formula),
                    _ => false,
                },
                _ => false,
            },
            Rule::ModusTollens(i, n) => {
                let (x, y) = match proof.formula(i) {
                    Formula::Conditional(x, y) => (x.as_ref(), y.as_ref()),
                    _ => return false,
                };
                let n_inner = match proof.formula(n) {
                    Formula::Not(inner) => inner.as_ref(),
                    _ => return false,
                };
                let own_inner = match own_formula {
                    Formula::Not(inner) => inner.as_ref(),
                    _ => return false,
                };
                y.equal(n_inner) && x.equal(own_inner)
            }
            Rule::ReductioAdAbsurdum(a, c) => {
                if !proof.is_assumption(a) || !proof.dependencies(c).contains(&a) {
                    return false;
                }
                let (x, not_x) = match proof.formula(c) {
                    Formula::And(x, not_x) => (x.as_ref(), not_x.as_ref()),
                    _ => return false,
                };
                let negated = match not_x {
                    Formula::Not(inner) => inner.as_ref(),
                    _ => return false,
                };
                if !x.equal(negated) {
                    return false;
                }
                match own_formula {
                    Formula::Not(inner) => inner.equal(proof.formula(a)),
                    _ => false,
                }
            }
            Rule::UniversalIntroduction(a) => {
                let (v, body) = match own_formula {
                    Formula::Universal(v, body) => (v.as_str(), body.as_ref()),
                    _ => return false,
                };
                let other = proof.formula(a);
                match body.free_variable_correspondence(v, other) {
                    Some(w) => {
                        let mut map = crate::core::formula::VariableMap::new();
                        map.insert(v.to_string(), w.clone());
                        body.equal_under_map(other, &map)
                            && !proof
                                .dependencies(a)
                                .iter()
                                .any(|&dep| proof.formula(dep).contains_variable(&w))
                    }
                    None => body.equal(other),
                }
            }
            Rule::UniversalElimination(a) => {
                let (v, body) = match proof.formula(a) {
                    Formula::Universal(v, body) => (v.as_str(), body.as_ref()),
                    _ => return false,
                };
                match body.free_variable_correspondence(v, own_formula) {
                    Some(w) => {
                        let mut map = crate::core::formula::VariableMap::new();
                        map.insert(v.to_string(), w);
                        body.equal_under_map(own_formula, &map)
                    }
                    None => body.equal(own_formula),
                }
            }
            Rule::ExistentialIntroduction(a) => {
                let (v, body) = match own_formula {
                    Formula::Existential(v, body) => (v.as_str(), body.as_ref()),
                    _ => return false,
                };
                let other = proof.formula(a);
                match body.free_variable_correspondence(v, other) {
                    Some(w) => {
                        let mut map = crate::core::formula::VariableMap::new();
                        map.insert(v.to_string(), w);
                        body.equal_under_map(other, &map)
                    }
                    None => body.equal(other),
                }
            }
            Rule::ExistentialElimination(e, t, c) => {
                let (v, body) = match proof.formula(e) {
                    Formula::Existential(v, body) => (v.as_str(), body.as_ref()),
                    _ => return false,
                };
                if !proof.is_assumption(t) {
                    return false;
                }
                let typical = proof.formula(t);
                match body.free_variable_correspondence(v, typical) {
                    Some(w) => {
                        let mut map = crate::core::formula::VariableMap::new();
                        map.insert(v.to_string(), w.clone());
                        if !body.equal_under_map(typical, &map) {
                            return false;
                        }
                        if proof.formula(c).contains_variable(&w) {
                            return false;
                        }
                        if own_dependencies
                            .iter()
                            .any(|&dep| proof.formula(dep).contains_variable(&w))
                        {
                            return false;
                        }
                    }
                    None => {
                        if !body.equal(typical) {
                            return false;
                        }
                    }
                }
                proof.formula(c).equal(own_formula)
            }
            Rule::EqualityIntroduction => match own_formula {
                Formula::Predicate(name, args) => {
                    name == "=" && args.len() == 2 && args[0] == args[1]
                }
                _ => false,
            },
            Rule::EqualityElimination(eq, a) => {
                let (x, y) = match proof.formula(eq) {
                    Formula::Predicate(name, args) if name == "=" && args.len() == 2 => {
                        (args[0].clone(), args[1].clone())
                    }
                    _ => return false,
                };
                let formula_a = proof.formula(a);
                let mut xy = crate::core::formula::VariableMap::new();
                xy.insert(x.clone(), y.clone());
                let mut yx = crate::core::formula::VariableMap::new();
                yx.insert(y, x);
                formula_a.equal_under_map(own_formula, &xy) || formula_a.equal_under_map(own_formula, &yx)
            }
        }
    }
}

/// Set equality by identity, ignoring duplicates and order, checked
/// bidirectionally (the "identity-set-equal" comparison named throughout §4.3).
fn same_set(a: &[LineId], b: &[LineId]) -> bool {
    a.iter().all(|x| b.contains(x)) && b.iter().all(|x| a.contains(x))
}
