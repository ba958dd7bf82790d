//! The three-pass formula parser: tokenize, group, assemble.
//!
//! Deliberately restrictive: `P&Q&R` without extra parentheses is rejected
//! (a biconnective run must have exactly three constituents), and a literal
//! identifier `v` must be parenthesized to avoid colliding with the
//! or-connective. Both are load-bearing quirks of this syntax, reproduced
//! verbatim rather than "improved".

use crate::core::error::ParseError;
use crate::core::formula::Formula;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Connective {
    And,
    Or,
    Conditional,
    Not,
    Universal,
    Existential,
}

impl Connective {
    fn from_char(c: char) -> Option<Connective> {
        Some(match c {
            '&' => Connective::And,
            'v' => Connective::Or,
            '>' => Connective::Conditional,
            '~' => Connective::Not,
            'A' => Connective::Universal,
            'E' => Connective::Existential,
            _ => return None,
        })
    }

    fn is_biconnective(self) -> bool {
        matches!(self, Connective::And | Connective::Or | Connective::Conditional)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum RawToken {
    Connective(Connective),
    /// An identifier run, or an opaque parenthesized span (outer parens
    /// already stripped) to be re-tokenized on demand. The literal `=`
    /// character is also captured here, as its own single-character word —
    /// it is a predicate name like any other for grouping purposes.
    Word(String),
}

/// Pass 1: walk the string tracking paren depth, splitting at depth 0 into
/// connective tokens and maximal identifier/opaque-span runs.
fn tokenize(input: &str) -> Result<Vec<RawToken>, ParseError> {
    if input.is_empty() {
        return Err(ParseError::new("empty formula", input));
    }

    let mut tokens = Vec::new();
    let mut current: Option<String> = None;
    let mut depth: i32 = 0;

    for c in input.chars() {
        match c {
            '(' => {
                depth += 1;
                if depth == 1 {
                    if let Some(s) = current.take() {
                        tokens.push(RawToken::Word(s));
                    }
                    current = Some(String::new());
                } else {
                    current.get_or_insert_with(String::new).push(c);
                }
            }
            ')' => {
                depth -= 1;
                if depth == 0 {
                    let s = current
                        .take()
                        .ok_or_else(|| ParseError::new("unexpected ')'", input))?;
                    tokens.push(RawToken::Word(s));
                } else if depth < 0 {
                    return Err(ParseError::new(
                        format!("unexpected ')' in formula '{input}'"),
                        input,
                    ));
                } else {
                    current.get_or_insert_with(String::new).push(c);
                }
            }
            _ if depth == 0 => {
                if let Some(connective) = Connective::from_char(c) {
                    if let Some(s) = current.take() {
                        tokens.push(RawToken::Word(s));
                    }
                    tokens.push(RawToken::Connective(connective));
                } else if c == '=' {
                    if let Some(s) = current.take() {
                        tokens.push(RawToken::Word(s));
                    }
                    tokens.push(RawToken::Word("=".to_string()));
                } else {
                    current.get_or_insert_with(String::new).push(c);
                }
            }
            _ => current.get_or_insert_with(String::new).push(c),
        }
    }

    if depth != 0 {
        return Err(ParseError::new(
            format!("unbalanced parentheses in formula '{input}'"),
            input,
        ));
    }
    if let Some(s) = current.take() {
        tokens.push(RawToken::Word(s));
    }
    if tokens.is_empty() {
        return Err(ParseError::new("empty formula", input));
    }

    Ok(tokens)
}

enum GroupedToken {
    Connective(Connective),
    Run(Vec<String>),
}

/// Pass 2a: consecutive word tokens are grouped into runs; connectives
/// separate runs and pass through unchanged.
fn group_tokens(tokens: &[RawToken]) -> Vec<GroupedToken> {
    let mut grouped = Vec::new();
    let mut current_run: Option<Vec<String>> = None;

    for token in tokens {
        match token {
            RawToken::Connective(c) => {
                if let Some(run) = current_run.take() {
                    grouped.push(GroupedToken::Run(run));
                }
                grouped.push(GroupedToken::Connective(*c));
            }
            RawToken::Word(w) => current_run.get_or_insert_with(Vec::new).push(w.clone()),
        }
    }
    if let Some(run) = current_run.take() {
        grouped.push(GroupedToken::Run(run));
    }

    grouped
}

enum Constituent {
    Connective(Connective),
    Formula(Formula),
}

/// Pass 2b: a run of length 1 recurses into [create_formula], length 2 is a
/// predicate with a parenthesized argument list, length 3 is an infix
/// predicate, and anything longer is a hard error.
fn create_constituents(
    grouped: Vec<GroupedToken>,
    reserved: &[String],
    original: &str,
) -> Result<Vec<Constituent>, ParseError> {
    let mut constituents = Vec::with_capacity(grouped.len());

    for group in grouped {
        match group {
            GroupedToken::Connective(c) => constituents.push(Constituent::Connective(c)),
            GroupedToken::Run(run) => match run.len() {
                1 => constituents.push(Constituent::Formula(create_formula(&run[0], reserved)?)),
                2 => {
                    let args: Vec<String> = run[1].split(',').map(str::to_string).collect();
                    constituents.push(Constituent::Formula(Formula::Predicate(
                        run[0].clone(),
                        args,
                    )));
                }
                3 => {
                    constituents.push(Constituent::Formula(Formula::Predicate(
                        run[1].clone(),
                        vec![run[0].clone(), run[2].clone()],
                    )));
                }
                _ => {
                    return Err(ParseError::new(
                        "formula has more than 3 tokens next to each other without any connective",
                        original,
                    ))
                }
            },
        }
    }

    Ok(constituents)
}

/// Pass 3 (non-quantifier case): assembles a run of constituents into a
/// binary node, a `Not`, or passes through a single already-built formula.
fn create_unquantified_formula(
    tokens: &[RawToken],
    reserved: &[String],
    original: &str,
) -> Result<Formula, ParseError> {
    let grouped = group_tokens(tokens);
    let constituents = create_constituents(grouped, reserved, original)?;

    let has_biconnective = constituents
        .iter()
        .any(|c| matches!(c, Constituent::Connective(cc) if cc.is_biconnective()));
    let has_not = constituents
        .iter()
        .any(|c| matches!(c, Constituent::Connective(Connective::Not)));

    if has_biconnective {
        if constituents.len() != 3 {
            return Err(ParseError::new(
                "main connective is a biconnective, but the number of constituents are not 3",
                original,
            ));
        }
        let mut constituents = constituents.into_iter();
        let left = constituents.next().unwrap();
        let connective = constituents.next().unwrap();
        let right = constituents.next().unwrap();

        let connective = match connective {
            Constituent::Connective(c) if c.is_biconnective() => c,
            _ => {
                return Err(ParseError::new(
                    "main connective is a biconnective, but it's not the 2nd constituent",
                    original,
                ))
            }
        };
        let left = match left {
            Constituent::Formula(f) => f,
            _ => return Err(ParseError::new("expected a formula as the left operand", original)),
        };
        let right = match right {
            Constituent::Formula(f) => f,
            _ => {
                return Err(ParseError::new(
                    "expected a formula as the right operand",
                    original,
                ))
            }
        };

        Ok(match connective {
            Connective::And => Formula::And(Box::new(left), Box::new(right)),
            Connective::Or => Formula::Or(Box::new(left), Box::new(right)),
            Connective::Conditional => Formula::Conditional(Box::new(left), Box::new(right)),
            Connective::Not | Connective::Universal | Connective::Existential => unreachable!(),
        })
    } else if has_not {
        if constituents.len() != 2 {
            return Err(ParseError::new(
                "main connective is a uniconnective, but the number of constituents are not 2",
                original,
            ));
        }
        let mut constituents = constituents.into_iter();
        match constituents.next().unwrap() {
            Constituent::Connective(Connective::Not) => {}
            _ => {
                return Err(ParseError::new(
                    "main connective is a uniconnective, but it's not the 1st constituent",
                    original,
                ))
            }
        }
        let inner = match constituents.next().unwrap() {
            Constituent::Formula(f) => f,
            _ => {
                return Err(ParseError::new(
                    "expected a formula operand for negation",
                    original,
                ))
            }
        };
        Ok(Formula::Not(Box::new(inner)))
    } else if constituents.len() == 1 {
        match constituents.into_iter().next().unwrap() {
            Constituent::Formula(f) => Ok(f),
            Constituent::Connective(_) => Err(ParseError::new(
                format!("formula '{original}' cannot be interpreted"),
                original,
            )),
        }
    } else {
        Err(ParseError::new(
            format!("formula '{original}' cannot be interpreted"),
            original,
        ))
    }
}

/// Recursive entry point for a formula substring: tokenizes, then either
/// recognizes a single atomic identifier, recurses into a single
/// parenthesized span, handles a leading quantifier, or defers to
/// [create_unquantified_formula].
fn create_formula(formula_str: &str, reserved: &[String]) -> Result<Formula, ParseError> {
    let tokens = tokenize(formula_str)?;

    if tokens.len() == 1 {
        return match &tokens[0] {
            RawToken::Connective(_) => Err(ParseError::new(
                format!("formula '{formula_str}' has one constituent, and it is a connective"),
                formula_str,
            )),
            RawToken::Word(word) => {
                let inner_tokens = tokenize(word)?;
                let is_atomic = matches!(
                    inner_tokens.as_slice(),
                    [RawToken::Word(w)] if w == word
                );
                if is_atomic {
                    Ok(Formula::Atomic(word.clone()))
                } else {
                    create_formula(word, reserved)
                }
            }
        };
    }

    match &tokens[0] {
        RawToken::Connective(c @ (Connective::Universal | Connective::Existential)) => {
            let quantifier = *c;
            if tokens.len() < 3 {
                return Err(ParseError::new(
                    format!(
                        "formula '{formula_str}' is quantified, but missing the variable or the formula to be quantified"
                    ),
                    formula_str,
                ));
            }
            let variable = match &tokens[1] {
                RawToken::Word(w) => w.clone(),
                RawToken::Connective(_) => {
                    return Err(ParseError::new(
                        "expected a bound variable name after quantifier",
                        formula_str,
                    ))
                }
            };
            if reserved.iter().any(|r| r == &variable) {
                return Err(ParseError::new(
                    format!(
                        "formula '{formula_str}' has an already used quantified variable '{variable}'"
                    ),
                    formula_str,
                ));
            }
            let mut new_reserved = reserved.to_vec();
            new_reserved.push(variable.clone());
            let inner = create_unquantified_formula(&tokens[2..], &new_reserved, formula_str)?;
            Ok(match quantifier {
                Connective::Universal => Formula::Universal(variable, Box::new(inner)),
                Connective::Existential => Formula::Existential(variable, Box::new(inner)),
                _ => unreachable!(),
            })
        }
        _ => create_unquantified_formula(&tokens, reserved, formula_str),
    }
}

/// Parses a formula-syntax string into a [Formula].
pub fn parse_formula(text: &str) -> Result<Formula, ParseError> {
    create_formula(text, &[])
}
