//! Truth-table semantics for propositional formulas.

use std::error::Error;
use std::fmt;

use fxhash::FxHashMap;

use crate::syntax::{Formula, Logic};

/// A propositional interpretation: an assignment of truth values to atom
/// names. Atoms not mentioned are false.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interpretation {
    truths: FxHashMap<String, bool>,
}

impl Interpretation {
    pub fn new() -> Self {
        Self::default()
    }

    /// The interpretation making exactly the given atoms true.
    pub fn from_set<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            truths: names.into_iter().map(|name| (name.into(), true)).collect(),
        }
    }

    /// An interpretation from explicit name/value pairs.
    pub fn from_map<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        Self {
            truths: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: bool) {
        self.truths.insert(name.into(), value);
    }

    pub fn holds(&self, name: &str) -> bool {
        self.truths.get(name).copied().unwrap_or(false)
    }
}

/// Error raised when a non-propositional formula is handed to [`evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    NonPropositional { found: Logic },
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvaluationError::NonPropositional { found } => {
                write!(
                    f,
                    "only propositional formulas can be evaluated, found a formula of {found}"
                )
            }
        }
    }
}

impl Error for EvaluationError {}

/// Evaluates a propositional formula under an interpretation.
pub fn evaluate(
    formula: &Formula,
    interpretation: &Interpretation,
) -> Result<bool, EvaluationError> {
    let found = formula.logic();
    if found != Logic::Pl {
        return Err(EvaluationError::NonPropositional { found });
    }
    Ok(eval(formula, interpretation))
}

fn eval(formula: &Formula, interpretation: &Interpretation) -> bool {
    match formula {
        Formula::True(_) => true,
        Formula::False(_) => false,
        Formula::Atom(_, name) => interpretation.holds(name),
        Formula::Not(arg) => !eval(arg, interpretation),
        Formula::And(operands) => operands.iter().all(|operand| eval(operand, interpretation)),
        Formula::Or(operands) => operands.iter().any(|operand| eval(operand, interpretation)),
        // a -> b -> c is a disjunction of the negated antecedents and the
        // final consequent.
        Formula::Implies(operands) => {
            let Some((consequent, antecedents)) = operands.split_last() else {
                unreachable!("implications have at least two operands");
            };
            antecedents
                .iter()
                .any(|operand| !eval(operand, interpretation))
                || eval(consequent, interpretation)
        }
        Formula::Equivalence(operands) => {
            let Some((first, rest)) = operands.split_first() else {
                unreachable!("equivalences have at least two operands");
            };
            rest.iter().fold(eval(first, interpretation), |acc, operand| {
                acc == eval(operand, interpretation)
            })
        }
        // a propositional tag rules out every temporal or modal connective
        _ => unreachable!("non-propositional connective under a propositional tag"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_pl;

    fn truth(text: &str, interpretation: &Interpretation) -> bool {
        evaluate(&parse_pl(text).unwrap(), interpretation).unwrap()
    }

    #[test]
    fn atoms_default_to_false() {
        let empty = Interpretation::new();
        assert!(!truth("a", &empty));
        assert!(truth("!a", &empty));
        assert!(truth("true", &empty));
        assert!(!truth("false", &empty));
    }

    #[test]
    fn connective_truth_tables() {
        let only_a = Interpretation::from_set(["a"]);
        assert!(!truth("a & b", &only_a));
        assert!(truth("a | b", &only_a));
        assert!(!truth("a -> b", &only_a));
        assert!(truth("b -> a", &only_a));
        assert!(!truth("a <-> b", &only_a));
        assert!(truth("a <-> a", &only_a));
    }

    #[test]
    fn implication_chain_uses_the_final_consequent() {
        // a -> b -> c holds unless every antecedent holds and c fails
        let ab = Interpretation::from_set(["a", "b"]);
        assert!(!truth("a -> b -> c", &ab));
        let abc = Interpretation::from_set(["a", "b", "c"]);
        assert!(truth("a -> b -> c", &abc));
        let only_b = Interpretation::from_set(["b"]);
        assert!(truth("a -> b -> c", &only_b));
    }

    #[test]
    fn equivalence_folds_pairwise() {
        // (a == b) == c
        let none = Interpretation::new();
        assert!(!truth("a <-> b <-> c", &none));
        let only_c = Interpretation::from_set(["c"]);
        assert!(truth("a <-> b <-> c", &only_c));
        let all = Interpretation::from_set(["a", "b", "c"]);
        assert!(truth("a <-> b <-> c", &all));
    }

    #[test]
    fn from_map_sets_explicit_values() {
        let mixed = Interpretation::from_map([("a", true), ("b", false)]);
        assert!(mixed.holds("a"));
        assert!(!mixed.holds("b"));
        assert!(!mixed.holds("c"));
    }

    #[test]
    fn rejects_non_propositional_formulas() {
        let f = Formula::eventually(Formula::atom(Logic::Ltl, "a")).unwrap();
        assert_eq!(
            evaluate(&f, &Interpretation::new()),
            Err(EvaluationError::NonPropositional { found: Logic::Ltl })
        );
    }
}
