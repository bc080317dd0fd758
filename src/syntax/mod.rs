mod boolean;
mod regex;
mod render;
mod temporal;

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use regex::RegEx;

/// The logic formalism a formula belongs to.
///
/// Every formula carries exactly one tag, fixed at construction and shared
/// by all of its subformulas. Connective constructors refuse to mix tags.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Logic {
    /// Propositional logic.
    Pl,
    /// Linear temporal logic on finite traces.
    Ltl,
    /// Past linear temporal logic.
    Pltl,
    /// Linear dynamic logic on finite traces.
    Ldl,
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Logic::Pl => "propositional logic",
            Logic::Ltl => "linear temporal logic",
            Logic::Pltl => "past linear temporal logic",
            Logic::Ldl => "linear dynamic logic",
        };
        write!(f, "{name}")
    }
}

/// Error raised by the canonical constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructError {
    /// Operands of one connective carry different logic tags.
    LogicMismatch { expected: Logic, found: Logic },
    /// A connective requiring at least `required` raw operands got fewer.
    InvalidArity { required: usize, found: usize },
}

impl fmt::Display for ConstructError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConstructError::LogicMismatch { expected, found } => {
                write!(f, "operands do not belong to the same logic: expected {expected}, found {found}")
            }
            ConstructError::InvalidArity { required, found } => {
                write!(f, "expected at least {required} operands, found {found}")
            }
        }
    }
}

impl Error for ConstructError {}

/// A formula of one of the supported logics.
///
/// Formulas are immutable values, canonical by construction: the public
/// constructors apply every algebraic rewrite (flattening, idempotence,
/// constant absorption, complementary-pair collapse, double negation) before
/// returning, so two semantically-identical constructions converge to the
/// same value. Commutative operand lists (`And`, `Or`, `Equivalence`) are
/// stored sorted and deduplicated, which makes the derived `PartialEq`,
/// `Hash` and `Ord` order-insensitive.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Formula {
    True(Logic),
    False(Logic),
    /// A named propositional atom; two atoms are equal iff their logic tags
    /// and names coincide.
    Atom(Logic, String),
    Not(Box<Formula>),
    /// Conjunction; at least 2 distinct operands, sorted.
    And(Vec<Formula>),
    /// Disjunction; at least 2 distinct operands, sorted.
    Or(Vec<Formula>),
    /// Right-associative implication chain; order-significant.
    Implies(Vec<Formula>),
    /// Equivalence; at least 2 distinct operands, sorted.
    Equivalence(Vec<Formula>),

    // LTL
    Next(Box<Formula>),
    WeakNext(Box<Formula>),
    Always(Box<Formula>),
    Eventually(Box<Formula>),
    Until(Box<Formula>, Box<Formula>),
    Release(Box<Formula>, Box<Formula>),
    WeakUntil(Box<Formula>, Box<Formula>),
    StrongRelease(Box<Formula>, Box<Formula>),
    /// The LTL constant holding exactly at the final trace position.
    Last,

    // PLTL
    Before(Box<Formula>),
    Once(Box<Formula>),
    Historically(Box<Formula>),
    Since(Box<Formula>, Box<Formula>),
    /// The PLTL constant holding exactly at the initial trace position.
    Start,

    // LDL
    Diamond(Box<RegEx>, Box<Formula>),
    Box(Box<RegEx>, Box<Formula>),
}

impl Formula {
    pub fn atom(logic: Logic, name: impl Into<String>) -> Self {
        Formula::Atom(logic, name.into())
    }

    pub fn top(logic: Logic) -> Self {
        Formula::True(logic)
    }

    pub fn bottom(logic: Logic) -> Self {
        Formula::False(logic)
    }

    /// The logic tag of this formula.
    pub fn logic(&self) -> Logic {
        match self {
            Formula::True(logic) | Formula::False(logic) | Formula::Atom(logic, _) => *logic,
            Formula::Not(arg) => arg.logic(),
            Formula::And(operands)
            | Formula::Or(operands)
            | Formula::Implies(operands)
            | Formula::Equivalence(operands) => operands[0].logic(),
            Formula::Next(_)
            | Formula::WeakNext(_)
            | Formula::Always(_)
            | Formula::Eventually(_)
            | Formula::Until(_, _)
            | Formula::Release(_, _)
            | Formula::WeakUntil(_, _)
            | Formula::StrongRelease(_, _)
            | Formula::Last => Logic::Ltl,
            Formula::Before(_)
            | Formula::Once(_)
            | Formula::Historically(_)
            | Formula::Since(_, _)
            | Formula::Start => Logic::Pltl,
            Formula::Diamond(_, _) | Formula::Box(_, _) => Logic::Ldl,
        }
    }

    /// Depth-first iteration over this formula and every subformula,
    /// including formulas embedded in LDL regular expressions.
    pub fn sub_formulas(&self) -> SubFormulas<'_> {
        SubFormulas { stack: vec![self] }
    }
}

pub struct SubFormulas<'a> {
    stack: Vec<&'a Formula>,
}

impl<'a> Iterator for SubFormulas<'a> {
    type Item = &'a Formula;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        match current {
            Formula::True(_)
            | Formula::False(_)
            | Formula::Atom(_, _)
            | Formula::Last
            | Formula::Start => {}
            Formula::Not(arg)
            | Formula::Next(arg)
            | Formula::WeakNext(arg)
            | Formula::Always(arg)
            | Formula::Eventually(arg)
            | Formula::Before(arg)
            | Formula::Once(arg)
            | Formula::Historically(arg) => self.stack.push(arg),
            Formula::And(operands)
            | Formula::Or(operands)
            | Formula::Implies(operands)
            | Formula::Equivalence(operands) => self.stack.extend(operands.iter().rev()),
            Formula::Until(lhs, rhs)
            | Formula::Release(lhs, rhs)
            | Formula::WeakUntil(lhs, rhs)
            | Formula::StrongRelease(lhs, rhs)
            | Formula::Since(lhs, rhs) => {
                self.stack.push(rhs);
                self.stack.push(lhs);
            }
            Formula::Diamond(re, tail) | Formula::Box(re, tail) => {
                self.stack.push(tail);
                re.push_formulas(&mut self.stack);
            }
        }
        Some(current)
    }
}

/// Checks that all operands carry one logic tag and returns it.
pub(crate) fn same_logic(operands: &[Formula]) -> Result<Logic, ConstructError> {
    let expected = operands[0].logic();
    for operand in &operands[1..] {
        let found = operand.logic();
        if found != expected {
            return Err(ConstructError::LogicMismatch { expected, found });
        }
    }
    Ok(expected)
}

pub(crate) fn require_logic(expected: Logic, formula: &Formula) -> Result<(), ConstructError> {
    let found = formula.logic();
    if found != expected {
        return Err(ConstructError::LogicMismatch { expected, found });
    }
    Ok(())
}
