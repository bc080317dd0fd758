//! LDL regular expressions and the box/diamond modalities.

use serde::{Deserialize, Serialize};

use super::{require_logic, ConstructError, Formula, Logic};

/// A regular expression labelling an LDL modality.
///
/// `Union` is commutative (operands sorted and deduplicated); `Seq` is
/// order-preserving, since concatenation is not idempotent. Both flatten
/// nested applications of the same kind. `Star` is idempotent.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RegEx {
    /// A propositional test: one step whose letter satisfies a PL formula.
    Prop(Box<Formula>),
    /// A test of an LDL formula; consumes no step.
    Test(Box<Formula>),
    Union(Vec<RegEx>),
    Seq(Vec<RegEx>),
    Star(Box<RegEx>),
}

impl RegEx {
    /// Wraps a propositional formula as a regular-expression leaf.
    pub fn prop(formula: Formula) -> Result<RegEx, ConstructError> {
        require_logic(Logic::Pl, &formula)?;
        Ok(RegEx::Prop(Box::new(formula)))
    }

    /// Wraps an LDL formula as a test.
    pub fn test(formula: Formula) -> Result<RegEx, ConstructError> {
        require_logic(Logic::Ldl, &formula)?;
        Ok(RegEx::Test(Box::new(formula)))
    }

    /// Union of two or more regular expressions.
    pub fn union(operands: Vec<RegEx>) -> Result<RegEx, ConstructError> {
        if operands.len() < 2 {
            return Err(ConstructError::InvalidArity {
                required: 2,
                found: operands.len(),
            });
        }
        let mut flat = Vec::with_capacity(operands.len());
        let mut stack: Vec<RegEx> = operands.into_iter().rev().collect();
        while let Some(regex) = stack.pop() {
            match regex {
                RegEx::Union(inner) => stack.extend(inner.into_iter().rev()),
                other => flat.push(other),
            }
        }
        flat.sort();
        flat.dedup();
        match flat.len() {
            1 => Ok(flat.swap_remove(0)),
            _ => Ok(RegEx::Union(flat)),
        }
    }

    /// Sequence of two or more regular expressions; order is preserved and
    /// duplicates are kept.
    pub fn seq(operands: Vec<RegEx>) -> Result<RegEx, ConstructError> {
        if operands.len() < 2 {
            return Err(ConstructError::InvalidArity {
                required: 2,
                found: operands.len(),
            });
        }
        let mut flat = Vec::with_capacity(operands.len());
        let mut stack: Vec<RegEx> = operands.into_iter().rev().collect();
        while let Some(regex) = stack.pop() {
            match regex {
                RegEx::Seq(inner) => stack.extend(inner.into_iter().rev()),
                other => flat.push(other),
            }
        }
        Ok(RegEx::Seq(flat))
    }

    /// Kleene star. `Star(Star(x))` collapses to `Star(x)`.
    pub fn star(arg: RegEx) -> RegEx {
        match arg {
            starred @ RegEx::Star(_) => starred,
            other => RegEx::Star(Box::new(other)),
        }
    }

    pub(crate) fn push_formulas<'a>(&'a self, stack: &mut Vec<&'a Formula>) {
        match self {
            RegEx::Prop(formula) | RegEx::Test(formula) => stack.push(formula),
            RegEx::Union(operands) | RegEx::Seq(operands) => {
                for operand in operands.iter().rev() {
                    operand.push_formulas(stack);
                }
            }
            RegEx::Star(inner) => inner.push_formulas(stack),
        }
    }
}

impl Formula {
    /// `<regex> tail`: some regex-matching prefix ends where `tail` holds.
    pub fn diamond(regex: RegEx, tail: Formula) -> Result<Formula, ConstructError> {
        require_logic(Logic::Ldl, &tail)?;
        Ok(Formula::Diamond(Box::new(regex), Box::new(tail)))
    }

    /// `[regex] tail`: every regex-matching prefix ends where `tail` holds.
    pub fn boxed(regex: RegEx, tail: Formula) -> Result<Formula, ConstructError> {
        require_logic(Logic::Ldl, &tail)?;
        Ok(Formula::Box(Box::new(regex), Box::new(tail)))
    }

    /// The LDL `end` constant: `[true]ff`, holding only on the empty suffix.
    pub fn ldl_end() -> Formula {
        Formula::Box(
            Box::new(RegEx::Prop(Box::new(Formula::True(Logic::Pl)))),
            Box::new(Formula::False(Logic::Ldl)),
        )
    }

    /// The LDL `last` constant: `<true>end`, holding at the final position.
    pub fn ldl_last() -> Formula {
        Formula::Diamond(
            Box::new(RegEx::Prop(Box::new(Formula::True(Logic::Pl)))),
            Box::new(Formula::ldl_end()),
        )
    }
}
