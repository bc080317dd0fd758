//! The boolean core: canonical constructors for the connectives shared by
//! every logic. Each constructor takes already-canonical operands and applies
//! its rewrite rules eagerly, so no caller can observe a non-canonical
//! composite.

use super::{same_logic, ConstructError, Formula, Logic};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Monotone {
    And,
    Or,
}

impl Monotone {
    fn absorbing(self, logic: Logic) -> Formula {
        match self {
            Monotone::And => Formula::False(logic),
            Monotone::Or => Formula::True(logic),
        }
    }

    fn identity(self, logic: Logic) -> Formula {
        match self {
            Monotone::And => Formula::True(logic),
            Monotone::Or => Formula::False(logic),
        }
    }

    fn is_absorbing(self, formula: &Formula) -> bool {
        match self {
            Monotone::And => matches!(formula, Formula::False(_)),
            Monotone::Or => matches!(formula, Formula::True(_)),
        }
    }

    fn is_identity(self, formula: &Formula) -> bool {
        match self {
            Monotone::And => matches!(formula, Formula::True(_)),
            Monotone::Or => matches!(formula, Formula::False(_)),
        }
    }

    fn wrap(self, operands: Vec<Formula>) -> Formula {
        match self {
            Monotone::And => Formula::And(operands),
            Monotone::Or => Formula::Or(operands),
        }
    }
}

fn monotone(op: Monotone, operands: Vec<Formula>) -> Result<Formula, ConstructError> {
    if operands.len() < 2 {
        return Err(ConstructError::InvalidArity {
            required: 2,
            found: operands.len(),
        });
    }
    let logic = same_logic(&operands)?;

    // Associativity: pull nested same-operator applications to one level.
    let mut flat = Vec::with_capacity(operands.len());
    let mut stack: Vec<Formula> = operands.into_iter().rev().collect();
    while let Some(formula) = stack.pop() {
        match (op, formula) {
            (Monotone::And, Formula::And(inner)) | (Monotone::Or, Formula::Or(inner)) => {
                stack.extend(inner.into_iter().rev())
            }
            (_, other) => flat.push(other),
        }
    }

    // Constant folding: the absorbing element wins, the identity is dropped.
    let mut out = Vec::with_capacity(flat.len());
    for formula in flat {
        if op.is_identity(&formula) {
            continue;
        }
        if op.is_absorbing(&formula) {
            return Ok(op.absorbing(logic));
        }
        out.push(formula);
    }

    // Idempotence, and the canonical operand order.
    out.sort();
    out.dedup();

    // Complementary pair: x and ~x together force the absorbing constant.
    for formula in &out {
        if let Formula::Not(inner) = formula {
            if out.binary_search(inner.as_ref()).is_ok() {
                return Ok(op.absorbing(logic));
            }
        }
    }

    match out.len() {
        0 => Ok(op.identity(logic)),
        1 => Ok(out.swap_remove(0)),
        _ => Ok(op.wrap(out)),
    }
}

impl Formula {
    /// Negation. `~true == false`, `~false == true`, `~~x == x`.
    pub fn not(arg: Formula) -> Formula {
        match arg {
            Formula::True(logic) => Formula::False(logic),
            Formula::False(logic) => Formula::True(logic),
            Formula::Not(inner) => *inner,
            other => Formula::Not(Box::new(other)),
        }
    }

    /// Conjunction of two or more operands.
    pub fn and(operands: Vec<Formula>) -> Result<Formula, ConstructError> {
        monotone(Monotone::And, operands)
    }

    /// Disjunction of two or more operands.
    pub fn or(operands: Vec<Formula>) -> Result<Formula, ConstructError> {
        monotone(Monotone::Or, operands)
    }

    /// Right-associative implication chain.
    ///
    /// A `false` anywhere before the final operand makes some antecedent
    /// vacuous, so the whole chain collapses to `true`; `true` antecedents
    /// are dropped; a final `true` consequent collapses the chain to `true`.
    /// A final `false` is kept as-is.
    pub fn implies(operands: Vec<Formula>) -> Result<Formula, ConstructError> {
        if operands.len() < 2 {
            return Err(ConstructError::InvalidArity {
                required: 2,
                found: operands.len(),
            });
        }
        let logic = same_logic(&operands)?;
        let last = operands.len() - 1;
        let mut out = Vec::with_capacity(operands.len());
        for (index, operand) in operands.into_iter().enumerate() {
            match operand {
                Formula::False(_) if index < last => return Ok(Formula::True(logic)),
                Formula::True(_) if index < last => continue,
                Formula::True(_) => return Ok(Formula::True(logic)),
                other => out.push(other),
            }
        }
        match out.len() {
            1 => Ok(out.swap_remove(0)),
            _ => Ok(Formula::Implies(out)),
        }
    }

    /// Equivalence of two or more operands.
    ///
    /// Duplicates are dropped; `true` operands are dropped (`a <-> true == a`)
    /// and each `false` operand negates the remainder (`a <-> false == ~a`).
    pub fn equivalence(operands: Vec<Formula>) -> Result<Formula, ConstructError> {
        if operands.len() < 2 {
            return Err(ConstructError::InvalidArity {
                required: 2,
                found: operands.len(),
            });
        }
        let logic = same_logic(&operands)?;
        let mut out = operands;
        out.sort();
        out.dedup();
        if out.len() == 1 {
            return Ok(out.swap_remove(0));
        }
        out.retain(|operand| !matches!(operand, Formula::True(_)));
        let mut negate = false;
        if let Some(position) = out.iter().position(|operand| matches!(operand, Formula::False(_))) {
            out.remove(position);
            negate = true;
        }
        let core = match out.len() {
            0 => Formula::True(logic),
            1 => out.swap_remove(0),
            _ => Formula::Equivalence(out),
        };
        Ok(if negate { Formula::not(core) } else { core })
    }
}
