//! LTL and PLTL operator constructors.
//!
//! Temporal and past operators apply no algebraic identity of their own:
//! their semantics are order-sensitive across traces, so the constructors
//! only enforce the logic tag of their (already canonical) operands.

use super::{require_logic, ConstructError, Formula, Logic};

macro_rules! unary_ctor {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $logic:expr) => {
        $(#[$doc])*
        pub fn $name(arg: Formula) -> Result<Formula, ConstructError> {
            require_logic($logic, &arg)?;
            Ok(Formula::$variant(Box::new(arg)))
        }
    };
}

macro_rules! binary_ctor {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $logic:expr) => {
        $(#[$doc])*
        pub fn $name(lhs: Formula, rhs: Formula) -> Result<Formula, ConstructError> {
            require_logic($logic, &lhs)?;
            require_logic($logic, &rhs)?;
            Ok(Formula::$variant(Box::new(lhs), Box::new(rhs)))
        }
    };
}

impl Formula {
    unary_ctor!(
        /// Strong next: there is a next position and `arg` holds there.
        next, Next, Logic::Ltl
    );
    unary_ctor!(
        /// Weak next: if there is a next position, `arg` holds there.
        weak_next, WeakNext, Logic::Ltl
    );
    unary_ctor!(always, Always, Logic::Ltl);
    unary_ctor!(eventually, Eventually, Logic::Ltl);
    binary_ctor!(until, Until, Logic::Ltl);
    binary_ctor!(release, Release, Logic::Ltl);
    binary_ctor!(weak_until, WeakUntil, Logic::Ltl);
    binary_ctor!(strong_release, StrongRelease, Logic::Ltl);

    unary_ctor!(
        /// Yesterday: there is a previous position and `arg` held there.
        before, Before, Logic::Pltl
    );
    unary_ctor!(once, Once, Logic::Pltl);
    unary_ctor!(historically, Historically, Logic::Pltl);
    binary_ctor!(since, Since, Logic::Pltl);
}
