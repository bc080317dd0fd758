//! Formulas of propositional logic (PL), linear temporal logic on finite
//! traces (LTL), past linear temporal logic (PLTL) and linear dynamic logic
//! on finite traces (LDL).
//!
//! Formulas are immutable values kept canonical by construction: the
//! constructors flatten nested applications of the same connective, sort and
//! deduplicate commutative operand lists, absorb constants and collapse
//! complementary pairs, so structural equality coincides with equality up to
//! those algebraic laws. Each logic has its own concrete syntax, sharing one
//! propositional core:
//!
//! ```
//! use logics::{parse_ltl, Formula, Logic};
//!
//! let f = parse_ltl("G(request -> F(grant))").unwrap();
//! assert_eq!(f.logic(), Logic::Ltl);
//! assert_eq!(parse_ltl("b & a").unwrap(), parse_ltl("a & b").unwrap());
//! ```
//!
//! Propositional formulas can additionally be evaluated against an
//! [`Interpretation`].

pub mod parser;
pub mod semantics;
pub mod syntax;

pub use parser::{parse_ldl, parse_ltl, parse_pl, parse_pltl, ParseError};
pub use semantics::{evaluate, EvaluationError, Interpretation};
pub use syntax::{ConstructError, Formula, Logic, RegEx};
