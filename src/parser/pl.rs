//! Propositional logic: the shared boolean layer with no extra tier.

use nom::IResult;

use super::core::{self, Grammar};
use super::{run, ParseError};
use crate::syntax::{Formula, Logic};

pub(crate) const GRAMMAR: Grammar = Grammar {
    logic: Logic::Pl,
    term: core::negation,
};

/// Parses a propositional logic formula.
pub fn parse_pl(text: &str) -> Result<Formula, ParseError> {
    run(text, formula)
}

pub(crate) fn formula(input: &str) -> IResult<&str, Formula> {
    core::formula(input, &GRAMMAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str) -> Formula {
        Formula::atom(Logic::Pl, name)
    }

    #[test]
    fn parses_atoms_and_constants() {
        assert_eq!(parse_pl("a").unwrap(), atom("a"));
        assert_eq!(parse_pl("true").unwrap(), Formula::top(Logic::Pl));
        assert_eq!(parse_pl("false").unwrap(), Formula::bottom(Logic::Pl));
        assert_eq!(parse_pl("\"a b\"").unwrap(), atom("a b"));
        assert_eq!(parse_pl("\"a\"").unwrap(), parse_pl("a").unwrap());
    }

    #[test]
    fn precedence_chain() {
        // <-> binds loosest, then ->, |, &, !
        let f = parse_pl("a <-> b -> c | d & !e").unwrap();
        let expected = Formula::equivalence(vec![
            atom("a"),
            Formula::implies(vec![
                atom("b"),
                Formula::or(vec![
                    atom("c"),
                    Formula::and(vec![atom("d"), Formula::not(atom("e"))]).unwrap(),
                ])
                .unwrap(),
            ])
            .unwrap(),
        ])
        .unwrap();
        assert_eq!(f, expected);
    }

    #[test]
    fn alternative_spellings() {
        assert_eq!(parse_pl("a && b").unwrap(), parse_pl("a & b").unwrap());
        assert_eq!(parse_pl("a || b").unwrap(), parse_pl("a | b").unwrap());
        assert_eq!(parse_pl("a >> b").unwrap(), parse_pl("a -> b").unwrap());
        assert_eq!(parse_pl("~a").unwrap(), parse_pl("!a").unwrap());
    }

    #[test]
    fn chains_are_collected_nary() {
        assert_eq!(
            parse_pl("a -> b -> c").unwrap(),
            Formula::implies(vec![atom("a"), atom("b"), atom("c")]).unwrap()
        );
        assert_eq!(
            parse_pl("a & b & c").unwrap(),
            Formula::and(vec![atom("a"), atom("b"), atom("c")]).unwrap()
        );
    }

    #[test]
    fn canonicalization_happens_during_parsing() {
        assert_eq!(parse_pl("a <-> a").unwrap(), atom("a"));
        assert_eq!(parse_pl("true | false").unwrap(), Formula::top(Logic::Pl));
        assert_eq!(parse_pl("true & false").unwrap(), Formula::bottom(Logic::Pl));
        assert_eq!(parse_pl("!!a").unwrap(), atom("a"));
        assert_eq!(parse_pl("a & !a").unwrap(), Formula::bottom(Logic::Pl));
        assert_eq!(parse_pl("b & a").unwrap(), parse_pl("a & b").unwrap());
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(
            parse_pl("(a | b) & c").unwrap(),
            Formula::and(vec![
                Formula::or(vec![atom("a"), atom("b")]).unwrap(),
                atom("c"),
            ])
            .unwrap()
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_pl("").is_err());
        assert!(parse_pl("a &").is_err());
        assert!(parse_pl("(a").is_err());
        assert!(parse_pl("a-").is_err());
        assert!(parse_pl("&& a").is_err());
    }
}
