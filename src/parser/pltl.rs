//! Past linear temporal logic.
//!
//! Mirrors the future-time grammar with the past operators: one binary tier
//! `S` below `&`, then the prefix operators `H O Y ! ~`.

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::multispace0;
use nom::combinator::map;
use nom::multi::many0;
use nom::sequence::preceded;
use nom::IResult;

use super::core::{self, chainl, keyword, Grammar};
use super::{run, ParseError};
use crate::syntax::{Formula, Logic};

const GRAMMAR: Grammar = Grammar {
    logic: Logic::Pltl,
    term: since,
};

/// Parses a past linear temporal logic formula.
pub fn parse_pltl(text: &str) -> Result<Formula, ParseError> {
    run(text, |i| core::formula(i, &GRAMMAR))
}

fn since<'a>(input: &'a str, g: &Grammar) -> IResult<&'a str, Formula> {
    chainl(input, g, "S", unary, Formula::since)
}

fn unary<'a>(input: &'a str, g: &Grammar) -> IResult<&'a str, Formula> {
    let (input, prefixes) = many0(preceded(
        multispace0,
        alt((
            tag("!"),
            tag("~"),
            core::guarded("Y"),
            core::guarded("O"),
            core::guarded("H"),
        )),
    ))(input)?;
    let (rest, mut acc) = atom(input, g)?;
    for prefix in prefixes.into_iter().rev() {
        let built = match prefix {
            "!" | "~" => Ok(Formula::not(acc)),
            "Y" => Formula::before(acc),
            "O" => Formula::once(acc),
            "H" => Formula::historically(acc),
            _ => unreachable!(),
        };
        acc = match built {
            Ok(formula) => formula,
            Err(_) => return core::build_formula(rest, built),
        };
    }
    Ok((rest, acc))
}

fn atom<'a>(input: &'a str, g: &Grammar) -> IResult<&'a str, Formula> {
    let (input, _) = multispace0(input)?;
    alt((
        map(keyword("tt"), |_| Formula::top(Logic::Pltl)),
        map(keyword("ff"), |_| Formula::bottom(Logic::Pltl)),
        map(keyword("start"), |_| Formula::Start),
        |i| core::atom(i, g),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str) -> Formula {
        Formula::atom(Logic::Pltl, name)
    }

    #[test]
    fn since_is_left_associative() {
        assert_eq!(
            parse_pltl("a S b").unwrap(),
            Formula::since(atom("a"), atom("b")).unwrap()
        );
        assert_eq!(
            parse_pltl("a S b S c").unwrap(),
            Formula::since(Formula::since(atom("a"), atom("b")).unwrap(), atom("c")).unwrap()
        );
    }

    #[test]
    fn past_unary_operators() {
        assert_eq!(
            parse_pltl("Y(a)").unwrap(),
            Formula::before(atom("a")).unwrap()
        );
        assert_eq!(
            parse_pltl("H O a").unwrap(),
            Formula::historically(Formula::once(atom("a")).unwrap()).unwrap()
        );
        assert_eq!(
            parse_pltl("!Y(a)").unwrap(),
            Formula::not(Formula::before(atom("a")).unwrap())
        );
    }

    #[test]
    fn since_binds_tighter_than_and() {
        assert_eq!(
            parse_pltl("a S b & c").unwrap(),
            Formula::and(vec![
                Formula::since(atom("a"), atom("b")).unwrap(),
                atom("c"),
            ])
            .unwrap()
        );
    }

    #[test]
    fn operator_letters_are_not_stolen_from_identifiers() {
        assert_eq!(parse_pltl("y").unwrap(), atom("y"));
        assert_eq!(parse_pltl("aSb").unwrap(), atom("aSb"));
        assert!(parse_pltl("a Sb").is_err());
    }

    #[test]
    fn constants() {
        assert_eq!(parse_pltl("start").unwrap(), Formula::Start);
        assert_eq!(parse_pltl("tt").unwrap(), Formula::top(Logic::Pltl));
        assert_eq!(parse_pltl("ff").unwrap(), Formula::bottom(Logic::Pltl));
        assert_eq!(parse_pltl("starter").unwrap(), atom("starter"));
    }

    #[test]
    fn boolean_core_is_shared() {
        assert_eq!(
            parse_pltl("O(a) | O(a)").unwrap(),
            Formula::once(atom("a")).unwrap()
        );
        assert_eq!(
            parse_pltl("Y(a) & !Y(a)").unwrap(),
            Formula::bottom(Logic::Pltl)
        );
    }
}
