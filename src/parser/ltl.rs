//! Linear temporal logic on finite traces.
//!
//! Reuses the PL layer and inserts the temporal tiers between `&` and the
//! prefix operators: `W` < `U` < `R` < `M`, all left-associative, then the
//! prefix operators `G F X[!] X ! ~`. Single-letter operator tokens are
//! lookahead-guarded (see [`core::guarded`]) and `X[!]` is tried before `X`.

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
    logic: Logic::Ltl,
    term: weak_until,
};

/// Parses a linear temporal logic formula.
pub fn parse_ltl(text: &str) -> Result<Formula, ParseError> {
    run(text, |i| core::formula(i, &GRAMMAR))
}

fn weak_until<'a>(input: &'a str, g: &Grammar) -> IResult<&'a str, Formula> {
    chainl(input, g, "W", until, Formula::weak_until)
}

fn until<'a>(input: &'a str, g: &Grammar) -> IResult<&'a str, Formula> {
    chainl(input, g, "U", release, Formula::until)
}

fn release<'a>(input: &'a str, g: &Grammar) -> IResult<&'a str, Formula> {
    chainl(input, g, "R", strong_release, Formula::release)
}

fn strong_release<'a>(input: &'a str, g: &Grammar) -> IResult<&'a str, Formula> {
    chainl(input, g, "M", unary, Formula::strong_release)
}

fn unary<'a>(input: &'a str, g: &Grammar) -> IResult<&'a str, Formula> {
    let (input, prefixes) = many0(preceded(
        multispace0,
        alt((
            tag("!"),
            tag("~"),
            core::guarded("X[!]"),
            core::guarded("X"),
            core::guarded("G"),
            core::guarded("F"),
        )),
    ))(input)?;
    let (rest, mut acc) = atom(input, g)?;
    for prefix in prefixes.into_iter().rev() {
        let built = match prefix {
            "!" | "~" => Ok(Formula::not(acc)),
            "X[!]" => Formula::next(acc),
            "X" => Formula::weak_next(acc),
            "G" => Formula::always(acc),
            "F" => Formula::eventually(acc),
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
        map(keyword("tt"), |_| Formula::top(Logic::Ltl)),
        map(keyword("ff"), |_| Formula::bottom(Logic::Ltl)),
        map(keyword("last"), |_| Formula::Last),
        |i| core::atom(i, g),
    ))(input)
}
