//! Linear dynamic logic on finite traces.
//!
//! The boolean layer is shared; below it sit the `<regex>` and `[regex]`
//! modalities and a separate grammar for the regular expressions themselves
//! (`+` < `;` < postfix `*` < test/propositional leaves). A bare
//! propositional leaf `p` abbreviates `<p>tt`, and the `end` and `last`
//! constants expand to their modal definitions.

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, multispace0, one_of};
use nom::combinator::map;
use nom::error::{Error, ErrorKind};
use nom::multi::many0;
use nom::sequence::preceded;
use nom::IResult;

use super::core::{self, keyword, Grammar};
use super::{pl, run, ParseError};
use crate::syntax::{ConstructError, Formula, Logic, RegEx};

const GRAMMAR: Grammar = Grammar {
    logic: Logic::Ldl,
    term: unary,
};

/// Parses a linear dynamic logic formula.
pub fn parse_ldl(text: &str) -> Result<Formula, ParseError> {
    run(text, |i| core::formula(i, &GRAMMAR))
}

fn unary<'a>(input: &'a str, g: &Grammar) -> IResult<&'a str, Formula> {
    let (input, negations) = many0(preceded(multispace0, one_of("!~")))(input)?;
    let (input, _) = multispace0(input)?;
    let (rest, arg) = alt((
        |i| modality(i, g, '<', '>', Formula::diamond),
        |i| modality(i, g, '[', ']', Formula::boxed),
        |i| atom(i, g),
    ))(input)?;
    Ok((rest, negations.iter().fold(arg, |acc, _| Formula::not(acc))))
}

fn modality<'a>(
    input: &'a str,
    g: &Grammar,
    open: char,
    close: char,
    build: fn(RegEx, Formula) -> Result<Formula, ConstructError>,
) -> IResult<&'a str, Formula> {
    let (input, _) = char(open)(input)?;
    let (input, regex) = re_union(input)?;
    let (input, _) = preceded(multispace0, char(close))(input)?;
    let (rest, tail) = unary(input, g)?;
    core::build_formula(rest, build(regex, tail))
}

fn atom<'a>(input: &'a str, g: &Grammar) -> IResult<&'a str, Formula> {
    alt((
        |i| core::parens(i, g),
        map(keyword("tt"), |_| Formula::top(Logic::Ldl)),
        map(keyword("ff"), |_| Formula::bottom(Logic::Ldl)),
        map(keyword("last"), |_| Formula::ldl_last()),
        map(keyword("end"), |_| Formula::ldl_end()),
        prop_leaf,
    ))(input)
}

/// A bare propositional leaf, sugar for `<leaf>tt`.
fn prop_leaf(input: &str) -> IResult<&str, Formula> {
    let (rest, leaf) = alt((
        map(keyword("true"), |_| Formula::top(Logic::Pl)),
        map(keyword("false"), |_| Formula::bottom(Logic::Pl)),
        map(core::symbol, |name| Formula::atom(Logic::Pl, name)),
    ))(input)?;
    let formula = Formula::Diamond(
        Box::new(RegEx::Prop(Box::new(leaf))),
        Box::new(Formula::True(Logic::Ldl)),
    );
    Ok((rest, formula))
}

fn re_union(input: &str) -> IResult<&str, RegEx> {
    let (rest, first) = re_seq(input)?;
    let (rest, mut tail) = many0(preceded(preceded(multispace0, tag("+")), re_seq))(rest)?;
    if tail.is_empty() {
        return Ok((rest, first));
    }
    let mut operands = Vec::with_capacity(tail.len() + 1);
    operands.push(first);
    operands.append(&mut tail);
    build_regex(rest, RegEx::union(operands))
}

fn re_seq(input: &str) -> IResult<&str, RegEx> {
    let (rest, first) = re_star(input)?;
    let (rest, mut tail) = many0(preceded(preceded(multispace0, tag(";")), re_star))(rest)?;
    if tail.is_empty() {
        return Ok((rest, first));
    }
    let mut operands = Vec::with_capacity(tail.len() + 1);
    operands.push(first);
    operands.append(&mut tail);
    build_regex(rest, RegEx::seq(operands))
}

fn re_star(input: &str) -> IResult<&str, RegEx> {
    let (rest, base) = re_primary(input)?;
    let (rest, stars) = many0(preceded(multispace0, char('*')))(rest)?;
    Ok((rest, stars.iter().fold(base, |acc, _| RegEx::star(acc))))
}

/// A regular-expression leaf. A test is a full formula followed by `?`; a
/// propositional leaf is tried next, before parenthesized grouping, so that
/// a parenthesized propositional connective stays a single `Prop` leaf.
fn re_primary(input: &str) -> IResult<&str, RegEx> {
    let (input, _) = multispace0(input)?;
    alt((re_test, re_prop, re_group))(input)
}

fn re_test(input: &str) -> IResult<&str, RegEx> {
    let (input, formula) = core::formula(input, &GRAMMAR)?;
    let (rest, _) = preceded(multispace0, char('?'))(input)?;
    build_regex(rest, RegEx::test(formula))
}

fn re_prop(input: &str) -> IResult<&str, RegEx> {
    let (rest, formula) = pl::formula(input)?;
    build_regex(rest, RegEx::prop(formula))
}

fn re_group(input: &str) -> IResult<&str, RegEx> {
    let (input, _) = char('(')(input)?;
    let (input, inner) = re_union(input)?;
    let (rest, _) = preceded(multispace0, char(')'))(input)?;
    Ok((rest, inner))
}

fn build_regex(rest: &str, result: Result<RegEx, ConstructError>) -> IResult<&str, RegEx> {
    match result {
        Ok(regex) => Ok((rest, regex)),
        Err(_) => Err(nom::Err::Failure(Error::new(rest, ErrorKind::Verify))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop(name: &str) -> RegEx {
        RegEx::prop(Formula::atom(Logic::Pl, name)).unwrap()
    }

    fn atom(name: &str) -> Formula {
        Formula::diamond(prop(name), Formula::top(Logic::Ldl)).unwrap()
    }

    #[test]
    fn diamond_over_a_union() {
        assert_eq!(
            parse_ldl("<a+b>tt").unwrap(),
            Formula::diamond(
                RegEx::union(vec![prop("a"), prop("b")]).unwrap(),
                Formula::top(Logic::Ldl)
            )
            .unwrap()
        );
    }

    #[test]
    fn bare_leaves_are_modal_sugar() {
        assert_eq!(parse_ldl("a").unwrap(), atom("a"));
        assert_eq!(
            parse_ldl("true").unwrap(),
            Formula::diamond(
                RegEx::prop(Formula::top(Logic::Pl)).unwrap(),
                Formula::top(Logic::Ldl)
            )
            .unwrap()
        );
        assert_eq!(parse_ldl("tt").unwrap(), Formula::top(Logic::Ldl));
        assert_eq!(parse_ldl("ff").unwrap(), Formula::bottom(Logic::Ldl));
    }

    #[test]
    fn end_and_last_expand() {
        assert_eq!(parse_ldl("end").unwrap(), Formula::ldl_end());
        assert_eq!(parse_ldl("last").unwrap(), Formula::ldl_last());
        // `ender` is an atom, not the constant.
        assert_eq!(parse_ldl("ender").unwrap(), atom("ender"));
    }

    #[test]
    fn box_modality() {
        assert_eq!(
            parse_ldl("[a]ff").unwrap(),
            Formula::boxed(prop("a"), Formula::bottom(Logic::Ldl)).unwrap()
        );
    }

    #[test]
    fn modalities_nest() {
        assert_eq!(
            parse_ldl("<a><b>tt").unwrap(),
            Formula::diamond(
                prop("a"),
                Formula::diamond(prop("b"), Formula::top(Logic::Ldl)).unwrap()
            )
            .unwrap()
        );
    }

    #[test]
    fn regex_sequence_and_star() {
        assert_eq!(
            parse_ldl("<a ; b>tt").unwrap(),
            Formula::diamond(
                RegEx::seq(vec![prop("a"), prop("b")]).unwrap(),
                Formula::top(Logic::Ldl)
            )
            .unwrap()
        );
        assert_eq!(
            parse_ldl("<(a)*>tt").unwrap(),
            Formula::diamond(RegEx::star(prop("a")), Formula::top(Logic::Ldl)).unwrap()
        );
    }

    #[test]
    fn regex_test_leaf() {
        assert_eq!(
            parse_ldl("<(a)?>tt").unwrap(),
            Formula::diamond(RegEx::test(atom("a")).unwrap(), Formula::top(Logic::Ldl)).unwrap()
        );
    }

    #[test]
    fn regex_propositional_connectives_stay_one_leaf() {
        assert_eq!(
            parse_ldl("<a & b>tt").unwrap(),
            Formula::diamond(
                RegEx::prop(
                    Formula::and(vec![
                        Formula::atom(Logic::Pl, "a"),
                        Formula::atom(Logic::Pl, "b"),
                    ])
                    .unwrap()
                )
                .unwrap(),
                Formula::top(Logic::Ldl)
            )
            .unwrap()
        );
    }

    #[test]
    fn boolean_layer_connects_modalities() {
        assert_eq!(
            parse_ldl("<a>tt & [b]ff").unwrap(),
            Formula::and(vec![
                Formula::diamond(prop("a"), Formula::top(Logic::Ldl)).unwrap(),
                Formula::boxed(prop("b"), Formula::bottom(Logic::Ldl)).unwrap(),
            ])
            .unwrap()
        );
        assert_eq!(
            parse_ldl("!<a>tt").unwrap(),
            Formula::not(Formula::diamond(prop("a"), Formula::top(Logic::Ldl)).unwrap())
        );
    }

    #[test]
    fn regex_precedence() {
        // `;` binds tighter than `+`, `*` tighter than both.
        assert_eq!(
            parse_ldl("<a + b ; c>tt").unwrap(),
            Formula::diamond(
                RegEx::union(vec![
                    prop("a"),
                    RegEx::seq(vec![prop("b"), prop("c")]).unwrap(),
                ])
                .unwrap(),
                Formula::top(Logic::Ldl)
            )
            .unwrap()
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_ldl("<a tt").is_err());
        assert!(parse_ldl("<>tt").is_err());
        assert!(parse_ldl("<a>").is_err());
        assert!(parse_ldl("[a tt").is_err());
    }
}
