//! The shared propositional grammar layer.
//!
//! All four grammars use the same boolean precedence chain
//! (`<->` < `->` < `|` < `&`) and the same atom lexing; a [`Grammar`]
//! descriptor tells the chain which logic to tag leaves with and which
//! logic-specific tier sits between `&` and the prefix operators.

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{anychar, char, multispace0, one_of};
use nom::combinator::{map, not, peek, verify};
use nom::error::{Error, ErrorKind};
use nom::multi::many0;
use nom::sequence::{preceded, terminated};
use nom::IResult;

use crate::syntax::{ConstructError, Formula, Logic};

pub(crate) type Tier = for<'a> fn(&'a str, &Grammar) -> IResult<&'a str, Formula>;
type NaryBuild = fn(Vec<Formula>) -> Result<Formula, ConstructError>;
pub(crate) type BinaryBuild = fn(Formula, Formula) -> Result<Formula, ConstructError>;

/// One concrete grammar: the logic tag for leaves plus the tier that binds
/// tighter than `&` (for plain PL that is [`negation`] itself).
pub(crate) struct Grammar {
    pub(crate) logic: Logic,
    pub(crate) term: Tier,
}

/// Full formula entry point: the boolean precedence chain from `<->` down.
pub(crate) fn formula<'a>(input: &'a str, g: &Grammar) -> IResult<&'a str, Formula> {
    equivalence(input, g)
}

fn equivalence<'a>(input: &'a str, g: &Grammar) -> IResult<&'a str, Formula> {
    nary(input, g, &["<->"], implication, Formula::equivalence)
}

fn implication<'a>(input: &'a str, g: &Grammar) -> IResult<&'a str, Formula> {
    nary(input, g, &["->", ">>"], disjunction, Formula::implies)
}

fn disjunction<'a>(input: &'a str, g: &Grammar) -> IResult<&'a str, Formula> {
    nary(input, g, &["||", "|"], conjunction, Formula::or)
}

fn conjunction<'a>(input: &'a str, g: &Grammar) -> IResult<&'a str, Formula> {
    nary(input, g, &["&&", "&"], term, Formula::and)
}

fn term<'a>(input: &'a str, g: &Grammar) -> IResult<&'a str, Formula> {
    (g.term)(input, g)
}

/// `below (OP below)*`, collected n-ary so that `a <-> b <-> c` becomes one
/// operator application over three operands.
fn nary<'a>(
    input: &'a str,
    g: &Grammar,
    ops: &'static [&'static str],
    below: Tier,
    build: NaryBuild,
) -> IResult<&'a str, Formula> {
    let (rest, first) = below(input, g)?;
    let (rest, mut tail) = many0(preceded(|i| operator(i, ops), |i| below(i, g)))(rest)?;
    if tail.is_empty() {
        return Ok((rest, first));
    }
    let mut operands = Vec::with_capacity(tail.len() + 1);
    operands.push(first);
    operands.append(&mut tail);
    build_formula(rest, build(operands))
}

/// `below (OP below)*`, folded left-associatively into binary applications.
pub(crate) fn chainl<'a>(
    input: &'a str,
    g: &Grammar,
    op: &'static str,
    below: Tier,
    build: BinaryBuild,
) -> IResult<&'a str, Formula> {
    let (rest, first) = below(input, g)?;
    let (rest, tail) = many0(preceded(
        preceded(multispace0, guarded(op)),
        |i| below(i, g),
    ))(rest)?;
    let mut acc = first;
    for rhs in tail {
        acc = match build(acc, rhs) {
            Ok(formula) => formula,
            Err(_) => return Err(nom::Err::Failure(Error::new(rest, ErrorKind::Verify))),
        };
    }
    Ok((rest, acc))
}

fn operator<'a>(input: &'a str, ops: &'static [&'static str]) -> IResult<&'a str, &'a str> {
    let (input, _) = multispace0(input)?;
    for op in ops {
        let parsed: IResult<&str, &str> = tag(*op)(input);
        if parsed.is_ok() {
            return parsed;
        }
    }
    Err(nom::Err::Error(Error::new(input, ErrorKind::Tag)))
}

/// Converts a construction failure into an unrecoverable parse failure at
/// the current position. Within a single grammar every operand carries the
/// grammar's own logic tag, so this path is not expected to fire.
pub(crate) fn build_formula<'a>(
    rest: &'a str,
    result: Result<Formula, ConstructError>,
) -> IResult<&'a str, Formula> {
    match result {
        Ok(formula) => Ok((rest, formula)),
        Err(_) => Err(nom::Err::Failure(Error::new(rest, ErrorKind::Verify))),
    }
}

/// A single-letter operator token. Only recognized when followed by
/// whitespace, a quote or an opening parenthesis, so that identifiers are
/// never mistokenized as operators.
pub(crate) fn guarded<'a>(t: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    terminated(tag(t), peek(one_of(" \t\r\n\"(")))
}

/// A keyword constant; must not be followed by a symbol-continuation
/// character (`tt` is a constant, `ttx` is an atom).
pub(crate) fn keyword<'a>(k: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    terminated(tag(k), not(verify(anychar, |c| is_symbol_continue(*c))))
}

fn is_symbol_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Prefix-negation tier used directly as the PL `term`: `!`/`~` repeated,
/// then an atom-level formula.
pub(crate) fn negation<'a>(input: &'a str, g: &Grammar) -> IResult<&'a str, Formula> {
    let (input, negations) = many0(preceded(multispace0, one_of("!~")))(input)?;
    let (rest, arg) = atom(input, g)?;
    Ok((rest, negations.iter().fold(arg, |acc, _| Formula::not(acc))))
}

/// Atom-level formula: parentheses, the boolean constants, or a symbol.
pub(crate) fn atom<'a>(input: &'a str, g: &Grammar) -> IResult<&'a str, Formula> {
    let (input, _) = multispace0(input)?;
    let logic = g.logic;
    alt((
        |i| parens(i, g),
        map(keyword("true"), move |_| Formula::top(logic)),
        map(keyword("false"), move |_| Formula::bottom(logic)),
        map(symbol, move |name| Formula::atom(logic, name)),
    ))(input)
}

/// `( formula )`, recursing into the owning grammar's full precedence chain.
pub(crate) fn parens<'a>(input: &'a str, g: &Grammar) -> IResult<&'a str, Formula> {
    let (input, _) = char('(')(input)?;
    let (input, inner) = formula(input, g)?;
    let (input, _) = preceded(multispace0, char(')'))(input)?;
    Ok((input, inner))
}

/// A symbol: `[a-z_][a-zA-Z0-9_]*` with hyphens strictly internal, or any
/// non-empty double-quoted run of printable ASCII except `"`.
pub(crate) fn symbol(input: &str) -> IResult<&str, String> {
    match input.as_bytes().first() {
        Some(b'"') => quoted_symbol(input),
        Some(c) if c.is_ascii_lowercase() || *c == b'_' => unquoted_symbol(input),
        _ => Err(nom::Err::Error(Error::new(input, ErrorKind::Alpha))),
    }
}

fn unquoted_symbol(input: &str) -> IResult<&str, String> {
    let bytes = input.as_bytes();
    let mut end = 1;
    while end < bytes.len() {
        let b = bytes[end];
        if b.is_ascii_alphanumeric() || b == b'_' {
            end += 1;
        } else if b == b'-'
            && end + 1 < bytes.len()
            && (bytes[end + 1].is_ascii_alphanumeric() || bytes[end + 1] == b'_')
        {
            end += 2;
        } else {
            break;
        }
    }
    Ok((&input[end..], input[..end].to_string()))
}

fn quoted_symbol(input: &str) -> IResult<&str, String> {
    let bytes = input.as_bytes();
    let mut end = 1;
    while end < bytes.len() && bytes[end] != b'"' {
        if !(0x20..=0x7e).contains(&bytes[end]) {
            return Err(nom::Err::Error(Error::new(&input[end..], ErrorKind::Char)));
        }
        end += 1;
    }
    if end == 1 || end >= bytes.len() {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Char)));
    }
    Ok((&input[end + 1..], input[1..end].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_accepts_internal_hyphens_only() {
        assert_eq!(symbol("a-b rest"), Ok((" rest", "a-b".to_string())));
        assert_eq!(symbol("a- rest"), Ok(("- rest", "a".to_string())));
        assert_eq!(symbol("_x1"), Ok(("", "_x1".to_string())));
        assert!(symbol("-a").is_err());
        assert!(symbol("Aa").is_err());
    }

    #[test]
    fn symbol_accepts_quoted_printable_ascii() {
        assert_eq!(
            symbol("\"Hello, world!\" rest"),
            Ok((" rest", "Hello, world!".to_string()))
        );
        assert!(symbol("\"\"").is_err());
        assert!(symbol("\"unterminated").is_err());
    }

    #[test]
    fn keyword_respects_word_boundaries() {
        assert!(keyword("tt")("tt").is_ok());
        assert!(keyword("tt")("tt)").is_ok());
        assert!(keyword("tt")("ttx").is_err());
        assert!(keyword("tt")("tt-a").is_err());
    }

    #[test]
    fn guarded_tokens_need_a_separator() {
        assert!(guarded("U")("U b").is_ok());
        assert!(guarded("U")("U(b)").is_ok());
        assert!(guarded("U")("U\"b\"").is_ok());
        assert!(guarded("U")("Ub").is_err());
        assert!(guarded("U")("U").is_err());
    }
}
