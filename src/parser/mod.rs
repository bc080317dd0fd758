//! Parsers for the four concrete syntaxes.
//!
//! The propositional layer (precedences `<->`, `->`, `|`, `&`, `!`, atoms)
//! lives in [`core`] and is shared by all four grammars; each logic plugs its
//! own operator tier in between `&` and the prefix operators. Parsing is
//! pure and synchronous: text in, canonical [`Formula`](crate::Formula) out.

pub(crate) mod core;
mod ldl;
mod ltl;
mod pl;
mod pltl;

use std::error::Error;
use std::fmt;

use nom::character::complete::multispace0;
use nom::combinator::all_consuming;
use nom::sequence::terminated;
use nom::IResult;

use crate::syntax::Formula;

pub use ldl::parse_ldl;
pub use ltl::parse_ltl;
pub use pl::parse_pl;
pub use pltl::parse_pltl;

/// A syntax error: the input did not parse as a formula of the requested
/// logic. Carries the whole input and the byte offset of the first
/// unparseable position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub input: String,
    pub position: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.position >= self.input.len() {
            write!(
                f,
                "syntax error at position {}: unexpected end of input",
                self.position
            )
        } else {
            let snippet: String = self.input[self.position..].chars().take(24).collect();
            write!(
                f,
                "syntax error at position {}: unexpected input at {snippet:?}",
                self.position
            )
        }
    }
}

impl Error for ParseError {}

/// Runs a whole-input parser over `text`, mapping nom's error position back
/// to a byte offset in the original input.
pub(crate) fn run<'a>(
    text: &'a str,
    parser: impl FnMut(&'a str) -> IResult<&'a str, Formula>,
) -> Result<Formula, ParseError> {
    let mut whole = all_consuming(terminated(parser, multispace0));
    match whole(text) {
        Ok((_, formula)) => Ok(formula),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(ParseError {
            input: text.to_string(),
            position: text.len() - e.input.len(),
        }),
        Err(nom::Err::Incomplete(_)) => Err(ParseError {
            input: text.to_string(),
            position: text.len(),
        }),
    }
}
