//! Canonical textual rendering.
//!
//! Operands are always parenthesized, so the output of `Display` re-parses
//! (with the parser of the same logic) to a structurally equal formula.

use std::fmt;

use itertools::Itertools;

use super::{Formula, Logic, RegEx};

/// Names that the grammars reserve as constants.
const RESERVED: [&str; 7] = ["true", "false", "tt", "ff", "last", "start", "end"];

/// Whether `name` lexes as a plain (unquoted) symbol: `[a-z_]` start,
/// `[a-zA-Z0-9_]` continuation, hyphens strictly internal.
fn is_plain_symbol(name: &str) -> bool {
    let mut chars = name.chars().peekable();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    while let Some(c) = chars.next() {
        if c.is_ascii_alphanumeric() || c == '_' {
            continue;
        }
        if c == '-' && matches!(chars.peek(), Some(n) if n.is_ascii_alphanumeric() || *n == '_') {
            continue;
        }
        return false;
    }
    true
}

fn write_symbol(f: &mut fmt::Formatter, name: &str) -> fmt::Result {
    if is_plain_symbol(name) && !RESERVED.contains(&name) {
        write!(f, "{name}")
    } else {
        write!(f, "\"{name}\"")
    }
}

fn write_operands(f: &mut fmt::Formatter, operands: &[Formula], separator: &str) -> fmt::Result {
    write!(
        f,
        "{}",
        operands.iter().map(|operand| format!("({operand})")).join(separator)
    )
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Formula::True(Logic::Ldl) => write!(f, "tt"),
            Formula::True(_) => write!(f, "true"),
            Formula::False(Logic::Ldl) => write!(f, "ff"),
            Formula::False(_) => write!(f, "false"),
            Formula::Atom(_, name) => write_symbol(f, name),
            Formula::Not(arg) => write!(f, "~({arg})"),
            Formula::And(operands) => write_operands(f, operands, " & "),
            Formula::Or(operands) => write_operands(f, operands, " | "),
            Formula::Implies(operands) => write_operands(f, operands, " -> "),
            Formula::Equivalence(operands) => write_operands(f, operands, " <-> "),
            Formula::Next(arg) => write!(f, "X[!]({arg})"),
            Formula::WeakNext(arg) => write!(f, "X({arg})"),
            Formula::Always(arg) => write!(f, "G({arg})"),
            Formula::Eventually(arg) => write!(f, "F({arg})"),
            Formula::Until(lhs, rhs) => write!(f, "({lhs}) U ({rhs})"),
            Formula::Release(lhs, rhs) => write!(f, "({lhs}) R ({rhs})"),
            Formula::WeakUntil(lhs, rhs) => write!(f, "({lhs}) W ({rhs})"),
            Formula::StrongRelease(lhs, rhs) => write!(f, "({lhs}) M ({rhs})"),
            Formula::Last => write!(f, "last"),
            Formula::Before(arg) => write!(f, "Y({arg})"),
            Formula::Once(arg) => write!(f, "O({arg})"),
            Formula::Historically(arg) => write!(f, "H({arg})"),
            Formula::Since(lhs, rhs) => write!(f, "({lhs}) S ({rhs})"),
            Formula::Start => write!(f, "start"),
            Formula::Diamond(regex, tail) => write!(f, "<{regex}>({tail})"),
            Formula::Box(regex, tail) => write!(f, "[{regex}]({tail})"),
        }
    }
}

impl fmt::Display for RegEx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RegEx::Prop(formula) => write!(f, "{formula}"),
            RegEx::Test(formula) => write!(f, "({formula})?"),
            RegEx::Union(operands) => write!(
                f,
                "{}",
                operands.iter().map(|operand| format!("({operand})")).join(" + ")
            ),
            RegEx::Seq(operands) => write!(
                f,
                "{}",
                operands.iter().map(|operand| format!("({operand})")).join(" ; ")
            ),
            RegEx::Star(inner) => write!(f, "({inner})*"),
        }
    }
}
