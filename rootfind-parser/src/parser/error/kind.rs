use ariadne::Fmt;
use rootfind_attrs::ErrorKind;
use rootfind_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;

/// The expression ended where more input was required.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of expression",
    labels = [format!("the expression is missing an {} here", "operand".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// A complete expression was parsed, but input remains.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of expression",
    labels = [format!("could not make sense of this trailing {}", "input".fg(EXPR))],
)]
pub struct ExpectedEof;

/// A token appeared where a different kind of token was required.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!(
        "expected one of: {}",
        expected.iter().map(|kind| format!("{kind:?}")).collect::<Vec<_>>().join(", "),
    )],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token kinds that would have been valid here.
    pub expected: &'static [TokenKind],

    /// The token that was found instead.
    pub found: TokenKind,
}

/// A parenthesis has no matching counterpart.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unmatched parenthesis",
    labels = ["this parenthesis has no match"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// True if the unmatched parenthesis is an opening `(`; false if it is a stray closing `)`.
    pub opening: bool,
}

/// A pair of parentheses with nothing inside.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty parentheses",
    labels = ["an expression is required between these"],
)]
pub struct EmptyParenthesis;
