//! Error kinds reported while lowering or differentiating an expression.

use ariadne::Fmt;
use rootfind_attrs::ErrorKind;
use rootfind_error::{ErrorKind, EXPR};

/// A named function in the expression is not one of the built-in functions.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown function: `{}`", name),
    labels = ["this function"],
    help = match suggestion {
        Some(suggestion) => format!("did you mean `{}`?", suggestion.fg(EXPR)),
        None => String::from("only the built-in one-argument functions (`sin`, `cos`, `exp`, `ln`, ...) are supported"),
    },
)]
pub struct UnknownFunction {
    /// The name that was not recognized.
    pub name: String,

    /// A recognized function name close to the unrecognized one, if any.
    pub suggestion: Option<&'static str>,
}

/// A symbol in the expression is neither the variable `x` nor a known constant.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown symbol: `{}`", name),
    labels = ["this symbol"],
    help = format!("the function variable is `{}`; the constants `pi`, `e` and `tau` are also available", "x".fg(EXPR)),
)]
pub struct UnknownSymbol {
    /// The name of the symbol.
    pub name: String,
}

/// A function was called with the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` takes {} argument(s), but {} were given", name, expected, found),
    labels = ["this call"],
)]
pub struct WrongArity {
    /// The canonical name of the function.
    pub name: &'static str,

    /// The number of arguments the function takes.
    pub expected: usize,

    /// The number of arguments that were given.
    pub found: usize,
}

/// An expression used as a plain calculation still depends on the variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the expression is not a constant",
    labels = [format!("this expression depends on `{}`", "x".fg(EXPR))],
    help = "a calculation must reduce to a single number; pass functions of `x` to a method instead",
)]
pub struct NotConstant;

/// The expression has no closed-form derivative, so Newton-Raphson cannot use it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` has no closed-form derivative", name),
    labels = ["while differentiating this expression"],
    help = "Newton-Raphson needs a differentiable expression; try the secant method, which does not",
)]
pub struct NonDifferentiable {
    /// The canonical name of the non-smooth function.
    pub name: &'static str,
}
