pub mod binary;
pub mod call;
pub mod error;
pub mod expr;
pub mod literal;
pub mod paren;
pub mod token;
pub mod unary;

use error::{kind, Error};
use rootfind_error::ErrorKind;
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// Tries each of the given parsing expressions in order, returning the first success.
///
/// A fatal error from any attempt short-circuits immediately instead of letting the next
/// alternative run; a non-fatal error simply moves on to the next attempt. If every attempt
/// fails, the macro evaluates to the last error, so the caller can fall through to one final
/// alternative.
#[macro_export]
macro_rules! try_parse_catch_fatal {
    ($($expr:expr),+ $(,)?) => {{
        $(
            match $expr {
                Ok(value) => return Ok(value),
                Err(err) if err.fatal => return Err(err),
                err => err,
            }
        )+
    }};
}

/// The precedence levels of the operators, from loosest to tightest binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Any precedence. Used as the starting level when parsing a full expression.
    Any,

    /// Addition and subtraction.
    Term,

    /// Multiplication and division, including implicit multiplication.
    Factor,

    /// Unary negation.
    Neg,

    /// Exponentiation.
    Exp,
}

/// The associativity of an operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Any type that can be parsed from a stream of tokens.
pub trait Parse: Sized {
    /// Parses a value of this type from the given parser.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// A cursor over a fully tokenized expression.
///
/// All tokens are produced up front so the cursor can rewind when a speculative parse fails;
/// see [`Parser::try_parse`].
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// Every token of the source, including whitespace.
    tokens: Box<[Token<'source>]>,

    /// The index of the next token to be consumed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Creates a parser over the given source text.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error of the given kind pointing at the current token, or at the end of the
    /// source if there are no tokens left.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Like [`Parser::error`], but fatal: the parser will not backtrack past it to try another
    /// interpretation.
    pub fn error_fatal(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new_fatal(vec![self.span()], kind)
    }

    /// The span of the current token, or an empty span at the end of the source if there are no
    /// tokens left.
    pub fn span(&self) -> Range<usize> {
        match self.tokens.get(self.cursor) {
            Some(token) => token.span.clone(),
            None => {
                let end = self.tokens.last().map_or(0, |token| token.span.end);
                end..end
            },
        }
    }

    /// Returns true if only whitespace remains.
    pub fn at_eof(&self) -> bool {
        self.tokens[self.cursor..].iter().all(|token| token.is_whitespace())
    }

    /// Consumes and returns the next non-whitespace token, or an
    /// [`UnexpectedEof`](kind::UnexpectedEof) error if none remain.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while let Some(token) = self.tokens.get(self.cursor) {
            self.cursor += 1;
            if !token.is_whitespace() {
                // cloning is cheap: only the span Range is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Speculatively parses a `T`, rewinding the cursor on failure so another interpretation can
    /// be tried from the same position.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses one or more `T`s separated by the given delimiter token.
    ///
    /// Stops (successfully) at the first position where neither a delimiter nor another `T`
    /// follows. Fails, rewinding the cursor, only if not even the first `T` can be parsed or a
    /// fatal error occurs.
    pub fn try_parse_delimited<T: Parse>(&mut self, delimiter: TokenKind) -> Result<Vec<T>, Error> {
        let start = self.cursor;
        let mut values = Vec::new();

        loop {
            match self.try_parse::<T>() {
                Ok(value) => values.push(value),
                Err(err) if err.fatal => return Err(err),
                Err(err) => {
                    if values.is_empty() {
                        self.cursor = start;
                        return Err(err);
                    } else {
                        return Ok(values);
                    }
                },
            }

            let mut ahead = self.clone();
            match ahead.next_token() {
                Ok(token) if token.kind == delimiter => {
                    self.cursor = ahead.cursor;
                },
                _ => return Ok(values),
            }
        }
    }

    /// Speculatively parses a value with the given function, rewinding the cursor on failure.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Parses a `T` and requires that nothing but whitespace remains afterwards, failing with an
    /// [`ExpectedEof`](kind::ExpectedEof) error otherwise.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = self.try_parse::<T>()?;
        if self.at_eof() {
            Ok(value)
        } else {
            Err(self.error(kind::ExpectedEof))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::expr::Expr;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_source() {
        let mut parser = Parser::new("");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert_eq!(err.spans, vec![0..0]);
    }

    #[test]
    fn leftover_tokens() {
        let mut parser = Parser::new("x + 1 )");
        assert!(parser.try_parse_full::<Expr>().is_err());
    }
}
