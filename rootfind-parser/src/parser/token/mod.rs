pub mod op;

use crate::{
    parser::{error::{kind, Error}, Parser, Parse},
    tokenizer::TokenKind,
};
use std::ops::Range;

/// Generates a typed wrapper for each listed token kind, with a [`Parse`] implementation that
/// consumes exactly one token of that kind. Requesting tokens by type keeps the node parsers
/// free of raw kind comparisons.
macro_rules! parse_token_kinds {
    ($($name:ident)*) => {$(
        #[derive(Clone, Debug, PartialEq)]
        pub(crate) struct $name {
            pub(crate) lexeme: String,
            pub(crate) span: Range<usize>,
        }

        impl Parse for $name {
            fn parse(input: &mut Parser) -> Result<Self, Error> {
                let token = input.next_token()?;
                match token.kind {
                    TokenKind::$name => Ok(Self {
                        lexeme: token.lexeme.to_owned(),
                        span: token.span,
                    }),
                    found => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                        expected: &[TokenKind::$name],
                        found,
                    })),
                }
            }
        }
    )*};
}

parse_token_kinds!(
    Name
    Int
    Float
    Dot
    OpenParen
    CloseParen
);
