use std::ops::Range;
use super::{
    error::{kind, Error},
    expr::Expr,
    literal::LitSym,
    token::{CloseParen, Dot, OpenParen},
    Parse,
    Parser,
};
use crate::tokenizer::TokenKind;

/// A function call, such as `sin(x)`.
///
/// Namespaced spellings such as `np.exp(x)` or `math.exp(x)` are accepted and normalized: the
/// call keeps only the final segment of the dotted path as its canonical name.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// The canonical name of the function to call.
    pub name: LitSym,

    /// The argument expressions, in source order.
    pub args: Vec<Expr>,

    /// The region of the source code this call was parsed from, dotted path included.
    pub span: Range<usize>,

    /// The span of the argument list's parentheses.
    pub paren_span: Range<usize>,
}

impl Call {
    /// Returns the span of the whole call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let first = input.try_parse::<LitSym>()?;
        let start = first.span.start;

        // collapse dotted paths (`np.exp`) down to the final segment
        let mut name = first;
        while input.clone().try_parse::<Dot>().is_ok() {
            input.try_parse::<Dot>()?;
            name = input.try_parse::<LitSym>()?;
        }

        let open_paren = input.try_parse::<OpenParen>()?;

        // an empty argument list is syntactically fine; lowering reports the arity mismatch
        let args = if input.clone().try_parse::<CloseParen>().is_ok() {
            Vec::new()
        } else {
            input.try_parse_delimited::<Expr>(TokenKind::Comma)?
        };

        let close_paren = input.try_parse::<CloseParen>().map_err(|_| {
            Error::new_fatal(vec![open_paren.span.clone()], kind::UnclosedParenthesis { opening: true })
        })?;

        Ok(Self {
            name,
            args,
            span: start..close_paren.span.end,
            paren_span: open_paren.span.start..close_paren.span.end,
        })
    }
}
