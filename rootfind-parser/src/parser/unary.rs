use std::ops::Range;
use crate::{
    parser::{
        binary::Binary,
        expr::{Expr, Primary},
        error::Error,
        token::op::UnaryOp,
        Parse,
        Parser,
    },
    try_parse_catch_fatal,
};

/// A unary expression, such as `-x`. Unary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    /// The operand of the unary expression.
    pub operand: Box<Expr>,

    /// The operator being applied.
    pub op: UnaryOp,

    /// The region of the source code this expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the whole expression, operator included.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses either a unary expression or, failing that, a [`Primary`].
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        let _ = try_parse_catch_fatal!(
            input.try_parse_with_fn(|input| Self::parse(input).map(Expr::Unary))
        );
        Primary::parse(input).map(Into::into)
    }
}

impl Parse for Unary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let op = input.try_parse::<UnaryOp>()?;
        let op_precedence = op.precedence();
        let start_span = op.span.start;

        // negation is right-associative: the operand extends as far as precedence allows, so
        // `-x^2` parses as `-(x^2)` while `-x + 1` parses as `(-x) + 1`
        let operand = {
            let lhs = Unary::parse_or_lower(input)?;
            Binary::parse_expr(input, lhs, op_precedence)?
        };
        let end_span = operand.span().end;

        Ok(Self {
            operand: Box::new(operand),
            op,
            span: start_span..end_span,
        })
    }
}
