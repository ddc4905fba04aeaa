use std::ops::Range;
use super::{
    expr::{Expr, Primary},
    error::Error,
    token::op::{BinOp, BinOpKind},
    Associativity,
    Parse,
    Parser,
    Precedence,
    unary::Unary,
};

/// Two operands joined by a binary operator, such as `x + 1`. Either operand can itself be any
/// expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    /// The left operand.
    pub lhs: Box<Expr>,

    /// The operator joining the operands.
    pub op: BinOp,

    /// The right operand.
    pub rhs: Box<Expr>,

    /// The region of the source code this expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the whole expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Peeks the next binary operator without committing to it.
    ///
    /// If no explicit operator follows but a primary expression does, an implicit multiplication
    /// operator is produced, which is how `2x` and `2sin(x)` parse as products.
    fn peek_op(input: &Parser) -> Option<BinOp> {
        let mut ahead = input.clone();
        if let Ok(op) = ahead.try_parse::<BinOp>() {
            return Some(op);
        }

        let mut ahead = input.clone();
        if ahead.try_parse_with_fn(Primary::parse).is_ok() {
            let at = input.span().start;
            return Some(BinOp {
                kind: BinOpKind::Mul,
                implicit: true,
                span: at..at,
            });
        }

        None
    }

    /// Advances the parser past the given operator. Implicit operators occupy no tokens, so there
    /// is nothing to consume for them.
    fn commit_op(input: &mut Parser, op: &BinOp) -> Result<(), Error> {
        if !op.implicit {
            input.try_parse::<BinOp>()?;
        }
        Ok(())
    }

    /// Parses the operators and right-hand sides of a binary expression, starting with the given
    /// left-hand side and continuing for as long as the next operator binds at least as tightly
    /// as `min_precedence`.
    pub fn parse_expr(
        input: &mut Parser,
        mut lhs: Expr,
        min_precedence: Precedence,
    ) -> Result<Expr, Error> {
        loop {
            let Some(op) = Self::peek_op(input) else { break };
            if op.precedence() < min_precedence {
                break;
            }
            Self::commit_op(input, &op)?;

            let mut rhs = Unary::parse_or_lower(input)?;

            // fold in any tighter-binding (or right-associative, equally-binding) operators on
            // the right before constructing this node, so `3 + 4 * 5` and `2^3^4` group correctly
            loop {
                let Some(next_op) = Self::peek_op(input) else { break };
                if next_op.precedence() > op.precedence()
                    || (next_op.precedence() == op.precedence()
                        && next_op.associativity() == Associativity::Right)
                {
                    rhs = Self::parse_expr(input, rhs, next_op.precedence())?;
                } else {
                    break;
                }
            }

            let span = lhs.span().start..rhs.span().end;
            lhs = Expr::Binary(Binary {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
                span,
            });
        }

        Ok(lhs)
    }
}
