//! Unary and binary operator tokens, with their precedence and associativity.

use crate::{
    parser::{
        error::{Error, kind},
        Associativity,
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::ops::Range;

/// A kind of unary operation. Negation is the only one the expression grammar has.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOpKind {
    Neg,
}

impl UnaryOpKind {
    /// How tightly the operator binds its operand.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Neg => Precedence::Neg,
        }
    }
}

/// A unary operator together with where it appeared in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp {
    /// The kind of unary operator.
    pub kind: UnaryOpKind,

    /// The region of the source code this operator was parsed from.
    pub span: Range<usize>,
}

impl UnaryOp {
    /// How tightly the operator binds its operand.
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }
}

impl Parse for UnaryOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Sub => Ok(Self {
                kind: UnaryOpKind::Neg,
                span: token.span,
            }),
            found => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[TokenKind::Sub],
                found,
            })),
        }
    }
}

/// A kind of binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinOpKind {
    Exp,
    Mul,
    Div,
    Add,
    Sub,
}

impl BinOpKind {
    /// The binary operation the given token spells, if any.
    fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Exp => Some(Self::Exp),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            _ => None,
        }
    }

    /// How tightly the operator binds its operands.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Exp => Precedence::Exp,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
        }
    }

    /// Which side groups first in a chain of the same operator. Only exponentiation groups to
    /// the right: `2^3^2` is `2^(3^2)`.
    pub fn associativity(&self) -> Associativity {
        match self {
            Self::Exp => Associativity::Right,
            _ => Associativity::Left,
        }
    }
}

/// A binary operator together with where it appeared in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct BinOp {
    /// The kind of binary operator.
    pub kind: BinOpKind,

    /// Whether the parser inserted this operator for adjacency multiplication, as in `2x` or
    /// `2sin(x)`. Implicit operators occupy no source text.
    pub implicit: bool,

    /// The region of the source code this operator was parsed from.
    pub span: Range<usize>,
}

impl BinOp {
    /// How tightly the operator binds its operands.
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }

    /// Which side groups first in a chain of the same operator.
    pub fn associativity(&self) -> Associativity {
        self.kind.associativity()
    }
}

impl Parse for BinOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match BinOpKind::from_token_kind(token.kind) {
            Some(kind) => Ok(Self {
                kind,
                implicit: false,
                span: token.span,
            }),
            None => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[
                    TokenKind::Exp,
                    TokenKind::Mul,
                    TokenKind::Div,
                    TokenKind::Add,
                    TokenKind::Sub,
                ],
                found: token.kind,
            })),
        }
    }
}
