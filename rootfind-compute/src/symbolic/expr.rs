use std::fmt;

use rootfind_error::Error;
use rootfind_parser::parser::{
    binary::Binary as AstBinary,
    call::Call as AstCall,
    expr::Expr as AstExpr,
    literal::Literal as AstLiteral,
    token::op::{BinOpKind as AstBinOpKind, UnaryOpKind as AstUnaryOpKind},
    unary::Unary as AstUnary,
};

use crate::error::{UnknownFunction, UnknownSymbol, WrongArity};
use crate::funcs::Func;

/// A unary operation in a lowered expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    Neg,
}

/// A binary operation in a lowered expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// An expression lowered out of the parser's AST: a tree of constants, the variable `x`, unary
/// and binary operations, and calls to named functions.
///
/// Spans, parentheses and namespaced spellings are resolved away during lowering; what remains is
/// the closed-form evaluator tree shared by numerical evaluation and differentiation. The tree is
/// immutable once built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// A numeric constant.
    Num(f64),

    /// The function variable `x`.
    Var,

    /// A unary operation.
    Unary(UnaryOp, Box<Expr>),

    /// A binary operation.
    Binary(BinOp, Box<Expr>, Box<Expr>),

    /// A call to a named function.
    Call(Func, Box<Expr>),
}

impl Expr {
    /// Lowers a parsed AST into an [`Expr`], resolving symbols and function names.
    ///
    /// Fails when the AST contains an unknown symbol, an unknown function, or a call with the
    /// wrong number of arguments; the returned error points at the offending node.
    pub fn lower(ast: &AstExpr) -> Result<Expr, Error> {
        match ast {
            AstExpr::Literal(literal) => Self::lower_literal(literal),
            AstExpr::Paren(paren) => Self::lower(&paren.expr),
            AstExpr::Call(call) => Self::lower_call(call),
            AstExpr::Unary(unary) => Self::lower_unary(unary),
            AstExpr::Binary(binary) => Self::lower_binary(binary),
        }
    }

    fn lower_literal(literal: &AstLiteral) -> Result<Expr, Error> {
        match literal {
            AstLiteral::Number(num) => Ok(Expr::Num(num.value)),
            AstLiteral::Symbol(sym) => match sym.name.as_str() {
                "x" => Ok(Expr::Var),
                "pi" => Ok(Expr::Num(std::f64::consts::PI)),
                "e" => Ok(Expr::Num(std::f64::consts::E)),
                "tau" => Ok(Expr::Num(std::f64::consts::TAU)),
                name => Err(Error::new(
                    vec![sym.span.clone()],
                    UnknownSymbol { name: name.to_owned() },
                )),
            },
        }
    }

    fn lower_call(call: &AstCall) -> Result<Expr, Error> {
        let func = Func::from_name(&call.name.name).ok_or_else(|| Error::new(
            vec![call.name.span.clone()],
            UnknownFunction {
                name: call.name.name.clone(),
                suggestion: Func::suggest(&call.name.name),
            },
        ))?;

        if call.args.len() != 1 {
            return Err(Error::new(
                vec![call.span()],
                WrongArity {
                    name: func.name(),
                    expected: 1,
                    found: call.args.len(),
                },
            ));
        }

        Ok(Expr::Call(func, Box::new(Self::lower(&call.args[0])?)))
    }

    fn lower_unary(unary: &AstUnary) -> Result<Expr, Error> {
        let operand = Self::lower(&unary.operand)?;
        match unary.op.kind {
            AstUnaryOpKind::Neg => Ok(Expr::Unary(UnaryOp::Neg, Box::new(operand))),
        }
    }

    fn lower_binary(binary: &AstBinary) -> Result<Expr, Error> {
        let op = match binary.op.kind {
            AstBinOpKind::Add => BinOp::Add,
            AstBinOpKind::Sub => BinOp::Sub,
            AstBinOpKind::Mul => BinOp::Mul,
            AstBinOpKind::Div => BinOp::Div,
            AstBinOpKind::Exp => BinOp::Pow,
        };
        Ok(Expr::Binary(
            op,
            Box::new(Self::lower(&binary.lhs)?),
            Box::new(Self::lower(&binary.rhs)?),
        ))
    }

    /// Returns true if the expression mentions the variable anywhere.
    pub fn contains_var(&self) -> bool {
        match self {
            Expr::Num(_) => false,
            Expr::Var => true,
            Expr::Unary(_, operand) => operand.contains_var(),
            Expr::Binary(_, lhs, rhs) => lhs.contains_var() || rhs.contains_var(),
            Expr::Call(_, arg) => arg.contains_var(),
        }
    }

    /// The binding strength of this node when printed, used to decide where parentheses are
    /// required.
    fn print_precedence(&self) -> u8 {
        match self {
            Expr::Num(n) if *n < 0.0 => 1,
            Expr::Num(_) | Expr::Var | Expr::Call(..) => 4,
            Expr::Unary(UnaryOp::Neg, _) => 1,
            Expr::Binary(BinOp::Add | BinOp::Sub, ..) => 1,
            Expr::Binary(BinOp::Mul | BinOp::Div, ..) => 2,
            Expr::Binary(BinOp::Pow, ..) => 3,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        /// Writes `expr`, parenthesized if it binds weaker than `min`.
        fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, min: u8) -> fmt::Result {
            if expr.print_precedence() < min {
                write!(f, "({expr})")
            } else {
                write!(f, "{expr}")
            }
        }

        match self {
            Expr::Num(n) => write!(f, "{n}"),
            Expr::Var => write!(f, "x"),
            Expr::Unary(UnaryOp::Neg, operand) => {
                write!(f, "-")?;
                write_operand(f, operand, 2)
            },
            Expr::Binary(op, lhs, rhs) => {
                let (symbol, prec) = match op {
                    BinOp::Add => ("+", 1),
                    BinOp::Sub => ("-", 1),
                    BinOp::Mul => ("*", 2),
                    BinOp::Div => ("/", 2),
                    BinOp::Pow => ("^", 3),
                };
                // `-`, `/` and `^` all need the tie broken on one side: `a - (b - c)`,
                // `a / (b / c)`, `(a^b)^c`
                let (lhs_min, rhs_min) = match op {
                    BinOp::Add | BinOp::Mul => (prec, prec),
                    BinOp::Sub | BinOp::Div => (prec, prec + 1),
                    BinOp::Pow => (prec + 1, prec),
                };
                write_operand(f, lhs, lhs_min)?;
                // `^` prints tight (`x^2`), the lower-precedence operators spaced (`x + 1`)
                if *op == BinOp::Pow {
                    write!(f, "{symbol}")?;
                } else {
                    write!(f, " {symbol} ")?;
                }
                write_operand(f, rhs, rhs_min)
            },
            Expr::Call(func, arg) => write!(f, "{}({arg})", func.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rootfind_parser::parser::Parser;

    /// Parses and lowers the given source.
    fn lower(source: &str) -> Result<Expr, Error> {
        let ast = Parser::new(source).try_parse_full::<AstExpr>().unwrap();
        Expr::lower(&ast)
    }

    #[test]
    fn lowers_polynomial() {
        let expr = lower("x^2 - 2").unwrap();
        assert_eq!(expr, Expr::Binary(
            BinOp::Sub,
            Box::new(Expr::Binary(
                BinOp::Pow,
                Box::new(Expr::Var),
                Box::new(Expr::Num(2.0)),
            )),
            Box::new(Expr::Num(2.0)),
        ));
    }

    #[test]
    fn resolves_constants() {
        let expr = lower("2pi").unwrap();
        assert_eq!(expr, Expr::Binary(
            BinOp::Mul,
            Box::new(Expr::Num(2.0)),
            Box::new(Expr::Num(std::f64::consts::PI)),
        ));
        assert!(!expr.contains_var());
    }

    #[test]
    fn normalizes_namespaced_exp() {
        assert_eq!(lower("np.exp(x)").unwrap(), lower("exp(x)").unwrap());
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let err = lower("x + y").unwrap_err();
        assert_eq!(err.spans, vec![4..5]);
    }

    #[test]
    fn unknown_function_is_rejected() {
        assert!(lower("sen(x)").is_err());
    }

    #[test]
    fn wrong_arity_is_rejected() {
        assert!(lower("sin(x, 2)").is_err());
        assert!(lower("sin()").is_err());
    }

    #[test]
    fn display_round_trips_grouping() {
        for source in ["x^2 - 2", "(x + 1) / (x - 1)", "2 * x^(x + 1)", "-(x + 1)"] {
            let expr = lower(source).unwrap();
            let printed = expr.to_string();
            assert_eq!(lower(&printed).unwrap(), expr, "for {source:?} printed as {printed:?}");
        }
    }

    #[test]
    fn display_keeps_powers_tight() {
        assert_eq!(lower("x^2 - 2").unwrap().to_string(), "x^2 - 2");
        assert_eq!(lower("x + x**3").unwrap().to_string(), "x + x^3");
    }
}
