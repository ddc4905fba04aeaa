//! Numerical evaluation of lowered expressions.
//!
//! Evaluation is total: domain errors (division by zero, `ln` of a negative, ...) propagate as
//! IEEE NaN/infinity instead of failing, so a solver iteration or a curve sample can carry an
//! invalid value through without aborting. The solvers in [`crate::methods`] check the specific
//! quantities they cannot tolerate (a vanished derivative, a flat secant) themselves.

use crate::symbolic::{BinOp, Expr, UnaryOp};

impl Expr {
    /// Evaluates the expression with the variable bound to `x`.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Num(n) => *n,
            Expr::Var => x,
            Expr::Unary(UnaryOp::Neg, operand) => -operand.eval(x),
            Expr::Binary(op, lhs, rhs) => {
                let (lhs, rhs) = (lhs.eval(x), rhs.eval(x));
                match op {
                    BinOp::Add => lhs + rhs,
                    BinOp::Sub => lhs - rhs,
                    BinOp::Mul => lhs * rhs,
                    BinOp::Div => lhs / rhs,
                    BinOp::Pow => lhs.powf(rhs),
                }
            },
            Expr::Call(func, arg) => func.eval(arg.eval(x)),
        }
    }

    /// Evaluates the expression elementwise over a slice of inputs.
    pub fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_relative_eq;
    use rootfind_parser::parser::{expr::Expr as AstExpr, Parser};

    /// Parses, lowers and evaluates the given source at `x`.
    fn eval(source: &str, x: f64) -> f64 {
        let ast = Parser::new(source).try_parse_full::<AstExpr>().unwrap();
        Expr::lower(&ast).unwrap().eval(x)
    }

    #[test]
    fn polynomial() {
        assert_float_relative_eq!(eval("x^2 - 2", 3.0), 7.0);
        assert_float_relative_eq!(eval("x^3 - 2x - 5", 2.0), -1.0);
    }

    #[test]
    fn named_functions() {
        assert_float_relative_eq!(eval("cos(x) - x", 0.0), 1.0);
        assert_float_relative_eq!(eval("exp(x)", 1.0), std::f64::consts::E);
        assert_float_relative_eq!(eval("log(e)", 0.0), 1.0);
        assert_float_relative_eq!(eval("sqrt(x)", 9.0), 3.0);
    }

    #[test]
    fn negation_and_powers() {
        assert_float_relative_eq!(eval("-x^2", 3.0), -9.0);
        assert_float_relative_eq!(eval("2^3^2", 0.0), 512.0);
        assert_float_relative_eq!(eval("(-x)^2", 3.0), 9.0);
    }

    #[test]
    fn domain_errors_propagate_as_invalid_values() {
        assert!(eval("sqrt(x)", -1.0).is_nan());
        assert!(eval("log(x)", -1.0).is_nan());
        assert!(eval("1 / x", 0.0).is_infinite());
    }

    #[test]
    fn vectorized_evaluation_matches_scalar() {
        let ast = Parser::new("x^2 - 2").try_parse_full::<AstExpr>().unwrap();
        let expr = Expr::lower(&ast).unwrap();
        let xs = [-2.0, -1.0, 0.0, 1.0, 2.0];
        let ys = expr.eval_many(&xs);
        assert_eq!(ys.len(), xs.len());
        for (&x, &y) in xs.iter().zip(&ys) {
            assert_eq!(y, expr.eval(x));
        }
    }
}
