//! A parsed, evaluable function of one variable.

use crate::{
    error::NotConstant,
    symbolic::{derivative, Expr},
};
use rootfind_error::Error;
use rootfind_parser::parser::{expr::Expr as AstExpr, Parser};

/// The name of the function variable. Every expression is a function of this symbol.
pub const VARIABLE: &str = "x";

/// A function of one variable, carrying both the source text it was parsed from and the lowered
/// expression tree used for evaluation and differentiation.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    src: String,
    expr: Expr,
}

impl Function {
    /// Parses the given source into a function of [`VARIABLE`].
    pub fn parse(src: &str) -> Result<Function, Error> {
        let ast = Parser::new(src)
            .try_parse_full::<AstExpr>()
            .map_err(Error::from)?;
        let expr = Expr::lower(&ast)?;
        Ok(Function {
            src: src.to_owned(),
            expr,
        })
    }

    /// Builds a function directly from an expression tree. The source text is the canonical
    /// rendering of the tree.
    pub fn from_expr(expr: Expr) -> Function {
        Function {
            src: expr.to_string(),
            expr,
        }
    }

    /// The source text this function was parsed from.
    pub fn source(&self) -> &str {
        &self.src
    }

    /// The lowered expression tree.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Evaluates the function at the given point.
    pub fn eval(&self, x: f64) -> f64 {
        self.expr.eval(x)
    }

    /// Evaluates the function at each of the given points.
    pub fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        self.expr.eval_many(xs)
    }

    /// The exact first derivative of this function, as a new [`Function`].
    pub fn derivative(&self) -> Result<Function, Error> {
        let expr = derivative(self.expr())
            .map_err(|kind| Error::new(vec![0..self.src.len()], kind))?;
        Ok(Function::from_expr(expr))
    }
}

/// Evaluates a constant expression, one with no occurrence of [`VARIABLE`], to a single number.
pub fn evaluate(src: &str) -> Result<f64, Error> {
    let f = Function::parse(src)?;
    if f.expr().contains_var() {
        return Err(Error::new(vec![0..src.len()], NotConstant));
    }
    // the point is irrelevant for a constant expression
    Ok(f.eval(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn parse_and_eval() {
        let f = Function::parse("x^2 - 2").unwrap();
        assert_eq!(f.source(), "x^2 - 2");
        assert_float_absolute_eq!(f.eval(2.0), 2.0);
        assert_eq!(f.eval_many(&[0.0, 1.0, 2.0]), vec![-2.0, -1.0, 2.0]);
    }

    #[test]
    fn parse_errors_surface() {
        assert!(Function::parse("x +").is_err());
        assert!(Function::parse("sen(x)").is_err());
        assert!(Function::parse("x + y").is_err());
    }

    #[test]
    fn derivative_is_a_function() {
        let f = Function::parse("x^2 - 2").unwrap();
        let fp = f.derivative().unwrap();
        assert_eq!(fp.source(), "2 * x");
        assert_float_absolute_eq!(fp.eval(3.0), 6.0);
    }

    #[test]
    fn derivative_failure_is_reported() {
        let f = Function::parse("abs(x)").unwrap();
        assert!(f.derivative().is_err());
    }

    #[test]
    fn evaluates_constant_expressions() {
        assert_eq!(evaluate("2 * pi").unwrap(), 2.0 * std::f64::consts::PI);
        assert_float_absolute_eq!(evaluate("sqrt(2) + 1").unwrap(), 2.414213562373095, 1e-12);
    }

    #[test]
    fn constant_evaluation_rejects_the_variable() {
        assert!(evaluate("x + 1").is_err());
        assert!(evaluate("1 +").is_err());
    }
}
