use crate::error::NonDifferentiable;
use crate::funcs::Func;
use super::expr::{BinOp, Expr, UnaryOp};

// Trivially-zero / trivially-one checks used to clean up the produced tree - not mathematically
// rigorous, just enough to keep printed derivatives readable.
fn is_zero(e: &Expr) -> bool {
    matches!(e, Expr::Num(n) if *n == 0.0)
}

fn is_one(e: &Expr) -> bool {
    matches!(e, Expr::Num(n) if *n == 1.0)
}

fn num(n: f64) -> Expr {
    Expr::Num(n)
}

fn add(a: Expr, b: Expr) -> Expr {
    if is_zero(&a) {
        b
    } else if is_zero(&b) {
        a
    } else {
        Expr::Binary(BinOp::Add, Box::new(a), Box::new(b))
    }
}

fn sub(a: Expr, b: Expr) -> Expr {
    if is_zero(&b) {
        a
    } else if is_zero(&a) {
        neg(b)
    } else {
        Expr::Binary(BinOp::Sub, Box::new(a), Box::new(b))
    }
}

fn mul(a: Expr, b: Expr) -> Expr {
    if is_zero(&a) || is_zero(&b) {
        num(0.0)
    } else if is_one(&a) {
        b
    } else if is_one(&b) {
        a
    } else {
        Expr::Binary(BinOp::Mul, Box::new(a), Box::new(b))
    }
}

fn div(a: Expr, b: Expr) -> Expr {
    if is_zero(&a) {
        num(0.0)
    } else if is_one(&b) {
        a
    } else {
        Expr::Binary(BinOp::Div, Box::new(a), Box::new(b))
    }
}

fn pow(a: Expr, b: Expr) -> Expr {
    if is_zero(&b) {
        num(1.0)
    } else if is_one(&b) {
        a
    } else {
        Expr::Binary(BinOp::Pow, Box::new(a), Box::new(b))
    }
}

fn neg(a: Expr) -> Expr {
    if is_zero(&a) {
        num(0.0)
    } else {
        Expr::Unary(UnaryOp::Neg, Box::new(a))
    }
}

fn call(func: Func, arg: Expr) -> Expr {
    Expr::Call(func, Box::new(arg))
}

/// The derivative of `func` with respect to its argument `u`, before the chain rule is applied.
fn call_derivative(func: Func, u: &Expr) -> Result<Expr, NonDifferentiable> {
    let u = || u.clone();
    Ok(match func {
        Func::Sin => call(Func::Cos, u()),
        Func::Cos => neg(call(Func::Sin, u())),
        Func::Tan => div(num(1.0), pow(call(Func::Cos, u()), num(2.0))),
        Func::Asin => div(num(1.0), call(Func::Sqrt, sub(num(1.0), pow(u(), num(2.0))))),
        Func::Acos => neg(div(num(1.0), call(Func::Sqrt, sub(num(1.0), pow(u(), num(2.0)))))),
        Func::Atan => div(num(1.0), add(num(1.0), pow(u(), num(2.0)))),
        Func::Sinh => call(Func::Cosh, u()),
        Func::Cosh => call(Func::Sinh, u()),
        Func::Tanh => div(num(1.0), pow(call(Func::Cosh, u()), num(2.0))),
        Func::Exp => call(Func::Exp, u()),
        Func::Ln => div(num(1.0), u()),
        Func::Log10 => div(num(1.0), mul(u(), num(std::f64::consts::LN_10))),
        Func::Sqrt => div(num(1.0), mul(num(2.0), call(Func::Sqrt, u()))),
        Func::Abs | Func::Floor | Func::Ceil => {
            return Err(NonDifferentiable { name: func.name() });
        },
    })
}

/// Produces the exact first derivative of the given expression with respect to the variable.
///
/// Fails when the expression contains a function with no closed-form derivative (`abs`, `floor`,
/// `ceil`).
pub fn derivative(f: &Expr) -> Result<Expr, NonDifferentiable> {
    Ok(match f {
        Expr::Num(_) => num(0.0),
        Expr::Var => num(1.0),
        Expr::Unary(UnaryOp::Neg, operand) => neg(derivative(operand)?),
        Expr::Binary(BinOp::Add, lhs, rhs) => add(derivative(lhs)?, derivative(rhs)?),
        Expr::Binary(BinOp::Sub, lhs, rhs) => sub(derivative(lhs)?, derivative(rhs)?),
        Expr::Binary(BinOp::Mul, lhs, rhs) => add(
            mul(derivative(lhs)?, (**rhs).clone()),
            mul((**lhs).clone(), derivative(rhs)?),
        ),
        Expr::Binary(BinOp::Div, lhs, rhs) => div(
            sub(
                mul(derivative(lhs)?, (**rhs).clone()),
                mul((**lhs).clone(), derivative(rhs)?),
            ),
            pow((**rhs).clone(), num(2.0)),
        ),
        Expr::Binary(BinOp::Pow, base, exponent) => {
            if !exponent.contains_var() {
                // power rule, with the exponent reduced in place when it is a plain constant
                let reduced = match &**exponent {
                    Expr::Num(n) => num(n - 1.0),
                    other => sub(other.clone(), num(1.0)),
                };
                mul(
                    mul((**exponent).clone(), pow((**base).clone(), reduced)),
                    derivative(base)?,
                )
            } else {
                // general case: d/dx a^b = a^b * (b' ln a + b a'/a)
                mul(
                    pow((**base).clone(), (**exponent).clone()),
                    add(
                        mul(derivative(exponent)?, call(Func::Ln, (**base).clone())),
                        div(
                            mul((**exponent).clone(), derivative(base)?),
                            (**base).clone(),
                        ),
                    ),
                )
            }
        },
        Expr::Call(func, arg) => mul(call_derivative(*func, arg)?, derivative(arg)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rootfind_parser::parser::{expr::Expr as AstExpr, Parser};

    /// Parses and lowers the given source.
    fn lower(source: &str) -> Expr {
        let ast = Parser::new(source).try_parse_full::<AstExpr>().unwrap();
        Expr::lower(&ast).unwrap()
    }

    /// Approximates the derivative of the expression at `x` by central finite differences.
    fn finite_difference(expr: &Expr, x: f64) -> f64 {
        const DX: f64 = 1e-6;
        (expr.eval(x + DX) - expr.eval(x - DX)) / (2.0 * DX)
    }

    /// Checks the symbolic derivative of `source` against finite differences at several points.
    fn check(source: &'static str, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 1e-4;

        let expr = lower(source);
        let symbolic = derivative(&expr).unwrap();

        for point in points {
            let symbolically_computed = symbolic.eval(point);
            let numerically_computed = finite_difference(&expr, point);
            assert!(
                (symbolically_computed - numerically_computed).abs() < TOL,
                "for \"{source}\" at x={point}, symbolic derivative was {symbolically_computed} \
                 but finite differences produced {numerically_computed}"
            );
        }
    }

    #[test]
    fn power_rule() {
        check("x^2 + x + 1", [0.0, 1.0, 2.0, 5.0, 8.0]);
        check("x^3 - 2x - 5", [-2.0, -1.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn quotient_rule() {
        check("(x + 1) / (x^2 + 1)", [-2.0, 0.0, 0.5, 3.0]);
    }

    #[test]
    fn chain_rule_through_named_functions() {
        check("sin(x^2)", [-1.0, 0.0, 0.5, 1.0]);
        check("exp(-x^2)", [-1.0, 0.0, 1.0]);
        check("log(x^2 + 1)", [-1.0, 0.0, 2.0]);
        check("sqrt(x^2 + 1)", [-1.0, 0.0, 2.0]);
        check("tan(x)", [-0.5, 0.0, 0.5]);
    }

    #[test]
    fn variable_exponent() {
        check("2^x", [0.0, 1.0, 2.0]);
        check("x^x", [0.5, 1.0, 2.0]);
    }

    #[test]
    fn constants_vanish() {
        assert_eq!(derivative(&lower("pi")).unwrap(), Expr::Num(0.0));
        assert_eq!(derivative(&lower("2pi + e")).unwrap(), Expr::Num(0.0));
    }

    #[test]
    fn readable_output() {
        assert_eq!(derivative(&lower("x^2 - 2")).unwrap().to_string(), "2 * x");
        assert_eq!(derivative(&lower("cos(x) - x")).unwrap().to_string(), "-sin(x) - 1");
    }

    #[test]
    fn non_smooth_functions_are_rejected() {
        assert_eq!(
            derivative(&lower("abs(x)")).unwrap_err(),
            NonDifferentiable { name: "abs" },
        );
        assert!(derivative(&lower("floor(x) + x^2")).is_err());
    }
}
