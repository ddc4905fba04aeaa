use crate::function::Function;
use crate::symbolic::{BinOp, Expr};
use super::{relative_error, OpenRecord, Run, StopCond, INITIAL_REL_ERR};
use rootfind_error::Error;

/// The outcome of a fixed point run: the iteration table plus the iteration function that was
/// used, since a default is synthesized when the caller does not provide one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedPoint {
    /// The iteration table.
    pub run: Run<OpenRecord>,

    /// The source text of the iteration function `g`.
    pub g: String,
}

/// The default iteration function `g(x) = x + f(x)`, whose fixed points are exactly the roots
/// of `f`.
pub fn default_g(f: &Function) -> Function {
    Function::from_expr(Expr::Binary(
        BinOp::Add,
        Box::new(Expr::Var),
        Box::new(f.expr().clone()),
    ))
}

/// Runs fixed point iteration from `x0`.
///
/// Each iteration applies the iteration function: `x_{i+1} = g(x_i)`. When `g_expr` is `None`, a
/// default `g(x) = x + f(x)` is synthesized from the target function. Convergence is not
/// guaranteed; a poorly chosen `g` diverges, and the run simply records the diverging iterates
/// until the iteration ceiling.
pub fn fixed_point(
    expr: &str,
    g_expr: Option<&str>,
    x0: f64,
    stop: StopCond,
) -> Result<FixedPoint, Error> {
    let f = Function::parse(expr)?;
    let g = match g_expr {
        Some(src) => Function::parse(src)?,
        None => default_g(&f),
    };

    let mut xi = x0;
    let mut rel_err = INITIAL_REL_ERR;
    let mut iteration = 0;
    let mut rows = Vec::new();

    while stop.should_continue(rel_err, iteration) {
        let xi_old = xi;
        xi = g.eval(xi_old);
        let f_xi = f.eval(xi);
        rel_err = relative_error(xi, xi_old, iteration);

        rows.push(OpenRecord {
            iteration,
            xi,
            f_xi,
            rel_err,
        });

        iteration += 1;
        if stop.ceiling_reached(iteration) {
            break;
        }
    }

    Ok(FixedPoint {
        run: Run::Complete(rows),
        g: g.source().to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn converges_with_a_contractive_g() {
        // x = cos(x) has the fixed point 0.739085...
        let out = fixed_point("cos(x) - x", Some("cos(x)"), 0.5, StopCond::tolerance(1e-4))
            .unwrap();
        assert_eq!(out.g, "cos(x)");

        let last = *out.run.rows().last().unwrap();
        assert_float_absolute_eq!(last.xi, 0.7390851332151607, 1e-4);
        assert_float_absolute_eq!(last.f_xi, 0.0, 1e-4);
    }

    #[test]
    fn default_g_is_x_plus_f() {
        let out = fixed_point("x^2 - x - 2", None, 0.0, StopCond::iterations(3)).unwrap();
        assert_eq!(out.g, "x + x^2 - x - 2");

        // g(0) = -2, g(-2) = 2, g(2) = 2: the iterates land on the root x = 2
        let rows = out.run.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].rel_err, 100.0);
        assert_float_absolute_eq!(rows[0].xi, -2.0);
        assert_float_absolute_eq!(rows[1].xi, 2.0);
        assert_float_absolute_eq!(rows[2].f_xi, 0.0);
    }

    #[test]
    fn ceiling_caps_a_diverging_g() {
        let out = fixed_point("x^2 - 2", Some("x^2"), 2.0, StopCond::tolerance_capped(1e-6, 5))
            .unwrap();
        assert!(!out.run.is_degenerate());
        assert_eq!(out.run.rows().len(), 5);
    }
}
