use crate::function::Function;
use super::{relative_error, OpenRecord, Reason, Run, StopCond, INITIAL_REL_ERR};
use rootfind_error::Error;

/// Runs the Newton-Raphson method from `x0`.
///
/// The derivative is produced symbolically, so the expression must be differentiable in closed
/// form; otherwise this fails before iterating. When the derivative vanishes at the current
/// estimate the Newton step is undefined and the run stops as [`Run::Degenerate`].
pub fn newton(expr: &str, x0: f64, stop: StopCond) -> Result<Run<OpenRecord>, Error> {
    let f = Function::parse(expr)?;
    let fp = f.derivative()?;

    let mut xi = x0;
    let mut rel_err = INITIAL_REL_ERR;
    let mut iteration = 0;
    let mut rows = Vec::new();

    while stop.should_continue(rel_err, iteration) {
        let fp_xi = fp.eval(xi);
        if fp_xi == 0.0 {
            return Ok(Run::Degenerate {
                rows,
                reason: Reason::ZeroDerivative { at: xi },
            });
        }

        let xi_old = xi;
        xi = xi_old - f.eval(xi_old) / fp_xi;
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

    Ok(Run::Complete(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn converges_quadratically_to_sqrt_two() {
        let run = newton("x^2 - 2", 1.0, StopCond::iterations(5)).unwrap();
        let rows = run.rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].rel_err, 100.0);
        assert_eq!(rows.last().unwrap().xi, 1.4142135623730951);
    }

    #[test]
    fn tolerance_stop() {
        let run = newton("cos(x) - x", 1.0, StopCond::tolerance(1e-8)).unwrap();
        assert!(!run.is_degenerate());

        let last = *run.rows().last().unwrap();
        assert!(last.rel_err <= 1e-8);
        assert_float_absolute_eq!(last.xi, 0.7390851332151607, 1e-9);
    }

    #[test]
    fn zero_derivative_at_the_seed() {
        let run = newton("x^3", 0.0, StopCond::tolerance(1e-6)).unwrap();
        assert_eq!(run.reason(), Some(Reason::ZeroDerivative { at: 0.0 }));
        assert!(run.rows().is_empty());
    }

    #[test]
    fn zero_derivative_mid_run_keeps_earlier_rows() {
        // the first step from 1.5 lands exactly on x = 1, where the derivative vanishes
        let run = newton("x*x*x - 3x + 3", 1.5, StopCond::tolerance(1e-6)).unwrap();
        assert_eq!(run.reason(), Some(Reason::ZeroDerivative { at: 1.0 }));
        assert_eq!(run.rows().len(), 1);
        assert_eq!(run.rows()[0].xi, 1.0);
    }

    #[test]
    fn non_differentiable_expression_is_an_error() {
        assert!(newton("abs(x) - 1", 2.0, StopCond::iterations(3)).is_err());
    }
}
