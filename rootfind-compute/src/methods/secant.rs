use crate::function::Function;
use super::{relative_error, OpenRecord, Reason, Run, StopCond, INITIAL_REL_ERR};
use rootfind_error::Error;

/// Runs the secant method from the two seeds `x0` and `x1`.
///
/// Each iteration takes the x-intercept of the line through the two most recent estimates as
/// the next estimate. No derivative is required. When the function takes the same value at both
/// current estimates the secant line is horizontal and the run stops as [`Run::Degenerate`].
pub fn secant(
    expr: &str,
    x0: f64,
    x1: f64,
    stop: StopCond,
) -> Result<Run<OpenRecord>, Error> {
    let f = Function::parse(expr)?;

    let (mut x0, mut x1) = (x0, x1);
    let mut rel_err = INITIAL_REL_ERR;
    let mut iteration = 0;
    let mut rows = Vec::new();

    while stop.should_continue(rel_err, iteration) {
        let f_x0 = f.eval(x0);
        let f_x1 = f.eval(x1);
        if f_x1 - f_x0 == 0.0 {
            return Ok(Run::Degenerate {
                rows,
                reason: Reason::FlatSecant,
            });
        }

        let xi = x1 - f_x1 * (x1 - x0) / (f_x1 - f_x0);
        let f_xi = f.eval(xi);
        rel_err = relative_error(xi, x1, iteration);

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

        x0 = x1;
        x1 = xi;
    }

    Ok(Run::Complete(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn converges_on_cos_x_minus_x() {
        let run = secant("cos(x) - x", 0.0, 1.0, StopCond::tolerance(1e-6)).unwrap();
        assert!(!run.is_degenerate());

        let last = *run.rows().last().unwrap();
        assert!(last.rel_err <= 1e-6);
        assert_float_absolute_eq!(last.xi, 0.7390851332151607, 1e-8);
    }

    #[test]
    fn exact_iteration_count() {
        let run = secant("x^2 - 2", 1.0, 2.0, StopCond::iterations(5)).unwrap();
        let rows = run.rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].rel_err, 100.0);
        assert_float_absolute_eq!(rows.last().unwrap().xi, 2.0_f64.sqrt(), 1e-6);
    }

    #[test]
    fn flat_seeds_degenerate_immediately() {
        // the parabola takes the value 0 at both seeds
        let run = secant("x^2 - 2x", 0.0, 2.0, StopCond::tolerance(1e-6)).unwrap();
        assert_eq!(run.reason(), Some(Reason::FlatSecant));
        assert!(run.rows().is_empty());
    }
}
