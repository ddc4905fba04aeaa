use crate::function::Function;
use super::{relative_error, BracketRecord, Reason, Run, StopCond, INITIAL_REL_ERR};
use rootfind_error::Error;

/// Runs the false position (regula falsi) method on `[a, b]`.
///
/// Each iteration takes the x-intercept of the secant line through `(a, f(a))` and `(b, f(b))`
/// as the new estimate and keeps the half of the bracket in which the function changes sign.
/// When the function takes the same value at both ends the secant line is horizontal and the
/// run stops as [`Run::Degenerate`].
pub fn false_position(
    expr: &str,
    a: f64,
    b: f64,
    stop: StopCond,
) -> Result<Run<BracketRecord>, Error> {
    let f = Function::parse(expr)?;

    let (mut a, mut b) = (a, b);
    let mut xr = a;
    let mut rel_err = INITIAL_REL_ERR;
    let mut iteration = 0;
    let mut rows = Vec::new();

    while stop.should_continue(rel_err, iteration) {
        let f_a = f.eval(a);
        let f_b = f.eval(b);
        if f_a - f_b == 0.0 {
            return Ok(Run::Degenerate {
                rows,
                reason: Reason::FlatBracket,
            });
        }

        let xr_old = xr;
        xr = b - f_b * (a - b) / (f_a - f_b);
        let f_xr = f.eval(xr);
        rel_err = relative_error(xr, xr_old, iteration);

        rows.push(BracketRecord {
            iteration,
            a,
            xr,
            b,
            f_xr,
            rel_err,
        });

        iteration += 1;
        if stop.ceiling_reached(iteration) {
            break;
        }

        // ties (f(a) * f(xr) == 0) land in the replace-a branch
        if f_a * f_xr < 0.0 {
            b = xr;
        } else {
            a = xr;
        }
    }

    Ok(Run::Complete(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn converges_to_sqrt_two() {
        let run = false_position("x^2 - 2", 0.0, 2.0, StopCond::tolerance(1e-6)).unwrap();
        assert!(!run.is_degenerate());

        let last = *run.rows().last().unwrap();
        assert!(last.rel_err <= 1e-6);
        assert_float_absolute_eq!(last.xr, 2.0_f64.sqrt(), 1e-7);
    }

    #[test]
    fn flat_function_degenerates_immediately() {
        let run = false_position("0x + 1", -1.0, 1.0, StopCond::tolerance(1e-6)).unwrap();
        assert_eq!(run.reason(), Some(Reason::FlatBracket));
        assert!(run.rows().is_empty());
    }

    #[test]
    fn exact_iteration_count() {
        let run = false_position("x^3 - 2x - 5", 2.0, 3.0, StopCond::iterations(6)).unwrap();
        let rows = run.rows();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].rel_err, 100.0);
    }
}
