use crate::function::Function;
use super::{relative_error, BracketRecord, Run, StopCond, INITIAL_REL_ERR};
use rootfind_error::Error;

/// Runs the bisection method on `[a, b]`.
///
/// Each iteration takes the midpoint of the bracket as the new estimate and keeps the half in
/// which the function changes sign. The bracket is not validated up front: a bracket that does
/// not straddle a sign change still runs, it just converges to an endpoint.
pub fn bisection(expr: &str, a: f64, b: f64, stop: StopCond) -> Result<Run<BracketRecord>, Error> {
    let f = Function::parse(expr)?;

    let (mut a, mut b) = (a, b);
    let mut xr = a;
    let mut rel_err = INITIAL_REL_ERR;
    let mut iteration = 0;
    let mut rows = Vec::new();

    while stop.should_continue(rel_err, iteration) {
        let xr_old = xr;
        xr = (a + b) / 2.0;
        let f_xr = f.eval(xr);
        let f_a = f.eval(a);
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
