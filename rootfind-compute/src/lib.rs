//! Numerical root-finding for one-variable functions given as text.
//!
//! The pipeline: [`Function::parse`](function::Function::parse) turns an expression such as
//! `x^2 - 2` into an evaluable function (and keeps the symbolic tree around so Newton-Raphson can
//! differentiate it), and the [`methods`] module provides the five iterative solvers, each of
//! which returns one structured record per iteration.
//!
//! ```
//! use rootfind_compute::methods::{bisection, StopCond};
//!
//! let run = bisection("x^2 - 2", 0.0, 2.0, StopCond::tolerance(1e-6)).unwrap();
//! let last = run.rows().last().unwrap();
//! assert!((last.xr - 2.0_f64.sqrt()).abs() < 1e-7);
//! ```

pub mod error;
pub mod funcs;
pub mod function;
pub mod methods;
pub mod numerical;
pub mod symbolic;
