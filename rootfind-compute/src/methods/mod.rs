//! The root-finding methods and their shared iteration bookkeeping.
//!
//! Each method parses its expression(s), runs its iteration loop, and produces a [`Run`]: the
//! table of per-iteration records, tagged with whether the loop ran to completion or stopped
//! early because the iterates degenerated (a flat bracket, a zero derivative). Degenerate
//! outcomes are data, not errors; only malformed input expressions fail a method outright.

mod bisection;
mod false_position;
mod fixed_point;
mod newton;
mod secant;

pub use bisection::bisection;
pub use false_position::false_position;
pub use fixed_point::{default_g, fixed_point, FixedPoint};
pub use newton::newton;
pub use secant::secant;

use std::fmt;

/// The default relative error threshold, in percent.
pub const DEFAULT_TOL: f64 = 1e-6;

/// The default iteration ceiling.
pub const DEFAULT_MAX_ITER: usize = 50;

/// The approximate relative error reported on the very first iteration, before two successive
/// estimates exist to compare.
pub const INITIAL_REL_ERR: f64 = 100.0;

/// How a method decides when to stop iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopMode {
    /// Run for an exact number of iterations.
    IterationCount,

    /// Run until the approximate relative error drops to the tolerance, subject to an iteration
    /// ceiling.
    ErrorThreshold,
}

/// The stopping condition shared by every method.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopCond {
    /// The stopping mode.
    pub mode: StopMode,

    /// The relative error threshold, in percent. Only consulted in
    /// [`StopMode::ErrorThreshold`].
    pub tol: f64,

    /// The iteration budget: the exact count in [`StopMode::IterationCount`], the ceiling in
    /// [`StopMode::ErrorThreshold`].
    pub max_iter: usize,
}

impl StopCond {
    /// Stop after exactly `count` iterations.
    pub fn iterations(count: usize) -> StopCond {
        StopCond {
            mode: StopMode::IterationCount,
            tol: DEFAULT_TOL,
            max_iter: count,
        }
    }

    /// Stop once the approximate relative error falls to `tol` percent, with the default
    /// iteration ceiling.
    pub fn tolerance(tol: f64) -> StopCond {
        StopCond {
            mode: StopMode::ErrorThreshold,
            tol,
            max_iter: DEFAULT_MAX_ITER,
        }
    }

    /// Stop once the approximate relative error falls to `tol` percent, giving up after
    /// `max_iter` iterations.
    pub fn tolerance_capped(tol: f64, max_iter: usize) -> StopCond {
        StopCond {
            mode: StopMode::ErrorThreshold,
            tol,
            max_iter,
        }
    }

    /// Whether the loop should run another iteration.
    pub(crate) fn should_continue(&self, rel_err: f64, iteration: usize) -> bool {
        match self.mode {
            StopMode::IterationCount => iteration < self.max_iter,
            StopMode::ErrorThreshold => rel_err > self.tol,
        }
    }

    /// Whether the iteration ceiling has been reached without converging. Only applies in
    /// [`StopMode::ErrorThreshold`]; an exact iteration count is not a ceiling.
    pub(crate) fn ceiling_reached(&self, iteration: usize) -> bool {
        self.mode == StopMode::ErrorThreshold && iteration >= self.max_iter
    }
}

/// The approximate relative error between two successive estimates, in percent.
///
/// The first iteration has no previous estimate, so it reports [`INITIAL_REL_ERR`]. When the new
/// estimate is exactly zero the division produces an IEEE infinity (or NaN when the difference is
/// also zero), which is carried through as-is.
pub(crate) fn relative_error(new: f64, old: f64, iteration: usize) -> f64 {
    if iteration == 0 {
        INITIAL_REL_ERR
    } else {
        ((new - old) / new).abs() * 100.0
    }
}

/// One iteration of a bracketing method (bisection, false position).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BracketRecord {
    /// The iteration number, starting at 0.
    pub iteration: usize,

    /// The lower end of the bracket used this iteration.
    pub a: f64,

    /// The estimate produced this iteration.
    pub xr: f64,

    /// The upper end of the bracket used this iteration.
    pub b: f64,

    /// The function value at the estimate.
    pub f_xr: f64,

    /// The approximate relative error against the previous estimate, in percent.
    pub rel_err: f64,
}

/// One iteration of an open method (fixed point, Newton-Raphson, secant).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenRecord {
    /// The iteration number, starting at 0.
    pub iteration: usize,

    /// The estimate produced this iteration.
    pub xi: f64,

    /// The function value at the estimate.
    pub f_xi: f64,

    /// The approximate relative error against the previous estimate, in percent.
    pub rel_err: f64,
}

/// Why a run stopped before its stopping condition was met.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reason {
    /// The derivative vanished at the current estimate, so the Newton step is undefined.
    ZeroDerivative {
        /// The estimate at which the derivative vanished.
        at: f64,
    },

    /// The function takes the same value at both ends of the bracket, so the false position
    /// secant line is horizontal.
    FlatBracket,

    /// The function takes the same value at both current estimates, so the secant line is
    /// horizontal.
    FlatSecant,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::ZeroDerivative { at } => write!(
                f,
                "the derivative vanished at x = {at}; the secant method may succeed where \
                 Newton-Raphson cannot"
            ),
            Reason::FlatBracket => write!(
                f,
                "the function takes the same value at both ends of the bracket"
            ),
            Reason::FlatSecant => write!(
                f,
                "the function takes the same value at both current estimates"
            ),
        }
    }
}

/// The outcome of running a method: the per-iteration records, tagged with whether the loop ran
/// to its stopping condition or degenerated first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Run<R> {
    /// The loop ran until its stopping condition was met.
    Complete(Vec<R>),

    /// The loop stopped early. The records produced before the degeneracy are kept.
    Degenerate {
        /// The records produced before the loop stopped.
        rows: Vec<R>,

        /// Why the loop stopped.
        reason: Reason,
    },
}

impl<R> Run<R> {
    /// The per-iteration records, regardless of outcome.
    pub fn rows(&self) -> &[R] {
        match self {
            Run::Complete(rows) | Run::Degenerate { rows, .. } => rows,
        }
    }

    /// Consumes the run, returning the per-iteration records.
    pub fn into_rows(self) -> Vec<R> {
        match self {
            Run::Complete(rows) | Run::Degenerate { rows, .. } => rows,
        }
    }

    /// Whether the run stopped before its stopping condition was met.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Run::Degenerate { .. })
    }

    /// Why the run stopped early, if it did.
    pub fn reason(&self) -> Option<Reason> {
        match self {
            Run::Complete(_) => None,
            Run::Degenerate { reason, .. } => Some(*reason),
        }
    }
}
