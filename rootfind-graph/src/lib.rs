//! Curve sampling for plotting root-finding runs.
//!
//! Each sampler parses the expression, chooses a plot window from the method's inputs, and
//! evaluates the function over [`RESOLUTION`] evenly spaced points, in parallel. Points where
//! the function is undefined come back as NaN and are passed through untouched; the plotting
//! layer decides how to render the gaps.

use rayon::prelude::*;
use rootfind_compute::{
    function::Function,
    methods::default_g,
};
use rootfind_error::Error;

/// The number of points sampled across a plot window.
pub const RESOLUTION: usize = 300;

/// The horizontal margin added on each side of the seeds when a method has no natural window.
const OPEN_MARGIN: f64 = 5.0;

/// A single sampled point, `(x, f(x))`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint(pub f64, pub f64);

/// A sampled curve together with the marker to draw at the method's final estimate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveSample {
    /// The sampled points, in increasing x order.
    pub points: Vec<CurvePoint>,

    /// The method's final estimate and the function value there.
    pub marker: CurvePoint,
}

/// The two curves drawn for a fixed point run: the target function and the iteration function.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedPointCurves {
    /// The target function `f`, whose roots are being sought.
    pub f_curve: Vec<CurvePoint>,

    /// The iteration function `g`, whose intersection with `y = x` is the fixed point.
    pub g_curve: Vec<CurvePoint>,

    /// The final estimate and the target function's value there.
    pub marker: CurvePoint,
}

/// `RESOLUTION` evenly spaced points covering `[lo, hi]` inclusive.
fn linspace(lo: f64, hi: f64) -> Vec<f64> {
    let step = (hi - lo) / (RESOLUTION - 1) as f64;
    (0..RESOLUTION).map(|i| lo + step * i as f64).collect()
}

/// Samples the function over the given points, in parallel.
fn sample(f: &Function, xs: &[f64]) -> Vec<CurvePoint> {
    xs.par_iter().map(|&x| CurvePoint(x, f.eval(x))).collect()
}

/// The plot window for an open method: the smallest interval containing every seed and the final
/// estimate, widened by [`OPEN_MARGIN`] on each side.
fn open_window(seeds: &[f64], x_final: f64) -> (f64, f64) {
    let mut lo = x_final;
    let mut hi = x_final;
    for &seed in seeds {
        lo = lo.min(seed);
        hi = hi.max(seed);
    }
    (lo - OPEN_MARGIN, hi + OPEN_MARGIN)
}

/// Samples a curve for a bracketing method, using the initial bracket `[a, b]` as the plot
/// window and marking the final estimate `xr`.
pub fn sample_bracket(expr: &str, a: f64, b: f64, xr: f64) -> Result<CurveSample, Error> {
    let f = Function::parse(expr)?;
    Ok(CurveSample {
        points: sample(&f, &linspace(a, b)),
        marker: CurvePoint(xr, f.eval(xr)),
    })
}

/// Samples a curve for an open method. The window spans the seeds and the final estimate,
/// widened on each side so the surrounding shape of the function is visible.
pub fn sample_open(expr: &str, seeds: &[f64], x_final: f64) -> Result<CurveSample, Error> {
    let f = Function::parse(expr)?;
    let (lo, hi) = open_window(seeds, x_final);
    Ok(CurveSample {
        points: sample(&f, &linspace(lo, hi)),
        marker: CurvePoint(x_final, f.eval(x_final)),
    })
}

/// Samples both curves for a fixed point run over a shared window. When `g_expr` is `None` the
/// same default as [`fixed_point`](rootfind_compute::methods::fixed_point) is used,
/// `g(x) = x + f(x)`.
pub fn sample_fixed_point(
    expr: &str,
    g_expr: Option<&str>,
    x0: f64,
    x_final: f64,
) -> Result<FixedPointCurves, Error> {
    let f = Function::parse(expr)?;
    let g = match g_expr {
        Some(src) => Function::parse(src)?,
        None => default_g(&f),
    };

    let (lo, hi) = open_window(&[x0], x_final);
    let xs = linspace(lo, hi);
    Ok(FixedPointCurves {
        f_curve: sample(&f, &xs),
        g_curve: sample(&g, &xs),
        marker: CurvePoint(x_final, f.eval(x_final)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn bracket_window_spans_the_bracket() {
        let root = 2.0_f64.sqrt();
        let sample = sample_bracket("x^2 - 2", 0.0, 2.0, root).unwrap();
        assert_eq!(sample.points.len(), RESOLUTION);

        assert_eq!(sample.points[0].0, 0.0);
        assert_float_absolute_eq!(sample.points.last().unwrap().0, 2.0);
        for pair in sample.points.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }

        assert_eq!(sample.marker.0, root);
        assert_float_absolute_eq!(sample.marker.1, 0.0, 1e-12);
    }

    #[test]
    fn open_window_has_margins() {
        let sample = sample_open("cos(x) - x", &[0.0, 1.0], 0.739).unwrap();
        assert_float_absolute_eq!(sample.points[0].0, -5.0);
        assert_float_absolute_eq!(sample.points.last().unwrap().0, 6.0);
    }

    #[test]
    fn undefined_regions_sample_as_nan() {
        // sqrt is undefined left of the origin; those points pass through as NaN
        let sample = sample_open("sqrt(x)", &[1.0], 2.0).unwrap();
        assert!(sample.points.iter().any(|p| p.1.is_nan()));
        assert!(sample.points.iter().any(|p| p.1.is_finite()));
    }

    #[test]
    fn fixed_point_curves_share_the_window() {
        let curves = sample_fixed_point("cos(x) - x", Some("cos(x)"), 0.5, 0.739).unwrap();
        assert_eq!(curves.f_curve.len(), RESOLUTION);
        assert_eq!(curves.g_curve.len(), RESOLUTION);
        for (f_point, g_point) in curves.f_curve.iter().zip(&curves.g_curve) {
            assert_eq!(f_point.0, g_point.0);
        }
        assert_float_absolute_eq!(curves.marker.1, 0.0, 1e-3);
    }

    #[test]
    fn default_g_curve_matches_x_plus_f() {
        let curves = sample_fixed_point("x^2 - 2", None, 1.0, 1.414).unwrap();
        for (f_point, g_point) in curves.f_curve.iter().zip(&curves.g_curve) {
            assert_float_absolute_eq!(g_point.1, f_point.0 + f_point.1, 1e-12);
        }
    }
}
