//! Rule selection and shared option/result types.

use crate::error::{IntegrateError, IntegrateResult};
use crate::exp_sinh::exp_sinh_core;
use crate::sinh_sinh::sinh_sinh_core;
use crate::tanh_sinh::tanh_sinh_core;

/// Options for double-exponential quadrature.
#[derive(Debug, Clone)]
pub struct QuadOptions {
    /// Target relative tolerance for the level-to-level stopping rule
    /// (default: 1e-9).
    pub rtol: f64,
    /// Maximum number of step halvings after the coarsest level
    /// (default: 6).
    pub max_levels: usize,
}

impl Default for QuadOptions {
    fn default() -> Self {
        Self {
            rtol: 1e-9,
            max_levels: 6,
        }
    }
}

/// Result of a quadrature call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadResult {
    /// Computed integral value (signed by the orientation of the bounds).
    pub integral: f64,
    /// Heuristic relative error, from the difference between the last two
    /// refinement levels. Not a rigorous bound.
    pub error: f64,
    /// Number of integrand evaluations.
    pub neval: usize,
    /// Whether the stopping rule fired within the level budget.
    pub converged: bool,
}

impl QuadResult {
    pub(crate) fn zero_width() -> Self {
        Self {
            integral: 0.0,
            error: 0.0,
            neval: 0,
            converged: true,
        }
    }
}

pub(crate) fn validate_options(options: &QuadOptions) -> IntegrateResult<()> {
    if !(options.rtol > 0.0 && options.rtol.is_finite()) {
        return Err(IntegrateError::InvalidParameter {
            parameter: "rtol",
            message: format!("must be positive and finite, got {}", options.rtol),
        });
    }
    Ok(())
}

/// Integrate `f` over `[a, b]` with automatic rule selection.
///
/// Bounds may be finite or infinite in any combination; the matching
/// double-exponential rule is chosen from their finiteness. Reversed bounds
/// (`a > b`) negate the result, and `a == b` yields the zero result without
/// evaluating `f`.
///
/// Non-convergence within `options.max_levels` is not an error: the returned
/// [`QuadResult`] carries `converged: false` and an elevated `error` field,
/// and the caller decides whether to retry with a larger budget or looser
/// tolerance.
///
/// # Errors
///
/// Returns an error if a bound is NaN or `options.rtol` is not positive and
/// finite.
///
/// # Example
///
/// ```
/// use dequad::{integrate, QuadOptions};
///
/// // ∫₀^∞ e^(-x) dx = 1
/// let result = integrate(|x| (-x).exp(), 0.0, f64::INFINITY, &QuadOptions::default()).unwrap();
/// assert!((result.integral - 1.0).abs() < 1e-8);
/// assert!(result.converged);
/// ```
pub fn integrate<F>(f: F, a: f64, b: f64, options: &QuadOptions) -> IntegrateResult<QuadResult>
where
    F: Fn(f64) -> f64,
{
    validate_options(options)?;

    if a.is_nan() || b.is_nan() {
        return Err(IntegrateError::InvalidInterval {
            a,
            b,
            context: "integrate",
        });
    }

    if a == b {
        return Ok(QuadResult::zero_width());
    }

    // Orientation is signed: normalize to lo < hi and negate on the way out.
    let (lo, hi, sign) = if b < a { (b, a, -1.0) } else { (a, b, 1.0) };

    let mut result = match (lo.is_finite(), hi.is_finite()) {
        (true, true) => tanh_sinh_core(&f, lo, hi, options),
        (true, false) => exp_sinh_core(&f, lo, 1.0, options),
        (false, true) => exp_sinh_core(&f, hi, -1.0, options),
        (false, false) => sinh_sinh_core(&f, options),
    };
    result.integral *= sign;
    Ok(result)
}
