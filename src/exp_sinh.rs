//! Exp-sinh quadrature for semi-infinite intervals.
//!
//! Substitutes `x = a + exp(2 sinh t)` over `t ∈ (-∞, ∞)`, mapping `[a, +∞)`
//! to the real line with double-exponential node clustering toward the finite
//! endpoint.

use crate::error::{IntegrateError, IntegrateResult};
use crate::integrate::{QuadOptions, QuadResult, validate_options};

/// Exp-sinh quadrature over `[a, +∞)`.
///
/// The integrand must decay fast enough for the integral to exist; slow
/// convergence is reported through the `converged` flag rather than an
/// error. For `(-∞, b]` use [`integrate()`](crate::integrate()), which
/// applies the mirrored transform.
///
/// # Errors
///
/// Returns an error if `a` is non-finite or `options.rtol` is not positive
/// and finite.
///
/// # Example
///
/// ```
/// use dequad::{exp_sinh, QuadOptions};
///
/// // ∫₀^∞ e^(-x) dx = 1
/// let result = exp_sinh(|x| (-x).exp(), 0.0, &QuadOptions::default()).unwrap();
/// assert!((result.integral - 1.0).abs() < 1e-8);
/// assert!(result.converged);
/// ```
pub fn exp_sinh<F>(f: F, a: f64, options: &QuadOptions) -> IntegrateResult<QuadResult>
where
    F: Fn(f64) -> f64,
{
    validate_options(options)?;

    if !a.is_finite() {
        return Err(IntegrateError::InvalidInterval {
            a,
            b: f64::INFINITY,
            context: "exp_sinh",
        });
    }

    Ok(exp_sinh_core(&f, a, 1.0, options))
}

/// Level-refinement loop for `[origin, +∞)` when `dir = 1.0`, or the
/// mirrored `(-∞, origin]` when `dir = -1.0`.
///
/// Node pair at `±t`: abscissae `origin + dir·exp(±2 sinh t)` with weights
/// `2 cosh(t)·exp(±2 sinh t)`. The `+t` node walks toward infinity and the
/// `-t` node toward the finite endpoint; both weights decay
/// double-exponentially against any integrable integrand.
pub(crate) fn exp_sinh_core<F>(f: &F, origin: f64, dir: f64, options: &QuadOptions) -> QuadResult
where
    F: Fn(f64) -> f64,
{
    let eps = options.rtol;
    let tol = 10.0 * eps;

    let mut neval = 0usize;
    let y = f(origin + dir);
    neval += 1;
    // node at t = 0: x = origin ± 1, weight 2
    let mut s = if y.is_finite() { 2.0 * y } else { 0.0 };

    let mut h = 2.0_f64;
    let mut k = 0usize;
    let mut v: f64;

    loop {
        h *= 0.5;
        let mut p = 0.0_f64;
        let mut j = 1.0_f64;
        let stride = if k == 0 { 1.0 } else { 2.0 };
        loop {
            let t = j * h;
            let ch = t.cosh();
            let ex = (2.0 * t.sinh()).exp();
            if !ex.is_finite() {
                // transform overflow; anything this far out contributes
                // nothing representable
                break;
            }

            let mut q = 0.0_f64;
            let xp = origin + dir * ex;
            if xp.is_finite() {
                let y = f(xp);
                neval += 1;
                let term = 2.0 * ch * ex * y;
                if term.is_finite() {
                    q += term;
                }
            }
            let xm = origin + dir / ex;
            let y = f(xm);
            neval += 1;
            let term = 2.0 * ch / ex * y;
            if term.is_finite() {
                q += term;
            }

            p += q;
            j += stride;
            if !(q.abs() > eps * p.abs()) {
                break;
            }
        }

        v = s - p;
        s += p;
        k += 1;
        if !(v.abs() > tol * s.abs()) || k > options.max_levels {
            break;
        }
    }

    QuadResult {
        integral: s * h,
        error: v.abs() / (s.abs() + eps),
        neval,
        converged: !(v.abs() > tol * s.abs()),
    }
}
