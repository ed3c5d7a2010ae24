//! Tanh-sinh quadrature for finite intervals.
//!
//! Substitutes `x = c + d·tanh(sinh t)` so that the transformed integrand
//! decays double-exponentially as `|t| → ∞`. A fixed-step sum over `t` then
//! converges at a near-geometric rate while contributions near integrable
//! endpoint singularities are damped automatically.

use crate::error::{IntegrateError, IntegrateResult};
use crate::integrate::{QuadOptions, QuadResult, validate_options};

/// Tanh-sinh quadrature over a finite interval.
///
/// Handles integrable endpoint singularities (e.g. `x^(-1/2)` at 0) without
/// any special casing. Reversed bounds negate the result; `a == b` yields
/// the zero result.
///
/// # Errors
///
/// Returns an error if a bound is non-finite or `options.rtol` is not
/// positive and finite. For infinite bounds use [`integrate()`],
/// [`exp_sinh()`] or [`sinh_sinh()`].
///
/// [`integrate()`]: crate::integrate()
/// [`exp_sinh()`]: crate::exp_sinh()
/// [`sinh_sinh()`]: crate::sinh_sinh()
///
/// # Example
///
/// ```
/// use dequad::{tanh_sinh, QuadOptions};
///
/// // ∫₀^π sin(x) dx = 2
/// let result = tanh_sinh(|x| x.sin(), 0.0, std::f64::consts::PI, &QuadOptions::default()).unwrap();
/// assert!((result.integral - 2.0).abs() < 1e-9);
/// assert!(result.converged);
/// ```
pub fn tanh_sinh<F>(f: F, a: f64, b: f64, options: &QuadOptions) -> IntegrateResult<QuadResult>
where
    F: Fn(f64) -> f64,
{
    validate_options(options)?;

    if !a.is_finite() || !b.is_finite() {
        return Err(IntegrateError::InvalidInterval {
            a,
            b,
            context: "tanh_sinh",
        });
    }

    if a == b {
        return Ok(QuadResult::zero_width());
    }

    let (lo, hi, sign) = if b < a { (b, a, -1.0) } else { (a, b, 1.0) };
    let mut result = tanh_sinh_core(&f, lo, hi, options);
    result.integral *= sign;
    Ok(result)
}

/// Level-refinement loop for `a < b`, both finite.
///
/// Per node the loop tracks `t = exp(j·h)` incrementally, giving
/// `u = exp(1/t - t) = exp(-2 sinh(j·h))`, the endpoint distance
/// `r = 2u/(1+u) = 1 - tanh(sinh(j·h))` and the transform weight
/// `w = (t + 1/t)·r/(1+u) = cosh(j·h)/cosh²(sinh(j·h))`. Each level halves
/// `h` and visits only the odd multiples of the new step, so previously
/// evaluated nodes are never recomputed.
pub(crate) fn tanh_sinh_core<F>(f: &F, a: f64, b: f64, options: &QuadOptions) -> QuadResult
where
    F: Fn(f64) -> f64,
{
    let eps = options.rtol;
    let tol = 10.0 * eps;
    let c = 0.5 * (a + b);
    let d = 0.5 * (b - a);

    let mut neval = 0usize;
    let y = f(c);
    neval += 1;
    // center node t = 0, weight 1
    let mut s = if y.is_finite() { y } else { 0.0 };

    let mut h = 2.0_f64;
    let mut k = 0usize;
    let mut v: f64;

    loop {
        h *= 0.5;
        let mut eh = h.exp();
        let mut t = eh;
        if k > 0 {
            // stride two steps: only the interleaved nodes are new
            eh *= eh;
        }

        let mut p = 0.0_f64;
        let mut fp = 0.0_f64;
        let mut fm = 0.0_f64;
        loop {
            let u = (1.0 / t - t).exp();
            let r = 2.0 * u / (1.0 + u);
            let w = (t + 1.0 / t) * r / (1.0 + u);
            let x = d * r;
            // Nodes that round into an endpoint keep the previous value, so
            // a singular endpoint is never evaluated exactly.
            if a + x > a {
                let y = f(a + x);
                neval += 1;
                if y.is_finite() {
                    fp = y;
                }
            }
            if b - x < b {
                let y = f(b - x);
                neval += 1;
                if y.is_finite() {
                    fm = y;
                }
            }
            let q = w * (fp + fm);
            p += q;
            t *= eh;
            // Double-exponential decay: far nodes stop contributing, which
            // bounds per-level work without a fixed node cap.
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
        integral: d * s * h,
        error: v.abs() / (s.abs() + eps),
        neval,
        converged: !(v.abs() > tol * s.abs()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_polynomial() {
        // ∫₀¹ x⁴ dx = 0.2
        let result = tanh_sinh(|x| x.powi(4), 0.0, 1.0, &QuadOptions::default()).unwrap();
        assert!(
            (result.integral - 0.2).abs() < 1e-9,
            "integral = {}, expected 0.2",
            result.integral
        );
        assert!(result.converged);
    }

    #[test]
    fn test_trig() {
        // ∫₀^π sin(x) dx = 2
        let result = tanh_sinh(|x| x.sin(), 0.0, PI, &QuadOptions::default()).unwrap();
        assert!(
            (result.integral - 2.0).abs() < 1e-9,
            "integral = {}, expected 2.0",
            result.integral
        );
        assert!(result.converged);
    }

    #[test]
    fn test_sqrt_singularity_at_zero() {
        // ∫₀¹ x^(-1/2) dx = 2, singular at x = 0
        let result = tanh_sinh(|x| 1.0 / x.sqrt(), 0.0, 1.0, &QuadOptions::default()).unwrap();
        assert!(
            (result.integral - 2.0).abs() < 1e-6,
            "integral = {}, expected 2.0",
            result.integral
        );
        assert!(result.error < 1e-6);
    }

    #[test]
    fn test_strong_singularity_truncation_plateau() {
        // ∫₀¹ (1-x)^(-0.8) dx = 5 exactly, but nodes closer to 1 than one
        // ulp are unrepresentable, which truncates ~3e-3 of the mass near
        // the singular endpoint.
        let result =
            tanh_sinh(|x| (1.0 - x).powf(-0.8), 0.0, 1.0, &QuadOptions::default()).unwrap();
        assert!(
            (result.integral - 4.997295850834395).abs() < 1e-4,
            "integral = {}",
            result.integral
        );
        assert!((result.integral - 5.0).abs() < 5e-3);
    }

    #[test]
    fn test_narrow_resonance() {
        // ∫₀¹ ((x - 1/2)² + 1e-3)^(-1) dx ≈ 95.35120322775237
        let result = tanh_sinh(
            |x| 1.0 / ((x - 0.5) * (x - 0.5) + 1e-3),
            0.0,
            1.0,
            &QuadOptions::default(),
        )
        .unwrap();
        assert!(
            (result.integral - 95.35120322775237).abs() < 1e-5,
            "integral = {}",
            result.integral
        );
    }

    #[test]
    fn test_reversed_bounds() {
        let options = QuadOptions::default();
        let forward = tanh_sinh(|x| x * x * x, -1.0, 2.0, &options).unwrap();
        let reversed = tanh_sinh(|x| x * x * x, 2.0, -1.0, &options).unwrap();
        assert!((forward.integral + reversed.integral).abs() < 1e-15);
        // ∫_{-1}^{2} x³ dx = 15/4
        assert!((forward.integral - 3.75).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_infinite_bounds() {
        let result = tanh_sinh(|x| x, 0.0, f64::INFINITY, &QuadOptions::default());
        assert!(matches!(
            result,
            Err(IntegrateError::InvalidInterval { .. })
        ));
    }
}
