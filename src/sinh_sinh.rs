//! Sinh-sinh quadrature for the whole real line.
//!
//! Substitutes `x = sinh(2 sinh t)`, pushing the nodes toward `±∞`
//! double-exponentially fast so that any integrable integrand is exhausted
//! after a handful of node pairs per level.

use crate::error::IntegrateResult;
use crate::integrate::{QuadOptions, QuadResult, validate_options};

/// Sinh-sinh quadrature over `(-∞, +∞)`.
///
/// # Errors
///
/// Returns an error if `options.rtol` is not positive and finite.
///
/// # Example
///
/// ```
/// use dequad::{sinh_sinh, QuadOptions};
///
/// // ∫_{-∞}^{∞} e^(-x²) dx = √π
/// let exact = std::f64::consts::PI.sqrt();
/// let result = sinh_sinh(|x| (-x * x).exp(), &QuadOptions::default()).unwrap();
/// assert!((result.integral - exact).abs() < 1e-8);
/// assert!(result.converged);
/// ```
pub fn sinh_sinh<F>(f: F, options: &QuadOptions) -> IntegrateResult<QuadResult>
where
    F: Fn(f64) -> f64,
{
    validate_options(options)?;
    Ok(sinh_sinh_core(&f, options))
}

/// Level-refinement loop over the whole line.
///
/// Node pair at `±t`: abscissae `±sinh(2 sinh t)` with the shared even
/// weight `2 cosh(t)·cosh(2 sinh t)`.
pub(crate) fn sinh_sinh_core<F>(f: &F, options: &QuadOptions) -> QuadResult
where
    F: Fn(f64) -> f64,
{
    let eps = options.rtol;
    let tol = 10.0 * eps;

    let mut neval = 0usize;
    let y = f(0.0);
    neval += 1;
    // node at t = 0: x = 0, weight 2
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
            let g = 2.0 * t.sinh();
            let x = g.sinh();
            let w = 2.0 * t.cosh() * g.cosh();
            if !x.is_finite() || !w.is_finite() {
                break;
            }

            let mut q = 0.0_f64;
            let y = f(x);
            neval += 1;
            let term = w * y;
            if term.is_finite() {
                q += term;
            }
            let y = f(-x);
            neval += 1;
            let term = w * y;
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_gaussian() {
        // ∫_{-∞}^{∞} e^(-x²) dx = √π
        let result = sinh_sinh(|x| (-x * x).exp(), &QuadOptions::default()).unwrap();
        assert!(
            (result.integral - PI.sqrt()).abs() < 1e-8,
            "integral = {}, expected {}",
            result.integral,
            PI.sqrt()
        );
        assert!(result.converged);
    }

    #[test]
    fn test_lorentzian() {
        // ∫_{-∞}^{∞} (1 + x²)^(-1) dx = π
        let result = sinh_sinh(|x| 1.0 / (1.0 + x * x), &QuadOptions::default()).unwrap();
        assert!(
            (result.integral - PI).abs() < 1e-8,
            "integral = {}, expected π",
            result.integral
        );
        assert!(result.converged);
    }

    #[test]
    fn test_odd_integrand_cancels() {
        // ∫_{-∞}^{∞} x·e^(-x²) dx = 0 by symmetry
        let result = sinh_sinh(|x| x * (-x * x).exp(), &QuadOptions::default()).unwrap();
        assert!(result.integral.abs() < 1e-12);
    }

    #[test]
    fn test_sech() {
        // ∫_{-∞}^{∞} sech(x) dx = π
        let result = sinh_sinh(|x| 1.0 / x.cosh(), &QuadOptions::default()).unwrap();
        assert!(
            (result.integral - PI).abs() < 1e-8,
            "integral = {}, expected π",
            result.integral
        );
    }
}
