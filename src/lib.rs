//! Double-exponential (tanh-sinh family) quadrature.
//!
//! This crate computes definite integrals of scalar functions with the
//! double-exponential variable transformations. The transforms concentrate
//! sample density near the endpoints so that a fixed-step sum in the
//! transformed variable converges at a near-geometric rate, including for
//! integrands with integrable endpoint singularities such as `1/sqrt(x)`.
//!
//! # Available Rules
//!
//! | Rule | Domain | Transform |
//! |------|--------|-----------|
//! | [`tanh_sinh()`] | finite `[a, b]` | `x = c + d·tanh(sinh t)` |
//! | [`exp_sinh()`] | `[a, +∞)` | `x = a + exp(2 sinh t)` |
//! | [`sinh_sinh()`] | `(-∞, +∞)` | `x = sinh(2 sinh t)` |
//! | [`integrate()`] | any of the above | selected from the bounds |
//!
//! # Choosing a Rule
//!
//! - Use [`integrate()`] unless you have a reason not to: it inspects the
//!   bounds, handles reversed and zero-width intervals, and forwards to the
//!   matching kernel.
//! - The per-rule functions skip the dispatch and reject bounds outside
//!   their domain.
//!
//! # Example
//!
//! ```
//! use dequad::{integrate, QuadOptions};
//!
//! // Endpoint singularity: ∫₀¹ x^(-1/2) dx = 2
//! let result = integrate(|x| 1.0 / x.sqrt(), 0.0, 1.0, &QuadOptions::default()).unwrap();
//! assert!((result.integral - 2.0).abs() < 1e-6);
//! assert!(result.converged);
//! ```
//!
//! All routines are stateless and reentrant: an integrand may itself call
//! back into the crate (nested integration) and calls may run concurrently
//! from multiple threads.

mod error;
mod exp_sinh;
mod integrate;
mod sinh_sinh;
mod tanh_sinh;

pub use error::{IntegrateError, IntegrateResult};
pub use exp_sinh::exp_sinh;
pub use integrate::{QuadOptions, QuadResult, integrate};
pub use sinh_sinh::sinh_sinh;
pub use tanh_sinh::tanh_sinh;
