//! Error types for the quadrature routines.

use thiserror::Error;

/// Result type for quadrature operations.
pub type IntegrateResult<T> = Result<T, IntegrateError>;

/// Contract violations surfaced by the quadrature routines.
///
/// Numerical difficulty (slow or non-convergence within the level budget) is
/// never an error: it is reported through the `converged` flag and the
/// `error` field of the normal return value. Non-finite integrand values are
/// recovered locally by dropping the offending node's contribution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrateError {
    /// Bounds outside the rule's domain (NaN, or infinite where a finite
    /// bound is required).
    #[error("invalid interval [{a}, {b}] in {context}")]
    InvalidInterval {
        a: f64,
        b: f64,
        context: &'static str,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{parameter}': {message}")]
    InvalidParameter {
        parameter: &'static str,
        message: String,
    },
}
