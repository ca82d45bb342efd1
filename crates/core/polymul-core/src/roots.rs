//! Complex roots of unity.
//!
//! The n-th roots of unity are the `n` points `exp(i·2πk/n)` on the unit
//! circle. They are the evaluation points of the complex FFT that the
//! multiplication notes build towards.

use crate::error::{PolymulError, PolymulResult};
use num_complex::Complex64;
use std::f64::consts::PI;
use tracing::debug;

fn check_order(n: usize) -> PolymulResult<()> {
    if n == 0 {
        return Err(PolymulError::invalid_argument(
            "order of a root of unity must be at least 1",
        ));
    }
    Ok(())
}

#[inline]
fn angle(k: usize, n: usize) -> f64 {
    2.0 * PI * k as f64 / n as f64
}

/// Compute all `n` complex n-th roots of unity.
///
/// Element `k` is `exp(i·2πk/n) = (cos(2πk/n), sin(2πk/n))`, ordered by
/// increasing `k`. Each call returns a freshly allocated vector.
///
/// # Errors
///
/// Returns [`PolymulError::InvalidArgument`] when `n == 0`.
///
/// # Example
///
/// ```
/// use polymul_core::roots::roots_of_unity;
///
/// let roots = roots_of_unity(4).unwrap();
/// assert_eq!(roots.len(), 4);
/// assert!((roots[1].im - 1.0).abs() < 1e-12);
/// ```
pub fn roots_of_unity(n: usize) -> PolymulResult<Vec<Complex64>> {
    check_order(n)?;
    debug!(n, "computing roots of unity");

    Ok((0..n)
        .map(|k| Complex64::from_polar(1.0, angle(k, n)))
        .collect())
}

/// Compute the single root `exp(i·2πk/n)`. `k` is reduced modulo `n`.
///
/// # Errors
///
/// Returns [`PolymulError::InvalidArgument`] when `n == 0`.
pub fn root_of_unity(k: usize, n: usize) -> PolymulResult<Complex64> {
    check_order(n)?;
    Ok(Complex64::from_polar(1.0, angle(k % n, n)))
}

/// The principal n-th root of unity, `exp(i·2π/n)`.
///
/// # Errors
///
/// Returns [`PolymulError::InvalidArgument`] when `n == 0`.
pub fn principal_root(n: usize) -> PolymulResult<Complex64> {
    root_of_unity(1, n)
}
