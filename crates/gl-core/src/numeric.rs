use crate::GlError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, GlError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GlError::NonFinite { what, value: v })
    }
}

/// Clamp a user-entered quantity to `0.0` when it is negative or non-finite.
///
/// Returns the clamped value and whether clamping happened, so callers can log it.
pub fn non_negative_or_zero(v: Real) -> (Real, bool) {
    if v.is_finite() && v >= 0.0 {
        (v, false)
    } else {
        (0.0, true)
    }
}

/// Round to two decimals for presentation and material lists.
pub fn round2(v: Real) -> Real {
    (v * 100.0).round() / 100.0
}
