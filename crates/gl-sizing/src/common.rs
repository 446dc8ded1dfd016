//! Common utilities for sizing calculations.

use crate::error::SizingResult;
use gl_core::numeric::ensure_finite;

/// Ensure a value is finite, returning SizingError if not.
pub fn check_finite(value: f64, what: &'static str) -> SizingResult<()> {
    ensure_finite(value, what)?;
    Ok(())
}

/// Required flow over available capacity.
///
/// Only a segment with no flow at all is idle; any demand against zero
/// capacity is infinitely over-utilized.
pub fn utilization(flow_m3_h: f64, capacity_m3_h: f64) -> f64 {
    if flow_m3_h <= 0.0 {
        0.0
    } else if capacity_m3_h <= 0.0 {
        f64::INFINITY
    } else {
        flow_m3_h / capacity_m3_h
    }
}
