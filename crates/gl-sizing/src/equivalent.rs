//! Equivalent-length model for fittings.

use gl_catalog::{FittingCounts, FittingEquivalenceFactors};
use gl_core::units::{Length, m};

/// Straight-pipe length standing in for the fittings on a run, at diameter `dn`.
///
/// Each fitting contributes `count × factor × dn`, so the same fittings weigh
/// more on a larger pipe. Kinds without a factor contribute nothing.
pub fn fittings_length(
    fittings: &FittingCounts,
    dn: Length,
    factors: &FittingEquivalenceFactors,
) -> Length {
    fittings
        .iter()
        .filter_map(|(kind, count)| factors.factor(kind).map(|f| dn * (count as f64 * f)))
        .fold(m(0.0), |acc, l| acc + l)
}

/// Real length plus the fittings' pseudo-length, for candidate diameter `dn`.
///
/// Must be re-evaluated for every candidate diameter.
pub fn equivalent_length(
    real_length: Length,
    fittings: &FittingCounts,
    dn: Length,
    factors: &FittingEquivalenceFactors,
) -> Length {
    if fittings.is_empty() {
        return real_length;
    }
    real_length + fittings_length(fittings, dn, factors)
}
