//! Seams between the selector and its data sources.

use gl_catalog::CapacityTable;
use gl_core::units::Length;

/// Source of maximum deliverable flow for a diameter over an equivalent length.
///
/// Implementations are pure lookups, so a selector can evaluate any number of
/// candidates against them.
pub trait CapacityModel: Send + Sync {
    /// Maximum flow [m³/h] for nominal diameter `dn_mm` over `equivalent_length`.
    fn capacity(&self, dn_mm: u32, equivalent_length: Length) -> f64;
}

impl CapacityModel for CapacityTable {
    fn capacity(&self, dn_mm: u32, equivalent_length: Length) -> f64 {
        self.capacity_at(dn_mm, equivalent_length)
    }
}
