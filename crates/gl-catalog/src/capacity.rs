//! Tabulated pipe capacities and the ceiling-search lookup.

use std::collections::BTreeMap;

use gl_core::units::{Length, to_m};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// One `(equivalent length, maximum flow)` breakpoint.
///
/// Serialized as a `[length_m, flow_m3_h]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct CapacityPoint {
    pub length_m: f64,
    pub flow_m3_h: f64,
}

impl CapacityPoint {
    pub const fn new(length_m: f64, flow_m3_h: f64) -> Self {
        Self {
            length_m,
            flow_m3_h,
        }
    }
}

impl From<(f64, f64)> for CapacityPoint {
    fn from((length_m, flow_m3_h): (f64, f64)) -> Self {
        Self::new(length_m, flow_m3_h)
    }
}

impl From<CapacityPoint> for (f64, f64) {
    fn from(p: CapacityPoint) -> Self {
        (p.length_m, p.flow_m3_h)
    }
}

/// Maximum deliverable flow per diameter and equivalent length, for one fuel and supply pressure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityTable {
    pub fuel_id: String,
    pub pressure_mbar: f64,
    /// Breakpoints keyed by nominal diameter [mm], ascending by length.
    pub diameters_mm: BTreeMap<u32, Vec<CapacityPoint>>,
}

impl CapacityTable {
    /// Maximum flow [m³/h] that `dn_mm` delivers over `equivalent_length`.
    ///
    /// The breakpoints are a step function: the first breakpoint whose length is
    /// at least the requested length wins, and lengths beyond the table use the
    /// last (most conservative) breakpoint. No interpolation. A diameter missing
    /// from the table delivers nothing.
    pub fn capacity_at(&self, dn_mm: u32, equivalent_length: Length) -> f64 {
        let Some(points) = self.diameters_mm.get(&dn_mm) else {
            return 0.0;
        };
        let length_m = to_m(equivalent_length);
        points
            .iter()
            .find(|p| p.length_m >= length_m)
            .or_else(|| points.last())
            .map_or(0.0, |p| p.flow_m3_h)
    }

    pub fn has_diameter(&self, dn_mm: u32) -> bool {
        self.diameters_mm
            .get(&dn_mm)
            .is_some_and(|points| !points.is_empty())
    }

    /// Check that every breakpoint is finite and non-negative, lengths never
    /// decrease and flows never increase along a diameter's sequence.
    pub fn validate(&self) -> CatalogResult<()> {
        for (&dn_mm, points) in &self.diameters_mm {
            for (index, p) in points.iter().enumerate() {
                for (what, value) in [("length", p.length_m), ("flow", p.flow_m3_h)] {
                    if !value.is_finite() || value < 0.0 {
                        return Err(CatalogError::InvalidValue {
                            what: format!(
                                "capacity table '{}' DN {} breakpoint {} {}",
                                self.fuel_id, dn_mm, index, what
                            ),
                            value,
                            reason: "must be finite and non-negative",
                        });
                    }
                }
            }

            for (index, pair) in points.windows(2).enumerate() {
                let (prev, next) = (pair[0], pair[1]);
                if next.length_m < prev.length_m || next.flow_m3_h > prev.flow_m3_h {
                    return Err(CatalogError::NonMonotoneTable {
                        fuel_id: self.fuel_id.clone(),
                        dn_mm,
                        index: index + 1,
                    });
                }
            }
        }
        Ok(())
    }
}
