//! User-authored outlets.

use gl_catalog::FittingCounts;
use serde::{Deserialize, Serialize};

/// The appliance connected at an outlet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceRef {
    /// Catalog id, kept for display; sizing never looks it up.
    pub catalog_id: String,
    /// Actual thermal demand [kcal/h], possibly overriding the catalog default.
    pub demand_kcal_h: f64,
}

/// A point in the chain where an appliance connects to the gas line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outlet {
    pub id: String,
    pub location: String,
    /// Length of the run from the previous outlet (or the meter) [m].
    pub distance_m: f64,
    pub appliance: ApplianceRef,
    /// Fittings on the run feeding this outlet.
    #[serde(default)]
    pub fittings: FittingCounts,
}

impl Outlet {
    pub fn new(
        id: impl Into<String>,
        location: impl Into<String>,
        distance_m: f64,
        catalog_id: impl Into<String>,
        demand_kcal_h: f64,
    ) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            distance_m,
            appliance: ApplianceRef {
                catalog_id: catalog_id.into(),
                demand_kcal_h,
            },
            fittings: FittingCounts::default(),
        }
    }

    pub fn with_fittings(mut self, fittings: FittingCounts) -> Self {
        self.fittings = fittings;
        self
    }
}
