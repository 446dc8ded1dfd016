//! Job file schema definitions.

use gl_catalog::FittingCounts;
use serde::{Deserialize, Serialize};

/// One installation to size, as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobFile {
    pub version: u32,
    pub name: String,
    pub fuel_id: String,
    pub pipe_system_id: String,
    /// Outlets in order from the meter.
    #[serde(default)]
    pub outlets: Vec<OutletDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutletDef {
    pub id: String,
    #[serde(default)]
    pub location: String,
    /// Run length from the previous outlet, or from the meter for the first [m].
    pub distance_m: f64,
    pub appliance: ApplianceDef,
    #[serde(default)]
    pub fittings: FittingCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplianceDef {
    pub catalog_id: String,
    /// Thermal demand [kcal/h]; the catalog default is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demand_kcal_h: Option<f64>,
}

impl JobFile {
    pub fn new(
        name: impl Into<String>,
        fuel_id: impl Into<String>,
        pipe_system_id: impl Into<String>,
    ) -> Self {
        Self {
            version: crate::migrate::LATEST_VERSION,
            name: name.into(),
            fuel_id: fuel_id.into(),
            pipe_system_id: pipe_system_id.into(),
            outlets: Vec::new(),
            client: None,
            site_address: None,
        }
    }
}
