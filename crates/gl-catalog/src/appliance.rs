use serde::{Deserialize, Serialize};

/// Catalog appliance with the demand used to prefill a new outlet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceCatalogEntry {
    pub id: String,
    pub label: String,
    /// Typical thermal demand [kcal/h].
    pub default_demand_kcal_h: f64,
}
