use serde::{Deserialize, Serialize};

/// Bioclimatic zone used by the room heat-load estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateZone {
    pub id: String,
    pub label: String,
    /// Global heat-loss coefficient [kcal/(h·m³·°C)].
    pub k_coefficient: f64,
}
