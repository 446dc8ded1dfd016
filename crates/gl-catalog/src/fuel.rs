//! Fuel records.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// A distributed fuel gas and the supply conditions its capacity tables assume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fuel {
    /// Stable identifier, e.g. `"natural"` or `"lpg"`.
    pub id: String,
    pub label: String,
    /// Energy per unit volume [kcal/m³].
    pub calorific_value_kcal_m3: f64,
    /// Nominal supply pressure [mbar]; selects the capacity table.
    pub supply_pressure_mbar: f64,
    /// Maximum allowed pressure drop [mbar] the capacity tables were built for.
    pub max_pressure_drop_mbar: f64,
}

impl Fuel {
    pub(crate) fn validate(&self) -> CatalogResult<()> {
        let cv = self.calorific_value_kcal_m3;
        if !cv.is_finite() || cv <= 0.0 {
            return Err(CatalogError::InvalidValue {
                what: format!("fuel '{}' calorific value", self.id),
                value: cv,
                reason: "must be positive",
            });
        }
        let p = self.supply_pressure_mbar;
        if !p.is_finite() || p <= 0.0 {
            return Err(CatalogError::InvalidValue {
                what: format!("fuel '{}' supply pressure", self.id),
                value: p,
                reason: "must be positive",
            });
        }
        Ok(())
    }
}
