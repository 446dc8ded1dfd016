//! Demand converter: thermal demand → volumetric flow.

use gl_catalog::Fuel;

/// Volumetric flow [m³/h] that delivers `demand_kcal_h` of the given fuel.
///
/// A missing or malformed demand (non-finite or ≤ 0) contributes no flow
/// instead of failing the whole calculation.
pub fn demand_to_flow(demand_kcal_h: f64, fuel: &Fuel) -> f64 {
    flow_for_calorific_value(demand_kcal_h, fuel.calorific_value_kcal_m3)
}

/// Same as [`demand_to_flow`] with the calorific value [kcal/m³] given directly.
pub fn flow_for_calorific_value(demand_kcal_h: f64, calorific_value_kcal_m3: f64) -> f64 {
    if !demand_kcal_h.is_finite() || demand_kcal_h <= 0.0 {
        return 0.0;
    }
    if !calorific_value_kcal_m3.is_finite() || calorific_value_kcal_m3 <= 0.0 {
        return 0.0;
    }
    demand_kcal_h / calorific_value_kcal_m3
}
