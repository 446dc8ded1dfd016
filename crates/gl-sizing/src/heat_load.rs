//! Simplified room heat-load estimate used to suggest a space-heater demand.

use gl_catalog::ClimateZone;
use gl_core::numeric::non_negative_or_zero;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Indoor comfort temperature [°C].
pub const INDOOR_DESIGN_C: f64 = 20.0;
/// Outdoor winter design temperature [°C].
pub const OUTDOOR_DESIGN_C: f64 = -4.0;
/// Loads are rounded up to a multiple of this [kcal/h].
pub const ROUNDING_STEP_KCAL_H: f64 = 50.0;

/// Interior room dimensions [m].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub length_m: f64,
    pub width_m: f64,
    pub height_m: f64,
}

impl RoomDimensions {
    pub fn new(length_m: f64, width_m: f64, height_m: f64) -> Self {
        Self {
            length_m,
            width_m,
            height_m,
        }
    }

    /// Room volume [m³]; unusable dimensions count as 0.
    pub fn volume_m3(&self) -> f64 {
        [
            ("length", self.length_m),
            ("width", self.width_m),
            ("height", self.height_m),
        ]
        .into_iter()
        .map(|(what, v)| {
            let (value, clamped) = non_negative_or_zero(v);
            if clamped {
                warn!(dimension = what, value = v, "room dimension clamped to 0");
            }
            value
        })
        .product()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatLoad {
    pub zone_id: String,
    pub volume_m3: f64,
    pub k_coefficient: f64,
    pub delta_t_c: f64,
    /// Required heat [kcal/h], rounded up to the next multiple of 50.
    pub load_kcal_h: f64,
}

/// `Q = K · V · ΔT` for the room in the given climate zone.
pub fn estimate_heat_load(room: RoomDimensions, zone: &ClimateZone) -> HeatLoad {
    let delta_t_c = INDOOR_DESIGN_C - OUTDOOR_DESIGN_C;
    let volume_m3 = room.volume_m3();
    let raw = zone.k_coefficient * volume_m3 * delta_t_c;
    let load_kcal_h = if raw.is_finite() && raw > 0.0 {
        (raw / ROUNDING_STEP_KCAL_H).ceil() * ROUNDING_STEP_KCAL_H
    } else {
        0.0
    };

    HeatLoad {
        zone_id: zone.id.clone(),
        volume_m3,
        k_coefficient: zone.k_coefficient,
        delta_t_c,
        load_kcal_h,
    }
}
