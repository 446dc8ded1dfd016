//! Heat-load estimates for space-heater demand suggestions.

use gl_catalog::Catalog;
use gl_sizing::{HeatLoad, RoomDimensions, estimate_heat_load};
use tracing::info;

use crate::error::AppResult;

/// Estimate the heat load of a room in the named climate zone.
pub fn heat_load(room: RoomDimensions, zone_id: &str, catalog: &Catalog) -> AppResult<HeatLoad> {
    let zone = catalog.climate_zone(zone_id)?;
    let load = estimate_heat_load(room, zone);
    info!(
        zone = %zone.id,
        volume_m3 = load.volume_m3,
        load_kcal_h = load.load_kcal_h,
        "heat load estimated"
    );
    Ok(load)
}
