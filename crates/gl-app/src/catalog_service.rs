//! Catalog loading and introspection.

use std::path::Path;

use gl_catalog::{Catalog, reference_catalog};
use serde::Serialize;
use tracing::info;

use crate::error::{AppError, AppResult};

/// Load the catalog from `path`, or fall back to the built-in reference catalog.
pub fn load_catalog(path: Option<&Path>) -> AppResult<Catalog> {
    match path {
        Some(path) => {
            let catalog = gl_project::load_catalog(path).map_err(|source| {
                AppError::CatalogFileLoad {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            info!(path = %path.display(), "catalog loaded");
            Ok(catalog)
        }
        None => Ok(reference_catalog()),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FuelSummary {
    pub id: String,
    pub label: String,
    pub calorific_value_kcal_m3: f64,
    pub supply_pressure_mbar: f64,
    /// Whether a capacity table exists for this fuel at its supply pressure.
    pub has_capacity_table: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipeSystemSummary {
    pub id: String,
    pub label: String,
    /// Nominal diameters [mm], ascending.
    pub diameters_mm: Vec<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplianceSummary {
    pub id: String,
    pub label: String,
    pub default_demand_kcal_h: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClimateZoneSummary {
    pub id: String,
    pub label: String,
    pub k_coefficient: f64,
}

/// Everything a frontend lists from a catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub fuels: Vec<FuelSummary>,
    pub pipe_systems: Vec<PipeSystemSummary>,
    pub appliances: Vec<ApplianceSummary>,
    pub climate_zones: Vec<ClimateZoneSummary>,
}

pub fn summarize_catalog(catalog: &Catalog) -> CatalogSummary {
    let fuels = catalog
        .fuels
        .iter()
        .map(|f| FuelSummary {
            id: f.id.clone(),
            label: f.label.clone(),
            calorific_value_kcal_m3: f.calorific_value_kcal_m3,
            supply_pressure_mbar: f.supply_pressure_mbar,
            has_capacity_table: catalog
                .capacity_table(&f.id, f.supply_pressure_mbar)
                .is_ok(),
        })
        .collect();

    let pipe_systems = catalog
        .pipe_systems
        .iter()
        .map(|p| {
            let mut diameters_mm: Vec<u32> = p.diameters.iter().map(|d| d.dn_mm).collect();
            diameters_mm.sort_unstable();
            PipeSystemSummary {
                id: p.id.clone(),
                label: p.label.clone(),
                diameters_mm,
            }
        })
        .collect();

    let appliances = catalog
        .appliances
        .iter()
        .map(|a| ApplianceSummary {
            id: a.id.clone(),
            label: a.label.clone(),
            default_demand_kcal_h: a.default_demand_kcal_h,
        })
        .collect();

    let climate_zones = catalog
        .climate_zones
        .iter()
        .map(|z| ClimateZoneSummary {
            id: z.id.clone(),
            label: z.label.clone(),
            k_coefficient: z.k_coefficient,
        })
        .collect();

    CatalogSummary {
        fuels,
        pipe_systems,
        appliances,
        climate_zones,
    }
}
