//! The catalog bundle and its validated lookups.

use gl_core::{Tolerances, nearly_equal};
use serde::{Deserialize, Serialize};

use crate::appliance::ApplianceCatalogEntry;
use crate::capacity::CapacityTable;
use crate::climate::ClimateZone;
use crate::error::{CatalogError, CatalogResult};
use crate::fitting::FittingEquivalenceFactors;
use crate::fuel::Fuel;
use crate::pipe::{PipeDiameter, PipeSystem};

/// Immutable reference data consumed by sizing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub fuels: Vec<Fuel>,
    #[serde(default)]
    pub pipe_systems: Vec<PipeSystem>,
    #[serde(default)]
    pub appliances: Vec<ApplianceCatalogEntry>,
    #[serde(default)]
    pub fittings: FittingEquivalenceFactors,
    #[serde(default)]
    pub capacity_tables: Vec<CapacityTable>,
    #[serde(default)]
    pub climate_zones: Vec<ClimateZone>,
}

/// Everything one sizing request needs, looked up and validated up front.
#[derive(Debug, Clone)]
pub struct ResolvedCatalog<'a> {
    pub fuel: &'a Fuel,
    pub pipe_system: &'a PipeSystem,
    /// The pipe system's diameters, ascending.
    pub diameters: Vec<PipeDiameter>,
    pub capacity: &'a CapacityTable,
    pub fittings: &'a FittingEquivalenceFactors,
}

impl Catalog {
    pub fn fuel(&self, id: &str) -> CatalogResult<&Fuel> {
        self.fuels
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| CatalogError::MissingFuel { id: id.to_string() })
    }

    pub fn pipe_system(&self, id: &str) -> CatalogResult<&PipeSystem> {
        self.pipe_systems
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| CatalogError::MissingPipeSystem { id: id.to_string() })
    }

    pub fn appliance(&self, id: &str) -> CatalogResult<&ApplianceCatalogEntry> {
        self.appliances
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| CatalogError::MissingAppliance { id: id.to_string() })
    }

    pub fn climate_zone(&self, id: &str) -> CatalogResult<&ClimateZone> {
        self.climate_zones
            .iter()
            .find(|z| z.id == id)
            .ok_or_else(|| CatalogError::MissingClimateZone { id: id.to_string() })
    }

    /// Capacity table built for `fuel_id` at `pressure_mbar`.
    pub fn capacity_table(&self, fuel_id: &str, pressure_mbar: f64) -> CatalogResult<&CapacityTable> {
        let tol = Tolerances {
            abs: 1e-6,
            rel: 1e-9,
        };
        self.capacity_tables
            .iter()
            .find(|t| t.fuel_id == fuel_id && nearly_equal(t.pressure_mbar, pressure_mbar, tol))
            .ok_or_else(|| CatalogError::MissingCapacityTable {
                fuel_id: fuel_id.to_string(),
                pressure_mbar,
            })
    }

    /// Look up and validate the fuel, pipe system and matching capacity table.
    ///
    /// Fails on the first missing key or unusable record.
    pub fn resolve(&self, fuel_id: &str, pipe_system_id: &str) -> CatalogResult<ResolvedCatalog<'_>> {
        let fuel = self.fuel(fuel_id)?;
        fuel.validate()?;

        let pipe_system = self.pipe_system(pipe_system_id)?;
        let diameters = pipe_system.sorted_diameters()?;

        let capacity = self.capacity_table(&fuel.id, fuel.supply_pressure_mbar)?;
        capacity.validate()?;

        self.fittings.validate()?;

        for d in &diameters {
            if !capacity.has_diameter(d.dn_mm) {
                tracing::warn!(
                    fuel = %fuel.id,
                    pipe_system = %pipe_system.id,
                    dn_mm = d.dn_mm,
                    "capacity table has no rows for this diameter; it will never be selected"
                );
            }
        }

        Ok(ResolvedCatalog {
            fuel,
            pipe_system,
            diameters,
            capacity,
            fittings: &self.fittings,
        })
    }

    /// Appliances whose id or label contains `query` (case-insensitive).
    pub fn search_appliances<'a>(
        &'a self,
        query: &'a str,
    ) -> impl Iterator<Item = &'a ApplianceCatalogEntry> + 'a {
        let query = query.trim().to_ascii_lowercase();
        self.appliances.iter().filter(move |a| {
            query.is_empty()
                || a.id.to_ascii_lowercase().contains(&query)
                || a.label.to_ascii_lowercase().contains(&query)
        })
    }
}
