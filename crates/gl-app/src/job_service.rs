//! Job loading, saving, validation and conversion to sizing input.

use std::path::Path;

use gl_catalog::Catalog;
use gl_network::{ApplianceRef, Outlet};
use gl_project::schema::{JobFile, OutletDef};
use gl_sizing::InstallationInput;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Summary of a job for listing.
#[derive(Debug, Clone)]
pub struct JobSummary {
    pub name: String,
    pub fuel_id: String,
    pub pipe_system_id: String,
    pub outlet_count: usize,
    /// Outlets whose demand comes from the appliance catalog.
    pub prefilled_outlets: usize,
    pub total_distance_m: f64,
}

/// Load a job file (YAML, or JSON by extension), migrating and validating it.
pub fn load_job(path: &Path) -> AppResult<JobFile> {
    gl_project::load_job(path).map_err(|source| AppError::JobFileLoad {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_job(path: &Path, job: &JobFile) -> AppResult<()> {
    let result = match gl_project::FileFormat::from_path(path) {
        gl_project::FileFormat::Yaml => gl_project::save_yaml(path, job),
        gl_project::FileFormat::Json => gl_project::save_json(path, job),
    };
    result.map_err(|source| AppError::JobFileWrite {
        path: path.to_path_buf(),
        source,
    })
}

pub fn validate_job(job: &JobFile) -> AppResult<()> {
    gl_project::validate_job(job)?;
    Ok(())
}

pub fn summarize_job(job: &JobFile) -> JobSummary {
    JobSummary {
        name: job.name.clone(),
        fuel_id: job.fuel_id.clone(),
        pipe_system_id: job.pipe_system_id.clone(),
        outlet_count: job.outlets.len(),
        prefilled_outlets: job
            .outlets
            .iter()
            .filter(|o| o.appliance.demand_kcal_h.is_none())
            .count(),
        total_distance_m: job
            .outlets
            .iter()
            .map(|o| o.distance_m)
            .filter(|d| d.is_finite() && *d > 0.0)
            .sum(),
    }
}

/// Build the sizing input for a job, filling absent demands from the
/// appliance catalog.
///
/// An unknown appliance id only fails when its demand has to be looked up.
pub fn installation_input(job: &JobFile, catalog: &Catalog) -> AppResult<InstallationInput> {
    let outlets = job
        .outlets
        .iter()
        .map(|def| outlet_from_def(def, catalog))
        .collect::<AppResult<Vec<_>>>()?;

    Ok(InstallationInput {
        fuel_id: job.fuel_id.clone(),
        pipe_system_id: job.pipe_system_id.clone(),
        outlets,
    })
}

fn outlet_from_def(def: &OutletDef, catalog: &Catalog) -> AppResult<Outlet> {
    let demand_kcal_h = match def.appliance.demand_kcal_h {
        Some(demand) => demand,
        None => {
            let entry = catalog
                .appliance(&def.appliance.catalog_id)
                .map_err(|source| AppError::Prefill {
                    outlet: def.id.clone(),
                    source,
                })?;
            debug!(
                outlet = %def.id,
                appliance = %entry.id,
                demand_kcal_h = entry.default_demand_kcal_h,
                "demand prefilled from catalog"
            );
            entry.default_demand_kcal_h
        }
    };

    Ok(Outlet {
        id: def.id.clone(),
        location: def.location.clone(),
        distance_m: def.distance_m,
        appliance: ApplianceRef {
            catalog_id: def.appliance.catalog_id.clone(),
            demand_kcal_h,
        },
        fittings: def.fittings,
    })
}
