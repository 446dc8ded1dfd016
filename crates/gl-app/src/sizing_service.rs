//! Sizing requests and material lists.

use gl_catalog::Catalog;
use gl_project::schema::JobFile;
use gl_project::{MaterialRow, aggregate_materials, bom_material_rows};
use gl_sizing::{ComputeResult, compute_installation};
use serde::Serialize;
use tracing::info;

use crate::error::AppResult;
use crate::job_service::installation_input;

/// Sizing outcome of one job, ready for display or export.
#[derive(Debug, Clone, Serialize)]
pub struct SizingReport {
    pub job_name: String,
    pub fuel_id: String,
    pub pipe_system_id: String,
    #[serde(flatten)]
    pub result: ComputeResult,
    pub materials: Vec<MaterialRow>,
}

impl SizingReport {
    pub fn warning_count(&self) -> usize {
        self.result.warnings().count()
    }
}

/// Prefill, size and flatten the materials of one job.
pub fn size_job(job: &JobFile, catalog: &Catalog) -> AppResult<SizingReport> {
    let input = installation_input(job, catalog)?;
    let result = compute_installation(&input, catalog)?;
    let materials = bom_material_rows(&result.bom);

    let report = SizingReport {
        job_name: job.name.clone(),
        fuel_id: job.fuel_id.clone(),
        pipe_system_id: job.pipe_system_id.clone(),
        result,
        materials,
    };

    info!(
        job = %report.job_name,
        segments = report.result.segment_results.len(),
        total_flow_m3_h = report.result.totals.flow_m3_h,
        warnings = report.warning_count(),
        "job sized"
    );

    Ok(report)
}

/// Size every job and merge their material lists into one.
pub fn materials_for_jobs(jobs: &[JobFile], catalog: &Catalog) -> AppResult<Vec<MaterialRow>> {
    let mut rows = Vec::new();
    for job in jobs {
        rows.extend(size_job(job, catalog)?.materials);
    }
    let merged = aggregate_materials(rows);
    info!(jobs = jobs.len(), rows = merged.len(), "materials aggregated");
    Ok(merged)
}
