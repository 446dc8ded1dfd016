//! Shared application service layer for gasline.
//!
//! This crate provides a unified interface for frontends, centralizing job
//! handling, catalog selection, sizing and material aggregation.

pub mod catalog_service;
pub mod error;
pub mod heat_load_service;
pub mod job_service;
pub mod sizing_service;

// Re-export key types for convenience
pub use catalog_service::{
    ApplianceSummary, CatalogSummary, ClimateZoneSummary, FuelSummary, PipeSystemSummary,
    load_catalog, summarize_catalog,
};
pub use error::{AppError, AppResult};
pub use heat_load_service::heat_load;
pub use job_service::{
    JobSummary, installation_input, load_job, save_job, summarize_job, validate_job,
};
pub use sizing_service::{SizingReport, materials_for_jobs, size_job};
