//! gl-project: job file format, validation and material lists.

pub mod materials;
pub mod migrate;
pub mod schema;
pub mod validate;

pub use materials::{MaterialRow, aggregate_materials, bom_material_rows};
pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use validate::{ValidationError, validate_job};

use gl_catalog::Catalog;
use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encodings, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    /// `.json` is JSON; anything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
            _ => FileFormat::Yaml,
        }
    }
}

pub fn parse_yaml(content: &str) -> ProjectResult<JobFile> {
    let job: JobFile = serde_yaml::from_str(content)?;
    finish_load(job)
}

pub fn parse_json(content: &str) -> ProjectResult<JobFile> {
    let job: JobFile = serde_json::from_str(content)?;
    finish_load(job)
}

fn finish_load(job: JobFile) -> ProjectResult<JobFile> {
    let job = migrate_to_latest(job)?;
    validate_job(&job)?;
    Ok(job)
}

pub fn load_yaml(path: &Path) -> ProjectResult<JobFile> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

pub fn save_yaml(path: &Path, job: &JobFile) -> ProjectResult<()> {
    validate_job(job)?;
    let content = serde_yaml::to_string(job)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<JobFile> {
    let content = std::fs::read_to_string(path)?;
    parse_json(&content)
}

pub fn save_json(path: &Path, job: &JobFile) -> ProjectResult<()> {
    validate_job(job)?;
    let content = serde_json::to_string_pretty(job)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a job file in the format its extension names.
pub fn load_job(path: &Path) -> ProjectResult<JobFile> {
    match FileFormat::from_path(path) {
        FileFormat::Yaml => load_yaml(path),
        FileFormat::Json => load_json(path),
    }
}

/// Load a catalog file in the format its extension names.
///
/// The catalog is only parsed here; its data is checked when a sizing
/// request resolves the entries it references.
pub fn load_catalog(path: &Path) -> ProjectResult<Catalog> {
    let content = std::fs::read_to_string(path)?;
    let catalog: Catalog = match FileFormat::from_path(path) {
        FileFormat::Yaml => serde_yaml::from_str(&content)?,
        FileFormat::Json => serde_json::from_str(&content)?,
    };
    Ok(catalog)
}

pub fn save_catalog(path: &Path, catalog: &Catalog) -> ProjectResult<()> {
    let content = match FileFormat::from_path(path) {
        FileFormat::Yaml => serde_yaml::to_string(catalog)?,
        FileFormat::Json => serde_json::to_string_pretty(catalog)?,
    };
    std::fs::write(path, content)?;
    Ok(())
}
