//! Error types for the gl-app service layer.

use std::path::PathBuf;

use gl_catalog::CatalogError;
use gl_project::ProjectError;
use gl_sizing::SizingError;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to load job file {path}: {source}")]
    JobFileLoad {
        path: PathBuf,
        source: ProjectError,
    },

    #[error("Failed to write job file {path}: {source}")]
    JobFileWrite {
        path: PathBuf,
        source: ProjectError,
    },

    #[error("Failed to load catalog file {path}: {source}")]
    CatalogFileLoad {
        path: PathBuf,
        source: ProjectError,
    },

    #[error("Failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Job validation failed: {0}")]
    Validation(String),

    #[error("Outlet '{outlet}': {source}")]
    Prefill {
        outlet: String,
        source: CatalogError,
    },

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Sizing error: {0}")]
    Sizing(#[from] SizingError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for gl-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<gl_project::ValidationError> for AppError {
    fn from(err: gl_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}
