//! Error types for sizing operations.

use gl_catalog::CatalogError;
use gl_core::error::GlError;
use thiserror::Error;

/// Errors that abort a sizing request.
///
/// Undersized segments are not errors; they surface as warnings on the result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizingError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Core(#[from] GlError),

    #[error("No candidate diameters to size segment '{segment}'")]
    NoCandidateDiameters { segment: String },
}

pub type SizingResult<T> = Result<T, SizingError>;

impl From<SizingError> for GlError {
    fn from(e: SizingError) -> Self {
        match e {
            SizingError::Catalog(err) => err.into(),
            SizingError::Core(err) => err,
            SizingError::NoCandidateDiameters { .. } => GlError::InvalidArg {
                what: "pipe system without diameters",
            },
        }
    }
}
