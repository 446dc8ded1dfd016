//! Catalog lookup and validation errors.

use gl_core::GlError;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised when a request references catalog data that is missing or unusable.
///
/// These are configuration errors: the caller handed in catalogs that do not
/// match the input, and no meaningful partial answer exists.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Fuel not found in catalog: {id}")]
    MissingFuel { id: String },

    #[error("Pipe system not found in catalog: {id}")]
    MissingPipeSystem { id: String },

    #[error("No capacity table for fuel '{fuel_id}' at {pressure_mbar} mbar")]
    MissingCapacityTable { fuel_id: String, pressure_mbar: f64 },

    #[error("Appliance not found in catalog: {id}")]
    MissingAppliance { id: String },

    #[error("Climate zone not found in catalog: {id}")]
    MissingClimateZone { id: String },

    #[error("Pipe system '{id}' has no diameters")]
    EmptyPipeSystem { id: String },

    #[error("Pipe system '{system_id}' lists diameter DN {dn_mm} more than once")]
    DuplicateDiameter { system_id: String, dn_mm: u32 },

    #[error(
        "Capacity table for fuel '{fuel_id}', DN {dn_mm} is not monotone at breakpoint {index}"
    )]
    NonMonotoneTable {
        fuel_id: String,
        dn_mm: u32,
        index: usize,
    },

    #[error("Invalid catalog value: {what} = {value} ({reason})")]
    InvalidValue {
        what: String,
        value: f64,
        reason: &'static str,
    },
}

impl From<CatalogError> for GlError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::MissingFuel { .. }
            | CatalogError::MissingPipeSystem { .. }
            | CatalogError::MissingCapacityTable { .. }
            | CatalogError::MissingAppliance { .. }
            | CatalogError::MissingClimateZone { .. } => GlError::InvalidArg {
                what: "catalog reference",
            },
            CatalogError::EmptyPipeSystem { .. }
            | CatalogError::DuplicateDiameter { .. }
            | CatalogError::NonMonotoneTable { .. }
            | CatalogError::InvalidValue { .. } => GlError::Invariant {
                what: "catalog data",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_missing_key() {
        let err = CatalogError::MissingFuel {
            id: "biogas".into(),
        };
        assert!(err.to_string().contains("biogas"));

        let err = CatalogError::MissingCapacityTable {
            fuel_id: "lpg".into(),
            pressure_mbar: 28.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("lpg"));
        assert!(msg.contains("28"));
    }

    #[test]
    fn error_to_gl_error() {
        let err: GlError = CatalogError::MissingPipeSystem { id: "x".into() }.into();
        assert!(matches!(err, GlError::InvalidArg { .. }));

        let err: GlError = CatalogError::EmptyPipeSystem { id: "x".into() }.into();
        assert!(matches!(err, GlError::Invariant { .. }));
    }
}
