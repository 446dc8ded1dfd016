//! Job file validation logic.
//!
//! Only structural problems are rejected here. Per-row numbers that make no
//! physical sense are left to the sizing engine, which clamps them.

use crate::schema::JobFile;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing field: {field}")]
    MissingField { field: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_job(job: &JobFile) -> Result<(), ValidationError> {
    if job.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: job.version,
        });
    }

    for (field, value) in [
        ("fuel_id", &job.fuel_id),
        ("pipe_system_id", &job.pipe_system_id),
    ] {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: field.to_string(),
            });
        }
    }

    let mut outlet_ids = HashSet::new();
    for (i, outlet) in job.outlets.iter().enumerate() {
        if outlet.id.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: format!("outlets[{}].id", i),
            });
        }
        if outlet.appliance.catalog_id.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: format!("outlets[{}].appliance.catalog_id", i),
            });
        }
        if !outlet_ids.insert(outlet.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: outlet.id.clone(),
                context: "outlets".to_string(),
            });
        }
    }

    Ok(())
}
