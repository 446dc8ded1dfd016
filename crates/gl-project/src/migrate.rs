//! Schema migration framework.

use crate::ProjectError;
use crate::schema::JobFile;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut job: JobFile) -> Result<JobFile, ProjectError> {
    while job.version < LATEST_VERSION {
        job = migrate_one_version(job)?;
    }
    Ok(job)
}

fn migrate_one_version(job: JobFile) -> Result<JobFile, ProjectError> {
    match job.version {
        0 => migrate_v0_to_v1(job),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 0 files stored locations with surrounding whitespace and allowed
/// blank outlet ids; ids are regenerated from the position.
fn migrate_v0_to_v1(mut job: JobFile) -> Result<JobFile, ProjectError> {
    for (i, outlet) in job.outlets.iter_mut().enumerate() {
        outlet.location = outlet.location.trim().to_string();
        if outlet.id.trim().is_empty() {
            outlet.id = format!("o{}", i + 1);
        }
    }
    job.version = 1;
    Ok(job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ApplianceDef, OutletDef};
    use gl_catalog::FittingCounts;

    fn outlet(id: &str, location: &str) -> OutletDef {
        OutletDef {
            id: id.to_string(),
            location: location.to_string(),
            distance_m: 3.0,
            appliance: ApplianceDef {
                catalog_id: "range".to_string(),
                demand_kcal_h: None,
            },
            fittings: FittingCounts::default(),
        }
    }

    #[test]
    fn migrate_latest_is_noop() {
        let mut job = JobFile::new("test", "natural", "steel_epoxy");
        job.outlets.push(outlet("", "  Kitchen "));

        let migrated = migrate_to_latest(job.clone()).unwrap();
        assert_eq!(migrated, job);
    }

    #[test]
    fn migrate_v0_fills_blank_ids() {
        let mut job = JobFile::new("old", "natural", "steel_epoxy");
        job.version = 0;
        job.outlets = vec![outlet("k", " Kitchen "), outlet(" ", "Laundry")];

        let migrated = migrate_to_latest(job).unwrap();
        assert_eq!(migrated.version, LATEST_VERSION);
        assert_eq!(migrated.outlets[0].id, "k");
        assert_eq!(migrated.outlets[0].location, "Kitchen");
        assert_eq!(migrated.outlets[1].id, "o2");
    }
}
