//! Pipe systems and their commercial diameters.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// One commercially available size within a pipe system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeDiameter {
    /// Nominal diameter [mm]; the key into capacity tables.
    pub dn_mm: u32,
    /// Internal bore [mm].
    pub inner_mm: f64,
}

/// A family of pipes (material + jointing method) with its available sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeSystem {
    pub id: String,
    pub label: String,
    pub diameters: Vec<PipeDiameter>,
}

impl PipeSystem {
    /// Diameters sorted ascending by nominal size, after validating the system.
    ///
    /// Selection relies on this order, so it never trusts the order in the catalog.
    pub fn sorted_diameters(&self) -> CatalogResult<Vec<PipeDiameter>> {
        if self.diameters.is_empty() {
            return Err(CatalogError::EmptyPipeSystem {
                id: self.id.clone(),
            });
        }

        let mut seen = HashSet::new();
        for d in &self.diameters {
            if !seen.insert(d.dn_mm) {
                return Err(CatalogError::DuplicateDiameter {
                    system_id: self.id.clone(),
                    dn_mm: d.dn_mm,
                });
            }
            if d.dn_mm == 0 {
                return Err(CatalogError::InvalidValue {
                    what: format!("pipe system '{}' nominal diameter", self.id),
                    value: 0.0,
                    reason: "must be positive",
                });
            }
            if !d.inner_mm.is_finite() || d.inner_mm <= 0.0 {
                return Err(CatalogError::InvalidValue {
                    what: format!("pipe system '{}' DN {} bore", self.id, d.dn_mm),
                    value: d.inner_mm,
                    reason: "must be positive",
                });
            }
        }

        let mut sorted = self.diameters.clone();
        sorted.sort_by_key(|d| d.dn_mm);
        Ok(sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(dns: &[u32]) -> PipeSystem {
        PipeSystem {
            id: "test".into(),
            label: "Test".into(),
            diameters: dns
                .iter()
                .map(|&dn| PipeDiameter {
                    dn_mm: dn,
                    inner_mm: dn as f64 * 0.9,
                })
                .collect(),
        }
    }

    #[test]
    fn diameters_come_back_sorted() {
        let sorted = system(&[25, 13, 19]).sorted_diameters().unwrap();
        let dns: Vec<u32> = sorted.iter().map(|d| d.dn_mm).collect();
        assert_eq!(dns, vec![13, 19, 25]);
    }

    #[test]
    fn duplicate_diameter_is_rejected() {
        let err = system(&[13, 19, 13]).sorted_diameters().unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateDiameter {
                system_id: "test".into(),
                dn_mm: 13
            }
        );
    }

    #[test]
    fn empty_system_is_rejected() {
        let err = system(&[]).sorted_diameters().unwrap_err();
        assert!(matches!(err, CatalogError::EmptyPipeSystem { .. }));
    }
}
