//! Fittings: kinds, per-segment counts and equivalent-length factors.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FittingKind {
    #[serde(rename = "elbow_90")]
    Elbow90,
    #[serde(rename = "elbow_45")]
    Elbow45,
    Tee,
    Valve,
}

impl FittingKind {
    pub const ALL: [FittingKind; 4] = [
        FittingKind::Elbow90,
        FittingKind::Elbow45,
        FittingKind::Tee,
        FittingKind::Valve,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FittingKind::Elbow90 => "elbow_90",
            FittingKind::Elbow45 => "elbow_45",
            FittingKind::Tee => "tee",
            FittingKind::Valve => "valve",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FittingKind::Elbow90 => "Elbow 90°",
            FittingKind::Elbow45 => "Elbow 45°",
            FittingKind::Tee => "Tee",
            FittingKind::Valve => "Valve",
        }
    }
}

impl fmt::Display for FittingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Fittings installed on the segment feeding one outlet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FittingCounts {
    pub elbow_90: u32,
    pub elbow_45: u32,
    pub tee: u32,
    pub valve: u32,
}

impl FittingCounts {
    pub fn get(&self, kind: FittingKind) -> u32 {
        match kind {
            FittingKind::Elbow90 => self.elbow_90,
            FittingKind::Elbow45 => self.elbow_45,
            FittingKind::Tee => self.tee,
            FittingKind::Valve => self.valve,
        }
    }

    /// Iterate `(kind, count)` pairs with a non-zero count.
    pub fn iter(&self) -> impl Iterator<Item = (FittingKind, u32)> + '_ {
        FittingKind::ALL
            .into_iter()
            .map(|kind| (kind, self.get(kind)))
            .filter(|(_, count)| *count > 0)
    }

    pub fn total(&self) -> u64 {
        FittingKind::ALL
            .into_iter()
            .map(|kind| u64::from(self.get(kind)))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        FittingKind::ALL.into_iter().all(|kind| self.get(kind) == 0)
    }
}

/// Equivalent length of each fitting kind, in "diameters of pipe".
///
/// A 90° elbow with factor 30 adds `30 × DN` of straight pipe to the run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FittingEquivalenceFactors {
    pub equiv_diameters: BTreeMap<FittingKind, f64>,
}

impl FittingEquivalenceFactors {
    pub fn new(factors: impl IntoIterator<Item = (FittingKind, f64)>) -> Self {
        Self {
            equiv_diameters: factors.into_iter().collect(),
        }
    }

    /// Multiplier for `kind`, or `None` when the catalog has no entry.
    pub fn factor(&self, kind: FittingKind) -> Option<f64> {
        self.equiv_diameters.get(&kind).copied()
    }

    pub(crate) fn validate(&self) -> CatalogResult<()> {
        for (kind, &factor) in &self.equiv_diameters {
            if !factor.is_finite() || factor < 0.0 {
                return Err(CatalogError::InvalidValue {
                    what: format!("fitting factor '{}'", kind),
                    value: factor,
                    reason: "must be finite and non-negative",
                });
            }
        }
        Ok(())
    }
}
