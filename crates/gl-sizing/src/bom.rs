//! Bill of materials aggregated from sized segments.

use std::collections::BTreeMap;
use std::fmt;

use gl_catalog::FittingKind;
use gl_core::units::Unit;
use gl_network::Segment;
use serde::{Deserialize, Serialize};

use crate::result::SegmentResult;

/// Key of the per-outlet shutoff valve accessory.
pub const SHUTOFF_VALVE_KEY: &str = "shutoff_valve";
const SHUTOFF_VALVE_LABEL: &str = "Shutoff valve per outlet";

/// Fitting kinds that can appear in a bill of materials.
///
/// Reductions are never entered by the user; they are derived from diameter
/// changes along the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BomFittingKind {
    #[serde(rename = "elbow_90")]
    Elbow90,
    #[serde(rename = "elbow_45")]
    Elbow45,
    Tee,
    Valve,
    Reduction,
}

impl BomFittingKind {
    pub fn key(self) -> &'static str {
        match self {
            BomFittingKind::Elbow90 => "elbow_90",
            BomFittingKind::Elbow45 => "elbow_45",
            BomFittingKind::Tee => "tee",
            BomFittingKind::Valve => "valve",
            BomFittingKind::Reduction => "reduction",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BomFittingKind::Reduction => "Reduction",
            BomFittingKind::Elbow90 => FittingKind::Elbow90.label(),
            BomFittingKind::Elbow45 => FittingKind::Elbow45.label(),
            BomFittingKind::Tee => FittingKind::Tee.label(),
            BomFittingKind::Valve => FittingKind::Valve.label(),
        }
    }
}

impl From<FittingKind> for BomFittingKind {
    fn from(kind: FittingKind) -> Self {
        match kind {
            FittingKind::Elbow90 => BomFittingKind::Elbow90,
            FittingKind::Elbow45 => BomFittingKind::Elbow45,
            FittingKind::Tee => BomFittingKind::Tee,
            FittingKind::Valve => BomFittingKind::Valve,
        }
    }
}

impl fmt::Display for BomFittingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One purchasable line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BomEntry {
    Pipe {
        dn_mm: u32,
        length_m: f64,
    },
    Fitting {
        kind: BomFittingKind,
        dn_mm: u32,
        quantity: u32,
    },
    Accessory {
        key: String,
        label: String,
        quantity: u32,
        unit: Unit,
    },
}

/// Flat, deterministically ordered list of materials for one installation:
/// pipes by diameter, then fittings by (kind, diameter), then accessories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillOfMaterials {
    entries: Vec<BomEntry>,
}

impl BillOfMaterials {
    pub fn entries(&self) -> &[BomEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BomEntry> {
        self.entries.iter()
    }

    /// Total pipe length [m] at nominal diameter `dn_mm`.
    pub fn pipe_length(&self, dn_mm: u32) -> f64 {
        self.entries
            .iter()
            .filter_map(|e| match e {
                BomEntry::Pipe { dn_mm: d, length_m } if *d == dn_mm => Some(*length_m),
                _ => None,
            })
            .sum()
    }

    pub fn fitting_quantity(&self, kind: BomFittingKind, dn_mm: u32) -> u32 {
        self.entries
            .iter()
            .filter_map(|e| match e {
                BomEntry::Fitting {
                    kind: k,
                    dn_mm: d,
                    quantity,
                } if *k == kind && *d == dn_mm => Some(*quantity),
                _ => None,
            })
            .sum()
    }

    /// Reductions across all diameters.
    pub fn reduction_count(&self) -> u32 {
        self.entries
            .iter()
            .filter_map(|e| match e {
                BomEntry::Fitting {
                    kind: BomFittingKind::Reduction,
                    quantity,
                    ..
                } => Some(*quantity),
                _ => None,
            })
            .sum()
    }

    pub fn accessory_quantity(&self, key: &str) -> Option<u32> {
        self.entries.iter().find_map(|e| match e {
            BomEntry::Accessory {
                key: k, quantity, ..
            } if k == key => Some(*quantity),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a BillOfMaterials {
    type Item = &'a BomEntry;
    type IntoIter = std::slice::Iter<'a, BomEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Aggregate the materials for a sized chain.
///
/// `segments` and `results` are paired by position. Pipe lengths are the real
/// lengths, not the equivalent ones. A reduction is counted at the larger
/// diameter wherever the next segment downstream is strictly smaller.
pub fn aggregate_bom(segments: &[Segment], results: &[SegmentResult]) -> BillOfMaterials {
    let mut pipes: BTreeMap<u32, f64> = BTreeMap::new();
    let mut fittings: BTreeMap<(BomFittingKind, u32), u32> = BTreeMap::new();

    for (segment, result) in segments.iter().zip(results) {
        *pipes.entry(result.dn_mm).or_default() += segment.length_m;
        for (kind, count) in segment.fittings.iter() {
            let total = fittings.entry((kind.into(), result.dn_mm)).or_default();
            *total = total.saturating_add(count);
        }
    }

    for pair in results.windows(2) {
        let (upstream, downstream) = (&pair[0], &pair[1]);
        if downstream.dn_mm < upstream.dn_mm {
            let total = fittings
                .entry((BomFittingKind::Reduction, upstream.dn_mm))
                .or_default();
            *total = total.saturating_add(1);
        }
    }

    let mut entries: Vec<BomEntry> = pipes
        .into_iter()
        .filter(|&(_, length_m)| length_m > 0.0)
        .map(|(dn_mm, length_m)| BomEntry::Pipe { dn_mm, length_m })
        .collect();

    entries.extend(
        fittings
            .into_iter()
            .filter(|&(_, quantity)| quantity > 0)
            .map(|((kind, dn_mm), quantity)| BomEntry::Fitting {
                kind,
                dn_mm,
                quantity,
            }),
    );

    entries.push(BomEntry::Accessory {
        key: SHUTOFF_VALVE_KEY.to_string(),
        label: SHUTOFF_VALVE_LABEL.to_string(),
        quantity: u32::try_from(segments.len()).unwrap_or(u32::MAX),
        unit: Unit::U,
    });

    BillOfMaterials { entries }
}
