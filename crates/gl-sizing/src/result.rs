//! Per-segment sizing outcomes and installation totals.

use std::fmt;

use gl_network::Segment;
use serde::{Deserialize, Serialize};

use crate::bom::BillOfMaterials;
use crate::selector::Selection;

/// Non-fatal findings attached to a segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SizingWarning {
    /// Even the largest diameter of the pipe system cannot carry the flow.
    DemandExceedsLargestDiameter {
        dn_mm: u32,
        flow_m3_h: f64,
        capacity_m3_h: f64,
    },
}

impl fmt::Display for SizingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizingWarning::DemandExceedsLargestDiameter {
                dn_mm,
                flow_m3_h,
                capacity_m3_h,
            } => write!(
                f,
                "demand of {flow_m3_h:.2} m³/h exceeds the {capacity_m3_h:.2} m³/h capacity of the largest diameter (DN {dn_mm})"
            ),
        }
    }
}

/// Sizing outcome for one segment.
///
/// `utilization > 1` holds exactly when `warning` is set. An idle segment has
/// utilization 0; demand against a diameter without tabulated capacity is
/// infinite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentResult {
    /// Id of the outlet the segment feeds.
    pub id: String,
    pub label: String,
    pub length_m: f64,
    pub cumulative_distance_m: f64,
    pub equivalent_length_m: f64,
    pub demand_kcal_h: f64,
    pub flow_m3_h: f64,
    pub dn_mm: u32,
    pub capacity_m3_h: f64,
    pub utilization: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<SizingWarning>,
}

impl SegmentResult {
    pub fn new(segment: &Segment, flow_m3_h: f64, selection: Selection) -> Self {
        Self {
            id: segment.id.clone(),
            label: segment.label.clone(),
            length_m: segment.length_m,
            cumulative_distance_m: segment.cumulative_distance_m,
            equivalent_length_m: selection.equivalent_length_m,
            demand_kcal_h: segment.downstream_demand_kcal_h,
            flow_m3_h,
            dn_mm: selection.dn_mm,
            capacity_m3_h: selection.capacity_m3_h,
            utilization: selection.utilization,
            warning: selection.warning,
        }
    }

    pub fn is_undersized(&self) -> bool {
        self.warning.is_some()
    }
}

/// Installation-wide aggregates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub demand_kcal_h: f64,
    pub flow_m3_h: f64,
}

/// Everything one sizing request produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputeResult {
    pub segment_results: Vec<SegmentResult>,
    pub bom: BillOfMaterials,
    pub totals: Totals,
}

impl ComputeResult {
    pub fn warnings(&self) -> impl Iterator<Item = (&SegmentResult, &SizingWarning)> {
        self.segment_results
            .iter()
            .filter_map(|r| r.warning.as_ref().map(|w| (r, w)))
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    pub fn segment(&self, id: &str) -> Option<&SegmentResult> {
        self.segment_results.iter().find(|r| r.id == id)
    }
}
