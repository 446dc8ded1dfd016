//! Derived pipe segments.

use gl_catalog::FittingCounts;
use serde::{Deserialize, Serialize};

/// The pipe run feeding one outlet, with the running totals seen from the meter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Id of the outlet this segment feeds.
    pub id: String,
    pub label: String,
    /// 0-based position along the chain, counted from the meter.
    pub position: usize,
    /// Real pipe length of this run [m].
    pub length_m: f64,
    pub fittings: FittingCounts,
    /// Demand of this outlet and every outlet beyond it [kcal/h].
    pub downstream_demand_kcal_h: f64,
    /// Distance from the meter to the end of this run [m].
    pub cumulative_distance_m: f64,
    /// Number of outlets served through this run.
    pub downstream_outlets: usize,
}

/// Ordered segments from the meter outward.
///
/// The installation is a single chain: segment `i` carries every outlet from
/// `i` to the end. Branching installations are not modeled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentChain {
    segments: Vec<Segment>,
    total_demand_kcal_h: f64,
    total_length_m: f64,
}

impl SegmentChain {
    pub(crate) fn new(segments: Vec<Segment>, total_demand_kcal_h: f64, total_length_m: f64) -> Self {
        Self {
            segments,
            total_demand_kcal_h,
            total_length_m,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Sum of every (sanitized) appliance demand [kcal/h].
    pub fn total_demand_kcal_h(&self) -> f64 {
        self.total_demand_kcal_h
    }

    /// Real pipe length from the meter to the farthest outlet [m].
    pub fn total_length_m(&self) -> f64 {
        self.total_length_m
    }

    pub fn segment(&self, id: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl<'a> IntoIterator for &'a SegmentChain {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
