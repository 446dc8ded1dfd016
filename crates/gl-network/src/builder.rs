//! Topology builder: outlet list → segment chain.

use gl_catalog::FittingCounts;
use gl_core::non_negative_or_zero;

use crate::outlet::Outlet;
use crate::segment::{Segment, SegmentChain};

/// Label used for the supply point at the start of the chain.
pub const METER_LABEL: &str = "Meter";

/// Builder for assembling an outlet chain incrementally.
///
/// Outlets are appended from the meter outward; `build()` derives the segments.
#[derive(Debug, Default)]
pub struct ChainBuilder {
    outlets: Vec<Outlet>,
}

impl ChainBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outlet at the far end of the chain.
    pub fn push(&mut self, outlet: Outlet) -> &mut Self {
        self.outlets.push(outlet);
        self
    }

    /// Append an outlet from its parts and return its position.
    pub fn add_outlet(
        &mut self,
        id: impl Into<String>,
        location: impl Into<String>,
        distance_m: f64,
        catalog_id: impl Into<String>,
        demand_kcal_h: f64,
        fittings: FittingCounts,
    ) -> usize {
        let outlet = Outlet::new(id, location, distance_m, catalog_id, demand_kcal_h)
            .with_fittings(fittings);
        self.outlets.push(outlet);
        self.outlets.len() - 1
    }

    pub fn outlets(&self) -> &[Outlet] {
        &self.outlets
    }

    /// Derive the segment chain.
    pub fn build(&self) -> SegmentChain {
        build_chain(&self.outlets)
    }
}

/// Derive one segment per outlet, in the same order.
///
/// Walking from the farthest outlet back to the meter, each segment gets the
/// demand of its own outlet plus everything beyond it. Cumulative distance is
/// the sum of real run lengths from the meter up to and including the
/// segment. Negative or non-finite distances and demands count as zero.
pub fn build_chain(outlets: &[Outlet]) -> SegmentChain {
    let rows: Vec<(f64, f64)> = outlets.iter().map(sanitized_row).collect();

    let mut cumulative = Vec::with_capacity(rows.len());
    let mut distance = 0.0;
    for &(length_m, _) in &rows {
        distance = saturating_sum(distance, length_m);
        cumulative.push(distance);
    }
    let total_length_m = distance;

    let mut segments = Vec::with_capacity(outlets.len());
    let mut downstream_demand = 0.0;
    for (position, outlet) in outlets.iter().enumerate().rev() {
        let (length_m, demand_kcal_h) = rows[position];
        downstream_demand = saturating_sum(downstream_demand, demand_kcal_h);

        segments.push(Segment {
            id: outlet.id.clone(),
            label: segment_label(outlets, position),
            position,
            length_m,
            fittings: outlet.fittings,
            downstream_demand_kcal_h: downstream_demand,
            cumulative_distance_m: cumulative[position],
            downstream_outlets: outlets.len() - position,
        });
    }
    segments.reverse();

    SegmentChain::new(segments, downstream_demand, total_length_m)
}

/// Sum of two clamped, non-negative values, capped at `f64::MAX` so running
/// totals stay finite.
fn saturating_sum(total: f64, value: f64) -> f64 {
    (total + value).min(f64::MAX)
}

fn sanitized_row(outlet: &Outlet) -> (f64, f64) {
    let (length_m, length_clamped) = non_negative_or_zero(outlet.distance_m);
    if length_clamped {
        tracing::warn!(
            outlet = %outlet.id,
            distance_m = outlet.distance_m,
            "invalid distance treated as 0 m"
        );
    }

    let (demand, demand_clamped) = non_negative_or_zero(outlet.appliance.demand_kcal_h);
    if demand_clamped {
        tracing::warn!(
            outlet = %outlet.id,
            demand_kcal_h = outlet.appliance.demand_kcal_h,
            "invalid demand treated as 0 kcal/h"
        );
    }

    (length_m, demand)
}

fn outlet_name(outlets: &[Outlet], position: usize) -> String {
    let location = outlets[position].location.trim();
    if location.is_empty() {
        format!("#{}", position + 1)
    } else {
        format!("#{} {}", position + 1, location)
    }
}

fn segment_label(outlets: &[Outlet], position: usize) -> String {
    let from = if position == 0 {
        METER_LABEL.to_string()
    } else {
        outlet_name(outlets, position - 1)
    };
    format!("{} -> {}", from, outlet_name(outlets, position))
}
