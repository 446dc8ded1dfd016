//! Installation sizing entry point.

use gl_catalog::{Catalog, ResolvedCatalog};
use gl_network::{Outlet, SegmentChain, build_chain};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bom::aggregate_bom;
use crate::demand::demand_to_flow;
use crate::error::SizingResult;
use crate::result::{ComputeResult, SegmentResult, Totals};
use crate::selector::select_diameter;

/// One sizing request: which fuel, which pipe system, and the outlets in
/// order from the meter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallationInput {
    pub fuel_id: String,
    pub pipe_system_id: String,
    pub outlets: Vec<Outlet>,
}

impl InstallationInput {
    pub fn new(fuel_id: impl Into<String>, pipe_system_id: impl Into<String>) -> Self {
        Self {
            fuel_id: fuel_id.into(),
            pipe_system_id: pipe_system_id.into(),
            outlets: Vec::new(),
        }
    }

    pub fn with_outlet(mut self, outlet: Outlet) -> Self {
        self.outlets.push(outlet);
        self
    }
}

/// Size every segment of the installation and aggregate its materials.
///
/// Catalog references are resolved before any work is done; a missing fuel,
/// pipe system or capacity table fails the whole request. Undersized
/// segments do not fail; they carry a warning.
pub fn compute_installation(
    input: &InstallationInput,
    catalog: &Catalog,
) -> SizingResult<ComputeResult> {
    let resolved = catalog.resolve(&input.fuel_id, &input.pipe_system_id)?;
    let chain = build_chain(&input.outlets);
    size_chain(&chain, &resolved)
}

/// Size an already built chain against resolved catalog data.
pub fn size_chain(chain: &SegmentChain, resolved: &ResolvedCatalog<'_>) -> SizingResult<ComputeResult> {
    let mut segment_results = Vec::with_capacity(chain.len());

    for segment in chain {
        let flow = demand_to_flow(segment.downstream_demand_kcal_h, resolved.fuel);
        let selection = select_diameter(
            flow,
            segment,
            &resolved.diameters,
            resolved.capacity,
            resolved.fittings,
        )?;

        debug!(
            segment = %segment.id,
            flow_m3_h = flow,
            dn_mm = selection.dn_mm,
            equivalent_length_m = selection.equivalent_length_m,
            capacity_m3_h = selection.capacity_m3_h,
            "diameter selected"
        );
        if let Some(warning) = &selection.warning {
            warn!(segment = %segment.id, "{warning}");
        }

        segment_results.push(SegmentResult::new(segment, flow, selection));
    }

    let bom = aggregate_bom(chain.segments(), &segment_results);
    let totals = Totals {
        demand_kcal_h: chain.total_demand_kcal_h(),
        flow_m3_h: demand_to_flow(chain.total_demand_kcal_h(), resolved.fuel),
    };

    Ok(ComputeResult {
        segment_results,
        bom,
        totals,
    })
}
