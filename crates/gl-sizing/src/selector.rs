//! Diameter selector: smallest catalog diameter that carries the flow.

use gl_catalog::{FittingEquivalenceFactors, PipeDiameter};
use gl_core::units::{m, mm, to_m};
use gl_network::Segment;
use serde::{Deserialize, Serialize};

use crate::common::{check_finite, utilization};
use crate::equivalent::equivalent_length;
use crate::error::{SizingError, SizingResult};
use crate::result::SizingWarning;
use crate::traits::CapacityModel;

/// The diameter chosen for one segment and the figures it was judged on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub dn_mm: u32,
    /// Equivalent length evaluated at the chosen diameter [m].
    pub equivalent_length_m: f64,
    pub capacity_m3_h: f64,
    pub utilization: f64,
    pub warning: Option<SizingWarning>,
}

/// Choose a diameter for `segment` carrying `flow_m3_h`.
///
/// Candidates are tried smallest first; the equivalent length is recomputed
/// for each, since fittings weigh in proportion to the diameter. When no
/// candidate is sufficient the largest one is returned with a warning.
///
/// `diameters` must be sorted ascending by nominal size.
pub fn select_diameter(
    flow_m3_h: f64,
    segment: &Segment,
    diameters: &[PipeDiameter],
    capacity: &impl CapacityModel,
    factors: &FittingEquivalenceFactors,
) -> SizingResult<Selection> {
    check_finite(flow_m3_h, "segment flow")?;
    let real_length = m(segment.length_m);

    let mut last = None;
    for diameter in diameters {
        let l_eq = equivalent_length(
            real_length,
            &segment.fittings,
            mm(diameter.dn_mm as f64),
            factors,
        );
        let l_eq_m = to_m(l_eq);
        check_finite(l_eq_m, "equivalent length")?;
        let cap = capacity.capacity(diameter.dn_mm, l_eq);

        if cap >= flow_m3_h {
            return Ok(Selection {
                dn_mm: diameter.dn_mm,
                equivalent_length_m: l_eq_m,
                capacity_m3_h: cap,
                utilization: utilization(flow_m3_h, cap),
                warning: None,
            });
        }
        last = Some((diameter.dn_mm, l_eq_m, cap));
    }

    let (dn_mm, equivalent_length_m, capacity_m3_h) =
        last.ok_or_else(|| SizingError::NoCandidateDiameters {
            segment: segment.id.clone(),
        })?;

    Ok(Selection {
        dn_mm,
        equivalent_length_m,
        capacity_m3_h,
        utilization: utilization(flow_m3_h, capacity_m3_h),
        warning: Some(SizingWarning::DemandExceedsLargestDiameter {
            dn_mm,
            flow_m3_h,
            capacity_m3_h,
        }),
    })
}
