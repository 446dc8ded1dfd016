//! End-to-end sizing scenarios against small hand-built catalogs and the
//! reference catalog.

use std::collections::BTreeMap;

use gl_catalog::{
    CapacityPoint, CapacityTable, Catalog, CatalogError, FittingCounts, FittingEquivalenceFactors,
    FittingKind, Fuel, PipeDiameter, PipeSystem, reference_catalog,
};
use gl_network::Outlet;
use gl_sizing::{
    BomFittingKind, InstallationInput, SHUTOFF_VALVE_KEY, SizingError, SizingWarning,
    compute_installation,
};

/// Natural gas at 9300 kcal/m³ with DN 13/19/25 and one breakpoint at 5 m each.
fn three_size_catalog(caps: [f64; 3]) -> Catalog {
    let mut diameters_mm = BTreeMap::new();
    for (dn, cap) in [13, 19, 25].into_iter().zip(caps) {
        diameters_mm.insert(dn, vec![CapacityPoint::new(5.0, cap)]);
    }
    Catalog {
        fuels: vec![Fuel {
            id: "natural".into(),
            label: "Natural gas".into(),
            calorific_value_kcal_m3: 9300.0,
            supply_pressure_mbar: 20.0,
            max_pressure_drop_mbar: 1.0,
        }],
        pipe_systems: vec![PipeSystem {
            id: "steel".into(),
            label: "Steel".into(),
            // Deliberately unsorted.
            diameters: vec![
                PipeDiameter { dn_mm: 25, inner_mm: 24.0 },
                PipeDiameter { dn_mm: 13, inner_mm: 12.5 },
                PipeDiameter { dn_mm: 19, inner_mm: 18.0 },
            ],
        }],
        appliances: Vec::new(),
        fittings: FittingEquivalenceFactors::new([
            (FittingKind::Elbow90, 30.0),
            (FittingKind::Tee, 60.0),
        ]),
        capacity_tables: vec![CapacityTable {
            fuel_id: "natural".into(),
            pressure_mbar: 20.0,
            diameters_mm,
        }],
        climate_zones: Vec::new(),
    }
}

fn single_outlet(demand_kcal_h: f64) -> InstallationInput {
    InstallationInput::new("natural", "steel").with_outlet(Outlet::new(
        "o1",
        "Kitchen",
        5.0,
        "range",
        demand_kcal_h,
    ))
}

#[test]
fn smallest_sufficient_diameter_is_chosen() {
    let result = compute_installation(&single_outlet(18_600.0), &three_size_catalog([1.5, 3.0, 6.0]))
        .unwrap();

    assert_eq!(result.segment_results.len(), 1);
    let seg = &result.segment_results[0];
    assert_eq!(seg.dn_mm, 19);
    assert_eq!(seg.flow_m3_h, 2.0);
    assert_eq!(seg.equivalent_length_m, 5.0);
    assert!((seg.utilization - 0.67).abs() < 0.01);
    assert!(seg.warning.is_none());

    assert_eq!(result.bom.pipe_length(19), 5.0);
    assert_eq!(result.bom.pipe_length(13), 0.0);
    assert_eq!(result.totals.demand_kcal_h, 18_600.0);
    assert_eq!(result.totals.flow_m3_h, 2.0);
}

#[test]
fn oversized_demand_warns_on_largest_diameter() {
    let result = compute_installation(&single_outlet(18_600.0), &three_size_catalog([0.5, 1.0, 1.5]))
        .unwrap();

    let seg = &result.segment_results[0];
    assert_eq!(seg.dn_mm, 25);
    assert!(seg.utilization > 1.0);
    assert!(matches!(
        seg.warning,
        Some(SizingWarning::DemandExceedsLargestDiameter { dn_mm: 25, .. })
    ));
    assert!(result.has_warnings());
}

#[test]
fn empty_installation_still_lists_the_valve_accessory() {
    let input = InstallationInput::new("natural", "steel");
    let result = compute_installation(&input, &three_size_catalog([1.5, 3.0, 6.0])).unwrap();

    assert!(result.segment_results.is_empty());
    assert_eq!(result.totals.demand_kcal_h, 0.0);
    assert_eq!(result.totals.flow_m3_h, 0.0);
    assert_eq!(result.bom.len(), 1);
    assert_eq!(result.bom.accessory_quantity(SHUTOFF_VALVE_KEY), Some(0));
}

#[test]
fn diameters_step_down_along_the_chain() {
    // 18600 → 2.0 m³/h on the first run, 9300 → 1.0 on the second.
    let input = InstallationInput::new("natural", "steel")
        .with_outlet(Outlet::new("o1", "Kitchen", 3.0, "range", 9300.0))
        .with_outlet(Outlet::new("o2", "Laundry", 5.0, "water_heater", 9300.0));
    let result = compute_installation(&input, &three_size_catalog([1.5, 3.0, 6.0])).unwrap();

    let dns: Vec<u32> = result.segment_results.iter().map(|r| r.dn_mm).collect();
    assert_eq!(dns, [19, 13]);
    assert_eq!(result.bom.reduction_count(), 1);
    assert_eq!(result.bom.fitting_quantity(BomFittingKind::Reduction, 19), 1);
    assert_eq!(result.bom.pipe_length(19), 3.0);
    assert_eq!(result.bom.pipe_length(13), 5.0);
    assert_eq!(result.bom.accessory_quantity(SHUTOFF_VALVE_KEY), Some(2));
    assert_eq!(result.segment_results[1].cumulative_distance_m, 8.0);
}

#[test]
fn same_diameter_runs_merge_pipe_length() {
    let input = InstallationInput::new("natural", "steel")
        .with_outlet(Outlet::new("o1", "Kitchen", 3.0, "range", 4000.0))
        .with_outlet(Outlet::new("o2", "Laundry", 5.0, "water_heater", 4000.0));
    let result = compute_installation(&input, &three_size_catalog([1.5, 3.0, 6.0])).unwrap();

    assert_eq!(result.bom.pipe_length(13), 8.0);
    assert_eq!(result.bom.reduction_count(), 0);
}

#[test]
fn fittings_are_counted_at_the_chosen_diameter() {
    let fittings = FittingCounts {
        elbow_90: 2,
        valve: 1,
        ..Default::default()
    };
    let input = InstallationInput::new("natural", "steel")
        .with_outlet(Outlet::new("o1", "Kitchen", 3.0, "range", 9300.0).with_fittings(fittings));
    let result = compute_installation(&input, &three_size_catalog([1.5, 3.0, 6.0])).unwrap();

    // 3 m + 2 × 30 × 0.013 m = 3.78 m, still within the 5 m row.
    let seg = &result.segment_results[0];
    assert_eq!(seg.dn_mm, 13);
    assert!((seg.equivalent_length_m - 3.78).abs() < 1e-9);
    assert_eq!(result.bom.fitting_quantity(BomFittingKind::Elbow90, 13), 2);
    assert_eq!(result.bom.fitting_quantity(BomFittingKind::Valve, 13), 1);
}

#[test]
fn missing_fuel_fails_fast() {
    let input = InstallationInput::new("hydrogen", "steel");
    let err = compute_installation(&input, &three_size_catalog([1.5, 3.0, 6.0])).unwrap_err();
    assert_eq!(
        err,
        SizingError::Catalog(CatalogError::MissingFuel {
            id: "hydrogen".into()
        })
    );
    assert!(err.to_string().contains("hydrogen"));
}

#[test]
fn missing_pipe_system_fails_fast() {
    let input = InstallationInput::new("natural", "copper");
    let err = compute_installation(&input, &three_size_catalog([1.5, 3.0, 6.0])).unwrap_err();
    assert!(matches!(
        err,
        SizingError::Catalog(CatalogError::MissingPipeSystem { .. })
    ));
}

#[test]
fn missing_capacity_table_fails_fast() {
    let mut catalog = three_size_catalog([1.5, 3.0, 6.0]);
    catalog.capacity_tables[0].pressure_mbar = 28.0;
    let err = compute_installation(&single_outlet(1000.0), &catalog).unwrap_err();
    assert!(matches!(
        err,
        SizingError::Catalog(CatalogError::MissingCapacityTable { .. })
    ));
}

#[test]
fn malformed_rows_are_clamped_not_rejected() {
    let input = InstallationInput::new("natural", "steel")
        .with_outlet(Outlet::new("o1", "Kitchen", f64::NAN, "range", -50.0))
        .with_outlet(Outlet::new("o2", "Laundry", 4.0, "water_heater", 9300.0));
    let result = compute_installation(&input, &three_size_catalog([1.5, 3.0, 6.0])).unwrap();

    assert_eq!(result.segment_results[0].length_m, 0.0);
    assert_eq!(result.segment_results[0].flow_m3_h, 1.0);
    assert_eq!(result.totals.demand_kcal_h, 9300.0);
}

#[test]
fn reference_house_sizes_without_warnings() {
    let elbows = FittingCounts {
        elbow_90: 2,
        ..Default::default()
    };
    let input = InstallationInput::new("natural", "steel_epoxy")
        .with_outlet(Outlet::new("o1", "Kitchen", 4.0, "range", 7000.0).with_fittings(elbows))
        .with_outlet(Outlet::new("o2", "Laundry", 6.0, "storage_water_heater", 5500.0))
        .with_outlet(Outlet::new("o3", "Living room", 5.0, "space_heater", 3000.0));
    let result = compute_installation(&input, &reference_catalog()).unwrap();

    assert_eq!(result.segment_results.len(), 3);
    assert!(!result.has_warnings());
    for pair in result.segment_results.windows(2) {
        assert!(pair[0].dn_mm >= pair[1].dn_mm);
    }
    for seg in &result.segment_results {
        assert!(seg.utilization <= 1.0);
    }
    assert_eq!(result.totals.demand_kcal_h, 15_500.0);
    assert_eq!(result.bom.accessory_quantity(SHUTOFF_VALVE_KEY), Some(3));
}

#[test]
fn lpg_needs_smaller_pipes_than_natural_gas() {
    let outlet = Outlet::new("o1", "Kitchen", 10.0, "boiler", 25_000.0);
    let natural = InstallationInput::new("natural", "steel_epoxy").with_outlet(outlet.clone());
    let lpg = InstallationInput::new("lpg", "steel_epoxy").with_outlet(outlet);
    let catalog = reference_catalog();

    let natural = compute_installation(&natural, &catalog).unwrap();
    let lpg = compute_installation(&lpg, &catalog).unwrap();
    assert!(lpg.segment_results[0].flow_m3_h < natural.segment_results[0].flow_m3_h);
    assert!(lpg.segment_results[0].dn_mm <= natural.segment_results[0].dn_mm);
}

#[test]
fn result_serializes_to_json() {
    let result = compute_installation(&single_outlet(18_600.0), &three_size_catalog([1.5, 3.0, 6.0]))
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["segment_results"][0]["dn_mm"], 19);
    assert_eq!(json["bom"][0]["type"], "pipe");
    assert_eq!(json["totals"]["flow_m3_h"], 2.0);
    assert!(json["segment_results"][0].get("warning").is_none());
}

#[test]
fn tiny_demand_on_zero_capacity_is_flagged_and_over_utilized() {
    let mut catalog = three_size_catalog([0.0, 0.0, 0.0]);
    catalog.pipe_systems[0].diameters.truncate(1);
    let result = compute_installation(&single_outlet(1e-9), &catalog).unwrap();

    let seg = &result.segment_results[0];
    assert!(seg.flow_m3_h > 0.0);
    assert_eq!(seg.capacity_m3_h, 0.0);
    assert_eq!(seg.utilization, f64::INFINITY);
    assert_eq!(seg.utilization > 1.0, seg.warning.is_some());
}

#[test]
fn huge_fitting_counts_do_not_panic() {
    let fittings = FittingCounts {
        elbow_90: u32::MAX,
        tee: 1,
        ..Default::default()
    };
    let input = InstallationInput::new("natural", "steel")
        .with_outlet(Outlet::new("o1", "Kitchen", 3.0, "range", 9300.0).with_fittings(fittings))
        .with_outlet(Outlet::new("o2", "Laundry", 3.0, "range", 9300.0).with_fittings(fittings));
    let result = compute_installation(&input, &three_size_catalog([1.5, 3.0, 6.0])).unwrap();

    let seg = &result.segment_results[0];
    assert!(seg.equivalent_length_m > 1.0e8);
    assert_eq!(seg.utilization > 1.0, seg.warning.is_some());
    let elbows: u32 = [13, 19, 25]
        .into_iter()
        .map(|dn| result.bom.fitting_quantity(BomFittingKind::Elbow90, dn))
        .max()
        .unwrap();
    assert_eq!(elbows, u32::MAX);
}

#[test]
fn overflowing_demand_still_loads_the_upstream_run() {
    let input = InstallationInput::new("natural", "steel")
        .with_outlet(Outlet::new("o1", "Kitchen", 3.0, "boiler", f64::MAX))
        .with_outlet(Outlet::new("o2", "Laundry", 3.0, "boiler", f64::MAX));
    let result = compute_installation(&input, &three_size_catalog([1.5, 3.0, 6.0])).unwrap();

    let segs = &result.segment_results;
    assert!(segs[0].flow_m3_h.is_finite());
    assert!(segs[0].flow_m3_h >= segs[1].flow_m3_h);
    assert!(segs.iter().all(|s| s.dn_mm == 25 && s.warning.is_some()));
    assert_eq!(result.bom.reduction_count(), 0);
    assert!(result.totals.flow_m3_h.is_finite());
}
