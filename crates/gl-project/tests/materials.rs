use gl_catalog::reference_catalog;
use gl_core::units::Unit;
use gl_network::Outlet;
use gl_project::{MaterialRow, aggregate_materials, bom_material_rows};
use gl_sizing::{InstallationInput, SHUTOFF_VALVE_KEY, compute_installation};
use proptest::prelude::*;

fn sized_rows(outlets: &[(f64, f64)]) -> Vec<MaterialRow> {
    let mut input = InstallationInput::new("natural", "steel_epoxy");
    for (i, &(distance, demand)) in outlets.iter().enumerate() {
        input = input.with_outlet(Outlet::new(format!("o{i}"), "", distance, "range", demand));
    }
    let result = compute_installation(&input, &reference_catalog()).unwrap();
    bom_material_rows(&result.bom)
}

#[test]
fn bom_flattens_into_keyed_rows() {
    let rows = sized_rows(&[(3.0, 7000.0), (5.0, 3000.0)]);

    let pipe = rows.iter().find(|r| r.key.as_deref() == Some("pipe_dn13")).unwrap();
    assert_eq!(pipe.unit, Unit::M);
    assert_eq!(pipe.quantity, 8.0);

    let valve = rows.last().unwrap();
    assert_eq!(valve.key.as_deref(), Some(SHUTOFF_VALVE_KEY));
    assert_eq!(valve.quantity, 2.0);
    assert_eq!(valve.unit, Unit::U);
}

#[test]
fn two_jobs_merge_into_one_list() {
    let a = sized_rows(&[(3.0, 7000.0)]);
    let b = sized_rows(&[(4.25, 3000.0)]);
    let merged = aggregate_materials(a.into_iter().chain(b));

    let pipe = merged.iter().find(|r| r.key.as_deref() == Some("pipe_dn13")).unwrap();
    assert_eq!(pipe.quantity, 7.25);
    let valves = merged
        .iter()
        .find(|r| r.key.as_deref() == Some(SHUTOFF_VALVE_KEY))
        .unwrap();
    assert_eq!(valves.quantity, 2.0);
}

proptest! {
    #[test]
    fn aggregation_preserves_totals(
        quantities in prop::collection::vec((0_usize..4, 0_u32..1000), 0..20),
    ) {
        let rows: Vec<MaterialRow> = quantities
            .iter()
            .map(|&(k, q)| MaterialRow::new(format!("item{k}"), format!("Item {k}"), f64::from(q) / 4.0, Unit::U))
            .collect();
        let total: f64 = rows.iter().map(|r| r.quantity).sum();

        let merged = aggregate_materials(rows);
        let merged_total: f64 = merged.iter().map(|r| r.quantity).sum();

        prop_assert!(merged.len() <= 4);
        prop_assert!((total - merged_total).abs() < 1e-9);
        let again = aggregate_materials(merged.clone());
        prop_assert_eq!(again, merged);
    }
}

#[test]
fn empty_job_has_nothing_to_buy() {
    assert!(sized_rows(&[]).is_empty());
}
