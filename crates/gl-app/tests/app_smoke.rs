//! Smoke tests for the gl-app service layer over the demo jobs.

use std::path::PathBuf;

use gl_app::{load_catalog, load_job, materials_for_jobs, size_job, summarize_job, validate_job};
use gl_sizing::SHUTOFF_VALVE_KEY;

fn demo_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // go to crates
    path.pop(); // go to repo root
    path.push("demos");
    path.push("jobs");
    path.push(name);
    path
}

#[test]
fn demo_jobs_size_against_reference_catalog() {
    let catalog = load_catalog(None).unwrap();

    for name in ["01_apartment.yaml", "02_house.yaml", "03_lpg_cabin.json"] {
        let job = load_job(&demo_path(name)).unwrap_or_else(|e| panic!("{name}: {e}"));
        validate_job(&job).unwrap();

        let report = size_job(&job, &catalog).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(report.result.segment_results.len(), job.outlets.len(), "{name}");
        assert_eq!(report.warning_count(), 0, "{name}");

        let valves = report
            .materials
            .iter()
            .find(|r| r.key.as_deref() == Some(SHUTOFF_VALVE_KEY))
            .unwrap();
        assert_eq!(valves.quantity, job.outlets.len() as f64, "{name}");
    }
}

#[test]
fn house_demo_prefills_catalog_demands() {
    let job = load_job(&demo_path("02_house.yaml")).unwrap();
    let summary = summarize_job(&job);
    assert_eq!(summary.outlet_count, 4);
    assert_eq!(summary.prefilled_outlets, 2);
    assert_eq!(summary.total_distance_m, 22.5);

    let report = size_job(&job, &load_catalog(None).unwrap()).unwrap();
    // 7000 + 5500 + 3500 + 3000
    assert_eq!(report.result.totals.demand_kcal_h, 19_000.0);
    let dns: Vec<u32> = report.result.segment_results.iter().map(|r| r.dn_mm).collect();
    for pair in dns.windows(2) {
        assert!(pair[0] >= pair[1], "{dns:?}");
    }
}

#[test]
fn materials_merge_across_demo_jobs() {
    let catalog = load_catalog(None).unwrap();
    let jobs: Vec<_> = ["01_apartment.yaml", "02_house.yaml"]
        .into_iter()
        .map(|name| load_job(&demo_path(name)).unwrap())
        .collect();

    let rows = materials_for_jobs(&jobs, &catalog).unwrap();
    let valves = rows
        .iter()
        .filter(|r| r.key.as_deref() == Some(SHUTOFF_VALVE_KEY))
        .collect::<Vec<_>>();
    assert_eq!(valves.len(), 1);
    assert_eq!(valves[0].quantity, 6.0);

    let piped: f64 = rows
        .iter()
        .filter(|r| r.key.as_deref().is_some_and(|k| k.starts_with("pipe_dn")))
        .map(|r| r.quantity)
        .sum();
    assert!((piped - (7.5 + 22.5)).abs() < 1e-9);
}

#[test]
fn report_serializes_flat() {
    let job = load_job(&demo_path("01_apartment.yaml")).unwrap();
    let report = size_job(&job, &load_catalog(None).unwrap()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["job_name"], "Apartment 3B");
    assert!(json["segment_results"].is_array());
    assert!(json["bom"].is_array());
    assert!(json["materials"].is_array());
}
