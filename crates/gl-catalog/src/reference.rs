//! Built-in reference catalog.
//!
//! Capacities follow Pole's low-pressure formula for a 10 mmH2O (natural gas)
//! and 15 mmH2O (LPG) drop, rounded to 0.01 m³/h. Values are for preliminary
//! sizing; check them against the governing installation code before use.

use std::collections::BTreeMap;

use crate::appliance::ApplianceCatalogEntry;
use crate::capacity::{CapacityPoint, CapacityTable};
use crate::catalog::Catalog;
use crate::climate::ClimateZone;
use crate::fitting::{FittingEquivalenceFactors, FittingKind};
use crate::fuel::Fuel;
use crate::pipe::{PipeDiameter, PipeSystem};

type Rows = &'static [(u32, &'static [(f64, f64)])];

#[rustfmt::skip]
const NATURAL_20_MBAR: Rows = &[
    (13, &[(2.0, 1.86), (4.0, 1.31), (6.0, 1.07), (8.0, 0.93), (10.0, 0.83), (15.0, 0.68), (20.0, 0.59), (25.0, 0.53), (30.0, 0.48), (40.0, 0.42), (50.0, 0.37)]),
    (19, &[(2.0, 4.8), (4.0, 3.39), (6.0, 2.77), (8.0, 2.4), (10.0, 2.15), (15.0, 1.75), (20.0, 1.52), (25.0, 1.36), (30.0, 1.24), (40.0, 1.07), (50.0, 0.96)]),
    (25, &[(2.0, 9.53), (4.0, 6.74), (6.0, 5.5), (8.0, 4.77), (10.0, 4.26), (15.0, 3.48), (20.0, 3.01), (25.0, 2.7), (30.0, 2.46), (40.0, 2.13), (50.0, 1.91)]),
    (32, &[(2.0, 17.67), (4.0, 12.5), (6.0, 10.2), (8.0, 8.84), (10.0, 7.9), (15.0, 6.45), (20.0, 5.59), (25.0, 5.0), (30.0, 4.56), (40.0, 3.95), (50.0, 3.53)]),
    (38, &[(2.0, 27.16), (4.0, 19.2), (6.0, 15.68), (8.0, 13.58), (10.0, 12.14), (15.0, 9.92), (20.0, 8.59), (25.0, 7.68), (30.0, 7.01), (40.0, 6.07), (50.0, 5.43)]),
    (51, &[(2.0, 56.67), (4.0, 40.07), (6.0, 32.72), (8.0, 28.33), (10.0, 25.34), (15.0, 20.69), (20.0, 17.92), (25.0, 16.03), (30.0, 14.63), (40.0, 12.67), (50.0, 11.33)]),
];

#[rustfmt::skip]
const LPG_28_MBAR: Rows = &[
    (13, &[(2.0, 1.49), (4.0, 1.05), (6.0, 0.86), (8.0, 0.74), (10.0, 0.67), (15.0, 0.54), (20.0, 0.47), (25.0, 0.42), (30.0, 0.38), (40.0, 0.33), (50.0, 0.3)]),
    (19, &[(2.0, 3.84), (4.0, 2.72), (6.0, 2.22), (8.0, 1.92), (10.0, 1.72), (15.0, 1.4), (20.0, 1.22), (25.0, 1.09), (30.0, 0.99), (40.0, 0.86), (50.0, 0.77)]),
    (25, &[(2.0, 7.64), (4.0, 5.4), (6.0, 4.41), (8.0, 3.82), (10.0, 3.41), (15.0, 2.79), (20.0, 2.41), (25.0, 2.16), (30.0, 1.97), (40.0, 1.71), (50.0, 1.53)]),
    (32, &[(2.0, 14.15), (4.0, 10.01), (6.0, 8.17), (8.0, 7.08), (10.0, 6.33), (15.0, 5.17), (20.0, 4.48), (25.0, 4.0), (30.0, 3.65), (40.0, 3.16), (50.0, 2.83)]),
    (38, &[(2.0, 21.75), (4.0, 15.38), (6.0, 12.56), (8.0, 10.88), (10.0, 9.73), (15.0, 7.94), (20.0, 6.88), (25.0, 6.15), (30.0, 5.62), (40.0, 4.86), (50.0, 4.35)]),
    (51, &[(2.0, 45.39), (4.0, 32.09), (6.0, 26.2), (8.0, 22.69), (10.0, 20.3), (15.0, 16.57), (20.0, 14.35), (25.0, 12.84), (30.0, 11.72), (40.0, 10.15), (50.0, 9.08)]),
];

const STEEL_EPOXY: &[(u32, f64)] = &[
    (13, 15.8),
    (19, 20.9),
    (25, 26.6),
    (32, 35.1),
    (38, 40.9),
    (51, 52.5),
];

const FUSION_PE: &[(u32, f64)] = &[(19, 16.2), (25, 20.4), (32, 26.0), (38, 32.6), (51, 40.8)];

const APPLIANCES: &[(&str, &str, f64)] = &[
    ("range", "Kitchen range with oven", 7_000.0),
    ("cooktop", "Cooktop", 4_500.0),
    ("oven", "Built-in oven", 3_000.0),
    ("tankless_water_heater", "Tankless water heater", 20_000.0),
    ("storage_water_heater", "Storage water heater", 5_500.0),
    ("space_heater", "Balanced-flue space heater", 3_000.0),
    ("boiler", "Dual-service boiler", 25_000.0),
    ("grill", "Barbecue grill", 8_000.0),
];

const CLIMATE_ZONES: &[(&str, &str, f64)] = &[
    ("zone_i", "Zone I - very warm", 1.6),
    ("zone_ii", "Zone II - warm", 1.8),
    ("zone_iii", "Zone III - temperate warm", 2.0),
    ("zone_iv", "Zone IV - temperate cold", 2.4),
    ("zone_v", "Zone V - cold", 2.8),
    ("zone_vi", "Zone VI - very cold", 3.2),
];

fn capacity_table(fuel_id: &str, pressure_mbar: f64, rows: Rows) -> CapacityTable {
    let diameters_mm: BTreeMap<u32, Vec<CapacityPoint>> = rows
        .iter()
        .map(|&(dn, points)| {
            let points = points
                .iter()
                .map(|&(length_m, flow_m3_h)| CapacityPoint::new(length_m, flow_m3_h))
                .collect();
            (dn, points)
        })
        .collect();
    CapacityTable {
        fuel_id: fuel_id.to_string(),
        pressure_mbar,
        diameters_mm,
    }
}

fn pipe_system(id: &str, label: &str, sizes: &[(u32, f64)]) -> PipeSystem {
    PipeSystem {
        id: id.to_string(),
        label: label.to_string(),
        diameters: sizes
            .iter()
            .map(|&(dn_mm, inner_mm)| PipeDiameter { dn_mm, inner_mm })
            .collect(),
    }
}

/// The catalog shipped with gasline: natural gas and LPG, two pipe systems,
/// common residential appliances and six climate zones.
pub fn reference_catalog() -> Catalog {
    Catalog {
        fuels: vec![
            Fuel {
                id: "natural".to_string(),
                label: "Natural gas".to_string(),
                calorific_value_kcal_m3: 9_300.0,
                supply_pressure_mbar: 20.0,
                max_pressure_drop_mbar: 1.0,
            },
            Fuel {
                id: "lpg".to_string(),
                label: "Liquefied petroleum gas".to_string(),
                calorific_value_kcal_m3: 22_400.0,
                supply_pressure_mbar: 28.0,
                max_pressure_drop_mbar: 1.5,
            },
        ],
        pipe_systems: vec![
            pipe_system("steel_epoxy", "Epoxy-coated steel, threaded", STEEL_EPOXY),
            pipe_system("fusion_pe", "Polyethylene-aluminium, thermofusion", FUSION_PE),
        ],
        appliances: APPLIANCES
            .iter()
            .map(|&(id, label, demand)| ApplianceCatalogEntry {
                id: id.to_string(),
                label: label.to_string(),
                default_demand_kcal_h: demand,
            })
            .collect(),
        fittings: FittingEquivalenceFactors::new([
            (FittingKind::Elbow90, 30.0),
            (FittingKind::Elbow45, 15.0),
            (FittingKind::Tee, 60.0),
            (FittingKind::Valve, 12.0),
        ]),
        capacity_tables: vec![
            capacity_table("natural", 20.0, NATURAL_20_MBAR),
            capacity_table("lpg", 28.0, LPG_28_MBAR),
        ],
        climate_zones: CLIMATE_ZONES
            .iter()
            .map(|&(id, label, k)| ClimateZone {
                id: id.to_string(),
                label: label.to_string(),
                k_coefficient: k,
            })
            .collect(),
    }
}
