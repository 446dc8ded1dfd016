//! Purchasable material rows and their aggregation across jobs.

use std::collections::HashMap;

use gl_core::numeric::round2;
use gl_core::units::Unit;
use gl_sizing::{BillOfMaterials, BomEntry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialRow {
    /// Stable grouping key; rows without one group by label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub label: String,
    pub quantity: f64,
    pub unit: Unit,
}

impl MaterialRow {
    pub fn new(key: impl Into<String>, label: impl Into<String>, quantity: f64, unit: Unit) -> Self {
        Self {
            key: Some(key.into()),
            label: label.into(),
            quantity,
            unit,
        }
    }

    pub fn unkeyed(label: impl Into<String>, quantity: f64, unit: Unit) -> Self {
        Self {
            key: None,
            label: label.into(),
            quantity,
            unit,
        }
    }

    fn group(&self) -> (String, Unit) {
        let id = match &self.key {
            Some(key) => format!("k:{key}"),
            None => format!("l:{}", self.label.to_lowercase()),
        };
        (id, self.unit)
    }
}

/// Flatten a bill of materials into rows, in BOM order.
///
/// Rows with nothing to buy are left out.
pub fn bom_material_rows(bom: &BillOfMaterials) -> Vec<MaterialRow> {
    bom.iter()
        .map(|entry| match entry {
            BomEntry::Pipe { dn_mm, length_m } => MaterialRow::new(
                format!("pipe_dn{dn_mm}"),
                format!("Pipe DN {dn_mm}"),
                round2(*length_m),
                Unit::M,
            ),
            BomEntry::Fitting {
                kind,
                dn_mm,
                quantity,
            } => MaterialRow::new(
                format!("{}_dn{dn_mm}", kind.key()),
                format!("{} DN {dn_mm}", kind.label()),
                f64::from(*quantity),
                Unit::U,
            ),
            BomEntry::Accessory {
                key,
                label,
                quantity,
                unit,
            } => MaterialRow::new(key.clone(), label.clone(), f64::from(*quantity), *unit),
        })
        .filter(|row| row.quantity.is_finite() && row.quantity > 0.0)
        .collect()
}

/// Merge rows that describe the same material.
///
/// Rows match on key when they have one, otherwise on case-insensitive
/// label, and always on unit. The first row of each group keeps its position
/// and label; quantities are summed and rounded to 2 decimals.
pub fn aggregate_materials<I>(rows: I) -> Vec<MaterialRow>
where
    I: IntoIterator<Item = MaterialRow>,
{
    let mut merged: Vec<MaterialRow> = Vec::new();
    let mut index: HashMap<(String, Unit), usize> = HashMap::new();

    for row in rows {
        let group = row.group();
        match index.get(&group) {
            Some(&i) => {
                let prev = &mut merged[i];
                prev.quantity = round2(prev.quantity + row.quantity);
            }
            None => {
                index.insert(group, merged.len());
                merged.push(row);
            }
        }
    }

    merged
}
