//! Gas-line sizing: demand conversion, diameter selection and materials.
//!
//! The entry point is [`compute_installation`], which resolves the catalog,
//! builds the segment chain, picks the smallest sufficient diameter for each
//! segment and aggregates the bill of materials.
//!
//! ```
//! use gl_catalog::reference_catalog;
//! use gl_network::Outlet;
//! use gl_sizing::{InstallationInput, compute_installation};
//!
//! let input = InstallationInput::new("natural", "steel_epoxy")
//!     .with_outlet(Outlet::new("o1", "Kitchen", 4.0, "range", 7000.0));
//! let result = compute_installation(&input, &reference_catalog()).unwrap();
//! assert_eq!(result.segment_results.len(), 1);
//! assert!(!result.has_warnings());
//! ```

pub mod bom;
pub mod common;
pub mod demand;
pub mod engine;
pub mod equivalent;
pub mod error;
pub mod heat_load;
pub mod result;
pub mod selector;
pub mod traits;

pub use bom::{BillOfMaterials, BomEntry, BomFittingKind, SHUTOFF_VALVE_KEY, aggregate_bom};
pub use demand::{demand_to_flow, flow_for_calorific_value};
pub use engine::{InstallationInput, compute_installation, size_chain};
pub use equivalent::{equivalent_length, fittings_length};
pub use error::{SizingError, SizingResult};
pub use heat_load::{HeatLoad, RoomDimensions, estimate_heat_load};
pub use result::{ComputeResult, SegmentResult, SizingWarning, Totals};
pub use selector::{Selection, select_diameter};
pub use traits::CapacityModel;
