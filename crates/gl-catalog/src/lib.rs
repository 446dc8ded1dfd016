//! gl-catalog: immutable reference data for gasline.
//!
//! Provides:
//! - Fuels with calorific value and supply conditions
//! - Pipe systems and their commercial diameters
//! - Fitting kinds, per-segment counts and equivalent-length factors
//! - Capacity tables (diameter × length → max flow) with ceiling-search lookup
//! - Appliance defaults and climate zones used to prefill input
//! - A built-in reference catalog
//!
//! All lookups are explicit and return `CatalogResult`; a missing key is a
//! configuration error, never a silent default.
//!
//! # Example
//!
//! ```
//! use gl_catalog::reference_catalog;
//! use gl_core::units::m;
//!
//! let catalog = reference_catalog();
//! let resolved = catalog.resolve("natural", "steel_epoxy").unwrap();
//! let q = resolved.capacity.capacity_at(19, m(5.0));
//! assert!(q > 0.0);
//! ```

pub mod appliance;
pub mod capacity;
pub mod catalog;
pub mod climate;
pub mod error;
pub mod fitting;
pub mod fuel;
pub mod pipe;
pub mod reference;

// Re-exports for ergonomics
pub use appliance::ApplianceCatalogEntry;
pub use capacity::{CapacityPoint, CapacityTable};
pub use catalog::{Catalog, ResolvedCatalog};
pub use climate::ClimateZone;
pub use error::{CatalogError, CatalogResult};
pub use fitting::{FittingCounts, FittingEquivalenceFactors, FittingKind};
pub use fuel::Fuel;
pub use pipe::{PipeDiameter, PipeSystem};
pub use reference::reference_catalog;
