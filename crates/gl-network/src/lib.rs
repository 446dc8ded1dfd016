//! gl-network: installation topology for gasline.
//!
//! Provides:
//! - Outlets as entered by the user (location, run length, appliance, fittings)
//! - Segments derived from them with downstream demand and distance from the meter
//! - A builder that turns the outlet list into a segment chain
//!
//! The network is a single non-branching chain stored as an ordered `Vec`;
//! there is no graph. Segment `i` serves outlet `i` and everything beyond it.
//!
//! # Example
//!
//! ```
//! use gl_catalog::FittingCounts;
//! use gl_network::ChainBuilder;
//!
//! let mut builder = ChainBuilder::new();
//! builder.add_outlet("o1", "Kitchen", 4.0, "range", 7_000.0, FittingCounts::default());
//! builder.add_outlet("o2", "Bath", 3.0, "tankless_water_heater", 20_000.0, FittingCounts::default());
//! let chain = builder.build();
//!
//! assert_eq!(chain.segments()[0].downstream_demand_kcal_h, 27_000.0);
//! assert_eq!(chain.segments()[1].cumulative_distance_m, 7.0);
//! ```

pub mod builder;
pub mod outlet;
pub mod segment;

// Re-exports for ergonomics
pub use builder::{ChainBuilder, METER_LABEL, build_chain};
pub use outlet::{ApplianceRef, Outlet};
pub use segment::{Segment, SegmentChain};
