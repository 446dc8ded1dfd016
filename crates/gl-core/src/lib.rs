//! gl-core: stable foundation for gasline.
//!
//! Contains:
//! - units (uom SI lengths + constructors, purchasable units)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{GlError, GlResult};
pub use numeric::*;
pub use units::*;
