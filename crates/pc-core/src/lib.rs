//! pc-core: stable foundation for psychroflow.
//!
//! Contains:
//! - units (uom SI types + constructors for chart quantities)
//! - numeric (tolerances + float and grid helpers)

pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use numeric::*;
pub use units::*;
