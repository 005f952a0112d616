//! on-core: stable foundation for ohmnet.
//!
//! Contains:
//! - units (uom resistance type + SI-suffix value parsing)
//! - numeric (Real + tolerances + float helpers)
//! - ids (compact component handles)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::OnError;
pub use ids::*;
pub use numeric::*;
pub use units::*;
