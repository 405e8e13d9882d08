//! sr-core: shared foundation for shortroute.
//!
//! Contains:
//! - numeric (Real + tolerances + distance helpers)
//! - ids (compact IDs for registered locations)
//! - error (shared error types)
//! - timing (opt-in query timing)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod timing;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SrError, SrResult};
pub use ids::*;
pub use numeric::*;
