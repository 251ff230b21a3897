//! Data models for parsed layouts and generation plans.
//!
//! Models are plain values with no knowledge of the CAD host; the planning
//! services turn them into instructions the host executes.

pub mod placement;
pub mod position;
pub mod stem;

// Re-export all model types
pub use placement::{Placement, Spacing};
pub use position::{width_to_size_code, Position};
pub use stem::{default_stem_offsets, StemOffset};
