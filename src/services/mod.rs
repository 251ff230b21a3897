//! Service layer for generation planning.
//!
//! Services combine parsed positions and the naming conventions into plans a
//! CAD host executes. They never touch geometry themselves and report lookup
//! misses in aggregate instead of failing on the first one.

pub mod layout;
pub mod legends;
pub mod names;
pub mod sizes;
pub mod stems;

// Re-export commonly used types and functions
pub use layout::{plan_layout, resolve_position, LayoutPlan};
pub use legends::{
    plan_legends, sketch_inventory, unique_labels, LabeledSize, LegendPlan, RowMode,
    SketchInventory,
};
pub use names::{load_names, parse_names};
pub use sizes::{plan_sizes, sizes_assembly_name, SizeBody, SizesPlan};
pub use stems::{plan_stems, StemPlacement, StemPlan};
