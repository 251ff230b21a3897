//! Naming conventions tying generated components together.
//!
//! Sizes, labeled sizes and the final layout are generated independently and
//! share no index. The canonical name of a component encodes its row, size
//! and label, and later stages find it again by matching that name.

pub mod format;
pub mod lookup;

pub use format::{
    append_label, canonical_name, format_size, join_affixes, strip_occurrence, SizeName,
};
pub use lookup::{find_name, resolve, resolve_name, search_pattern, specificity_chain, Resolution};
