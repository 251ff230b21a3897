//! Base keycap size generation plan.
//!
//! Every size is built from the two halves of a 1U keycap: the halves are
//! pushed apart along X and the gap is closed by extruding a connector
//! profile. The host executes the plan, this module only names and measures.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::validate_sizes;
use crate::constants::COMPONENT_NAME_SIZES;
use crate::naming::{join_affixes, SizeName};

/// Geometry instructions for one generated size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeBody {
    /// Size code
    pub size: u32,
    /// Component name the body is stored under
    pub name: String,
    /// Length of the extruded connector between the halves (0 for 1U)
    pub connector_length: f64,
    /// X translation of the left half
    pub left_offset: f64,
    /// X translation of the right half
    pub right_offset: f64,
}

impl SizeBody {
    /// Measures a body for `size` at the given unit pitch.
    #[must_use]
    pub fn new(size: u32, name: String, spacing_1u: f64) -> Self {
        let connector_length = (f64::from(size) / 100.0 - 1.0) * spacing_1u;
        let (left_offset, right_offset) = if size > 100 {
            (-connector_length / 2.0, connector_length / 2.0)
        } else {
            (0.0, 0.0)
        };
        Self {
            size,
            name,
            connector_length: if size > 100 { connector_length } else { 0.0 },
            left_offset,
            right_offset,
        }
    }

    /// Whether a connector has to be extruded.
    #[must_use]
    pub fn has_connector(&self) -> bool {
        self.size > 100
    }
}

/// Plan for generating a batch of sizes into one assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizesPlan {
    /// Name for a newly created sizes assembly
    pub assembly: String,
    /// Bodies to generate, in request order
    pub bodies: Vec<SizeBody>,
    /// Existing components to delete before regenerating
    pub stale: Vec<String>,
}

/// Name of the sizes assembly for an optional generation prefix.
#[must_use]
pub fn sizes_assembly_name(prefix: Option<&str>) -> String {
    join_affixes(&[COMPONENT_NAME_SIZES, prefix.unwrap_or_default()])
}

/// Plans the generation of `sizes`.
///
/// `existing` lists the component names already present in the target
/// assembly; every name starting with a regenerated component's name is
/// reported as stale.
pub fn plan_sizes<S: AsRef<str>>(
    sizes: &[u32],
    prefix: Option<&str>,
    row: Option<&str>,
    spacing_1u: f64,
    existing: &[S],
) -> Result<SizesPlan> {
    if sizes.is_empty() {
        anyhow::bail!("No keycap sizes requested");
    }
    if spacing_1u <= 0.0 {
        anyhow::bail!("1U spacing must be positive, got {spacing_1u}");
    }
    validate_sizes(sizes)?;

    let mut bodies = Vec::with_capacity(sizes.len());
    let mut stale = Vec::new();

    for &size in sizes {
        let name = SizeName::new(size).with_row(row).with_prefix(prefix);

        for existing_name in existing.iter().map(|n| n.as_ref()) {
            if existing_name.starts_with(&name) && !stale.iter().any(|s| s == existing_name) {
                debug!("Replacing existing component {existing_name}");
                stale.push(existing_name.to_string());
            }
        }

        bodies.push(SizeBody::new(size, name, spacing_1u));
    }

    info!(
        "Planned {} sizes ({} stale components)",
        bodies.len(),
        stale.len()
    );

    Ok(SizesPlan {
        assembly: sizes_assembly_name(prefix),
        bodies,
        stale,
    })
}
