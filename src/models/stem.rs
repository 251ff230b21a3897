//! Stabilizer stem offsets.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_STEM_OFFSETS;

/// Offset of a stabilizer stem from the key centre for one keycap size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StemOffset {
    /// Size code the offset applies to
    pub size: u32,
    /// Distance from the key centre along X
    pub offset: f64,
    /// Mirror the stem across the YZ plane
    #[serde(default = "default_symmetric")]
    pub symmetric: bool,
}

fn default_symmetric() -> bool {
    true
}

impl StemOffset {
    /// Creates a symmetric stem offset.
    #[must_use]
    pub const fn new(size: u32, offset: f64) -> Self {
        Self {
            size,
            offset,
            symmetric: true,
        }
    }

    /// X positions of every stem body this offset produces.
    #[must_use]
    pub fn stem_positions(&self) -> Vec<f64> {
        if self.symmetric {
            vec![self.offset, -self.offset]
        } else {
            vec![self.offset]
        }
    }

    /// Parses a `SIZE:OFFSET[:asym]` table row.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let parts: Vec<&str> = text.split(':').collect();
        if parts.len() < 2 || parts.len() > 3 {
            anyhow::bail!("Expected SIZE:OFFSET[:asym], got '{text}'");
        }
        let size = parts[0]
            .trim()
            .parse::<u32>()
            .map_err(|e| anyhow::anyhow!("Invalid stem size '{}': {e}", parts[0]))?;
        let offset = parts[1]
            .trim()
            .parse::<f64>()
            .map_err(|e| anyhow::anyhow!("Invalid stem offset '{}': {e}", parts[1]))?;
        if !offset.is_finite() {
            anyhow::bail!("Stem offset '{}' is not a finite number", parts[1]);
        }
        let symmetric = match parts.get(2).map(|s| s.trim()) {
            None | Some("sym") => true,
            Some("asym") => false,
            Some(other) => anyhow::bail!("Unknown stem mode '{other}' (use sym or asym)"),
        };
        Ok(Self {
            size,
            offset,
            symmetric,
        })
    }
}

/// Default stem offset table for the common stabilized sizes.
#[must_use]
pub fn default_stem_offsets() -> Vec<StemOffset> {
    DEFAULT_STEM_OFFSETS
        .iter()
        .map(|&(size, offset)| StemOffset::new(size, offset))
        .collect()
}
