//! Stabilizer stem plan for wide keycaps.

use serde::Serialize;
use tracing::{info, warn};

use crate::models::StemOffset;
use crate::naming::{find_name, SizeName};

/// Stems to add to one generated size component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StemPlacement {
    /// Size code
    pub size: u32,
    /// Component receiving the stems
    pub component: String,
    /// X offsets of the stem bodies; the second one is the mirrored copy
    pub positions: Vec<f64>,
}

/// Result of planning stems for an offset table.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StemPlan {
    /// Stems per size component
    pub stems: Vec<StemPlacement>,
    /// Sizes for which no component was found
    pub missing: Vec<u32>,
}

impl StemPlan {
    /// Whether every requested size was found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Matches every row of `offsets` to a generated size among `candidates`.
pub fn plan_stems<S: AsRef<str>>(offsets: &[StemOffset], candidates: &[S]) -> StemPlan {
    let mut plan = StemPlan::default();

    for stem in offsets {
        match find_name(&SizeName::new(stem.size), candidates) {
            Some(component) => plan.stems.push(StemPlacement {
                size: stem.size,
                component: component.to_string(),
                positions: stem.stem_positions(),
            }),
            None => plan.missing.push(stem.size),
        }
    }

    if !plan.missing.is_empty() {
        let missing: Vec<String> = plan.missing.iter().map(ToString::to_string).collect();
        warn!("Sizes not found for stems: {}", missing.join("; "));
    }
    info!("Planned stems for {} sizes", plan.stems.len());

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_stem_offsets;

    #[test]
    fn test_stems_for_generated_sizes() {
        let candidates = ["1_00U", "2_25U", "6_25U:1"];
        let plan = plan_stems(&default_stem_offsets(), &candidates);

        assert_eq!(plan.stems.len(), 2);
        assert_eq!(plan.stems[0].component, "2_25U");
        assert_eq!(plan.stems[0].positions, vec![1.1938, -1.1938]);
        assert_eq!(plan.stems[1].component, "6_25U:1");
        assert_eq!(plan.missing, vec![200, 275, 300, 700]);
        assert!(!plan.is_complete());
    }

    #[test]
    fn test_asymmetric_stem_is_not_mirrored() {
        let offsets = [StemOffset {
            size: 200,
            offset: 1.0,
            symmetric: false,
        }];
        let plan = plan_stems(&offsets, &["KCG_2_00U"]);
        assert!(plan.is_complete());
        assert_eq!(plan.stems[0].positions, vec![1.0]);
    }

    #[test]
    fn test_size_does_not_match_longer_number() {
        let offsets = [StemOffset::new(200, 1.0)];
        let plan = plan_stems(&offsets, &["12_00U"]);
        assert_eq!(plan.missing, vec![200]);
    }
}
