//! Keyboard layout assembly plan.
//!
//! Each parsed key is matched to the most specific generated component:
//! a labeled size for its row and legend, a labeled size for its legend,
//! a plain size for its row, and finally a plain size. Matches are placed
//! on the layout grid, misses are reported together at the end.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::constants::COMPONENT_NAME_LAYOUT;
use crate::models::{Placement, Position, Spacing};
use crate::naming::{find_name, specificity_chain, SizeName};

/// Result of planning a layout assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPlan {
    /// Name of the layout assembly
    pub assembly: String,
    /// Components to instantiate, in layout order
    pub placements: Vec<Placement>,
    /// Keys for which no component was found
    pub missing: Vec<Position>,
}

impl LayoutPlan {
    /// Whether every key was placed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Finds the component for one key.
///
/// Labeled lookups only consult `labeled`, unlabeled lookups only `sizes`.
/// Returns the component name and whether it is a labeled variant.
pub fn resolve_position<'a, S: AsRef<str>>(
    position: &Position,
    sizes: &'a [S],
    labeled: Option<&'a [S]>,
) -> Option<(&'a str, bool)> {
    let key = SizeName::from_parts(
        position.size_code(),
        Some(position.row.as_str()),
        Some(position.label.as_str()),
    );

    specificity_chain(&key).into_iter().find_map(|level| {
        let is_labeled = level.label.is_some();
        let pool = if is_labeled { labeled } else { Some(sizes) };
        pool.and_then(|candidates| find_name(&level, candidates))
            .map(|component| (component, is_labeled))
    })
}

/// Plans the placement of every key of a layout.
pub fn plan_layout<S: AsRef<str>>(
    positions: &[Position],
    sizes: &[S],
    labeled: Option<&[S]>,
    spacing: &Spacing,
) -> LayoutPlan {
    let mut plan = LayoutPlan {
        assembly: COMPONENT_NAME_LAYOUT.to_string(),
        placements: Vec::with_capacity(positions.len()),
        missing: Vec::new(),
    };

    for position in positions {
        match resolve_position(position, sizes, labeled) {
            Some((component, is_labeled)) => {
                debug!(
                    "Key '{}' (row {}, {}) -> {component}",
                    position.label,
                    position.row,
                    position.size_code()
                );
                plan.placements
                    .push(Placement::new(position, component, spacing).with_labeled(is_labeled));
            }
            None => plan.missing.push(position.clone()),
        }
    }

    if !plan.missing.is_empty() {
        let keys: Vec<String> = plan
            .missing
            .iter()
            .map(|p| format!("{} ({})", p.label, p.size_code()))
            .collect();
        warn!("No component found for: {}", keys.join("; "));
    }
    info!(
        "Planned {} of {} keys",
        plan.placements.len(),
        positions.len()
    );

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_layout;

    #[test]
    fn test_labeled_sizes_take_precedence() {
        let positions = parse_layout(r#"["Q","W"],[{w:2.25},"Enter"]"#).unwrap();
        let sizes = ["1_00U", "2_25U"];
        let labeled = ["R0-1_00U+Q", "1_00U+W"];

        let plan = plan_layout(&positions, &sizes, Some(&labeled[..]), &Spacing::uniform(1.9));

        assert!(plan.is_complete());
        assert_eq!(plan.assembly, "KCG-Layout-Assembly");
        let components: Vec<(&str, bool)> = plan
            .placements
            .iter()
            .map(|p| (p.component.as_str(), p.labeled))
            .collect();
        assert_eq!(
            components,
            vec![("R0-1_00U+Q", true), ("1_00U+W", true), ("2_25U", false)]
        );
    }

    #[test]
    fn test_row_sizes_beat_plain_sizes() {
        let positions = parse_layout(r#"["A"],["B"]"#).unwrap();
        let sizes = ["1_00U", "R1-1_00U"];

        let plan = plan_layout(&positions, &sizes, None, &Spacing::default());

        assert_eq!(plan.placements[0].component, "1_00U");
        assert_eq!(plan.placements[1].component, "R1-1_00U");
    }

    #[test]
    fn test_placements_use_spacing() {
        let positions = parse_layout(r#"["A",{w:2},"B"],["C"]"#).unwrap();
        let sizes = ["1_00U", "2_00U"];

        let plan = plan_layout(&positions, &sizes, None, &Spacing::uniform(2.0));

        let b = &plan.placements[1];
        assert_eq!(b.component, "2_00U");
        assert!((b.translate_x - 3.0).abs() < 1e-9);
        assert!((plan.placements[2].translate_y + 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_keys_are_collected() {
        let positions = parse_layout(r#"["A",{w:6.25},"Spc","B"]"#).unwrap();
        let sizes = ["1_00U"];

        let plan = plan_layout(&positions, &sizes, None, &Spacing::default());

        assert_eq!(plan.placements.len(), 2);
        assert_eq!(plan.missing.len(), 1);
        assert_eq!(plan.missing[0].label, "Spc");
        assert!(!plan.is_complete());
    }
}
