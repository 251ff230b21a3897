//! Legend application plan.
//!
//! A labeled size is a copy of a generated size with the legend sketch of the
//! same name embossed into its top. The copy is named after the size it was
//! taken from with the label appended, which is what the layout stage looks
//! for later.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::LegendConfig;
use crate::constants::{COMPONENT_NAME_LABELED, COMPONENT_NAME_LEGENDS};
use crate::models::Position;
use crate::naming::{append_label, find_name, strip_occurrence, SizeName};

/// Which row qualifier to use when looking up the size of a key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RowMode {
    /// Use row-less sizes
    None,
    /// Use the row each key was parsed from
    #[default]
    Auto,
    /// Use one fixed row for every key
    Fixed(String),
}

impl RowMode {
    /// Row qualifier for `position`.
    #[must_use]
    pub fn row_for<'a>(&'a self, position: &'a Position) -> Option<&'a str> {
        match self {
            Self::None => None,
            Self::Auto => Some(position.row.as_str()),
            Self::Fixed(row) => Some(row.as_str()),
        }
    }
}

impl FromStr for RowMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "none" | "" => Ok(Self::None),
            "auto" => Ok(Self::Auto),
            row if row.chars().all(|c| c.is_ascii_digit()) => Ok(Self::Fixed(row.to_string())),
            other => anyhow::bail!("Invalid row '{other}': expected none, auto or a row number"),
        }
    }
}

impl fmt::Display for RowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Auto => f.write_str("auto"),
            Self::Fixed(row) => f.write_str(row),
        }
    }
}

/// One labeled size to create.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledSize {
    /// Legend text, also the name of the sketch to copy
    pub label: String,
    /// Size code
    pub size: u32,
    /// Generated size the keycap body is copied from, as the host listed it
    pub source: String,
    /// Name of the new labeled component
    pub name: String,
    /// Name of the child component holding the copied sketch
    pub label_component: String,
}

/// Result of planning legends for a layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendPlan {
    /// Name of the labeled sizes assembly
    pub assembly: String,
    /// Labeled sizes to create, in layout order
    pub labeled: Vec<LabeledSize>,
    /// Labels without a legend sketch
    pub missing_labels: Vec<String>,
    /// Sizes without a generated component
    pub missing_sizes: Vec<u32>,
    /// Distance the legend sketch is extruded before cutting
    pub initial_extrude: f64,
    /// Depth of the embossed legend
    pub emboss_depth: f64,
}

impl LegendPlan {
    /// Whether the plan creates nothing; the host discards the assembly then.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labeled.is_empty()
    }

    /// Whether every key found both its sketch and its size.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_labels.is_empty() && self.missing_sizes.is_empty()
    }
}

/// Legend sketches the host has to create before legends can be applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SketchInventory {
    /// Name of the assembly holding the sketches
    pub assembly: String,
    /// One sketch per label, named exactly like the label
    pub labels: Vec<String>,
}

/// Builds the sketch inventory of a layout.
#[must_use]
pub fn sketch_inventory(positions: &[Position]) -> SketchInventory {
    SketchInventory {
        assembly: COMPONENT_NAME_LEGENDS.to_string(),
        labels: unique_labels(positions),
    }
}

/// Labels of a layout in first-appearance order, without duplicates.
///
/// These are the legend sketches the host has to provide.
#[must_use]
pub fn unique_labels(positions: &[Position]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for position in positions {
        if !labels.contains(&position.label) {
            labels.push(position.label.clone());
        }
    }
    labels
}

/// Plans one labeled size per layout key.
pub fn plan_legends<S: AsRef<str>, T: AsRef<str>>(
    positions: &[Position],
    row_mode: &RowMode,
    size_candidates: &[S],
    sketches: &[T],
    emboss: &LegendConfig,
) -> LegendPlan {
    let mut plan = LegendPlan {
        assembly: COMPONENT_NAME_LABELED.to_string(),
        labeled: Vec::new(),
        missing_labels: Vec::new(),
        missing_sizes: Vec::new(),
        initial_extrude: emboss.initial_extrude,
        emboss_depth: emboss.emboss_depth,
    };

    for position in positions {
        let size = position.size_code();

        if !sketches.iter().any(|s| s.as_ref() == position.label) {
            debug!("No legend sketch named '{}'", position.label);
            plan.missing_labels.push(position.label.clone());
            continue;
        }

        let key = SizeName::new(size).with_row(row_mode.row_for(position));
        let Some(source) = find_name(&key, size_candidates) else {
            debug!("No size component for {key}");
            plan.missing_sizes.push(size);
            continue;
        };

        let name = append_label(strip_occurrence(source), &position.label);
        plan.labeled.push(LabeledSize {
            label: position.label.clone(),
            size,
            source: source.to_string(),
            label_component: format!("{name}-Label"),
            name,
        });
    }

    if !plan.missing_labels.is_empty() {
        warn!("Legend sketches not found: {}", plan.missing_labels.join("; "));
    }
    if !plan.missing_sizes.is_empty() {
        let sizes: Vec<String> = plan.missing_sizes.iter().map(ToString::to_string).collect();
        warn!("Sizes not found for legends: {}", sizes.join("; "));
    }
    info!("Planned {} labeled sizes", plan.labeled.len());

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_layout;

    #[test]
    fn test_row_mode_parsing() {
        assert_eq!("none".parse::<RowMode>().unwrap(), RowMode::None);
        assert_eq!("auto".parse::<RowMode>().unwrap(), RowMode::Auto);
        assert_eq!("3".parse::<RowMode>().unwrap(), RowMode::Fixed("3".to_string()));
        assert!("row3".parse::<RowMode>().is_err());
        assert_eq!(RowMode::Fixed("2".to_string()).to_string(), "2");
    }

    #[test]
    fn test_unique_labels_keep_order() {
        let positions = parse_layout(r#"["Q","W"],["Q","A"]"#).unwrap();
        assert_eq!(unique_labels(&positions), vec!["Q", "W", "A"]);
    }

    #[test]
    fn test_sketch_inventory() {
        let positions = parse_layout(r#"["Esc","Esc"]"#).unwrap();
        let inventory = sketch_inventory(&positions);
        assert_eq!(inventory.assembly, "KCG-Legend-Sketches-Assembly");
        assert_eq!(inventory.labels, vec!["Esc"]);
    }

    #[test]
    fn test_auto_rows_name_after_source() {
        let positions = parse_layout(r#"["Q"],[{w:2.25},"Enter"]"#).unwrap();
        let sizes = ["dsa_R0-1_00U", "dsa_R1-2_25U"];
        let sketches = ["Q", "Enter"];

        let plan = plan_legends(
            &positions,
            &RowMode::Auto,
            &sizes,
            &sketches,
            &LegendConfig::default(),
        );

        assert!(plan.is_complete());
        assert_eq!(plan.assembly, "KCG-Labeled-Keycap-Assembly");
        assert_eq!(plan.labeled[0].name, "dsa_R0-1_00U+Q");
        assert_eq!(plan.labeled[1].source, "dsa_R1-2_25U");
        assert_eq!(plan.labeled[1].name, "dsa_R1-2_25U+Enter");
        assert_eq!(plan.labeled[1].label_component, "dsa_R1-2_25U+Enter-Label");
        assert_eq!(plan.emboss_depth, 0.05);
    }

    #[test]
    fn test_occurrence_suffix_is_not_part_of_the_name() {
        let positions = parse_layout(r#"[{w:2.25},"Enter"]"#).unwrap();
        let plan = plan_legends(
            &positions,
            &RowMode::None,
            &["2_25U:1"],
            &["Enter"],
            &LegendConfig::default(),
        );

        assert!(plan.is_complete());
        assert_eq!(plan.labeled[0].source, "2_25U:1");
        assert_eq!(plan.labeled[0].name, "2_25U+Enter");
        assert_eq!(plan.labeled[0].label_component, "2_25U+Enter-Label");
    }

    #[test]
    fn test_labeled_names_are_found_by_layout() {
        use crate::models::Spacing;
        use crate::services::plan_layout;

        let positions = parse_layout(r#"["Q"],[{w:2.25},"Enter"]"#).unwrap();
        let sizes = ["R0-1_00U:1", "R1-2_25U:2"];
        let plan = plan_legends(
            &positions,
            &RowMode::Auto,
            &sizes,
            &["Q", "Enter"],
            &LegendConfig::default(),
        );
        let labeled: Vec<String> = plan.labeled.iter().map(|l| l.name.clone()).collect();
        let sizes: Vec<String> = sizes.iter().map(ToString::to_string).collect();

        let layout = plan_layout(&positions, &sizes, Some(&labeled[..]), &Spacing::default());

        assert!(layout.is_complete());
        let components: Vec<&str> = layout
            .placements
            .iter()
            .map(|p| p.component.as_str())
            .collect();
        assert_eq!(components, vec!["R0-1_00U+Q", "R1-2_25U+Enter"]);
        assert!(layout.placements.iter().all(|p| p.labeled));
    }

    #[test]
    fn test_missing_sketch_and_size_are_collected() {
        let positions = parse_layout(r#"["Q","W",{w:2},"Spc"]"#).unwrap();
        let plan = plan_legends(
            &positions,
            &RowMode::None,
            &["1_00U"],
            &["Q", "Spc"],
            &LegendConfig::default(),
        );

        assert_eq!(plan.labeled.len(), 1);
        assert_eq!(plan.labeled[0].name, "1_00U+Q");
        assert_eq!(plan.missing_labels, vec!["W"]);
        assert_eq!(plan.missing_sizes, vec![200]);
        assert!(!plan.is_complete());
    }

    #[test]
    fn test_fixed_row_requires_row_sizes() {
        let positions = parse_layout(r#"["Q"]"#).unwrap();
        let plan = plan_legends(
            &positions,
            &RowMode::Fixed("4".to_string()),
            &["1_00U", "R3-1_00U"],
            &["Q"],
            &LegendConfig::default(),
        );
        assert!(plan.is_empty());
        assert_eq!(plan.missing_sizes, vec![100]);
    }
}
