//! Layout command for planning the keyboard assembly.

use crate::cli::common::{
    format_units, print_json, read_layout, read_names, CandidateArgs, CliError, CliResult,
};
use crate::config::Config;
use crate::models::Spacing;
use crate::services::plan_layout;
use clap::Args;
use std::path::PathBuf;

/// Place a generated component on every key of a layout
#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Path to the raw layout data
    #[arg(long, value_name = "FILE")]
    pub layout: PathBuf,

    #[command(flatten)]
    pub candidates: CandidateArgs,

    /// File listing labeled keycap components
    #[arg(long, value_name = "FILE")]
    pub labeled: Option<PathBuf>,

    /// Horizontal pitch of one unit (overrides the configuration)
    #[arg(long, value_name = "MM")]
    pub spacing_x: Option<f64>,

    /// Vertical pitch of one unit (overrides the configuration)
    #[arg(long, value_name = "MM")]
    pub spacing_y: Option<f64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl LayoutArgs {
    fn spacing(&self, config: &Config) -> CliResult<Spacing> {
        let defaults = config.sizing.spacing();
        let spacing = Spacing {
            horizontal: self.spacing_x.unwrap_or(defaults.horizontal),
            vertical: self.spacing_y.unwrap_or(defaults.vertical),
        };
        if spacing.horizontal > 0.0 && spacing.vertical > 0.0 {
            Ok(spacing)
        } else {
            Err(CliError::validation("Spacing must be positive"))
        }
    }

    /// Execute the layout command.
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let spacing = self.spacing(config)?;
        let positions = read_layout(&self.layout)?;
        let sizes = self.candidates.load()?;
        let labeled = match &self.labeled {
            Some(path) => Some(read_names(path)?),
            None => None,
        };

        let plan = plan_layout(&positions, &sizes, labeled.as_deref(), &spacing);

        if self.json {
            print_json(&plan)?;
        } else {
            println!("Assembly: {}", plan.assembly);
            for placement in &plan.placements {
                println!(
                    "  {:<24} at ({}, {})",
                    placement.component,
                    format_units(placement.translate_x),
                    format_units(placement.translate_y)
                );
            }
        }

        if plan.is_complete() {
            Ok(())
        } else {
            let keys: Vec<String> = plan
                .missing
                .iter()
                .map(|p| format!("{} ({})", p.label, p.size_code()))
                .collect();
            Err(CliError::validation(format!(
                "No component found for: {}",
                keys.join(", ")
            )))
        }
    }
}
