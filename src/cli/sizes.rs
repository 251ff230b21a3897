//! Sizes command for planning base keycap generation.

use crate::cli::common::{format_units, print_json, read_names, CliError, CliResult};
use crate::config::Config;
use crate::services::plan_sizes;
use clap::Args;
use std::path::PathBuf;

/// Plan the generation of base keycap sizes
#[derive(Debug, Clone, Args)]
pub struct SizesArgs {
    /// Size code to generate (repeatable, defaults to the configured sizes)
    #[arg(long = "size", value_name = "N")]
    pub sizes: Vec<u32>,

    /// Generation prefix joined before every name
    #[arg(long, value_name = "P")]
    pub prefix: Option<String>,

    /// Row qualifier for every generated size
    #[arg(long, value_name = "R")]
    pub row: Option<u32>,

    /// File listing the components already in the target assembly
    #[arg(long, value_name = "FILE")]
    pub existing: Option<PathBuf>,

    /// Pitch of one unit (overrides the configuration)
    #[arg(long, value_name = "MM")]
    pub spacing: Option<f64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SizesArgs {
    /// Execute the sizes command.
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let sizes = if self.sizes.is_empty() {
            &config.sizing.sizes
        } else {
            &self.sizes
        };

        if let Some(row) = self.row {
            config
                .sizing
                .check_row(row)
                .map_err(|e| CliError::validation(e.to_string()))?;
        }
        let row = self.row.map(|r| r.to_string());

        let existing = match &self.existing {
            Some(path) => read_names(path)?,
            None => Vec::new(),
        };

        let spacing = self.spacing.unwrap_or(config.sizing.spacing_1u);
        let plan = plan_sizes(
            sizes,
            self.prefix.as_deref(),
            row.as_deref(),
            spacing,
            &existing,
        )
        .map_err(|e| CliError::validation(format!("{e:#}")))?;

        if self.json {
            return print_json(&plan);
        }

        println!("Assembly: {}", plan.assembly);
        for body in &plan.bodies {
            if body.has_connector() {
                println!(
                    "  {:<16} connector {} (halves {} / {})",
                    body.name,
                    format_units(body.connector_length),
                    format_units(body.left_offset),
                    format_units(body.right_offset)
                );
            } else {
                println!("  {:<16} 1U body", body.name);
            }
        }
        if !plan.stale.is_empty() {
            println!("Replacing: {}", plan.stale.join(", "));
        }

        Ok(())
    }
}
