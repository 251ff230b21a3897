//! Legends command for planning labeled keycaps.

use crate::cli::common::{print_json, read_layout, read_names, CandidateArgs, CliError, CliResult};
use crate::config::Config;
use crate::services::{plan_legends, RowMode};
use clap::Args;
use std::path::PathBuf;

/// Plan one labeled keycap per key of a layout
#[derive(Debug, Clone, Args)]
pub struct LegendsArgs {
    /// Path to the raw layout data
    #[arg(long, value_name = "FILE")]
    pub layout: PathBuf,

    #[command(flatten)]
    pub candidates: CandidateArgs,

    /// File listing the available legend sketches
    #[arg(long, value_name = "FILE")]
    pub sketches: PathBuf,

    /// Row used for size lookup: none, auto or a row number
    #[arg(long, value_name = "MODE", default_value = "auto")]
    pub row: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl LegendsArgs {
    /// Execute the legends command.
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let row_mode: RowMode = self
            .row
            .parse()
            .map_err(|e: anyhow::Error| CliError::validation(e.to_string()))?;
        if let RowMode::Fixed(row) = &row_mode {
            let row: u32 = row
                .parse()
                .map_err(|_| CliError::validation(format!("Invalid row '{row}'")))?;
            config
                .sizing
                .check_row(row)
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        let positions = read_layout(&self.layout)?;
        let sizes = self.candidates.load()?;
        let sketches = read_names(&self.sketches)?;

        let plan = plan_legends(&positions, &row_mode, &sizes, &sketches, &config.legends);

        if self.json {
            print_json(&plan)?;
        } else if plan.is_empty() {
            println!("No labeled keycaps to create");
        } else {
            println!("Assembly: {}", plan.assembly);
            for labeled in &plan.labeled {
                println!("  {:<24} from {}", labeled.name, labeled.source);
            }
        }

        if plan.is_complete() {
            return Ok(());
        }

        let mut problems = Vec::new();
        if !plan.missing_labels.is_empty() {
            problems.push(format!(
                "legend sketches not found: {}",
                plan.missing_labels.join(", ")
            ));
        }
        if !plan.missing_sizes.is_empty() {
            let sizes: Vec<String> = plan.missing_sizes.iter().map(ToString::to_string).collect();
            problems.push(format!("sizes not found: {}", sizes.join(", ")));
        }
        Err(CliError::validation(problems.join("; ")))
    }
}
