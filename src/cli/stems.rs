//! Stems command for planning stabilizer stems.

use crate::cli::common::{format_units, print_json, CandidateArgs, CliError, CliResult};
use crate::config::Config;
use crate::models::StemOffset;
use crate::services::plan_stems;
use clap::Args;

/// Plan stabilizer stems for the generated sizes
#[derive(Debug, Clone, Args)]
pub struct StemsArgs {
    #[command(flatten)]
    pub candidates: CandidateArgs,

    /// Stem offset row as SIZE:OFFSET[:asym] (repeatable, defaults to the configured table)
    #[arg(long = "stem", value_name = "SIZE:OFFSET")]
    pub stems: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl StemsArgs {
    /// Execute the stems command.
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let offsets = if self.stems.is_empty() {
            config.stems.offsets.clone()
        } else {
            self.stems
                .iter()
                .map(|s| StemOffset::parse(s))
                .collect::<anyhow::Result<Vec<_>>>()
                .map_err(|e| CliError::validation(e.to_string()))?
        };

        let candidates = self.candidates.load()?;
        let plan = plan_stems(&offsets, &candidates);

        if self.json {
            print_json(&plan)?;
        } else {
            for stem in &plan.stems {
                let positions: Vec<String> =
                    stem.positions.iter().map(|&x| format_units(x)).collect();
                println!("{:<16} x = {}", stem.component, positions.join(", "));
            }
        }

        if plan.is_complete() {
            Ok(())
        } else {
            let missing: Vec<String> = plan.missing.iter().map(ToString::to_string).collect();
            Err(CliError::validation(format!(
                "Sizes not found: {}",
                missing.join(", ")
            )))
        }
    }
}
