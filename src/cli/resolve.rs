//! Resolve command for looking a key up among existing component names.

use crate::cli::common::{print_json, CandidateArgs, CliError, CliResult};
use crate::naming::{resolve, SizeName};
use clap::Args;
use serde_json::json;

/// Find the most specific existing component for a key
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Size code in hundredths of a unit
    #[arg(long, value_name = "N")]
    pub size: u32,

    /// Row qualifier
    #[arg(long, value_name = "R")]
    pub row: Option<String>,

    /// Legend qualifier
    #[arg(long, value_name = "L")]
    pub label: Option<String>,

    #[command(flatten)]
    pub candidates: CandidateArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ResolveArgs {
    /// Execute the resolve command.
    pub fn execute(&self) -> CliResult<()> {
        let candidates = self.candidates.load()?;
        let key = SizeName::from_parts(self.size, self.row.as_deref(), self.label.as_deref());

        let Some(resolution) = resolve(&key, &candidates) else {
            if self.json {
                print_json(&json!({ "key": key.to_string(), "found": null }))?;
            }
            return Err(CliError::validation(format!(
                "No component found for {key} among {} candidates",
                candidates.len()
            )));
        };

        if self.json {
            print_json(&json!({
                "key": key.to_string(),
                "found": resolution.candidate,
                "matched": resolution.matched.to_string(),
            }))
        } else {
            println!("{}", resolution.candidate);
            Ok(())
        }
    }
}
