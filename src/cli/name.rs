//! Name command for building canonical component names.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::constants::{MAX_SIZE_CODE, MIN_SIZE_CODE};
use crate::naming::canonical_name;
use clap::Args;
use serde_json::json;

/// Print the canonical component name of a keycap size
#[derive(Debug, Clone, Args)]
pub struct NameArgs {
    /// Size code in hundredths of a unit (225 for 2.25U)
    #[arg(long, value_name = "N")]
    pub size: u32,

    /// Row qualifier
    #[arg(long, value_name = "R")]
    pub row: Option<String>,

    /// Legend qualifier
    #[arg(long, value_name = "L")]
    pub label: Option<String>,

    /// Generation prefix
    #[arg(long, value_name = "P")]
    pub prefix: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl NameArgs {
    /// Execute the name command.
    pub fn execute(&self) -> CliResult<()> {
        if !(MIN_SIZE_CODE..=MAX_SIZE_CODE).contains(&self.size) {
            return Err(CliError::validation(format!(
                "Size {} out of range ({MIN_SIZE_CODE}..={MAX_SIZE_CODE})",
                self.size
            )));
        }

        let name = canonical_name(
            self.size,
            self.row.as_deref(),
            self.label.as_deref(),
            self.prefix.as_deref(),
        );

        if self.json {
            print_json(&json!({
                "size": self.size,
                "row": self.row,
                "label": self.label,
                "prefix": self.prefix,
                "name": name,
            }))
        } else {
            println!("{name}");
            Ok(())
        }
    }
}
