//! Parse command for inspecting the positions of a layout file.

use crate::cli::common::{format_units, print_json, read_layout, CliResult};
use crate::models::Position;
use crate::services::sketch_inventory;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Print the key positions of a keyboard-layout-editor raw data file
#[derive(Debug, Clone, Args)]
pub struct ParseArgs {
    /// Path to the raw layout data
    #[arg(long, value_name = "FILE")]
    pub layout: PathBuf,

    /// Only list the distinct legends (the sketches legends need)
    #[arg(long)]
    pub labels: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// A parsed key together with its size code.
#[derive(Debug, Clone, Serialize)]
struct ParsedKey<'a> {
    #[serde(flatten)]
    position: &'a Position,
    size: u32,
}

impl ParseArgs {
    /// Execute the parse command.
    pub fn execute(&self) -> CliResult<()> {
        let positions = read_layout(&self.layout)?;

        if self.labels {
            let inventory = sketch_inventory(&positions);
            if self.json {
                return print_json(&inventory);
            }
            for label in &inventory.labels {
                println!("{label}");
            }
            return Ok(());
        }

        if self.json {
            let keys: Vec<ParsedKey> = positions
                .iter()
                .map(|position| ParsedKey {
                    position,
                    size: position.size_code(),
                })
                .collect();
            return print_json(&keys);
        }

        println!("{} keys", positions.len());
        for p in &positions {
            let mut line = format!(
                "R{} {:<8} x={} y={} w={} h={} size={}",
                p.row,
                p.label,
                format_units(p.x),
                format_units(p.y),
                format_units(p.width),
                format_units(p.height),
                p.size_code()
            );
            if p.is_rotated() {
                line.push_str(&format!(
                    " r={} rx={} ry={}",
                    format_units(p.rotation),
                    format_units(p.rotation_x),
                    format_units(p.rotation_y)
                ));
            }
            println!("{line}");
        }

        Ok(())
    }
}
