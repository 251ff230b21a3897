//! Configuration management CLI commands.

use crate::cli::common::{format_units, print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use std::path::Path;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display the effective configuration
    Show(ConfigShowArgs),
    /// Print the configuration file path
    Path,
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display the effective configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Pitch of one unit
    #[arg(long, value_name = "MM")]
    spacing: Option<f64>,

    /// Vertical pitch of one unit
    #[arg(long, value_name = "MM")]
    spacing_vertical: Option<f64>,

    /// Default sizes, comma separated (100,125,150)
    #[arg(long, value_name = "LIST", value_delimiter = ',')]
    sizes: Option<Vec<u32>>,

    /// Highest row offered for row-qualified generation
    #[arg(long, value_name = "N")]
    max_row: Option<u32>,

    /// Depth of embossed legends
    #[arg(long, value_name = "MM")]
    emboss_depth: Option<f64>,

    /// Distance legend sketches are extruded before cutting
    #[arg(long, value_name = "MM", allow_hyphen_values = true)]
    initial_extrude: Option<f64>,
}

impl ConfigArgs {
    /// Execute config subcommand against the configuration stored at `path`.
    pub fn execute(&self, config: &Config, path: &Path) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(config),
            ConfigCommand::Path => {
                println!("{}", path.display());
                Ok(())
            }
            ConfigCommand::Set(args) => args.execute(config.clone(), path),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        if self.json {
            print_json(config)
        } else {
            output_human_readable(config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.spacing.is_none()
            && self.spacing_vertical.is_none()
            && self.sizes.is_none()
            && self.max_row.is_none()
            && self.emboss_depth.is_none()
            && self.initial_extrude.is_none()
    }

    /// Execute set command
    pub fn execute(&self, mut config: Config, path: &Path) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --spacing, --spacing-vertical, --sizes, --max-row, --emboss-depth or --initial-extrude",
            ));
        }

        if let Some(spacing) = self.spacing {
            config.sizing.spacing_1u = spacing;
        }
        if let Some(spacing) = self.spacing_vertical {
            config.sizing.spacing_1u_vertical = Some(spacing);
        }
        if let Some(sizes) = &self.sizes {
            config.sizing.sizes.clone_from(sizes);
        }
        if let Some(max_row) = self.max_row {
            config.sizing.max_row = max_row;
        }
        if let Some(depth) = self.emboss_depth {
            config.legends.emboss_depth = depth;
        }
        if let Some(extrude) = self.initial_extrude {
            config.legends.initial_extrude = extrude;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        config
            .save_to(path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let spacing = config.sizing.spacing();
    let sizes: Vec<String> = config.sizing.sizes.iter().map(ToString::to_string).collect();

    println!("Sizing:");
    println!("  1U spacing:  {}", format_units(spacing.horizontal));
    println!("  Vertical:    {}", format_units(spacing.vertical));
    println!("  Sizes:       {}", sizes.join(", "));
    println!("  Max row:     {}", config.sizing.max_row);
    println!();
    println!("Stems:");
    for stem in &config.stems.offsets {
        let mode = if stem.symmetric { "" } else { " (asym)" };
        println!("  {:<5} {}{mode}", stem.size, format_units(stem.offset));
    }
    println!();
    println!("Legends:");
    println!(
        "  Initial extrude: {}",
        format_units(config.legends.initial_extrude)
    );
    println!(
        "  Emboss depth:    {}",
        format_units(config.legends.emboss_depth)
    );
}
