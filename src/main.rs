//! Keycap Generator - layout parsing and keycap planning from the command line
//!
//! Reads keyboard-layout-editor raw data, builds and resolves keycap component
//! names, and prints the plans a CAD host executes to generate keycaps.

use clap::{Parser, Subcommand};
use keycapgen::cli::{
    CliError, CliResult, ConfigArgs, ExitCode, LayoutArgs, LegendsArgs, NameArgs, ParseArgs,
    ResolveArgs, SizesArgs, StemsArgs,
};
use keycapgen::config::Config;
use keycapgen::constants::{APP_BINARY_NAME, APP_NAME};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Keycap Generator - plan parametric keycaps from keyboard layouts
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this configuration file instead of the default one
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the key positions of a layout
    Parse(ParseArgs),
    /// Print the canonical name of a keycap size
    Name(NameArgs),
    /// Find the best matching component for a key
    Resolve(ResolveArgs),
    /// Plan base keycap sizes
    Sizes(SizesArgs),
    /// Plan stabilizer stems
    Stems(StemsArgs),
    /// Plan labeled keycaps for a layout
    Legends(LegendsArgs),
    /// Plan the keyboard layout assembly
    Layout(LayoutArgs),
    /// Show or change the configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> CliResult<()> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_file_path().map_err(|e| CliError::io(format!("{e:#}")))?,
    };
    debug!(
        "{APP_NAME} v{}, configuration {}",
        env!("CARGO_PKG_VERSION"),
        config_path.display()
    );

    let config = Config::load_from(&config_path)
        .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

    match &cli.command {
        Command::Parse(args) => args.execute(),
        Command::Name(args) => args.execute(),
        Command::Resolve(args) => args.execute(),
        Command::Sizes(args) => args.execute(&config),
        Command::Stems(args) => args.execute(&config),
        Command::Legends(args) => args.execute(&config),
        Command::Layout(args) => args.execute(&config),
        Command::Config(args) => args.execute(&config, &config_path),
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::Success.into(),
        Err(err) => {
            eprintln!("Error: {err}");
            err.code.into()
        }
    }
}
