//! CLI command handlers for the keycap generator.
//!
//! This module provides headless, scriptable access to the layout parser,
//! the naming conventions and the planning services.

pub mod common;
pub mod config;
pub mod layout;
pub mod legends;
pub mod name;
pub mod parse;
pub mod resolve;
pub mod sizes;
pub mod stems;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use layout::LayoutArgs;
pub use legends::LegendsArgs;
pub use name::NameArgs;
pub use parse::ParseArgs;
pub use resolve::ResolveArgs;
pub use sizes::SizesArgs;
pub use stems::StemsArgs;
