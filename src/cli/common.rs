//! Shared CLI plumbing: error type, exit codes and input helpers.

use clap::Args;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::models::Position;
use crate::parser::parse_layout_file;
use crate::services::load_names;

/// Process exit codes used by all commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid input or unresolved lookups
    ValidationError = 1,
    /// File access or parse failure
    IoError = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}

/// Error returned by command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process terminates with
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// File access or parse failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Invalid input or unresolved lookup.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Candidate component names, from a file and/or the command line.
#[derive(Debug, Clone, Args)]
pub struct CandidateArgs {
    /// File listing candidate component names, one per line
    #[arg(long, value_name = "FILE")]
    pub names: Option<PathBuf>,

    /// Candidate component name (repeatable)
    #[arg(long = "candidate", value_name = "NAME")]
    pub candidates: Vec<String>,
}

impl CandidateArgs {
    /// Collects file names first, then command line names.
    pub fn load(&self) -> CliResult<Vec<String>> {
        let mut names = match &self.names {
            Some(path) => read_names(path)?,
            None => Vec::new(),
        };
        names.extend(self.candidates.iter().cloned());
        Ok(names)
    }
}

/// Reads a layout file into positions.
pub fn read_layout(path: &Path) -> CliResult<Vec<Position>> {
    parse_layout_file(path).map_err(|e| CliError::io(format!("{e:#}")))
}

/// Reads a candidate name list.
pub fn read_names(path: &Path) -> CliResult<Vec<String>> {
    load_names(path).map_err(|e| CliError::io(format!("{e:#}")))
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Formats a layout-unit number without trailing zeros.
pub fn format_units(value: f64) -> String {
    let text = format!("{value:.4}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
