//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Two rows: a 1U alpha row and a row with a 2.25U Enter.
pub const LAYOUT_BASIC: &str = r#"["Q","W","E"],
["A",{w:2.25},"Enter"]"#;

/// A row of a layout as exported by keyboard-layout-editor, with gaps.
pub const LAYOUT_WITH_GAPS: &str = r#"["Esc",{x:1},"F1","F2"],
[{y:0.5},"~","1"]"#;

/// A spacebar row.
pub const LAYOUT_SPACEBAR: &str = r#"[{w:1.25},"Ctrl",{w:6.25},"Space",{w:1.25},"Alt"]"#;

/// A rotated thumb cluster.
pub const LAYOUT_ROTATED: &str = r#"[{r:15,rx:4,ry:2},"T1","T2"]"#;

/// Generated size names for a default run.
pub const SIZE_NAMES: &[&str] = &[
    "1_00U", "1_25U", "1_50U", "1_75U", "2_00U", "2_25U", "2_75U", "6_25U",
];

/// Path to the keycapgen binary
pub fn keycapgen_bin() -> &'static str {
    env!("CARGO_BIN_EXE_keycapgen")
}

/// A keycapgen command reading a config file that does not exist, so every
/// run sees the built-in defaults regardless of the user's configuration.
pub fn keycapgen_command() -> Command {
    let mut cmd = Command::new(keycapgen_bin());
    cmd.arg("--config")
        .arg(std::env::temp_dir().join("keycapgen-tests").join("absent.toml"));
    cmd
}

/// Writes `content` to `name` inside a fresh temp dir.
///
/// The returned `TempDir` must be kept alive for as long as the file is used.
pub fn create_temp_file(name: &str, content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    (path, temp_dir)
}

/// Writes raw layout data to a temp file.
pub fn create_temp_layout_file(raw: &str) -> (PathBuf, TempDir) {
    create_temp_file("layout.txt", raw)
}

/// Writes a name list (one name per line) to a temp file.
pub fn create_temp_names_file(names: &[&str]) -> (PathBuf, TempDir) {
    create_temp_file("names.txt", &names.join("\n"))
}

/// Path for a config file that does not exist yet, in a fresh temp dir.
pub fn temp_config_path() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    (path, temp_dir)
}
