//! Candidate name lists.
//!
//! The host enumerates the components of a container and hands their names
//! over as plain text, one name per line.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Splits a name list into trimmed, non-empty names, keeping their order.
#[must_use]
pub fn parse_names(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads a name list from `path`.
pub fn load_names(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read name list: {}", path.display()))?;
    Ok(parse_names(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_names_skips_blank_lines() {
        let names = parse_names("1_00U\n\n  R1-2_25U  \r\n2_00U+Spc\n");
        assert_eq!(names, vec!["1_00U", "R1-2_25U", "2_00U+Spc"]);
    }

    #[test]
    fn test_load_names_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_names(&temp_dir.path().join("names.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read name list"));
    }
}
