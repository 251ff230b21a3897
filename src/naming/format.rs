//! Canonical component names.
//!
//! Generated components are identified only by their display name. A name is
//! built from an optional row qualifier, a size token and an optional label:
//!
//! | size | row | label | name         |
//! |------|-----|-------|--------------|
//! | 100  |     |       | `1_00U`      |
//! | 225  | 2   |       | `R2-2_25U`   |
//! | 225  |     | A     | `2_25U+A`    |
//! | 225  | 2   | A     | `R2-2_25U+A` |

use std::fmt;

use serde::Serialize;

/// Marker starting a row qualifier.
pub const ROW_MARKER: char = 'R';

/// Separator between the row qualifier and the size token.
pub const ROW_SEPARATOR: char = '-';

/// Separator between the size token and the label.
pub const LABEL_SEPARATOR: char = '+';

/// Separator between name affixes such as a generation prefix.
pub const AFFIX_SEPARATOR: &str = "_";

/// Formats a size code as `<units>_<hundredths>U` (225 → `2_25U`).
#[must_use]
pub fn format_size(size: u32) -> String {
    format!("{}_{:02}U", size / 100, size % 100)
}

/// The logical key a component name stands for.
///
/// Empty rows and labels are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SizeName {
    /// Size code in hundredths of a unit
    pub size: u32,
    /// Row qualifier
    pub row: Option<String>,
    /// Legend qualifier
    pub label: Option<String>,
}

impl SizeName {
    /// Creates a row-less, unlabeled size name.
    #[must_use]
    pub const fn new(size: u32) -> Self {
        Self {
            size,
            row: None,
            label: None,
        }
    }

    /// Creates a name from optional parts.
    #[must_use]
    pub fn from_parts(size: u32, row: Option<&str>, label: Option<&str>) -> Self {
        Self::new(size).with_row(row).with_label(label)
    }

    /// Sets or clears the row qualifier.
    #[must_use]
    pub fn with_row(mut self, row: Option<&str>) -> Self {
        self.row = row.filter(|r| !r.is_empty()).map(str::to_string);
        self
    }

    /// Sets or clears the label qualifier.
    #[must_use]
    pub fn with_label(mut self, label: Option<&str>) -> Self {
        self.label = label.filter(|l| !l.is_empty()).map(str::to_string);
        self
    }

    /// The same key without its row qualifier.
    #[must_use]
    pub fn without_row(&self) -> Self {
        Self {
            row: None,
            ..self.clone()
        }
    }

    /// The same key without its label qualifier.
    #[must_use]
    pub fn without_label(&self) -> Self {
        Self {
            label: None,
            ..self.clone()
        }
    }

    /// Canonical name joined after a free-text generation prefix.
    #[must_use]
    pub fn with_prefix(&self, prefix: Option<&str>) -> String {
        match prefix.filter(|p| !p.is_empty()) {
            Some(prefix) => join_affixes(&[prefix, &self.to_string()]),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for SizeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(row) = &self.row {
            write!(f, "{ROW_MARKER}{row}{ROW_SEPARATOR}")?;
        }
        f.write_str(&format_size(self.size))?;
        if let Some(label) = &self.label {
            write!(f, "{LABEL_SEPARATOR}{label}")?;
        }
        Ok(())
    }
}

/// Builds the canonical name of a generated component.
#[must_use]
pub fn canonical_name(
    size: u32,
    row: Option<&str>,
    label: Option<&str>,
    prefix: Option<&str>,
) -> String {
    SizeName::from_parts(size, row, label).with_prefix(prefix)
}

/// Separator between a component name and the occurrence number a host
/// container appends to repeated instances (`2_25U:1`).
pub const OCCURRENCE_SEPARATOR: char = ':';

/// Strips a trailing `:<digits>` occurrence suffix from a component name.
#[must_use]
pub fn strip_occurrence(name: &str) -> &str {
    match name.rsplit_once(OCCURRENCE_SEPARATOR) {
        Some((base, digits))
            if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) =>
        {
            base
        }
        _ => name,
    }
}

/// Appends a label qualifier to an existing component name.
///
/// Labeled sizes are named after the size they were copied from, so any
/// prefix or row qualifier of that size is kept.
#[must_use]
pub fn append_label(name: &str, label: &str) -> String {
    format!("{name}{LABEL_SEPARATOR}{label}")
}

/// Joins non-empty name affixes with [`AFFIX_SEPARATOR`].
#[must_use]
pub fn join_affixes(affixes: &[&str]) -> String {
    affixes
        .iter()
        .filter(|a| !a.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(AFFIX_SEPARATOR)
}
