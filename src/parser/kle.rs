//! Keyboard-layout-editor raw data parsing.
//!
//! The "Raw data" export of keyboard-layout-editor is a comma separated list of
//! row arrays, for example:
//!
//! ```text
//! ["Esc",{x:1},"F1","F2"],
//! [{w:1.5},"Tab","Q","W"]
//! ```
//!
//! It is not JSON: the rows are not enclosed in an outer array and property
//! keys are usually bare identifiers. [`normalize_layout`] turns it into JSON,
//! then a small cursor state machine walks the rows and emits one
//! [`Position`] per legend string.

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use crate::models::Position;

/// Bare one- or two-letter property key directly following `{` or `,`.
static BARE_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([{,]\s*)([a-z][a-z0-9]?)(\s*):").expect("bare key pattern is valid")
});

/// Errors raised while turning raw layout text into positions.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The normalized text is still not valid JSON.
    #[error("Layout is not valid JSON after normalization: {0}")]
    Json(#[from] serde_json::Error),

    /// A top-level element is not a row array.
    #[error("Row {index} is not an array")]
    NotARow {
        /// Zero-based index of the offending row
        index: usize,
    },

    /// A property object carries a non-numeric value for a known key.
    #[error("Row {row}: property '{key}' must be a number, got {value}")]
    InvalidProperty {
        /// Zero-based row index
        row: usize,
        /// Property key (x, y, w, h, r, rx, ry)
        key: String,
        /// Offending value as JSON text
        value: String,
    },
}

/// Quotes every bare property key outside of string literals.
///
/// `{x:1,w:2}` becomes `{"x":1,"w":2}`. Text inside double quoted strings is
/// copied verbatim, so legends containing colons survive, and keys that are
/// already quoted are left alone, which makes the function idempotent.
#[must_use]
pub fn quote_bare_keys(text: &str) -> String {
    let mut output = String::with_capacity(text.len() + 16);
    let mut segment = String::new();
    let mut in_string = false;
    let mut escaped = false;

    for ch in text.chars() {
        if in_string {
            output.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
        } else if ch == '"' {
            output.push_str(&BARE_KEY_REGEX.replace_all(&segment, "${1}\"${2}\"${3}:"));
            segment.clear();
            output.push(ch);
            in_string = true;
        } else {
            segment.push(ch);
        }
    }
    output.push_str(&BARE_KEY_REGEX.replace_all(&segment, "${1}\"${2}\"${3}:"));

    output
}

/// Converts raw layout text into a JSON array of rows.
#[must_use]
pub fn normalize_layout(raw: &str) -> String {
    quote_bare_keys(&format!("[{}]", raw.trim()))
}

/// Property overrides found in a row between two legends.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct KeyDelta {
    x: Option<f64>,
    y: Option<f64>,
    w: Option<f64>,
    h: Option<f64>,
    r: Option<f64>,
    rx: Option<f64>,
    ry: Option<f64>,
}

impl KeyDelta {
    /// Reads the known keys of a property object. Unknown keys (colours,
    /// fonts, profiles, ...) are ignored.
    fn from_object(row: usize, object: &Map<String, Value>) -> Result<Self, ParseError> {
        let field = |key: &str| -> Result<Option<f64>, ParseError> {
            match object.get(key) {
                None => Ok(None),
                Some(value) => {
                    value
                        .as_f64()
                        .map(Some)
                        .ok_or_else(|| ParseError::InvalidProperty {
                            row,
                            key: key.to_string(),
                            value: value.to_string(),
                        })
                }
            }
        };

        Ok(Self {
            x: field("x")?,
            y: field("y")?,
            w: field("w")?,
            h: field("h")?,
            r: field("r")?,
            rx: field("rx")?,
            ry: field("ry")?,
        })
    }
}

/// Running parser state, passed by value from one element to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cursor {
    row: usize,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rotation: f64,
    rotation_x: f64,
    rotation_y: f64,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            row: 0,
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
            rotation: 0.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }
}

impl Cursor {
    /// Offsets accumulate, everything else replaces.
    fn apply(self, delta: &KeyDelta) -> Self {
        Self {
            x: self.x + delta.x.unwrap_or(0.0),
            y: self.y + delta.y.unwrap_or(0.0),
            width: delta.w.unwrap_or(self.width),
            height: delta.h.unwrap_or(self.height),
            rotation: delta.r.unwrap_or(self.rotation),
            rotation_x: delta.rx.unwrap_or(self.rotation_x),
            rotation_y: delta.ry.unwrap_or(self.rotation_y),
            ..self
        }
    }

    /// Snapshots the cursor as a key and advances past it.
    ///
    /// Width and height only ever apply to a single key, rotation persists.
    fn emit(self, label: &str) -> (Position, Self) {
        let position = Position {
            row: self.row.to_string(),
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            label: label.to_string(),
            rotation: self.rotation,
            rotation_x: self.rotation_x,
            rotation_y: self.rotation_y,
        };
        let next = Self {
            x: self.x + self.width,
            width: 1.0,
            height: 1.0,
            ..self
        };
        (position, next)
    }

    fn end_row(self) -> Self {
        Self {
            row: self.row + 1,
            x: 0.0,
            y: self.y + 1.0,
            ..self
        }
    }
}

/// Parses raw layout text into absolute key positions in reading order.
///
/// # Errors
///
/// Returns a [`ParseError`] if the normalized text is not JSON, a top-level
/// element is not an array, or a known property carries a non-numeric value.
/// No partial result is returned.
pub fn parse_layout(raw: &str) -> Result<Vec<Position>, ParseError> {
    let rows: Vec<Value> = serde_json::from_str(&normalize_layout(raw))?;

    let mut positions = Vec::new();
    let mut cursor = Cursor::default();

    for (index, row) in rows.iter().enumerate() {
        let Value::Array(items) = row else {
            return Err(ParseError::NotARow { index });
        };

        let before = positions.len();
        cursor = items
            .iter()
            .try_fold(cursor, |cursor, item| -> Result<Cursor, ParseError> {
                match item {
                    Value::String(label) => {
                        let (position, next) = cursor.emit(label);
                        positions.push(position);
                        Ok(next)
                    }
                    Value::Object(object) => {
                        Ok(cursor.apply(&KeyDelta::from_object(index, object)?))
                    }
                    // Numbers, nulls and nested arrays carry no key information
                    _ => Ok(cursor),
                }
            })?;
        debug!("Row {index}: {} keys", positions.len() - before);

        cursor = cursor.end_row();
    }

    Ok(positions)
}

/// Reads and parses a layout file.
pub fn parse_layout_file(path: &Path) -> Result<Vec<Position>> {
    if !path.is_file() {
        anyhow::bail!("Layout file not found: {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))?;

    parse_layout(&content)
        .with_context(|| format!("Failed to parse layout file: {}", path.display()))
}
