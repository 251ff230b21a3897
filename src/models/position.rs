//! Absolute key positions derived from keyboard-layout-editor raw data.

use serde::{Deserialize, Serialize};

/// One resolved key slot of a layout.
///
/// Coordinates and footprint are in layout units, where one unit is the pitch
/// of a standard 1U key. Positions are produced in reading order (row-major,
/// left to right) by [`crate::parser::parse_layout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Source row index as a decimal string ("0", "1", ...)
    pub row: String,
    /// Column coordinate in layout units
    pub x: f64,
    /// Row coordinate in layout units
    pub y: f64,
    /// Key width in layout units (default 1.0)
    pub width: f64,
    /// Key height in layout units (default 1.0)
    pub height: f64,
    /// Legend text of the key
    pub label: String,
    /// Rotation angle in degrees
    pub rotation: f64,
    /// Rotation pivot X
    pub rotation_x: f64,
    /// Rotation pivot Y
    pub rotation_y: f64,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            row: String::new(),
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
            label: String::new(),
            rotation: 0.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }
}

impl Position {
    /// Width as an integer size code in hundredths of a unit (2.25U → 225).
    #[must_use]
    pub fn size_code(&self) -> u32 {
        width_to_size_code(self.width)
    }

    /// Whether the key carries any rotation information.
    #[must_use]
    pub fn is_rotated(&self) -> bool {
        self.rotation != 0.0
    }
}

/// Converts a width in layout units into a size code.
///
/// Rounds rather than truncates so that `2.29999` style float noise still
/// lands on 230. Negative widths clamp to zero.
#[must_use]
pub fn width_to_size_code(width: f64) -> u32 {
    (width * 100.0).round().max(0.0) as u32
}
