//! Placement of a previously generated keycap inside the layout assembly.

use serde::{Deserialize, Serialize};

use super::Position;

/// Spacing between key centres, in host length units.
///
/// The vertical pitch is applied downward: layout rows grow along negative Y
/// in the host coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    /// Horizontal distance of one layout unit
    pub horizontal: f64,
    /// Vertical distance of one layout unit
    pub vertical: f64,
}

impl Spacing {
    /// Creates a spacing with the same pitch on both axes.
    #[must_use]
    pub const fn uniform(pitch: f64) -> Self {
        Self {
            horizontal: pitch,
            vertical: pitch,
        }
    }

    /// Host translation of the centre of `position`.
    ///
    /// Layout coordinates address the top-left corner of a key while generated
    /// keycaps are centred on their own origin, so wide and tall keys are
    /// shifted by half of their extra footprint.
    #[must_use]
    pub fn translation(&self, position: &Position) -> (f64, f64) {
        let x = position.x * self.horizontal + ((position.width - 1.0) / 2.0) * self.horizontal;
        let y_pitch = -self.vertical;
        let y = position.y * y_pitch + ((position.height - 1.0) / 2.0) * y_pitch;
        (x, y)
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self::uniform(crate::constants::DEFAULT_1U_SPACING)
    }
}

/// A keycap component resolved for one layout position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Legend of the key
    pub label: String,
    /// Source row of the key
    pub row: String,
    /// Size code of the key
    pub size: u32,
    /// Name of the generated component to instantiate
    pub component: String,
    /// Whether the component is a labeled (embossed) variant
    pub labeled: bool,
    /// Translation along X
    pub translate_x: f64,
    /// Translation along Y
    pub translate_y: f64,
    /// Rotation angle in degrees, forwarded unchanged
    pub rotation: f64,
    /// Rotation pivot X, forwarded unchanged
    pub rotation_x: f64,
    /// Rotation pivot Y, forwarded unchanged
    pub rotation_y: f64,
}

impl Placement {
    /// Places `component` at `position` using `spacing`.
    #[must_use]
    pub fn new(position: &Position, component: &str, spacing: &Spacing) -> Self {
        let (translate_x, translate_y) = spacing.translation(position);
        Self {
            label: position.label.clone(),
            row: position.row.clone(),
            size: position.size_code(),
            component: component.to_string(),
            labeled: false,
            translate_x,
            translate_y,
            rotation: position.rotation,
            rotation_x: position.rotation_x,
            rotation_y: position.rotation_y,
        }
    }

    /// Marks the placement as using a labeled component.
    #[must_use]
    pub const fn with_labeled(mut self, labeled: bool) -> Self {
        self.labeled = labeled;
        self
    }

    /// Whether the host needs to apply a translation at all.
    #[must_use]
    pub fn is_moved(&self) -> bool {
        self.translate_x != 0.0 || self.translate_y != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_origin_key_is_not_moved() {
        let placement = Placement::new(&Position::default(), "1_00U", &Spacing::uniform(1.9));
        assert!(!placement.is_moved());
        assert!(!placement.labeled);
    }

    #[test]
    fn test_translation_centres_wide_keys() {
        let pos = Position {
            x: 1.0,
            y: 2.0,
            width: 2.25,
            ..Position::default()
        };
        let (x, y) = Spacing::uniform(2.0).translation(&pos);
        assert!(approx(x, 2.0 + 1.25));
        assert!(approx(y, -4.0));
    }

    #[test]
    fn test_translation_centres_tall_keys_downward() {
        let pos = Position {
            height: 2.0,
            ..Position::default()
        };
        let spacing = Spacing {
            horizontal: 1.9,
            vertical: 1.5,
        };
        let (x, y) = spacing.translation(&pos);
        assert!(approx(x, 0.0));
        assert!(approx(y, -0.75));
    }

    #[test]
    fn test_placement_forwards_rotation() {
        let pos = Position {
            rotation: 10.0,
            rotation_x: 3.0,
            rotation_y: 4.0,
            label: "Q".to_string(),
            row: "0".to_string(),
            ..Position::default()
        };
        let placement = Placement::new(&pos, "R0-1_00U+Q", &Spacing::default()).with_labeled(true);
        assert_eq!(placement.rotation, 10.0);
        assert_eq!(placement.rotation_x, 3.0);
        assert_eq!(placement.rotation_y, 4.0);
        assert_eq!(placement.size, 100);
        assert!(placement.labeled);
    }
}
