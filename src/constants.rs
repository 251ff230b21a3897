//! Application-wide constants.
//!
//! This module defines the application name and the keycap defaults shared by
//! the configuration layer and the planning services.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Keycap Generator";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "keycapgen";

/// Directory name used below the platform config directory.
pub const CONFIG_DIR_NAME: &str = "KeycapGenerator";

/// Keycap sizes generated when no explicit list is given, in hundredths of a unit.
pub const DEFAULT_KEYCAP_SIZES: [u32; 10] = [100, 125, 150, 175, 200, 225, 275, 300, 625, 700];

/// Smallest size code accepted by the size generator (1U).
pub const MIN_SIZE_CODE: u32 = 100;

/// Largest size code accepted by the size generator.
pub const MAX_SIZE_CODE: u32 = 9999;

/// Number of rows offered for row-qualified generation.
pub const MAX_ROW: u32 = 7;

/// Default pitch of one keycap unit, in centimetres (host length unit).
pub const DEFAULT_1U_SPACING: f64 = 1.9;

/// Default distance the legend sketch is extruded into the keycap.
pub const DEFAULT_INITIAL_EXTRUDE: f64 = -0.55;

/// Default depth of an embossed legend.
pub const DEFAULT_EMBOSS_DEPTH: f64 = 0.05;

/// Stabilizer stem offsets from the key centre, keyed by size code.
///
/// See the Cherry MX datasheet and the deskthority space bar dimensions.
pub const DEFAULT_STEM_OFFSETS: [(u32, f64); 6] = [
    (200, 1.1938),
    (225, 1.1938),
    (275, 1.1938),
    (300, 1.95),
    (625, 5.0),
    (700, 5.715),
];

/// Name of the assembly holding the generated base sizes.
pub const COMPONENT_NAME_SIZES: &str = "KCG-Keycap-Sizes-Assembly";

/// Name of the assembly holding the final keyboard layout.
pub const COMPONENT_NAME_LAYOUT: &str = "KCG-Layout-Assembly";

/// Name of the assembly holding one legend sketch per label.
pub const COMPONENT_NAME_LEGENDS: &str = "KCG-Legend-Sketches-Assembly";

/// Name of the assembly holding the labeled (embossed) sizes.
pub const COMPONENT_NAME_LABELED: &str = "KCG-Labeled-Keycap-Assembly";
