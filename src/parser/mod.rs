//! Parsing of keyboard layout descriptions.
//!
//! This module reads the raw data format of keyboard-layout-editor and turns it
//! into absolute key positions.

pub mod kle;

// Re-export commonly used functions
pub use kle::{normalize_layout, parse_layout, parse_layout_file, quote_bare_keys, ParseError};
