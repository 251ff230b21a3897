//! Keycap Generator Library
//!
//! This library provides the host-independent core of a parametric keycap
//! generator: parsing keyboard-layout-editor raw data into absolute key
//! positions, the naming conventions that identify generated keycap
//! components, and planning services that tell a CAD host what to build.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod naming;
pub mod parser;
pub mod services;

pub use models::Position;
pub use naming::{canonical_name, resolve_name};
pub use parser::{parse_layout, ParseError};
