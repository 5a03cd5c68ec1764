//! Color parsing and validation utilities.
//!
//! Supports `#RGB`, `#RRGGBB`, and `#RRGGBBAA`. Light colors only use
//! the RGB channels; alpha is accepted and ignored.

mod parse;


use geodome_common::types::Color;
use geodome_common::ConfigError;

use parse::{parse_hex, HEX_RE};

/// Parse a color string into a [`Color`].
///
/// Accepted formats:
/// - `#RGB` (e.g. `#f0c`)
/// - `#RRGGBB` (e.g. `#d72638`)
/// - `#RRGGBBAA` (e.g. `#d7263880`)
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();

    if s.starts_with('#') {
        if let Some(color) = parse_hex(s) {
            return Ok(color);
        }
        return Err(ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && HEX_RE.is_match(s)
}
