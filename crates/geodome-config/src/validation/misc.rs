//! Window validation.

use super::helpers::{validate_color_field, validate_range};
use crate::schema::DomeConfig;

pub(super) fn validate_window(errors: &mut Vec<String>, config: &DomeConfig) {
    let window = &config.window;
    validate_range(errors, "window.width", window.width, 1, 16384);
    validate_range(errors, "window.height", window.height, 1, 16384);
    validate_color_field(errors, "window.clear_color", &window.clear_color);
}
