//! Light rig and falloff validation.

use super::helpers::{validate_color_field, validate_finite};
use crate::schema::{DomeConfig, MAX_LIGHTS};

pub(super) fn validate_lights(errors: &mut Vec<String>, config: &DomeConfig) {
    let count = config.lights.len();
    if count == 0 || count > MAX_LIGHTS {
        errors.push(format!(
            "lights: {count} lights configured, expected 1 to {MAX_LIGHTS}"
        ));
    }

    for (i, light) in config.lights.iter().enumerate() {
        validate_color_field(errors, &format!("lights[{i}].color"), &light.color);
        if light.position.iter().any(|c| !c.is_finite()) {
            errors.push(format!(
                "lights[{i}].position = {:?} must be finite",
                light.position
            ));
        }
    }
}

pub(super) fn validate_falloff(errors: &mut Vec<String>, config: &DomeConfig) {
    let falloff = &config.falloff;

    // near may be zero or negative, only near < far is required
    validate_finite(errors, "falloff.near", falloff.near);
    validate_finite(errors, "falloff.far", falloff.far);
    if falloff.near >= falloff.far {
        errors.push(format!(
            "falloff.near ({}) must be less than falloff.far ({})",
            falloff.near, falloff.far
        ));
    }

    validate_color_field(errors, "falloff.default_color", &falloff.default_color);
}
