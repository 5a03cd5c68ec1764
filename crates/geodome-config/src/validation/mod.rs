//! Full configuration validation.
//!
//! Validates numeric ranges, the light rig, and color formats. Each
//! domain has its own submodule; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod camera;
mod helpers;
mod lighting;
mod misc;
mod shape;

#[cfg(test)]
mod tests;

use crate::schema::DomeConfig;
use geodome_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DomeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    shape::validate_shape(&mut errors, config);
    lighting::validate_lights(&mut errors, config);
    lighting::validate_falloff(&mut errors, config);
    camera::validate_camera(&mut errors, config);
    misc::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
