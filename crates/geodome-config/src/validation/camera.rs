//! Orbit camera validation.

use super::helpers::{validate_finite, validate_non_negative, validate_positive, validate_range_f64};
use crate::schema::DomeConfig;

pub(super) fn validate_camera(errors: &mut Vec<String>, config: &DomeConfig) {
    let camera = &config.camera;

    validate_finite(errors, "camera.y_speed", camera.y_speed);
    validate_finite(errors, "camera.x_speed", camera.x_speed);
    validate_positive(errors, "camera.distance", camera.distance);
    validate_range_f64(errors, "camera.fov_degrees", camera.fov_degrees, 1.0, 179.0);
    validate_positive(errors, "camera.near_plane", camera.near_plane);
    validate_positive(errors, "camera.far_plane", camera.far_plane);
    if camera.near_plane >= camera.far_plane {
        errors.push(format!(
            "camera.near_plane ({}) must be less than camera.far_plane ({})",
            camera.near_plane, camera.far_plane
        ));
    }

    validate_non_negative(errors, "camera.start_phase_max", camera.start_phase_max);
    if let Some(phase) = camera.start_phase {
        validate_finite(errors, "camera.start_phase", phase);
    }
}
