//! Tests for config validation.

use super::*;
use crate::schema::LightConfig;

fn validation_message(config: &DomeConfig) -> String {
    match validate(config) {
        Err(ConfigError::ValidationError(msg)) => msg,
        other => panic!("expected ValidationError, got {other:?}"),
    }
}

#[test]
fn default_config_is_valid() {
    assert!(validate(&DomeConfig::default()).is_ok());
}

#[test]
fn near_must_be_below_far() {
    let mut config = DomeConfig::default();
    config.falloff.near = 2.7;
    config.falloff.far = 2.7;
    assert!(validation_message(&config).contains("falloff.near"));
}

#[test]
fn negative_near_is_accepted_when_below_far() {
    let mut config = DomeConfig::default();
    config.falloff.near = -1.0;
    config.falloff.far = 1.0;
    assert!(validate(&config).is_ok());
}

#[test]
fn non_finite_falloff_is_rejected() {
    let mut config = DomeConfig::default();
    config.falloff.far = f64::INFINITY;
    assert!(validation_message(&config).contains("falloff.far"));
}

#[test]
fn face_scale_zero_is_rejected() {
    let mut config = DomeConfig::default();
    config.shape.face_scale = 0.0;
    assert!(validation_message(&config).contains("shape.face_scale"));
}

#[test]
fn face_scale_one_is_accepted() {
    let mut config = DomeConfig::default();
    config.shape.face_scale = 1.0;
    assert!(validate(&config).is_ok());
}

#[test]
fn face_scale_above_one_is_rejected() {
    let mut config = DomeConfig::default();
    config.shape.face_scale = 1.5;
    assert!(validation_message(&config).contains("shape.face_scale"));
}

#[test]
fn detail_zero_is_accepted() {
    let mut config = DomeConfig::default();
    config.shape.detail = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn detail_above_max_is_rejected() {
    let mut config = DomeConfig::default();
    config.shape.detail = 8;
    assert!(validation_message(&config).contains("shape.detail"));
}

#[test]
fn zero_max_shift_is_accepted() {
    let mut config = DomeConfig::default();
    config.shape.max_shift = 0.0;
    assert!(validate(&config).is_ok());
}

#[test]
fn negative_max_shift_is_rejected() {
    let mut config = DomeConfig::default();
    config.shape.max_shift = -0.1;
    assert_eq!(
        validation_message(&config),
        "shape.max_shift = -0.1 must not be negative"
    );
}

#[test]
fn non_positive_radius_is_rejected() {
    let mut config = DomeConfig::default();
    config.shape.radius = 0.0;
    assert!(validation_message(&config).contains("shape.radius"));
}

#[test]
fn empty_light_rig_is_rejected() {
    let mut config = DomeConfig::default();
    config.lights.clear();
    assert!(validation_message(&config).contains("lights"));
}

#[test]
fn too_many_lights_are_rejected() {
    let mut config = DomeConfig::default();
    config.lights = vec![LightConfig::new("#ffffff", [0.0, 0.0, 0.0]); 17];
    assert!(validation_message(&config).contains("lights"));
}

#[test]
fn invalid_light_color_is_rejected() {
    let mut config = DomeConfig::default();
    config.lights[1].color = "green".into();
    assert!(validation_message(&config).contains("lights[1].color"));
}

#[test]
fn non_finite_light_position_is_rejected() {
    let mut config = DomeConfig::default();
    config.lights[0].position = [f64::NAN, 0.0, 0.0];
    assert!(validation_message(&config).contains("lights[0].position"));
}

#[test]
fn invalid_default_color_is_rejected() {
    let mut config = DomeConfig::default();
    config.falloff.default_color = "#12345".into();
    assert!(validation_message(&config).contains("falloff.default_color"));
}

#[test]
fn camera_planes_must_be_ordered() {
    let mut config = DomeConfig::default();
    config.camera.near_plane = 10.0;
    config.camera.far_plane = 1.0;
    assert!(validation_message(&config).contains("camera.near_plane"));
}

#[test]
fn negative_start_phase_max_is_rejected() {
    let mut config = DomeConfig::default();
    config.camera.start_phase_max = -1.0;
    assert_eq!(
        validation_message(&config),
        "camera.start_phase_max = -1 must not be negative"
    );
}

#[test]
fn non_finite_camera_speed_is_rejected() {
    let mut config = DomeConfig::default();
    config.camera.x_speed = f64::NAN;
    assert!(validation_message(&config).contains("camera.x_speed"));
}

#[test]
fn zero_window_size_is_rejected() {
    let mut config = DomeConfig::default();
    config.window.width = 0;
    assert!(validation_message(&config).contains("window.width"));
}

#[test]
fn multiple_errors_are_joined() {
    let mut config = DomeConfig::default();
    config.shape.radius = -1.0;
    config.falloff.near = 5.0;
    let msg = validation_message(&config);
    assert!(msg.contains("shape.radius"));
    assert!(msg.contains("falloff.near"));
    assert!(msg.contains("; "));
}
