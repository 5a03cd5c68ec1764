//! Orbit camera settings.

use serde::{Deserialize, Serialize};

use std::f64::consts::TAU;

/// Orbit camera: angular speeds, distance, and projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Yaw speed in radians per second.
    pub y_speed: f64,
    /// Speed of the orbit-axis wobble in radians per second.
    pub x_speed: f64,
    pub distance: f64,
    pub fov_degrees: f64,
    pub near_plane: f64,
    pub far_plane: f64,
    /// Start phase is drawn uniformly from `[0, start_phase_max)` seconds.
    pub start_phase_max: f64,
    /// Fixed start phase; skips the random draw when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_phase: Option<f64>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            y_speed: TAU * 0.0132,
            x_speed: TAU * 0.003,
            distance: 2.0,
            fov_degrees: 65.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            start_phase_max: 100.0,
            start_phase: None,
        }
    }
}
