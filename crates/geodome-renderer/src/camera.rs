//! Orbit camera and perspective projection.
//!
//! The camera position is a pure function of accumulated time: a circle in
//! the XZ plane, rotated a quarter turn about an axis that itself wobbles
//! around X. Orientation comes straight from the two orbit angles rather
//! than a look-at toward the origin, so the dome drifts through the frame.

use std::f32::consts::FRAC_PI_2;

use geodome_common::Size;
use geodome_config::schema::CameraConfig;
use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::random::UniformSource;

/// Frame deltas arrive in milliseconds; angular speeds are per second.
const MS_TO_SECONDS: f64 = 0.001;

/// Camera placement for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl CameraPose {
    /// World-to-camera transform: the inverse of the camera's placement.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }
}

/// Time-driven double-axis orbit.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    elapsed: f64,
    start_phase: f64,
    y_speed: f64,
    x_speed: f64,
    distance: f32,
}

impl OrbitCamera {
    pub fn new(y_speed: f64, x_speed: f64, distance: f32, start_phase: f64) -> Self {
        Self {
            elapsed: 0.0,
            start_phase,
            y_speed,
            x_speed,
            distance,
        }
    }

    /// Build from config, drawing the start phase from `rng` unless the
    /// config pins one.
    pub fn from_config(camera: &CameraConfig, rng: &mut impl UniformSource) -> Self {
        let start_phase = camera
            .start_phase
            .unwrap_or_else(|| rng.uniform(camera.start_phase_max as f32) as f64);
        tracing::debug!(start_phase, "orbit camera start phase");
        Self::new(
            camera.y_speed,
            camera.x_speed,
            camera.distance as f32,
            start_phase,
        )
    }

    /// Accumulate a frame delta given in milliseconds.
    pub fn advance(&mut self, delta_ms: f64) {
        self.elapsed += delta_ms * MS_TO_SECONDS;
    }

    /// Seconds accumulated through [`advance`](Self::advance), without the start phase.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn start_phase(&self) -> f64 {
        self.start_phase
    }

    /// The orbit angles `(x, y)` in radians for the current time.
    pub fn angles(&self) -> (f32, f32) {
        let t = self.elapsed + self.start_phase;
        let y = -t * self.y_speed;
        let x = t * self.x_speed;
        (x as f32, y as f32)
    }

    pub fn pose(&self) -> CameraPose {
        let (x, y) = self.angles();

        let base = Vec3::new(y.cos(), 0.0, y.sin());
        let axis = Vec3::new(0.0, x.sin(), x.cos());
        let position = Quat::from_axis_angle(axis, FRAC_PI_2) * base * self.distance;

        CameraPose {
            position,
            rotation: Quat::from_euler(EulerRot::XYZ, -x, -y, 0.0),
        }
    }
}

/// Right-handed perspective projection with a `[0, 1]` depth range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveProjection {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveProjection {
    pub fn from_config(camera: &CameraConfig, size: Size) -> Self {
        Self {
            fov_y: (camera.fov_degrees as f32).to_radians(),
            aspect: size.aspect(),
            near: camera.near_plane as f32,
            far: camera.far_plane as f32,
        }
    }

    /// Update the aspect ratio. Zero-sized surfaces are ignored.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self, pose: &CameraPose) -> Mat4 {
        self.matrix() * pose.view_matrix()
    }
}
