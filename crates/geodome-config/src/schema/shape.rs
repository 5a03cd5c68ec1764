//! Dome shell geometry settings.

use serde::{Deserialize, Serialize};

/// Deepest subdivision level accepted (20 × 4^7 = 327,680 faces).
pub const MAX_DETAIL: u32 = 7;

/// Shell geometry: base solid and per-face deformation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Subdivision depth of the base icosahedron.
    pub detail: u32,
    /// Circumradius of the base solid.
    pub radius: f64,
    /// Upper bound (exclusive) of the random outward shift per face.
    pub max_shift: f64,
    /// Fraction of its original size each face keeps, in `(0, 1]`.
    pub face_scale: f64,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            detail: 4,
            radius: 3.0,
            max_shift: 1.5,
            face_scale: 0.9,
        }
    }
}
