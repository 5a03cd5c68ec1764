//! Point-light rig and distance falloff settings.

use serde::{Deserialize, Serialize};

/// Upper bound on the number of lights in the rig.
pub const MAX_LIGHTS: usize = 16;

/// A colored point light at a fixed position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightConfig {
    pub color: String,
    pub position: [f64; 3],
}

impl LightConfig {
    pub fn new(color: &str, position: [f64; 3]) -> Self {
        Self {
            color: color.into(),
            position,
        }
    }
}

/// The four-light rig the dome ships with.
pub fn default_lights() -> Vec<LightConfig> {
    vec![
        LightConfig::new("#d72638", [0.5, 0.2, -0.4]),
        LightConfig::new("#00ff00", [-0.5, 0.0, -0.4]),
        LightConfig::new("#ff2ecc", [0.0, -0.5, 0.0]),
        LightConfig::new("#016fb9", [0.0, 0.4, 0.5]),
    ]
}

/// Distance window over which each light fades to `default_color`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FalloffConfig {
    pub near: f64,
    pub far: f64,
    pub default_color: String,
}

impl Default for FalloffConfig {
    fn default() -> Self {
        Self {
            near: 2.5,
            far: 2.7,
            default_color: "#000000".into(),
        }
    }
}
