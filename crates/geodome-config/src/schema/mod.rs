//! Configuration schema types for Geodome.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields fall back to the stock dome.

mod camera;
mod lights;
mod shape;
mod system;
mod window;

pub use camera::*;
pub use lights::*;
pub use shape::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Geodome.
///
/// `seed` must stay the first field: TOML requires plain values to be
/// emitted before any table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DomeConfig {
    /// Fixes the random draws (face skew, camera start phase) when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub shape: ShapeConfig,
    pub falloff: FalloffConfig,
    pub camera: CameraConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    pub lights: Vec<LightConfig>,
}

impl Default for DomeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            shape: ShapeConfig::default(),
            falloff: FalloffConfig::default(),
            camera: CameraConfig::default(),
            window: WindowConfig::default(),
            logging: LoggingConfig::default(),
            lights: default_lights(),
        }
    }
}
