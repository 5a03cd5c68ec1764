//! Host window settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_color: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Geodesic Dome".into(),
            width: 1280,
            height: 800,
            clear_color: "#000000".into(),
        }
    }
}
