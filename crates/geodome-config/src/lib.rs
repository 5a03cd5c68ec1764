//! Geodome configuration system.
//!
//! Provides TOML-based configuration for the dome shape, its light rig,
//! the orbit camera, and the host window. All sections use sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use geodome_config::{load_config, config_to_toml};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_toml(&config).unwrap());
//! ```

pub mod colors;
pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

// Re-export core types for convenience
pub use schema::{DomeConfig, CONFIG_SCHEMA_VERSION};
pub use toml_writer::{config_to_toml, save_config_to_path};

use geodome_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<DomeConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_toml_contains_all_sections() {
        let config = DomeConfig::default();
        let text = config_to_toml(&config).unwrap();
        assert!(text.contains("[shape]"));
        assert!(text.contains("[[lights]]"));
        assert!(text.contains("[falloff]"));
        assert!(text.contains("[camera]"));
        assert!(text.contains("[window]"));
        assert!(text.contains("[logging]"));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = DomeConfig::default();
        let text = config_to_toml(&config).unwrap();
        let parsed: DomeConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.shape.detail, 4);
        assert_eq!(parsed.lights.len(), 4);
        assert_eq!(parsed.lights[0].color, "#d72638");
        assert_eq!(parsed.falloff.near, 2.5);
        assert!(validation::validate(&parsed).is_ok());
    }
}
