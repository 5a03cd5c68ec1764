//! Write DomeConfig to TOML.
//!
//! Supports atomic writes (write to `.tmp`, then rename) to prevent
//! corruption if the process crashes mid-write.

use std::path::Path;

use geodome_common::ConfigError;

use crate::schema::DomeConfig;

/// Serialize a config to a pretty-printed TOML string.
pub fn config_to_toml(config: &DomeConfig) -> Result<String, ConfigError> {
    toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))
}

/// Write config to a specific path.
///
/// Creates parent directories if they don't exist. Uses atomic write
/// (write to `.tmp` file, then rename) to prevent partial writes.
pub fn save_config_to_path(config: &DomeConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_str = config_to_toml(config)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, &toml_str).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write config to {}: {e}",
            tmp_path.display()
        ))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Rename failed, fall back to a direct write (Windows)
        tracing::warn!("atomic rename failed ({}), falling back to direct write", e);
        std::fs::write(path, &toml_str).map_err(|e2| {
            ConfigError::ParseError(format!(
                "failed to write config to {}: {e2}",
                path.display()
            ))
        })?;
    }

    tracing::debug!(path = %path.display(), "Config saved to disk");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_config_writes_valid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = DomeConfig::default();
        save_config_to_path(&config, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: DomeConfig = toml::from_str(&content).unwrap();
        assert_eq!(parsed.shape.detail, config.shape.detail);
        assert_eq!(parsed.lights, config.lights);
    }

    #[test]
    fn save_config_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("dir").join("config.toml");

        save_config_to_path(&DomeConfig::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_config_leaves_no_tmp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        save_config_to_path(&DomeConfig::default(), &path).unwrap();
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn save_config_preserves_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = DomeConfig::default();
        config.seed = Some(99);
        config.shape.max_shift = 0.0;
        config.camera.start_phase = Some(12.5);
        save_config_to_path(&config, &path).unwrap();

        let parsed: DomeConfig =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.seed, Some(99));
        assert_eq!(parsed.shape.max_shift, 0.0);
        assert_eq!(parsed.camera.start_phase, Some(12.5));
    }
}
