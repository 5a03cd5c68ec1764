//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use geodome_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_geodome_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
seed = 7

[shape]
detail = 1
face_scale = 0.5

[falloff]
default_color = "#101010"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.shape.detail, 1);
    assert_eq!(config.shape.face_scale, 0.5);
    assert_eq!(config.falloff.default_color, "#101010");
    // Defaults preserved
    assert_eq!(config.shape.radius, 3.0);
    assert_eq!(config.falloff.near, 2.5);
    assert_eq!(config.lights.len(), 4);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_wrong_type_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[shape]\ndetail = \"four\"\n").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[falloff]
near = 3.0
far = 1.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.falloff.near, 3.0);
    assert!(crate::validation::validate(&config).is_err());
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("geodome").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.shape.detail, 4);
    assert_eq!(config.lights.len(), 4);
    assert_eq!(config.lights[3].color, "#016fb9");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::DomeConfig;

    let content = default_config_toml();
    let config: DomeConfig = toml::from_str(&content).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
    assert_eq!(config.lights, crate::schema::default_lights());
}

#[test]
fn default_config_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("geodome"));
        assert!(path_str.ends_with("config.toml"));
    }
}
