//! Tests for TOML settings loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_mh_config.toml"));
    assert!(matches!(
        result,
        Err(mh_common::ConfigError::FileNotFound(_))
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[badge]
clear_after_ms = 2500

[store]
path = "/srv/mh/store.json"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.badge.clear_after_ms, 2500);
    assert_eq!(
        config.store.path.as_deref(),
        Some(Path::new("/srv/mh/store.json"))
    );
    // Defaults preserved
    assert_eq!(config.minimap.width, 15);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(
        result,
        Err(mh_common::ConfigError::ParseError(_))
    ));
}

#[test]
fn load_config_with_invalid_values_keeps_them() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[minimap]\nwidth = 500\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.minimap.width, 500);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mh").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.badge.clear_after_ms, 5000);
    assert!(config.walker.skip_foreign_namespaces);
}

#[test]
fn default_paths_share_a_directory() {
    if let (Ok(config), Ok(store)) = (default_config_path(), default_store_path()) {
        assert_eq!(config.parent(), store.parent());
        assert!(config.ends_with("mh/config.toml"));
    }
}
