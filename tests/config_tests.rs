// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use camera_exposure::{AppError, Config, ExposureBounds, FlashMode};
use std::path::PathBuf;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("camera-exposure-test-{}", std::process::id()))
        .join(name)
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(
        config.exposure_bounds,
        ExposureBounds::default(),
        "Fallback bounds should be used by default"
    );
    assert_eq!(config.flash_mode, FlashMode::Off, "Flash should start off");
    assert!(config.show_manual_controls);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_partial_json_uses_defaults() {
    let config = Config::from_json(r#"{ "flash_mode": "Auto" }"#).unwrap();
    assert_eq!(config.flash_mode, FlashMode::Auto);
    assert_eq!(config.exposure_bounds, ExposureBounds::default());
    assert_eq!(config.device_max_zoom, 10.0);
}

#[test]
fn test_config_partial_bounds() {
    let config = Config::from_json(r#"{ "exposure_bounds": { "max_iso": 6400.0 } }"#).unwrap();
    assert_eq!(config.exposure_bounds.max_iso, 6400.0);
    assert_eq!(config.exposure_bounds.min_iso, 50.0);
}

#[test]
fn test_config_rejects_inverted_bounds() {
    let json = r#"{ "exposure_bounds": { "min_iso": 800.0, "max_iso": 100.0 } }"#;
    let err = Config::from_json(json).unwrap_err();
    assert!(matches!(err, AppError::Config(_)), "got {:?}", err);
}

#[test]
fn test_config_rejects_malformed_json() {
    let err = Config::from_json("{ not json").unwrap_err();
    assert!(matches!(err, AppError::Config(_)), "got {:?}", err);
}

#[test]
fn test_config_rejects_small_zoom_limit() {
    assert!(Config::from_json(r#"{ "device_max_zoom": 0.5 }"#).is_err());
}

#[test]
fn test_config_missing_file_yields_defaults() {
    let path = scratch_path("does-not-exist.json");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_config_save_and_load() {
    let path = scratch_path("saved/config.json");
    let config = Config {
        flash_mode: FlashMode::On,
        device_max_zoom: 4.0,
        ..Config::default()
    };

    config.save_to(&path).unwrap();
    let loaded = Config::load_from(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, config);
}
