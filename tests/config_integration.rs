//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use cgalerp::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("CGL_BLEND__FRAMES", "30");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.blend.frames, 30);
    std::env::remove_var("CGL_BLEND__FRAMES");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("CGL_BLEND__FRAMES");

    let cwd = std::env::current_dir().unwrap();
    println!(
        "config/default.toml exists: {}",
        cwd.join("config/default.toml").exists()
    );

    let config = AppConfig::load().unwrap();
    assert_eq!(config.pool.capacity, 5000);
    assert_eq!(config.demo.end.position, [10.0, 0.0, 0.0]);
}

#[test]
#[serial]
fn test_log_level_override() {
    std::env::set_var("CGL_DEBUG__LOG_LEVEL", "debug");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.debug.log_level, "debug");
    std::env::remove_var("CGL_DEBUG__LOG_LEVEL");
}

#[test]
#[serial]
fn test_missing_directory_falls_back_to_defaults() {
    std::env::remove_var("CGL_POOL__CAPACITY");
    let config = AppConfig::load_from("does_not_exist").unwrap();
    assert_eq!(config.pool.capacity, 5000);
}
