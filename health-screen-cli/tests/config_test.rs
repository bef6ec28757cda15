use std::path::PathBuf;

use health_screen_cli::config::Config;
use tempfile::TempDir;

#[test]
fn test_load_missing_file_returns_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.server.base_url, "http://localhost:3000");
    assert_eq!(config.training.trees, 100);
    assert_eq!(config.data.dir, PathBuf::from("data"));
}

#[test]
fn test_save_and_reload_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");

    let mut config = Config::default();
    config.training.trees = 250;
    config.training.seed = 7;
    config.server.base_url = "http://screening.internal:8080".to_string();
    config.save_to(&path).unwrap();

    let reloaded = Config::load_from(&path).unwrap();

    assert_eq!(reloaded.training.trees, 250);
    assert_eq!(reloaded.training.seed, 7);
    assert_eq!(reloaded.server.base_url, "http://screening.internal:8080");
}

#[test]
fn test_partial_file_fills_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[training]\ntrees = 10\n").unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.training.trees, 10);
    assert_eq!(config.training.seed, 42);
    assert_eq!(config.server.timeout_seconds, 30);
}

#[test]
fn test_save_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("dir").join("config.toml");

    Config::default().save_to(&path).unwrap();

    assert!(path.exists());
}
