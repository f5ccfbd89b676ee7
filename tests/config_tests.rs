use std::fs;
use tempfile::TempDir;
use pulsedash::config::config_manager::ConfigManager;
use pulsedash::errors::DashError;
use pulsedash::structs::config::config::Config;

#[test]
fn test_partial_config_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[api]\nbase_url = \"https://analytics.internal\"\n\n[dashboard]\nrecent_limit = 20\n").unwrap();

    let config = ConfigManager::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://analytics.internal");
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.dashboard.recent_limit, 20);
    assert_eq!(config.dashboard.fetch_limit, 500);
    assert_eq!(config.dashboard.top_categories, 5);
    assert_eq!(config.dashboard.scale_floor, 100.0);
    assert_eq!(config.output.label_width, 8);
    assert!(ConfigManager::validate_config(&config).is_ok());
}

#[test]
fn test_sample_config_is_written_once() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("pulsedash");

    let path = ConfigManager::create_sample_config_in(&dir).unwrap();
    let config = ConfigManager::load_from(&path).unwrap();
    assert_eq!(config, Config::default());

    let second = ConfigManager::create_sample_config_in(&dir);
    assert!(matches!(second, Err(DashError::ConfigurationError { .. })));
}

#[test]
fn test_broken_config_reports_file_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[dashboard]\nfetch_limit = \"lots\"\n").unwrap();

    match ConfigManager::load_from(&path) {
        Err(DashError::ConfigurationFileError { path: reported, .. }) => {
            assert!(reported.ends_with("config.toml"));
        }
        other => panic!("expected configuration file error, got {:?}", other),
    }
}

#[test]
fn test_validation_rejects_zero_limits_and_bad_urls() {
    let mut config = Config::default();
    config.api.base_url = "ftp://analytics".to_string();
    config.api.timeout_secs = 0;
    config.dashboard.top_categories = 0;
    config.dashboard.scale_floor = -1.0;

    let issues = ConfigManager::validate_config(&config).unwrap_err();
    assert_eq!(issues.len(), 4);
    assert!(issues.iter().any(|issue| issue.contains("dashboard.top_categories")));
}
