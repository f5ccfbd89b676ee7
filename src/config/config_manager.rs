use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{DashError, DashResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Pulsedash Configuration

[api]
# Analytics backend serving /token, /register, /users and /analytics/data
base_url = "http://localhost:8000"

# Per-request timeout in seconds
timeout_secs = 30

[dashboard]
# Records fetched per summary; aggregation runs over this window
fetch_limit = 500

# Bars in the recent activity chart
recent_limit = 10

# Categories listed in the breakdown
top_categories = 5

# The chart scale never shrinks below this value
scale_floor = 100.0

# Local web dashboard
port = 8080
open_browser = true

[output]
verbose = false

# Characters of the metric name shown under each bar
label_width = 8
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_dir() -> DashResult<PathBuf> {
        dirs::home_dir()
            .map(|d| d.join(APP_DIR_NAME))
            .ok_or_else(|| DashError::system_error("locating home directory", "home directory is not set"))
    }

    pub fn config_path() -> DashResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    pub fn load() -> DashResult<Config> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            return Self::load_from(&config_path);
        }

        log::debug!("No config at {}, using defaults", config_path.display());
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> DashResult<Config> {
        log::debug!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| DashError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| DashError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    pub fn create_sample_config() -> DashResult<PathBuf> {
        Self::create_sample_config_in(&Self::config_dir()?)
    }

    pub fn create_sample_config_in(dir: &Path) -> DashResult<PathBuf> {
        let config_file_path = dir.join(CONFIG_FILE_NAME);
        if config_file_path.exists() {
            return Err(DashError::config_error(
                "configuration file already exists",
                None,
                Some(&format!("Edit {} or remove it first", config_file_path.display())),
            ));
        }

        fs::create_dir_all(dir)?;
        fs::write(&config_file_path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let base_url = &config.api.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            errors.push(format!("api.base_url must start with http:// or https://: {}", base_url));
        }

        if config.api.timeout_secs == 0 {
            errors.push("api.timeout_secs must be greater than 0".to_string());
        }

        let limits = [
            ("dashboard.fetch_limit", config.dashboard.fetch_limit),
            ("dashboard.recent_limit", config.dashboard.recent_limit),
            ("dashboard.top_categories", config.dashboard.top_categories),
            ("output.label_width", config.output.label_width),
        ];
        for (name, value) in limits {
            if value == 0 {
                errors.push(format!("{} must be greater than 0", name));
            }
        }

        let floor = config.dashboard.scale_floor;
        if !floor.is_finite() || floor < 0.0 {
            errors.push(format!("dashboard.scale_floor must be a finite, non-negative number: {}", floor));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses_to_defaults() {
        let config: Config = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_validate_collects_every_problem() {
        let mut config = Config::default();
        config.api.base_url = "localhost:8000".to_string();
        config.dashboard.fetch_limit = 0;
        config.dashboard.scale_floor = f64::NAN;

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("base_url"));
    }
}
