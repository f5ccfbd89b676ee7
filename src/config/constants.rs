use std::time::Duration;

pub const APP_DIR_NAME: &str = "pulsedash";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const SESSION_FILE_NAME: &str = "session.toml";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_DASHBOARD_PORT: u16 = 8080;
pub const DEFAULT_LIST_LIMIT: usize = 100;
pub const DEFAULT_FETCH_LIMIT: usize = 500;
pub const DEFAULT_RECENT_LIMIT: usize = 10;
pub const DEFAULT_TOP_CATEGORIES: usize = 5;
pub const DEFAULT_SCALE_FLOOR: f64 = 100.0;
pub const DEFAULT_LABEL_WIDTH: usize = 8;

pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;
pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
