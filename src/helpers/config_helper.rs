use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_DASHBOARD_PORT, DEFAULT_FETCH_LIMIT, DEFAULT_LABEL_WIDTH,
    DEFAULT_RECENT_LIMIT, DEFAULT_SCALE_FLOOR, DEFAULT_TIMEOUT_SECS, DEFAULT_TOP_CATEGORIES,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    pub fn default_fetch_limit() -> usize {
        DEFAULT_FETCH_LIMIT
    }

    pub fn default_recent_limit() -> usize {
        DEFAULT_RECENT_LIMIT
    }

    pub fn default_top_categories() -> usize {
        DEFAULT_TOP_CATEGORIES
    }

    pub fn default_scale_floor() -> f64 {
        DEFAULT_SCALE_FLOOR
    }

    pub fn default_port() -> u16 {
        DEFAULT_DASHBOARD_PORT
    }

    pub fn default_open_browser() -> bool {
        true
    }

    pub fn default_verbose() -> bool {
        false
    }

    pub fn default_label_width() -> usize {
        DEFAULT_LABEL_WIDTH
    }
}
