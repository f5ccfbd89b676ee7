use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DashboardConfig {
    /// How many records one summary fetch asks the backend for.
    #[serde(default = "ConfigHelper::default_fetch_limit")]
    pub fetch_limit: usize,

    #[serde(default = "ConfigHelper::default_recent_limit")]
    pub recent_limit: usize,

    #[serde(default = "ConfigHelper::default_top_categories")]
    pub top_categories: usize,

    /// Lower bound of the bar chart scale.
    #[serde(default = "ConfigHelper::default_scale_floor")]
    pub scale_floor: f64,

    #[serde(default = "ConfigHelper::default_port")]
    pub port: u16,

    #[serde(default = "ConfigHelper::default_open_browser")]
    pub open_browser: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            fetch_limit: ConfigHelper::default_fetch_limit(),
            recent_limit: ConfigHelper::default_recent_limit(),
            top_categories: ConfigHelper::default_top_categories(),
            scale_floor: ConfigHelper::default_scale_floor(),
            port: ConfigHelper::default_port(),
            open_browser: ConfigHelper::default_open_browser(),
        }
    }
}
