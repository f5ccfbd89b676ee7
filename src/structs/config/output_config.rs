use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_verbose")]
    pub verbose: bool,

    #[serde(default = "ConfigHelper::default_label_width")]
    pub label_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: ConfigHelper::default_verbose(),
            label_width: ConfigHelper::default_label_width(),
        }
    }
}
