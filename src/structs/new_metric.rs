use serde::{Deserialize, Serialize};
use crate::errors::{DashError, DashResult};

/// Payload for `POST /analytics/data` and each item of the bulk insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMetric {
    pub metric_name: String,
    pub value: f64,
    pub category: String,
}

impl NewMetric {
    pub fn new(metric_name: &str, value: f64, category: &str) -> Self {
        Self {
            metric_name: metric_name.to_string(),
            value,
            category: category.to_string(),
        }
    }

    pub fn validate(&self) -> DashResult<()> {
        if self.metric_name.trim().is_empty() {
            return Err(DashError::validation_error("metric_name", &self.metric_name, "must not be empty", Some("Pass --name <metric>")));
        }
        if self.category.trim().is_empty() {
            return Err(DashError::validation_error("category", &self.category, "must not be empty", Some("Pass --category <label>")));
        }
        if !self.value.is_finite() {
            return Err(DashError::validation_error("value", &self.value.to_string(), "must be a finite number", None));
        }
        Ok(())
    }
}
