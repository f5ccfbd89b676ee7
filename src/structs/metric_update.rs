use serde::{Deserialize, Serialize};
use crate::errors::{DashError, DashResult};

/// Partial update for `PUT /analytics/data/{id}`; only set fields are sent as query parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl MetricUpdate {
    pub fn is_empty(&self) -> bool {
        self.metric_name.is_none() && self.value.is_none() && self.category.is_none()
    }

    pub fn validate(&self) -> DashResult<()> {
        if self.is_empty() {
            return Err(DashError::validation_error(
                "update",
                "",
                "at least one field must be set",
                Some("Pass --name, --value or --category"),
            ));
        }
        if let Some(name) = &self.metric_name {
            if name.trim().is_empty() {
                return Err(DashError::validation_error("metric_name", name, "must not be empty", None));
            }
        }
        if let Some(category) = &self.category {
            if category.trim().is_empty() {
                return Err(DashError::validation_error("category", category, "must not be empty", None));
            }
        }
        if let Some(value) = self.value {
            if !value.is_finite() {
                return Err(DashError::validation_error("value", &value.to_string(), "must be a finite number", None));
            }
        }
        Ok(())
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.metric_name {
            pairs.push(("metric_name", name.clone()));
        }
        if let Some(value) = self.value {
            pairs.push(("value", value.to_string()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        pairs
    }
}
