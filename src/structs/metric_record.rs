use serde::{Deserialize, Deserializer, Serialize};

/// One stored analytics data point as returned by `GET /analytics/data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub metric_name: String,

    /// Missing or `null` values become NaN so they surface in averages.
    #[serde(default = "nan", deserialize_with = "value_or_nan")]
    pub value: f64,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub recorded_at: Option<String>,
}

impl MetricRecord {
    pub fn new(id: Option<i64>, metric_name: &str, value: f64, category: &str) -> Self {
        Self {
            id,
            metric_name: metric_name.to_string(),
            value,
            category: category.to_string(),
            recorded_at: None,
        }
    }

    pub fn id_or_zero(&self) -> i64 {
        self.id.unwrap_or(0)
    }
}

fn nan() -> f64 {
    f64::NAN
}

fn value_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
