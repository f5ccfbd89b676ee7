use serde::{Deserialize, Serialize};
use crate::structs::category_stat::CategoryStat;
use crate::structs::metric_record::MetricRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_records: usize,
    pub unique_categories: usize,
    pub average_value: f64,
    /// Chart scale: the largest value, never below the configured floor.
    pub max_value: f64,
    pub top_categories: Vec<CategoryStat>,
    /// Ascending id order, oldest of the window first.
    pub recent: Vec<MetricRecord>,
}

impl DashboardSummary {
    pub fn is_empty(&self) -> bool {
        self.total_records == 0
    }

    pub fn storage_status(&self) -> &'static str {
        if self.is_empty() { "READY" } else { "ACTIVE" }
    }
}
