use std::sync::Arc;
use crate::errors::DashResult;
use crate::services::metrics_aggregator::{AggregationOptions, MetricsAggregator};
use crate::structs::config::dashboard_config::DashboardConfig;
use crate::structs::dashboard_summary::DashboardSummary;
use crate::structs::metric_record::MetricRecord;
use crate::structs::new_metric::NewMetric;
use crate::traits::analytics_api::AnalyticsApi;

/// Fetches records through an [`AnalyticsApi`] and aggregates them for display.
#[derive(Clone)]
pub struct DashboardService {
    api: Arc<dyn AnalyticsApi>,
    fetch_limit: usize,
    options: AggregationOptions,
}

impl DashboardService {
    pub fn new(api: Arc<dyn AnalyticsApi>, config: &DashboardConfig) -> Self {
        Self {
            api,
            fetch_limit: config.fetch_limit,
            options: AggregationOptions {
                scale_floor: config.scale_floor,
                top_limit: config.top_categories,
                recent_limit: config.recent_limit,
            },
        }
    }

    pub fn api(&self) -> Arc<dyn AnalyticsApi> {
        Arc::clone(&self.api)
    }

    /// One fetch of up to `fetch_limit` records; every figure is derived from that set.
    pub async fn load_summary(&self) -> DashResult<DashboardSummary> {
        let records = self.api.list_metrics(0, self.fetch_limit, None).await?;
        log::debug!("Aggregating {} records", records.len());

        if records.len() == self.fetch_limit {
            log::warn!(
                "⚠️ Fetched the full window of {} records; totals may not cover older data",
                self.fetch_limit
            );
        }

        Ok(MetricsAggregator::summarize(&records, &self.options))
    }

    pub async fn load_records(&self, skip: usize, limit: usize, category: Option<String>) -> DashResult<Vec<MetricRecord>> {
        self.api.list_metrics(skip, limit, category).await
    }

    pub async fn seed_sample_data(&self) -> DashResult<usize> {
        self.api.create_bulk(Self::sample_metrics()).await
    }

    pub fn sample_metrics() -> Vec<NewMetric> {
        vec![
            NewMetric::new("CPU Usage", 45.0, "System"),
            NewMetric::new("Memory", 72.0, "System"),
            NewMetric::new("Requests", 850.0, "App"),
            NewMetric::new("DB Latency", 12.0, "DB"),
            NewMetric::new("Cache Hit", 94.0, "Cache"),
        ]
    }
}
