use async_trait::async_trait;
use crate::errors::DashResult;
use crate::structs::api_message::ApiMessage;
use crate::structs::metric_record::MetricRecord;
use crate::structs::metric_update::MetricUpdate;
use crate::structs::new_metric::NewMetric;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsApi: Send + Sync {

    async fn list_metrics(&self, skip: usize, limit: usize, category: Option<String>) -> DashResult<Vec<MetricRecord>>;

    async fn get_metric(&self, id: i64) -> DashResult<MetricRecord>;

    async fn create_metric(&self, metric: NewMetric) -> DashResult<MetricRecord>;

    /// Returns how many records the backend stored.
    async fn create_bulk(&self, metrics: Vec<NewMetric>) -> DashResult<usize>;

    async fn update_metric(&self, id: i64, update: MetricUpdate) -> DashResult<ApiMessage>;

    async fn delete_metric(&self, id: i64) -> DashResult<ApiMessage>;
}
