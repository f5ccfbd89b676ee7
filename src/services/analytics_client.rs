use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::timeout_duration;
use crate::errors::DashResult;
use crate::helpers::response_helper::ResponseHelper;
use crate::structs::api_message::ApiMessage;
use crate::structs::config::api_config::ApiConfig;
use crate::structs::metric_record::MetricRecord;
use crate::structs::metric_update::MetricUpdate;
use crate::structs::new_metric::NewMetric;
use crate::traits::analytics_api::AnalyticsApi;

const RESOURCE: &str = "Metric";

/// reqwest client for the `/analytics/data` endpoints.
pub struct AnalyticsClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl AnalyticsClient {
    pub fn new(config: &ApiConfig, access_token: String) -> DashResult<Self> {
        let client = Client::builder()
            .timeout(timeout_duration(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url(),
            access_token,
        })
    }

    fn data_url(&self) -> String {
        format!("{}/analytics/data", self.base_url)
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}/analytics/data/{}", self.base_url, id)
    }
}

#[async_trait]
impl AnalyticsApi for AnalyticsClient {

    async fn list_metrics(&self, skip: usize, limit: usize, category: Option<String>) -> DashResult<Vec<MetricRecord>> {
        let mut query = vec![("skip", skip.to_string()), ("limit", limit.to_string())];
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            query.push(("category", category));
        }

        log::debug!("GET {} {:?}", self.data_url(), query);
        let response = self.client
            .get(self.data_url())
            .bearer_auth(&self.access_token)
            .query(&query)
            .send()
            .await?;

        ResponseHelper::json(response, "listing metrics", None).await
    }

    async fn get_metric(&self, id: i64) -> DashResult<MetricRecord> {
        let response = self.client
            .get(self.record_url(id))
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        ResponseHelper::json(response, "fetching metric", Some((RESOURCE, id.to_string()))).await
    }

    async fn create_metric(&self, metric: NewMetric) -> DashResult<MetricRecord> {
        metric.validate()?;

        let response = self.client
            .post(self.data_url())
            .bearer_auth(&self.access_token)
            .json(&metric)
            .send()
            .await?;

        ResponseHelper::json(response, "creating metric", None).await
    }

    async fn create_bulk(&self, metrics: Vec<NewMetric>) -> DashResult<usize> {
        for metric in &metrics {
            metric.validate()?;
        }

        let response = self.client
            .post(format!("{}/bulk", self.data_url()))
            .bearer_auth(&self.access_token)
            .json(&metrics)
            .send()
            .await?;

        let message: ApiMessage = ResponseHelper::json(response, "bulk inserting metrics", None).await?;
        log::debug!("Bulk insert: {}", message.message);
        Ok(message.count.unwrap_or(metrics.len()))
    }

    async fn update_metric(&self, id: i64, update: MetricUpdate) -> DashResult<ApiMessage> {
        update.validate()?;

        let response = self.client
            .put(self.record_url(id))
            .bearer_auth(&self.access_token)
            .query(&update.query_pairs())
            .send()
            .await?;

        ResponseHelper::json(response, "updating metric", Some((RESOURCE, id.to_string()))).await
    }

    async fn delete_metric(&self, id: i64) -> DashResult<ApiMessage> {
        let response = self.client
            .delete(self.record_url(id))
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        ResponseHelper::json(response, "deleting metric", Some((RESOURCE, id.to_string()))).await
    }
}
