use std::sync::Arc;
use async_trait::async_trait;
use serde_json::Value;
use warp::http::StatusCode;
use warp::Filter;
use pulsedash::errors::{DashError, DashResult};
use pulsedash::services::dashboard_service::DashboardService;
use pulsedash::structs::api_message::ApiMessage;
use pulsedash::structs::config::dashboard_config::DashboardConfig;
use pulsedash::structs::metric_record::MetricRecord;
use pulsedash::structs::metric_update::MetricUpdate;
use pulsedash::structs::new_metric::NewMetric;
use pulsedash::traits::analytics_api::AnalyticsApi;
use pulsedash::ui::dashboard_server::DashboardServer;

/// In-memory backend; `None` simulates a rejected token.
struct StaticApi {
    records: Option<Vec<MetricRecord>>,
}

#[async_trait]
impl AnalyticsApi for StaticApi {
    async fn list_metrics(&self, skip: usize, limit: usize, category: Option<String>) -> DashResult<Vec<MetricRecord>> {
        let records = self.records.clone().ok_or_else(|| DashError::auth_error("Could not validate credentials"))?;
        Ok(records
            .into_iter()
            .filter(|r| category.as_ref().map_or(true, |c| &r.category == c))
            .skip(skip)
            .take(limit)
            .collect())
    }

    async fn get_metric(&self, id: i64) -> DashResult<MetricRecord> {
        Err(DashError::not_found("Metric", &id.to_string()))
    }

    async fn create_metric(&self, metric: NewMetric) -> DashResult<MetricRecord> {
        Ok(MetricRecord::new(Some(1), &metric.metric_name, metric.value, &metric.category))
    }

    async fn create_bulk(&self, metrics: Vec<NewMetric>) -> DashResult<usize> {
        Ok(metrics.len())
    }

    async fn update_metric(&self, _id: i64, _update: MetricUpdate) -> DashResult<ApiMessage> {
        Ok(ApiMessage::default())
    }

    async fn delete_metric(&self, _id: i64) -> DashResult<ApiMessage> {
        Ok(ApiMessage::default())
    }
}

fn service(records: Option<Vec<MetricRecord>>) -> DashboardService {
    let mut config = DashboardConfig::default();
    config.recent_limit = 2;
    DashboardService::new(Arc::new(StaticApi { records }), &config)
}

fn sample() -> Vec<MetricRecord> {
    vec![
        MetricRecord::new(Some(3), "Requests", 850.0, "App"),
        MetricRecord::new(Some(1), "CPU Usage", 45.0, "System"),
        MetricRecord::new(Some(2), "Memory", 72.0, "System"),
    ]
}

#[tokio::test]
async fn test_summary_endpoint_returns_aggregates() {
    let routes = DashboardServer::routes(service(Some(sample())), 8);

    let response = warp::test::request().path("/api/summary").reply(&routes).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["total_records"], 3);
    assert_eq!(body["unique_categories"], 2);
    assert_eq!(body["max_value"], 850.0);
    assert_eq!(body["top_categories"][0]["name"], "System");
    assert_eq!(body["recent"][0]["id"], 2);
    assert_eq!(body["recent"][1]["id"], 3);
}

#[tokio::test]
async fn test_records_endpoint_filters_by_category() {
    let routes = DashboardServer::routes(service(Some(sample())), 8);

    let response = warp::test::request()
        .path("/api/records?category=System&limit=1")
        .reply(&routes)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Vec<MetricRecord> = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].metric_name, "CPU Usage");
}

#[tokio::test]
async fn test_backend_auth_failure_surfaces_as_401() {
    let routes = DashboardServer::routes(service(None), 8);

    let response = warp::test::request().path("/api/summary").reply(&routes).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert!(body["error"].as_str().unwrap().contains("Could not validate credentials"));
}

#[tokio::test]
async fn test_index_page_embeds_label_width() {
    let routes = DashboardServer::routes(service(Some(Vec::new())), 6);

    let response = warp::test::request().path("/").reply(&routes).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = String::from_utf8(response.body().to_vec()).unwrap();
    assert!(html.contains("const LABEL_WIDTH = 6;"));
    assert!(!html.contains("{{LABEL_WIDTH}}"));
}

#[tokio::test]
async fn test_null_backend_value_stays_visible_on_dashboard() {
    let missing: MetricRecord =
        serde_json::from_str(r#"{"id": 2, "metric_name": "Broken", "value": null, "category": "App"}"#).unwrap();
    let records = vec![MetricRecord::new(Some(1), "CPU Usage", 10.0, "System"), missing];
    let routes = DashboardServer::routes(service(Some(records)), 8);

    let response = warp::test::request().path("/api/summary").reply(&routes).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["total_records"], 2);
    assert!(body["average_value"].is_null());
    assert!(body["max_value"].is_null());
    assert!(body["recent"][1]["value"].is_null());

    let page = warp::test::request().path("/").reply(&routes).await;
    let html = String::from_utf8(page.body().to_vec()).unwrap();
    assert!(html.contains("value === null ? 'NaN'"));
    assert!(html.contains("formatNumber(summary.average_value)"));
    assert!(!html.contains("Math.round(summary.average_value)"));
}

#[tokio::test]
async fn test_cors_accepts_only_the_bound_port() {
    let routes = DashboardServer::routes(service(Some(sample())), 8).with(DashboardServer::cors(8080));

    let response = warp::test::request()
        .path("/api/summary")
        .header("origin", "http://localhost:8080")
        .reply(&routes)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:8080"
    );

    let response = warp::test::request()
        .path("/api/summary")
        .header("origin", "http://localhost")
        .reply(&routes)
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
