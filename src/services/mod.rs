pub mod analytics_client;
pub mod auth_client;
pub mod dashboard_service;
pub mod metrics_aggregator;
