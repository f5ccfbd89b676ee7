pub mod api_message;
pub mod auth_token;
pub mod category_stat;
pub mod cli;
pub mod config;
pub mod dashboard_summary;
pub mod metric_record;
pub mod metric_update;
pub mod new_metric;
pub mod register_request;
pub mod session;
pub mod user;
