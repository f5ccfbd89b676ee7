pub mod analytics_api;
