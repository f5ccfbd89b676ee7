pub mod animated_logger;
pub mod dashboard_logger;
