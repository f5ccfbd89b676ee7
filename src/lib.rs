//! Command-line client and local dashboard for the analytics metrics backend.
//!
//! The aggregation core lives in [`services::metrics_aggregator`]; everything
//! else binds CLI commands to the backend's REST endpoints.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;
