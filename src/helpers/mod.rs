pub mod config_helper;
pub mod display_helper;
pub mod response_helper;
pub mod session_store;
