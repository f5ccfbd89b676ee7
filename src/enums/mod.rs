pub mod commands;
pub mod user_role;
