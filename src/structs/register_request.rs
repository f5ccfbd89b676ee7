use serde::{Deserialize, Serialize};
use crate::enums::user_role::UserRole;
use crate::errors::{DashError, DashResult};

const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: UserRole,
}

impl RegisterRequest {
    pub fn validate(&self) -> DashResult<()> {
        if !self.email.contains('@') {
            return Err(DashError::validation_error("email", &self.email, "must be an email address", None));
        }
        if self.password.len() < MIN_PASSWORD_LENGTH {
            return Err(DashError::validation_error(
                "password",
                "******",
                "must be at least 6 characters",
                None,
            ));
        }
        if self.full_name.trim().is_empty() {
            return Err(DashError::validation_error("full_name", &self.full_name, "must not be empty", None));
        }
        Ok(())
    }
}
